//! Runtime argument values.
//!
//! [`CallValue`] is the runtime shape of a contract call argument before it
//! is flattened into felt calldata: a single felt, an ordered sequence for
//! `T*` arguments, or a record instance of a contract struct.

use starknet_testkit_types::Felt;

use crate::record::Record;

/// A runtime argument value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallValue {
    /// A single field element.
    Felt(Felt),
    /// An ordered sequence, the runtime shape of array arguments.
    Array(Vec<CallValue>),
    /// A struct or event payload instance.
    Record(Record),
}

impl From<Felt> for CallValue {
    fn from(value: Felt) -> Self {
        CallValue::Felt(value)
    }
}

impl From<u64> for CallValue {
    fn from(value: u64) -> Self {
        CallValue::Felt(Felt::from(value))
    }
}

impl From<u128> for CallValue {
    fn from(value: u128) -> Self {
        CallValue::Felt(Felt::from(value))
    }
}

impl From<Vec<CallValue>> for CallValue {
    fn from(values: Vec<CallValue>) -> Self {
        CallValue::Array(values)
    }
}

impl From<Record> for CallValue {
    fn from(record: Record) -> Self {
        CallValue::Record(record)
    }
}
