//! Registry error types.
//!
//! One error enum covers the registries and the calldata helpers: lookups
//! of undeclared structs/events, violations of the array/length pairing
//! convention, and the flattening depth bound. ABI parse failures that
//! surface during lazy registry work propagate unchanged through the
//! [`RegistryError::Abi`] variant.

use starknet_testkit_types::{AbiError, CairoType, Felt};

/// Convenience alias for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;

/// Errors raised by the struct and event registries and the calldata
/// helpers built on them.
#[derive(Debug)]
pub enum RegistryError {
    /// No struct with this name is declared in the ABI.
    UnknownStruct {
        /// The requested struct name
        name: String,
    },

    /// No event with this name is declared in the ABI.
    UnknownEvent {
        /// The requested event name
        name: String,
    },

    /// No declared event hashes to this selector.
    UnknownSelector {
        /// The requested selector
        selector: Felt,
    },

    /// An array argument is not immediately preceded by its length
    /// argument.
    ExpectedLengthArgument {
        /// The array argument name
        array: String,
        /// The required length argument name, `<array>_len`
        expected: String,
        /// The argument actually found before the array, if any
        found: Option<String>,
    },

    /// The length argument paired with an array is not a felt.
    LengthArgumentNotFelt {
        /// The length argument name
        length: String,
        /// The type it was declared with
        got: CairoType,
    },

    /// A record was instantiated with the wrong number of values.
    FieldCountMismatch {
        /// The record type name
        record: String,
        /// Number of fields in the schema
        expected: usize,
        /// Number of values supplied
        got: usize,
    },

    /// Value nesting exceeded the flattening depth budget.
    MaxDepthExceeded {
        /// The top-level argument being flattened
        argument: String,
    },

    /// An ABI parse failure surfaced during lazy registry work.
    Abi(AbiError),
}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryError::UnknownStruct { name } => {
                write!(f, "Struct {} is not defined.", name)
            }
            RegistryError::UnknownEvent { name } => {
                write!(f, "Event {} is not defined.", name)
            }
            RegistryError::UnknownSelector { selector } => {
                write!(f, "Event with selector {:#x} is not defined.", selector)
            }
            RegistryError::ExpectedLengthArgument {
                array,
                expected,
                found: _,
            } => {
                write!(
                    f,
                    "Array size argument {} must appear right before {}.",
                    expected, array
                )
            }
            RegistryError::LengthArgumentNotFelt { length, got } => {
                write!(
                    f,
                    "Array size entry {} expected to be type felt. Got: {}.",
                    length, got
                )
            }
            RegistryError::FieldCountMismatch {
                record,
                expected,
                got,
            } => {
                write!(
                    f,
                    "Record {} expects {} values, got {}.",
                    record, expected, got
                )
            }
            RegistryError::MaxDepthExceeded { argument } => {
                write!(
                    f,
                    "Exceeded maximum depth while flattening argument {}.",
                    argument
                )
            }
            RegistryError::Abi(err) => {
                write!(f, "{}", err)
            }
        }
    }
}

impl std::error::Error for RegistryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RegistryError::Abi(err) => Some(err),
            _ => None,
        }
    }
}

impl From<AbiError> for RegistryError {
    fn from(err: AbiError) -> Self {
        RegistryError::Abi(err)
    }
}
