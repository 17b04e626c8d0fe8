//! Record schemas and instances.
//!
//! A [`RecordType`] is the ordered field schema shared by every instance of
//! a contract struct or event payload; a [`Record`] is one instance, its
//! values labeled by position. The registries hand out schemas behind
//! [`Arc`] so every lookup of the same name observes the same schema.

use std::sync::Arc;

use crate::errors::{RegistryError, Result};
use crate::value::CallValue;

/// An ordered, immutable field schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordType {
    name: String,
    fields: Vec<String>,
}

impl RecordType {
    /// Create a schema from its field names, in declaration order.
    pub fn new(name: impl Into<String>, fields: Vec<String>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    /// The schema name: the struct or event it was built for.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Field names in declaration order.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Number of fields.
    pub fn arity(&self) -> usize {
        self.fields.len()
    }

    /// Position of a field by name.
    pub fn position(&self, field: &str) -> Option<usize> {
        self.fields.iter().position(|name| name == field)
    }
}

/// An instance of a [`RecordType`]: ordered values labeled by the schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    record_type: Arc<RecordType>,
    values: Vec<CallValue>,
}

impl Record {
    /// Build an instance of a schema from values in field order.
    ///
    /// The value count must match the schema arity.
    pub fn new(record_type: &Arc<RecordType>, values: Vec<CallValue>) -> Result<Self> {
        if values.len() != record_type.arity() {
            return Err(RegistryError::FieldCountMismatch {
                record: record_type.name().to_string(),
                expected: record_type.arity(),
                got: values.len(),
            });
        }
        Ok(Self {
            record_type: Arc::clone(record_type),
            values,
        })
    }

    /// The schema this instance was built from.
    pub fn record_type(&self) -> &Arc<RecordType> {
        &self.record_type
    }

    /// Values in field order.
    pub fn values(&self) -> &[CallValue] {
        &self.values
    }

    /// Get a value by field name.
    pub fn get(&self, field: &str) -> Option<&CallValue> {
        self.record_type
            .position(field)
            .map(|index| &self.values[index])
    }
}
