//! Struct registry.
//!
//! [`StructRegistry`] indexes the `struct` entries of a contract ABI at
//! construction, parsing every member type up front so malformed entries
//! fail early. The record schemas derived from the definitions are built
//! on first request and cached, so callers looking up the same struct
//! twice share one schema.

use std::collections::HashMap;
use std::sync::Arc;

use starknet_testkit_types::{ContractAbi, StructDefinition};
use tracing::debug;

use crate::errors::{RegistryError, Result};
use crate::record::RecordType;

/// Registry of the struct definitions declared by a contract ABI.
#[derive(Debug)]
pub struct StructRegistry {
    /// Struct definitions by declared name
    definitions: HashMap<String, StructDefinition>,
    /// Cached record schemas by struct name
    records: HashMap<String, Arc<RecordType>>,
}

impl StructRegistry {
    /// Index every `struct` entry of the ABI, parsing member types.
    pub fn new(abi: &ContractAbi) -> Result<Self> {
        let mut definitions = HashMap::new();
        for entry in abi.structs() {
            let definition = StructDefinition::from_abi_entry(entry)?;
            definitions.insert(entry.name.clone(), definition);
        }
        debug!(structs = definitions.len(), "indexed contract structs");
        Ok(Self {
            definitions,
            records: HashMap::new(),
        })
    }

    /// Whether a struct with this name is declared.
    pub fn contains(&self, name: &str) -> bool {
        self.definitions.contains_key(name)
    }

    /// Declared struct names, in no particular order.
    pub fn struct_names(&self) -> impl Iterator<Item = &str> {
        self.definitions.keys().map(String::as_str)
    }

    /// Look up the parsed definition of a declared struct.
    pub fn get_struct_definition(&self, name: &str) -> Result<&StructDefinition> {
        self.definitions
            .get(name)
            .ok_or_else(|| RegistryError::UnknownStruct {
                name: name.to_string(),
            })
    }

    /// Get or build the record schema for a declared struct.
    ///
    /// The schema's fields are the member names in declaration order. It
    /// is built on first request; every later request returns the same
    /// shared schema.
    pub fn get_contract_struct(&mut self, name: &str) -> Result<Arc<RecordType>> {
        if let Some(record) = self.records.get(name) {
            return Ok(Arc::clone(record));
        }

        let definition =
            self.definitions
                .get(name)
                .ok_or_else(|| RegistryError::UnknownStruct {
                    name: name.to_string(),
                })?;
        let fields: Vec<String> = definition
            .members
            .iter()
            .map(|member| member.name.clone())
            .collect();
        let record = Arc::new(RecordType::new(definition.name.clone(), fields));
        debug!(name = %name, fields = record.arity(), "built struct record schema");

        self.records.insert(name.to_string(), Arc::clone(&record));
        Ok(record)
    }
}
