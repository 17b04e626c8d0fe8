//! Event registry.
//!
//! [`EventRegistry`] indexes the `event` entries of a contract ABI by name
//! and, through the selector hash, by the 250-bit selector emitted on the
//! wire. Lookups accept either form via [`EventIdentifier`]. The record
//! schema and resolved argument types of an event are built on first
//! lookup from its `keys` and `data` descriptors and cached under the
//! declared name, so both identifier forms observe the same schema.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use starknet_testkit_types::{
    get_selector_from_name, CairoType, ContractAbi, EventAbiEntry, Felt, TypedParameter,
};
use tracing::debug;

use crate::arguments::resolve_arguments;
use crate::errors::{RegistryError, Result};
use crate::record::RecordType;

/// Either form of an event lookup key: the declared name or its selector.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EventIdentifier {
    /// The declared event name
    Name(String),
    /// The selector computed from the name
    Selector(Felt),
}

impl From<&str> for EventIdentifier {
    fn from(name: &str) -> Self {
        EventIdentifier::Name(name.to_string())
    }
}

impl From<String> for EventIdentifier {
    fn from(name: String) -> Self {
        EventIdentifier::Name(name)
    }
}

impl From<Felt> for EventIdentifier {
    fn from(selector: Felt) -> Self {
        EventIdentifier::Selector(selector)
    }
}

impl fmt::Display for EventIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventIdentifier::Name(name) => write!(f, "{}", name),
            EventIdentifier::Selector(selector) => write!(f, "{:#x}", selector),
        }
    }
}

/// Registry of the events declared by a contract ABI.
#[derive(Debug)]
pub struct EventRegistry {
    /// Event ABI entries by declared name
    events: HashMap<String, EventAbiEntry>,
    /// Reverse index from selector to declared name
    selector_to_name: HashMap<Felt, String>,
    /// Cached record schemas by event name
    records: HashMap<String, Arc<RecordType>>,
    /// Cached resolved argument types by event name
    argument_types: HashMap<String, Vec<CairoType>>,
}

impl EventRegistry {
    /// Index every `event` entry of the ABI, together with the reverse
    /// selector index.
    pub fn new(abi: &ContractAbi) -> Self {
        let mut events = HashMap::new();
        let mut selector_to_name = HashMap::new();
        for entry in abi.events() {
            selector_to_name.insert(get_selector_from_name(&entry.name), entry.name.clone());
            events.insert(entry.name.clone(), entry.clone());
        }
        debug!(events = events.len(), "indexed contract events");
        Self {
            events,
            selector_to_name,
            records: HashMap::new(),
            argument_types: HashMap::new(),
        }
    }

    /// Whether an event with this name or selector is declared.
    pub fn contains(&self, identifier: impl Into<EventIdentifier>) -> bool {
        match identifier.into() {
            EventIdentifier::Name(name) => self.events.contains_key(&name),
            EventIdentifier::Selector(selector) => self.selector_to_name.contains_key(&selector),
        }
    }

    /// Declared event names, in no particular order.
    pub fn event_names(&self) -> impl Iterator<Item = &str> {
        self.events.keys().map(String::as_str)
    }

    /// Get or build the record schema for a declared event.
    ///
    /// The schema's fields are the event's resolved argument names: the
    /// concatenated `keys` then `data` descriptors after array pairing.
    /// Both identifier forms return the same shared schema.
    pub fn get_contract_event(
        &mut self,
        identifier: impl Into<EventIdentifier>,
    ) -> Result<Arc<RecordType>> {
        let name = self.canonical_name(&identifier.into())?;
        let (record, _) = self.process_event(&name)?;
        Ok(record)
    }

    /// Get or resolve the argument types of a declared event, in the same
    /// order as the record schema fields.
    pub fn get_event_argument_types(
        &mut self,
        identifier: impl Into<EventIdentifier>,
    ) -> Result<Vec<CairoType>> {
        let name = self.canonical_name(&identifier.into())?;
        let (_, types) = self.process_event(&name)?;
        Ok(types)
    }

    /// Resolve an identifier to the declared event name.
    ///
    /// Name identifiers pass through; whether the event exists is checked
    /// when the event is processed.
    fn canonical_name(&self, identifier: &EventIdentifier) -> Result<String> {
        match identifier {
            EventIdentifier::Name(name) => Ok(name.clone()),
            EventIdentifier::Selector(selector) => self
                .selector_to_name
                .get(selector)
                .cloned()
                .ok_or(RegistryError::UnknownSelector {
                    selector: *selector,
                }),
        }
    }

    /// Build and cache the record schema and argument types of an event.
    ///
    /// `keys` and `data` are resolved as one sequence, so an array and its
    /// length argument may sit across the boundary between the two lists.
    fn process_event(&mut self, name: &str) -> Result<(Arc<RecordType>, Vec<CairoType>)> {
        if let (Some(record), Some(types)) =
            (self.records.get(name), self.argument_types.get(name))
        {
            return Ok((Arc::clone(record), types.clone()));
        }

        let entry = self
            .events
            .get(name)
            .ok_or_else(|| RegistryError::UnknownEvent {
                name: name.to_string(),
            })?;
        let parameters: Vec<TypedParameter> = entry
            .keys
            .iter()
            .chain(entry.data.iter())
            .cloned()
            .collect();
        let resolved = resolve_arguments(&parameters)?;

        let mut fields = Vec::with_capacity(resolved.len());
        let mut types = Vec::with_capacity(resolved.len());
        for argument in resolved {
            fields.push(argument.name);
            types.push(argument.cairo_type);
        }
        let record = Arc::new(RecordType::new(name, fields));
        debug!(name = %name, fields = record.arity(), "built event record schema");

        self.records.insert(name.to_string(), Arc::clone(&record));
        self.argument_types.insert(name.to_string(), types.clone());
        Ok((record, types))
    }
}
