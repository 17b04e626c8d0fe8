//! Contract ABI document model.
//!
//! A Cairo-0 contract ABI is a JSON array of entries, each tagged by a
//! `"type"` discriminator. This crate decodes the `struct` and `event`
//! entries the registries consume; every other entry kind (functions,
//! constructors, L1 handlers) is carried through untouched as
//! [`AbiEntry::Other`].
//!
//! ## Accepted document shapes
//!
//! [`ContractAbi::from_json`] accepts either a bare entry array or a full
//! contract definition object holding the array under an `"abi"` key:
//!
//! ```ignore
//! use starknet_testkit_types::ContractAbi;
//!
//! let abi = ContractAbi::from_json(r#"[{"type": "struct", "name": "Point",
//!     "size": 2, "members": [
//!         {"name": "x", "type": "felt", "offset": 0},
//!         {"name": "y", "type": "felt", "offset": 1}]}]"#)?;
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::cairo_type::{mark_type_resolved, CairoType};
use crate::errors::AbiError;
use crate::type_parsing::parse_type;

/// One `name`/`type` descriptor, as used by event `keys` and `data` lists
/// and by function inputs and outputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypedParameter {
    /// Argument name
    pub name: String,
    /// Cairo type expression text
    pub r#type: String,
}

impl TypedParameter {
    /// Convenience constructor, mostly for building descriptor lists by hand.
    pub fn new(name: impl Into<String>, r#type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            r#type: r#type.into(),
        }
    }
}

/// A struct member descriptor as it appears in the ABI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructMemberEntry {
    /// Member name
    pub name: String,
    /// Cairo type expression text
    pub r#type: String,
    /// Offset of the member within the struct, in felts
    #[serde(default)]
    pub offset: Option<u64>,
}

/// A `"type": "struct"` ABI entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructAbiEntry {
    /// Declared struct name
    pub name: String,
    /// Total size of the struct in felts, as emitted by the compiler
    #[serde(default)]
    pub size: Option<u64>,
    /// Members in declaration order
    pub members: Vec<StructMemberEntry>,
}

/// A `"type": "event"` ABI entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventAbiEntry {
    /// Declared event name
    pub name: String,
    /// Indexed argument descriptors
    pub keys: Vec<TypedParameter>,
    /// Payload argument descriptors
    pub data: Vec<TypedParameter>,
}

/// One entry of a contract ABI.
#[derive(Debug, Clone, PartialEq)]
pub enum AbiEntry {
    Struct(StructAbiEntry),
    Event(EventAbiEntry),
    /// Any other entry kind, carried through undecoded.
    Other(Value),
}

/// A parsed contract ABI: the ordered entry list of the document.
#[derive(Debug, Clone, Default)]
pub struct ContractAbi {
    entries: Vec<AbiEntry>,
}

impl ContractAbi {
    /// Parse an ABI from JSON text.
    ///
    /// Accepts either a bare entry array or a contract definition object
    /// with an `"abi"` array.
    pub fn from_json(text: &str) -> Result<Self, AbiError> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(value)
    }

    /// Parse an ABI from an already-decoded JSON value.
    pub fn from_value(value: Value) -> Result<Self, AbiError> {
        let raw_entries = match value {
            Value::Array(entries) => entries,
            Value::Object(mut map) => match map.remove("abi") {
                Some(Value::Array(entries)) => entries,
                Some(_) => {
                    return Err(AbiError::Document {
                        reason: "\"abi\" key is not an array".to_string(),
                    })
                }
                None => {
                    return Err(AbiError::Document {
                        reason: "object has no \"abi\" key".to_string(),
                    })
                }
            },
            _ => {
                return Err(AbiError::Document {
                    reason: "expected an entry array or a contract definition object".to_string(),
                })
            }
        };

        let mut entries = Vec::with_capacity(raw_entries.len());
        for (index, raw) in raw_entries.into_iter().enumerate() {
            entries.push(decode_entry(index, raw)?);
        }
        Ok(Self { entries })
    }

    /// All entries, in document order.
    pub fn entries(&self) -> &[AbiEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the ABI has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The `struct` entries, in document order.
    pub fn structs(&self) -> impl Iterator<Item = &StructAbiEntry> {
        self.entries.iter().filter_map(|entry| match entry {
            AbiEntry::Struct(entry) => Some(entry),
            _ => None,
        })
    }

    /// The `event` entries, in document order.
    pub fn events(&self) -> impl Iterator<Item = &EventAbiEntry> {
        self.entries.iter().filter_map(|entry| match entry {
            AbiEntry::Event(entry) => Some(entry),
            _ => None,
        })
    }
}

/// Decode one raw entry by its `"type"` discriminator.
fn decode_entry(index: usize, raw: Value) -> Result<AbiEntry, AbiError> {
    let kind = match raw.get("type").and_then(Value::as_str) {
        Some(kind) => kind.to_string(),
        None => return Err(AbiError::MissingEntryKind { index }),
    };
    match kind.as_str() {
        "struct" => Ok(AbiEntry::Struct(serde_json::from_value(raw)?)),
        "event" => Ok(AbiEntry::Event(serde_json::from_value(raw)?)),
        _ => Ok(AbiEntry::Other(raw)),
    }
}

/// A struct definition with every member type parsed and resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructDefinition {
    /// Declared struct name
    pub name: String,
    /// Members in declaration order
    pub members: Vec<MemberDefinition>,
}

/// A single member of a [`StructDefinition`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberDefinition {
    /// Member name
    pub name: String,
    /// Parsed and resolved member type
    pub cairo_type: CairoType,
    /// Offset of the member within the struct, in felts
    pub offset: Option<u64>,
}

impl StructDefinition {
    /// Build a definition from its ABI entry, parsing every member type.
    pub fn from_abi_entry(entry: &StructAbiEntry) -> Result<Self, AbiError> {
        let members = entry
            .members
            .iter()
            .map(|member| {
                Ok(MemberDefinition {
                    name: member.name.clone(),
                    cairo_type: mark_type_resolved(parse_type(&member.r#type)?),
                    offset: member.offset,
                })
            })
            .collect::<Result<Vec<_>, AbiError>>()?;
        Ok(Self {
            name: entry.name.clone(),
            members,
        })
    }

    /// Member names in declaration order.
    pub fn member_names(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(|member| member.name.as_str())
    }
}
