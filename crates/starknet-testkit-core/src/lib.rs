//! StarkNet Testkit Core
//!
//! Struct and event registries for StarkNet contract testing.
//!
//! This crate turns the `struct` and `event` entries of a Cairo-0 contract
//! ABI into runtime machinery for tests: record schemas for building and
//! inspecting struct values, selector-aware event lookup, argument list
//! resolution, and calldata flattening.
//!
//! # Core Modules
//!
//! - [`structs`]: [`StructRegistry`] caching one record schema per struct
//! - [`events`]: [`EventRegistry`] with name or selector lookup
//! - [`arguments`]: collapsing `X_len`/`X` descriptor pairs into arrays
//! - [`flatten`]: depth-bounded flattening of values into felt calldata
//! - [`record`]: the [`RecordType`]/[`Record`] schema and instance types
//!
//! # Example
//!
//! ```ignore
//! use starknet_testkit_core::{EventRegistry, StructRegistry};
//! use starknet_testkit_types::ContractAbi;
//!
//! let abi = ContractAbi::from_json(&std::fs::read_to_string("abi.json")?)?;
//!
//! let mut structs = StructRegistry::new(&abi)?;
//! let point = structs.get_contract_struct("Point")?;
//!
//! let mut events = EventRegistry::new(&abi);
//! let transfer = events.get_contract_event("Transfer")?;
//! ```

pub mod arguments;
pub mod errors;
pub mod events;
pub mod flatten;
pub mod record;
pub mod structs;
pub mod value;

// Re-export main types at crate root for convenience
pub use arguments::{resolve_arguments, ResolvedArgument};
pub use errors::{RegistryError, Result};
pub use events::{EventIdentifier, EventRegistry};
pub use flatten::{flatten, flatten_with_depth, DEFAULT_MAX_DEPTH};
pub use record::{Record, RecordType};
pub use structs::StructRegistry;
pub use value::CallValue;
