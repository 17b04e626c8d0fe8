//! Shared Cairo ABI types for the starknet-testkit workspace.
//!
//! This crate provides the foundational types the registry crate builds on,
//! keeping document decoding and type parsing out of the registry logic.
//!
//! ## Modules
//!
//! - [`abi`] - the contract ABI document model and
//!   [`StructDefinition`](abi::StructDefinition) building
//! - [`cairo_type`] - the [`CairoType`](cairo_type::CairoType) tree and
//!   identifier resolution
//! - [`type_parsing`] - the Cairo type-expression parser
//! - [`selector`] - `starknet_keccak` and entry-point selector hashing

pub mod abi;
pub mod cairo_type;
pub mod errors;
pub mod selector;
pub mod type_parsing;

// Re-export commonly used types at crate root
pub use abi::{
    AbiEntry, ContractAbi, EventAbiEntry, MemberDefinition, StructAbiEntry, StructDefinition,
    StructMemberEntry, TypedParameter,
};
pub use cairo_type::{mark_type_resolved, CairoType};
pub use errors::AbiError;
pub use selector::{
    get_selector_from_name, starknet_keccak, DEFAULT_ENTRY_POINT_NAME,
    DEFAULT_ENTRY_POINT_SELECTOR, DEFAULT_L1_ENTRY_POINT_NAME, MASK_250,
};
pub use type_parsing::parse_type;

use alloy_primitives::U256;

/// A StarkNet field element, carried as a 256-bit unsigned integer.
///
/// Every value this workspace produces stays below 2^251; the wider carrier
/// keeps hashing, masking and comparisons on a plain integer type.
pub type Felt = U256;
