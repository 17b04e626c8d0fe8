//! StarkNet selector hashing.
//!
//! Entry points and events are addressed on StarkNet by a selector: the
//! keccak-256 digest of the name, truncated to 250 bits so it fits in a
//! field element. The two default entry points are special-cased to
//! selector zero.

use alloy_primitives::keccak256;

use crate::Felt;

/// Entry point invoked when no declared selector matches.
pub const DEFAULT_ENTRY_POINT_NAME: &str = "__default__";

/// Entry point invoked for unmatched L1 handler messages.
pub const DEFAULT_L1_ENTRY_POINT_NAME: &str = "__l1_default__";

/// Selector assigned to both default entry points.
pub const DEFAULT_ENTRY_POINT_SELECTOR: Felt = Felt::ZERO;

/// Mask keeping the low 250 bits of a keccak digest.
pub const MASK_250: Felt = Felt::from_limbs([u64::MAX, u64::MAX, u64::MAX, (1 << 58) - 1]);

/// The keccak variant used by StarkNet: keccak-256 truncated to 250 bits,
/// so the digest fits in a field element.
pub fn starknet_keccak(data: &[u8]) -> Felt {
    let digest = keccak256(data);
    Felt::from_be_bytes(digest.0) & MASK_250
}

/// Compute the selector for an entry-point or event name.
///
/// Names are hashed over their byte representation; the default entry
/// points map to [`DEFAULT_ENTRY_POINT_SELECTOR`].
pub fn get_selector_from_name(name: &str) -> Felt {
    if name == DEFAULT_ENTRY_POINT_NAME || name == DEFAULT_L1_ENTRY_POINT_NAME {
        return DEFAULT_ENTRY_POINT_SELECTOR;
    }
    starknet_keccak(name.as_bytes())
}
