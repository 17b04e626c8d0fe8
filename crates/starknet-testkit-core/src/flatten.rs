//! Depth-bounded flattening of argument values into felt calldata.
//!
//! Calldata on the wire is a flat felt sequence. [`flatten`] walks a
//! [`CallValue`] tree depth-first and concatenates the leaves in order,
//! spending one level of a nesting budget per step so pathological nesting
//! fails instead of recursing without bound.

use starknet_testkit_types::Felt;
use tracing::trace;

use crate::errors::{RegistryError, Result};
use crate::value::CallValue;

/// Default nesting budget for [`flatten`].
pub const DEFAULT_MAX_DEPTH: usize = 30;

/// Flatten an argument value into its calldata felts with the default
/// nesting budget.
///
/// `name` is the argument being flattened; it only appears in the depth
/// error.
pub fn flatten(name: &str, value: &CallValue) -> Result<Vec<Felt>> {
    flatten_with_depth(name, value, DEFAULT_MAX_DEPTH)
}

/// Flatten an argument value into its calldata felts.
///
/// The budget is spent on entry to every nesting level, so a `max_depth`
/// of zero fails even for a plain felt. Arrays and records contribute
/// their members in order, each one level deeper.
pub fn flatten_with_depth(name: &str, value: &CallValue, max_depth: usize) -> Result<Vec<Felt>> {
    trace!(argument = %name, max_depth = max_depth, "flattening argument");
    let mut out = Vec::new();
    flatten_into(name, value, max_depth, &mut out)?;
    Ok(out)
}

fn flatten_into(
    name: &str,
    value: &CallValue,
    depth_left: usize,
    out: &mut Vec<Felt>,
) -> Result<()> {
    if depth_left == 0 {
        return Err(RegistryError::MaxDepthExceeded {
            argument: name.to_string(),
        });
    }
    match value {
        CallValue::Felt(felt) => out.push(*felt),
        CallValue::Array(items) => {
            for item in items {
                flatten_into(name, item, depth_left - 1, out)?;
            }
        }
        CallValue::Record(record) => {
            for item in record.values() {
                flatten_into(name, item, depth_left - 1, out)?;
            }
        }
    }
    Ok(())
}
