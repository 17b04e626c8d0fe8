//! Argument list resolution.
//!
//! Cairo-0 ABIs pass an array argument `X` as two wire entries: a `felt`
//! length named `X_len` immediately followed by the pointer `X`.
//! [`resolve_arguments`] collapses each such pair into the single logical
//! array argument, so callers see `X` where the ABI had `X_len, X`.

use starknet_testkit_types::{mark_type_resolved, parse_type, CairoType, TypedParameter};

use crate::errors::{RegistryError, Result};

/// One resolved argument: its name and parsed Cairo type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedArgument {
    /// Argument name
    pub name: String,
    /// Parsed and resolved argument type
    pub cairo_type: CairoType,
}

/// Resolve an ordered argument descriptor list, collapsing each
/// `X_len`/`X` pair into the single array argument `X`.
///
/// A pointer-typed argument must be immediately preceded by a `felt`
/// argument named `<name>_len`; the pair occupies the pointer's position
/// in the output. Every other argument passes through in order. Only the
/// adjacent predecessor may satisfy the pairing rule.
pub fn resolve_arguments(parameters: &[TypedParameter]) -> Result<Vec<ResolvedArgument>> {
    let mut resolved: Vec<ResolvedArgument> = Vec::with_capacity(parameters.len());
    for parameter in parameters {
        let cairo_type = mark_type_resolved(parse_type(&parameter.r#type)?);
        if cairo_type.is_pointer() {
            let expected = format!("{}_len", parameter.name);
            let length = match resolved.pop() {
                Some(length) if length.name == expected => length,
                found => {
                    return Err(RegistryError::ExpectedLengthArgument {
                        array: parameter.name.clone(),
                        expected,
                        found: found.map(|argument| argument.name),
                    })
                }
            };
            if !length.cairo_type.is_felt() {
                return Err(RegistryError::LengthArgumentNotFelt {
                    length: length.name,
                    got: length.cairo_type,
                });
            }
        }
        resolved.push(ResolvedArgument {
            name: parameter.name.clone(),
            cairo_type,
        });
    }
    Ok(resolved)
}
