//! Cairo type representation.
//!
//! [`CairoType`] models the type expressions that appear in Cairo-0 contract
//! ABIs. Types come out of the parser with named references as
//! [`CairoType::Identifier`]; [`mark_type_resolved`] rewrites them into
//! [`CairoType::Struct`] references, the form the registries work with.

use std::fmt;

/// A Cairo type as written in a contract ABI.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CairoType {
    /// The field element scalar, `felt`.
    Felt,
    /// A pointer, `T*`. Arrays are passed as a pointer plus a length felt.
    Pointer(Box<CairoType>),
    /// A tuple, `(T1, T2, ...)`.
    Tuple(Vec<CairoType>),
    /// A named type reference as parsed, before resolution.
    Identifier(String),
    /// A named type reference resolved to a contract struct.
    Struct(String),
}

impl CairoType {
    /// Whether this is the plain felt scalar.
    pub fn is_felt(&self) -> bool {
        matches!(self, CairoType::Felt)
    }

    /// Whether this is a pointer type.
    pub fn is_pointer(&self) -> bool {
        matches!(self, CairoType::Pointer(_))
    }

    /// The pointed-to type, if this is a pointer.
    pub fn pointee(&self) -> Option<&CairoType> {
        match self {
            CairoType::Pointer(inner) => Some(inner),
            _ => None,
        }
    }
}

impl fmt::Display for CairoType {
    /// Renders the type back in source syntax, e.g. `felt*` or `(felt, felt)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CairoType::Felt => write!(f, "felt"),
            CairoType::Pointer(inner) => write!(f, "{}*", inner),
            CairoType::Tuple(members) => {
                write!(f, "(")?;
                for (i, member) in members.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", member)?;
                }
                write!(f, ")")
            }
            CairoType::Identifier(name) | CairoType::Struct(name) => write!(f, "{}", name),
        }
    }
}

/// Rewrite every unresolved [`CairoType::Identifier`] into a
/// [`CairoType::Struct`] reference, recursing through pointers and tuples.
pub fn mark_type_resolved(ty: CairoType) -> CairoType {
    match ty {
        CairoType::Identifier(name) => CairoType::Struct(name),
        CairoType::Pointer(inner) => CairoType::Pointer(Box::new(mark_type_resolved(*inner))),
        CairoType::Tuple(members) => {
            CairoType::Tuple(members.into_iter().map(mark_type_resolved).collect())
        }
        other => other,
    }
}
