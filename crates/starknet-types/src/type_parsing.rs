//! Cairo type-expression parsing.
//!
//! Provides the shared type parser used across workspace crates, covering
//! the expression subset that Cairo-0 contract ABIs actually emit.

use crate::cairo_type::CairoType;
use crate::errors::AbiError;

/// Parse a Cairo type expression into a [`CairoType`].
///
/// Supports:
/// - The felt scalar: `felt`
/// - Pointer types: `felt*`, `Point*`, `felt**`
/// - Tuple types: `(felt, felt)`, `()`, including named members
///   `(low : felt, high : felt)` (member names are source syntax only)
/// - Named references: `Uint256`, `state.Point`
///
/// Named references come back as [`CairoType::Identifier`]; run the result
/// through [`mark_type_resolved`](crate::cairo_type::mark_type_resolved) to
/// obtain struct references.
///
/// # Examples
///
/// ```ignore
/// use starknet_testkit_types::parse_type;
///
/// let ty = parse_type("felt*").unwrap();
/// ```
pub fn parse_type(type_str: &str) -> Result<CairoType, AbiError> {
    let type_str = type_str.trim();

    // Pointer suffix binds last: "felt*" is a pointer to felt.
    if let Some(inner) = type_str.strip_suffix('*') {
        let pointee = parse_type(inner)?;
        return Ok(CairoType::Pointer(Box::new(pointee)));
    }

    if type_str == "felt" {
        return Ok(CairoType::Felt);
    }

    // Handle tuple types
    if let Some(body) = type_str.strip_prefix('(') {
        let body = match body.strip_suffix(')') {
            Some(body) => body.trim(),
            None => return Err(invalid(type_str)),
        };
        if body.is_empty() {
            return Ok(CairoType::Tuple(vec![]));
        }
        let mut members = Vec::new();
        for part in split_tuple_members(body) {
            members.push(parse_type(strip_member_name(part))?);
        }
        return Ok(CairoType::Tuple(members));
    }

    // Handle named references: dotted identifier paths
    if !type_str.is_empty() && type_str.split('.').all(is_identifier) {
        return Ok(CairoType::Identifier(type_str.to_string()));
    }

    Err(invalid(type_str))
}

fn invalid(expression: &str) -> AbiError {
    AbiError::InvalidTypeExpression {
        expression: expression.to_string(),
    }
}

/// Split tuple members respecting nested parentheses.
///
/// Given "felt, (felt, felt), felt", returns ["felt", "(felt, felt)", "felt"]
/// by tracking paren depth.
fn split_tuple_members(s: &str) -> Vec<&str> {
    let mut result = Vec::new();
    let mut depth = 0;
    let mut start = 0;

    for (i, c) in s.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth -= 1,
            ',' if depth == 0 => {
                result.push(s[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }

    if start < s.len() {
        result.push(s[start..].trim());
    }

    result
}

/// Strip the "name :" prefix of a named tuple member, if present.
///
/// Only a colon outside nested parens separates a member name from its
/// type, so "p : (x : felt)" strips to "(x : felt)".
fn strip_member_name(member: &str) -> &str {
    let mut depth = 0;
    for (i, c) in member.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth -= 1,
            ':' if depth == 0 => return member[i + 1..].trim(),
            _ => {}
        }
    }
    member
}

/// Whether a path segment is a valid Cairo identifier.
fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_felt() {
        assert_eq!(parse_type("felt").unwrap(), CairoType::Felt);
        assert_eq!(parse_type("  felt  ").unwrap(), CairoType::Felt);
    }

    #[test]
    fn test_parse_pointers() {
        assert_eq!(
            parse_type("felt*").unwrap(),
            CairoType::Pointer(Box::new(CairoType::Felt))
        );
        assert_eq!(
            parse_type("felt**").unwrap(),
            CairoType::Pointer(Box::new(CairoType::Pointer(Box::new(CairoType::Felt))))
        );
        assert_eq!(
            parse_type("Point*").unwrap(),
            CairoType::Pointer(Box::new(CairoType::Identifier("Point".to_string())))
        );
    }

    #[test]
    fn test_parse_identifiers() {
        assert_eq!(
            parse_type("Uint256").unwrap(),
            CairoType::Identifier("Uint256".to_string())
        );
        assert_eq!(
            parse_type("state.Point").unwrap(),
            CairoType::Identifier("state.Point".to_string())
        );
        assert_eq!(
            parse_type("_private").unwrap(),
            CairoType::Identifier("_private".to_string())
        );
    }

    #[test]
    fn test_parse_tuples() {
        assert_eq!(parse_type("()").unwrap(), CairoType::Tuple(vec![]));
        assert_eq!(
            parse_type("(felt, felt)").unwrap(),
            CairoType::Tuple(vec![CairoType::Felt, CairoType::Felt])
        );
        assert_eq!(
            parse_type("(felt, (felt, felt))").unwrap(),
            CairoType::Tuple(vec![
                CairoType::Felt,
                CairoType::Tuple(vec![CairoType::Felt, CairoType::Felt]),
            ])
        );
    }

    #[test]
    fn test_parse_named_tuple_members() {
        // Member names are dropped; only the types survive.
        assert_eq!(
            parse_type("(low : felt, high : felt)").unwrap(),
            CairoType::Tuple(vec![CairoType::Felt, CairoType::Felt])
        );
        assert_eq!(
            parse_type("(p : (x : felt, y : felt), v : felt)").unwrap(),
            CairoType::Tuple(vec![
                CairoType::Tuple(vec![CairoType::Felt, CairoType::Felt]),
                CairoType::Felt,
            ])
        );
    }

    #[test]
    fn test_parse_rejects_malformed_expressions() {
        for bad in ["", "123abc", "felt felt", "(felt", "felt)", "a..b", "*"] {
            let err = parse_type(bad).unwrap_err();
            assert!(
                matches!(err, AbiError::InvalidTypeExpression { .. }),
                "expected InvalidTypeExpression for {:?}, got {:?}",
                bad,
                err
            );
        }
    }

    #[test]
    fn test_split_tuple_members() {
        let parts = split_tuple_members("felt, (felt, felt), Point");
        assert_eq!(parts, vec!["felt", "(felt, felt)", "Point"]);
    }
}
