//! Validation utilities for UUID text
//!
//! This module provides the parsing rules applied to UUIDs that arrive as text.

use crate::columns::HEX_UUID_LENGTH;
use crate::errors::TypeMappingError;
use uuid::Uuid;

/// Parse a UUID from text, accepting any form that reduces to 32 hex digits.
///
/// `urn:` and `uuid:` prefixes and surrounding braces are stripped and hyphens
/// are ignored wherever they appear, so `{1234-5678...}` is as good as the
/// canonical 8-4-4-4-12 form. The remaining 32 characters are read as a base-16
/// integer literal, which also admits surrounding whitespace, a leading `+`, a
/// `0x` prefix and single `_` separators between digits.
pub fn parse_uuid(input: &str) -> Result<Uuid, TypeMappingError> {
    let stripped = input.replace("urn:", "").replace("uuid:", "");
    let digits: String = stripped
        .trim_matches(|c: char| c == '{' || c == '}')
        .chars()
        .filter(|c| *c != '-')
        .collect();

    match Uuid::try_parse(&digits) {
        Ok(id) => Ok(id),
        Err(source) => {
            if digits.chars().count() == HEX_UUID_LENGTH {
                if let Some(value) = parse_hex_literal(&digits) {
                    return Ok(Uuid::from_u128(value));
                }
            }
            Err(TypeMappingError::InvalidUuidFormat {
                value: input.to_string(),
                source,
            })
        }
    }
}

/// Read a base-16 integer literal: `[ws][+][0x][_]digits[_digits]*[ws]`
fn parse_hex_literal(text: &str) -> Option<u128> {
    let text = text.trim();
    let text = text.strip_prefix('+').unwrap_or(text);
    let body = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        // One separator may follow the base prefix
        Some(rest) => rest.strip_prefix('_').unwrap_or(rest),
        None => text,
    };

    if body.is_empty() || body.starts_with('_') || body.ends_with('_') || body.contains("__") {
        return None;
    }

    let hex: String = body.chars().filter(|c| *c != '_').collect();
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u128::from_str_radix(&hex, 16).ok()
}

/// Check if text is in the separator-free storage form (32 lowercase hex digits)
pub fn is_hex_storage_form(text: &str) -> bool {
    text.len() == HEX_UUID_LENGTH
        && text.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}
