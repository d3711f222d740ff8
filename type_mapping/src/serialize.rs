//! Serialization utilities
//!
//! This module renders UUIDs into the text forms written to storage.

use uuid::Uuid;

/// Render as 32 lowercase hex digits with no separators
pub fn uuid_to_hex(id: &Uuid) -> String {
    let mut buffer = Uuid::encode_buffer();
    id.simple().encode_lower(&mut buffer).to_string()
}

/// Render in the canonical hyphenated 8-4-4-4-12 form
pub fn uuid_to_canonical(id: &Uuid) -> String {
    let mut buffer = Uuid::encode_buffer();
    id.hyphenated().encode_lower(&mut buffer).to_string()
}
