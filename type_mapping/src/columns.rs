//! Portable column types
//!
//! `LengthNormalizingString` gives unbounded text columns a length on backends
//! that require one. `PortableUuid` stores UUIDs natively on PostgreSQL and as
//! 32 lowercase hex characters everywhere else.

use crate::errors::TypeMappingError;
use crate::serialize::{uuid_to_canonical, uuid_to_hex};
use crate::sql::Dialect;
use crate::types::{ColumnType, ColumnValue, StorageDescriptor};
use crate::validate::{is_hex_storage_form, parse_uuid};
use uuid::Uuid;

/// Length applied to undeclared-length text on MySQL
pub const DEFAULT_STRING_LENGTH: u32 = 255;

/// Width of the hex storage form of a UUID
pub const HEX_UUID_LENGTH: usize = 32;

/// Text column that receives a default length where the backend needs one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthNormalizingString {
    /// Length declared on the column; `None` means unbounded
    pub length: Option<u32>,
    /// Length used on MySQL when no length was declared
    pub default_length: u32,
}

impl LengthNormalizingString {
    pub fn new() -> Self {
        Self {
            length: None,
            default_length: DEFAULT_STRING_LENGTH,
        }
    }

    pub fn with_length(mut self, length: u32) -> Self {
        self.length = Some(length);
        self
    }

    pub fn with_default_length(mut self, default_length: u32) -> Self {
        self.default_length = default_length;
        self
    }
}

impl Default for LengthNormalizingString {
    fn default() -> Self {
        Self::new()
    }
}

impl ColumnType for LengthNormalizingString {
    fn type_name(&self) -> &'static str {
        "auto_string"
    }

    fn resolve_storage_descriptor(&self, dialect: &Dialect) -> StorageDescriptor {
        let descriptor = match self.length {
            None if dialect.is_mysql() => StorageDescriptor::Text {
                length: Some(self.default_length),
            },
            declared => StorageDescriptor::Text { length: declared },
        };
        debug_log!(
            "[AUTO_STRING] dialect={} declared={:?} -> {:?}",
            dialect,
            self.length,
            descriptor
        );
        descriptor
    }

    fn encode(
        &self,
        value: ColumnValue,
        _dialect: &Dialect,
    ) -> Result<ColumnValue, TypeMappingError> {
        Ok(value)
    }

    fn decode(
        &self,
        value: ColumnValue,
        _dialect: &Dialect,
    ) -> Result<ColumnValue, TypeMappingError> {
        Ok(value)
    }
}

/// UUID column stored natively on PostgreSQL and as `CHAR(32)` hex elsewhere
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PortableUuid;

impl PortableUuid {
    pub fn new() -> Self {
        Self
    }

    /// Encode an optional UUID for binding
    pub fn encode_uuid(&self, value: Option<Uuid>, dialect: &Dialect) -> ColumnValue {
        match value {
            None => ColumnValue::Null,
            Some(id) if dialect.is_postgres() => ColumnValue::Text(uuid_to_canonical(&id)),
            Some(id) => {
                let hex = uuid_to_hex(&id);
                debug_assert!(is_hex_storage_form(&hex));
                ColumnValue::Text(hex)
            }
        }
    }

    /// Decode a stored value into an optional UUID
    pub fn decode_uuid(
        &self,
        value: ColumnValue,
        dialect: &Dialect,
    ) -> Result<Option<Uuid>, TypeMappingError> {
        Ok(self.decode(value, dialect)?.as_uuid())
    }
}

impl ColumnType for PortableUuid {
    fn type_name(&self) -> &'static str {
        "guid"
    }

    fn resolve_storage_descriptor(&self, dialect: &Dialect) -> StorageDescriptor {
        let descriptor = if dialect.is_postgres() {
            StorageDescriptor::NativeUuid
        } else {
            StorageDescriptor::Char {
                length: HEX_UUID_LENGTH as u32,
            }
        };
        debug_log!("[GUID] dialect={} -> {:?}", dialect, descriptor);
        descriptor
    }

    fn encode(
        &self,
        value: ColumnValue,
        dialect: &Dialect,
    ) -> Result<ColumnValue, TypeMappingError> {
        trace_log!("[GUID] encode {:?} for {}", value, dialect);
        match value {
            ColumnValue::Null => Ok(ColumnValue::Null),
            ColumnValue::Uuid(id) => Ok(self.encode_uuid(Some(id), dialect)),
            // The native driver path takes the text as given
            ColumnValue::Text(text) if dialect.is_postgres() => Ok(ColumnValue::Text(text)),
            ColumnValue::Text(text) => Ok(ColumnValue::Text(uuid_to_hex(&parse_uuid(&text)?))),
        }
    }

    fn decode(
        &self,
        value: ColumnValue,
        _dialect: &Dialect,
    ) -> Result<ColumnValue, TypeMappingError> {
        trace_log!("[GUID] decode {:?} for {}", value, _dialect);
        match value {
            ColumnValue::Text(text) => Ok(ColumnValue::Uuid(parse_uuid(&text)?)),
            other => Ok(other),
        }
    }
}
