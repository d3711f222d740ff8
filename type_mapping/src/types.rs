//! Column value and descriptor definitions
//!
//! This module provides the runtime value representation exchanged with
//! the driver layer and the trait every portable column type implements.

use crate::errors::TypeMappingError;
use crate::sql::Dialect;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Runtime value passed between the application and the driver layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnValue {
    Text(String),
    Uuid(Uuid),
    Null,
}

impl ColumnValue {
    pub fn is_null(&self) -> bool {
        matches!(self, ColumnValue::Null)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ColumnValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_uuid(&self) -> Option<Uuid> {
        match self {
            ColumnValue::Uuid(u) => Some(*u),
            _ => None,
        }
    }
}

impl From<String> for ColumnValue {
    fn from(val: String) -> Self {
        ColumnValue::Text(val)
    }
}

impl From<&str> for ColumnValue {
    fn from(val: &str) -> Self {
        ColumnValue::Text(val.to_string())
    }
}

impl From<Uuid> for ColumnValue {
    fn from(val: Uuid) -> Self {
        ColumnValue::Uuid(val)
    }
}

impl<T> From<Option<T>> for ColumnValue
where
    T: Into<ColumnValue>,
{
    fn from(val: Option<T>) -> Self {
        match val {
            Some(v) => v.into(),
            None => ColumnValue::Null,
        }
    }
}

/// Concrete column storage chosen for a dialect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StorageDescriptor {
    /// Variable-length text; `None` leaves the length to the backend
    Text { length: Option<u32> },
    /// Fixed-length character column
    Char { length: u32 },
    /// The backend's own 128-bit UUID type
    NativeUuid,
}

/// A column type whose storage adapts to the connected backend.
///
/// `resolve_storage_descriptor` must be a pure function of the dialect so that
/// callers can resolve once per dialect context and cache the answer.
/// `encode` runs when a value is bound as a query parameter, `decode` when a
/// result column is read back. Both map `ColumnValue::Null` to itself.
pub trait ColumnType: Send + Sync {
    /// Short identifier used in logs and registries
    fn type_name(&self) -> &'static str;

    fn resolve_storage_descriptor(&self, dialect: &Dialect) -> StorageDescriptor;

    fn encode(&self, value: ColumnValue, dialect: &Dialect)
        -> Result<ColumnValue, TypeMappingError>;

    fn decode(&self, value: ColumnValue, dialect: &Dialect)
        -> Result<ColumnValue, TypeMappingError>;
}
