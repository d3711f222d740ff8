//! Portable column types and their storage mapping
//! This crate provides the dialect-aware conversion logic used across the columnhaus ecosystem

/// Conditional logging macros, compiled in only with the `debug-logging` feature
#[cfg(feature = "debug-logging")]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "debug-logging")]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

pub mod columns;
pub mod errors;
pub mod serialize;
pub mod sql;
pub mod types;
pub mod validate;

// Re-export commonly used items
pub use columns::{LengthNormalizingString, PortableUuid, DEFAULT_STRING_LENGTH, HEX_UUID_LENGTH};
pub use errors::TypeMappingError;
pub use serialize::{uuid_to_canonical, uuid_to_hex};
pub use sql::Dialect;
pub use types::{ColumnType, ColumnValue, StorageDescriptor};
pub use validate::parse_uuid;
