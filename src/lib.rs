//! # columnhaus
//!
//! Portable column types whose storage adapts to the connected database backend.
//!
//! - [`LengthNormalizingString`] gives text columns without a declared length a
//!   bounded `VARCHAR` on MySQL and leaves them alone everywhere else.
//! - [`PortableUuid`] stores UUIDs in PostgreSQL's native `UUID` type and as
//!   `CHAR(32)` lowercase hex on every other backend.
//!
//! ## Quick Start
//!
//! ```rust
//! use columnhaus::prelude::*;
//!
//! let mut registry = ColumnRegistry::new(Dialect::from_name("sqlite"));
//! registry.register_type("guid".to_string(), PortableUuid::new())?;
//!
//! let id = Uuid::parse_str("12345678-1234-5678-1234-567812345678").unwrap();
//! let stored = registry.encode("guid", ColumnValue::Uuid(id))?;
//! assert_eq!(stored, ColumnValue::from("12345678123456781234567812345678"));
//!
//! let restored = registry.decode("guid", stored)?;
//! assert_eq!(restored, ColumnValue::Uuid(id));
//! # Ok::<(), ColumnHausError>(())
//! ```

/// Conditional debug logging macros
/// These macros only compile in code when the `debug-logging` feature is enabled
#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

pub mod binding;
pub mod core;
pub mod errors;
pub mod migration;
pub mod prelude;

// Re-export the main public types for convenience
pub use crate::core::ColumnRegistry;
pub use errors::ColumnHausError;

// Re-export centralized config
pub use config::{AppConfig, ColumnConfig, DatabaseConfig};

// Re-export the column types and their value model
pub use type_mapping::{
    ColumnType, ColumnValue, Dialect, LengthNormalizingString, PortableUuid, StorageDescriptor,
    TypeMappingError,
};

// Re-export internal crates used in the public API
pub use config;
pub use type_mapping;

// Re-export external dependencies used in public API
pub use sqlx;
pub use uuid;
