//! Convenience re-exports for common columnhaus usage
//!
//! This prelude module re-exports the most commonly used items from the columnhaus ecosystem,
//! making it easier to import everything you need with a single use statement.
//!
//! # Example
//!
//! ```rust
//! use columnhaus::prelude::*;
//!
//! let registry = ColumnRegistry::with_defaults(Dialect::MySql, &ColumnConfig::default());
//! assert_eq!(
//!     registry.descriptor("auto_string").unwrap(),
//!     StorageDescriptor::Text { length: Some(255) }
//! );
//! ```

// Core columnhaus components
pub use crate::binding::{bind_column, read_column, PgQuery};
pub use crate::core::{ColumnRegistry, AUTO_STRING, GUID};
pub use crate::errors::ColumnHausError;
pub use crate::migration::{self, ColumnDef};

// Re-export centralized config
pub use config::{AppConfig, ColumnConfig, DatabaseConfig};

// Column types and their value model
pub use type_mapping::{
    ColumnType, ColumnValue, Dialect, LengthNormalizingString, PortableUuid, StorageDescriptor,
    TypeMappingError,
};

// Common external dependencies
pub use sqlx;
pub use uuid::Uuid;

// Commonly used sqlx types
pub use sqlx::{PgPool, Row};
