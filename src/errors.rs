//! Error types for the columnhaus crate
//!
//! This module contains all error types that can be returned by columnhaus operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ColumnHausError {
    /// A value could not be converted to or from its storage form
    #[error(transparent)]
    Conversion(#[from] type_mapping::TypeMappingError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Column type not found: {0}")]
    TypeNotFound(String),

    #[error("Column type already registered: {0}")]
    TypeAlreadyRegistered(String),

    #[error("Invalid SQL identifier: {0}")]
    InvalidIdentifier(String),

    #[error("Registry is bound to {actual}, operation requires {expected}")]
    DialectMismatch { expected: String, actual: String },
}
