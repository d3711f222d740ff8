//! Core columnhaus functionality
//!
//! This module contains the column type registry. A registry is bound to one
//! dialect for its whole lifetime, so every storage descriptor is resolved once
//! at registration and served from the cache afterwards.

use std::collections::HashMap;
use std::sync::Arc;

use config::{AppConfig, ColumnConfig};
use type_mapping::{
    ColumnType, ColumnValue, Dialect, LengthNormalizingString, PortableUuid, StorageDescriptor,
};

use crate::errors::ColumnHausError;

/// Name the default string type is registered under
pub const AUTO_STRING: &str = "auto_string";
/// Name the default UUID type is registered under
pub const GUID: &str = "guid";

struct RegisteredType {
    column_type: Arc<dyn ColumnType>,
    descriptor: StorageDescriptor,
}

/// Registry of column types for a single dialect context
pub struct ColumnRegistry {
    dialect: Dialect,
    types: HashMap<String, RegisteredType>,
}

impl ColumnRegistry {
    /// Create an empty registry for a dialect
    pub fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            types: HashMap::new(),
        }
    }

    /// Create a registry with `auto_string` and `guid` already registered
    pub fn with_defaults(dialect: Dialect, columns: &ColumnConfig) -> Self {
        let mut registry = Self::new(dialect);
        registry.insert(
            AUTO_STRING.to_string(),
            Arc::new(LengthNormalizingString::new().with_default_length(columns.default_length)),
        );
        registry.insert(GUID.to_string(), Arc::new(PortableUuid::new()));
        registry
    }

    /// Create a registry with the default types for the configured backend
    pub fn from_config(config: &AppConfig) -> Self {
        let dialect = Dialect::from_url(&config.database.connection_string());
        Self::with_defaults(dialect, &config.columns)
    }

    /// Dialect this registry resolves descriptors for
    pub fn dialect(&self) -> &Dialect {
        &self.dialect
    }

    /// Register a column type under a name
    pub fn register_type<T>(&mut self, name: String, column_type: T) -> Result<(), ColumnHausError>
    where
        T: ColumnType + 'static,
    {
        if self.types.contains_key(&name) {
            return Err(ColumnHausError::TypeAlreadyRegistered(name));
        }

        self.insert(name, Arc::new(column_type));
        Ok(())
    }

    fn insert(&mut self, name: String, column_type: Arc<dyn ColumnType>) {
        let descriptor = column_type.resolve_storage_descriptor(&self.dialect);
        debug_log!(
            "[REGISTRY] {} ({}) on {} -> {}",
            name,
            column_type.type_name(),
            self.dialect,
            descriptor.sql_type()
        );
        self.types.insert(
            name,
            RegisteredType {
                column_type,
                descriptor,
            },
        );
    }

    fn entry(&self, name: &str) -> Result<&RegisteredType, ColumnHausError> {
        self.types
            .get(name)
            .ok_or_else(|| ColumnHausError::TypeNotFound(name.to_string()))
    }

    /// Get a registered column type by name
    pub fn get_type(&self, name: &str) -> Result<Arc<dyn ColumnType>, ColumnHausError> {
        self.entry(name).map(|entry| Arc::clone(&entry.column_type))
    }

    /// Get the cached storage descriptor of a registered type
    pub fn descriptor(&self, name: &str) -> Result<StorageDescriptor, ColumnHausError> {
        self.entry(name).map(|entry| entry.descriptor)
    }

    /// List all registered type names
    pub fn list_types(&self) -> Vec<&String> {
        self.types.keys().collect()
    }

    /// Remove a column type by name
    pub fn unregister_type(&mut self, name: &str) -> Result<(), ColumnHausError> {
        self.types
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| ColumnHausError::TypeNotFound(name.to_string()))
    }

    /// Convert an application value into its storage form
    pub fn encode(&self, name: &str, value: ColumnValue) -> Result<ColumnValue, ColumnHausError> {
        let entry = self.entry(name)?;
        Ok(entry.column_type.encode(value, &self.dialect)?)
    }

    /// Convert a stored value back into its application form
    pub fn decode(&self, name: &str, value: ColumnValue) -> Result<ColumnValue, ColumnHausError> {
        let entry = self.entry(name)?;
        Ok(entry.column_type.decode(value, &self.dialect)?)
    }
}
