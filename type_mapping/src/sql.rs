//! SQL dialect detection and DDL type rendering
//!
//! This module maps backend identifiers to dialects and renders
//! storage descriptors as column types.

use crate::types::StorageDescriptor;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Database backend a connection targets
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dialect {
    Postgres,
    MySql,
    Sqlite,
    /// Any backend without special handling, keyed by its normalized name
    Other(String),
}

impl Dialect {
    /// Build a dialect from a backend name such as `postgresql` or `mysql+pymysql`
    pub fn from_name(name: &str) -> Self {
        // Normalize: drop a driver suffix and ignore case and surrounding whitespace
        let base = name.split('+').next().unwrap_or_default().trim();
        let normalized = base.to_ascii_lowercase();
        match normalized.as_str() {
            "postgresql" | "postgres" => Dialect::Postgres,
            "mysql" | "mariadb" => Dialect::MySql,
            "sqlite" | "sqlite3" => Dialect::Sqlite,
            _ => Dialect::Other(normalized),
        }
    }

    /// Build a dialect from the scheme of a connection URL
    pub fn from_url(url: &str) -> Self {
        let scheme = url.split_once("://").map(|(scheme, _)| scheme).unwrap_or(url);
        Self::from_name(scheme)
    }

    /// Canonical backend name
    pub fn name(&self) -> &str {
        match self {
            Dialect::Postgres => "postgresql",
            Dialect::MySql => "mysql",
            Dialect::Sqlite => "sqlite",
            Dialect::Other(name) => name,
        }
    }

    pub fn is_postgres(&self) -> bool {
        matches!(self, Dialect::Postgres)
    }

    pub fn is_mysql(&self) -> bool {
        matches!(self, Dialect::MySql)
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<&str> for Dialect {
    fn from(name: &str) -> Self {
        Dialect::from_name(name)
    }
}

impl StorageDescriptor {
    /// Column type as it appears in DDL
    pub fn sql_type(&self) -> String {
        match self {
            StorageDescriptor::Text { length: None } => "VARCHAR".to_string(),
            StorageDescriptor::Text { length: Some(n) } => format!("VARCHAR({})", n),
            StorageDescriptor::Char { length } => format!("CHAR({})", length),
            StorageDescriptor::NativeUuid => "UUID".to_string(),
        }
    }
}
