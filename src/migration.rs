//! Table DDL generation
//!
//! This module renders `CREATE TABLE` statements from registered column types
//! and runs them against PostgreSQL.

use sqlx::PgPool;
use type_mapping::{Dialect, StorageDescriptor};

use crate::core::ColumnRegistry;
use crate::errors::ColumnHausError;

/// A column in a generated table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDef {
    pub name: String,
    /// Name the column type is registered under
    pub type_name: String,
    pub primary_key: bool,
    pub not_null: bool,
}

impl ColumnDef {
    pub fn new(name: &str, type_name: &str) -> Self {
        Self {
            name: name.to_string(),
            type_name: type_name.to_string(),
            primary_key: false,
            not_null: false,
        }
    }

    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    pub fn not_null(mut self) -> Self {
        self.not_null = true;
        self
    }
}

// PostgreSQL truncates identifiers beyond this length
const MAX_IDENTIFIER_LENGTH: usize = 63;

/// Check that a table or column name is safe to splice into DDL
pub fn validate_identifier(name: &str) -> Result<(), ColumnHausError> {
    let valid = !name.is_empty()
        && name.len() <= MAX_IDENTIFIER_LENGTH
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !name.starts_with(|c: char| c.is_ascii_digit());

    if valid {
        Ok(())
    } else {
        Err(ColumnHausError::InvalidIdentifier(name.to_string()))
    }
}

/// Render a single column definition
pub fn column_definition(column: &ColumnDef, descriptor: &StorageDescriptor) -> String {
    let mut definition = format!("{} {}", column.name, descriptor.sql_type());
    if column.primary_key {
        definition.push_str(" PRIMARY KEY");
    } else if column.not_null {
        definition.push_str(" NOT NULL");
    }
    definition
}

/// Render a `DROP TABLE` statement
pub fn drop_table_sql(table_name: &str) -> String {
    format!("DROP TABLE IF EXISTS {}", table_name)
}

impl ColumnRegistry {
    /// Render a `CREATE TABLE` statement using this registry's descriptors
    pub fn create_table_sql(
        &self,
        table_name: &str,
        columns: &[ColumnDef],
    ) -> Result<String, ColumnHausError> {
        validate_identifier(table_name)?;
        let definitions = columns
            .iter()
            .map(|column| {
                validate_identifier(&column.name)?;
                self.descriptor(&column.type_name)
                    .map(|descriptor| column_definition(column, &descriptor))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(format!(
            "CREATE TABLE IF NOT EXISTS {} ({})",
            table_name,
            definitions.join(", ")
        ))
    }

    /// Create a table on PostgreSQL
    /// If recreate is true, drops existing table first
    pub async fn auto_migrate(
        &self,
        pool: &PgPool,
        table_name: &str,
        columns: &[ColumnDef],
        recreate: bool,
    ) -> Result<(), ColumnHausError> {
        if !self.dialect().is_postgres() {
            return Err(ColumnHausError::DialectMismatch {
                expected: Dialect::Postgres.to_string(),
                actual: self.dialect().to_string(),
            });
        }

        let create_table_sql = self.create_table_sql(table_name, columns)?;

        if recreate {
            let drop_sql = drop_table_sql(table_name);
            debug_log!("Dropping table with SQL: {}", drop_sql);
            sqlx::query(&drop_sql).execute(pool).await?;
        }

        debug_log!("Creating table with SQL: {}", create_table_sql);
        sqlx::query(&create_table_sql).execute(pool).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AUTO_STRING, GUID};
    use config::ColumnConfig;

    fn user_columns() -> Vec<ColumnDef> {
        vec![
            ColumnDef::new("id", GUID).primary_key(),
            ColumnDef::new("name", AUTO_STRING).not_null(),
            ColumnDef::new("owner_id", GUID),
        ]
    }

    #[test]
    fn test_create_table_on_mysql() {
        let registry = ColumnRegistry::with_defaults(Dialect::MySql, &ColumnConfig::default());
        let sql = registry.create_table_sql("users", &user_columns()).unwrap();
        assert_eq!(
            sql,
            "CREATE TABLE IF NOT EXISTS users (id CHAR(32) PRIMARY KEY, name VARCHAR(255) NOT NULL, owner_id CHAR(32))"
        );
    }

    #[test]
    fn test_create_table_on_postgres() {
        let registry = ColumnRegistry::with_defaults(Dialect::Postgres, &ColumnConfig::default());
        let sql = registry.create_table_sql("users", &user_columns()).unwrap();
        assert_eq!(
            sql,
            "CREATE TABLE IF NOT EXISTS users (id UUID PRIMARY KEY, name VARCHAR NOT NULL, owner_id UUID)"
        );
    }

    #[test]
    fn test_create_table_with_unknown_type_fails() {
        let registry = ColumnRegistry::with_defaults(Dialect::Sqlite, &ColumnConfig::default());
        let result = registry.create_table_sql("t", &[ColumnDef::new("x", "money")]);
        assert!(matches!(result, Err(ColumnHausError::TypeNotFound(ref n)) if n == "money"));
    }

    #[test]
    fn test_identifiers_are_validated() {
        assert!(validate_identifier("user_accounts2").is_ok());
        let too_long = "a".repeat(64);
        for bad in ["", "2users", "users; DROP TABLE x", "naïve", too_long.as_str()] {
            assert!(matches!(
                validate_identifier(bad),
                Err(ColumnHausError::InvalidIdentifier(_))
            ));
        }

        let registry = ColumnRegistry::with_defaults(Dialect::Sqlite, &ColumnConfig::default());
        let result = registry.create_table_sql("t", &[ColumnDef::new("bad name", GUID)]);
        assert!(matches!(result, Err(ColumnHausError::InvalidIdentifier(ref n)) if n == "bad name"));
    }

    #[test]
    fn test_drop_table_sql() {
        assert_eq!(drop_table_sql("users"), "DROP TABLE IF EXISTS users");
    }
}
