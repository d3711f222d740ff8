//! PostgreSQL parameter binding and row reading
//!
//! This module moves storage values between `ColumnValue` and `sqlx` queries
//! and rows, using the column's storage descriptor to pick the wire type.

use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::Query;
use sqlx::{Postgres, Row};
use type_mapping::{parse_uuid, uuid_to_canonical, uuid_to_hex, ColumnValue, StorageDescriptor};
use uuid::Uuid;

use crate::core::ColumnRegistry;
use crate::errors::ColumnHausError;

/// Postgres query with positional arguments
pub type PgQuery<'q> = Query<'q, Postgres, PgArguments>;

/// Bind a storage value to the next query parameter
///
/// Text headed for a native `UUID` column is parsed and sent as a `uuid`
/// parameter, since Postgres will not implicitly cast a `text` parameter.
pub fn bind_column<'q>(
    query: PgQuery<'q>,
    descriptor: &StorageDescriptor,
    value: ColumnValue,
) -> Result<PgQuery<'q>, ColumnHausError> {
    let query = match (descriptor, value) {
        (StorageDescriptor::NativeUuid, ColumnValue::Null) => query.bind(None::<Uuid>),
        (_, ColumnValue::Null) => query.bind(None::<String>),
        (StorageDescriptor::NativeUuid, ColumnValue::Uuid(id)) => query.bind(id),
        (StorageDescriptor::NativeUuid, ColumnValue::Text(text)) => query.bind(parse_uuid(&text)?),
        (StorageDescriptor::Char { .. }, ColumnValue::Uuid(id)) => query.bind(uuid_to_hex(&id)),
        (StorageDescriptor::Text { .. }, ColumnValue::Uuid(id)) => {
            query.bind(uuid_to_canonical(&id))
        }
        (_, ColumnValue::Text(text)) => query.bind(text),
    };
    Ok(query)
}

/// Read a column from a result row as a storage value
pub fn read_column(
    row: &PgRow,
    column: &str,
    descriptor: &StorageDescriptor,
) -> Result<ColumnValue, ColumnHausError> {
    let value = match descriptor {
        StorageDescriptor::NativeUuid => ColumnValue::from(row.try_get::<Option<Uuid>, _>(column)?),
        _ => ColumnValue::from(row.try_get::<Option<String>, _>(column)?),
    };
    Ok(value)
}

impl ColumnRegistry {
    /// Encode a value with a registered type and bind it to the query
    pub fn bind_value<'q>(
        &self,
        query: PgQuery<'q>,
        type_name: &str,
        value: ColumnValue,
    ) -> Result<PgQuery<'q>, ColumnHausError> {
        let descriptor = self.descriptor(type_name)?;
        let stored = self.encode(type_name, value)?;
        trace_log!("[BIND] {} as {:?}: {:?}", type_name, descriptor, stored);
        bind_column(query, &descriptor, stored)
    }

    /// Read a column and decode it with a registered type
    pub fn fetch_value(
        &self,
        row: &PgRow,
        column: &str,
        type_name: &str,
    ) -> Result<ColumnValue, ColumnHausError> {
        let descriptor = self.descriptor(type_name)?;
        let stored = read_column(row, column, &descriptor)?;
        self.decode(type_name, stored)
    }
}
