//! Integration tests for the portable column types
//!
//! Exercises the storage decisions and value conversions through the public
//! API, the way a database layer would drive them.

use columnhaus::prelude::*;

const CANONICAL: &str = "12345678-1234-5678-1234-567812345678";
const HEX: &str = "12345678123456781234567812345678";

fn sample() -> Uuid {
    Uuid::parse_str(CANONICAL).unwrap()
}

fn backends() -> Vec<&'static str> {
    vec!["postgresql", "mysql", "sqlite", "oracle", "mssql", "duckdb"]
}

#[test]
fn test_sqlite_stores_hex() {
    let stored = PortableUuid::new()
        .encode(ColumnValue::Uuid(sample()), &Dialect::from_name("sqlite"))
        .unwrap();
    assert_eq!(stored, ColumnValue::from(HEX));
}

#[test]
fn test_sqlite_reads_hex() {
    let restored = PortableUuid::new()
        .decode(ColumnValue::from(HEX), &Dialect::from_name("sqlite"))
        .unwrap();
    assert_eq!(restored, ColumnValue::Uuid(sample()));
}

#[test]
fn test_postgres_stores_canonical_text() {
    let stored = PortableUuid::new()
        .encode(ColumnValue::Uuid(sample()), &Dialect::from_name("postgresql"))
        .unwrap();
    assert_eq!(stored, ColumnValue::from(CANONICAL));
}

#[test]
fn test_invalid_uuid_text_is_rejected() {
    let err = PortableUuid::new()
        .encode(ColumnValue::from("not-a-uuid"), &Dialect::from_name("sqlite"))
        .unwrap_err();
    assert!(matches!(err, TypeMappingError::InvalidUuidFormat { .. }));
}

#[test]
fn test_mysql_string_gets_default_length() {
    let descriptor = LengthNormalizingString::new()
        .resolve_storage_descriptor(&Dialect::from_name("mysql"));
    assert_eq!(descriptor, StorageDescriptor::Text { length: Some(255) });
    assert_eq!(descriptor.sql_type(), "VARCHAR(255)");
}

#[test]
fn test_round_trip_and_null_identity_on_every_backend() {
    let guid = PortableUuid::new();
    for backend in backends() {
        let dialect = Dialect::from_name(backend);
        for _ in 0..32 {
            let id = Uuid::new_v4();
            let stored = guid.encode(ColumnValue::Uuid(id), &dialect).unwrap();
            assert_eq!(guid.decode(stored, &dialect).unwrap(), ColumnValue::Uuid(id));
        }
        assert_eq!(guid.encode(ColumnValue::Null, &dialect).unwrap(), ColumnValue::Null);
        assert_eq!(guid.decode(ColumnValue::Null, &dialect).unwrap(), ColumnValue::Null);
    }
}

#[test]
fn test_unknown_backends_fall_back_to_hex() {
    for backend in ["oracle", "mssql", "duckdb", "something-new"] {
        let dialect = Dialect::from_name(backend);
        assert_eq!(
            PortableUuid::new().resolve_storage_descriptor(&dialect),
            StorageDescriptor::Char { length: 32 }
        );
        assert_eq!(
            LengthNormalizingString::new().resolve_storage_descriptor(&dialect),
            StorageDescriptor::Text { length: None }
        );
    }
}

#[test]
fn test_registry_from_config_renders_mysql_table() {
    let config = AppConfig::from_toml_str(
        r#"
        [database]
        backend = "mysql"
        host = "localhost"
        port = 3306
        database = "app"
        username = "root"
        password = ""
        "#,
    )
    .unwrap();
    let registry = ColumnRegistry::from_config(&config);

    let sql = registry
        .create_table_sql(
            "accounts",
            &[
                ColumnDef::new("id", GUID).primary_key(),
                ColumnDef::new("email", AUTO_STRING).not_null(),
            ],
        )
        .unwrap();
    assert_eq!(
        sql,
        "CREATE TABLE IF NOT EXISTS accounts (id CHAR(32) PRIMARY KEY, email VARCHAR(255) NOT NULL)"
    );

    let stored = registry.encode(GUID, ColumnValue::from(CANONICAL)).unwrap();
    assert_eq!(stored, ColumnValue::from(HEX));
}

#[test]
fn test_custom_type_registration() {
    let mut registry = ColumnRegistry::new(Dialect::MySql);
    registry
        .register_type(
            "short_code".to_string(),
            LengthNormalizingString::new().with_length(8),
        )
        .unwrap();
    assert_eq!(
        registry.descriptor("short_code").unwrap(),
        StorageDescriptor::Text { length: Some(8) }
    );
}
