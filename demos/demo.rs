//! Shows how the same model columns are stored on different backends.
//!
//! Run with `cargo run --example demo`.

use columnhaus::prelude::*;

fn main() -> Result<(), ColumnHausError> {
    let columns = [
        ColumnDef::new("id", GUID).primary_key(),
        ColumnDef::new("title", AUTO_STRING).not_null(),
    ];
    let id = Uuid::new_v4();

    for backend in ["postgresql", "mysql", "sqlite"] {
        let registry = ColumnRegistry::with_defaults(Dialect::from_name(backend), &ColumnConfig::default());

        println!("== {}", registry.dialect());
        println!("{}", registry.create_table_sql("posts", &columns)?);

        let stored = registry.encode(GUID, ColumnValue::Uuid(id))?;
        println!("stored id: {:?}", stored);

        let restored = registry.decode(GUID, stored)?;
        println!("restored id: {:?}", restored.as_uuid());
    }

    Ok(())
}
