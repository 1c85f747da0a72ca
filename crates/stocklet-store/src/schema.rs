use rusqlite::Connection;

use stocklet_core::Result;

use crate::db::storage;

// Schema version (increment when changing table definitions)
pub const SCHEMA_VERSION: i32 = 1;

pub fn init_schema(conn: &Connection) -> Result<()> {
    let current_version: i32 = conn
        .query_row("PRAGMA user_version", [], |row| row.get(0))
        .map_err(storage)?;

    if current_version != 0 && current_version != SCHEMA_VERSION {
        drop_all_tables(conn)?;
    }

    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS inventory (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            quantity INTEGER NOT NULL,
            price REAL NOT NULL
        );
        "#,
    )
    .map_err(storage)?;

    conn.execute(&format!("PRAGMA user_version = {}", SCHEMA_VERSION), [])
        .map_err(storage)?;

    Ok(())
}

fn drop_all_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch("DROP TABLE IF EXISTS inventory;")
        .map_err(storage)?;
    Ok(())
}
