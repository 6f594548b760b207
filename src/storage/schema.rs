//! Database schema definitions
//!
//! The `emails` table only lives for one run: opening a sink for writing
//! drops whatever a previous run left behind.

/// SQL schema for the database
pub const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS emails (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    shop_name TEXT,
    website TEXT,
    email TEXT NOT NULL UNIQUE,
    found_at TEXT NOT NULL
);
"#;

/// Creates the schema if it does not exist yet
pub fn initialize_schema(conn: &rusqlite::Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(SCHEMA_SQL)?;
    Ok(())
}

/// Drops the previous run's table and creates an empty one
pub fn reset_schema(conn: &rusqlite::Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch("DROP TABLE IF EXISTS emails;")?;
    initialize_schema(conn)
}
