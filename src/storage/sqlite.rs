//! SQLite storage implementation
//!
//! This module provides a SQLite-backed [`EmailSink`].

use crate::storage::schema::{initialize_schema, reset_schema};
use crate::storage::traits::{EmailSink, StorageError, StorageResult};
use crate::storage::EmailRecord;
use chrono::Utc;
use rusqlite::{params, Connection};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

/// SQLite email sink
///
/// The connection sits behind a mutex so one sink can be shared by all
/// workers; `UNIQUE(email)` with `INSERT OR IGNORE` keeps the first writer.
pub struct SqliteEmailSink {
    conn: Mutex<Connection>,
}

impl SqliteEmailSink {
    /// Opens the database for a new run, discarding the previous run's emails
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the SQLite database file
    ///
    /// # Returns
    ///
    /// * `Ok(SqliteEmailSink)` - Database opened with an empty `emails` table
    /// * `Err(StorageError)` - Failed to open or reset the database
    pub fn create(path: &Path) -> StorageResult<Self> {
        let conn = open_connection(path)?;
        reset_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Opens the database without touching existing rows
    pub fn open_existing(path: &Path) -> StorageResult<Self> {
        let conn = open_connection(path)?;
        initialize_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Creates an in-memory database
    pub fn new_in_memory() -> StorageResult<Self> {
        let conn = Connection::open_in_memory()?;
        initialize_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Counts stored email records
    pub fn count_emails(&self) -> StorageResult<u64> {
        let conn = self.lock()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM emails", [], |row| row.get(0))?;
        Ok(count as u64)
    }

    /// Lists stored email records in insertion order
    pub fn list_emails(&self) -> StorageResult<Vec<EmailRecord>> {
        let conn = self.lock()?;
        let mut stmt =
            conn.prepare("SELECT shop_name, website, email FROM emails ORDER BY id ASC")?;

        let records = stmt
            .query_map([], |row| {
                Ok(EmailRecord {
                    shop_name: row.get::<_, Option<String>>(0)?.unwrap_or_default(),
                    website: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
                    email: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(records)
    }

    fn lock(&self) -> StorageResult<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| StorageError::LockPoisoned)
    }
}

impl EmailSink for SqliteEmailSink {
    fn insert_if_absent(
        &self,
        shop_name: &str,
        website: &str,
        email: &str,
    ) -> StorageResult<bool> {
        let now = Utc::now().to_rfc3339();
        let conn = self.lock()?;
        let changed = conn.execute(
            "INSERT OR IGNORE INTO emails (shop_name, website, email, found_at) VALUES (?1, ?2, ?3, ?4)",
            params![shop_name, website, email, now],
        )?;
        Ok(changed == 1)
    }
}

fn open_connection(path: &Path) -> StorageResult<Connection> {
    let conn = Connection::open(path)?;

    conn.execute_batch(
        "
        PRAGMA journal_mode = WAL;
        PRAGMA synchronous = NORMAL;
    ",
    )?;

    Ok(conn)
}
