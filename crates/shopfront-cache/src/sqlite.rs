use crate::store::{KeyValueStore, Result};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use tracing::debug;

/// SQLite-backed key-value store
///
/// SQLite was chosen because:
/// - Zero-config embedded database
/// - Writes are atomic, so a crash mid-toggle never leaves half a value
/// - Doesn't require a separate process
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn new<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        let conn = Connection::open(db_path.as_ref())?;
        debug!("Opened SQLite store at {}", db_path.as_ref().display());

        // Initialize schema on first run
        Self::init_schema(&conn)?;

        Ok(Self { conn })
    }

    /// Throwaway database, mostly for tests and `--store memory` style runs
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::init_schema(&conn)?;
        Ok(Self { conn })
    }

    fn init_schema(conn: &Connection) -> Result<()> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS kv (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at INTEGER NOT NULL
            )",
            [],
        )?;

        Ok(())
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get::<_, String>(0)
            })
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let now = chrono::Utc::now().timestamp();
        self.conn.execute(
            "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, now],
        )?;
        debug!("Stored {} bytes under '{}'", value.len(), key);
        Ok(())
    }
}
