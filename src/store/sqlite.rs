//! SQLite progress store
//!
//! A small key-value table; each profile's record lives under its own key.

use std::path::Path;

use chrono::Utc;
use rusqlite::{Connection, OptionalExtension};

use super::{decode, encode, storage_key, ProgressStore, StoreError};
use crate::progress::PlayerProgress;

const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER PRIMARY KEY
);

CREATE TABLE IF NOT EXISTS kv_store (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL,
    updated_at INTEGER NOT NULL
);
"#;

const SCHEMA_VERSION: i32 = 1;

/// Progress records in a SQLite database
pub struct SqliteStore {
    conn: Connection,
    key: String,
}

impl SqliteStore {
    /// Open or create the database at a specific path
    pub fn open(path: &Path, profile: &str) -> Result<Self, StoreError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "synchronous", "NORMAL")?;
        Self::with_connection(conn, profile)
    }

    /// In-memory database, mostly for tests
    pub fn open_in_memory(profile: &str) -> Result<Self, StoreError> {
        Self::with_connection(Connection::open_in_memory()?, profile)
    }

    fn with_connection(conn: Connection, profile: &str) -> Result<Self, StoreError> {
        let store = Self {
            conn,
            key: storage_key(profile),
        };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> Result<(), StoreError> {
        self.conn.execute_batch(SCHEMA_SQL)?;

        let version: i32 = self
            .conn
            .query_row(
                "SELECT COALESCE(MAX(version), 0) FROM schema_version",
                [],
                |r| r.get(0),
            )
            .unwrap_or(0);

        if version < SCHEMA_VERSION {
            self.conn.execute(
                "INSERT OR REPLACE INTO schema_version VALUES (?1)",
                [SCHEMA_VERSION],
            )?;
        }
        Ok(())
    }
}

impl ProgressStore for SqliteStore {
    fn load(&self) -> Result<Option<PlayerProgress>, StoreError> {
        let raw: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1",
                [&self.key],
                |r| r.get(0),
            )
            .optional()?;
        raw.map(|raw| decode(&raw)).transpose()
    }

    fn save(&mut self, progress: &PlayerProgress) -> Result<(), StoreError> {
        let raw = encode(progress)?;
        let now = Utc::now().timestamp_millis();
        self.conn.execute(
            r#"
            INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET value = ?2, updated_at = ?3
            "#,
            (&self.key, &raw, now),
        )?;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        self.conn
            .execute("DELETE FROM kv_store WHERE key = ?1", [&self.key])?;
        Ok(())
    }
}
