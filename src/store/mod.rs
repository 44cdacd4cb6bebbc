//! Progress persistence
//!
//! One `PlayerProgress` record per profile, stored as a JSON document under a
//! fixed key. Backends:
//!
//! - `MemoryStore`: in-process, used by tests and `backend = "memory"`
//! - `JsonFileStore`: `<data_dir>/progress-<profile>.json`
//! - `SqliteStore`: key-value table in `<data_dir>/progress.db`
//!
//! The engine treats every error from a store as recoverable.

mod json_file;
mod memory;
mod sqlite;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::progress::PlayerProgress;

/// Profile used when none is configured
pub const DEFAULT_PROFILE: &str = "default";

/// Error type for progress stores
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Corrupted progress record: {0}")]
    Corrupt(#[source] serde_json::Error),

    #[error("Failed to encode progress: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Repository for the single persisted progress record
pub trait ProgressStore {
    /// Load the saved record; `Ok(None)` when nothing was saved yet
    fn load(&self) -> Result<Option<PlayerProgress>, StoreError>;

    /// Replace the saved record
    fn save(&mut self, progress: &PlayerProgress) -> Result<(), StoreError>;

    /// Remove the saved record
    fn clear(&mut self) -> Result<(), StoreError>;
}

/// Available storage backends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    #[default]
    Json,
    Sqlite,
    Memory,
}

impl StoreBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Sqlite => "sqlite",
            Self::Memory => "memory",
        }
    }
}

/// Storage key for a profile's record
pub fn storage_key(profile: &str) -> String {
    format!("progress:{}", profile)
}

/// Serialize a record to its stored form
pub fn encode(progress: &PlayerProgress) -> Result<String, StoreError> {
    serde_json::to_string(progress).map_err(StoreError::Encode)
}

/// Parse a stored record
pub fn decode(raw: &str) -> Result<PlayerProgress, StoreError> {
    serde_json::from_str(raw).map_err(StoreError::Corrupt)
}

/// Open the configured backend for a profile
pub fn open_store(
    backend: StoreBackend,
    data_dir: &Path,
    profile: &str,
) -> Result<Box<dyn ProgressStore>, StoreError> {
    let store: Box<dyn ProgressStore> = match backend {
        StoreBackend::Json => Box::new(JsonFileStore::in_dir(data_dir, profile)),
        StoreBackend::Sqlite => Box::new(SqliteStore::open(&data_dir.join("progress.db"), profile)?),
        StoreBackend::Memory => Box::new(MemoryStore::with_profile(profile)),
    };
    tracing::debug!(
        backend = backend.as_str(),
        profile,
        "Opened progress store"
    );
    Ok(store)
}
