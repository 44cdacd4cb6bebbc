//! JSON file progress store

use std::path::{Path, PathBuf};

use super::{decode, encode, ProgressStore, StoreError};
use crate::fs_util::write_atomic;
use crate::progress::PlayerProgress;

/// One JSON document per profile on disk
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<dir>/progress-<profile>.json`
    pub fn in_dir(dir: &Path, profile: &str) -> Self {
        Self::new(dir.join(format!("progress-{}.json", profile)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProgressStore for JsonFileStore {
    fn load(&self) -> Result<Option<PlayerProgress>, StoreError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&self.path)?;
        decode(&content).map(Some)
    }

    fn save(&mut self, progress: &PlayerProgress) -> Result<(), StoreError> {
        let content = encode(progress)?;
        write_atomic(&self.path, content.as_bytes())?;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
