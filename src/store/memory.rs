//! In-memory progress store

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use super::{decode, encode, storage_key, ProgressStore, StoreError, DEFAULT_PROFILE};
use crate::progress::PlayerProgress;

#[derive(Debug, Default)]
struct Slots {
    values: HashMap<String, String>,
    unavailable: bool,
}

/// Key-value store kept in memory.
///
/// Records are held in their encoded form, so a load goes through the same
/// parsing as the file backends. Clones share the same slots.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    key: String,
    slots: Arc<Mutex<Slots>>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::with_profile(DEFAULT_PROFILE)
    }

    pub fn with_profile(profile: &str) -> Self {
        Self {
            key: storage_key(profile),
            slots: Arc::new(Mutex::new(Slots::default())),
        }
    }

    /// A view of the same slots under another profile
    pub fn for_profile(&self, profile: &str) -> Self {
        Self {
            key: storage_key(profile),
            slots: Arc::clone(&self.slots),
        }
    }

    fn slots(&self) -> MutexGuard<'_, Slots> {
        self.slots.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// The stored document for this profile, if any
    pub fn raw(&self) -> Option<String> {
        self.slots().values.get(&self.key).cloned()
    }

    /// Overwrite the stored document with arbitrary text
    pub fn put_raw(&self, raw: impl Into<String>) {
        let key = self.key.clone();
        self.slots().values.insert(key, raw.into());
    }

    /// Make every operation fail, as a browser with storage disabled would
    pub fn set_unavailable(&self, unavailable: bool) {
        self.slots().unavailable = unavailable;
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.slots().unavailable {
            return Err(StoreError::Unavailable("memory store disabled".to_string()));
        }
        Ok(())
    }
}

impl ProgressStore for MemoryStore {
    fn load(&self) -> Result<Option<PlayerProgress>, StoreError> {
        self.check_available()?;
        self.raw().map(|raw| decode(&raw)).transpose()
    }

    fn save(&mut self, progress: &PlayerProgress) -> Result<(), StoreError> {
        self.check_available()?;
        let raw = encode(progress)?;
        self.put_raw(raw);
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        self.check_available()?;
        let key = self.key.clone();
        self.slots().values.remove(&key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store_loads_none() {
        let store = MemoryStore::new();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_save_load_clear() {
        let mut store = MemoryStore::new();
        let progress = PlayerProgress {
            experience: 77,
            level: 2,
            ..Default::default()
        };
        store.save(&progress).unwrap();
        assert_eq!(store.load().unwrap(), Some(progress));

        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_profiles_do_not_collide() {
        let mut first = MemoryStore::new();
        let second = first.for_profile("sibling");
        first.save(&PlayerProgress::default()).unwrap();
        assert!(second.load().unwrap().is_none());
    }

    #[test]
    fn test_unavailable_store_errors() {
        let mut store = MemoryStore::new();
        store.set_unavailable(true);
        assert!(matches!(store.load(), Err(StoreError::Unavailable(_))));
        assert!(store.save(&PlayerProgress::default()).is_err());
    }
}
