//! CLI command implementations

pub mod init;
pub mod present;
pub mod report;
pub mod status;

use kinderxp::config::Config;
use kinderxp::progress::SystemClock;
use kinderxp::store::{open_store, MemoryStore};
use kinderxp::GamificationEngine;

/// Open the engine for the configured profile.
///
/// If the store cannot be opened the session continues in memory.
pub fn open_engine(config: &Config) -> GamificationEngine {
    let data_dir = config.data_dir();
    let profile = &config.storage.profile;

    let store = match open_store(config.storage.backend, &data_dir, profile) {
        Ok(store) => store,
        Err(e) => {
            tracing::warn!(
                "Failed to open progress store in {}, progress will not be saved: {}",
                data_dir.display(),
                e
            );
            Box::new(MemoryStore::with_profile(profile))
        }
    };

    GamificationEngine::open(store, Box::new(SystemClock))
}
