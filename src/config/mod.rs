//! Configuration loading and management

mod io;
mod settings;

pub use settings::{DisplaySettings, NotificationSettings, StorageSettings};

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Main configuration structure (`~/.kinderxp/config.toml`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Progress storage
    #[serde(default)]
    pub storage: StorageSettings,

    /// Language and other display options
    #[serde(default)]
    pub display: DisplaySettings,

    /// Notification auto-dismiss durations
    #[serde(default)]
    pub notifications: NotificationSettings,
}

impl Config {
    /// Directory holding progress records
    pub fn data_dir(&self) -> PathBuf {
        self.storage
            .data_dir
            .clone()
            .unwrap_or_else(Self::global_config_dir)
    }
}
