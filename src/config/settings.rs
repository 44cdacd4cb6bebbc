//! Settings configuration types

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::language::Language;
use crate::progress::NotificationKind;
use crate::store::{StoreBackend, DEFAULT_PROFILE};

/// Where progress records are kept
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageSettings {
    /// Storage backend: "json" (default), "sqlite" or "memory"
    #[serde(default)]
    pub backend: StoreBackend,

    /// Directory for progress files
    /// Default: ~/.kinderxp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    /// Profile (one child) whose progress is loaded
    #[serde(default = "default_profile")]
    pub profile: String,
}

fn default_profile() -> String {
    DEFAULT_PROFILE.to_string()
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            data_dir: None,
            profile: default_profile(),
        }
    }
}

/// Display settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Language for badge names and level titles: "en", "ru" or "uz"
    #[serde(default)]
    pub language: Language,
}

/// How long each kind of notification stays on screen, in seconds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationSettings {
    #[serde(default = "default_level_up_secs")]
    pub level_up_secs: u64,

    #[serde(default = "default_badge_secs")]
    pub badge_secs: u64,

    #[serde(default = "default_daily_reward_secs")]
    pub daily_reward_secs: u64,

    #[serde(default = "default_streak_secs")]
    pub streak_secs: u64,

    #[serde(default = "default_xp_secs")]
    pub xp_secs: u64,
}

fn default_level_up_secs() -> u64 {
    5
}

fn default_badge_secs() -> u64 {
    4
}

fn default_daily_reward_secs() -> u64 {
    4
}

fn default_streak_secs() -> u64 {
    3
}

fn default_xp_secs() -> u64 {
    2
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            level_up_secs: default_level_up_secs(),
            badge_secs: default_badge_secs(),
            daily_reward_secs: default_daily_reward_secs(),
            streak_secs: default_streak_secs(),
            xp_secs: default_xp_secs(),
        }
    }
}

impl NotificationSettings {
    /// Auto-dismiss delay for a notification
    pub fn display_for(&self, kind: NotificationKind) -> Duration {
        let secs = match kind {
            NotificationKind::LevelUp => self.level_up_secs,
            NotificationKind::Badge => self.badge_secs,
            NotificationKind::DailyReward => self.daily_reward_secs,
            NotificationKind::Streak => self.streak_secs,
            NotificationKind::Xp => self.xp_secs,
        };
        Duration::from_secs(secs)
    }
}
