//! Notifications emitted by state transitions
//!
//! Events are transient: the presentation layer shows them and forgets them.

use serde::Serialize;

use super::badges::Badge;
use super::levels::Level;
use crate::language::Language;

/// A level up event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelUp {
    pub old_level: u32,
    pub new_level: u32,
}

impl LevelUp {
    pub fn title(&self, lang: Language) -> &'static str {
        Level::get(self.new_level)
            .map(|l| l.title(lang))
            .unwrap_or_default()
    }
}

/// Events that can happen during a transition
#[derive(Debug, Clone)]
pub enum GamificationEvent {
    XpAwarded { amount: u32, reason: String },
    LevelUp(LevelUp),
    BadgeUnlocked(&'static Badge),
    DailyRewardGranted { streak_day: u32, amount: u32 },
    StreakExtended { days: u32 },
}

/// Notification categories, used to pick how long a popup stays visible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Xp,
    LevelUp,
    Badge,
    DailyReward,
    Streak,
}

impl GamificationEvent {
    pub fn kind(&self) -> NotificationKind {
        match self {
            Self::XpAwarded { .. } => NotificationKind::Xp,
            Self::LevelUp(_) => NotificationKind::LevelUp,
            Self::BadgeUnlocked(_) => NotificationKind::Badge,
            Self::DailyRewardGranted { .. } => NotificationKind::DailyReward,
            Self::StreakExtended { .. } => NotificationKind::Streak,
        }
    }

    /// Headline events get a popup; XP ticks only update counters
    pub fn is_celebration(&self) -> bool {
        !matches!(self, Self::XpAwarded { .. })
    }
}

/// Result of a daily reward claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyRewardClaim {
    pub granted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<u32>,
}

impl DailyRewardClaim {
    pub fn granted(amount: u32) -> Self {
        Self {
            granted: true,
            amount: Some(amount),
        }
    }

    pub fn already_claimed() -> Self {
        Self {
            granted: false,
            amount: None,
        }
    }
}

/// Result of a badge award attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeAward {
    Awarded,
    AlreadyHeld,
    NotFound,
}

impl BadgeAward {
    pub fn is_new(&self) -> bool {
        matches!(self, Self::Awarded)
    }
}
