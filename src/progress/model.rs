//! Persistent player progress record

use std::collections::VecDeque;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::levels::Level;

/// Maximum number of entries kept in the activity log
pub const ACTIVITY_LOG_LIMIT: usize = 20;

/// Kind of a recorded activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Experience,
    LevelUp,
    BadgeUnlocked,
    Visit,
}

impl ActivityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Experience => "experience",
            Self::LevelUp => "level_up",
            Self::BadgeUnlocked => "badge_unlocked",
            Self::Visit => "visit",
        }
    }
}

/// One line of the activity feed. Display only, not authoritative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub kind: ActivityKind,
    pub payload: String,
    pub timestamp: DateTime<Utc>,
}

/// Everything the engine persists about one player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerProgress {
    pub experience: u32,
    /// Always `Level::for_xp(experience)`
    pub level: u32,
    /// Badge ids in unlock order
    pub unlocked_badges: Vec<String>,
    pub login_streak: u32,
    pub best_streak: u32,
    pub last_active_date: Option<NaiveDate>,
    pub daily_reward_claimed_today: bool,
    pub games_completed: u32,
    /// Distinct stories read
    pub stories_read: u32,
    pub perfect_score_count: u32,
    pub read_stories: Vec<String>,
    /// Most recent first
    pub activity_log: VecDeque<ActivityEntry>,
}

impl Default for PlayerProgress {
    fn default() -> Self {
        Self {
            experience: 0,
            level: 1,
            unlocked_badges: Vec::new(),
            login_streak: 0,
            best_streak: 0,
            last_active_date: None,
            daily_reward_claimed_today: false,
            games_completed: 0,
            stories_read: 0,
            perfect_score_count: 0,
            read_stories: Vec::new(),
            activity_log: VecDeque::new(),
        }
    }
}

impl PlayerProgress {
    pub fn has_badge(&self, badge_id: &str) -> bool {
        self.unlocked_badges.iter().any(|b| b == badge_id)
    }

    pub fn has_read(&self, story_id: &str) -> bool {
        self.read_stories.iter().any(|s| s == story_id)
    }

    /// Prepend an activity entry, dropping the oldest beyond the limit
    pub fn log_activity(&mut self, kind: ActivityKind, payload: impl Into<String>, at: DateTime<Utc>) {
        self.activity_log.push_front(ActivityEntry {
            kind,
            payload: payload.into(),
            timestamp: at,
        });
        self.activity_log.truncate(ACTIVITY_LOG_LIMIT);
    }

    /// Re-establish the derived fields after loading from storage.
    ///
    /// Returns true if anything had to be corrected.
    pub fn normalize(&mut self) -> bool {
        let before = self.clone();

        self.level = Level::for_xp(self.experience).level;
        self.best_streak = self.best_streak.max(self.login_streak);

        let mut seen = Vec::with_capacity(self.unlocked_badges.len());
        self.unlocked_badges.retain(|id| {
            if seen.contains(id) {
                false
            } else {
                seen.push(id.clone());
                true
            }
        });

        self.activity_log.truncate(ACTIVITY_LOG_LIMIT);

        *self != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
    }

    #[test]
    fn test_default_progress() {
        let progress = PlayerProgress::default();
        assert_eq!(progress.experience, 0);
        assert_eq!(progress.level, 1);
        assert!(progress.unlocked_badges.is_empty());
        assert_eq!(progress.login_streak, 0);
        assert!(progress.last_active_date.is_none());
        assert!(progress.activity_log.is_empty());
    }

    #[test]
    fn test_activity_log_is_bounded_and_newest_first() {
        let mut progress = PlayerProgress::default();
        for i in 0..25 {
            progress.log_activity(ActivityKind::Experience, format!("entry {}", i), at(i));
        }
        assert_eq!(progress.activity_log.len(), ACTIVITY_LOG_LIMIT);
        assert_eq!(progress.activity_log[0].payload, "entry 24");
        assert_eq!(progress.activity_log[ACTIVITY_LOG_LIMIT - 1].payload, "entry 5");
    }

    #[test]
    fn test_normalize_rederives_level_and_dedupes_badges() {
        let mut progress = PlayerProgress {
            experience: 130,
            level: 7,
            unlocked_badges: vec![
                "first_game".to_string(),
                "streak_3".to_string(),
                "first_game".to_string(),
            ],
            login_streak: 4,
            best_streak: 2,
            ..Default::default()
        };

        assert!(progress.normalize());
        assert_eq!(progress.level, 3);
        assert_eq!(progress.best_streak, 4);
        assert_eq!(progress.unlocked_badges, vec!["first_game", "streak_3"]);
        assert!(!progress.normalize());
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let progress: PlayerProgress = serde_json::from_str(r#"{"experience": 60}"#).unwrap();
        assert_eq!(progress.experience, 60);
        assert_eq!(progress.level, 1); // Fixed by normalize() on load
        assert!(progress.read_stories.is_empty());
    }

    #[test]
    fn test_json_field_names() {
        let mut progress = PlayerProgress {
            last_active_date: NaiveDate::from_ymd_opt(2024, 5, 2),
            ..Default::default()
        };
        progress.log_activity(ActivityKind::LevelUp, "level 2", at(0));

        let value = serde_json::to_value(&progress).unwrap();
        assert_eq!(value["last_active_date"], "2024-05-02");
        assert_eq!(value["daily_reward_claimed_today"], false);
        assert_eq!(value["activity_log"][0]["kind"], "level_up");
    }
}
