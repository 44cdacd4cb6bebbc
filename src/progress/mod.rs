//! Gamification system: XP, Levels, Badges, Streaks, and Daily Rewards
//!
//! Mini-games and the story library report activities into a
//! [`GamificationEngine`]; the engine keeps a single [`PlayerProgress`]
//! record, writes it through to a [`ProgressStore`](crate::store::ProgressStore)
//! and queues [`GamificationEvent`]s for the presentation layer.
//!
//! # Usage
//!
//! ```ignore
//! let mut engine = GamificationEngine::open(Box::new(MemoryStore::new()), Box::new(SystemClock));
//!
//! engine.track_game_completion("memory", 8, 10);
//! for event in engine.take_events() {
//!     show_popup(&event);
//! }
//! ```

mod badges;
mod checker;
mod clock;
mod engine;
mod events;
mod levels;
mod model;
mod rewards;
mod streaks;
mod transition;

pub use badges::{Badge, BadgeCategory, BadgeId, BADGES};
pub use checker::{check_game_badges, check_story_badges, check_streak_badges};
pub use clock::{Clock, ManualClock, Moment, SystemClock};
pub use engine::GamificationEngine;
pub use events::{BadgeAward, DailyRewardClaim, GamificationEvent, LevelUp, NotificationKind};
pub use levels::{Level, LevelProgress, LEVELS};
pub use model::{ActivityEntry, ActivityKind, PlayerProgress, ACTIVITY_LOG_LIMIT};
pub use rewards::{DailyRewardSchedule, XpRewards, DAILY_REWARDS};
pub use streaks::StreakChange;
pub use transition::{Action, Outcome, Transition};
