//! kinderxp - play corner gamification engine
//!
//! Children earn XP by finishing mini-games and reading stories, level up,
//! collect badges, keep visit streaks going and claim a daily reward.
//!
//! ## Pieces
//!
//! 1. **progress**: the rules (levels, badges, streaks, rewards), the pure
//!    transition function and the [`GamificationEngine`] that owns a session.
//!
//! 2. **store**: where the single progress record lives (JSON file, SQLite
//!    or memory).
//!
//! 3. **config**: `~/.kinderxp/config.toml`.

pub mod config;
mod fs_util;
pub mod language;
pub mod progress;
pub mod store;

pub use language::Language;
pub use progress::{
    DailyRewardClaim, GamificationEngine, GamificationEvent, LevelProgress, PlayerProgress,
};
pub use store::{ProgressStore, StoreError};
