//! Gamification engine - the session-wide progress context
//!
//! Wraps the pure transitions with persistence and a clock. Every mutation is
//! written through to the store before the call returns; store failures are
//! logged and otherwise ignored.

use std::collections::VecDeque;

use tracing::{debug, info, warn};

use super::badges::{Badge, BADGES};
use super::clock::Clock;
use super::events::{BadgeAward, DailyRewardClaim, GamificationEvent};
use super::levels::LevelProgress;
use super::model::{ActivityEntry, PlayerProgress};
use super::transition::{Action, Outcome, Transition};
use crate::store::ProgressStore;

/// Owns one player's progress for the length of a session
pub struct GamificationEngine {
    store: Box<dyn ProgressStore>,
    clock: Box<dyn Clock>,
    progress: PlayerProgress,
    pending: Vec<GamificationEvent>,
}

impl GamificationEngine {
    /// Load saved progress (or start fresh) and register today's visit
    pub fn open(store: Box<dyn ProgressStore>, clock: Box<dyn Clock>) -> Self {
        let progress = match store.load() {
            Ok(Some(mut progress)) => {
                if progress.normalize() {
                    debug!("Corrected derived fields of saved progress");
                }
                progress
            }
            Ok(None) => {
                debug!("No saved progress, starting fresh");
                PlayerProgress::default()
            }
            Err(e) => {
                warn!("Failed to load progress, starting fresh: {}", e);
                PlayerProgress::default()
            }
        };

        let mut engine = Self {
            store,
            clock,
            progress,
            pending: Vec::new(),
        };
        engine.record_visit();
        engine
    }

    fn run(&mut self, action: Action<'_>) -> Outcome {
        let Transition {
            progress,
            events,
            outcome,
        } = self.progress.apply(action, self.clock.moment());

        if progress != self.progress {
            self.progress = progress;
            self.persist();
        }

        for event in &events {
            match event {
                GamificationEvent::LevelUp(up) => {
                    info!(old = up.old_level, new = up.new_level, "Level up")
                }
                GamificationEvent::BadgeUnlocked(badge) => {
                    info!(badge = badge.id.as_str(), "Badge unlocked")
                }
                other => debug!(?other, "Gamification event"),
            }
        }
        self.pending.extend(events);

        outcome
    }

    fn persist(&mut self) {
        if let Err(e) = self.store.save(&self.progress) {
            warn!("Failed to save progress: {}", e);
        }
    }

    // ========================================
    // OPERATIONS
    // ========================================

    /// Grant XP; `reason` only shows up in the activity log
    pub fn add_experience(&mut self, amount: u32, reason: &str) {
        self.run(Action::AddExperience { amount, reason });
    }

    /// Award a badge from the catalog.
    ///
    /// Returns true only when the badge was newly unlocked.
    pub fn award_badge(&mut self, badge_id: &str) -> bool {
        match self.run(Action::AwardBadge { badge_id }) {
            Outcome::Badge(BadgeAward::NotFound) => {
                warn!(badge_id, "Badge not found");
                false
            }
            Outcome::Badge(award) => award.is_new(),
            _ => false,
        }
    }

    /// Day-boundary check; extends or restarts the login streak
    pub fn record_visit(&mut self) {
        self.run(Action::RecordVisit);
    }

    pub fn claim_daily_reward(&mut self) -> DailyRewardClaim {
        match self.run(Action::ClaimDailyReward) {
            Outcome::DailyReward(claim) => claim,
            _ => DailyRewardClaim::already_claimed(),
        }
    }

    pub fn track_game_completion(&mut self, game_id: &str, score: u32, max_score: u32) {
        self.run(Action::GameCompleted {
            game_id,
            score,
            max_score,
        });
    }

    pub fn track_story_read(&mut self, story_id: &str) {
        self.run(Action::StoryRead { story_id });
    }

    /// Wipe all progress, including the stored record
    pub fn reset(&mut self) {
        if let Err(e) = self.store.clear() {
            warn!("Failed to clear stored progress: {}", e);
        }
        self.run(Action::Reset);
        self.pending.clear();
        self.persist();
        info!("Progress reset");
    }

    // ========================================
    // QUERIES
    // ========================================

    pub fn progress(&self) -> &PlayerProgress {
        &self.progress
    }

    pub fn progress_to_next_level(&self) -> LevelProgress {
        LevelProgress::new(self.progress.experience)
    }

    pub fn badge_catalog(&self) -> &'static [Badge] {
        BADGES
    }

    /// Unlocked badges in unlock order
    pub fn unlocked_badges(&self) -> Vec<&'static Badge> {
        self.progress
            .unlocked_badges
            .iter()
            .filter_map(|id| Badge::find(id))
            .collect()
    }

    pub fn activity_log(&self) -> &VecDeque<ActivityEntry> {
        &self.progress.activity_log
    }

    /// Notifications not yet shown
    pub fn pending_events(&self) -> &[GamificationEvent] {
        &self.pending
    }

    /// Hand pending notifications to the presentation layer
    pub fn take_events(&mut self) -> Vec<GamificationEvent> {
        std::mem::take(&mut self.pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::clock::ManualClock;
    use crate::store::MemoryStore;
    use chrono::NaiveDate;

    fn engine() -> (GamificationEngine, MemoryStore, ManualClock) {
        let store = MemoryStore::new();
        let clock = ManualClock::at_day(NaiveDate::from_ymd_opt(2024, 9, 2).unwrap());
        let engine = GamificationEngine::open(Box::new(store.clone()), Box::new(clock.clone()));
        (engine, store, clock)
    }

    #[test]
    fn test_open_registers_visit_and_persists() {
        let (engine, store, _) = engine();
        assert_eq!(engine.progress().login_streak, 1);
        assert!(store.raw().is_some());
        assert!(matches!(
            engine.pending_events(),
            [GamificationEvent::StreakExtended { days: 1 }]
        ));
    }

    #[test]
    fn test_write_through_after_each_mutation() {
        let (mut engine, store, _) = engine();
        engine.add_experience(7, "test");
        let saved = store.load().unwrap().unwrap();
        assert_eq!(saved.experience, 7);
        assert_eq!(&saved, engine.progress());
    }

    #[test]
    fn test_take_events_drains() {
        let (mut engine, _, _) = engine();
        engine.take_events();
        engine.award_badge("first_game");
        assert_eq!(engine.take_events().len(), 2);
        assert!(engine.take_events().is_empty());
    }

    #[test]
    fn test_unlocked_badges_in_order() {
        let (mut engine, _, _) = engine();
        engine.award_badge("bookworm");
        engine.award_badge("first_game");
        let ids: Vec<_> = engine
            .unlocked_badges()
            .iter()
            .map(|b| b.id.as_str())
            .collect();
        assert_eq!(ids, vec!["bookworm", "first_game"]);
    }

    #[test]
    fn test_reset_clears_store_and_state() {
        let (mut engine, store, _) = engine();
        engine.track_game_completion("memory", 10, 10);
        engine.reset();
        assert_eq!(engine.progress(), &PlayerProgress::default());
        assert!(engine.pending_events().is_empty());
        assert_eq!(store.load().unwrap(), Some(PlayerProgress::default()));
    }
}
