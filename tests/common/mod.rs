//! Shared test utilities for engine tests
#![allow(dead_code)]

use chrono::{Days, NaiveDate};

use kinderxp::progress::{GamificationEvent, ManualClock};
use kinderxp::store::MemoryStore;
use kinderxp::GamificationEngine;

/// Day `n` of the test calendar (day 0 is 2025-03-01)
pub fn day(n: u64) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 1)
        .unwrap()
        .checked_add_days(Days::new(n))
        .unwrap()
}

/// An engine over a shared in-memory store and a manual clock
pub struct Harness {
    pub engine: GamificationEngine,
    pub store: MemoryStore,
    pub clock: ManualClock,
}

impl Harness {
    /// Fresh player opening the app on day 0, with the opening events drained
    pub fn new() -> Self {
        let store = MemoryStore::new();
        let clock = ManualClock::at_day(day(0));
        let mut harness = Self::open(store, clock);
        harness.engine.take_events();
        harness
    }

    pub fn open(store: MemoryStore, clock: ManualClock) -> Self {
        let engine = GamificationEngine::open(Box::new(store.clone()), Box::new(clock.clone()));
        Self {
            engine,
            store,
            clock,
        }
    }

    /// Start a new session over the same store and clock
    pub fn reopen(self) -> Self {
        let Harness { store, clock, .. } = self;
        Self::open(store, clock)
    }

    /// Move the clock to day `n` and start a new session there
    pub fn visit_on(self, n: u64) -> Self {
        self.clock.set_day(day(n));
        self.reopen()
    }
}

pub fn count_level_ups(events: &[GamificationEvent]) -> usize {
    events
        .iter()
        .filter(|e| matches!(e, GamificationEvent::LevelUp(_)))
        .count()
}

pub fn unlocked_badge_ids(events: &[GamificationEvent]) -> Vec<&'static str> {
    events
        .iter()
        .filter_map(|e| match e {
            GamificationEvent::BadgeUnlocked(badge) => Some(badge.id.as_str()),
            _ => None,
        })
        .collect()
}
