//! Login streak tracking
//!
//! A streak counts consecutive calendar days with at least one visit.

use chrono::NaiveDate;

/// Result of comparing today's date with the last recorded visit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreakChange {
    /// Already visited today (or the clock moved backwards)
    SameDay,
    /// Visited yesterday, streak grows to the given count
    Extended(u32),
    /// First visit ever, or a gap of more than one day
    Restarted,
}

impl StreakChange {
    /// Evaluate the streak rule for a visit on `today`.
    pub fn evaluate(last_active: Option<NaiveDate>, today: NaiveDate, current: u32) -> Self {
        let Some(last) = last_active else {
            return Self::Restarted;
        };

        match (today - last).num_days() {
            days if days <= 0 => Self::SameDay,
            1 => Self::Extended(current.saturating_add(1)),
            _ => Self::Restarted,
        }
    }

    /// Streak length after applying this change
    pub fn new_streak(&self, current: u32) -> u32 {
        match self {
            Self::SameDay => current,
            Self::Extended(count) => *count,
            Self::Restarted => 1,
        }
    }

    /// Whether the calendar day advanced
    pub fn is_new_day(&self) -> bool {
        !matches!(self, Self::SameDay)
    }
}

/// Get a date's YYYY-MM-DD string
pub fn day_string(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
