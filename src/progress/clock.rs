//! Wall-clock time source

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Days, Local, NaiveDate, Utc};

/// A point in time as the engine sees it: exact timestamp plus calendar day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Moment {
    pub now: DateTime<Utc>,
    pub today: NaiveDate,
}

/// Time source used by the engine
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;

    /// Calendar day used for streaks and daily rewards
    fn today(&self) -> NaiveDate;

    fn moment(&self) -> Moment {
        Moment {
            now: self.now(),
            today: self.today(),
        }
    }
}

/// The system clock; days follow the local time zone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A settable clock. Clones share the same time; days follow UTC.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Arc<Mutex<DateTime<Utc>>>,
}

impl ManualClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: Arc::new(Mutex::new(now)),
        }
    }

    /// Clock set to noon (UTC) of the given day
    pub fn at_day(day: NaiveDate) -> Self {
        Self::new(noon(day))
    }

    pub fn set(&self, now: DateTime<Utc>) {
        *self.now.lock().unwrap_or_else(|e| e.into_inner()) = now;
    }

    pub fn set_day(&self, day: NaiveDate) {
        self.set(noon(day));
    }

    pub fn advance_days(&self, days: u64) {
        let mut now = self.now.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(next) = now.checked_add_days(Days::new(days)) {
            *now = next;
        }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

fn noon(day: NaiveDate) -> DateTime<Utc> {
    day.and_hms_opt(12, 0, 0)
        .unwrap_or_default()
        .and_utc()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_shared_between_clones() {
        let day = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        let clock = ManualClock::at_day(day);
        let handle = clock.clone();

        handle.advance_days(1);
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());

        handle.set_day(day);
        assert_eq!(clock.moment().today, day);
    }
}
