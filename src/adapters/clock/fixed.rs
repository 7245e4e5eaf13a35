use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::ports::Clock;

/// A clock stopped at one instant. Used by tests and demos.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: DateTime<Utc>,
}

impl FixedClock {
    pub fn at(now: DateTime<Utc>) -> Self {
        Self { now }
    }

    /// Midday UTC on `date`.
    pub fn on(date: NaiveDate) -> Self {
        Self::at(date.and_time(NaiveTime::MIN).and_utc() + chrono::Duration::hours(12))
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.now.date_naive()
    }

    fn now(&self) -> DateTime<Utc> {
        self.now
    }
}
