//! Clock Port - source of "today" for date validation.

use chrono::{DateTime, NaiveDate, Utc};

/// Supplies the current date and time.
///
/// Relative dates ("tomorrow", "next friday") and the past-date rule are
/// resolved against [`Clock::today`], so tests inject a fixed clock.
pub trait Clock: Send + Sync {
    /// The current calendar date in the server's local time zone.
    fn today(&self) -> NaiveDate;

    fn now(&self) -> DateTime<Utc>;
}
