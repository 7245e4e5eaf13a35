use chrono::{DateTime, Local, NaiveDate, Utc};

use crate::ports::Clock;

/// Wall-clock time; "today" follows the server's local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }

    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
