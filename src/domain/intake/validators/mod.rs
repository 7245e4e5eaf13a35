//! Field validators.
//!
//! One pure function per field, each mapping untrimmed user text to a
//! [`ValidationOutcome`]. Validators share no state and know nothing about
//! field order; the orchestrator decides which one runs.
//!
//! Date and time answers go through ordered strategy lists (see [`date`] and
//! [`time`]) where the first matching strategy wins.

pub mod date;
mod numeric;
mod text;
pub mod time;

use chrono::NaiveDate;

use super::{Field, ValidationOutcome};

/// Reason given for blank or whitespace-only answers, whatever the field.
pub const EMPTY_ANSWER: &str = "I need an answer to proceed. ";

pub const EVENT_TYPE_HELP: &str =
    "Please tell me what type of event you're planning (e.g., wedding, birthday party, conference). ";
pub const LOCATION_HELP: &str =
    "I need a valid location to search for venues. Please provide a city name. ";
pub const DATE_HELP: &str = "I couldn't understand that date. Try something like 25/12/2025, \
     December 25, 2025, 2025-12-25, tomorrow, or next Friday. ";
pub const PAST_DATE: &str = "Please provide a future date. That date has already passed. ";
pub const TIME_HELP: &str =
    "I need a valid time format (e.g., 14:30, 2:30 PM, 7pm, noon). ";
pub const BUDGET_HELP: &str = "I need a numeric budget amount. Please provide a number. ";
pub const ATTENDEES_HELP: &str =
    "I need a number of attendees. Please provide a numeric value. ";

/// Validates a raw answer for `field`.
///
/// `today` anchors relative dates and the past-date check; every other
/// field ignores it.
pub fn validate(field: Field, raw: &str, today: NaiveDate) -> ValidationOutcome {
    if raw.trim().is_empty() {
        return ValidationOutcome::rejected(EMPTY_ANSWER);
    }

    match field {
        Field::EventType => text::event_type(raw),
        Field::Location => text::location(raw),
        Field::Date => date::validate(raw, today),
        Field::Time => time::validate(raw),
        Field::Budget => numeric::digits_only(raw, BUDGET_HELP),
        Field::Attendees => numeric::digits_only(raw, ATTENDEES_HELP),
    }
}
