//! Event date parsing.
//!
//! Strategies run in a fixed order and the first one that yields a date
//! wins:
//!
//! 1. relative keywords (`today`, `tomorrow`, `day after tomorrow`)
//! 2. relative offsets (`next <weekday>`, `next week`, `next month`)
//! 3. explicit formats, each guarded by a shape pattern so that a four-digit
//!    year format never swallows a two-digit year
//!
//! Ambiguous numeric dates resolve day-first because `DD/MM/YYYY` is tried
//! before `MM/DD/YYYY`.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use once_cell::sync::Lazy;
use regex::Regex;

use super::{DATE_HELP, PAST_DATE};
use crate::domain::intake::ValidationOutcome;

/// Canonical storage format for accepted dates.
pub const CANONICAL_FORMAT: &str = "%Y-%m-%d";

/// `next month` is a flat offset, not a calendar month.
const NEXT_MONTH_DAYS: u64 = 30;
const NEXT_WEEK_DAYS: u64 = 7;

struct DateStrategy {
    name: &'static str,
    parse: fn(&str, NaiveDate) -> Option<NaiveDate>,
}

const STRATEGIES: &[DateStrategy] = &[
    DateStrategy {
        name: "relative_keyword",
        parse: relative_keyword,
    },
    DateStrategy {
        name: "relative_offset",
        parse: relative_offset,
    },
    DateStrategy {
        name: "explicit_format",
        parse: explicit_format,
    },
];

/// An explicit chrono format, tried only when the input has its shape.
struct ExplicitFormat {
    shape: Regex,
    format: &'static str,
}

fn explicit(shape: &str, format: &'static str) -> ExplicitFormat {
    ExplicitFormat {
        shape: Regex::new(shape).expect("date shape pattern is valid"),
        format,
    }
}

static EXPLICIT_FORMATS: Lazy<Vec<ExplicitFormat>> = Lazy::new(|| {
    vec![
        explicit(r"^\d{1,2}/\d{1,2}/\d{4}$", "%d/%m/%Y"),
        explicit(r"^\d{1,2}/\d{1,2}/\d{4}$", "%m/%d/%Y"),
        explicit(r"^\d{1,2}-\d{1,2}-\d{4}$", "%d-%m-%Y"),
        explicit(r"^\d{1,2}-\d{1,2}-\d{4}$", "%m-%d-%Y"),
        explicit(r"^\d{1,2}/\d{1,2}/\d{2}$", "%d/%m/%y"),
        explicit(r"^\d{1,2}/\d{1,2}/\d{2}$", "%m/%d/%y"),
        explicit(r"^\d{1,2}-\d{1,2}-\d{2}$", "%d-%m-%y"),
        explicit(r"^\d{1,2}-\d{1,2}-\d{2}$", "%m-%d-%y"),
        explicit(r"^[a-z]+ \d{1,2}, \d{4}$", "%B %d, %Y"),
        explicit(r"^[a-z]{3} \d{1,2}, \d{4}$", "%b %d, %Y"),
        explicit(r"^[a-z]+ \d{1,2} \d{4}$", "%B %d %Y"),
        explicit(r"^\d{1,2} [a-z]+ \d{4}$", "%d %B %Y"),
        explicit(r"^\d{1,2} [a-z]{3} \d{4}$", "%d %b %Y"),
        explicit(r"^\d{4}-\d{1,2}-\d{1,2}$", "%Y-%m-%d"),
        explicit(r"^\d{1,2}\.\d{1,2}\.\d{4}$", "%d.%m.%Y"),
        explicit(r"^\d{1,2} \d{1,2} \d{4}$", "%d %m %Y"),
    ]
});

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));
/// `dec.` -> `dec`, `sept.` -> `sept`
static ABBREVIATION_DOT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b([a-z]{3,4})\.").expect("valid regex"));
/// chrono only knows three-letter abbreviations
static SEPT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bsept\b").expect("valid regex"));

/// Validates a date answer against `today`.
pub(super) fn validate(raw: &str, today: NaiveDate) -> ValidationOutcome {
    match parse(raw, today) {
        Some(date) if date < today => ValidationOutcome::rejected(PAST_DATE),
        Some(date) => ValidationOutcome::accepted(date.format(CANONICAL_FORMAT).to_string()),
        None => ValidationOutcome::rejected(DATE_HELP),
    }
}

/// Parses a date answer without applying the past-date rule.
pub fn parse(raw: &str, today: NaiveDate) -> Option<NaiveDate> {
    let normalized = normalize(raw);

    STRATEGIES.iter().find_map(|strategy| {
        let parsed = (strategy.parse)(&normalized, today);
        if parsed.is_some() {
            tracing::trace!(strategy = strategy.name, "date strategy matched");
        }
        parsed
    })
}

/// Lowercases, collapses whitespace and drops sentence punctuation so that
/// `Dec. 25, 2030.` reads as `dec 25, 2030`.
fn normalize(raw: &str) -> String {
    let lower = WHITESPACE.replace_all(raw.trim(), " ").to_lowercase();
    let trimmed = lower.trim_end_matches(['.', '!', ',']).trim_end();
    let undotted = ABBREVIATION_DOT.replace_all(trimmed, "$1");
    SEPT.replace_all(&undotted, "sep").into_owned()
}

fn relative_keyword(text: &str, today: NaiveDate) -> Option<NaiveDate> {
    match text {
        "today" => Some(today),
        "tomorrow" => today.checked_add_days(Days::new(1)),
        "day after tomorrow" => today.checked_add_days(Days::new(2)),
        _ => None,
    }
}

fn relative_offset(text: &str, today: NaiveDate) -> Option<NaiveDate> {
    let unit = text.strip_prefix("next ")?;
    match unit {
        "week" => today.checked_add_days(Days::new(NEXT_WEEK_DAYS)),
        "month" => today.checked_add_days(Days::new(NEXT_MONTH_DAYS)),
        other => {
            let target = weekday_from_name(other)?;
            today.checked_add_days(Days::new(days_until_next(today.weekday(), target)))
        }
    }
}

/// Days until the next `target`, strictly after `from` (same weekday gives 7).
fn days_until_next(from: Weekday, target: Weekday) -> u64 {
    let ahead = (7 + target.num_days_from_monday() - from.num_days_from_monday()) % 7;
    if ahead == 0 {
        7
    } else {
        u64::from(ahead)
    }
}

fn weekday_from_name(name: &str) -> Option<Weekday> {
    let weekday = match name {
        "monday" | "mon" => Weekday::Mon,
        "tuesday" | "tue" | "tues" => Weekday::Tue,
        "wednesday" | "wed" => Weekday::Wed,
        "thursday" | "thu" | "thur" | "thurs" => Weekday::Thu,
        "friday" | "fri" => Weekday::Fri,
        "saturday" | "sat" => Weekday::Sat,
        "sunday" | "sun" => Weekday::Sun,
        _ => return None,
    };
    Some(weekday)
}

fn explicit_format(text: &str, _today: NaiveDate) -> Option<NaiveDate> {
    EXPLICIT_FORMATS
        .iter()
        .filter(|candidate| candidate.shape.is_match(text))
        .find_map(|candidate| NaiveDate::parse_from_str(text, candidate.format).ok())
}
