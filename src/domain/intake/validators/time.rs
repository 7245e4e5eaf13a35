//! Event start-time parsing.
//!
//! Answers are normalized first: hedging words such as "around" or
//! "probably" are dropped, `a.m.`/`p.m.` become `am`/`pm`, and a meridiem
//! glued to its number ("7pm") is split off. Then, in order:
//!
//! 1. `noon` / `midnight`
//! 2. `H:MM` with optional meridiem
//! 3. `H` with optional meridiem, minutes default to zero
//! 4. four-digit military time `HHMM`
//!
//! A strategy whose numbers fall outside a 24-hour clock counts as no match.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::TIME_HELP;
use crate::domain::intake::ValidationOutcome;

/// Words that only express uncertainty about the time.
const QUALIFIERS: &[&str] = &[
    "around",
    "about",
    "approximately",
    "approx",
    "roughly",
    "maybe",
    "probably",
    "perhaps",
    "possibly",
    "circa",
    "somewhere",
    "sometime",
];

static QUALIFIER_WORDS: Lazy<Regex> = Lazy::new(|| {
    let alternation = QUALIFIERS.join("|");
    Regex::new(&format!(r"\b(?:{})\b\.?", alternation)).expect("valid regex")
});
static DOTTED_MERIDIEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(^|\d|\s)([ap])\.\s?m\.?").expect("valid regex"));
static GLUED_MERIDIEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d)(am|pm)\b").expect("valid regex"));
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));

struct TimeStrategy {
    name: &'static str,
    pattern: Regex,
    transform: fn(&Captures<'_>) -> Option<(u32, u32)>,
}

static STRATEGIES: Lazy<Vec<TimeStrategy>> = Lazy::new(|| {
    vec![
        TimeStrategy {
            name: "named",
            pattern: Regex::new(r"^(noon|midnight)$").expect("valid regex"),
            transform: named_time,
        },
        TimeStrategy {
            name: "hour_minute",
            pattern: Regex::new(r"^(\d{1,2}):(\d{2})(?: ?(am|pm))?$").expect("valid regex"),
            transform: hour_minute,
        },
        TimeStrategy {
            name: "hour_only",
            pattern: Regex::new(r"^(\d{1,2})(?: ?(am|pm))?$").expect("valid regex"),
            transform: hour_only,
        },
        TimeStrategy {
            name: "military",
            pattern: Regex::new(r"^(\d{2})(\d{2})$").expect("valid regex"),
            transform: military,
        },
    ]
});

/// Validates a start-time answer, canonicalizing to 24-hour `HH:MM`.
pub(super) fn validate(raw: &str) -> ValidationOutcome {
    match parse(raw) {
        Some((hour, minute)) => ValidationOutcome::accepted(format!("{:02}:{:02}", hour, minute)),
        None => ValidationOutcome::rejected(TIME_HELP),
    }
}

/// Parses a time answer into `(hour, minute)` on a 24-hour clock.
pub fn parse(raw: &str) -> Option<(u32, u32)> {
    let text = normalize(raw);

    STRATEGIES.iter().find_map(|strategy| {
        let captures = strategy.pattern.captures(&text)?;
        let parsed = (strategy.transform)(&captures);
        if parsed.is_some() {
            tracing::trace!(strategy = strategy.name, "time strategy matched");
        }
        parsed
    })
}

fn normalize(raw: &str) -> String {
    let lower = raw.to_lowercase();
    let without_qualifiers = QUALIFIER_WORDS.replace_all(&lower, " ");
    let meridiem = DOTTED_MERIDIEM.replace_all(&without_qualifiers, "${1}${2}m");
    let spaced = GLUED_MERIDIEM.replace_all(&meridiem, "$1 $2");
    let collapsed = WHITESPACE.replace_all(spaced.trim(), " ");
    collapsed
        .trim_end_matches(['.', '!', ','])
        .trim_end()
        .to_string()
}

fn named_time(captures: &Captures<'_>) -> Option<(u32, u32)> {
    match captures.get(1)?.as_str() {
        "noon" => Some((12, 0)),
        "midnight" => Some((0, 0)),
        _ => None,
    }
}

fn hour_minute(captures: &Captures<'_>) -> Option<(u32, u32)> {
    let hour = number(captures, 1)?;
    let minute = number(captures, 2)?;
    to_24_hour(hour, minute, captures.get(3).map(|m| m.as_str()))
}

fn hour_only(captures: &Captures<'_>) -> Option<(u32, u32)> {
    let hour = number(captures, 1)?;
    to_24_hour(hour, 0, captures.get(2).map(|m| m.as_str()))
}

fn military(captures: &Captures<'_>) -> Option<(u32, u32)> {
    to_24_hour(number(captures, 1)?, number(captures, 2)?, None)
}

fn number(captures: &Captures<'_>, group: usize) -> Option<u32> {
    captures.get(group)?.as_str().parse().ok()
}

/// `pm` adds twelve unless the hour is already 12; `12 am` is midnight.
fn to_24_hour(hour: u32, minute: u32, meridiem: Option<&str>) -> Option<(u32, u32)> {
    let hour = match meridiem {
        Some("pm") if hour != 12 => hour + 12,
        Some("am") if hour == 12 => 0,
        _ => hour,
    };
    (hour <= 23 && minute <= 59).then_some((hour, minute))
}
