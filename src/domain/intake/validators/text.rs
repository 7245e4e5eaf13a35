use super::{EVENT_TYPE_HELP, LOCATION_HELP};
use crate::domain::intake::ValidationOutcome;

const MIN_TEXT_LEN: usize = 2;

/// Event types are folded to lowercase so "Wedding" and "wedding" agree.
pub(super) fn event_type(raw: &str) -> ValidationOutcome {
    let trimmed = raw.trim();
    if trimmed.chars().count() < MIN_TEXT_LEN {
        return ValidationOutcome::rejected(EVENT_TYPE_HELP);
    }
    ValidationOutcome::accepted(trimmed.to_lowercase())
}

pub(super) fn location(raw: &str) -> ValidationOutcome {
    let trimmed = raw.trim();
    if trimmed.chars().count() < MIN_TEXT_LEN {
        return ValidationOutcome::rejected(LOCATION_HELP);
    }
    ValidationOutcome::accepted(trimmed)
}
