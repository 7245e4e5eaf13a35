use crate::domain::intake::ValidationOutcome;

/// Keeps every ASCII digit in the answer and drops everything else.
///
/// Separate numbers are concatenated ("between 10 and 20" gives "1020");
/// that is the accepted behaviour for both numeric fields.
pub(super) fn digits_only(raw: &str, help: &'static str) -> ValidationOutcome {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        ValidationOutcome::rejected(help)
    } else {
        ValidationOutcome::accepted(digits)
    }
}
