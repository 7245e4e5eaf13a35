//! Intake module - the conversational collection of event parameters.
//!
//! A conversation walks the six [`Field`]s in order. Each raw answer is run
//! through its field validator; accepted answers are stored in canonical
//! form and advance the cursor, rejected ones re-ask the same field. The
//! sixth accepted answer yields an [`IntakeRecord`].

mod field;
mod outcome;
mod record;
mod state;
pub mod validators;

pub use field::Field;
pub use outcome::ValidationOutcome;
pub use record::IntakeRecord;
pub use state::{ConversationState, IntakePhase, StepOutcome};
pub use validators::validate;

/// Command that (re)starts a conversation, matched case-insensitively.
pub const START_COMMAND: &str = "start";

/// Reply to an identifier with no conversation in progress.
pub const START_INSTRUCTION: &str = "Please type 'start' to begin planning your event.";

/// Reply accompanying the enriched venue list.
pub const VENUES_FOUND: &str = "Great! I've found some venues that match your criteria.";

/// Returns true if `message` is the start command.
pub fn is_start_command(message: &str) -> bool {
    message.trim().eq_ignore_ascii_case(START_COMMAND)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_command_ignores_case_and_padding() {
        assert!(is_start_command("start"));
        assert!(is_start_command("START"));
        assert!(is_start_command("  Start \n"));
        assert!(!is_start_command("restart"));
        assert!(!is_start_command("start over"));
    }
}
