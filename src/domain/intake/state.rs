//! Per-conversation intake progress and its state machine.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::validators;
use super::{Field, IntakeRecord, ValidationOutcome};
use crate::domain::foundation::{StateMachine, ValidationError};

/// Where a conversation stands in the intake sequence.
///
/// - `Uninitialized`: the identifier is unknown to the registry
/// - `AwaitingField`: the given field is the next one to be answered
/// - `Completed`: all fields answered; only exists while the record is
///   being handed off and is never stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "phase", content = "field", rename_all = "snake_case")]
pub enum IntakePhase {
    Uninitialized,
    AwaitingField(Field),
    Completed,
}

impl StateMachine for IntakePhase {
    fn can_transition_to(&self, target: &Self) -> bool {
        self.valid_transitions().contains(target)
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use IntakePhase::*;
        match self {
            Uninitialized => vec![AwaitingField(Field::EventType)],
            AwaitingField(field) => {
                let forward = field.next().map_or(Completed, AwaitingField);
                // "start" may restart from any in-progress field
                if forward == AwaitingField(Field::EventType) {
                    vec![forward]
                } else {
                    vec![forward, AwaitingField(Field::EventType)]
                }
            }
            Completed => vec![],
        }
    }
}

/// Progress of one intake conversation.
///
/// Answers are stored in [`Field::ALL`] order, so the stored values are
/// always exactly the first `cursor()` fields with no gaps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationState {
    values: Vec<String>,
}

/// What happened when an answer was applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// The answer did not validate; nothing changed.
    Rejected { field: Field, reason: String },
    /// The answer was stored and `next` is now pending.
    Advanced { accepted: Field, next: Field },
    /// The last answer was stored; the record is ready for hand-off.
    Completed(IntakeRecord),
}

impl ConversationState {
    /// A fresh conversation awaiting the first field.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of fields answered so far (0..=6).
    pub fn cursor(&self) -> usize {
        self.values.len()
    }

    /// Field the next answer is for, if any remain.
    pub fn pending_field(&self) -> Option<Field> {
        Field::at(self.cursor())
    }

    pub fn phase(&self) -> IntakePhase {
        self.pending_field()
            .map_or(IntakePhase::Completed, IntakePhase::AwaitingField)
    }

    /// Stored canonical value for `field`, if it has been answered.
    pub fn value(&self, field: Field) -> Option<&str> {
        self.values.get(field.index()).map(String::as_str)
    }

    /// Answered fields with their canonical values, in order.
    pub fn values(&self) -> impl Iterator<Item = (Field, &str)> {
        Field::ALL
            .into_iter()
            .zip(self.values.iter().map(String::as_str))
    }

    /// Validates `raw` for the pending field and applies it.
    ///
    /// A rejection leaves the state untouched, so retries are idempotent.
    /// Answering a completed state is an invalid transition.
    pub fn answer(&mut self, raw: &str, today: NaiveDate) -> Result<StepOutcome, ValidationError> {
        let field = self.pending_field().ok_or_else(|| {
            ValidationError::invalid_transition(IntakePhase::Completed, IntakePhase::Completed)
        })?;

        let value = match validators::validate(field, raw, today) {
            ValidationOutcome::Accepted(value) => value,
            ValidationOutcome::Rejected(reason) => {
                return Ok(StepOutcome::Rejected { field, reason });
            }
        };

        let target = field.next().map_or(IntakePhase::Completed, IntakePhase::AwaitingField);
        self.phase().transition_to(target)?;
        self.values.push(value);

        match field.next() {
            Some(next) => Ok(StepOutcome::Advanced {
                accepted: field,
                next,
            }),
            None => Ok(StepOutcome::Completed(IntakeRecord::from_ordered_values(
                self.values.clone(),
            )?)),
        }
    }
}
