//! The finalized intake record handed to collaborators.

use serde::{Deserialize, Serialize};

use super::Field;
use crate::domain::foundation::ValidationError;

/// A complete, normalized set of answers.
///
/// Every value is already canonical: `date` is ISO `YYYY-MM-DD`, `time` is
/// 24-hour `HH:MM`, and `budget`/`attendees` are digit strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntakeRecord {
    pub event_type: String,
    pub location: String,
    pub date: String,
    pub time: String,
    pub budget: String,
    pub attendees: String,
}

impl IntakeRecord {
    /// Builds a record from values stored in [`Field::ALL`] order.
    pub fn from_ordered_values(values: Vec<String>) -> Result<Self, ValidationError> {
        let count = values.len();
        let [event_type, location, date, time, budget, attendees]: [String; Field::COUNT] = values
            .try_into()
            .map_err(|_| {
                ValidationError::invalid_format(
                    "intake_record",
                    format!("expected {} values, got {}", Field::COUNT, count),
                )
            })?;

        Ok(Self {
            event_type,
            location,
            date,
            time,
            budget,
            attendees,
        })
    }

    /// Canonical value stored for `field`.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::EventType => &self.event_type,
            Field::Location => &self.location,
            Field::Date => &self.date,
            Field::Time => &self.time,
            Field::Budget => &self.budget,
            Field::Attendees => &self.attendees,
        }
    }
}
