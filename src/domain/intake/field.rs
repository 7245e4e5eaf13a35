//! The ordered set of fields an intake conversation collects.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One required intake field.
///
/// The declaration order is the interrogation order. [`Field::ALL`] is the
/// single source of that order; nothing reorders it at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    EventType,
    Location,
    Date,
    Time,
    Budget,
    Attendees,
}

impl Field {
    /// Every field, in the order they are asked.
    pub const ALL: [Field; 6] = [
        Field::EventType,
        Field::Location,
        Field::Date,
        Field::Time,
        Field::Budget,
        Field::Attendees,
    ];

    /// Number of fields a complete record holds.
    pub const COUNT: usize = Self::ALL.len();

    /// Field at a cursor position, if the cursor is still inside the sequence.
    pub fn at(index: usize) -> Option<Field> {
        Self::ALL.get(index).copied()
    }

    /// Position of this field in the interrogation order.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Field asked after this one, or `None` for the last field.
    pub fn next(self) -> Option<Field> {
        Self::at(self.index() + 1)
    }

    /// Wire name of the field.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::EventType => "event_type",
            Field::Location => "location",
            Field::Date => "date",
            Field::Time => "time",
            Field::Budget => "budget",
            Field::Attendees => "attendees",
        }
    }

    /// Question put to the user when this field is pending.
    pub fn prompt(self) -> &'static str {
        match self {
            Field::EventType => "What type of event are you planning?",
            Field::Location => "Where would you like to hold the event?",
            Field::Date => "What date would you like to hold the event?",
            Field::Time => "What time would you like the event to start?",
            Field::Budget => "What's your budget for the venue?",
            Field::Attendees => "How many people will be attending?",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
