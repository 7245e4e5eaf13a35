//! Result of validating one raw answer.

/// Outcome of running a field validator over raw user text.
///
/// A rejection reason is always a complete user-facing sentence ending in a
/// single trailing space, so it can be prefixed directly to the re-asked
/// question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// The answer was understood; carries its canonical form.
    Accepted(String),
    /// The answer was not usable; carries the reason shown to the user.
    Rejected(String),
}

impl ValidationOutcome {
    pub fn accepted(value: impl Into<String>) -> Self {
        Self::Accepted(value.into())
    }

    pub fn rejected(reason: impl Into<String>) -> Self {
        Self::Rejected(reason.into())
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    /// Canonical value if accepted.
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Accepted(value) => Some(value),
            Self::Rejected(_) => None,
        }
    }

    /// Rejection reason if rejected.
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Accepted(_) => None,
            Self::Rejected(reason) => Some(reason),
        }
    }
}
