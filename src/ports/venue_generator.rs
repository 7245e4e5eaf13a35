//! Venue Generator Port - produces venue recommendations for a finished intake.
//!
//! Implementations are expected to be slow and fallible (an LLM call). The
//! application layer maps any error to the placeholder venue, so a failing
//! generator never fails a conversation.

use async_trait::async_trait;

use crate::domain::enrichment::Venue;
use crate::domain::intake::IntakeRecord;

#[async_trait]
pub trait VenueGenerator: Send + Sync {
    /// Recommends venues matching `record`. An empty list is a valid answer.
    async fn generate(&self, record: &IntakeRecord) -> Result<Vec<Venue>, VenueError>;
}

/// Errors from venue generation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum VenueError {
    /// Rate limited by provider.
    #[error("rate limited: retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds until retry is allowed.
        retry_after_secs: u32,
    },

    /// Provider is unavailable.
    #[error("provider unavailable: {message}")]
    Unavailable {
        /// Error details.
        message: String,
    },

    /// API key or authentication failed.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Network error during request.
    #[error("network error: {0}")]
    Network(String),

    /// Provider answered but the content was not a venue list.
    #[error("parse error: {0}")]
    Parse(String),

    /// Provider rejected the request.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Request timed out.
    #[error("request timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout.
        timeout_secs: u32,
    },
}

impl VenueError {
    pub fn rate_limited(retry_after_secs: u32) -> Self {
        Self::RateLimited { retry_after_secs }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Returns true if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            VenueError::RateLimited { .. }
                | VenueError::Unavailable { .. }
                | VenueError::Network(_)
                | VenueError::Timeout { .. }
        )
    }
}
