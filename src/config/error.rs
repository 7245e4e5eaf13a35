//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid bind address: {0}")]
    InvalidBindAddress(String),

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Venue count must be between 1 and 50")]
    InvalidVenueCount,

    #[error("AI max_retries must be at most 5")]
    InvalidMaxRetries,

    #[error("Hand-off timeout must be at least 1s and below the request timeout")]
    InvalidHandoffTimeout,

    #[error("AI worst case ({worst_case_secs}s) exceeds the hand-off timeout ({handoff_secs}s)")]
    AiExceedsHandoff {
        worst_case_secs: u64,
        handoff_secs: u64,
    },

    #[error("Traffic hours must satisfy first_hour < last_hour <= 23")]
    InvalidTrafficHours,

    #[error("Traffic max_origins must be between 1 and 25")]
    InvalidMaxOrigins,

    #[error("Default conversation id must not be empty")]
    EmptyDefaultConversationId,

    #[error("Record log path must not be empty")]
    EmptyRecordLogPath,
}
