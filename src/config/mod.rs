//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `EVENT_INTAKE` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use event_intake::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod ai;
mod error;
mod features;
mod intake;
mod server;
mod storage;
mod traffic;

pub use ai::AiConfig;
pub use error::{ConfigError, ValidationError};
pub use features::FeatureFlags;
pub use intake::IntakeConfig;
pub use server::{Environment, ServerConfig};
pub use storage::StorageConfig;
pub use traffic::TrafficConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Venue generator configuration (OpenAI)
    #[serde(default)]
    pub ai: AiConfig,

    /// Traffic lookups (Google Maps)
    #[serde(default)]
    pub traffic: TrafficConfig,

    /// Conversation handling
    #[serde(default)]
    pub intake: IntakeConfig,

    /// Finished intake record log
    #[serde(default)]
    pub storage: StorageConfig,

    /// Feature flags
    #[serde(default)]
    pub features: FeatureFlags,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `EVENT_INTAKE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `EVENT_INTAKE__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `EVENT_INTAKE__AI__OPENAI_API_KEY=...` -> `ai.openai_api_key = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("EVENT_INTAKE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.ai.validate()?;
        self.traffic.validate()?;
        self.intake.validate()?;
        self.storage.validate()?;
        self.validate_timeouts()
    }

    /// The hand-off runs inside the HTTP request, so it must finish before
    /// the request timeout fires, and a full generation retry cycle must fit
    /// inside the hand-off.
    fn validate_timeouts(&self) -> Result<(), ValidationError> {
        if self.intake.handoff_timeout_secs >= self.server.request_timeout_secs {
            return Err(ValidationError::InvalidHandoffTimeout);
        }
        let worst_case = self.ai.worst_case();
        if worst_case > self.intake.handoff_timeout() {
            return Err(ValidationError::AiExceedsHandoff {
                worst_case_secs: worst_case.as_secs(),
                handoff_secs: self.intake.handoff_timeout_secs,
            });
        }
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }

    /// Traffic lookups run only when enabled and a key is present.
    pub fn traffic_enabled(&self) -> bool {
        self.features.enable_traffic && self.traffic.api_key().is_some()
    }

    /// JSON logs are forced on in production.
    pub fn json_logs(&self) -> bool {
        self.features.json_logs || self.is_production()
    }
}
