//! Venue generator (OpenAI) configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

const MAX_RETRIES: u32 = 5;

#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// OpenAI API key
    pub openai_api_key: Option<String>,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Maximum retries on failure
    #[serde(default = "default_retries")]
    pub max_retries: u32,

    /// Venues requested per finished intake
    #[serde(default = "default_venue_count")]
    pub venue_count: u32,
}

impl AiConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Longest a single generation can take: every attempt timing out plus
    /// the 1s, 2s, 4s, ... backoff between attempts.
    pub fn worst_case(&self) -> Duration {
        let attempts = u64::from(self.max_retries) + 1;
        let backoff = 2u64.saturating_pow(self.max_retries).saturating_sub(1);
        Duration::from_secs(self.timeout_secs.saturating_mul(attempts).saturating_add(backoff))
    }

    pub fn has_openai(&self) -> bool {
        self.openai_api_key.as_ref().is_some_and(|k| !k.is_empty())
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.has_openai() {
            return Err(ValidationError::MissingRequired("OPENAI_API_KEY"));
        }
        if !(1..=50).contains(&self.venue_count) {
            return Err(ValidationError::InvalidVenueCount);
        }
        if self.max_retries > MAX_RETRIES {
            return Err(ValidationError::InvalidMaxRetries);
        }
        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            model: default_model(),
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            max_retries: default_retries(),
            venue_count: default_venue_count(),
        }
    }
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_retries() -> u32 {
    2
}

fn default_venue_count() -> u32 {
    20
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured() -> AiConfig {
        AiConfig {
            openai_api_key: Some("sk-xxx".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn defaults_fit_a_two_minute_request() {
        let config = AiConfig::default();
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert_eq!(config.max_retries, 2);
        assert_eq!(config.venue_count, 20);
        // three 30s attempts plus 1s and 2s of backoff
        assert_eq!(config.worst_case(), Duration::from_secs(93));
    }

    #[test]
    fn worst_case_without_retries_is_one_attempt() {
        let config = AiConfig {
            max_retries: 0,
            timeout_secs: 10,
            ..configured()
        };
        assert_eq!(config.worst_case(), Duration::from_secs(10));
    }

    #[test]
    fn worst_case_saturates_instead_of_overflowing() {
        let config = AiConfig {
            max_retries: u32::MAX,
            timeout_secs: u64::MAX,
            ..configured()
        };
        assert_eq!(config.worst_case(), Duration::from_secs(u64::MAX));
    }

    #[test]
    fn key_is_required() {
        assert_eq!(
            AiConfig::default().validate(),
            Err(ValidationError::MissingRequired("OPENAI_API_KEY"))
        );
        let empty = AiConfig {
            openai_api_key: Some(String::new()),
            ..Default::default()
        };
        assert!(empty.validate().is_err());
    }

    #[test]
    fn venue_count_is_bounded() {
        let zero = AiConfig {
            venue_count: 0,
            ..configured()
        };
        let many = AiConfig {
            venue_count: 51,
            ..configured()
        };
        assert_eq!(zero.validate(), Err(ValidationError::InvalidVenueCount));
        assert_eq!(many.validate(), Err(ValidationError::InvalidVenueCount));
        assert!(configured().validate().is_ok());
    }

    #[test]
    fn max_retries_is_bounded() {
        let five = AiConfig {
            max_retries: 5,
            ..configured()
        };
        let sixty_four = AiConfig {
            max_retries: 64,
            ..configured()
        };
        assert!(five.validate().is_ok());
        assert_eq!(sixty_four.validate(), Err(ValidationError::InvalidMaxRetries));
    }
}
