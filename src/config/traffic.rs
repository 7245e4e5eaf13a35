//! Traffic (Google Maps) configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// The distance matrix accepts at most this many origins per request.
const MAX_ORIGINS_LIMIT: usize = 25;

#[derive(Debug, Clone, Deserialize)]
pub struct TrafficConfig {
    /// Google Maps API key; without it traffic lookups are skipped
    pub google_maps_api_key: Option<String>,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Search radius around the city centre, in metres
    #[serde(default = "default_search_radius")]
    pub search_radius_m: u32,

    #[serde(default = "default_max_origins")]
    pub max_origins: usize,

    /// First departure hour sampled
    #[serde(default = "default_first_hour")]
    pub first_hour: u32,

    /// Last departure hour sampled (inclusive)
    #[serde(default = "default_last_hour")]
    pub last_hour: u32,

    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl TrafficConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// The API key, if one is set and non-empty.
    pub fn api_key(&self) -> Option<&str> {
        self.google_maps_api_key
            .as_deref()
            .filter(|key| !key.is_empty())
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.first_hour >= self.last_hour || self.last_hour > 23 {
            return Err(ValidationError::InvalidTrafficHours);
        }
        if self.max_origins == 0 || self.max_origins > MAX_ORIGINS_LIMIT {
            return Err(ValidationError::InvalidMaxOrigins);
        }
        Ok(())
    }
}

impl Default for TrafficConfig {
    fn default() -> Self {
        Self {
            google_maps_api_key: None,
            base_url: default_base_url(),
            search_radius_m: default_search_radius(),
            max_origins: default_max_origins(),
            first_hour: default_first_hour(),
            last_hour: default_last_hour(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_base_url() -> String {
    "https://maps.googleapis.com/maps/api".to_string()
}

fn default_search_radius() -> u32 {
    5000
}

fn default_max_origins() -> usize {
    MAX_ORIGINS_LIMIT
}

fn default_first_hour() -> u32 {
    9
}

fn default_last_hour() -> u32 {
    23
}

fn default_timeout() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = TrafficConfig::default();
        assert_eq!((config.first_hour, config.last_hour), (9, 23));
        assert_eq!(config.max_origins, 25);
        assert!(config.validate().is_ok());
        assert_eq!(config.api_key(), None);
    }

    #[test]
    fn empty_key_counts_as_missing() {
        let config = TrafficConfig {
            google_maps_api_key: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(config.api_key(), None);
    }

    #[test]
    fn hour_window_must_be_ordered_and_within_a_day() {
        let inverted = TrafficConfig {
            first_hour: 20,
            last_hour: 10,
            ..Default::default()
        };
        let past_midnight = TrafficConfig {
            last_hour: 24,
            ..Default::default()
        };
        assert_eq!(inverted.validate(), Err(ValidationError::InvalidTrafficHours));
        assert_eq!(past_midnight.validate(), Err(ValidationError::InvalidTrafficHours));
    }

    #[test]
    fn origins_are_capped_at_the_matrix_limit() {
        let config = TrafficConfig {
            max_origins: 26,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidMaxOrigins));
    }
}
