//! Feature flags configuration

use serde::Deserialize;

/// Feature flags for enabling/disabling functionality
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureFlags {
    /// Look up commute times for each venue (needs a Google Maps key)
    #[serde(default = "default_true")]
    pub enable_traffic: bool,

    /// Trace every HTTP request
    #[serde(default = "default_true")]
    pub enable_request_tracing: bool,

    /// Emit logs as JSON; always on in production
    #[serde(default)]
    pub json_logs: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            enable_traffic: true,
            enable_request_tracing: true,
            json_logs: false,
        }
    }
}

fn default_true() -> bool {
    true
}
