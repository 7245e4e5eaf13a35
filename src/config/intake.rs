//! Intake conversation configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

#[derive(Debug, Clone, Deserialize)]
pub struct IntakeConfig {
    /// Conversation used when a request carries no identifier. Every such
    /// caller shares it.
    #[serde(default = "default_conversation_id")]
    pub default_conversation_id: String,

    /// Budget for venue generation plus enrichment once the last answer is
    /// in. Must stay below `server.request_timeout_secs`.
    #[serde(default = "default_handoff_timeout")]
    pub handoff_timeout_secs: u64,
}

impl IntakeConfig {
    pub fn handoff_timeout(&self) -> Duration {
        Duration::from_secs(self.handoff_timeout_secs)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.default_conversation_id.trim().is_empty() {
            return Err(ValidationError::EmptyDefaultConversationId);
        }
        if self.handoff_timeout_secs == 0 {
            return Err(ValidationError::InvalidHandoffTimeout);
        }
        Ok(())
    }
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            default_conversation_id: default_conversation_id(),
            handoff_timeout_secs: default_handoff_timeout(),
        }
    }
}

fn default_conversation_id() -> String {
    "default_user".to_string()
}

fn default_handoff_timeout() -> u64 {
    100
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = IntakeConfig::default();
        assert_eq!(config.default_conversation_id, "default_user");
        assert_eq!(config.handoff_timeout(), Duration::from_secs(100));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn blank_default_id_is_rejected() {
        let config = IntakeConfig {
            default_conversation_id: "  ".to_string(),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::EmptyDefaultConversationId));
    }

    #[test]
    fn zero_handoff_timeout_is_rejected() {
        let config = IntakeConfig {
            handoff_timeout_secs: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidHandoffTimeout));
    }
}
