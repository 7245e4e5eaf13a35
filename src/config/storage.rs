//! Intake record storage configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// JSON lines file that finished intakes are appended to
    #[serde(default = "default_record_log_path")]
    pub record_log_path: PathBuf,
}

impl StorageConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.record_log_path.as_os_str().is_empty() {
            return Err(ValidationError::EmptyRecordLogPath);
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            record_log_path: default_record_log_path(),
        }
    }
}

fn default_record_log_path() -> PathBuf {
    PathBuf::from("event_data.json")
}
