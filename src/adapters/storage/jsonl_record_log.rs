//! JSON Lines Record Log Adapter
//!
//! Appends each finished intake as one JSON object per line. The file is
//! created on first append; a missing file lists as empty.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use crate::domain::intake::IntakeRecord;
use crate::ports::{IntakeRecordSink, RecordSinkError};

#[derive(Debug, Clone)]
pub struct JsonLinesRecordLog {
    path: PathBuf,
    /// Serializes appends so lines from concurrent completions never interleave.
    write_lock: Arc<Mutex<()>>,
}

impl JsonLinesRecordLog {
    /// # Example
    /// ```ignore
    /// let log = JsonLinesRecordLog::new("event_data.json");
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn ensure_parent_dir(&self) -> Result<(), RecordSinkError> {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent)
                .await
                .map_err(|e| RecordSinkError::IoError(e.to_string())),
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl IntakeRecordSink for JsonLinesRecordLog {
    async fn append(&self, record: &IntakeRecord) -> Result<(), RecordSinkError> {
        let mut line = serde_json::to_string(record)
            .map_err(|e| RecordSinkError::SerializationFailed(e.to_string()))?;
        line.push('\n');

        let _guard = self.write_lock.lock().await;
        self.ensure_parent_dir().await?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(|e| RecordSinkError::IoError(e.to_string()))?;

        file.write_all(line.as_bytes())
            .await
            .map_err(|e| RecordSinkError::IoError(e.to_string()))?;
        file.flush()
            .await
            .map_err(|e| RecordSinkError::IoError(e.to_string()))?;

        Ok(())
    }

    async fn list(&self) -> Result<Vec<IntakeRecord>, RecordSinkError> {
        let contents = match fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(RecordSinkError::IoError(e.to_string())),
        };

        let records = contents
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .filter_map(|(index, line)| match serde_json::from_str(line) {
                Ok(record) => Some(record),
                Err(e) => {
                    tracing::warn!(line = index + 1, error = %e, "skipping unreadable intake record");
                    None
                }
            })
            .collect();

        Ok(records)
    }
}
