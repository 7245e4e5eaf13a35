//! Intake Record Sink Port - durable append-only log of finished intakes.

use async_trait::async_trait;

use crate::domain::intake::IntakeRecord;

/// Errors that can occur while persisting or reading records.
#[derive(Debug, thiserror::Error)]
pub enum RecordSinkError {
    #[error("Failed to serialize record: {0}")]
    SerializationFailed(String),

    #[error("IO error: {0}")]
    IoError(String),
}

#[async_trait]
pub trait IntakeRecordSink: Send + Sync {
    /// Appends one record.
    async fn append(&self, record: &IntakeRecord) -> Result<(), RecordSinkError>;

    /// Every record appended so far, oldest first.
    ///
    /// Entries that can no longer be read as records are skipped.
    async fn list(&self) -> Result<Vec<IntakeRecord>, RecordSinkError>;
}
