//! In-Memory Record Sink Adapter
//!
//! Keeps finished intakes in memory. Useful for testing; can be told to
//! fail so callers' error handling can be exercised.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::intake::IntakeRecord;
use crate::ports::{IntakeRecordSink, RecordSinkError};

#[derive(Debug, Clone, Default)]
pub struct InMemoryRecordSink {
    records: Arc<RwLock<Vec<IntakeRecord>>>,
    failing: Arc<AtomicBool>,
}

impl InMemoryRecordSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink whose appends always fail with an IO error.
    pub fn failing() -> Self {
        let sink = Self::new();
        sink.failing.store(true, Ordering::SeqCst);
        sink
    }

    pub async fn count(&self) -> usize {
        self.records.read().await.len()
    }
}

#[async_trait]
impl IntakeRecordSink for InMemoryRecordSink {
    async fn append(&self, record: &IntakeRecord) -> Result<(), RecordSinkError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(RecordSinkError::IoError("sink configured to fail".to_string()));
        }
        self.records.write().await.push(record.clone());
        Ok(())
    }

    async fn list(&self) -> Result<Vec<IntakeRecord>, RecordSinkError> {
        Ok(self.records.read().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> IntakeRecord {
        IntakeRecord {
            event_type: "party".into(),
            location: "Leeds".into(),
            date: "2030-01-01".into(),
            time: "20:00".into(),
            budget: "900".into(),
            attendees: "30".into(),
        }
    }

    #[tokio::test]
    async fn stores_and_lists() {
        let sink = InMemoryRecordSink::new();
        sink.append(&record()).await.unwrap();
        assert_eq!(sink.count().await, 1);
        assert_eq!(sink.list().await.unwrap(), vec![record()]);
    }

    #[tokio::test]
    async fn failing_sink_rejects_appends() {
        let sink = InMemoryRecordSink::failing();
        assert!(matches!(
            sink.append(&record()).await,
            Err(RecordSinkError::IoError(_))
        ));
        assert_eq!(sink.count().await, 0);
    }
}
