//! Traffic Provider Port - commute times from transport hubs to a venue.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::enrichment::TrafficSummary;

#[async_trait]
pub trait TrafficProvider: Send + Sync {
    /// Travel times across the event day from hubs in `city` to `destination`.
    async fn lookup(
        &self,
        city: &str,
        destination: &str,
        date: NaiveDate,
    ) -> Result<TrafficSummary, TrafficError>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TrafficError {
    #[error("city not found: {0}")]
    CityNotFound(String),

    #[error("traffic lookups are disabled")]
    Disabled,

    #[error("provider returned status {status}: {message}")]
    Provider { status: String, message: String },

    #[error("network error: {0}")]
    Network(String),

    #[error("parse error: {0}")]
    Parse(String),
}
