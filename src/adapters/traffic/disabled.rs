use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::enrichment::TrafficSummary;
use crate::ports::{TrafficError, TrafficProvider};

/// Used when no maps API key is configured or traffic is switched off.
/// Every lookup fails with [`TrafficError::Disabled`], so venues carry a
/// null traffic entry.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledTrafficProvider;

#[async_trait]
impl TrafficProvider for DisabledTrafficProvider {
    async fn lookup(
        &self,
        _city: &str,
        _destination: &str,
        _date: NaiveDate,
    ) -> Result<TrafficSummary, TrafficError> {
        Err(TrafficError::Disabled)
    }
}
