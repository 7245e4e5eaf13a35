//! Hand-off fan-out: venue generation plus per-venue enrichment.
//!
//! Nothing here fails. A generator error becomes the placeholder venue, a
//! traffic error becomes a null traffic entry, and every venue is
//! enriched independently of the others.
//!
//! The whole fan-out shares one deadline. Generation still running at the
//! deadline counts as a generator error; a traffic lookup still running
//! counts as a traffic error.

use chrono::NaiveDate;
use futures::future::join_all;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{timeout_at, Instant};
use uuid::Uuid;

use crate::domain::enrichment::{EnrichedVenue, Venue};
use crate::domain::intake::validators::date::CANONICAL_FORMAT;
use crate::domain::intake::IntakeRecord;
use crate::ports::{ConditionsProvider, TrafficError, TrafficProvider, VenueGenerator};

/// Hand-off budget used unless configured otherwise.
pub const DEFAULT_HANDOFF_BUDGET: Duration = Duration::from_secs(100);

pub struct VenueEnricher {
    venues: Arc<dyn VenueGenerator>,
    traffic: Arc<dyn TrafficProvider>,
    conditions: Arc<dyn ConditionsProvider>,
    budget: Duration,
}

impl VenueEnricher {
    pub fn new(
        venues: Arc<dyn VenueGenerator>,
        traffic: Arc<dyn TrafficProvider>,
        conditions: Arc<dyn ConditionsProvider>,
    ) -> Self {
        Self {
            venues,
            traffic,
            conditions,
            budget: DEFAULT_HANDOFF_BUDGET,
        }
    }

    /// Upper bound on a whole hand-off, generation and lookups included.
    pub fn with_budget(mut self, budget: Duration) -> Self {
        self.budget = budget;
        self
    }

    pub fn budget(&self) -> Duration {
        self.budget
    }

    /// Generates venues for `record` and enriches each one concurrently.
    pub async fn enrich(&self, record: &IntakeRecord, handoff_id: Uuid) -> Vec<EnrichedVenue> {
        let deadline = Instant::now() + self.budget;

        let venues = match timeout_at(deadline, self.venues.generate(record)).await {
            Ok(Ok(venues)) => venues,
            Ok(Err(err)) => {
                tracing::warn!(%handoff_id, error = %err, "venue generation failed");
                vec![Venue::unavailable()]
            }
            Err(_) => {
                tracing::warn!(
                    %handoff_id,
                    budget_ms = self.budget.as_millis() as u64,
                    "venue generation exceeded the hand-off budget"
                );
                vec![Venue::unavailable()]
            }
        };

        let event_date = NaiveDate::parse_from_str(&record.date, CANONICAL_FORMAT).ok();

        join_all(
            venues
                .into_iter()
                .map(|venue| self.enrich_one(record, event_date, venue, handoff_id, deadline)),
        )
        .await
    }

    async fn enrich_one(
        &self,
        record: &IntakeRecord,
        event_date: Option<NaiveDate>,
        venue: Venue,
        handoff_id: Uuid,
        deadline: Instant,
    ) -> EnrichedVenue {
        if venue.is_unavailable() {
            return EnrichedVenue::bare(venue);
        }

        let traffic = match event_date {
            Some(date) => {
                let destination = destination_for(&venue, &record.location);
                let lookup = self.traffic.lookup(&record.location, &destination, date);
                match timeout_at(deadline, lookup).await {
                    Ok(Ok(summary)) => Some(summary),
                    Ok(Err(TrafficError::Disabled)) => None,
                    Ok(Err(err)) => {
                        tracing::warn!(
                            %handoff_id,
                            venue = %venue.name,
                            error = %err,
                            "traffic lookup failed"
                        );
                        None
                    }
                    Err(_) => {
                        tracing::warn!(
                            %handoff_id,
                            venue = %venue.name,
                            "traffic lookup exceeded the hand-off budget"
                        );
                        None
                    }
                }
            }
            None => None,
        };

        EnrichedVenue {
            traffic,
            weather_data: Some(self.conditions.weather()),
            safety_data: Some(self.conditions.safety()),
            accessibility_score: Some(self.conditions.accessibility_score()),
            venue,
        }
    }
}

/// Routing target for a venue; falls back to its name when the address is blank.
fn destination_for(venue: &Venue, location: &str) -> String {
    if venue.address.trim().is_empty() {
        format!("{}, {}", venue.name, location)
    } else {
        venue.address.clone()
    }
}
