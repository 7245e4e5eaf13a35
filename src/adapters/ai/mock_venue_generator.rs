//! Mock Venue Generator for testing and offline runs.
//!
//! Returns queued responses in order, then falls back to a small list of
//! sample venues built from the intake record.
//!
//! # Example
//!
//! ```ignore
//! let generator = MockVenueGenerator::new()
//!     .with_venues(vec![Venue::new("Harbor Hall", "1 Pier Rd", "250", vec![], "")])
//!     .with_error(VenueError::AuthenticationFailed);
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::time::sleep;

use crate::domain::enrichment::Venue;
use crate::domain::intake::IntakeRecord;
use crate::ports::{VenueError, VenueGenerator};

/// A configured mock response.
#[derive(Debug, Clone)]
pub enum MockVenueResponse {
    Venues(Vec<Venue>),
    Error(VenueError),
}

#[derive(Debug, Clone, Default)]
pub struct MockVenueGenerator {
    /// Pre-configured responses (consumed in order).
    responses: Arc<Mutex<VecDeque<MockVenueResponse>>>,
    /// Simulated latency per request.
    delay: Duration,
    /// Records seen, for verification.
    calls: Arc<Mutex<Vec<IntakeRecord>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl MockVenueGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful response.
    pub fn with_venues(self, venues: Vec<Venue>) -> Self {
        lock(&self.responses).push_back(MockVenueResponse::Venues(venues));
        self
    }

    /// Queues an error response.
    pub fn with_error(self, error: VenueError) -> Self {
        lock(&self.responses).push_back(MockVenueResponse::Error(error));
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }

    pub fn calls(&self) -> Vec<IntakeRecord> {
        lock(&self.calls).clone()
    }

    fn next_response(&self, record: &IntakeRecord) -> MockVenueResponse {
        lock(&self.responses)
            .pop_front()
            .unwrap_or_else(|| MockVenueResponse::Venues(sample_venues(record)))
    }
}

/// Two placeholder venues in the requested location.
pub fn sample_venues(record: &IntakeRecord) -> Vec<Venue> {
    let mut hall = Venue::new(
        format!("{} Grand Hall", record.location),
        format!("1 Main Street, {}", record.location),
        record.attendees.clone(),
        vec!["Parking".to_string(), "Catering".to_string()],
        "",
    );
    hall.date = Some(record.date.clone());
    hall.time = Some(record.time.clone());
    hall.budget = Some(record.budget.clone());
    hall.attendees = Some(record.attendees.clone());

    let mut loft = hall.clone();
    loft.name = format!("{} Riverside Loft", record.location);
    loft.address = format!("22 River Road, {}", record.location);
    loft.features = vec!["Outdoor terrace".to_string()];

    vec![hall, loft]
}

#[async_trait]
impl VenueGenerator for MockVenueGenerator {
    async fn generate(&self, record: &IntakeRecord) -> Result<Vec<Venue>, VenueError> {
        lock(&self.calls).push(record.clone());

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        match self.next_response(record) {
            MockVenueResponse::Venues(venues) => Ok(venues),
            MockVenueResponse::Error(err) => Err(err),
        }
    }
}
