//! Enrichment module - venue recommendations and the data attached to them
//! after an intake completes.

mod conditions;
mod enriched_venue;
mod traffic;
mod venue;

pub use conditions::{Hostility, SafetySnapshot, WeatherSnapshot};
pub use enriched_venue::EnrichedVenue;
pub use traffic::{AverageCommute, OriginTimes, TrafficSummary, TravelSample, TravelTime, NO_DURATION_TEXT};
pub use venue::Venue;
