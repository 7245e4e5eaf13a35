//! Conditions Provider Port - weather, safety and accessibility per venue.
//!
//! These lookups are infallible; implementations that wrap a real service
//! must substitute their own fallback values.

use crate::domain::enrichment::{SafetySnapshot, WeatherSnapshot};

pub trait ConditionsProvider: Send + Sync {
    fn weather(&self) -> WeatherSnapshot;

    fn safety(&self) -> SafetySnapshot;

    /// Score in `0..=100`, higher is more accessible.
    fn accessibility_score(&self) -> u8;
}
