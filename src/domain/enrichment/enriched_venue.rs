//! A venue together with whatever enrichment succeeded for it.

use serde::{Deserialize, Serialize};

use super::{SafetySnapshot, TrafficSummary, Venue, WeatherSnapshot};

/// Each enrichment is independently optional: `None` means that lookup
/// failed or was skipped, never that the venue is invalid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedVenue {
    #[serde(flatten)]
    pub venue: Venue,
    pub traffic: Option<TrafficSummary>,
    pub weather_data: Option<WeatherSnapshot>,
    pub safety_data: Option<SafetySnapshot>,
    pub accessibility_score: Option<u8>,
}

impl EnrichedVenue {
    /// The venue with no enrichment attached.
    pub fn bare(venue: Venue) -> Self {
        Self {
            venue,
            traffic: None,
            weather_data: None,
            safety_data: None,
            accessibility_score: None,
        }
    }

    pub fn is_enriched(&self) -> bool {
        self.traffic.is_some()
            || self.weather_data.is_some()
            || self.safety_data.is_some()
            || self.accessibility_score.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::enrichment::Hostility;
    use serde_json::json;

    #[test]
    fn venue_fields_are_flattened() {
        let mut enriched = EnrichedVenue::bare(Venue::new("Loft", "2 Main St", "80", vec![], ""));
        enriched.safety_data = Some(SafetySnapshot {
            hostility: Hostility::Low,
        });
        enriched.accessibility_score = Some(77);

        assert_eq!(
            serde_json::to_value(&enriched).unwrap(),
            json!({
                "name": "Loft",
                "address": "2 Main St",
                "capacity": "80",
                "features": [],
                "source": "",
                "traffic": null,
                "weather_data": null,
                "safety_data": { "Hostility": "Low" },
                "accessibility_score": 77
            })
        );
    }

    #[test]
    fn bare_venue_is_not_enriched() {
        assert!(!EnrichedVenue::bare(Venue::unavailable()).is_enriched());
    }
}
