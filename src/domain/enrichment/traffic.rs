//! Commute-time summaries from nearby transport hubs to a venue.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Text shown when the provider has no duration for a slot.
pub const NO_DURATION_TEXT: &str = "N/A";

/// Travel time for one origin at one departure slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelTime {
    pub travel_time_text: String,
    pub travel_time_seconds: Option<u64>,
}

impl TravelTime {
    pub fn unknown() -> Self {
        Self {
            travel_time_text: NO_DURATION_TEXT.to_string(),
            travel_time_seconds: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OriginTimes {
    /// Keyed by departure slot, `HH:MM`.
    pub times: BTreeMap<String, TravelTime>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AverageCommute {
    pub average_commute_time: f64,
}

/// Per-origin travel times across the day plus their averages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrafficSummary {
    pub traffic_data: BTreeMap<String, OriginTimes>,
    pub average_times: BTreeMap<String, AverageCommute>,
}

/// One distance-matrix reading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TravelSample {
    pub origin: String,
    pub slot: String,
    pub travel_time: TravelTime,
}

impl TrafficSummary {
    /// Folds samples into a summary.
    ///
    /// Every origin in `origins` gets an average, even with no samples.
    /// Only known, non-zero durations count towards it; an origin with
    /// none averages to 0.
    pub fn summarize<I>(origins: &[String], samples: I) -> Self
    where
        I: IntoIterator<Item = TravelSample>,
    {
        let mut traffic_data: BTreeMap<String, OriginTimes> = BTreeMap::new();
        let mut totals: BTreeMap<&str, (u64, u64)> =
            origins.iter().map(|origin| (origin.as_str(), (0, 0))).collect();

        for sample in samples {
            if let (Some(seconds), Some(total)) = (
                sample.travel_time.travel_time_seconds.filter(|s| *s > 0),
                totals.get_mut(sample.origin.as_str()),
            ) {
                total.0 += seconds;
                total.1 += 1;
            }
            traffic_data
                .entry(sample.origin)
                .or_default()
                .times
                .insert(sample.slot, sample.travel_time);
        }

        let average_times = totals
            .into_iter()
            .map(|(origin, (sum, count))| {
                let average_commute_time = if count > 0 {
                    sum as f64 / count as f64
                } else {
                    0.0
                };
                (origin.to_string(), AverageCommute { average_commute_time })
            })
            .collect();

        Self {
            traffic_data,
            average_times,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample(origin: &str, slot: &str, seconds: Option<u64>) -> TravelSample {
        TravelSample {
            origin: origin.to_string(),
            slot: slot.to_string(),
            travel_time: match seconds {
                Some(s) => TravelTime {
                    travel_time_text: format!("{} mins", s / 60),
                    travel_time_seconds: Some(s),
                },
                None => TravelTime::unknown(),
            },
        }
    }

    #[test]
    fn averages_ignore_missing_durations() {
        let origins = vec!["Central Station, Boston".to_string()];
        let summary = TrafficSummary::summarize(
            &origins,
            vec![
                sample("Central Station, Boston", "09:00", Some(600)),
                sample("Central Station, Boston", "10:00", None),
                sample("Central Station, Boston", "11:00", Some(1200)),
            ],
        );

        assert_eq!(
            summary.average_times["Central Station, Boston"].average_commute_time,
            900.0
        );
        assert_eq!(summary.traffic_data["Central Station, Boston"].times.len(), 3);
    }

    #[test]
    fn origin_without_samples_averages_zero() {
        let origins = vec!["Logan Airport, Boston".to_string()];
        let summary = TrafficSummary::summarize(&origins, Vec::new());
        assert_eq!(
            summary.average_times["Logan Airport, Boston"].average_commute_time,
            0.0
        );
        assert!(summary.traffic_data.is_empty());
    }

    #[test]
    fn serialized_shape() {
        let origins = vec!["A, X".to_string()];
        let summary = TrafficSummary::summarize(&origins, vec![sample("A, X", "09:00", None)]);
        assert_eq!(
            serde_json::to_value(&summary).unwrap(),
            json!({
                "traffic_data": {
                    "A, X": { "times": { "09:00": { "travel_time_text": "N/A", "travel_time_seconds": null } } }
                },
                "average_times": { "A, X": { "average_commute_time": 0.0 } }
            })
        );
    }
}
