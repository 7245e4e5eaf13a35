//! Venue recommendations as returned by the venue generator.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

const UNAVAILABLE_NAME: &str = "Error";
const UNAVAILABLE_ADDRESS: &str = "Could not generate venue recommendations at this time";
const UNAVAILABLE_CAPACITY: &str = "Unknown";
const UNAVAILABLE_HINT: &str = "Please try again later";

/// A single recommended venue.
///
/// Generators are loose about types, so `capacity` and the echoed request
/// fields accept either strings or numbers and are always stored as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Venue {
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub capacity: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub date: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub time: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub budget: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub attendees: Option<String>,
}

impl Venue {
    /// Creates a venue with only the required fields set.
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        capacity: impl Into<String>,
        features: Vec<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            capacity: capacity.into(),
            features,
            source: source.into(),
            state: None,
            date: None,
            time: None,
            budget: None,
            attendees: None,
        }
    }

    /// Placeholder returned when no recommendations could be generated.
    pub fn unavailable() -> Self {
        Self::new(
            UNAVAILABLE_NAME,
            UNAVAILABLE_ADDRESS,
            UNAVAILABLE_CAPACITY,
            vec![UNAVAILABLE_HINT.to_string()],
            "",
        )
    }

    /// True for the placeholder from [`Venue::unavailable`].
    pub fn is_unavailable(&self) -> bool {
        self.name == UNAVAILABLE_NAME && self.address == UNAVAILABLE_ADDRESS && self.source.is_empty()
    }
}

fn value_to_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text),
        other => Some(other.to_string()),
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(value_to_text(Value::deserialize(deserializer)?).unwrap_or_default())
}

fn lenient_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(value_to_text(Value::deserialize(deserializer)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numeric_capacity_is_read_as_text() {
        let venue: Venue = serde_json::from_value(json!({
            "name": "Harbor Hall",
            "address": "1 Pier Rd",
            "capacity": 250,
            "features": ["Parking"],
            "source": "https://harbor.example",
            "budget": 5000
        }))
        .unwrap();

        assert_eq!(venue.capacity, "250");
        assert_eq!(venue.budget.as_deref(), Some("5000"));
    }

    #[test]
    fn missing_optional_fields_default() {
        let venue: Venue = serde_json::from_value(json!({ "name": "Loft" })).unwrap();
        assert_eq!(venue, Venue::new("Loft", "", "", vec![], ""));
    }

    #[test]
    fn absent_echo_fields_are_not_serialized() {
        let value = serde_json::to_value(Venue::new("Loft", "2 Main St", "80", vec![], "")).unwrap();
        assert!(value.get("date").is_none());
        assert!(value.get("state").is_none());
        assert_eq!(value["capacity"], "80");
    }

    #[test]
    fn unavailable_placeholder_shape() {
        let venue = Venue::unavailable();
        assert!(venue.is_unavailable());
        assert_eq!(
            serde_json::to_value(&venue).unwrap(),
            json!({
                "name": "Error",
                "address": "Could not generate venue recommendations at this time",
                "capacity": "Unknown",
                "features": ["Please try again later"],
                "source": ""
            })
        );
    }

    #[test]
    fn real_venue_named_error_is_not_the_placeholder() {
        let venue = Venue::new("Error", "5 Bug St", "10", vec![], "https://error.example");
        assert!(!venue.is_unavailable());
    }
}
