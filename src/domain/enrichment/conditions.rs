//! Weather and safety snapshots attached to each venue.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WeatherSnapshot {
    /// Degrees Celsius.
    pub temperature: i32,
    /// Percent.
    pub humidity: u8,
    /// Kilometres per hour.
    pub wind_speed: u8,
    /// Percent.
    pub precipitation_probability: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hostility {
    Low,
    Moderate,
    High,
}

impl Hostility {
    pub const ALL: [Hostility; 3] = [Hostility::Low, Hostility::Moderate, Hostility::High];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SafetySnapshot {
    pub hostility: Hostility,
}
