//! Google Maps Traffic Provider - Implementation of TrafficProvider.
//!
//! For a city and venue address:
//!
//! 1. geocode the city
//! 2. collect nearby train stations and airports as origins
//! 3. for each departure hour of the event day, query the distance matrix
//!    from every origin to the venue (driving, best-guess traffic)
//!
//! and fold the readings into a [`TrafficSummary`].

use async_trait::async_trait;
use chrono::{Local, NaiveDate, NaiveTime, TimeZone};
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

use crate::domain::enrichment::{TrafficSummary, TravelSample, TravelTime};
use crate::ports::{TrafficError, TrafficProvider};

/// Place types used as commute origins.
const ORIGIN_PLACE_TYPES: [&str; 2] = ["train_station", "airport"];

#[derive(Debug, Clone)]
pub struct GoogleMapsConfig {
    api_key: Secret<String>,
    pub base_url: String,
    /// Radius around the city centre searched for origins, in metres.
    pub search_radius_m: u32,
    /// Distance matrix requests accept at most 25 origins.
    pub max_origins: usize,
    pub first_hour: u32,
    /// Inclusive.
    pub last_hour: u32,
    pub timeout: Duration,
}

impl GoogleMapsConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            base_url: "https://maps.googleapis.com/maps/api".to_string(),
            search_radius_m: 5000,
            max_origins: 25,
            first_hour: 9,
            last_hour: 23,
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_search_radius(mut self, metres: u32) -> Self {
        self.search_radius_m = metres;
        self
    }

    pub fn with_max_origins(mut self, max_origins: usize) -> Self {
        self.max_origins = max_origins;
        self
    }

    pub fn with_hours(mut self, first_hour: u32, last_hour: u32) -> Self {
        self.first_hour = first_hour;
        self.last_hour = last_hour;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

pub struct GoogleMapsTrafficProvider {
    config: GoogleMapsConfig,
    client: Client,
}

impl GoogleMapsTrafficProvider {
    pub fn new(config: GoogleMapsConfig) -> Result<Self, TrafficError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| TrafficError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}/json", self.config.base_url.trim_end_matches('/'), path)
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, TrafficError> {
        let response = self
            .client
            .get(self.endpoint(path))
            .query(query)
            .query(&[("key", self.config.api_key())])
            .send()
            .await
            .map_err(|e| TrafficError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TrafficError::Provider {
                status: status.as_u16().to_string(),
                message: response.text().await.unwrap_or_default(),
            });
        }

        response
            .json()
            .await
            .map_err(|e| TrafficError::Parse(format!("{} response: {}", path, e)))
    }

    async fn geocode(&self, city: &str) -> Result<LatLng, TrafficError> {
        let response: GeocodeResponse = self
            .get("geocode", &[("address", city.to_string())])
            .await?;

        if response.status == "ZERO_RESULTS" {
            return Err(TrafficError::CityNotFound(city.to_string()));
        }
        check_status(&response.status, response.error_message)?;

        response
            .results
            .into_iter()
            .next()
            .map(|result| result.geometry.location)
            .ok_or_else(|| TrafficError::CityNotFound(city.to_string()))
    }

    async fn transport_hubs(&self, city: &str, centre: LatLng) -> Result<Vec<String>, TrafficError> {
        let mut origins = Vec::new();

        for place_type in ORIGIN_PLACE_TYPES {
            let response: PlacesResponse = self
                .get(
                    "place/nearbysearch",
                    &[
                        ("location", format!("{},{}", centre.lat, centre.lng)),
                        ("radius", self.config.search_radius_m.to_string()),
                        ("type", place_type.to_string()),
                    ],
                )
                .await?;

            if response.status != "ZERO_RESULTS" {
                check_status(&response.status, response.error_message)?;
            }
            origins.extend(
                response
                    .results
                    .into_iter()
                    .map(|place| format!("{}, {}", place.name, city)),
            );
        }

        origins.truncate(self.config.max_origins);
        Ok(origins)
    }

    async fn travel_times(
        &self,
        origins: &[String],
        destination: &str,
        date: NaiveDate,
        hour: u32,
    ) -> Result<Vec<TravelSample>, TrafficError> {
        let response: DistanceMatrixResponse = self
            .get(
                "distancematrix",
                &[
                    ("origins", origins.join("|")),
                    ("destinations", destination.to_string()),
                    ("departure_time", departure_time(date, hour).to_string()),
                    ("traffic_model", "best_guess".to_string()),
                    ("mode", "driving".to_string()),
                ],
            )
            .await?;

        check_status(&response.status, response.error_message.clone())?;
        Ok(samples_from_matrix(origins, &slot_label(hour), response))
    }
}

#[async_trait]
impl TrafficProvider for GoogleMapsTrafficProvider {
    async fn lookup(
        &self,
        city: &str,
        destination: &str,
        date: NaiveDate,
    ) -> Result<TrafficSummary, TrafficError> {
        let centre = self.geocode(city).await?;
        let origins = self.transport_hubs(city, centre).await?;
        tracing::debug!(city, origins = origins.len(), "collected commute origins");

        let mut samples = Vec::new();
        if !origins.is_empty() {
            for hour in self.config.first_hour..=self.config.last_hour {
                samples.extend(self.travel_times(&origins, destination, date, hour).await?);
            }
        }

        Ok(TrafficSummary::summarize(&origins, samples))
    }
}

fn check_status(status: &str, error_message: Option<String>) -> Result<(), TrafficError> {
    if status == "OK" {
        Ok(())
    } else {
        Err(TrafficError::Provider {
            status: status.to_string(),
            message: error_message.unwrap_or_default(),
        })
    }
}

/// `HH:00` label for a departure hour.
fn slot_label(hour: u32) -> String {
    format!("{:02}:00", hour)
}

/// Unix seconds for `hour:00` local time on `date`.
fn departure_time(date: NaiveDate, hour: u32) -> i64 {
    let naive = date.and_time(NaiveTime::from_hms_opt(hour, 0, 0).unwrap_or(NaiveTime::MIN));
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|local| local.timestamp())
        .unwrap_or_else(|| naive.and_utc().timestamp())
}

/// One sample per origin; rows are in origin order and the single
/// destination is the first element of each row.
fn samples_from_matrix(
    origins: &[String],
    slot: &str,
    response: DistanceMatrixResponse,
) -> Vec<TravelSample> {
    let mut rows = response.rows.into_iter();
    origins
        .iter()
        .map(|origin| {
            let travel_time = rows
                .next()
                .and_then(|row| row.elements.into_iter().next())
                .and_then(|element| element.duration_in_traffic)
                .map(|duration| TravelTime {
                    travel_time_text: duration.text,
                    travel_time_seconds: Some(duration.value),
                })
                .unwrap_or_else(TravelTime::unknown);
            TravelSample {
                origin: origin.clone(),
                slot: slot.to_string(),
                travel_time,
            }
        })
        .collect()
}

// ----- Google Maps API Types -----

#[derive(Debug, Clone, Copy, Deserialize)]
struct LatLng {
    lat: f64,
    lng: f64,
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    status: String,
    #[serde(default)]
    error_message: Option<String>,
    #[serde(default)]
    results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: LatLng,
}

#[derive(Debug, Deserialize)]
struct PlacesResponse {
    status: String,
    #[serde(default)]
    error_message: Option<String>,
    #[serde(default)]
    results: Vec<Place>,
}

#[derive(Debug, Deserialize)]
struct Place {
    name: String,
}

#[derive(Debug, Deserialize)]
struct DistanceMatrixResponse {
    status: String,
    #[serde(default)]
    error_message: Option<String>,
    #[serde(default)]
    rows: Vec<MatrixRow>,
}

#[derive(Debug, Deserialize)]
struct MatrixRow {
    #[serde(default)]
    elements: Vec<MatrixElement>,
}

#[derive(Debug, Deserialize)]
struct MatrixElement {
    #[serde(default)]
    duration_in_traffic: Option<TextValue>,
}

#[derive(Debug, Deserialize)]
struct TextValue {
    text: String,
    value: u64,
}
