//! OpenAI Venue Generator - Implementation of VenueGenerator over chat completions.
//!
//! Asks the model for a JSON object with a `venues` array
//! (`response_format: json_object`) and reads it leniently: entries that
//! are not venue objects are skipped rather than failing the whole list.
//!
//! # Configuration
//!
//! ```ignore
//! let config = OpenAIConfig::new(api_key)
//!     .with_model("gpt-4o-mini")
//!     .with_venue_count(20);
//!
//! let generator = OpenAIVenueGenerator::new(config)?;
//! ```

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use tokio::time::sleep;

use crate::domain::enrichment::Venue;
use crate::domain::intake::IntakeRecord;
use crate::ports::{VenueError, VenueGenerator};

const SYSTEM_PROMPT: &str = "You are an expert event planner with extensive knowledge of real venues. \
Always provide accurate, currently operating venues with real details.";

const DEFAULT_RETRY_AFTER_SECS: u32 = 30;

/// Configuration for the OpenAI venue generator.
#[derive(Debug, Clone)]
pub struct OpenAIConfig {
    /// API key for authentication.
    api_key: Secret<String>,
    /// Model to use (e.g., "gpt-4o-mini").
    pub model: String,
    /// Base URL for the API (default: https://api.openai.com/v1).
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Maximum retries on transient failures.
    pub max_retries: u32,
    /// Number of venues requested per intake.
    pub venue_count: u32,
}

impl OpenAIConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            model: "gpt-4o-mini".to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
            timeout: Duration::from_secs(60),
            max_retries: 2,
            venue_count: 20,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_venue_count(mut self, venue_count: u32) -> Self {
        self.venue_count = venue_count;
        self
    }

    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// Venue generator backed by OpenAI chat completions.
pub struct OpenAIVenueGenerator {
    config: OpenAIConfig,
    client: Client,
}

impl OpenAIVenueGenerator {
    /// Creates a generator, failing only if the HTTP client cannot be built.
    pub fn new(config: OpenAIConfig) -> Result<Self, VenueError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| VenueError::unavailable(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.config.base_url.trim_end_matches('/'))
    }

    fn to_openai_request(&self, record: &IntakeRecord) -> OpenAIRequest {
        OpenAIRequest {
            model: self.config.model.clone(),
            messages: vec![
                OpenAIMessage {
                    role: "system".to_string(),
                    content: SYSTEM_PROMPT.to_string(),
                },
                OpenAIMessage {
                    role: "user".to_string(),
                    content: venue_prompt(record, self.config.venue_count),
                },
            ],
            response_format: ResponseFormat {
                kind: "json_object".to_string(),
            },
        }
    }

    async fn send_request(&self, record: &IntakeRecord) -> Result<Response, VenueError> {
        self.client
            .post(self.completions_url())
            .header("Authorization", format!("Bearer {}", self.config.api_key()))
            .header("Content-Type", "application/json")
            .json(&self.to_openai_request(record))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    VenueError::Timeout {
                        timeout_secs: self.config.timeout.as_secs() as u32,
                    }
                } else if e.is_connect() {
                    VenueError::network(format!("Connection failed: {}", e))
                } else {
                    VenueError::network(e.to_string())
                }
            })
    }

    async fn parse_response(&self, response: Response) -> Result<Vec<Venue>, VenueError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(status_error(status.as_u16(), body));
        }

        let openai_response: OpenAIResponse = response
            .json()
            .await
            .map_err(|e| VenueError::parse(format!("Failed to parse response: {}", e)))?;

        let content = openai_response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or_else(|| VenueError::parse("No response received from OpenAI"))?;

        parse_venue_list(&content)
    }

    async fn attempt(&self, record: &IntakeRecord) -> Result<Vec<Venue>, VenueError> {
        let response = self.send_request(record).await?;
        self.parse_response(response).await
    }
}

#[async_trait]
impl VenueGenerator for OpenAIVenueGenerator {
    async fn generate(&self, record: &IntakeRecord) -> Result<Vec<Venue>, VenueError> {
        let mut retry_count = 0;

        loop {
            match self.attempt(record).await {
                Ok(venues) => return Ok(venues),
                Err(err) if err.is_retryable() && retry_count < self.config.max_retries => {
                    tracing::warn!(
                        error = %err,
                        attempt = retry_count + 1,
                        "venue generation failed, retrying"
                    );
                }
                Err(err) => return Err(err),
            }

            sleep(backoff(retry_count)).await;
            retry_count += 1;
        }
    }
}

/// Delay before retry number `retry + 1`: 1s, 2s, 4s, ... saturating at `u64::MAX` seconds.
fn backoff(retry: u32) -> Duration {
    Duration::from_secs(2u64.saturating_pow(retry))
}

/// User prompt asking for `count` venues matching `record`.
pub fn venue_prompt(record: &IntakeRecord, count: u32) -> String {
    format!(
        r#"As an expert event planner, recommend {count} real and currently operating venues in {location} that would be perfect for a {event_type} with {attendees} attendees and a budget of {budget}.

Research and provide real venues that actually exist, including:
- The venue's real name and actual location
- Their real street address
- Actual capacity information
- Real amenities and features they offer
- Their genuine website or social media presence

Format the response as a JSON object with a 'venues' array containing the recommendations.
Example format:
{{
    "venues": [
        {{
            "name": "Real Venue Name",
            "address": "Actual Street Address",
            "capacity": "Specific capacity range",
            "features": ["Real Feature 1", "Real Feature 2", "Real Feature 3"],
            "source": "Actual website URL",
            "state": "Actual state",
            "time": "{time}",
            "date": "{date}",
            "budget": "{budget}",
            "attendees": "{attendees}"
        }}
    ]
}}"#,
        count = count,
        location = record.location,
        event_type = record.event_type,
        attendees = record.attendees,
        budget = record.budget,
        time = record.time,
        date = record.date,
    )
}

/// Reads the `venues` array out of a model reply.
///
/// A reply without `venues` is an empty list. Entries that do not
/// deserialize as a [`Venue`] are dropped.
fn parse_venue_list(content: &str) -> Result<Vec<Venue>, VenueError> {
    let payload: VenueListPayload = serde_json::from_str(content)
        .map_err(|e| VenueError::parse(format!("Reply is not a JSON object: {}", e)))?;

    let total = payload.venues.len();
    let venues: Vec<Venue> = payload
        .venues
        .into_iter()
        .filter_map(|entry| serde_json::from_value(entry).ok())
        .collect();

    if venues.len() < total {
        tracing::warn!(
            skipped = total - venues.len(),
            "dropped malformed venue entries"
        );
    }
    Ok(venues)
}

/// Maps a non-success status to the matching error.
fn status_error(status: u16, body: String) -> VenueError {
    match status {
        401 => VenueError::AuthenticationFailed,
        429 => VenueError::rate_limited(parse_retry_after(&body)),
        400 => VenueError::InvalidRequest(body),
        500..=599 => VenueError::unavailable(format!("Server error {}: {}", status, body)),
        _ => VenueError::network(format!("Unexpected status {}: {}", status, body)),
    }
}

/// Extracts "try again in Ns" from an error body, defaulting to 30 seconds.
fn parse_retry_after(error_body: &str) -> u32 {
    serde_json::from_str::<Value>(error_body)
        .ok()
        .and_then(|parsed| {
            let message = parsed.get("error")?.get("message")?.as_str()?.to_string();
            let rest = &message[message.find("try again in ")? + "try again in ".len()..];
            let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
            digits.parse().ok()
        })
        .unwrap_or(DEFAULT_RETRY_AFTER_SECS)
}

// ----- OpenAI API Types -----

#[derive(Debug, Serialize)]
struct OpenAIRequest {
    model: String,
    messages: Vec<OpenAIMessage>,
    response_format: ResponseFormat,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: String,
}

#[derive(Debug, Serialize)]
struct OpenAIMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct OpenAIResponse {
    choices: Vec<OpenAIChoice>,
}

#[derive(Debug, Deserialize)]
struct OpenAIChoice {
    message: OpenAIReplyMessage,
}

#[derive(Debug, Deserialize)]
struct OpenAIReplyMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct VenueListPayload {
    #[serde(default)]
    venues: Vec<Value>,
}
