//! Venue Generator Adapters.
//!
//! - `MockVenueGenerator` - Configurable mock for testing and offline runs
//! - `OpenAIVenueGenerator` - OpenAI chat completions in JSON mode

mod mock_venue_generator;
mod openai_venue_generator;

pub use mock_venue_generator::{sample_venues, MockVenueGenerator, MockVenueResponse};
pub use openai_venue_generator::{venue_prompt, OpenAIConfig, OpenAIVenueGenerator};
