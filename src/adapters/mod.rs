//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - Venue generation (OpenAI, mock)
//! - `traffic` - Travel-time lookups (Google Maps, disabled)
//! - `conditions` - Weather, safety and accessibility data
//! - `registry` - Conversation state storage
//! - `storage` - Finalized record sinks
//! - `clock` - Wall-clock sources
//! - `http` - REST API

pub mod ai;
pub mod clock;
pub mod conditions;
pub mod http;
pub mod registry;
pub mod storage;
pub mod traffic;
