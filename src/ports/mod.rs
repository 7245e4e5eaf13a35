//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `Clock` - Current date for relative-date resolution
//! - `ConversationRegistry` - In-progress intake state per conversation
//! - `VenueGenerator` - Venue recommendations for a finished intake
//! - `TrafficProvider` - Commute times to a venue
//! - `ConditionsProvider` - Weather, safety and accessibility data
//! - `IntakeRecordSink` - Append-only log of finished intakes

mod clock;
mod conditions_provider;
mod conversation_registry;
mod intake_record_sink;
mod traffic_provider;
mod venue_generator;

pub use clock::Clock;
pub use conditions_provider::ConditionsProvider;
pub use conversation_registry::{ConversationRegistry, RegistryError};
pub use intake_record_sink::{IntakeRecordSink, RecordSinkError};
pub use traffic_provider::{TrafficError, TrafficProvider};
pub use venue_generator::{VenueError, VenueGenerator};
