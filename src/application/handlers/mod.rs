//! Application handlers.
//!
//! Command handlers that orchestrate domain operations over the ports.

pub mod intake;

pub use intake::{
    HandleMessageCommand, HandleMessageError, IntakeOrchestrator, IntakeReply, KeyedLocks,
    ReplyKind, VenueEnricher,
};
