//! Intake command handlers.

mod enrich_venues;
mod handle_message;
mod keyed_locks;

pub use enrich_venues::VenueEnricher;
pub use handle_message::{
    HandleMessageCommand, HandleMessageError, IntakeOrchestrator, IntakeReply, ReplyKind,
};
pub use keyed_locks::{KeyedGuard, KeyedLocks};
