//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (errors, state machine trait, timestamps)
//! - `intake` - Fields, validators and per-conversation progress
//! - `enrichment` - Venues and the traffic/weather/safety data attached to them

pub mod enrichment;
pub mod foundation;
pub mod intake;
