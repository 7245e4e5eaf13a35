//! Event Intake - conversational event-planning intake service
//!
//! A caller answers six questions (event type, location, date, time,
//! budget, attendees) one message at a time. Each answer is validated and
//! normalized; the finished record is persisted and handed to venue
//! generation, traffic lookups and condition enrichment.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
