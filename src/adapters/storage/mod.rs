//! Intake record storage adapters.
//!
//! - `JsonLinesRecordLog` - Append-only JSON lines file
//! - `InMemoryRecordSink` - In-memory, for testing

mod in_memory_record_sink;
mod jsonl_record_log;

pub use in_memory_record_sink::InMemoryRecordSink;
pub use jsonl_record_log::JsonLinesRecordLog;
