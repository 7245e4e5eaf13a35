//! Data transfer objects for the intake endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::{IntakeReply, ReplyKind};
use crate::domain::enrichment::EnrichedVenue;
use crate::domain::foundation::Timestamp;
use crate::domain::intake::IntakeRecord;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Body of `POST /api/ai_message`.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageRequest {
    pub message: String,
    #[serde(default)]
    pub conversation_id: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
    #[serde(rename = "type")]
    pub kind: ReplyKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venues: Option<Vec<EnrichedVenue>>,
    pub timestamp: Timestamp,
}

impl From<IntakeReply> for MessageResponse {
    fn from(reply: IntakeReply) -> Self {
        Self {
            message: reply.message,
            kind: reply.kind,
            venues: reply.venues,
            timestamp: reply.timestamp,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SavedIntakesResponse {
    pub records: Vec<IntakeRecord>,
    pub count: usize,
}

impl From<Vec<IntakeRecord>> for SavedIntakesResponse {
    fn from(records: Vec<IntakeRecord>) -> Self {
        Self {
            count: records.len(),
            records,
        }
    }
}

/// Result of the admin reset hook.
#[derive(Debug, Clone, Serialize)]
pub struct ResetResponse {
    pub cleared: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub active_conversations: usize,
}

impl HealthResponse {
    pub fn ok(active_conversations: usize) -> Self {
        Self {
            status: "ok",
            active_conversations,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", message)
    }

    pub fn internal() -> Self {
        Self::new("INTERNAL_ERROR", "An internal error occurred")
    }
}
