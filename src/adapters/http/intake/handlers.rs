//! HTTP handlers for the intake endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::application::handlers::{HandleMessageCommand, HandleMessageError, IntakeOrchestrator};
use crate::ports::{ConversationRegistry, IntakeRecordSink, RecordSinkError, RegistryError};

use super::dto::{
    ErrorResponse, HealthResponse, MessageRequest, MessageResponse, ResetResponse,
    SavedIntakesResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct IntakeAppState {
    pub orchestrator: Arc<IntakeOrchestrator>,
    pub registry: Arc<dyn ConversationRegistry>,
    pub records: Arc<dyn IntakeRecordSink>,
}

impl IntakeAppState {
    pub fn new(
        orchestrator: Arc<IntakeOrchestrator>,
        registry: Arc<dyn ConversationRegistry>,
        records: Arc<dyn IntakeRecordSink>,
    ) -> Self {
        Self {
            orchestrator,
            registry,
            records,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/ai_message - One intake conversation step
pub async fn post_message(
    State(state): State<IntakeAppState>,
    body: Result<Json<MessageRequest>, JsonRejection>,
) -> Result<impl IntoResponse, IntakeApiError> {
    let Json(req) = body?;
    let cmd = HandleMessageCommand::new(req.conversation_id, req.message);

    let reply = state.orchestrator.handle(cmd).await?;

    Ok(Json(MessageResponse::from(reply)))
}

/// GET /api/saved-intakes - Every finalized record in the log
pub async fn list_saved_intakes(
    State(state): State<IntakeAppState>,
) -> Result<impl IntoResponse, IntakeApiError> {
    let records = state.records.list().await?;
    Ok(Json(SavedIntakesResponse::from(records)))
}

/// POST /api/admin/conversations/reset - Drop every in-progress conversation
pub async fn reset_conversations(
    State(state): State<IntakeAppState>,
) -> Result<impl IntoResponse, IntakeApiError> {
    let cleared = state.registry.clear().await?;
    tracing::info!(cleared, "conversation registry reset");
    Ok(Json(ResetResponse { cleared }))
}

/// GET /health - Liveness plus the number of open conversations
pub async fn health(
    State(state): State<IntakeAppState>,
) -> Result<impl IntoResponse, IntakeApiError> {
    let active = state.registry.len().await?;
    Ok(Json(HealthResponse::ok(active)))
}

// ════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════

/// Failures surfaced to HTTP callers.
///
/// Only malformed requests are described to the caller; everything else is
/// logged and answered with a generic 500.
#[derive(Debug, Error)]
pub enum IntakeApiError {
    #[error("Malformed request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Message(#[from] HandleMessageError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Records(#[from] RecordSinkError),
}

impl From<JsonRejection> for IntakeApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for IntakeApiError {
    fn into_response(self) -> Response {
        match self {
            IntakeApiError::BadRequest(message) => {
                tracing::debug!(%message, "rejected malformed request");
                (StatusCode::BAD_REQUEST, Json(ErrorResponse::bad_request(message))).into_response()
            }
            internal => {
                tracing::error!(error = %internal, "intake request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorResponse::internal())).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ValidationError;

    #[test]
    fn bad_request_maps_to_400() {
        let response = IntakeApiError::BadRequest("missing field `message`".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn registry_failure_maps_to_500() {
        let err = IntakeApiError::from(RegistryError::Unavailable("lock poisoned".into()));
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn orchestrator_failure_maps_to_500() {
        let err = IntakeApiError::from(HandleMessageError::InvalidState(
            ValidationError::empty_field("conversation"),
        ));
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn record_sink_failure_maps_to_500() {
        let err = IntakeApiError::from(RecordSinkError::IoError("disk full".into()));
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
