//! Route configuration for the intake endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{
    health, list_saved_intakes, post_message, reset_conversations, IntakeAppState,
};

/// API routes, relative to `/api`.
///
/// - `POST /ai_message` - Intake conversation step
/// - `GET /saved-intakes` - Finalized records from the log
/// - `POST /admin/conversations/reset` - Clear the conversation registry
pub fn intake_routes() -> Router<IntakeAppState> {
    Router::new()
        .route("/ai_message", post(post_message))
        .route("/saved-intakes", get(list_saved_intakes))
        .route("/admin/conversations/reset", post(reset_conversations))
}

/// Creates the complete intake router, including `GET /health`.
pub fn intake_router(state: IntakeAppState) -> Router {
    Router::new()
        .nest("/api", intake_routes())
        .route("/health", get(health))
        .with_state(state)
}
