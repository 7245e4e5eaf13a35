//! HTTP adapter for the event intake endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    ErrorResponse, HealthResponse, MessageRequest, MessageResponse, ResetResponse,
    SavedIntakesResponse,
};
pub use handlers::{IntakeApiError, IntakeAppState};
pub use routes::{intake_router, intake_routes};
