//! event-intake server.
//!
//! Configuration comes from `EVENT_INTAKE__*` environment variables (and a
//! `.env` file when present). See [`event_intake::config::AppConfig`].

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use http::HeaderValue;
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use event_intake::adapters::ai::{OpenAIConfig, OpenAIVenueGenerator};
use event_intake::adapters::clock::SystemClock;
use event_intake::adapters::conditions::RandomConditionsProvider;
use event_intake::adapters::http::{intake_router, IntakeAppState};
use event_intake::adapters::registry::InMemoryConversationRegistry;
use event_intake::adapters::storage::JsonLinesRecordLog;
use event_intake::adapters::traffic::{
    DisabledTrafficProvider, GoogleMapsConfig, GoogleMapsTrafficProvider,
};
use event_intake::application::handlers::{IntakeOrchestrator, VenueEnricher};
use event_intake::config::{AppConfig, ConfigError, ValidationError};
use event_intake::ports::{
    ConversationRegistry, IntakeRecordSink, TrafficError, TrafficProvider, VenueError,
};

#[derive(Debug, Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    InvalidConfig(#[from] ValidationError),

    #[error("venue generator: {0}")]
    VenueGenerator(#[from] VenueError),

    #[error("traffic provider: {0}")]
    TrafficProvider(#[from] TrafficError),

    #[error("server: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    let config = AppConfig::load()?;
    init_tracing(&config);
    config.validate()?;

    let app = build_app(&config)?;
    let addr = config.server.socket_addr()?;

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, environment = ?config.server.environment, "event-intake listening");

    axum::serve(listener, app).await?;
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if config.json_logs() {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn build_app(config: &AppConfig) -> Result<Router, StartupError> {
    let api_key = config
        .ai
        .openai_api_key
        .clone()
        .ok_or(ValidationError::MissingRequired("OPENAI_API_KEY"))?;
    let generator = OpenAIVenueGenerator::new(
        OpenAIConfig::new(api_key)
            .with_model(&config.ai.model)
            .with_base_url(&config.ai.base_url)
            .with_timeout(config.ai.timeout())
            .with_max_retries(config.ai.max_retries)
            .with_venue_count(config.ai.venue_count),
    )?;

    let traffic: Arc<dyn TrafficProvider> = match config.traffic.api_key() {
        Some(key) if config.traffic_enabled() => Arc::new(GoogleMapsTrafficProvider::new(
            GoogleMapsConfig::new(key)
                .with_base_url(&config.traffic.base_url)
                .with_search_radius(config.traffic.search_radius_m)
                .with_max_origins(config.traffic.max_origins)
                .with_hours(config.traffic.first_hour, config.traffic.last_hour)
                .with_timeout(config.traffic.timeout()),
        )?),
        _ => {
            tracing::warn!("traffic lookups disabled; venues will carry no traffic data");
            Arc::new(DisabledTrafficProvider)
        }
    };

    let enricher = VenueEnricher::new(
        Arc::new(generator),
        traffic,
        Arc::new(RandomConditionsProvider::new()),
    )
    .with_budget(config.intake.handoff_timeout());

    let registry: Arc<dyn ConversationRegistry> = Arc::new(InMemoryConversationRegistry::new());
    let records: Arc<dyn IntakeRecordSink> =
        Arc::new(JsonLinesRecordLog::new(&config.storage.record_log_path));

    let orchestrator = IntakeOrchestrator::new(
        Arc::clone(&registry),
        Arc::clone(&records),
        Arc::new(enricher),
        Arc::new(SystemClock),
        &config.intake.default_conversation_id,
    );

    let state = IntakeAppState::new(Arc::new(orchestrator), registry, records);

    let app = intake_router(state)
        .layer(cors_layer(&config.server.cors_origins_list()))
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )));

    if config.features.enable_request_tracing {
        Ok(app.layer(TraceLayer::new_for_http()))
    } else {
        Ok(app)
    }
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring unparseable CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(allowed)
        .allow_methods(Any)
        .allow_headers(Any)
}
