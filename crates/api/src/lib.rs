//! # CoachSlot API
//!
//! HTTP surface over the slot engine: clients list a coach's bookable slots
//! and reserve one; coaches manage their weekly availability and see what
//! has been booked.
//!
//! ## Architecture
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Translate HTTP requests into engine calls
//! - **Middleware**: Error-to-response mapping
//! - **Config**: Environment-driven configuration
//!
//! Authentication of coach-facing routes is left to whatever fronts this
//! service; the engine only needs a stable coach ID.

/// Configuration module for API settings
pub mod config;
/// Extractors that report rejections as JSON errors
pub mod extract;
/// Request handlers
pub mod handlers;
/// Middleware for error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::sync::Arc;

use axum::Router;
use chrono::{DateTime, Utc};
use coachslot_core::SlotEngine;
use eyre::Result;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

/// Source of "now" for slot resolution.
pub type Clock = fn() -> DateTime<Utc>;

/// Shared application state that is accessible to all request handlers
pub struct ApiState {
    pub engine: SlotEngine,
    pub clock: Clock,
}

impl ApiState {
    pub fn new(engine: SlotEngine) -> Self {
        Self {
            engine,
            clock: Utc::now,
        }
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn now(&self) -> DateTime<Utc> {
        (self.clock)()
    }
}

/// All API routes with shared state attached.
pub fn build_router(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Client-facing slot listing and booking
        .merge(routes::bookings::routes())
        // Coach-facing weekly availability
        .merge(routes::availability::routes())
        .with_state(state)
}

/// Starts the API server with the provided configuration and engine
///
/// Installs the tracing subscriber, applies CORS and timeout layers and
/// serves until the listener fails.
pub async fn start_server(config: config::ApiConfig, engine: SlotEngine) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let state = Arc::new(ApiState::new(engine));
    let app = build_router(state).layer(TraceLayer::new_for_http());

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let origins = origins
            .iter()
            .map(|origin| origin.parse())
            .collect::<Result<Vec<axum::http::HeaderValue>, _>>()?;
        let cors = tower_http::cors::CorsLayer::new()
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::PUT,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers([
                axum::http::header::CONTENT_TYPE,
                axum::http::header::AUTHORIZATION,
                axum::http::header::ACCEPT,
            ])
            .allow_origin(origins)
            .allow_credentials(true);

        app.layer(cors)
    } else {
        app
    };

    // Request timeout; the booking commit has its own, shorter bound
    let app = app.layer(tower_http::timeout::TimeoutLayer::new(
        std::time::Duration::from_secs(config.request_timeout),
    ));

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!(
        "Server listening on http://{} (schedule time zone {})",
        addr, config.schedule_timezone
    );
    axum::serve(listener, app).await?;

    Ok(())
}
