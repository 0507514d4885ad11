//! Webhook HTTP surface.

mod handlers;
mod middleware;

pub use handlers::*;
pub use middleware::logging_middleware;

use crate::moderation::Moderator;
use crate::telemetry::ErrorReporter;
use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Runs the ban/notify flow for each update
    pub moderator: Moderator,
    /// Receives decode failures
    pub reporter: Arc<dyn ErrorReporter>,
}

impl AppState {
    /// Create new application state.
    pub fn new(moderator: Moderator, reporter: Arc<dyn ErrorReporter>) -> Self {
        Self {
            moderator,
            reporter,
        }
    }
}

/// Create the router, accepting updates at `webhook_path`.
pub fn create_router(state: AppState, webhook_path: &str) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(webhook_path, post(handlers::webhook))
        .layer(axum_middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
