//! HTTP request handlers.

use super::AppState;
use crate::error::AppError;
use axum::{body::Bytes, extract::State, http::StatusCode, Json};
use serde::Serialize;
use telegram_client::InboundMessage;
use tracing::{debug, warn};

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Health check endpoint.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Telegram webhook endpoint.
///
/// Always answers 200: Telegram redelivers anything else, and every
/// failure here is terminal and already reported.
pub async fn webhook(State(state): State<AppState>, body: Bytes) -> StatusCode {
    let message = match InboundMessage::from_slice(&body) {
        Ok(Some(message)) => message,
        Ok(None) => {
            debug!("Ignoring update without a message");
            return StatusCode::OK;
        }
        Err(e) => {
            warn!("Could not decode request body: {}", e);
            state.reporter.report(&AppError::Decode(e));
            return StatusCode::OK;
        }
    };

    state.moderator.moderate(&message).await;
    StatusCode::OK
}
