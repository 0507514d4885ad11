//! Request logging middleware.

use axum::{
    extract::Request,
    http::header::CONTENT_LENGTH,
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{debug, warn};

/// Log every request with its payload size and how long handling took.
///
/// Webhook requests stay open until both outbound calls finish, so the
/// elapsed time covers the Bot API round trips.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let bytes = request
        .headers()
        .get(CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(0);
    let started = Instant::now();

    let response = next.run(request).await;

    let status = response.status();
    let elapsed_ms = started.elapsed().as_millis() as u64;
    if status.is_success() {
        debug!(%method, %path, %status, bytes, elapsed_ms, "Handled request");
    } else {
        warn!(%method, %path, %status, bytes, elapsed_ms, "Request not handled");
    }

    response
}
