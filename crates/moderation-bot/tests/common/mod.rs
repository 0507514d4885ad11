//! Common test utilities for integration tests.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use moderation_bot::api::{create_router, AppState};
use moderation_bot::{Moderator, RecordingReporter};
use std::sync::Arc;
use std::time::Duration;
use telegram_client::TelegramClient;
use tower::ServiceExt;
use wiremock::MockServer;

pub const TOKEN: &str = "123456:test-token";

/// Bot API path for `method` under the test token.
pub fn method_path(method: &str) -> String {
    format!("/bot{}/{}", TOKEN, method)
}

/// Build the webhook app against a mock Telegram server.
pub fn test_app(mock_server: &MockServer, webhook_path: &str) -> (Router, Arc<RecordingReporter>) {
    let telegram = TelegramClient::new(mock_server.uri(), TOKEN, Duration::from_secs(5)).unwrap();
    let reporter = Arc::new(RecordingReporter::new());
    let moderator = Moderator::new(Arc::new(telegram), reporter.clone());
    let app = create_router(AppState::new(moderator, reporter.clone()), webhook_path);
    (app, reporter)
}

/// Webhook update carrying a text message.
pub fn update(text: &str, chat_id: i64, user_id: i64, first_name: &str) -> serde_json::Value {
    serde_json::json!({
        "update_id": 1,
        "message": {
            "message_id": 10,
            "date": 1700000000,
            "text": text,
            "chat": { "id": chat_id, "type": "supergroup" },
            "from": { "id": user_id, "is_bot": false, "first_name": first_name }
        }
    })
}

/// POST `body` to `uri` and return the status.
pub async fn post(app: Router, uri: &str, body: impl Into<Body>) -> StatusCode {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(body.into())
            .unwrap(),
    )
    .await
    .unwrap()
    .status()
}

pub fn ok_envelope() -> serde_json::Value {
    serde_json::json!({ "ok": true, "result": true })
}

pub fn error_envelope(description: &str) -> serde_json::Value {
    serde_json::json!({ "ok": false, "error_code": 400, "description": description })
}
