//! Telegram Bot API client.

mod client;
mod error;
mod types;

pub use client::{TelegramClient, DEFAULT_API_URL};
pub use error::{ActionError, TelegramError};
pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const TOKEN: &str = "123456:test-token";

    fn create_test_client(mock_server: &MockServer) -> TelegramClient {
        TelegramClient::new(mock_server.uri(), TOKEN, Duration::from_secs(5)).unwrap()
    }

    fn method_path(name: &str) -> String {
        format!("/bot{}/{}", TOKEN, name)
    }

    /// The call never produced a decodable envelope.
    fn is_transport(err: &TelegramError) -> bool {
        matches!(err, TelegramError::Http(_) | TelegramError::Json(_))
    }

    #[tokio::test]
    async fn test_ban_chat_member_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(method_path("banChatMember")))
            .and(body_json(serde_json::json!({
                "chat_id": -1001,
                "user_id": 42,
                "until_date": 1700086400
            })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({
                    "ok": true,
                    "result": true
                })),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        let response = client.ban_chat_member(-1001, 42, 1700086400).await.unwrap();

        assert!(response.ok);
        assert!(response.result::<bool>().unwrap());
    }

    #[tokio::test]
    async fn test_ban_chat_member_not_ok_becomes_action_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(method_path("banChatMember")))
            .respond_with(
                ResponseTemplate::new(400).set_body_json(serde_json::json!({
                    "ok": false,
                    "error_code": 400,
                    "description": "Bad Request: can't remove chat owner"
                })),
            )
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        let err = client.ban_chat_member(1, 2, 3).await.unwrap_err();

        assert!(!is_transport(&err));
        match err {
            TelegramError::Api(e) => {
                assert_eq!(e.code, 400);
                assert_eq!(e.message, "Bad Request: can't remove chat owner");
                assert_eq!(e.to_string(), "Bad Request: can't remove chat owner");
                assert_eq!(e.migrate_to_chat_id, 0);
                assert_eq!(e.retry_after, 0);
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_action_error_carries_response_parameters() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(method_path("sendMessage")))
            .respond_with(
                ResponseTemplate::new(429).set_body_json(serde_json::json!({
                    "ok": false,
                    "error_code": 429,
                    "description": "Too Many Requests: retry after 7",
                    "parameters": { "migrate_to_chat_id": -1001234567890i64, "retry_after": 7 }
                })),
            )
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        let err = client.send_message(1, "hi").await.unwrap_err();

        match err {
            TelegramError::Api(e) => {
                assert_eq!(e.code, 429);
                assert_eq!(e.retry_after, 7);
                assert_eq!(e.migrate_to_chat_id, -1001234567890);
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_send_message_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(method_path("sendMessage")))
            .and(body_json(serde_json::json!({
                "chat_id": 7,
                "text": "hello group"
            })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({
                    "ok": true,
                    "result": { "message_id": 99, "date": 1700000000 }
                })),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        let response = client.send_message(7, "hello group").await.unwrap();

        assert!(response.ok);
        assert_eq!(response.result["message_id"], 99);
    }

    #[tokio::test]
    async fn test_undecodable_body_is_transport_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(method_path("sendMessage")))
            .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        let err = client.send_message(1, "hi").await.unwrap_err();

        assert!(is_transport(&err));
        assert!(matches!(err, TelegramError::Json(_)));
    }

    #[tokio::test]
    async fn test_connection_failure_hides_token() {
        // Nothing listens on the discard port.
        let client =
            TelegramClient::new("http://127.0.0.1:9", TOKEN, Duration::from_secs(2)).unwrap();
        let err = client.send_message(1, "hi").await.unwrap_err();

        assert!(is_transport(&err));
        assert!(!err.to_string().contains("test-token"));
    }

    #[tokio::test]
    async fn test_get_me() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(method_path("getMe")))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({
                    "ok": true,
                    "result": {
                        "id": 123456,
                        "is_bot": true,
                        "first_name": "Moderator",
                        "username": "moderator_bot"
                    }
                })),
            )
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        let me = client.get_me().await.unwrap();

        assert_eq!(me.id, 123456);
        assert!(me.is_bot);
        assert_eq!(me.username.as_deref(), Some("moderator_bot"));
    }

    #[test]
    fn test_ok_envelope_round_trip_keeps_result_opaque() {
        let original = ApiResponse {
            ok: true,
            result: serde_json::json!({ "message_id": 5, "text": "Bad Request: fake" }),
            error_code: 0,
            description: String::new(),
            parameters: None,
        };

        let encoded = serde_json::to_string(&original).unwrap();
        let decoded: ApiResponse = serde_json::from_str(&encoded).unwrap();

        assert!(decoded.ok);
        assert_eq!(decoded.result["message_id"], 5);
        let decoded = decoded.into_result().unwrap();
        assert_eq!(decoded.result, original.result);
    }

    #[test]
    fn test_inbound_message_from_update() {
        let body = serde_json::json!({
            "update_id": 10000,
            "message": {
                "message_id": 1365,
                "date": 1441645532,
                "text": "say aww please",
                "chat": { "id": 1, "type": "group", "title": "Test" },
                "from": { "id": 2, "is_bot": false, "first_name": "Sam" }
            }
        });

        let msg = InboundMessage::from_slice(body.to_string().as_bytes())
            .unwrap()
            .unwrap();

        assert_eq!(
            msg,
            InboundMessage {
                text: "say aww please".into(),
                chat_id: 1,
                sender_id: 2,
                sender_name: "Sam".into(),
            }
        );
    }

    #[test]
    fn test_inbound_message_missing_first_name_is_empty() {
        let body = br#"{"message":{"text":"hi","chat":{"id":1},"from":{"id":2}}}"#;
        let msg = InboundMessage::from_slice(body).unwrap().unwrap();

        assert_eq!(msg.sender_name, "");
    }

    #[test]
    fn test_inbound_message_without_text_is_empty() {
        let body = br#"{"message":{"photo":[],"chat":{"id":1},"from":{"id":2,"first_name":"A"}}}"#;
        let msg = InboundMessage::from_slice(body).unwrap().unwrap();

        assert_eq!(msg.text, "");
    }

    #[test]
    fn test_updates_without_message_decode_to_none() {
        let bodies = [
            serde_json::json!({ "update_id": 1 }),
            serde_json::json!({
                "update_id": 2,
                "edited_message": {
                    "text": "aww",
                    "chat": { "id": 1 },
                    "from": { "id": 2, "first_name": "Sam" }
                }
            }),
            serde_json::json!({
                "update_id": 3,
                "channel_post": { "text": "aww", "chat": { "id": -100 } }
            }),
        ];

        for body in bodies {
            let msg = InboundMessage::from_slice(body.to_string().as_bytes()).unwrap();
            assert_eq!(msg, None, "{body}");
        }
    }

    #[test]
    fn test_inbound_message_decode_errors() {
        assert!(InboundMessage::from_slice(b"not json").is_err());
        assert!(InboundMessage::from_slice(br#"{"message":{"text":"x","from":{"id":2}}}"#).is_err());
        assert!(InboundMessage::from_slice(br#"{"message":"hello"}"#).is_err());
    }
}
