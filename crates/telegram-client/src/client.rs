//! Telegram HTTP client.

use crate::error::TelegramError;
use crate::types::*;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Default Bot API host.
pub const DEFAULT_API_URL: &str = "https://api.telegram.org";

/// Telegram Bot API client.
///
/// Every method URL embeds the bot token, so transport errors are
/// stripped of their URL before they leave this type.
#[derive(Clone)]
pub struct TelegramClient {
    client: Client,
    base_url: String,
    token: SecretString,
}

impl TelegramClient {
    /// Create a new Telegram client.
    pub fn new(
        base_url: impl Into<String>,
        token: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, TelegramError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: SecretString::new(token.into()),
        })
    }

    /// Fetch the bot's own account.
    #[instrument(skip(self))]
    pub async fn get_me(&self) -> Result<User, TelegramError> {
        let response = self.call("getMe", &serde_json::json!({})).await?;
        Ok(response.result()?)
    }

    /// Ban a user from a chat until `until_date` (unix seconds).
    #[instrument(skip(self))]
    pub async fn ban_chat_member(
        &self,
        chat_id: i64,
        user_id: i64,
        until_date: i64,
    ) -> Result<ApiResponse, TelegramError> {
        let request = BanChatMemberRequest {
            chat_id,
            user_id,
            until_date,
        };

        self.call("banChatMember", &request).await
    }

    /// Send a plain text message to a chat.
    #[instrument(skip(self, text))]
    pub async fn send_message(&self, chat_id: i64, text: &str) -> Result<ApiResponse, TelegramError> {
        let request = SendMessageRequest {
            chat_id,
            text: text.to_string(),
        };

        let response = self.call("sendMessage", &request).await?;
        debug!("Sent message to chat {}", chat_id);
        Ok(response)
    }

    /// POST a JSON body to a Bot API method and decode the envelope.
    ///
    /// The envelope is read whatever the HTTP status: failed calls come
    /// back as 4xx with `ok: false` and a description.
    async fn call<B: Serialize + ?Sized>(
        &self,
        method: &str,
        body: &B,
    ) -> Result<ApiResponse, TelegramError> {
        let url = format!(
            "{}/bot{}/{}",
            self.base_url,
            self.token.expose_secret(),
            method
        );

        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| TelegramError::Http(e.without_url()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TelegramError::Http(e.without_url()))?;
        debug!(
            %status,
            "{} response: {}",
            method,
            body.chars().take(200).collect::<String>()
        );

        let envelope: ApiResponse = serde_json::from_str(&body)?;
        envelope.into_result().map_err(|e| {
            warn!(code = e.code, "{} failed: {}", method, e.message);
            TelegramError::from(e)
        })
    }
}
