//! Telegram Bot API types.

use crate::error::ActionError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Uniform response envelope returned by every Bot API method.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub ok: bool,
    /// Method-specific payload, left undecoded.
    #[serde(default)]
    pub result: serde_json::Value,
    #[serde(default)]
    pub error_code: i32,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<ResponseParameters>,
}

/// Extra details attached to some failed requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseParameters {
    #[serde(default)]
    pub migrate_to_chat_id: i64,
    #[serde(default)]
    pub retry_after: i32,
}

impl ApiResponse {
    /// Decode the opaque `result` into a concrete type.
    pub fn result<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        T::deserialize(&self.result)
    }

    /// Turn a "not ok" envelope into an [`ActionError`].
    pub fn into_result(self) -> Result<Self, ActionError> {
        if self.ok {
            return Ok(self);
        }

        let parameters = self.parameters.unwrap_or_default();
        Err(ActionError {
            code: self.error_code,
            message: self.description,
            migrate_to_chat_id: parameters.migrate_to_chat_id,
            retry_after: parameters.retry_after,
        })
    }
}

/// Body of `banChatMember`.
#[derive(Debug, Clone, Serialize)]
pub struct BanChatMemberRequest {
    pub chat_id: i64,
    pub user_id: i64,
    /// Unix time at which the user is automatically unbanned.
    pub until_date: i64,
}

/// Body of `sendMessage`.
#[derive(Debug, Clone, Serialize)]
pub struct SendMessageRequest {
    pub chat_id: i64,
    pub text: String,
}

/// Incoming webhook update. Only the fields the bot reads are modelled.
///
/// `message` is absent for edits, channel posts, membership changes and
/// the other update kinds.
#[derive(Debug, Clone, Deserialize)]
pub struct Update {
    #[serde(default)]
    pub message: Option<Message>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    #[serde(default)]
    pub text: String,
    pub chat: Chat,
    pub from: User,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Chat {
    pub id: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub is_bot: bool,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub username: Option<String>,
}

/// Parsed message for moderation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundMessage {
    /// The message text, untouched.
    pub text: String,
    pub chat_id: i64,
    pub sender_id: i64,
    /// Sender's first name, empty when the platform omits it.
    pub sender_name: String,
}

impl InboundMessage {
    /// Decode a raw webhook payload.
    ///
    /// Returns `Ok(None)` for updates that carry no new message.
    pub fn from_slice(body: &[u8]) -> Result<Option<Self>, serde_json::Error> {
        let update: Update = serde_json::from_slice(body)?;
        Ok(Self::from_update(update))
    }

    pub fn from_update(update: Update) -> Option<Self> {
        let message = update.message?;
        Some(Self {
            text: message.text,
            chat_id: message.chat.id,
            sender_id: message.from.id,
            sender_name: message.from.first_name,
        })
    }
}
