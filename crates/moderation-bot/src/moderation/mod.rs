//! Ban senders of forbidden words and tell the chat what happened.

mod outcome;

pub use outcome::*;

use crate::filter::contains_forbidden_word;
use crate::telemetry::ErrorReporter;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use telegram_client::{ApiResponse, InboundMessage, TelegramClient, TelegramError};
use tracing::{debug, info, instrument, warn};

/// How long a sender stays banned, in seconds.
pub const BAN_DURATION_SECS: i64 = 24 * 60 * 60;

/// The two remote operations moderation needs.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatActions: Send + Sync {
    async fn ban_chat_member(
        &self,
        chat_id: i64,
        user_id: i64,
        until_date: i64,
    ) -> Result<ApiResponse, TelegramError>;

    async fn send_message(&self, chat_id: i64, text: &str) -> Result<ApiResponse, TelegramError>;
}

#[async_trait]
impl ChatActions for TelegramClient {
    async fn ban_chat_member(
        &self,
        chat_id: i64,
        user_id: i64,
        until_date: i64,
    ) -> Result<ApiResponse, TelegramError> {
        TelegramClient::ban_chat_member(self, chat_id, user_id, until_date).await
    }

    async fn send_message(&self, chat_id: i64, text: &str) -> Result<ApiResponse, TelegramError> {
        TelegramClient::send_message(self, chat_id, text).await
    }
}

/// Runs one moderation pass per inbound message. Holds no mutable state.
#[derive(Clone)]
pub struct Moderator {
    actions: Arc<dyn ChatActions>,
    reporter: Arc<dyn ErrorReporter>,
}

impl Moderator {
    pub fn new(actions: Arc<dyn ChatActions>, reporter: Arc<dyn ErrorReporter>) -> Self {
        Self { actions, reporter }
    }

    /// Moderate `message` using the current time.
    pub async fn moderate(&self, message: &InboundMessage) -> Option<RemovalOutcome> {
        self.moderate_at(message, Utc::now()).await
    }

    /// Moderate `message` as if it arrived at `now`.
    ///
    /// Returns `None` when the text is clean or the ban call never got an
    /// answer from the platform; otherwise the classified outcome.
    #[instrument(skip(self, message), fields(chat_id = message.chat_id, user_id = message.sender_id))]
    pub async fn moderate_at(
        &self,
        message: &InboundMessage,
        now: DateTime<Utc>,
    ) -> Option<RemovalOutcome> {
        if !contains_forbidden_word(&message.text) {
            debug!("No forbidden word");
            return None;
        }

        let until_date = now.timestamp() + BAN_DURATION_SECS;
        let outcome = match self
            .actions
            .ban_chat_member(message.chat_id, message.sender_id, until_date)
            .await
        {
            Ok(_) => RemovalOutcome::Success,
            Err(TelegramError::Api(e)) => RemovalOutcome::classify(e),
            Err(e) => {
                warn!("Ban request failed: {}", e);
                self.reporter.report(&e);
                return None;
            }
        };

        info!(outcome = outcome.label(), until_date, "Forbidden word used");
        self.respond(message, &outcome).await;
        Some(outcome)
    }

    /// Post the notice matching `outcome`, or report it if there is none.
    async fn respond(&self, message: &InboundMessage, outcome: &RemovalOutcome) {
        let Some(text) = outcome.notice(&message.sender_name) else {
            if let RemovalOutcome::Unknown(e) = outcome {
                self.reporter.report(e);
            }
            return;
        };

        if let Err(e) = self.actions.send_message(message.chat_id, &text).await {
            warn!("Failed to send notice: {}", e);
            self.reporter.report(&e);
        }
    }
}
