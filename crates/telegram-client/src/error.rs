//! Telegram client errors.

use thiserror::Error;

/// A well-formed "not ok" envelope returned by the Bot API.
///
/// `Display` yields `message` verbatim; callers match on that text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ActionError {
    pub code: i32,
    pub message: String,
    pub migrate_to_chat_id: i64,
    pub retry_after: i32,
}

#[derive(Error, Debug)]
pub enum TelegramError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Api(#[from] ActionError),
}
