//! Application error types.

use thiserror::Error;

/// Main application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Could not decode webhook update: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] anyhow::Error),
}

/// Result type alias for application errors.
pub type AppResult<T> = Result<T, AppError>;
