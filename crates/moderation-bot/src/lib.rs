//! Telegram moderation webhook.
//!
//! Telegram posts group updates to this service. When a message contains a
//! forbidden word the sender is banned for a day and the chat is told why,
//! or why the ban could not happen (owner, admin, missing rights, private
//! chat). Anything else goes to error reporting.

pub mod api;
pub mod config;
pub mod error;
pub mod filter;
pub mod moderation;
pub mod telemetry;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use moderation::{ChatActions, Moderator, RemovalOutcome};
pub use telemetry::{ErrorReporter, LogReporter, RecordingReporter, SentryReporter};
