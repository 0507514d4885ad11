//! Out-of-band error reporting.

use std::error::Error;
use std::sync::Mutex;
use tracing::error;

/// Sink for errors that end a webhook invocation.
///
/// Reporting is fire-and-forget; implementations must not fail.
pub trait ErrorReporter: Send + Sync {
    fn report(&self, error: &(dyn Error + 'static));
}

/// Logs the error and forwards it to Sentry.
///
/// Without an initialised Sentry client the capture is a no-op.
#[derive(Debug, Default)]
pub struct SentryReporter;

impl ErrorReporter for SentryReporter {
    fn report(&self, error: &(dyn Error + 'static)) {
        let event_id = sentry::capture_error(error);
        error!(%event_id, "{}", error);
    }
}

/// Logs the error only.
#[derive(Debug, Default)]
pub struct LogReporter;

impl ErrorReporter for LogReporter {
    fn report(&self, error: &(dyn Error + 'static)) {
        error!("{}", error);
    }
}

/// Keeps reported errors in memory. Used by tests.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    reports: Mutex<Vec<String>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Display strings of everything reported so far.
    pub fn reports(&self) -> Vec<String> {
        self.reports
            .lock()
            .map(|reports| reports.clone())
            .unwrap_or_default()
    }
}

impl ErrorReporter for RecordingReporter {
    fn report(&self, error: &(dyn Error + 'static)) {
        if let Ok(mut reports) = self.reports.lock() {
            reports.push(error.to_string());
        }
    }
}
