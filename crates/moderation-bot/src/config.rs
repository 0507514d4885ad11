//! Application configuration loaded from environment variables.

use anyhow::{Context, Result};
use secrecy::SecretString;
use serde::Deserialize;
use std::time::Duration;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Telegram Bot API configuration
    pub telegram: TelegramConfig,

    /// Webhook server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Sentry error reporting configuration
    #[serde(default)]
    pub sentry: SentryConfig,

    /// Logging configuration
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TelegramConfig {
    /// Bot token issued by BotFather
    pub bot_token: SecretString,

    /// Bot API base URL
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Request timeout
    #[serde(default = "default_timeout", with = "humantime_serde")]
    pub timeout: Duration,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Server listen address
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Path Telegram posts updates to
    #[serde(default = "default_webhook_path")]
    pub webhook_path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SentryConfig {
    /// Sentry DSN; reporting only goes to logs when unset
    #[serde(default)]
    pub dsn: Option<String>,

    /// Environment tag attached to events
    #[serde(default = "default_environment")]
    pub environment: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,
}

// Default implementations
impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            port: default_port(),
            webhook_path: default_webhook_path(),
        }
    }
}

impl Default for SentryConfig {
    fn default() -> Self {
        Self {
            dsn: None,
            environment: default_environment(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// Default value functions
fn default_api_url() -> String {
    telegram_client::DEFAULT_API_URL.into()
}

fn default_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_listen_addr() -> String {
    "0.0.0.0".into()
}

fn default_port() -> u16 {
    3000
}

fn default_webhook_path() -> String {
    "/".into()
}

fn default_environment() -> String {
    "production".into()
}

fn default_log_level() -> String {
    "info".into()
}

impl SentryConfig {
    /// DSN if one is set and non-empty.
    pub fn dsn(&self) -> Option<&str> {
        self.dsn.as_deref().filter(|dsn| !dsn.is_empty())
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        Self::from_env(config::Environment::default())
    }

    fn from_env(source: config::Environment) -> Result<Self> {
        let config = config::Config::builder()
            .add_source(
                source
                    .separator("__")
                    // Bot tokens look like "123456:ABC..."; keep them as strings.
                    .try_parsing(false),
            )
            .build()
            .context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }
}
