//! Moderation bot - Main entry point.

use anyhow::Context;
use moderation_bot::{
    api::{create_router, AppState},
    AppResult, Config, ErrorReporter, LogReporter, Moderator, SentryReporter,
};
use secrecy::ExposeSecret;
use std::net::SocketAddr;
use std::sync::Arc;
use telegram_client::TelegramClient;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> AppResult<()> {
    // Load configuration
    let config = Config::load().context("Failed to load configuration")?;

    // Initialize logging
    init_logging(&config.log.level);

    // Flushes pending events when dropped at the end of main
    let sentry_guard = config.sentry.dsn().map(|dsn| {
        sentry::init((
            dsn,
            sentry::ClientOptions {
                release: sentry::release_name!(),
                environment: Some(config.sentry.environment.clone().into()),
                ..Default::default()
            },
        ))
    });

    let reporter: Arc<dyn ErrorReporter> = if sentry_guard.is_some() {
        info!("Sentry reporting enabled");
        Arc::new(SentryReporter)
    } else {
        warn!("No Sentry DSN configured - errors are only logged");
        Arc::new(LogReporter)
    };

    info!("Starting moderation bot...");

    let telegram = TelegramClient::new(
        &config.telegram.api_url,
        config.telegram.bot_token.expose_secret(),
        config.telegram.timeout,
    )
    .context("Failed to create Telegram client")?;

    match telegram.get_me().await {
        Ok(me) => info!(
            "Telegram API healthy - bot @{}",
            me.username.as_deref().unwrap_or(&me.first_name)
        ),
        Err(e) => warn!("Telegram getMe failed - will retry on requests: {}", e),
    }

    let moderator = Moderator::new(Arc::new(telegram), reporter.clone());
    let app = create_router(AppState::new(moderator, reporter), &config.server.webhook_path);

    let addr = SocketAddr::new(
        config
            .server
            .listen_addr
            .parse()
            .unwrap_or([0, 0, 0, 0].into()),
        config.server.port,
    );

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    info!("Listening for updates on {}{}", addr, config.server.webhook_path);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Shutting down...");
    Ok(())
}

async fn shutdown_signal() {
    if signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
