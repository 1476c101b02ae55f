//! FileGate Server: channel-gated file sharing bot
//!
//! Main entry point that wires all crates together and starts polling.

use std::sync::Arc;

use tokio::sync::watch;
use tracing_subscriber::{EnvFilter, fmt};

use filegate_bot::{UpdateRouter, build_state};
use filegate_core::config::AppConfig;
use filegate_core::error::AppError;
use filegate_core::traits::{ChatTransport, CleanupScheduler};
use filegate_telegram::{BotApiClient, UpdatePoller};
use filegate_worker::ExpiryScheduler;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from file and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let config_path =
        std::env::var("FILEGATE_CONFIG").unwrap_or_else(|_| "config/default.toml".to_string());
    let env = std::env::var("FILEGATE_ENV").unwrap_or_else(|_| "development".to_string());

    AppConfig::load_from(&config_path, &env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting FileGate v{}", env!("CARGO_PKG_VERSION"));
    let config = Arc::new(config);

    // ── Step 1: Link store ───────────────────────────────────────
    tracing::info!(
        "Opening link store (provider: {:?})...",
        config.database.provider
    );
    let store = filegate_database::open_store(&config.database).await?;
    tracing::info!("Link store ready");

    // ── Step 2: Bot API client ───────────────────────────────────
    let client = Arc::new(BotApiClient::new(&config.bot)?);
    let transport: Arc<dyn ChatTransport> = client.clone();

    // ── Step 3: Expiry scheduler ─────────────────────────────────
    let scheduler = Arc::new(ExpiryScheduler::new(Arc::clone(&transport)).await?);
    scheduler.start().await?;

    // ── Step 4: Services ─────────────────────────────────────────
    let state = build_state(
        Arc::clone(&config),
        transport,
        store,
        scheduler.clone() as Arc<dyn CleanupScheduler>,
    )
    .await?;
    tracing::info!(
        admin = config.admin.user_id,
        cleanup_minutes = config.cleanup.delay_minutes,
        "Services initialized"
    );

    // ── Step 5: Shutdown channel ─────────────────────────────────
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        shutdown_signal().await;
        tracing::info!("Shutdown signal received, starting graceful shutdown...");
        let _ = shutdown_tx.send(true);
    });

    // ── Step 6: Poll updates until shutdown ──────────────────────
    tracing::info!("@{} is listening for updates", state.bot.username);
    let poller = UpdatePoller::new(client, &config.bot);
    poller
        .run(Arc::new(UpdateRouter::new(state)), shutdown_rx)
        .await;

    // ── Step 7: Stop background jobs ─────────────────────────────
    if let Err(e) = scheduler.shutdown().await {
        tracing::warn!("Scheduler shutdown failed: {}", e);
    }

    tracing::info!("FileGate shut down gracefully");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
