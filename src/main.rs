//! Taskboard Server
//!
//! Main entry point that wires all crates together and starts the server.

use anyhow::Context;
use tracing_subscriber::{EnvFilter, fmt};

use taskboard_api::{AppState, StoreSet, build_app};
use taskboard_core::config::AppConfig;
use taskboard_database::DatabasePool;
use taskboard_database::migration::run_migrations;

#[tokio::main]
async fn main() {
    let env = std::env::var("TASKBOARD_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);
    tracing::info!(env = %env, "Configuration loaded");

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e:#}");
        std::process::exit(1);
    }
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
async fn run(config: AppConfig) -> anyhow::Result<()> {
    tracing::info!("Starting Taskboard v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    let db = DatabasePool::connect(&config.database)
        .await
        .context("database connection failed")?;

    if config.database.run_migrations {
        run_migrations(db.pool())
            .await
            .context("migration failed")?;
    }

    // ── Step 2: Services ─────────────────────────────────────────
    let addr = config.server.bind_address();
    let state = AppState::new(config, StoreSet::postgres(&db), Some(db.clone()))
        .context("failed to build application state")?;

    // ── Step 3: Maintenance ──────────────────────────────────────
    match state.auth_service.purge_expired_refresh_tokens().await {
        Ok(purged) => tracing::info!(purged, "Expired refresh tokens removed"),
        Err(e) => tracing::warn!("Failed to purge expired refresh tokens: {e}"),
    }

    // ── Step 4: Serve ────────────────────────────────────────────
    let app = build_app(state);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("Taskboard server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("Closing database connections...");
    db.close().await;
    tracing::info!("Taskboard server stopped");
    Ok(())
}

/// Resolves on Ctrl-C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
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
                tracing::error!("Failed to install SIGTERM handler: {e}");
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

    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}
