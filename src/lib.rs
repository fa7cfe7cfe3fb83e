pub mod catalog;
mod config;
pub mod db;
mod errors;
pub mod models;
pub mod presentation;
pub mod render;
mod server;
pub mod table;
pub mod views;

pub use crate::config::Config;
pub use crate::db::{ConnectionStrategy, Database};
pub use crate::errors::{AppError, AppResult};
pub use crate::render::Renderer;
pub use crate::server::{build_router, AppState};

use anyhow::Context;
use clap::Parser;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;

static LOG_GUARD: std::sync::OnceLock<WorkerGuard> = std::sync::OnceLock::new();

pub fn run() -> anyhow::Result<()> {
    let config = Config::parse();
    init_tracing(config.log_dir.as_deref()).map_err(anyhow::Error::msg)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to build tokio runtime")?;
    runtime.block_on(serve(config))
}

pub async fn serve(config: Config) -> anyhow::Result<()> {
    let db = Database::new(&config.db_path, config.connection_strategy())
        .with_context(|| format!("failed to open store at {}", config.db_path.display()))?;
    match db.missing_tables() {
        Ok(missing) if missing.is_empty() => {}
        Ok(missing) => tracing::warn!(?missing, path = %db.path().display(), "store is missing expected tables"),
        Err(error) => tracing::warn!(error = %error, path = %db.path().display(), "store schema check failed"),
    }

    let state = AppState::new(db, Renderer::new(config.title.clone()));
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;
    tracing::info!(
        addr = %config.bind,
        db_path = %config.db_path.display(),
        strategy = ?config.connection_strategy(),
        "dashboard listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %error, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}

fn init_tracing(log_dir: Option<&Path>) -> Result<(), String> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let Some(log_dir) = log_dir else {
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|error| error.to_string());
    };

    std::fs::create_dir_all(log_dir).map_err(|error| error.to_string())?;
    let file_appender = tracing_appender::rolling::daily(log_dir, "dashboard.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    let _ = LOG_GUARD.set(guard);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_writer(non_blocking)
        .try_init()
        .map_err(|error| error.to_string())
}
