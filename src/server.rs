//! HTTP server initialization and runtime setup.
//!
//! Opens the configured storage backend, initializes its schema, and runs the
//! Axum server until a shutdown signal arrives.

use crate::config::{Config, StorageBackend};
use crate::domain::repositories::ShortUrlRepository;
use crate::infrastructure::persistence::{MemoryShortUrlRepository, SqliteShortUrlRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

/// Connects to the storage backend selected by `config` without touching the
/// schema.
///
/// For SQLite the database file is created if missing.
///
/// # Errors
///
/// Returns an error if the database URL is invalid or the pool cannot connect.
pub async fn connect_repository(config: &Config) -> Result<Arc<dyn ShortUrlRepository>> {
    let repository: Arc<dyn ShortUrlRepository> = match config.storage_backend {
        StorageBackend::Sqlite => {
            let options = SqliteConnectOptions::from_str(&config.database_url)
                .with_context(|| format!("Invalid DATABASE_URL '{}'", config.database_url))?
                .create_if_missing(true);

            let pool = SqlitePoolOptions::new()
                .max_connections(config.db_max_connections)
                .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
                .connect_with(options)
                .await
                .with_context(|| format!("Failed to open database '{}'", config.database_url))?;
            tracing::info!("Connected to database");

            Arc::new(SqliteShortUrlRepository::new(Arc::new(pool)))
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; records are lost on shutdown");
            Arc::new(MemoryShortUrlRepository::new())
        }
    };

    Ok(repository)
}

/// Connects to the storage backend and initializes its schema.
///
/// Initialization is idempotent, so this is safe against an existing database.
///
/// # Errors
///
/// Returns an error if the backend cannot be reached or the schema cannot be
/// created.
pub async fn open_repository(config: &Config) -> Result<Arc<dyn ShortUrlRepository>> {
    let repository = connect_repository(config).await?;

    repository
        .initialize()
        .await
        .context("Failed to initialize storage")?;

    Ok(repository)
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - Storage initialization fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let repository = open_repository(&config).await?;

    let state = AppState::new(repository);
    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid LISTEN address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl+C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
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

    tracing::info!("Shutdown signal received");
}
