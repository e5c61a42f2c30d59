#![allow(dead_code)]

use axum_test::TestServer;
use shorturl::config::{Config, StorageBackend};
use shorturl::domain::repositories::ShortUrlRepository;
use shorturl::infrastructure::persistence::{MemoryShortUrlRepository, SqliteShortUrlRepository};
use shorturl::routes::app_router;
use shorturl::state::AppState;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use std::sync::Arc;
use tempfile::TempDir;

/// Opens a private in-memory SQLite database.
///
/// Each `sqlite::memory:` connection is its own database, so the pool is
/// pinned to a single connection that never expires.
pub async fn create_test_pool() -> SqlitePool {
    SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap()
}

/// Returns an initialized SQLite repository and a handle to its pool.
pub async fn create_sqlite_repository() -> (Arc<SqliteShortUrlRepository>, SqlitePool) {
    let pool = create_test_pool().await;
    let repo = Arc::new(SqliteShortUrlRepository::new(Arc::new(pool.clone())));
    repo.initialize().await.unwrap();
    (repo, pool)
}

/// Opens a file-backed SQLite database inside `dir` through the server's own
/// connection path, with a pool of several connections.
///
/// Returns the initialized repository and a second, independent pool on the
/// same file for assertions.
pub async fn create_file_repository(dir: &TempDir) -> (Arc<dyn ShortUrlRepository>, SqlitePool) {
    let database_url = format!("sqlite://{}", dir.path().join("links.db").display());
    let config = Config {
        database_url: database_url.clone(),
        storage_backend: StorageBackend::Sqlite,
        listen_addr: "127.0.0.1:0".to_string(),
        log_level: "info".to_string(),
        log_format: "text".to_string(),
        db_max_connections: 8,
        db_connect_timeout: 30,
    };

    let repo = shorturl::server::open_repository(&config).await.unwrap();
    let pool = SqlitePool::connect(&database_url).await.unwrap();
    (repo, pool)
}

pub fn create_memory_repository() -> Arc<MemoryShortUrlRepository> {
    Arc::new(MemoryShortUrlRepository::new())
}

/// Builds the full application router over `repo`.
pub fn create_test_server(repo: Arc<dyn ShortUrlRepository>) -> TestServer {
    TestServer::new(app_router(AppState::new(repo))).unwrap()
}

pub async fn insert_record(pool: &SqlitePool, id: &str, url: &str, access_count: i64) {
    sqlx::query("INSERT INTO urls (id, original_url, access_count) VALUES (?, ?, ?)")
        .bind(id)
        .bind(url)
        .bind(access_count)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn access_count(pool: &SqlitePool, id: &str) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT access_count FROM urls WHERE id = ?")
        .bind(id)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn record_count(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM urls")
        .fetch_one(pool)
        .await
        .unwrap()
}
