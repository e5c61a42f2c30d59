//! SQLite implementation of the short URL repository.

use async_trait::async_trait;
use sqlx::{Connection, SqlitePool};
use std::sync::Arc;
use tracing::info;

use crate::domain::entities::ShortUrl;
use crate::domain::repositories::ShortUrlRepository;
use crate::error::{StorageError, map_insert_error, map_sqlx_error};

const CREATE_TABLE_SQL: &str = r#"
    CREATE TABLE IF NOT EXISTS urls (
        id TEXT PRIMARY KEY,
        original_url TEXT NOT NULL,
        access_count INTEGER NOT NULL DEFAULT 0
    )
"#;

/// SQLite repository for short URL records.
///
/// All statements are parameterized. The pool is shared by every request;
/// SQLite serializes the writes.
pub struct SqliteShortUrlRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteShortUrlRepository {
    /// Creates a new repository over a connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShortUrlRepository for SqliteShortUrlRepository {
    async fn initialize(&self) -> Result<(), StorageError> {
        info!("Initializing database");

        sqlx::query(CREATE_TABLE_SQL)
            .execute(self.pool.as_ref())
            .await
            .map_err(map_sqlx_error)?;

        info!("Database initialized");
        Ok(())
    }

    async fn create(&self, id: &str, original_url: &str) -> Result<(), StorageError> {
        sqlx::query("INSERT INTO urls (id, original_url) VALUES (?, ?)")
            .bind(id)
            .bind(original_url)
            .execute(self.pool.as_ref())
            .await
            .map_err(|e| map_insert_error(e, id))?;

        Ok(())
    }

    async fn create_or_get(
        &self,
        id: &str,
        original_url: &str,
    ) -> Result<(ShortUrl, bool), StorageError> {
        let result = sqlx::query(
            "INSERT INTO urls (id, original_url) VALUES (?, ?) ON CONFLICT(id) DO NOTHING",
        )
        .bind(id)
        .bind(original_url)
        .execute(self.pool.as_ref())
        .await
        .map_err(|e| map_insert_error(e, id))?;

        let record = self.get(id).await?;
        Ok((record, result.rows_affected() == 1))
    }

    async fn get_original_url(&self, id: &str) -> Result<String, StorageError> {
        sqlx::query_scalar::<_, String>("SELECT original_url FROM urls WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await
            .map_err(map_sqlx_error)?
            .ok_or_else(|| StorageError::NotFound(id.to_string()))
    }

    async fn increment_access_count(&self, id: &str) -> Result<(), StorageError> {
        let result = sqlx::query("UPDATE urls SET access_count = access_count + 1 WHERE id = ?")
            .bind(id)
            .execute(self.pool.as_ref())
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound(id.to_string()));
        }

        Ok(())
    }

    async fn get(&self, id: &str) -> Result<ShortUrl, StorageError> {
        sqlx::query_as::<_, ShortUrl>(
            "SELECT id, original_url, access_count FROM urls WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?
        .ok_or_else(|| StorageError::NotFound(id.to_string()))
    }

    async fn ping(&self) -> Result<(), StorageError> {
        let mut conn = self.pool.acquire().await.map_err(map_sqlx_error)?;
        conn.ping().await.map_err(map_sqlx_error)
    }
}
