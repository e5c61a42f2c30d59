//! Storage contract for short URL records.

use crate::domain::entities::ShortUrl;
use crate::error::StorageError;
use async_trait::async_trait;

/// Persistent operations over short URL records keyed by identifier.
///
/// Any backend that satisfies these operations can serve the HTTP layer.
/// Serialization of conflicting writes is the backend's responsibility; callers
/// hold no locks.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteShortUrlRepository`] - SQLite (reference backend)
/// - [`crate::infrastructure::persistence::MemoryShortUrlRepository`] - in-memory map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortUrlRepository: Send + Sync {
    /// Prepares the backing table. Safe to call on an initialized store.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`] or [`StorageError::Database`] if the
    /// backend is unreachable or schema creation fails.
    async fn initialize(&self) -> Result<(), StorageError>;

    /// Inserts a new record with an access count of zero.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Duplicate`] if `id` already exists.
    async fn create(&self, id: &str, original_url: &str) -> Result<(), StorageError>;

    /// Inserts a new record unless `id` exists, then returns the stored record.
    ///
    /// The boolean is `true` when this call performed the insert. Concurrent
    /// callers with the same `id` all succeed and observe the same record.
    async fn create_or_get(
        &self,
        id: &str,
        original_url: &str,
    ) -> Result<(ShortUrl, bool), StorageError>;

    /// Looks up the original URL for `id`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NotFound`] when no record exists.
    async fn get_original_url(&self, id: &str) -> Result<String, StorageError>;

    /// Adds one to the access counter of `id`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NotFound`] when no record exists.
    async fn increment_access_count(&self, id: &str) -> Result<(), StorageError>;

    /// Returns the full record for `id`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NotFound`] when no record exists.
    async fn get(&self, id: &str) -> Result<ShortUrl, StorageError>;

    /// Lightweight liveness probe.
    async fn ping(&self) -> Result<(), StorageError>;
}
