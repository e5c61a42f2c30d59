//! Short URL creation, resolution, and backend health.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::entities::ShortUrl;
use crate::domain::repositories::ShortUrlRepository;
use crate::error::{AppError, StorageError};
use crate::utils::id_generator::generate_id;

/// Service implementing the create and redirect protocols over a
/// [`ShortUrlRepository`].
///
/// Every call goes to the repository; nothing is cached in-process.
pub struct ShortUrlService {
    repository: Arc<dyn ShortUrlRepository>,
}

impl ShortUrlService {
    /// Creates a new service over an already initialized repository.
    pub fn new(repository: Arc<dyn ShortUrlRepository>) -> Self {
        Self { repository }
    }

    /// Creates the short URL for `original_url`, or returns the existing one.
    ///
    /// # Idempotency
    ///
    /// The id is derived from the URL, so resubmitting a URL finds the stored
    /// record and returns it with its current access count. A different URL
    /// that collides on the id also gets the stored record back.
    ///
    /// When the first lookup misses, the record is inserted with an atomic
    /// insert-if-absent. If a concurrent request inserted it in between, that
    /// record is returned instead of failing.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage failures.
    pub async fn create_short_url(&self, original_url: &str) -> Result<ShortUrl, AppError> {
        let id = generate_id(original_url);

        match self.repository.get(&id).await {
            Ok(existing) => return Ok(existing),
            Err(StorageError::NotFound(_)) => {}
            Err(e) => return Err(e.into()),
        }

        let (stored, inserted) = self.repository.create_or_get(&id, original_url).await?;

        if inserted {
            Ok(ShortUrl::fresh(id, original_url))
        } else {
            debug!(id = %id, "Short URL inserted concurrently, returning stored record");
            Ok(stored)
        }
    }

    /// Looks up the original URL for `id` without counting an access.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if `id` is unknown, or
    /// [`AppError::Internal`] if the lookup fails.
    pub async fn lookup(&self, id: &str) -> Result<String, AppError> {
        Ok(self.repository.get_original_url(id).await?)
    }

    /// Counts one access to `id`.
    ///
    /// Best-effort: a failed increment is logged and otherwise ignored, so a
    /// redirect never fails because of its counter.
    pub async fn record_access(&self, id: &str) {
        if let Err(e) = self.repository.increment_access_count(id).await {
            warn!(id = %id, error = %e, "Failed to update access count");
        }
    }

    /// Returns the full record for `id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if `id` is unknown.
    pub async fn get_short_url(&self, id: &str) -> Result<ShortUrl, AppError> {
        Ok(self.repository.get(id).await?)
    }

    /// Probes backend connectivity.
    pub async fn health_check(&self) -> Result<(), StorageError> {
        self.repository.ping().await
    }
}
