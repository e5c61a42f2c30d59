//! In-memory implementation of the short URL repository.

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::domain::entities::ShortUrl;
use crate::domain::repositories::ShortUrlRepository;
use crate::error::StorageError;

#[derive(Debug, Clone)]
struct Row {
    original_url: String,
    access_count: i64,
}

/// In-memory repository backed by a sharded concurrent map.
///
/// Nothing survives a restart. [`Self::close`] makes every subsequent call fail
/// with [`StorageError::Unavailable`], which is how tests simulate a lost
/// backend.
#[derive(Debug, Default)]
pub struct MemoryShortUrlRepository {
    rows: DashMap<String, Row>,
    closed: AtomicBool,
}

impl MemoryShortUrlRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the backend as unreachable.
    pub fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn ensure_open(&self) -> Result<(), StorageError> {
        if self.closed.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable(
                "in-memory store is closed".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl ShortUrlRepository for MemoryShortUrlRepository {
    async fn initialize(&self) -> Result<(), StorageError> {
        self.ensure_open()
    }

    async fn create(&self, id: &str, original_url: &str) -> Result<(), StorageError> {
        self.ensure_open()?;

        match self.rows.entry(id.to_string()) {
            Entry::Occupied(_) => Err(StorageError::Duplicate(id.to_string())),
            Entry::Vacant(slot) => {
                slot.insert(Row {
                    original_url: original_url.to_string(),
                    access_count: 0,
                });
                Ok(())
            }
        }
    }

    async fn create_or_get(
        &self,
        id: &str,
        original_url: &str,
    ) -> Result<(ShortUrl, bool), StorageError> {
        self.ensure_open()?;

        // The entry guard holds the shard lock, so check and insert are one step.
        let (row, inserted) = match self.rows.entry(id.to_string()) {
            Entry::Occupied(existing) => (existing.get().clone(), false),
            Entry::Vacant(slot) => {
                let row = Row {
                    original_url: original_url.to_string(),
                    access_count: 0,
                };
                slot.insert(row.clone());
                (row, true)
            }
        };

        Ok((ShortUrl::new(id, row.original_url, row.access_count), inserted))
    }

    async fn get_original_url(&self, id: &str) -> Result<String, StorageError> {
        self.ensure_open()?;

        self.rows
            .get(id)
            .map(|row| row.original_url.clone())
            .ok_or_else(|| StorageError::NotFound(id.to_string()))
    }

    async fn increment_access_count(&self, id: &str) -> Result<(), StorageError> {
        self.ensure_open()?;

        let mut row = self
            .rows
            .get_mut(id)
            .ok_or_else(|| StorageError::NotFound(id.to_string()))?;
        row.access_count += 1;
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<ShortUrl, StorageError> {
        self.ensure_open()?;

        self.rows
            .get(id)
            .map(|row| ShortUrl::new(id, row.original_url.clone(), row.access_count))
            .ok_or_else(|| StorageError::NotFound(id.to_string()))
    }

    async fn ping(&self) -> Result<(), StorageError> {
        self.ensure_open()
    }
}
