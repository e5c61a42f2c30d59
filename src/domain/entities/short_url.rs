//! Short URL entity: one shortened mapping and its access counter.

/// A stored short URL record.
///
/// `id` is derived from `original_url` and never changes. `original_url` is
/// immutable after creation; only `access_count` moves, and only upward.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct ShortUrl {
    pub id: String,
    pub original_url: String,
    pub access_count: i64,
}

impl ShortUrl {
    /// Creates a record view with the given counter value.
    pub fn new(id: impl Into<String>, original_url: impl Into<String>, access_count: i64) -> Self {
        Self {
            id: id.into(),
            original_url: original_url.into(),
            access_count,
        }
    }

    /// Creates the view of a freshly inserted record (counter at zero).
    pub fn fresh(id: impl Into<String>, original_url: impl Into<String>) -> Self {
        Self::new(id, original_url, 0)
    }
}
