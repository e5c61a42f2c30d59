//! DTOs for the create-short-URL endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::ShortUrl;

/// Request to shorten a single URL.
///
/// The URL is taken as-is: no format check and no normalization.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    #[validate(length(min = 1, message = "original_url must not be empty"))]
    pub original_url: String,
}

/// The stored (or just created) short URL record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortenResponse {
    pub id: String,
    pub original: String,
    pub access_count: i64,
}

impl From<ShortUrl> for ShortenResponse {
    fn from(record: ShortUrl) -> Self {
        Self {
            id: record.id,
            original: record.original_url,
            access_count: record.access_count,
        }
    }
}
