//! Error types for the storage contract and the HTTP layer.
//!
//! [`StorageError`] is what repositories return. [`AppError`] is what handlers
//! return; it renders as a plain-text response. Backend details never reach
//! the client: 500 responses carry a generic message and the cause is logged.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Failures reported by a [`crate::domain::repositories::ShortUrlRepository`].
#[derive(Debug, Error)]
pub enum StorageError {
    /// No record exists for the identifier.
    #[error("no short URL with id '{0}'")]
    NotFound(String),

    /// A record with the identifier already exists.
    #[error("short URL with id '{0}' already exists")]
    Duplicate(String),

    /// The backend cannot be reached.
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl StorageError {
    /// Returns true for the distinguished "no such record" outcome.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Maps an insert failure, turning a primary key violation into
/// [`StorageError::Duplicate`].
pub fn map_insert_error(e: sqlx::Error, id: &str) -> StorageError {
    if let Some(db) = e.as_database_error()
        && db.is_unique_violation()
    {
        return StorageError::Duplicate(id.to_string());
    }

    map_sqlx_error(e)
}

/// Maps a general sqlx failure. Pool shutdown and connection loss become
/// [`StorageError::Unavailable`].
pub fn map_sqlx_error(e: sqlx::Error) -> StorageError {
    match e {
        sqlx::Error::PoolClosed | sqlx::Error::PoolTimedOut => {
            StorageError::Unavailable(e.to_string())
        }
        sqlx::Error::Io(_) => StorageError::Unavailable(e.to_string()),
        other => StorageError::Database(other),
    }
}

/// Errors returned by HTTP handlers.
#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed or unacceptable request input (400).
    #[error("{message}")]
    Validation { message: String },

    /// Unknown short URL (404).
    #[error("{message}")]
    NotFound { message: String },

    /// Path exists but does not accept the request method (405).
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Backend or other server-side failure (500). `details` is logged only.
    #[error("{message}")]
    Internal { message: String, details: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>, details: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
            details: details.into(),
        }
    }

    /// HTTP status this error renders with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StorageError> for AppError {
    fn from(e: StorageError) -> Self {
        match e {
            StorageError::NotFound(_) => AppError::not_found("Short URL not found"),
            other => AppError::internal("Internal server error", other.to_string()),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        AppError::bad_request(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if let AppError::Internal { details, .. } = &self {
            tracing::error!(error = %details, "Request failed with internal error");
        }

        (status, self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_not_found_maps_to_404() {
        let err: AppError = StorageError::NotFound("deadbeef".to_string()).into();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Short URL not found");
    }

    #[test]
    fn test_backend_detail_is_not_exposed() {
        let err: AppError = StorageError::Unavailable("socket reset by peer".to_string()).into();

        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Internal server error");
        match err {
            AppError::Internal { details, .. } => assert!(details.contains("socket reset")),
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_maps_to_500() {
        let err: AppError = StorageError::Duplicate("deadbeef".to_string()).into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_pool_closed_is_unavailable() {
        let err = map_sqlx_error(sqlx::Error::PoolClosed);
        assert!(matches!(err, StorageError::Unavailable(_)));
    }

    #[test]
    fn test_row_not_found_is_database_error() {
        let err = map_sqlx_error(sqlx::Error::RowNotFound);
        assert!(matches!(err, StorageError::Database(_)));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_method_not_allowed_message() {
        let err = AppError::MethodNotAllowed;
        assert_eq!(err.status_code(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(err.to_string(), "Method not allowed");
    }
}
