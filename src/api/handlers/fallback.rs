//! Fallback handlers for unmatched methods and paths.

use crate::error::AppError;

/// Responds 405 when the path exists but the method is not routed.
pub async fn method_not_allowed_handler() -> AppError {
    AppError::MethodNotAllowed
}

/// Responds 404 for paths no route matches (only `/` in practice).
pub async fn not_found_handler() -> AppError {
    AppError::not_found("Short URL not found")
}
