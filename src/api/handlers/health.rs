//! Handler for health check endpoint.

use axum::{Json, extract::State};

use crate::api::dto::health::HealthResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Reports whether the storage backend is reachable.
///
/// # Endpoint
///
/// `GET /healthz`
///
/// # Response Codes
///
/// - **200 OK**: `{"status": "ok"}`
/// - **500 Internal Server Error**: backend ping failed; the body is a generic
///   message and the cause is logged
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, AppError> {
    state
        .short_url_service
        .health_check()
        .await
        .map_err(|e| {
            AppError::internal(
                "Database connection failed",
                format!("health check: database ping error: {e}"),
            )
        })?;

    Ok(Json(HealthResponse::ok()))
}
