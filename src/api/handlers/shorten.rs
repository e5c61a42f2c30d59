//! Handler for the create-short-URL endpoint.

use axum::{Json, body::Bytes, extract::State};
use tracing::info;
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates (or returns the existing) short URL for a long URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "original_url": "https://example.com" }
/// ```
///
/// The body is parsed as JSON regardless of the `Content-Type` header.
///
/// # Response
///
/// ```json
/// { "id": "327c3fda", "original": "https://example.com", "access_count": 0 }
/// ```
///
/// Resubmitting the same URL returns the stored record with its current
/// access count.
///
/// # Errors
///
/// - **400 Bad Request**: body is not valid JSON of the expected shape (the
///   parser message is returned), or `original_url` is empty
/// - **500 Internal Server Error**: storage failure
pub async fn shorten_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ShortenResponse>, AppError> {
    let payload: ShortenRequest =
        serde_json::from_slice(&body).map_err(|e| AppError::bad_request(e.to_string()))?;
    payload.validate()?;

    let record = state
        .short_url_service
        .create_short_url(&payload.original_url)
        .await?;

    info!(original_url = %payload.original_url, id = %record.id, "Short URL created");

    Ok(Json(record.into()))
}
