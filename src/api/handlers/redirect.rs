//! Handler for short URL redirect.

use axum::{
    extract::{Path, State, rejection::PathRejection},
    http::{HeaderValue, StatusCode, Uri, header},
    response::IntoResponse,
};
use tracing::{debug, info};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short id to its original URL.
///
/// # Endpoint
///
/// `GET /{*id}`
///
/// Everything after the leading `/` is the id, including any further `/`
/// segments. A path that does not percent-decode to UTF-8 cannot name a
/// stored id and is answered like an unknown one.
///
/// # Request Flow
///
/// 1. Look up the original URL for the id
/// 2. Build the `Location` header (non-ASCII bytes percent-escaped)
/// 3. Increment the access counter (failure is logged, not returned)
/// 4. Return 302 Found
///
/// # Errors
///
/// - **404 Not Found**: no short URL with this id
/// - **500 Internal Server Error**: lookup failed, or the stored URL cannot be
///   sent as a header; the access is not counted in that case
pub async fn redirect_handler(
    path: Result<Path<String>, PathRejection>,
    uri: Uri,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = path.map_err(|e| {
        debug!(path = %uri.path(), error = %e, "Undecodable short URL path");
        AppError::not_found("Short URL not found")
    })?;

    let original_url = state.short_url_service.lookup(&id).await?;

    let location = location_header(&original_url).map_err(|e| {
        AppError::internal(
            "Internal server error",
            format!("stored URL for '{id}' is not a valid Location header: {e}"),
        )
    })?;

    state.short_url_service.record_access(&id).await;

    info!(path = %uri.path(), destination = %original_url, "Redirected");

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]))
}

/// Percent-escapes every byte outside ASCII, leaving the rest untouched.
fn escape_non_ascii(url: &str) -> String {
    let mut escaped = String::with_capacity(url.len());
    for &b in url.as_bytes() {
        if b.is_ascii() {
            escaped.push(b as char);
        } else {
            escaped.push('%');
            escaped.push_str(&hex::encode_upper([b]));
        }
    }
    escaped
}

fn location_header(url: &str) -> Result<HeaderValue, header::InvalidHeaderValue> {
    HeaderValue::from_str(&escape_non_ascii(url))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_non_ascii_keeps_ascii() {
        let url = "https://example.com/a b?q=%20&x=1#frag";
        assert_eq!(escape_non_ascii(url), url);
    }

    #[test]
    fn test_escape_non_ascii_encodes_utf8_bytes() {
        assert_eq!(
            escape_non_ascii("https://example.com/é"),
            "https://example.com/%C3%A9"
        );
    }

    #[test]
    fn test_location_header_rejects_control_characters() {
        assert!(location_header("https://example.com/\nSet-Cookie: a=b").is_err());
    }

    #[test]
    fn test_location_header_non_ascii_is_visible_ascii() {
        let value = location_header("https://пример.рф/путь").unwrap();
        assert!(value.to_str().is_ok());
        assert!(value.to_str().unwrap().starts_with("https://%D0%BF"));
    }
}
