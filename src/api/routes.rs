//! API route configuration.

use crate::api::handlers::{
    health_handler, method_not_allowed_handler, redirect_handler, shorten_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All public routes.
///
/// # Endpoints
///
/// - `POST /shorten`  - Create a short URL (idempotent per URL)
/// - `GET  /healthz`  - Storage connectivity check
/// - `GET  /{*id}`    - Redirect to the original URL
///
/// The static paths take precedence over the catch-all, so `GET /shorten`
/// answers 405 rather than looking up an id named `shorten`.
///
/// `get` would also serve `HEAD`; the read endpoints register an explicit
/// `HEAD` answer of 405 so a `HEAD` never reaches storage.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route(
            "/healthz",
            get(health_handler).head(method_not_allowed_handler),
        )
        .route(
            "/{*id}",
            get(redirect_handler).head(method_not_allowed_handler),
        )
}
