//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /shorten`  - Create short URL
//! - `GET  /healthz`  - Health check
//! - `GET  /{*id}`    - Short URL redirect
//!
//! Requests with a method a path does not accept get a plain-text 405;
//! unmatched paths get a plain-text 404.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging

use crate::api;
use crate::api::handlers::{method_not_allowed_handler, not_found_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .merge(api::routes::routes())
        .method_not_allowed_fallback(method_not_allowed_handler)
        .fallback(not_found_handler)
        .with_state(state)
        .layer(tracing::layer())
}
