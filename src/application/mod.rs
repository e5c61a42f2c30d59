//! Application layer services implementing business logic.
//!
//! Services consume the repository trait and provide a clean API for HTTP
//! handlers and the admin tool.
//!
//! # Available Services
//!
//! - [`services::short_url_service::ShortUrlService`] - Short URL creation, resolution, and health

pub mod services;
