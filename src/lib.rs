//! # shorturl
//!
//! A small URL shortening service built with Axum and SQLite.
//!
//! Each long URL maps to a fixed 8-character id: the first eight hex digits
//! of its SHA-1 digest. Creating the same URL twice returns the same record,
//! and every redirect bumps the record's access counter.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The short URL entity and the storage contract
//! - **Application Layer** ([`application`]) - Create and redirect protocols over the contract
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite and in-memory backends
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs, and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! export DATABASE_URL="sqlite://links.db"   # optional, this is the default
//! cargo run
//!
//! curl -X POST localhost:8080/shorten -d '{"original_url":"https://example.com"}'
//! # {"id":"327c3fda","original":"https://example.com","access_count":0}
//! curl -i localhost:8080/327c3fda
//! # HTTP/1.1 302 Found
//! # location: https://example.com
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::{AppError, StorageError};
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::ShortUrlService;
    pub use crate::domain::entities::ShortUrl;
    pub use crate::domain::repositories::ShortUrlRepository;
    pub use crate::error::{AppError, StorageError};
    pub use crate::infrastructure::persistence::{
        MemoryShortUrlRepository, SqliteShortUrlRepository,
    };
    pub use crate::state::AppState;
    pub use crate::utils::id_generator::generate_id;
}
