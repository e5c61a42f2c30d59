//! Storage backends for the short URL repository.
//!
//! - [`SqliteShortUrlRepository`] - SQLite via SQLx, the reference backend
//! - [`MemoryShortUrlRepository`] - concurrent in-memory map, no persistence

pub mod memory_short_url_repository;
pub mod sqlite_short_url_repository;

pub use memory_short_url_repository::MemoryShortUrlRepository;
pub use sqlite_short_url_repository::SqliteShortUrlRepository;
