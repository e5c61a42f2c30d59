//! Core domain entities.
//!
//! The service stores a single entity, [`ShortUrl`], keyed by its derived
//! identifier. Entities are plain data without storage concerns.

pub mod short_url;

pub use short_url::ShortUrl;
