//! Domain layer containing the short URL entity and the storage contract.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Storage contract implemented by the infrastructure layer
//!
//! The domain layer has no dependency on HTTP or on a concrete backend.
//! Business rules live in [`crate::application::services`].

pub mod entities;
pub mod repositories;
