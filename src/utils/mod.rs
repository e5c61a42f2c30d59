//! Utility functions.
//!
//! - [`id_generator`] - Deterministic short id derivation

pub mod id_generator;
