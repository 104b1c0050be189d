//! Core types: configuration and errors.
//!
//! - `CollectionConfig`: Deck-building limits (copy limit, section sizes)
//! - `Error` / `Result`: Failures at the crate's fallible edges
//! - `next_revision`: Process-wide change stamps for binders and registries

pub mod config;
pub mod error;
pub mod revision;

pub use config::CollectionConfig;
pub use error::{Error, Result};
pub use revision::next_revision;
