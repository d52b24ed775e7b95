//! Data types for the Movie Catalog service
//!
//! This module contains the core data structures shared by the catalog,
//! the search engine and the HTTP layer.

mod outcome;
mod record;

pub use outcome::SearchOutcome;
pub use record::{Record, Year};

/// Result type for process-level operations (startup, serving)
pub type ServiceResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;
