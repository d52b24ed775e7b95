//! Movie Catalog Query Service
//!
//! A read-only movie catalog served over HTTP. The catalog is loaded once
//! from a CSV dataset and answers three kinds of queries: lookup by id,
//! category substring filtering, and free-text search where every query
//! word is expanded into its synonyms before matching categories.
//!
//! # Modules
//!
//! - `types`: Core data structures (Record, SearchOutcome)
//! - `error`: Error taxonomy (load failures, missing records, lexicon outages)
//! - `catalog`: Immutable record store and dataset sources
//! - `search`: Tokenizer, lexical databases, synonym expansion, match engine
//! - `config`: Environment-driven service configuration
//! - `api`: Axum router and REST handlers
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use movie_catalog::{Catalog, CsvDatasetSource, MatchEngine, ThesaurusLexicon};
//!
//! let catalog = Catalog::load(&CsvDatasetSource::new("Dataset/netflix_titles.csv")).unwrap();
//! let engine = MatchEngine::new(Arc::new(ThesaurusLexicon::builtin()));
//! let outcome = engine.search(&catalog, "something funny").unwrap();
//! println!("{} matches", outcome.matches.len());
//! ```

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod search;
pub mod types;

// Re-export commonly used items at crate root
pub use catalog::{Catalog, CsvDatasetSource, DatasetSource};
pub use config::ServiceConfig;
pub use error::{CatalogError, Result};
pub use search::{
    filter_by_category, tokenize, CachedLexicon, LexicalDatabase, MatchEngine, Sense,
    SynonymExpander, TermSet, ThesaurusLexicon,
};
pub use types::{Record, SearchOutcome, ServiceResult, Year};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
