//! Shared application state

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::search::{LexicalDatabase, MatchEngine};

/// State shared by every request handler.
///
/// The catalog is immutable after startup, so handlers read it without locks.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub engine: MatchEngine,
}

impl AppState {
    pub fn new(catalog: Catalog, lexicon: Arc<dyn LexicalDatabase>) -> Self {
        Self {
            catalog: Arc::new(catalog),
            engine: MatchEngine::new(lexicon),
        }
    }
}
