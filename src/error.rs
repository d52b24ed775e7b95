//! Error taxonomy for catalog operations

pub type Result<T> = std::result::Result<T, CatalogError>;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The dataset could not be read or is missing required columns.
    /// Fatal at startup.
    #[error("failed to load catalog from {origin}: {reason}")]
    Load { origin: String, reason: String },

    #[error("record not found: {id}")]
    NotFound { id: String },

    /// The lexical database failed while expanding a query word.
    #[error("lexical database unavailable: {0}")]
    LexiconUnavailable(String),

    /// An environment variable held a value that could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl CatalogError {
    pub fn load(origin: impl Into<String>, reason: impl ToString) -> Self {
        Self::Load {
            origin: origin.into(),
            reason: reason.to_string(),
        }
    }

    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    pub fn lexicon(reason: impl ToString) -> Self {
        Self::LexiconUnavailable(reason.to_string())
    }

    pub fn config(reason: impl ToString) -> Self {
        Self::Config(reason.to_string())
    }
}
