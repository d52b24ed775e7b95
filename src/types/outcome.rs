//! Search outcome type

use serde::Serialize;

use super::Record;

/// Result of a synonym-expanded search.
///
/// `matches` follows catalog scan order. No message text lives here; turning
/// `has_results` into prose is the HTTP layer's job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchOutcome {
    pub has_results: bool,
    pub matches: Vec<Record>,
}

impl SearchOutcome {
    pub fn from_matches(matches: Vec<Record>) -> Self {
        Self {
            has_results: !matches.is_empty(),
            matches,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }
}
