//! Match engine - category filtering and synonym-expanded search
//!
//! Both operations use the same containment rule: a record matches when its
//! lowercased category contains a term as a substring. Substring matching
//! is deliberate, so a term like "act" also matches "action".

use std::collections::HashSet;
use std::sync::Arc;

use rayon::prelude::*;

use super::lexicon::LexicalDatabase;
use super::synonyms::SynonymExpander;
use super::tokenizer::tokenize;
use crate::catalog::Catalog;
use crate::error::Result;
use crate::types::{Record, SearchOutcome};

/// Expanded vocabulary of one query, all lowercase
pub type TermSet = HashSet<String>;

/// Catalog size from which scans run in parallel
const PARALLEL_SCAN_THRESHOLD: usize = 1000;

/// Records whose category contains `category`, case-insensitively.
///
/// An empty `category` matches every record.
pub fn filter_by_category(catalog: &Catalog, category: &str) -> Vec<Record> {
    let needle = category.to_lowercase();
    scan(catalog, |record| record.category_lower().contains(&needle))
}

/// True if `category` contains any of the (lowercase) terms
pub fn category_matches_any(category: &str, terms: &TermSet) -> bool {
    let category_lower = category.to_lowercase();
    terms.iter().any(|term| category_lower.contains(term.as_str()))
}

/// Scan the catalog in stored order, in parallel for large catalogs
fn scan<F>(catalog: &Catalog, matches: F) -> Vec<Record>
where
    F: Fn(&Record) -> bool + Sync,
{
    let records = catalog.get_all();

    if records.len() >= PARALLEL_SCAN_THRESHOLD {
        records
            .par_iter()
            .filter(|record| matches(record))
            .cloned()
            .collect()
    } else {
        records
            .iter()
            .filter(|record| matches(record))
            .cloned()
            .collect()
    }
}

/// Synonym-expanded keyword search over catalog categories
#[derive(Clone)]
pub struct MatchEngine {
    expander: SynonymExpander,
}

impl MatchEngine {
    pub fn new(lexicon: Arc<dyn LexicalDatabase>) -> Self {
        Self {
            expander: SynonymExpander::new(lexicon),
        }
    }

    /// Tokenize `query_text` and union every token with its synonyms.
    ///
    /// Each token is always part of the set, even when the lexicon knows
    /// nothing about it. One lexicon failure fails the whole expansion.
    pub fn expand_query(&self, query_text: &str) -> Result<TermSet> {
        let mut terms = TermSet::new();
        let mut expanded: HashSet<String> = HashSet::new();

        for token in tokenize(query_text) {
            // Repeated tokens expand to the same lemmas
            if !expanded.insert(token.clone()) {
                continue;
            }
            let synonyms = self.expander.expand(&token)?;
            terms.extend(synonyms);
            terms.insert(token);
        }

        Ok(terms)
    }

    /// Search the catalog for records whose category matches any expanded term
    pub fn search(&self, catalog: &Catalog, query_text: &str) -> Result<SearchOutcome> {
        let terms = self.expand_query(query_text)?;
        if terms.is_empty() {
            tracing::debug!("Query produced no tokens");
            return Ok(SearchOutcome::empty());
        }

        let matches = scan(catalog, |record| category_matches_any(&record.category, &terms));

        tracing::debug!(
            terms = terms.len(),
            matches = matches.len(),
            "Search completed"
        );

        Ok(SearchOutcome::from_matches(matches))
    }
}
