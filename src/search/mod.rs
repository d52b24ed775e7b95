//! Synonym-expanded search over catalog categories
//!
//! This module provides:
//! - A Unicode word tokenizer for free-text queries
//! - A pluggable lexical database with built-in, JSON and cached variants
//! - Synonym expansion of single words
//! - The match engine: plain category filtering and expanded search

mod engine;
mod lexicon;
mod synonyms;
mod tokenizer;

pub use engine::{category_matches_any, filter_by_category, MatchEngine, TermSet};
pub use lexicon::{CachedLexicon, LexicalDatabase, Sense, ThesaurusLexicon};
pub use synonyms::{SynonymExpander, SYNSETS};
pub use tokenizer::tokenize;
