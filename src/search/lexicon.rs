//! Lexical database capability
//!
//! The synonym expander never talks to a concrete dictionary. It goes
//! through [`LexicalDatabase`], which has three implementations here:
//! - [`ThesaurusLexicon`]: in-memory synsets, either compiled in or loaded
//!   from a JSON file
//! - [`CachedLexicon`]: memoizing wrapper around any other lexicon
//! - test stubs in the unit tests

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use super::synonyms::SYNSETS;
use crate::error::{CatalogError, Result};

/// One word sense with its surface forms
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sense {
    pub lemmas: Vec<String>,
}

/// Source of word senses.
///
/// An unknown word yields an empty list, not an error. Errors mean the
/// database itself could not be consulted. Lookups may block.
pub trait LexicalDatabase: Send + Sync {
    fn senses_of(&self, word: &str) -> Result<Vec<Sense>>;
}

/// Synset-based thesaurus held in memory
#[derive(Debug, Clone, Default)]
pub struct ThesaurusLexicon {
    senses: Vec<Sense>,

    /// lemma → indices into `senses`
    index: HashMap<String, Vec<usize>>,
}

impl ThesaurusLexicon {
    /// Build from synonym groups; each group becomes one sense
    pub fn from_synsets<I, G, S>(synsets: I) -> Self
    where
        I: IntoIterator<Item = G>,
        G: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lexicon = Self::default();

        for group in synsets {
            let mut lemmas: Vec<String> = Vec::new();
            for lemma in group {
                let lemma = lemma.as_ref().trim().to_lowercase();
                if !lemma.is_empty() && !lemmas.contains(&lemma) {
                    lemmas.push(lemma);
                }
            }
            if lemmas.is_empty() {
                continue;
            }

            let id = lexicon.senses.len();
            for lemma in &lemmas {
                lexicon.index.entry(lemma.clone()).or_default().push(id);
            }
            lexicon.senses.push(Sense { lemmas });
        }

        lexicon
    }

    /// Thesaurus compiled into the binary
    pub fn builtin() -> Self {
        Self::from_synsets(SYNSETS.iter().map(|group| group.iter()))
    }

    /// Load synsets from a JSON file.
    ///
    /// The file holds an array of synsets, each an array of lemmas:
    /// ```json
    /// [
    ///   ["comedy", "comedies", "funny"],
    ///   ["horror", "scary"]
    /// ]
    /// ```
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            CatalogError::lexicon(format!(
                "failed to read thesaurus file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let synsets: Vec<Vec<String>> = serde_json::from_str(&content).map_err(|e| {
            CatalogError::lexicon(format!(
                "failed to parse thesaurus JSON from '{}': {}",
                path.display(),
                e
            ))
        })?;

        Ok(Self::from_synsets(synsets))
    }

    pub fn sense_count(&self) -> usize {
        self.senses.len()
    }
}

impl LexicalDatabase for ThesaurusLexicon {
    fn senses_of(&self, word: &str) -> Result<Vec<Sense>> {
        let word = word.to_lowercase();

        let mut ids: Vec<usize> = Vec::new();
        for form in base_forms(&word) {
            if let Some(found) = self.index.get(&form) {
                for &id in found {
                    if !ids.contains(&id) {
                        ids.push(id);
                    }
                }
            }
        }

        Ok(ids.into_iter().map(|id| self.senses[id].clone()).collect())
    }
}

/// Candidate dictionary forms of a word: the word itself plus naive
/// plural reductions (`comedies` → `comedy`, `thrillers` → `thriller`)
fn base_forms(word: &str) -> Vec<String> {
    let mut forms = vec![word.to_string()];

    if let Some(stem) = word.strip_suffix("ies") {
        if !stem.is_empty() {
            forms.push(format!("{}y", stem));
        }
    }
    if let Some(stem) = word.strip_suffix("es") {
        if !stem.is_empty() {
            forms.push(stem.to_string());
        }
    }
    if !word.ends_with("ss") {
        if let Some(stem) = word.strip_suffix('s') {
            if !stem.is_empty() {
                forms.push(stem.to_string());
            }
        }
    }

    forms
}

/// Memoizing wrapper over another lexicon.
///
/// Successful lookups are cached per lowercase word; failures are not.
/// Once `max_entries` words are cached, new results are served but not stored.
pub struct CachedLexicon<L> {
    inner: L,
    cache: RwLock<HashMap<String, Vec<Sense>>>,
    max_entries: usize,
}

impl<L: LexicalDatabase> CachedLexicon<L> {
    /// Default upper bound on cached words
    pub const DEFAULT_MAX_ENTRIES: usize = 10_000;

    pub fn new(inner: L) -> Self {
        Self::with_max_entries(inner, Self::DEFAULT_MAX_ENTRIES)
    }

    pub fn with_max_entries(inner: L, max_entries: usize) -> Self {
        Self {
            inner,
            cache: RwLock::new(HashMap::new()),
            max_entries,
        }
    }

    /// Number of cached words
    pub fn cached_len(&self) -> usize {
        self.cache.read().len()
    }
}

impl<L: LexicalDatabase> LexicalDatabase for CachedLexicon<L> {
    fn senses_of(&self, word: &str) -> Result<Vec<Sense>> {
        let key = word.to_lowercase();

        if let Some(hit) = self.cache.read().get(&key) {
            return Ok(hit.clone());
        }

        let senses = self.inner.senses_of(&key)?;

        let mut cache = self.cache.write();
        if cache.len() < self.max_entries {
            cache.insert(key, senses.clone());
        }

        Ok(senses)
    }
}
