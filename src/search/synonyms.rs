//! Synonym expansion and the built-in genre thesaurus

use std::collections::HashSet;
use std::sync::Arc;

use super::lexicon::LexicalDatabase;
use crate::error::{CatalogError, Result};

/// Built-in synsets - words in the same group share a sense.
/// A word may appear in several groups (several senses).
pub const SYNSETS: &[&[&str]] = &[
    // Comedy
    &[
        "comedy", "comedies", "funny", "humor", "humour", "humorous", "comic", "comical",
        "hilarious", "amusing", "laugh",
    ],
    &["funny", "odd", "peculiar", "strange", "curious", "weird"],
    &[
        "stand-up",
        "standup",
        "stand-up comedy",
        "comedian",
        "talk show",
        "talk shows",
    ],
    // Suspense
    &[
        "horror", "scary", "frightening", "terrifying", "creepy", "spooky", "fear",
    ],
    &["thriller", "thrillers", "suspense", "suspenseful", "thrilling"],
    &["mystery", "mysteries", "whodunit", "enigma", "puzzle"],
    &[
        "crime", "criminal", "gangster", "heist", "detective", "police",
    ],
    // Action
    &["action", "action & adventure", "adventure", "fighting"],
    &["adventure", "escapade", "quest", "journey", "exploration"],
    // Romance and drama
    &["romance", "romantic", "love story", "romcom"],
    &["love", "romance", "passion", "affection"],
    &["drama", "dramas", "dramatic", "melodrama", "tearjerker"],
    // Factual
    &[
        "documentary",
        "documentaries",
        "docuseries",
        "docudrama",
        "nonfiction",
        "true story",
    ],
    &["nature", "wildlife", "animals", "science & nature"],
    &["science", "scientific", "science & nature"],
    // Speculative
    &[
        "science fiction", "sci-fi", "scifi", "futuristic", "space", "alien",
    ],
    &["fantasy", "magic", "magical", "wizard", "dragon"],
    // Audience
    &[
        "kids", "kid", "children", "child", "family", "kids' tv", "cartoon",
    ],
    &[
        "teen", "teens", "teenager", "teenage", "adolescent", "youth", "high school",
    ],
    &["anime", "animation", "animated", "cartoon", "manga"],
    // Music and sport
    &[
        "music", "musical", "musicals", "concert", "song", "songs",
    ],
    &[
        "sport", "sports", "athletic", "athletics", "football", "soccer", "basketball",
    ],
    &["reality", "reality tv", "competition", "game show"],
    // Origin and style
    &["international", "foreign", "world"],
    &["independent", "indie", "arthouse"],
    &["classic", "classics", "vintage", "retro"],
    &["cult", "cult classic", "underground"],
    &["korean", "korea", "k-drama", "kdrama"],
    &["british", "britain", "england", "english"],
    &["spanish", "spanish-language", "latin", "hispanic"],
    &["lgbtq", "gay", "lesbian", "queer", "transgender"],
    &[
        "faith", "spirituality", "spiritual", "religion", "religious",
    ],
    // Formats
    &["television", "tv", "tv shows", "series", "show", "shows"],
    &["movie", "movies", "film", "films", "picture", "cinema"],
];

/// Expands a single word into its synonyms through a lexical database
#[derive(Clone)]
pub struct SynonymExpander {
    lexicon: Arc<dyn LexicalDatabase>,
}

impl SynonymExpander {
    pub fn new(lexicon: Arc<dyn LexicalDatabase>) -> Self {
        Self { lexicon }
    }

    /// Union of every lemma of every sense of `word`, lowercased.
    ///
    /// Returns an empty set for unknown words. The word itself is only
    /// included when the lexicon lists it as a lemma.
    pub fn expand(&self, word: &str) -> Result<HashSet<String>> {
        let word = word.to_lowercase();

        let senses = self.lexicon.senses_of(&word).map_err(|e| {
            tracing::warn!(word = %word, error = %e, "Synonym lookup failed");
            match e {
                e @ CatalogError::LexiconUnavailable(_) => e,
                other => CatalogError::lexicon(other),
            }
        })?;

        Ok(senses
            .into_iter()
            .flat_map(|sense| sense.lemmas)
            .map(|lemma| lemma.to_lowercase())
            .collect())
    }
}
