//! Query tokenizer
//!
//! Splits free text on Unicode word boundaries (UAX #29) after lowercasing.
//! Whitespace and punctuation are separators and never produce tokens.
//! An apostrophe between letters keeps a contraction together (`don't`),
//! while a hyphen always splits (`sci-fi` → `sci`, `fi`).

use unicode_segmentation::UnicodeSegmentation;

/// Tokenize text into lowercase word tokens, preserving order and duplicates
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .unicode_words()
        .map(str::to_string)
        .collect()
}
