//! Word tokenization for TF-IDF features
//!
//! Text is lowercased and cut into runs of two or more Unicode word
//! characters. Single-character tokens never become features.

use super::stopwords::StopwordFilter;
use once_cell::sync::Lazy;
use regex::Regex;

static WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\w\w+\b").expect("word pattern is valid"));

/// Lowercasing word tokenizer with stopword removal
#[derive(Debug, Clone, Copy, Default)]
pub struct WordTokenizer;

impl WordTokenizer {
    /// Create a new tokenizer
    pub fn new() -> Self {
        Self
    }

    /// All lowercase word tokens in `text`, in order
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        WORD.find_iter(&lowered)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    /// Word tokens in `text` that are not stopwords
    pub fn terms(&self, text: &str, stopwords: &StopwordFilter) -> Vec<String> {
        let mut tokens = self.tokenize(text);
        tokens.retain(|t| !stopwords.is_stopword(t));
        tokens
    }
}
