//! Core types for rapid_summary
//!
//! This module defines the data that flows between pipeline stages:
//! sentences, score maps, and the summarizer configuration.

use crate::errors::{Result, SummarizeError};
use serde::{Deserialize, Serialize};

// ============================================================================
// Sentence
// ============================================================================

/// A sentence cut out of the input document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    /// Trimmed sentence text
    pub text: String,
    /// Byte offset of the sentence start in the input text
    pub start: usize,
    /// Byte offset one past the sentence end in the input text
    pub end: usize,
    /// Position in document order
    pub index: usize,
}

impl Sentence {
    /// Create a new sentence
    pub fn new(text: impl Into<String>, start: usize, end: usize, index: usize) -> Self {
        Self {
            text: text.into(),
            start,
            end,
            index,
        }
    }

    /// Length of the sentence text in bytes
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the sentence text is empty
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

// ============================================================================
// Score Map
// ============================================================================

/// Centrality score per sentence index
///
/// Scores are non-negative and sum to 1. Index `i` holds the score of
/// sentence `i`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreMap {
    scores: Vec<f64>,
}

impl ScoreMap {
    /// Wrap raw scores, renormalizing so they sum to 1
    pub fn from_scores(mut scores: Vec<f64>) -> Self {
        let sum: f64 = scores.iter().sum();
        if sum > 0.0 {
            for score in &mut scores {
                *score /= sum;
            }
        }
        Self { scores }
    }

    /// Equal score for each of `n` sentences
    pub fn uniform(n: usize) -> Self {
        if n == 0 {
            return Self::default();
        }
        Self {
            scores: vec![1.0 / n as f64; n],
        }
    }

    /// Score for a sentence index, if present
    pub fn get(&self, index: usize) -> Option<f64> {
        self.scores.get(index).copied()
    }

    /// Number of scored sentences
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Check if the map is empty
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Sum of all scores (1.0 within tolerance for a non-empty map)
    pub fn total(&self) -> f64 {
        self.scores.iter().sum()
    }

    /// Iterate over `(index, score)` pairs in index order
    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.scores.iter().copied().enumerate()
    }

    /// Raw scores in index order
    pub fn as_slice(&self) -> &[f64] {
        &self.scores
    }

    /// Indices ordered by score descending, ties broken by index ascending
    pub fn ranked_indices(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..self.scores.len()).collect();
        indices.sort_by(|&a, &b| {
            self.scores[b]
                .total_cmp(&self.scores[a])
                .then_with(|| a.cmp(&b))
        });
        indices
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for the summarization pipeline
///
/// Every field has a default, so a partial JSON document is enough:
///
/// ```json
/// { "damping": 0.9, "language": "de", "separator": " " }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizerConfig {
    /// Damping factor for PageRank (typically 0.85)
    pub damping: f64,
    /// Maximum iterations for PageRank convergence
    pub max_iterations: usize,
    /// Convergence threshold (stop when L1 delta < threshold)
    pub convergence_threshold: f64,
    /// Language code for stopwords (e.g., "en", "de", "fr")
    pub language: String,
    /// Additional stopwords (extends the built-in list)
    pub stopwords: Vec<String>,
    /// Weight graph edges by similarity; when false every edge counts 1
    pub use_edge_weights: bool,
    /// Similarities at or below this value add no edge
    pub similarity_threshold: f64,
    /// Separator placed between selected sentences
    pub separator: String,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            damping: 0.85,
            max_iterations: 100,
            convergence_threshold: 1e-6,
            language: "en".to_string(),
            stopwords: Vec::new(),
            use_edge_weights: true,
            similarity_threshold: 0.0,
            separator: "\n".to_string(),
        }
    }
}

impl SummarizerConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from JSON; omitted fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.damping) {
            return Err(SummarizeError::invalid_config(format!(
                "damping must be between 0 and 1, got {}",
                self.damping
            )));
        }

        if self.max_iterations == 0 {
            return Err(SummarizeError::invalid_config("max_iterations must be > 0"));
        }

        if self.convergence_threshold.is_nan() || self.convergence_threshold <= 0.0 {
            return Err(SummarizeError::invalid_config(
                "convergence_threshold must be > 0",
            ));
        }

        if !(0.0..1.0).contains(&self.similarity_threshold) {
            return Err(SummarizeError::invalid_config(format!(
                "similarity_threshold must be in [0, 1), got {}",
                self.similarity_threshold
            )));
        }

        Ok(())
    }

    /// Builder method: set damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Builder method: set max iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Builder method: set convergence threshold
    pub fn with_convergence_threshold(mut self, threshold: f64) -> Self {
        self.convergence_threshold = threshold;
        self
    }

    /// Builder method: set stopword language
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Builder method: add extra stopwords
    pub fn with_stopwords(mut self, words: &[&str]) -> Self {
        self.stopwords.extend(words.iter().map(|w| w.to_string()));
        self
    }

    /// Builder method: toggle similarity-weighted edges
    pub fn with_edge_weights(mut self, use_edge_weights: bool) -> Self {
        self.use_edge_weights = use_edge_weights;
        self
    }

    /// Builder method: set the edge pruning threshold
    pub fn with_similarity_threshold(mut self, threshold: f64) -> Self {
        self.similarity_threshold = threshold;
        self
    }

    /// Builder method: set the output separator
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }
}
