//! Sentence similarity
//!
//! Turns sentences into TF-IDF vectors and computes the pairwise cosine
//! similarity matrix that the centrality ranker consumes.

pub mod matrix;
pub mod tfidf;
pub mod vector;

use crate::errors::SummarizeError;
use crate::nlp::stopwords::StopwordFilter;
use crate::types::Sentence;
use matrix::SimilarityMatrix;
use tfidf::TfidfVectorizer;

/// Output of the similarity stage
#[derive(Debug, Clone)]
pub struct SimilarityOutput {
    /// Pairwise similarities, one row per sentence
    pub matrix: SimilarityMatrix,
    /// Vocabulary size after stopword removal
    pub vocabulary_size: usize,
    /// True when the vocabulary was empty and the uniform fallback was used
    pub degenerate: bool,
}

/// Builds the similarity matrix for a sentence set
#[derive(Debug, Clone)]
pub struct SimilarityBuilder<'a> {
    stopwords: &'a StopwordFilter,
}

impl<'a> SimilarityBuilder<'a> {
    /// Create a builder that excludes the given stopwords from features
    pub fn new(stopwords: &'a StopwordFilter) -> Self {
        Self { stopwords }
    }

    /// Compute pairwise similarities
    ///
    /// If no sentence has a discriminating term, every pair is treated as
    /// fully similar (all entries 1.0) instead of failing.
    pub fn build(&self, sentences: &[Sentence]) -> SimilarityOutput {
        let texts: Vec<&str> = sentences.iter().map(|s| s.text.as_str()).collect();

        match TfidfVectorizer::new(self.stopwords).fit_transform(&texts) {
            Ok(model) => {
                let vocabulary_size = model.vocabulary().len();
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    sentences = texts.len(),
                    vocabulary = vocabulary_size,
                    "fitted tf-idf"
                );
                SimilarityOutput {
                    matrix: SimilarityMatrix::from_vectors(model.vectors()),
                    vocabulary_size,
                    degenerate: false,
                }
            }
            Err(err) => {
                debug_assert!(matches!(err, SummarizeError::EmptyVocabulary));
                #[cfg(feature = "tracing")]
                tracing::warn!(
                    sentences = texts.len(),
                    error = %err,
                    "no discriminating terms, using uniform similarity"
                );
                #[cfg(not(feature = "tracing"))]
                let _ = err;
                SimilarityOutput {
                    matrix: SimilarityMatrix::uniform(texts.len()),
                    vocabulary_size: 0,
                    degenerate: true,
                }
            }
        }
    }
}

/// Pairwise similarity matrix for `sentences` using the English stopword list
pub fn build_similarity(sentences: &[Sentence]) -> SimilarityMatrix {
    let stopwords = StopwordFilter::default();
    SimilarityBuilder::new(&stopwords).build(sentences).matrix
}
