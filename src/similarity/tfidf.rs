//! TF-IDF vectorization over a sentence set
//!
//! Each sentence is one document for IDF purposes. Weights are raw term
//! counts times the smoothed IDF `ln((1 + n) / (1 + df)) + 1`, and each
//! sentence vector is L2-normalized.

use super::vector::UnitVector;
use crate::errors::{Result, SummarizeError};
use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::WordTokenizer;
use rustc_hash::{FxHashMap, FxHashSet};

/// A fitted TF-IDF model with one vector per input document
#[derive(Debug, Clone)]
pub struct TfidfModel {
    /// Terms in ascending order; a term's id is its position
    vocabulary: Vec<String>,
    /// IDF weight per term id
    idf: Vec<f64>,
    /// One normalized vector per document, in input order
    vectors: Vec<UnitVector>,
}

impl TfidfModel {
    /// The sorted vocabulary
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    /// Term id for a term, if it is in the vocabulary
    pub fn term_id(&self, term: &str) -> Option<u32> {
        self.vocabulary
            .binary_search_by(|t| t.as_str().cmp(term))
            .ok()
            .map(|i| i as u32)
    }

    /// IDF weight of a term, if it is in the vocabulary
    pub fn idf(&self, term: &str) -> Option<f64> {
        self.term_id(term).map(|id| self.idf[id as usize])
    }

    /// Document vectors in input order
    pub fn vectors(&self) -> &[UnitVector] {
        &self.vectors
    }

    /// Consume the model, keeping only the document vectors
    pub fn into_vectors(self) -> Vec<UnitVector> {
        self.vectors
    }
}

/// Fits TF-IDF weights over a small corpus of sentences
#[derive(Debug, Clone)]
pub struct TfidfVectorizer<'a> {
    stopwords: &'a StopwordFilter,
    tokenizer: WordTokenizer,
}

impl<'a> TfidfVectorizer<'a> {
    /// Create a vectorizer that excludes the given stopwords
    pub fn new(stopwords: &'a StopwordFilter) -> Self {
        Self {
            stopwords,
            tokenizer: WordTokenizer::new(),
        }
    }

    /// Fit the vocabulary and IDF on `documents` and vectorize them
    ///
    /// Fails with [`SummarizeError::EmptyVocabulary`] when no document has a
    /// single non-stopword term.
    pub fn fit_transform<S: AsRef<str>>(&self, documents: &[S]) -> Result<TfidfModel> {
        let tokenized: Vec<Vec<String>> = documents
            .iter()
            .map(|d| self.tokenizer.terms(d.as_ref(), self.stopwords))
            .collect();

        let mut vocabulary: Vec<String> = tokenized
            .iter()
            .flatten()
            .map(String::as_str)
            .collect::<FxHashSet<&str>>()
            .into_iter()
            .map(str::to_string)
            .collect();
        if vocabulary.is_empty() {
            return Err(SummarizeError::EmptyVocabulary);
        }
        vocabulary.sort_unstable();

        let term_ids: FxHashMap<&str, u32> = vocabulary
            .iter()
            .enumerate()
            .map(|(i, t)| (t.as_str(), i as u32))
            .collect();

        // Term counts per document, keyed by term id
        let counts: Vec<FxHashMap<u32, f64>> = tokenized
            .iter()
            .map(|terms| {
                let mut tf = FxHashMap::default();
                for term in terms {
                    if let Some(&id) = term_ids.get(term.as_str()) {
                        *tf.entry(id).or_insert(0.0) += 1.0;
                    }
                }
                tf
            })
            .collect();

        let mut doc_freq = vec![0usize; vocabulary.len()];
        for tf in &counts {
            for &id in tf.keys() {
                doc_freq[id as usize] += 1;
            }
        }

        let n = documents.len() as f64;
        let idf: Vec<f64> = doc_freq
            .iter()
            .map(|&df| ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        let vectors = counts
            .into_iter()
            .map(|tf| {
                let dims = tf
                    .into_iter()
                    .map(|(id, count)| (id, count * idf[id as usize]))
                    .collect();
                UnitVector::from_dimensions(dims)
            })
            .collect();

        Ok(TfidfModel {
            vocabulary,
            idf,
            vectors,
        })
    }
}
