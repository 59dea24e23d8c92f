//! # rapid_summary
//!
//! Extractive text summarization in the TextRank family.
//!
//! A document is split into sentences, each sentence becomes a TF-IDF vector,
//! pairwise cosine similarities form a weighted graph, and PageRank over that
//! graph scores every sentence. The top-scoring sentences are returned in
//! their original order.
//!
//! ```
//! let text = "Rust guarantees memory safety. The borrow checker enforces memory safety. \
//!             Tulips bloom in spring.";
//! let summary = rapid_summary::summarize(text, 1);
//! assert!(summary.contains("memory safety"));
//! ```
//!
//! ## Conventions
//!
//! - Blank input summarizes to the empty string.
//! - Input with no more sentences than requested is returned unchanged.
//! - Summaries never fail: an empty vocabulary falls back to uniform
//!   similarity, and a non-converging PageRank falls back to uniform scores.

pub mod errors;
pub mod graph;
pub mod nlp;
pub mod pagerank;
pub mod similarity;
pub mod summarizer;
pub mod types;

// Re-export commonly used types
pub use errors::{Result, SummarizeError};
pub use types::{ScoreMap, Sentence, SummarizerConfig};

// Re-export main functionality
pub use graph::{builder::GraphBuilder, csr::CsrGraph};
pub use nlp::{
    splitter::{split_sentences, SentenceSplitter},
    stopwords::StopwordFilter,
    tokenizer::WordTokenizer,
};
pub use pagerank::{standard::StandardPageRank, PageRankResult};
pub use similarity::{
    build_similarity, matrix::SimilarityMatrix, tfidf::TfidfVectorizer, vector::UnitVector,
    SimilarityBuilder,
};
pub use summarizer::{
    extractive::ExtractiveSummarizer,
    ranker::{rank, CentralityRanker, Ranking},
    selector::{select, SelectedSentence, SentenceSelector, Summary, SummaryOutcome},
};

use once_cell::sync::Lazy;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

static DEFAULT_SUMMARIZER: Lazy<ExtractiveSummarizer> = Lazy::new(ExtractiveSummarizer::default);

/// Summarize `text` to at most `sentence_count` sentences with the default
/// configuration
///
/// Selected sentences are joined with `"\n"`.
pub fn summarize(text: &str, sentence_count: usize) -> String {
    DEFAULT_SUMMARIZER.summarize(text, sentence_count)
}
