//! Summarization components
//!
//! Provides extractive summarization: PageRank centrality over the
//! sentence-similarity graph, then top-N selection in document order.

pub mod extractive;
pub mod ranker;
pub mod selector;
