//! PageRank algorithms
//!
//! This module provides the power-iteration PageRank used to score
//! sentences by centrality.

pub mod standard;

use crate::errors::{Result, SummarizeError};

/// Result of a PageRank computation
#[derive(Debug, Clone)]
pub struct PageRankResult {
    /// Scores for each node (indexed by node ID)
    pub scores: Vec<f64>,
    /// Number of iterations performed
    pub iterations: usize,
    /// Final convergence delta
    pub delta: f64,
    /// Whether the algorithm converged
    pub converged: bool,
}

impl PageRankResult {
    /// Create a new PageRank result
    pub fn new(scores: Vec<f64>, iterations: usize, delta: f64, converged: bool) -> Self {
        Self {
            scores,
            iterations,
            delta,
            converged,
        }
    }

    /// Turn a non-converged (or non-finite) result into an error
    pub fn into_converged(self) -> Result<Self> {
        if self.converged && self.scores.iter().all(|s| s.is_finite()) {
            Ok(self)
        } else {
            Err(SummarizeError::NotConverged {
                iterations: self.iterations,
                delta: self.delta,
            })
        }
    }

    /// Get top N nodes by score, ties broken by lower node ID
    pub fn top_n(&self, n: usize) -> Vec<(u32, f64)> {
        let mut indexed: Vec<_> = self
            .scores
            .iter()
            .enumerate()
            .map(|(i, &s)| (i as u32, s))
            .collect();
        indexed.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        indexed.truncate(n);
        indexed
    }

    /// Get the score for a specific node
    pub fn score(&self, node: u32) -> f64 {
        self.scores.get(node as usize).copied().unwrap_or(0.0)
    }
}
