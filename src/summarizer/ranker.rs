//! Sentence centrality ranking
//!
//! Reads the similarity matrix as a weighted undirected graph and scores
//! every sentence with PageRank. Ranking always yields a score map: when
//! power iteration does not converge the scores fall back to uniform.

use crate::errors::{Result, SummarizeError};
use crate::graph::builder::GraphBuilder;
use crate::graph::csr::CsrGraph;
use crate::pagerank::standard::StandardPageRank;
use crate::pagerank::PageRankResult;
use crate::similarity::matrix::SimilarityMatrix;
use crate::types::{ScoreMap, SummarizerConfig};

/// Scores plus how they were obtained
#[derive(Debug, Clone)]
pub struct Ranking {
    /// One score per sentence, summing to 1
    pub scores: ScoreMap,
    /// Power iterations performed
    pub iterations: usize,
    /// Undirected edges in the sentence graph
    pub edges: usize,
    /// True when PageRank failed to converge and uniform scores were used
    pub uniform_fallback: bool,
}

/// PageRank-based centrality ranker
#[derive(Debug, Clone)]
pub struct CentralityRanker {
    pagerank: StandardPageRank,
    use_edge_weights: bool,
    similarity_threshold: f64,
}

impl Default for CentralityRanker {
    fn default() -> Self {
        Self::from_config(&SummarizerConfig::default())
    }
}

impl CentralityRanker {
    /// Create a ranker with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a ranker from a summarizer config
    pub fn from_config(config: &SummarizerConfig) -> Self {
        Self {
            pagerank: StandardPageRank::from_config(config),
            use_edge_weights: config.use_edge_weights,
            similarity_threshold: config.similarity_threshold,
        }
    }

    /// Rank sentences, failing if PageRank does not converge
    pub fn try_rank(&self, matrix: &SimilarityMatrix) -> Result<Ranking> {
        let (edges, result) = self.run(matrix);
        let result = result.into_converged()?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            nodes = matrix.size(),
            edges,
            iterations = result.iterations,
            delta = result.delta,
            "pagerank converged"
        );

        Ok(Ranking {
            scores: ScoreMap::from_scores(result.scores),
            iterations: result.iterations,
            edges,
            uniform_fallback: false,
        })
    }

    /// Rank sentences; never fails
    pub fn rank(&self, matrix: &SimilarityMatrix) -> Ranking {
        let (edges, result) = self.run(matrix);
        let iterations = result.iterations;

        match result.into_converged() {
            Ok(result) => Ranking {
                scores: ScoreMap::from_scores(result.scores),
                iterations,
                edges,
                uniform_fallback: false,
            },
            Err(err) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(error = %err, "falling back to uniform sentence scores");
                debug_assert!(matches!(err, SummarizeError::NotConverged { .. }));
                Ranking {
                    scores: ScoreMap::uniform(matrix.size()),
                    iterations,
                    edges,
                    uniform_fallback: true,
                }
            }
        }
    }

    fn run(&self, matrix: &SimilarityMatrix) -> (usize, PageRankResult) {
        let builder = GraphBuilder::from_similarity(matrix, self.similarity_threshold);
        let edges = builder.edge_count();
        let graph = CsrGraph::from_builder(&builder);

        let result = if self.use_edge_weights {
            self.pagerank.run(&graph)
        } else {
            self.pagerank.run_unweighted(&graph)
        };
        (edges, result)
    }
}

/// Centrality score per sentence with default settings
pub fn rank(matrix: &SimilarityMatrix) -> ScoreMap {
    CentralityRanker::default().rank(matrix).scores
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hub_matrix() -> SimilarityMatrix {
        // Sentence 1 overlaps with everyone, the others only with 1
        SimilarityMatrix::from_rows(vec![
            vec![1.0, 0.5, 0.0, 0.0],
            vec![0.5, 1.0, 0.5, 0.5],
            vec![0.0, 0.5, 1.0, 0.0],
            vec![0.0, 0.5, 0.0, 1.0],
        ])
        .unwrap()
    }

    #[test]
    fn test_hub_sentence_ranks_first() {
        let ranking = CentralityRanker::new().rank(&hub_matrix());

        assert!(!ranking.uniform_fallback);
        assert_eq!(ranking.edges, 3);
        assert_eq!(ranking.scores.ranked_indices()[0], 1);
    }

    #[test]
    fn test_scores_form_distribution() {
        let scores = rank(&hub_matrix());

        assert_eq!(scores.len(), 4);
        assert!((scores.total() - 1.0).abs() < 1e-9);
        assert!(scores.iter().all(|(_, s)| s >= 0.0));
    }

    #[test]
    fn test_single_sentence() {
        let scores = rank(&SimilarityMatrix::uniform(1));

        assert_eq!(scores.len(), 1);
        assert!((scores.get(0).unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_uniform_matrix_gives_uniform_scores() {
        let scores = rank(&SimilarityMatrix::uniform(5));
        for (_, s) in scores.iter() {
            assert!((s - 0.2).abs() < 1e-9);
        }
    }

    #[test]
    fn test_non_convergence_falls_back_to_uniform() {
        let config = SummarizerConfig::new()
            .with_max_iterations(1)
            .with_convergence_threshold(1e-300);
        let ranker = CentralityRanker::from_config(&config);

        assert!(matches!(
            ranker.try_rank(&hub_matrix()),
            Err(SummarizeError::NotConverged { iterations: 1, .. })
        ));

        let ranking = ranker.rank(&hub_matrix());
        assert!(ranking.uniform_fallback);
        assert_eq!(ranking.scores, ScoreMap::uniform(4));
    }

    #[test]
    fn test_threshold_prunes_weak_edges() {
        let config = SummarizerConfig::new().with_similarity_threshold(0.6);
        let ranking = CentralityRanker::from_config(&config).rank(&hub_matrix());

        assert_eq!(ranking.edges, 0);
        for (_, s) in ranking.scores.iter() {
            assert!((s - 0.25).abs() < 1e-9);
        }
    }

    #[test]
    fn test_empty_matrix() {
        let ranking = CentralityRanker::new().rank(&SimilarityMatrix::uniform(0));
        assert!(ranking.scores.is_empty());
        assert!(!ranking.uniform_fallback);
    }
}
