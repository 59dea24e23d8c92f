//! Top-N sentence selection for summarization
//!
//! Picks the highest-scoring sentences and restores document order so the
//! summary reads in the same sequence as the source.

use crate::summarizer::ranker::Ranking;
use crate::types::{ScoreMap, Sentence};
use serde::Serialize;

/// How a summary was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryOutcome {
    /// Input had no sentences; the summary is empty
    Empty,
    /// Input had no more sentences than requested; returned verbatim
    ShortCircuit,
    /// Sentences were scored and the top ones selected
    Ranked,
}

/// A selected sentence with its score
#[derive(Debug, Clone, Serialize)]
pub struct SelectedSentence {
    /// The sentence
    pub sentence: Sentence,
    /// Centrality score; absent when no ranking ran
    pub score: Option<f64>,
}

/// Diagnostics from the ranking stages
#[derive(Debug, Clone, Serialize)]
pub struct RankDiagnostics {
    /// Sentences that were ranked
    pub sentence_count: usize,
    /// TF-IDF vocabulary size
    pub vocabulary_size: usize,
    /// Undirected edges in the sentence graph
    pub edges: usize,
    /// PageRank iterations
    pub iterations: usize,
    /// No discriminating vocabulary; uniform similarity was used
    pub degenerate_vocabulary: bool,
    /// PageRank did not converge; uniform scores were used
    pub uniform_fallback: bool,
}

impl RankDiagnostics {
    /// Combine similarity-stage facts with a ranking
    pub fn new(
        sentence_count: usize,
        vocabulary_size: usize,
        degenerate_vocabulary: bool,
        ranking: &Ranking,
    ) -> Self {
        Self {
            sentence_count,
            vocabulary_size,
            edges: ranking.edges,
            iterations: ranking.iterations,
            degenerate_vocabulary,
            uniform_fallback: ranking.uniform_fallback,
        }
    }
}

/// Result of summarization
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    /// How the summary was produced
    pub outcome: SummaryOutcome,
    /// Sentences in the summary, in document order
    pub sentences: Vec<SelectedSentence>,
    /// The summary text
    pub text: String,
    /// Present when ranking ran
    pub diagnostics: Option<RankDiagnostics>,
}

impl Summary {
    /// Summary of blank input
    pub fn empty() -> Self {
        Self {
            outcome: SummaryOutcome::Empty,
            sentences: Vec::new(),
            text: String::new(),
            diagnostics: None,
        }
    }

    /// Input short enough to return unchanged
    pub fn short_circuit(original: &str, sentences: Vec<Sentence>) -> Self {
        Self {
            outcome: SummaryOutcome::ShortCircuit,
            sentences: sentences
                .into_iter()
                .map(|sentence| SelectedSentence {
                    sentence,
                    score: None,
                })
                .collect(),
            text: original.to_string(),
            diagnostics: None,
        }
    }

    /// Ranked selection joined with `separator`
    pub fn ranked(
        sentences: Vec<SelectedSentence>,
        separator: &str,
        diagnostics: RankDiagnostics,
    ) -> Self {
        let text = sentences
            .iter()
            .map(|s| s.sentence.text.as_str())
            .collect::<Vec<_>>()
            .join(separator);
        Self {
            outcome: SummaryOutcome::Ranked,
            sentences,
            text,
            diagnostics: Some(diagnostics),
        }
    }

    /// Number of sentences in the summary
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    /// Check if the summary is empty
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

/// Top-N sentence selector
#[derive(Debug, Clone, Copy, Default)]
pub struct SentenceSelector;

impl SentenceSelector {
    /// Create a new selector
    pub fn new() -> Self {
        Self
    }

    /// Select the `n` best-scoring sentences, returned in document order
    ///
    /// Ties go to the earlier sentence. `n` larger than the sentence count
    /// selects every sentence. Sentences without a score are never chosen.
    pub fn select(
        &self,
        sentences: &[Sentence],
        scores: &ScoreMap,
        n: usize,
    ) -> Vec<SelectedSentence> {
        let mut chosen: Vec<usize> = scores
            .ranked_indices()
            .into_iter()
            .filter(|&i| i < sentences.len())
            .take(n)
            .collect();

        chosen.sort_unstable();

        chosen
            .into_iter()
            .map(|i| SelectedSentence {
                sentence: sentences[i].clone(),
                score: scores.get(i),
            })
            .collect()
    }
}

/// Select the top `n` sentence texts in document order
pub fn select(sentences: &[Sentence], scores: &ScoreMap, n: usize) -> Vec<String> {
    SentenceSelector
        .select(sentences, scores, n)
        .into_iter()
        .map(|s| s.sentence.text)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_sentences(texts: &[&str]) -> Vec<Sentence> {
        let mut offset = 0;
        texts
            .iter()
            .enumerate()
            .map(|(i, t)| {
                let s = Sentence::new(*t, offset, offset + t.len(), i);
                offset += t.len() + 1;
                s
            })
            .collect()
    }

    #[test]
    fn test_selects_top_scores_in_document_order() {
        let sentences = make_sentences(&["First.", "Second.", "Third.", "Fourth."]);
        let scores = ScoreMap::from_scores(vec![0.1, 0.2, 0.4, 0.3]);

        let selected = SentenceSelector::new().select(&sentences, &scores, 2);

        let indices: Vec<_> = selected.iter().map(|s| s.sentence.index).collect();
        assert_eq!(indices, vec![2, 3]);
        assert!(selected[0].score.unwrap() > selected[1].score.unwrap());
    }

    #[test]
    fn test_ties_prefer_earlier_sentences() {
        let sentences = make_sentences(&["A.", "B.", "C.", "D."]);
        let scores = ScoreMap::uniform(4);

        assert_eq!(select(&sentences, &scores, 2), vec!["A.", "B."]);
    }

    #[test]
    fn test_n_larger_than_count() {
        let sentences = make_sentences(&["One.", "Two."]);
        let scores = ScoreMap::from_scores(vec![0.3, 0.7]);

        assert_eq!(select(&sentences, &scores, 5), vec!["One.", "Two."]);
    }

    #[test]
    fn test_zero_selects_nothing() {
        let sentences = make_sentences(&["One.", "Two."]);
        let scores = ScoreMap::uniform(2);

        assert!(select(&sentences, &scores, 0).is_empty());
    }

    #[test]
    fn test_empty_input() {
        let selected = SentenceSelector::new().select(&[], &ScoreMap::default(), 3);
        assert!(selected.is_empty());
    }

    #[test]
    fn test_ranked_summary_joins_with_separator() {
        let sentences = make_sentences(&["One.", "Two.", "Three."]);
        let scores = ScoreMap::from_scores(vec![0.5, 0.1, 0.4]);
        let selected = SentenceSelector::new().select(&sentences, &scores, 2);
        let ranking = Ranking {
            scores,
            iterations: 4,
            edges: 2,
            uniform_fallback: false,
        };

        let summary = Summary::ranked(selected, "\n", RankDiagnostics::new(3, 3, false, &ranking));

        assert_eq!(summary.outcome, SummaryOutcome::Ranked);
        assert_eq!(summary.text, "One.\nThree.");
        assert_eq!(summary.len(), 2);
        assert_eq!(summary.diagnostics.unwrap().iterations, 4);
    }

    #[test]
    fn test_short_circuit_keeps_original_text() {
        let original = "  One.   Two.  ";
        let sentences = make_sentences(&["One.", "Two."]);
        let summary = Summary::short_circuit(original, sentences);

        assert_eq!(summary.outcome, SummaryOutcome::ShortCircuit);
        assert_eq!(summary.text, original);
        assert!(summary.sentences.iter().all(|s| s.score.is_none()));
    }

    #[test]
    fn test_empty_summary() {
        let summary = Summary::empty();
        assert!(summary.is_empty());
        assert_eq!(summary.text, "");
        assert_eq!(summary.outcome, SummaryOutcome::Empty);
    }
}
