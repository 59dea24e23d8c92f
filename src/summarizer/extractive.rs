//! Extractive summarizer facade
//!
//! Runs the whole pipeline: split → similarity → rank → select. The
//! summarizer holds only read-only state (config and stopword list), so one
//! instance can serve any number of threads.

use crate::errors::Result;
use crate::nlp::splitter::SentenceSplitter;
use crate::nlp::stopwords::StopwordFilter;
use crate::similarity::SimilarityBuilder;
use crate::summarizer::ranker::CentralityRanker;
use crate::summarizer::selector::{RankDiagnostics, SentenceSelector, Summary};
use crate::types::SummarizerConfig;
use rayon::prelude::*;

/// Enter a tracing span for a pipeline stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("summarize_stage", stage = $name).entered();
    };
}

/// TextRank-style extractive summarizer
#[derive(Debug, Clone)]
pub struct ExtractiveSummarizer {
    config: SummarizerConfig,
    stopwords: StopwordFilter,
    splitter: SentenceSplitter,
    ranker: CentralityRanker,
    selector: SentenceSelector,
}

impl Default for ExtractiveSummarizer {
    fn default() -> Self {
        Self::build(SummarizerConfig::default())
    }
}

impl ExtractiveSummarizer {
    /// Create a summarizer, validating the config
    pub fn new(config: SummarizerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    /// Create a summarizer from a JSON config
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(Self::build(SummarizerConfig::from_json(json)?))
    }

    fn build(config: SummarizerConfig) -> Self {
        Self {
            stopwords: StopwordFilter::from_config(&config),
            splitter: SentenceSplitter::new(),
            ranker: CentralityRanker::from_config(&config),
            selector: SentenceSelector::new(),
            config,
        }
    }

    /// The active configuration
    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    /// Summarize `text` down to `n` sentences
    ///
    /// - Blank text gives an empty string.
    /// - `n == 0` is treated as 1.
    /// - Text with at most `n` sentences is returned unchanged.
    /// - Otherwise the `n` most central sentences are joined, in document
    ///   order, with the configured separator.
    pub fn summarize(&self, text: &str, n: usize) -> String {
        self.summarize_detailed(text, n).text
    }

    /// Summarize and return the selected sentences, scores and diagnostics
    pub fn summarize_detailed(&self, text: &str, n: usize) -> Summary {
        let n = n.max(1);

        let sentences = {
            trace_stage!("split");
            self.splitter.split(text)
        };

        if sentences.is_empty() {
            return Summary::empty();
        }
        if sentences.len() <= n {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                sentences = sentences.len(),
                requested = n,
                "input within requested length, returning it unchanged"
            );
            return Summary::short_circuit(text, sentences);
        }

        let similarity = {
            trace_stage!("similarity");
            SimilarityBuilder::new(&self.stopwords).build(&sentences)
        };

        let ranking = {
            trace_stage!("rank");
            self.ranker.rank(&similarity.matrix)
        };

        let selected = {
            trace_stage!("select");
            self.selector.select(&sentences, &ranking.scores, n)
        };

        let diagnostics = RankDiagnostics::new(
            sentences.len(),
            similarity.vocabulary_size,
            similarity.degenerate,
            &ranking,
        );
        Summary::ranked(selected, &self.config.separator, diagnostics)
    }

    /// Summarize independent documents in parallel, preserving input order
    pub fn summarize_batch<S>(&self, texts: &[S], n: usize) -> Vec<String>
    where
        S: AsRef<str> + Sync,
    {
        texts
            .par_iter()
            .map(|text| self.summarize(text.as_ref(), n))
            .collect()
    }
}
