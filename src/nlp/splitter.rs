//! Rule-based sentence splitting
//!
//! A sentence ends at `.`, `!` or `?` when one or more spaces follow. This
//! is a punctuation heuristic, not boundary detection: abbreviations
//! ("Dr. Smith") and decimals followed by a space split too, and a newline
//! after a full stop does not split.

use crate::types::Sentence;
use once_cell::sync::Lazy;
use regex::Regex;

static BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?] +").expect("sentence boundary pattern is valid"));

/// Splits text into ordered, trimmed, non-empty sentences
#[derive(Debug, Clone, Copy, Default)]
pub struct SentenceSplitter;

impl SentenceSplitter {
    /// Create a new splitter
    pub fn new() -> Self {
        Self
    }

    /// Split `text` into sentences in document order
    ///
    /// Blank input yields no sentences. Byte offsets refer to `text`.
    pub fn split(&self, text: &str) -> Vec<Sentence> {
        let lead = text.len() - text.trim_start().len();
        let body = text.trim();
        if body.is_empty() {
            return Vec::new();
        }

        let mut spans = Vec::new();
        let mut start = 0;
        for boundary in BOUNDARY.find_iter(body) {
            // Keep the terminator with its sentence; the spaces are dropped.
            spans.push((start, boundary.start() + 1));
            start = boundary.end();
        }
        spans.push((start, body.len()));

        let mut sentences = Vec::with_capacity(spans.len());
        for (start, end) in spans {
            let piece = &body[start..end];
            let text = piece.trim();
            if text.is_empty() {
                continue;
            }
            let offset = lead + start + (piece.len() - piece.trim_start().len());
            sentences.push(Sentence::new(
                text,
                offset,
                offset + text.len(),
                sentences.len(),
            ));
        }
        sentences
    }
}

/// Split text into sentence strings
pub fn split_sentences(text: &str) -> Vec<String> {
    SentenceSplitter
        .split(text)
        .into_iter()
        .map(|s| s.text)
        .collect()
}
