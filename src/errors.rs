//! Error types for rapid_summary
//!
//! Only configuration problems ever reach callers. `EmptyVocabulary` and
//! `NotConverged` are raised by the inner stages and recovered by the
//! summarizer pipeline.

use thiserror::Error;

/// Errors produced by the summarization stages
#[derive(Debug, Error)]
pub enum SummarizeError {
    /// A configuration value is out of range
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// No sentence contributed a single non-stopword term
    #[error("empty vocabulary: no sentence contains a discriminating term")]
    EmptyVocabulary,

    /// Power iteration hit the iteration cap before converging
    #[error("pagerank did not converge after {iterations} iterations (delta {delta:e})")]
    NotConverged { iterations: usize, delta: f64 },

    /// A JSON configuration could not be parsed
    #[error("config parse error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SummarizeError {
    /// Create an invalid-config error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Whether the pipeline recovers from this error locally
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::EmptyVocabulary | Self::NotConverged { .. })
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, SummarizeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_config_message() {
        let err = SummarizeError::invalid_config("damping must be between 0 and 1");
        assert_eq!(
            err.to_string(),
            "invalid configuration: damping must be between 0 and 1"
        );
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_recoverable_variants() {
        assert!(SummarizeError::EmptyVocabulary.is_recoverable());
        assert!(SummarizeError::NotConverged {
            iterations: 100,
            delta: 0.5
        }
        .is_recoverable());
    }

    #[test]
    fn test_json_error_converts() {
        let parse: std::result::Result<serde_json::Value, _> = serde_json::from_str("{");
        let err: SummarizeError = parse.unwrap_err().into();
        assert!(matches!(err, SummarizeError::Json(_)));
    }
}
