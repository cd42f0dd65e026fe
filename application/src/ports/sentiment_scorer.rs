//! Sentiment scorer port
//!
//! Defines the interface for the external polarity/subjectivity engine.
//! Any library or service that rates text this way can be plugged in.

use sentiment_domain::SentimentScore;
use thiserror::Error;

/// Errors that can occur while scoring text
#[derive(Error, Debug)]
pub enum ScorerError {
    #[error("Scorer returned an invalid score: {0}")]
    InvalidScore(String),

    #[error("Scorer unavailable: {0}")]
    Unavailable(String),

    #[error("Other error: {0}")]
    Other(String),
}

/// Rates a piece of text.
///
/// Implementations (adapters) live in the infrastructure layer. `score` is
/// synchronous and blocks until the engine answers.
pub trait SentimentScorer: Send + Sync {
    /// Return polarity in `[-1, 1]` and subjectivity in `[0, 1]` for `text`.
    fn score(&self, text: &str) -> Result<SentimentScore, ScorerError>;

    /// Short identifier for logs
    fn name(&self) -> &str {
        "scorer"
    }
}
