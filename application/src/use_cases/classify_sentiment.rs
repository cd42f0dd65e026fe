//! Classify Sentiment use case.
//!
//! Wraps the [`SentimentScorer`] port: validates the text, asks the scorer
//! for polarity and subjectivity, and derives the [`SentimentCategory`].
//!
//! [`SentimentCategory`]: sentiment_domain::SentimentCategory

use crate::ports::sentiment_scorer::{ScorerError, SentimentScorer};
use sentiment_domain::{DomainError, SentimentResult};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during classification.
#[derive(Error, Debug)]
pub enum ClassifyError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Scorer error: {0}")]
    Scorer(#[from] ScorerError),
}

impl ClassifyError {
    /// Whether the text itself was rejected (empty or whitespace only)
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, ClassifyError::Domain(e) if e.is_invalid_input())
    }
}

/// Use case for classifying the sentiment of a piece of text.
#[derive(Clone)]
pub struct ClassifySentimentUseCase {
    scorer: Arc<dyn SentimentScorer>,
}

impl ClassifySentimentUseCase {
    pub fn new(scorer: Arc<dyn SentimentScorer>) -> Self {
        Self { scorer }
    }

    /// Classify `text`.
    ///
    /// Fails with [`DomainError::InvalidInput`] when the text is empty after
    /// trimming. Has no side effects beyond a debug log line.
    pub fn execute(&self, text: &str) -> Result<SentimentResult, ClassifyError> {
        if text.trim().is_empty() {
            return Err(DomainError::InvalidInput(
                "Input must be a non-empty string".to_string(),
            )
            .into());
        }

        let score = self.scorer.score(text)?;
        let result = SentimentResult::from_score(score);

        debug!(
            scorer = self.scorer.name(),
            polarity = result.polarity,
            subjectivity = result.subjectivity,
            category = %result.category,
            "Classified text"
        );

        Ok(result)
    }
}
