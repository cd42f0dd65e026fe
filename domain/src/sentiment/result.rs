//! Sentiment score and result value objects

use super::category::SentimentCategory;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Raw output of a sentiment scorer: polarity and subjectivity.
///
/// Construct through [`SentimentScore::new`], which clamps both values into
/// their ranges and rejects NaN.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentimentScore {
    polarity: f64,
    subjectivity: f64,
}

impl SentimentScore {
    /// Create a score, clamping polarity to `[-1, 1]` and subjectivity to `[0, 1]`.
    pub fn new(polarity: f64, subjectivity: f64) -> Result<Self, DomainError> {
        if polarity.is_nan() || subjectivity.is_nan() {
            return Err(DomainError::InvalidInput(
                "sentiment score must not be NaN".to_string(),
            ));
        }
        Ok(Self {
            polarity: polarity.clamp(-1.0, 1.0),
            subjectivity: subjectivity.clamp(0.0, 1.0),
        })
    }

    /// A score with no opinion at all
    pub fn neutral() -> Self {
        Self {
            polarity: 0.0,
            subjectivity: 0.0,
        }
    }

    pub fn polarity(&self) -> f64 {
        self.polarity
    }

    pub fn subjectivity(&self) -> f64 {
        self.subjectivity
    }
}

/// Structured sentiment of a piece of text (Value Object)
///
/// `category` is always `SentimentCategory::from_polarity(polarity)`.
/// Serialized field order is `polarity`, `subjectivity`, `category`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    pub polarity: f64,
    pub subjectivity: f64,
    pub category: SentimentCategory,
}

impl SentimentResult {
    /// Build a result from a score, deriving the category from polarity.
    pub fn from_score(score: SentimentScore) -> Self {
        Self {
            polarity: score.polarity(),
            subjectivity: score.subjectivity(),
            category: SentimentCategory::from_polarity(score.polarity()),
        }
    }

    /// The canned reply for this result's category
    pub fn response(&self) -> &'static str {
        self.category.response()
    }
}

impl From<SentimentScore> for SentimentResult {
    fn from(score: SentimentScore) -> Self {
        Self::from_score(score)
    }
}
