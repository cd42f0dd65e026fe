//! Sentiment category value object

use crate::core::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Polarity above which text is considered very positive.
pub const VERY_POSITIVE_THRESHOLD: f64 = 0.3;

/// Polarity at or below which text is considered very negative.
pub const VERY_NEGATIVE_THRESHOLD: f64 = -0.3;

/// One of the five discrete sentiment buckets (Value Object)
///
/// The bucket is derived solely from polarity; subjectivity never moves text
/// between buckets.
///
/// # Example
///
/// ```
/// use sentiment_domain::SentimentCategory;
///
/// assert_eq!(SentimentCategory::from_polarity(0.625), SentimentCategory::VeryPositive);
/// assert_eq!(SentimentCategory::from_polarity(0.0), SentimentCategory::Neutral);
///
/// let parsed: SentimentCategory = "VERY Negative".parse().unwrap();
/// assert_eq!(parsed, SentimentCategory::VeryNegative);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SentimentCategory {
    VeryPositive,
    Positive,
    Neutral,
    Negative,
    VeryNegative,
}

impl SentimentCategory {
    /// All categories, from most positive to most negative
    pub const ALL: [SentimentCategory; 5] = [
        SentimentCategory::VeryPositive,
        SentimentCategory::Positive,
        SentimentCategory::Neutral,
        SentimentCategory::Negative,
        SentimentCategory::VeryNegative,
    ];

    /// Map a polarity score to its category.
    ///
    /// Thresholds are checked in order and the first match wins:
    ///
    /// | polarity            | category      |
    /// |---------------------|---------------|
    /// | `p > 0.3`           | very positive |
    /// | `0 < p <= 0.3`      | positive      |
    /// | `p == 0`            | neutral       |
    /// | `-0.3 < p < 0`      | negative      |
    /// | `p <= -0.3`         | very negative |
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > VERY_POSITIVE_THRESHOLD {
            SentimentCategory::VeryPositive
        } else if polarity > 0.0 {
            SentimentCategory::Positive
        } else if polarity == 0.0 {
            SentimentCategory::Neutral
        } else if polarity > VERY_NEGATIVE_THRESHOLD {
            SentimentCategory::Negative
        } else {
            // Also catches NaN; scores are validated before they get here.
            SentimentCategory::VeryNegative
        }
    }

    /// Lowercase label used in persisted records and lookups
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentCategory::VeryPositive => "very positive",
            SentimentCategory::Positive => "positive",
            SentimentCategory::Neutral => "neutral",
            SentimentCategory::Negative => "negative",
            SentimentCategory::VeryNegative => "very negative",
        }
    }

    /// Title-cased label for display (e.g. "Very Positive")
    pub fn title(&self) -> &'static str {
        match self {
            SentimentCategory::VeryPositive => "Very Positive",
            SentimentCategory::Positive => "Positive",
            SentimentCategory::Neutral => "Neutral",
            SentimentCategory::Negative => "Negative",
            SentimentCategory::VeryNegative => "Very Negative",
        }
    }
}

impl std::fmt::Display for SentimentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SentimentCategory {
    type Err = DomainError;

    /// Parse a category label, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        SentimentCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == normalized)
            .ok_or_else(|| DomainError::InvalidCategory(s.to_string()))
    }
}

impl Serialize for SentimentCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SentimentCategory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
