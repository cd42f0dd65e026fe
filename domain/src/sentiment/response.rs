//! Fixed reply table keyed by sentiment category

use super::category::SentimentCategory;
use crate::core::error::DomainError;

impl SentimentCategory {
    /// The canned reply for this category
    pub fn response(&self) -> &'static str {
        match self {
            SentimentCategory::VeryPositive => {
                "That's wonderful to hear! Your positive energy is contagious!"
            }
            SentimentCategory::Positive => {
                "I'm glad you're feeling good! Keep that positive spirit!"
            }
            SentimentCategory::Neutral => {
                "I understand. Would you like to tell me more about that?"
            }
            SentimentCategory::Negative => {
                "I'm sorry you're feeling down. Would you like to talk about it?"
            }
            SentimentCategory::VeryNegative => {
                "I hear that you're going through a difficult time. I'm here to listen and support you."
            }
        }
    }
}

/// Look up the reply for a category label.
///
/// The label is matched case-insensitively. Unknown labels fail with
/// [`DomainError::InvalidCategory`].
///
/// ```
/// use sentiment_domain::select_response;
///
/// assert_eq!(
///     select_response("Positive").unwrap(),
///     "I'm glad you're feeling good! Keep that positive spirit!"
/// );
/// assert!(select_response("ecstatic").is_err());
/// ```
pub fn select_response(category: &str) -> Result<&'static str, DomainError> {
    let category: SentimentCategory = category.parse()?;
    Ok(category.response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_has_its_reply() {
        assert_eq!(
            select_response("very positive").unwrap(),
            "That's wonderful to hear! Your positive energy is contagious!"
        );
        assert_eq!(
            select_response("positive").unwrap(),
            "I'm glad you're feeling good! Keep that positive spirit!"
        );
        assert_eq!(
            select_response("neutral").unwrap(),
            "I understand. Would you like to tell me more about that?"
        );
        assert_eq!(
            select_response("negative").unwrap(),
            "I'm sorry you're feeling down. Would you like to talk about it?"
        );
        assert_eq!(
            select_response("very negative").unwrap(),
            "I hear that you're going through a difficult time. I'm here to listen and support you."
        );
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(
            select_response("VERY POSITIVE").unwrap(),
            select_response("very positive").unwrap()
        );
        assert_eq!(
            select_response("NeGaTiVe").unwrap(),
            SentimentCategory::Negative.response()
        );
    }

    #[test]
    fn test_unknown_category() {
        let err = select_response("invalid_category").unwrap_err();
        assert!(matches!(err, DomainError::InvalidCategory(ref c) if c == "invalid_category"));
    }

    #[test]
    fn test_replies_are_distinct() {
        let mut replies: Vec<&str> = SentimentCategory::ALL.iter().map(|c| c.response()).collect();
        replies.sort();
        replies.dedup();
        assert_eq!(replies.len(), SentimentCategory::ALL.len());
    }
}
