//! Message record entity

use crate::sentiment::result::SentimentResult;
use serde::{Deserialize, Serialize};

/// Timestamp layout used in records: local time, second precision.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One timestamped turn in the conversation (Entity)
///
/// Records are immutable once created. The `sentiment` key is left out of
/// the serialized form entirely when no sentiment was attached, so bot
/// replies serialize as `{timestamp, speaker, message}` only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageRecord {
    timestamp: String,
    speaker: String,
    message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sentiment: Option<SentimentResult>,
}

impl MessageRecord {
    /// Create a record with an already formatted timestamp.
    ///
    /// Callers normally go through the application-layer formatter, which
    /// stamps the current local time.
    pub fn new(
        timestamp: impl Into<String>,
        speaker: impl Into<String>,
        message: impl Into<String>,
        sentiment: Option<SentimentResult>,
    ) -> Self {
        Self {
            timestamp: timestamp.into(),
            speaker: speaker.into(),
            message: message.into(),
            sentiment,
        }
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn speaker(&self) -> &str {
        &self.speaker
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn sentiment(&self) -> Option<&SentimentResult> {
        self.sentiment.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentiment::result::SentimentScore;

    fn sample_sentiment() -> SentimentResult {
        SentimentResult::from_score(SentimentScore::new(0.5, 0.5).unwrap())
    }

    #[test]
    fn test_record_without_sentiment_omits_key() {
        let record = MessageRecord::new("2024-03-21 10:00:00", "Bot", "Hi", None);
        let value = serde_json::to_value(&record).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 3);
        assert!(!object.contains_key("sentiment"));
        assert_eq!(object["timestamp"], "2024-03-21 10:00:00");
        assert_eq!(object["speaker"], "Bot");
        assert_eq!(object["message"], "Hi");
    }

    #[test]
    fn test_record_with_sentiment_embeds_it() {
        let sentiment = sample_sentiment();
        let record = MessageRecord::new("2024-03-21 10:00:00", "User", "Hello", Some(sentiment.clone()));
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["sentiment"]["category"], "very positive");
        assert_eq!(value["sentiment"]["polarity"], 0.5);
        assert_eq!(record.sentiment(), Some(&sentiment));
    }

    #[test]
    fn test_field_order_in_json() {
        let record = MessageRecord::new("2024-03-21 10:00:00", "Bot", "Hi", None);
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"timestamp":"2024-03-21 10:00:00","speaker":"Bot","message":"Hi"}"#
        );
    }

    #[test]
    fn test_deserialize_missing_sentiment() {
        let json = r#"{"timestamp":"2024-03-21 10:00:01","speaker":"Bot","message":"Hi"}"#;
        let record: MessageRecord = serde_json::from_str(json).unwrap();
        assert!(record.sentiment().is_none());
        assert_eq!(record.speaker(), "Bot");
    }

    #[test]
    fn test_empty_message_is_allowed() {
        let record = MessageRecord::new("2024-03-21 10:00:00", "User", "", None);
        assert_eq!(record.message(), "");
    }
}
