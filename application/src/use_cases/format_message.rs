//! Message formatting use case.
//!
//! Stamps a speaker/text pair (plus optional sentiment) with the current
//! local time and produces an immutable [`MessageRecord`].

use crate::ports::clock::{Clock, SystemClock};
use sentiment_domain::conversation::record::TIMESTAMP_FORMAT;
use sentiment_domain::{MessageRecord, SentimentResult};
use std::sync::Arc;

/// Builds timestamped [`MessageRecord`]s.
#[derive(Clone)]
pub struct MessageFormatter {
    clock: Arc<dyn Clock>,
}

impl Default for MessageFormatter {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock))
    }
}

impl MessageFormatter {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Create a record for `speaker` saying `text`.
    ///
    /// `text` may be empty. When `sentiment` is `None` the record carries no
    /// sentiment field at all.
    pub fn format(
        &self,
        speaker: &str,
        text: &str,
        sentiment: Option<SentimentResult>,
    ) -> MessageRecord {
        let timestamp = self.clock.now().format(TIMESTAMP_FORMAT).to_string();
        MessageRecord::new(timestamp, speaker, text, sentiment)
    }
}
