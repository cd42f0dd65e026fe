//! Conversation log aggregate

use super::record::MessageRecord;
use crate::sentiment::category::SentimentCategory;
use serde::{Deserialize, Serialize};

/// Ordered, append-only sequence of message records.
///
/// Insertion order is chronological order. Serializes as a bare JSON array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConversationLog {
    records: Vec<MessageRecord>,
}

impl ConversationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record at the end of the log
    pub fn push(&mut self, record: MessageRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[MessageRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MessageRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn last(&self) -> Option<&MessageRecord> {
        self.records.last()
    }

    /// Number of records carrying each sentiment category, in
    /// [`SentimentCategory::ALL`] order.
    pub fn category_counts(&self) -> [(SentimentCategory, usize); 5] {
        SentimentCategory::ALL.map(|category| {
            let count = self
                .records
                .iter()
                .filter_map(|r| r.sentiment())
                .filter(|s| s.category == category)
                .count();
            (category, count)
        })
    }
}

impl From<Vec<MessageRecord>> for ConversationLog {
    fn from(records: Vec<MessageRecord>) -> Self {
        Self { records }
    }
}

impl<'a> IntoIterator for &'a ConversationLog {
    type Item = &'a MessageRecord;
    type IntoIter = std::slice::Iter<'a, MessageRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
