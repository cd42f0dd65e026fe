//! Conversation recording use case.
//!
//! Accumulates [`MessageRecord`]s in memory and hands the whole ordered log
//! to a [`ConversationStore`] when asked to persist.

use crate::ports::conversation_store::{ConversationStore, StorageError};
use sentiment_domain::{ConversationLog, MessageRecord};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

/// In-memory conversation log bound to a storage destination.
pub struct ConversationRecorder {
    log: ConversationLog,
    store: Arc<dyn ConversationStore>,
    destination: PathBuf,
}

impl ConversationRecorder {
    pub fn new(store: Arc<dyn ConversationStore>, destination: impl Into<PathBuf>) -> Self {
        Self {
            log: ConversationLog::new(),
            store,
            destination: destination.into(),
        }
    }

    /// Append a record at the end of the log
    pub fn append(&mut self, record: MessageRecord) {
        self.log.push(record);
    }

    pub fn log(&self) -> &ConversationLog {
        &self.log
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }

    /// Write the full log to the destination, replacing its contents.
    ///
    /// No retry is attempted on failure.
    pub fn persist(&self) -> Result<(), StorageError> {
        match self.store.save(self.log.records(), &self.destination) {
            Ok(()) => {
                info!(
                    "Saved {} records to {}",
                    self.log.len(),
                    self.destination.display()
                );
                Ok(())
            }
            Err(e) => {
                warn!("Failed to save conversation: {}", e);
                Err(e)
            }
        }
    }

    pub fn into_log(self) -> ConversationLog {
        self.log
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::{FailingStore, MemoryStore};

    fn record(speaker: &str, message: &str) -> MessageRecord {
        MessageRecord::new("2024-03-21 10:00:00", speaker, message, None)
    }

    #[test]
    fn test_persist_writes_full_log_in_order() {
        let store = Arc::new(MemoryStore::default());
        let mut recorder = ConversationRecorder::new(store.clone(), "chat.json");

        recorder.append(record("User", "Hello"));
        recorder.append(record("Bot", "Hi"));
        recorder.persist().unwrap();

        let saved = store.saved(Path::new("chat.json")).unwrap();
        assert_eq!(saved, recorder.log().records());
    }

    #[test]
    fn test_persist_overwrites_previous_save() {
        let store = Arc::new(MemoryStore::default());
        let mut recorder = ConversationRecorder::new(store.clone(), "chat.json");

        recorder.append(record("User", "one"));
        recorder.persist().unwrap();
        recorder.append(record("Bot", "two"));
        recorder.persist().unwrap();

        let saved = store.saved(Path::new("chat.json")).unwrap();
        assert_eq!(saved.len(), 2);
        assert_eq!(store.save_count(), 2);
    }

    #[test]
    fn test_persist_empty_log() {
        let store = Arc::new(MemoryStore::default());
        let recorder = ConversationRecorder::new(store.clone(), "empty.json");
        recorder.persist().unwrap();
        assert!(store.saved(Path::new("empty.json")).unwrap().is_empty());
    }

    #[test]
    fn test_persist_failure_is_reported() {
        let mut recorder = ConversationRecorder::new(Arc::new(FailingStore), "/invalid/chat.json");
        recorder.append(record("User", "Hello"));

        let err = recorder.persist().unwrap_err();
        assert_eq!(err.path(), Path::new("/invalid/chat.json"));
        // The in-memory log is untouched
        assert_eq!(recorder.log().len(), 1);
    }
}
