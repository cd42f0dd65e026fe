//! Deterministic port doubles shared by the use case tests.

use crate::ports::conversation_store::{ConversationStore, StorageError};
use crate::ports::sentiment_scorer::{ScorerError, SentimentScorer};
use sentiment_domain::{ConversationLog, MessageRecord, SentimentScore};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Returns canned scores per exact text; anything else scores neutral.
#[derive(Default)]
pub struct StubScorer {
    scores: HashMap<String, (f64, f64)>,
}

impl StubScorer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, text: &str, polarity: f64, subjectivity: f64) -> Self {
        self.scores.insert(text.to_string(), (polarity, subjectivity));
        self
    }
}

impl SentimentScorer for StubScorer {
    fn score(&self, text: &str) -> Result<SentimentScore, ScorerError> {
        match self.scores.get(text) {
            Some(&(p, s)) => {
                SentimentScore::new(p, s).map_err(|e| ScorerError::InvalidScore(e.to_string()))
            }
            None => Ok(SentimentScore::neutral()),
        }
    }

    fn name(&self) -> &str {
        "stub"
    }
}

pub struct FailingScorer;

impl SentimentScorer for FailingScorer {
    fn score(&self, _text: &str) -> Result<SentimentScore, ScorerError> {
        Err(ScorerError::Unavailable("engine offline".to_string()))
    }
}

/// Keeps saved logs in memory, keyed by destination.
#[derive(Default)]
pub struct MemoryStore {
    files: Mutex<HashMap<PathBuf, Vec<MessageRecord>>>,
    saves: Mutex<usize>,
}

impl MemoryStore {
    pub fn saved(&self, path: &Path) -> Option<Vec<MessageRecord>> {
        self.files.lock().unwrap().get(path).cloned()
    }

    pub fn save_count(&self) -> usize {
        *self.saves.lock().unwrap()
    }
}

impl ConversationStore for MemoryStore {
    fn save(&self, records: &[MessageRecord], destination: &Path) -> Result<(), StorageError> {
        self.files
            .lock()
            .unwrap()
            .insert(destination.to_path_buf(), records.to_vec());
        *self.saves.lock().unwrap() += 1;
        Ok(())
    }

    fn load(&self, source: &Path) -> Result<ConversationLog, StorageError> {
        self.saved(source)
            .map(ConversationLog::from)
            .ok_or_else(|| StorageError::Read {
                path: source.to_path_buf(),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            })
    }
}

/// Fails every write as if the directory did not exist.
pub struct FailingStore;

impl ConversationStore for FailingStore {
    fn save(&self, _records: &[MessageRecord], destination: &Path) -> Result<(), StorageError> {
        Err(StorageError::Write {
            path: destination.to_path_buf(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        })
    }

    fn load(&self, source: &Path) -> Result<ConversationLog, StorageError> {
        Err(StorageError::Read {
            path: source.to_path_buf(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        })
    }
}
