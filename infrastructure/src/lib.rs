//! Infrastructure layer for sentiment-chat
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod sentiment;
pub mod storage;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigLoader, FileConfig, Severity};
pub use sentiment::{Lexicon, LexiconError, LexiconSentimentScorer};
pub use storage::JsonFileConversationStore;
