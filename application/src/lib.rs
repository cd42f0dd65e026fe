//! Application layer for sentiment-chat
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::SessionParams;
pub use ports::{
    clock::{Clock, FixedClock, SystemClock},
    conversation_store::{ConversationStore, StorageError},
    sentiment_scorer::{ScorerError, SentimentScorer},
};
pub use use_cases::chat_session::{ChatError, ChatSession, ChatTurn, SessionSummary};
pub use use_cases::classify_sentiment::{ClassifyError, ClassifySentimentUseCase};
pub use use_cases::format_message::MessageFormatter;
pub use use_cases::record_conversation::ConversationRecorder;
