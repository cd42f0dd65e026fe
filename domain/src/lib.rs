//! Domain layer for sentiment-chat
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Sentiment
//!
//! A scorer rates text with a **polarity** in `[-1.0, 1.0]` and a
//! **subjectivity** in `[0.0, 1.0]`. Polarity alone decides which of the five
//! [`SentimentCategory`] buckets the text falls into, and each bucket has a
//! fixed canned reply.
//!
//! ## Conversation
//!
//! Every utterance becomes an immutable [`MessageRecord`]. Records are kept
//! in chronological order in a [`ConversationLog`].

pub mod conversation;
pub mod core;
pub mod sentiment;

// Re-export commonly used types
pub use conversation::{log::ConversationLog, record::MessageRecord};
pub use core::error::DomainError;
pub use sentiment::{
    category::SentimentCategory,
    response::select_response,
    result::{SentimentResult, SentimentScore},
};
