//! Use cases (application services)
//!
//! - [`classify_sentiment`]: text to [`SentimentResult`](sentiment_domain::SentimentResult)
//! - [`format_message`]: timestamped message records
//! - [`record_conversation`]: in-memory log plus persistence
//! - [`chat_session`]: one conversation, turn by turn

pub mod chat_session;
pub mod classify_sentiment;
pub mod format_message;
pub mod record_conversation;

#[cfg(test)]
pub(crate) mod test_support;
