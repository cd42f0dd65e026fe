//! Chat session use case.
//!
//! Orchestrates one conversation: each user line is classified, recorded
//! with its sentiment, answered with the category's canned reply, and the
//! reply is recorded too. Closing the session persists the log once.
//!
//! ```text
//! Active ──respond()──▶ Active
//!   │
//!   └──close()──▶ persist once ──▶ Closed (session consumed)
//! ```
//!
//! Dropping an active session (e.g. on interrupt) persists nothing.

use crate::config::SessionParams;
use crate::ports::clock::Clock;
use crate::ports::conversation_store::{ConversationStore, StorageError};
use crate::ports::sentiment_scorer::SentimentScorer;
use crate::use_cases::classify_sentiment::{ClassifyError, ClassifySentimentUseCase};
use crate::use_cases::format_message::MessageFormatter;
use crate::use_cases::record_conversation::ConversationRecorder;
use sentiment_domain::{ConversationLog, SentimentResult};
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during a chat session.
#[derive(Error, Debug)]
pub enum ChatError {
    #[error(transparent)]
    Classify(#[from] ClassifyError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl ChatError {
    /// Storage failures end the session; everything else only spoils one turn.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ChatError::Storage(_))
    }
}

/// Outcome of one user turn.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatTurn {
    pub sentiment: SentimentResult,
    pub reply: &'static str,
}

/// What was written when the session closed.
#[derive(Debug, Clone)]
pub struct SessionSummary {
    pub destination: PathBuf,
    pub log: ConversationLog,
}

/// An active chat session owning the in-memory conversation log.
pub struct ChatSession {
    user_name: String,
    params: SessionParams,
    classifier: ClassifySentimentUseCase,
    formatter: MessageFormatter,
    recorder: ConversationRecorder,
    turns: usize,
}

impl ChatSession {
    pub fn new(
        user_name: impl Into<String>,
        params: SessionParams,
        scorer: Arc<dyn SentimentScorer>,
        store: Arc<dyn ConversationStore>,
    ) -> Self {
        let recorder = ConversationRecorder::new(store, params.history_file.clone());
        Self {
            user_name: user_name.into(),
            params,
            classifier: ClassifySentimentUseCase::new(scorer),
            formatter: MessageFormatter::default(),
            recorder,
            turns: 0,
        }
    }

    /// Use a specific clock for record timestamps.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.formatter = MessageFormatter::new(clock);
        self
    }

    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    pub fn bot_name(&self) -> &str {
        &self.params.bot_name
    }

    pub fn params(&self) -> &SessionParams {
        &self.params
    }

    /// Number of completed user turns
    pub fn turns(&self) -> usize {
        self.turns
    }

    pub fn log(&self) -> &ConversationLog {
        self.recorder.log()
    }

    pub fn is_exit_command(&self, input: &str) -> bool {
        self.params.is_exit_command(input)
    }

    /// Handle one line of user input.
    ///
    /// On success two records are appended: the user's message with its
    /// sentiment, then the bot's reply without one. On failure nothing is
    /// appended and the session stays usable.
    pub fn respond(&mut self, input: &str) -> Result<ChatTurn, ChatError> {
        let input = input.trim();
        let sentiment = self.classifier.execute(input)?;
        let reply = sentiment.response();

        let user_record = self
            .formatter
            .format(&self.user_name, input, Some(sentiment.clone()));
        let bot_record = self.formatter.format(&self.params.bot_name, reply, None);

        self.recorder.append(user_record);
        self.recorder.append(bot_record);
        self.turns += 1;

        debug!(turn = self.turns, category = %sentiment.category, "Recorded turn");

        Ok(ChatTurn { sentiment, reply })
    }

    /// Close the session, persisting the full log exactly once.
    pub fn close(self) -> Result<SessionSummary, ChatError> {
        info!(
            "Closing session for {} after {} turns",
            self.user_name, self.turns
        );
        self.recorder.persist()?;
        let destination = self.recorder.destination().to_path_buf();
        Ok(SessionSummary {
            destination,
            log: self.recorder.into_log(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::clock::FixedClock;
    use crate::use_cases::test_support::{FailingStore, MemoryStore, StubScorer};
    use chrono::NaiveDate;
    use sentiment_domain::SentimentCategory;
    use std::path::Path;

    fn scorer() -> Arc<StubScorer> {
        Arc::new(
            StubScorer::new()
                .with("I love this!", 0.625, 0.6)
                .with("I hate this.", -0.8, 0.9),
        )
    }

    fn session(store: Arc<dyn ConversationStore>) -> ChatSession {
        let instant = NaiveDate::from_ymd_opt(2024, 3, 21)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        ChatSession::new(
            "Alice",
            SessionParams::default().with_history_file("history.json"),
            scorer(),
            store,
        )
        .with_clock(Arc::new(FixedClock(instant)))
    }

    #[test]
    fn test_positive_turn() {
        let mut chat = session(Arc::new(MemoryStore::default()));

        let turn = chat.respond("I love this!").unwrap();
        assert_eq!(turn.sentiment.category, SentimentCategory::VeryPositive);
        assert_eq!(
            turn.reply,
            "That's wonderful to hear! Your positive energy is contagious!"
        );
    }

    #[test]
    fn test_negative_turn() {
        let mut chat = session(Arc::new(MemoryStore::default()));

        let turn = chat.respond("I hate this.").unwrap();
        assert_eq!(turn.sentiment.category, SentimentCategory::VeryNegative);
        assert_eq!(
            turn.reply,
            "I hear that you're going through a difficult time. I'm here to listen and support you."
        );
    }

    #[test]
    fn test_turn_appends_user_then_bot_record() {
        let mut chat = session(Arc::new(MemoryStore::default()));
        chat.respond("I love this!").unwrap();

        let records = chat.log().records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].speaker(), "Alice");
        assert_eq!(records[0].message(), "I love this!");
        assert!(records[0].sentiment().is_some());
        assert_eq!(records[1].speaker(), "Bot");
        assert!(records[1].sentiment().is_none());
        assert_eq!(chat.turns(), 1);
    }

    #[test]
    fn test_blank_input_appends_nothing() {
        let mut chat = session(Arc::new(MemoryStore::default()));

        let err = chat.respond("   ").unwrap_err();
        assert!(matches!(err, ChatError::Classify(ref e) if e.is_invalid_input()));
        assert!(!err.is_fatal());
        assert!(chat.log().is_empty());
        assert_eq!(chat.turns(), 0);
    }

    #[test]
    fn test_close_persists_once() {
        let store = Arc::new(MemoryStore::default());
        let mut chat = session(store.clone());
        chat.respond("I love this!").unwrap();
        chat.respond("I hate this.").unwrap();
        let in_memory = chat.log().clone();

        let summary = chat.close().unwrap();

        assert_eq!(store.save_count(), 1);
        assert_eq!(summary.destination, PathBuf::from("history.json"));
        assert_eq!(summary.log, in_memory);
        let saved = store.saved(Path::new("history.json")).unwrap();
        assert_eq!(ConversationLog::from(saved), in_memory);
    }

    #[test]
    fn test_dropped_session_persists_nothing() {
        let store = Arc::new(MemoryStore::default());
        {
            let mut chat = session(store.clone());
            chat.respond("I love this!").unwrap();
        }
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn test_close_storage_failure_is_fatal() {
        let mut chat = session(Arc::new(FailingStore));
        chat.respond("I love this!").unwrap();

        let err = chat.close().unwrap_err();
        assert!(err.is_fatal());
        assert!(err.to_string().contains("history.json"));
    }

    #[test]
    fn test_exit_commands() {
        let chat = session(Arc::new(MemoryStore::default()));
        assert!(chat.is_exit_command("Goodbye"));
        assert!(!chat.is_exit_command("I love this!"));
    }
}
