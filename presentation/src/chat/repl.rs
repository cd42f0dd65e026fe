//! REPL (Read-Eval-Print Loop) for interactive chat

use crate::ConsoleFormatter;
use crate::config::ReplConfig;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use sentiment_application::{ChatSession, ConversationStore, SentimentScorer, SessionParams};
use std::sync::Arc;
use tracing::{debug, warn};

/// How a chat session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// Exit command typed and the conversation was saved
    Saved,
    /// Exit command typed but saving failed
    SaveFailed,
    /// Ctrl-C, Ctrl-D or a terminal error; nothing was saved
    Aborted,
}

/// What the loop should do with one line of input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineAction {
    Skip,
    Exit,
    Command,
    Chat,
}

/// Interactive chat REPL
pub struct ChatRepl {
    scorer: Arc<dyn SentimentScorer>,
    store: Arc<dyn ConversationStore>,
    params: SessionParams,
    config: ReplConfig,
}

impl ChatRepl {
    /// Create a new ChatRepl
    pub fn new(
        scorer: Arc<dyn SentimentScorer>,
        store: Arc<dyn ConversationStore>,
        params: SessionParams,
    ) -> Self {
        Self {
            scorer,
            store,
            params,
            config: ReplConfig::default(),
        }
    }

    /// Set the presentation options
    pub fn with_config(mut self, config: ReplConfig) -> Self {
        self.config = config;
        self
    }

    /// Run the interactive REPL
    pub fn run(&self) -> RlResult<SessionEnd> {
        let mut rl = DefaultEditor::new()?;

        println!("{}", ConsoleFormatter::welcome());

        let user_name = match &self.config.user_name {
            Some(name) => self.config.resolve_user_name(name),
            None => match rl.readline(&ConsoleFormatter::name_prompt()) {
                Ok(typed) => self.config.resolve_user_name(&typed),
                Err(ReadlineError::Interrupted | ReadlineError::Eof) => {
                    println!("{}", ConsoleFormatter::terminated());
                    return Ok(SessionEnd::Aborted);
                }
                Err(err) => return Err(err),
            },
        };

        let mut session = ChatSession::new(
            user_name,
            self.params.clone(),
            self.scorer.clone(),
            self.store.clone(),
        );

        println!(
            "{}",
            ConsoleFormatter::greeting(session.user_name(), &self.params.exit_commands)
        );
        println!(
            "{}",
            ConsoleFormatter::bot_line(session.bot_name(), "How are you feeling today?")
        );

        loop {
            let readline = rl.readline(&ConsoleFormatter::user_prompt(session.user_name()));

            match readline {
                Ok(line) => match self.classify_line(&session, &line) {
                    LineAction::Exit => return Ok(self.finish(session)),
                    LineAction::Command => {
                        let _ = rl.add_history_entry(line.trim());
                        self.handle_command(&session, line.trim());
                    }
                    LineAction::Skip | LineAction::Chat => {
                        if !line.trim().is_empty() {
                            let _ = rl.add_history_entry(line.trim());
                        }
                        self.process_line(&mut session, &line);
                    }
                },
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                    // The log is dropped unsaved
                    debug!("Session aborted after {} turns", session.turns());
                    println!("{}", ConsoleFormatter::terminated());
                    return Ok(SessionEnd::Aborted);
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    return Ok(SessionEnd::Aborted);
                }
            }
        }
    }

    fn classify_line(&self, session: &ChatSession, line: &str) -> LineAction {
        let line = line.trim();
        if line.is_empty() {
            LineAction::Skip
        } else if session.is_exit_command(line) {
            LineAction::Exit
        } else if line.starts_with('/') && Self::is_known_command(line) {
            LineAction::Command
        } else {
            LineAction::Chat
        }
    }

    fn is_known_command(line: &str) -> bool {
        matches!(line, "/help" | "/h" | "/?" | "/stats")
    }

    fn handle_command(&self, session: &ChatSession, cmd: &str) {
        match cmd {
            "/help" | "/h" | "/?" => {
                println!("{}", ConsoleFormatter::help(&self.params.exit_commands));
            }
            "/stats" => {
                println!(
                    "{}",
                    ConsoleFormatter::stats(session.log(), session.turns())
                );
            }
            _ => {}
        }
    }

    /// Blank lines go through the classifier too, so they are reported
    /// as an invalid-input error for the turn.
    fn process_line(&self, session: &mut ChatSession, line: &str) {
        match session.respond(line) {
            Ok(turn) => {
                println!(
                    "{}",
                    ConsoleFormatter::bot_line(session.bot_name(), turn.reply)
                );
                if self.config.show_sentiment {
                    println!("{}", ConsoleFormatter::sentiment_line(&turn.sentiment));
                }
            }
            Err(e) => {
                println!("{}", ConsoleFormatter::error(&e.to_string()));
            }
        }
    }

    fn finish(&self, session: ChatSession) -> SessionEnd {
        println!(
            "{}",
            ConsoleFormatter::bot_line(session.bot_name(), "Goodbye! Take care!")
        );
        match session.close() {
            Ok(summary) => {
                println!("{}", ConsoleFormatter::saved(&summary.destination));
                SessionEnd::Saved
            }
            Err(e) => {
                warn!("Conversation was not saved: {}", e);
                println!("{}", ConsoleFormatter::error(&e.to_string()));
                SessionEnd::SaveFailed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sentiment_application::{ScorerError, StorageError};
    use sentiment_domain::{ConversationLog, MessageRecord, SentimentScore};
    use std::path::Path;

    struct NeutralScorer;

    impl SentimentScorer for NeutralScorer {
        fn score(&self, _text: &str) -> Result<SentimentScore, ScorerError> {
            Ok(SentimentScore::neutral())
        }
    }

    struct NullStore;

    impl ConversationStore for NullStore {
        fn save(&self, _records: &[MessageRecord], _destination: &Path) -> Result<(), StorageError> {
            Ok(())
        }

        fn load(&self, _source: &Path) -> Result<ConversationLog, StorageError> {
            Ok(ConversationLog::new())
        }
    }

    fn repl() -> ChatRepl {
        ChatRepl::new(
            Arc::new(NeutralScorer),
            Arc::new(NullStore),
            SessionParams::default(),
        )
    }

    fn session(repl: &ChatRepl) -> ChatSession {
        ChatSession::new(
            "Alice",
            repl.params.clone(),
            repl.scorer.clone(),
            repl.store.clone(),
        )
    }

    #[test]
    fn test_classify_line() {
        let repl = repl();
        let session = session(&repl);

        assert_eq!(repl.classify_line(&session, "  "), LineAction::Skip);
        assert_eq!(repl.classify_line(&session, "Bye"), LineAction::Exit);
        assert_eq!(repl.classify_line(&session, " GOODBYE "), LineAction::Exit);
        assert_eq!(repl.classify_line(&session, "/stats"), LineAction::Command);
        assert_eq!(repl.classify_line(&session, "/shrug"), LineAction::Chat);
        assert_eq!(repl.classify_line(&session, "hello"), LineAction::Chat);
    }

    #[test]
    fn test_process_line_records_turn() {
        let repl = repl();
        let mut session = session(&repl);

        repl.process_line(&mut session, "hello there");
        assert_eq!(session.turns(), 1);
        assert_eq!(session.log().len(), 2);

        // Blank input is reported, not recorded
        repl.process_line(&mut session, "   ");
        assert_eq!(session.turns(), 1);
    }

    #[test]
    fn test_finish_saves() {
        let repl = repl();
        let mut session = session(&repl);
        repl.process_line(&mut session, "hello");
        assert_eq!(repl.finish(session), SessionEnd::Saved);
    }
}
