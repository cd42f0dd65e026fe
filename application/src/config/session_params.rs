//! Session parameters for chat session control.
//!
//! [`SessionParams`] groups the static parameters of a
//! [`ChatSession`](crate::use_cases::chat_session::ChatSession).
//! These are application-layer concerns, not domain policy.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default file the conversation is written to on exit.
pub const DEFAULT_HISTORY_FILE: &str = "chat_history.json";

/// Words that end the session, matched case-insensitively.
pub const DEFAULT_EXIT_COMMANDS: [&str; 4] = ["quit", "exit", "bye", "goodbye"];

/// Chat session parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionParams {
    /// Speaker name recorded for the bot's replies.
    pub bot_name: String,
    /// Input words that close the session and trigger persistence.
    pub exit_commands: Vec<String>,
    /// Destination the conversation is persisted to on close.
    pub history_file: PathBuf,
}

impl Default for SessionParams {
    fn default() -> Self {
        Self {
            bot_name: "Bot".to_string(),
            exit_commands: DEFAULT_EXIT_COMMANDS.iter().map(|s| s.to_string()).collect(),
            history_file: PathBuf::from(DEFAULT_HISTORY_FILE),
        }
    }
}

impl SessionParams {
    // ==================== Builder Methods ====================

    pub fn with_bot_name(mut self, name: impl Into<String>) -> Self {
        self.bot_name = name.into();
        self
    }

    pub fn with_exit_commands<I, S>(mut self, commands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exit_commands = commands.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_history_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.history_file = path.into();
        self
    }

    /// Whether `input` is one of the exit commands.
    ///
    /// Surrounding whitespace and case are ignored.
    pub fn is_exit_command(&self, input: &str) -> bool {
        let input = input.trim();
        self.exit_commands
            .iter()
            .any(|cmd| cmd.eq_ignore_ascii_case(input))
    }
}
