//! Chat configuration from TOML (`[chat]` section)

use sentiment_application::SessionParams;
use sentiment_application::config::{DEFAULT_EXIT_COMMANDS, DEFAULT_HISTORY_FILE};
use serde::{Deserialize, Serialize};

/// Raw chat configuration from TOML
///
/// # Example
///
/// ```toml
/// [chat]
/// history_file = "chat_history.json"
/// bot_name = "Bot"
/// default_user_name = "User"
/// show_sentiment = true
/// exit_commands = ["quit", "exit", "bye", "goodbye"]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileChatConfig {
    /// File the conversation is written to on exit
    pub history_file: String,
    /// Speaker name for bot replies
    pub bot_name: String,
    /// Name used when the user leaves the name prompt empty
    pub default_user_name: String,
    /// Print the sentiment analysis line after each reply
    pub show_sentiment: bool,
    /// Words that end the session
    pub exit_commands: Vec<String>,
}

impl Default for FileChatConfig {
    fn default() -> Self {
        Self {
            history_file: DEFAULT_HISTORY_FILE.to_string(),
            bot_name: "Bot".to_string(),
            default_user_name: "User".to_string(),
            show_sentiment: true,
            exit_commands: DEFAULT_EXIT_COMMANDS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl FileChatConfig {
    /// Convert to application-level session parameters
    pub fn to_session_params(&self) -> SessionParams {
        SessionParams::default()
            .with_bot_name(self.bot_name.clone())
            .with_exit_commands(self.exit_commands.iter().cloned())
            .with_history_file(self.history_file.clone())
    }
}
