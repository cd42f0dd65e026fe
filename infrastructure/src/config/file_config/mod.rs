//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to application types where
//! appropriate.

mod chat;
mod output;
mod sentiment;

pub use chat::FileChatConfig;
pub use output::FileOutputConfig;
pub use sentiment::FileSentimentConfig;

use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Chat session settings
    pub chat: FileChatConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Sentiment scorer settings
    pub sentiment: FileSentimentConfig,
}

/// Severity of a configuration issue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The value is ignored and a default is used instead
    Warning,
    /// The configuration cannot be used
    Error,
}

/// A problem found while validating the configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigIssue {
    pub severity: Severity,
    /// Dotted path of the offending field (e.g. `chat.bot_name`)
    pub field: String,
    pub message: String,
}

impl ConfigIssue {
    fn error(field: &str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            field: field.to_string(),
            message: message.into(),
        }
    }

    fn warning(field: &str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.chat.history_file.trim().is_empty() {
            issues.push(ConfigIssue::error(
                "chat.history_file",
                "history file path must not be empty",
            ));
        }

        if self.chat.bot_name.trim().is_empty() {
            issues.push(ConfigIssue::error(
                "chat.bot_name",
                "bot name must not be empty",
            ));
        }

        if self.chat.exit_commands.is_empty() {
            issues.push(ConfigIssue::error(
                "chat.exit_commands",
                "at least one exit command is required to end a session",
            ));
        }

        for command in &self.chat.exit_commands {
            if command.trim().is_empty() || command.trim() != command {
                issues.push(ConfigIssue::warning(
                    "chat.exit_commands",
                    format!("exit command '{command}' has surrounding whitespace and never matches"),
                ));
            }
        }

        if let Some(path) = &self.sentiment.lexicon
            && !path.exists()
        {
            issues.push(ConfigIssue::error(
                "sentiment.lexicon",
                format!("lexicon file {} does not exist", path.display()),
            ));
        }

        issues
    }

    /// Whether any issue prevents the configuration from being used
    pub fn has_errors(issues: &[ConfigIssue]) -> bool {
        issues.iter().any(|i| i.severity == Severity::Error)
    }
}
