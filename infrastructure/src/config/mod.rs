//! Configuration file loading for sentiment-chat
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `SENTIMENT_CHAT_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./sentiment-chat.toml` or `./.sentiment-chat.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/sentiment-chat/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigIssue, FileChatConfig, FileConfig, FileOutputConfig, FileSentimentConfig, Severity,
};
pub use loader::ConfigLoader;
