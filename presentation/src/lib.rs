//! Presentation layer for sentiment-chat
//!
//! This crate contains CLI definitions, console formatting
//! and the interactive chat interface.

pub mod chat;
pub mod cli;
pub mod config;
pub mod output;

// Re-export commonly used types
pub use chat::{ChatRepl, SessionEnd};
pub use cli::commands::Cli;
pub use config::ReplConfig;
pub use output::console::ConsoleFormatter;
