//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for sentiment-chat
#[derive(Parser, Debug)]
#[command(name = "sentiment-chat")]
#[command(author, version, about = "Chatbot that replies to how your messages feel")]
#[command(long_about = r#"
sentiment-chat rates the sentiment of everything you type and answers with a
reply that fits the mood.

Each message is scored for polarity (-1.0 to 1.0) and subjectivity (0.0 to 1.0)
and placed in one of five categories: very positive, positive, neutral,
negative, very negative.

Type 'quit', 'exit', 'bye' or 'goodbye' to end the chat; the conversation is
then saved as JSON. Ctrl-C ends the chat without saving.

Configuration files are loaded from (in priority order):
1. SENTIMENT_CHAT_* environment variables
2. --config <path>     Explicit config file
3. ./sentiment-chat.toml       Project-level config
4. ~/.config/sentiment-chat/config.toml   Global config

Example:
  sentiment-chat
  sentiment-chat --name Alice --history-file today.json
  sentiment-chat "I love this!"
  sentiment-chat --replay chat_history.json
"#)]
pub struct Cli {
    /// Analyze this text once and exit (nothing is saved)
    pub text: Option<String>,

    /// Your name (skips the name prompt)
    #[arg(short, long, value_name = "NAME")]
    pub name: Option<String>,

    /// File the conversation is saved to on exit
    #[arg(long, value_name = "PATH")]
    pub history_file: Option<PathBuf>,

    /// Print a saved conversation and exit
    #[arg(long, value_name = "PATH", conflicts_with = "text")]
    pub replay: Option<PathBuf>,

    /// Extra lexicon (TOML) merged over the built-in one
    #[arg(long, value_name = "PATH")]
    pub lexicon: Option<PathBuf>,

    /// Hide the sentiment analysis line after each reply
    #[arg(long)]
    pub hide_sentiment: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Write diagnostic logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
