//! CLI entrypoint for sentiment-chat
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use sentiment_application::{
    ClassifySentimentUseCase, ConversationStore, SentimentScorer, SessionParams,
};
use sentiment_infrastructure::{
    ConfigLoader, FileConfig, JsonFileConversationStore, LexiconSentimentScorer, Severity,
};
use sentiment_presentation::{ChatRepl, Cli, ConsoleFormatter, ReplConfig, SessionEnd};
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Held until exit so buffered log lines reach the file
    let _guard = init_tracing(cli.verbose, cli.log_file.as_deref())?;

    info!("Starting sentiment-chat");

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(ExitCode::SUCCESS);
    }

    // === Configuration ===
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {e}"))?
    };

    let issues = config.validate();
    for issue in &issues {
        match issue.severity {
            Severity::Warning => warn!("Config: {}", issue),
            Severity::Error => eprintln!("{}", ConsoleFormatter::error(&issue.to_string())),
        }
    }
    if FileConfig::has_errors(&issues) {
        bail!("Invalid configuration");
    }

    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    // === Dependency Injection ===
    let store: Arc<dyn ConversationStore> = Arc::new(JsonFileConversationStore::new());

    if let Some(path) = &cli.replay {
        let log = store.load(path)?;
        println!("{}", ConsoleFormatter::transcript(&log));
        return Ok(ExitCode::SUCCESS);
    }

    let scorer = build_scorer(cli.lexicon.as_deref().or(config.sentiment.lexicon.as_deref()))?;
    info!("Using {} scorer", scorer.name());

    // Single message mode
    if let Some(text) = &cli.text {
        let classifier = ClassifySentimentUseCase::new(scorer);
        let sentiment = classifier.execute(text)?;
        println!("{}", sentiment.response());
        if !cli.hide_sentiment && config.chat.show_sentiment {
            println!("{}", ConsoleFormatter::sentiment_line(&sentiment));
        }
        return Ok(ExitCode::SUCCESS);
    }

    // Chat mode
    let params = session_params(&cli, &config);
    let repl_config = ReplConfig {
        show_sentiment: !cli.hide_sentiment && config.chat.show_sentiment,
        default_user_name: config.chat.default_user_name.clone(),
        user_name: cli.name.clone(),
    };

    let repl = ChatRepl::new(scorer, store, params).with_config(repl_config);
    let end = repl.run().context("Terminal error")?;

    Ok(match end {
        SessionEnd::Saved | SessionEnd::Aborted => ExitCode::SUCCESS,
        SessionEnd::SaveFailed => ExitCode::FAILURE,
    })
}

/// Initialize logging based on verbosity level
///
/// `RUST_LOG` takes precedence over `-v` flags when set.
fn init_tracing(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    });

    match log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Cannot open log file {}", path.display()))?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(writer)
                .init();
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
            Ok(None)
        }
    }
}

fn build_scorer(extra_lexicon: Option<&Path>) -> Result<Arc<dyn SentimentScorer>> {
    let scorer = match extra_lexicon {
        Some(path) => LexiconSentimentScorer::with_extra_lexicon(path)?,
        None => LexiconSentimentScorer::builtin()?,
    };
    Ok(Arc::new(scorer))
}

/// Config file values with command-line overrides applied
fn session_params(cli: &Cli, config: &FileConfig) -> SessionParams {
    let params = config.chat.to_session_params();
    match &cli.history_file {
        Some(path) => params.with_history_file(path),
        None => params,
    }
}
