//! Console output formatter for chat sessions

use colored::Colorize;
use sentiment_domain::{ConversationLog, MessageRecord, SentimentResult};
use std::path::Path;

/// Formats chat output for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    pub fn welcome() -> String {
        "Welcome to Sentiment Analysis Chatbot!".cyan().to_string()
    }

    pub fn name_prompt() -> String {
        "What's your name? ".cyan().to_string()
    }

    /// Greeting shown once the user is known
    pub fn greeting(name: &str, exit_commands: &[String]) -> String {
        let how_to_quit = match exit_commands {
            [] => String::new(),
            [only] => format!(" Type '{}' to end the conversation.", only),
            [first, second, ..] => {
                format!(" Type '{}' or '{}' to end the conversation.", first, second)
            }
        };
        format!("\nHello {}!{}", name, how_to_quit).cyan().to_string()
    }

    /// Prompt shown before each user line
    pub fn user_prompt(name: &str) -> String {
        format!("\n{}: ", name).yellow().to_string()
    }

    pub fn bot_line(bot_name: &str, text: &str) -> String {
        format!("\n{}: {}", bot_name, text).green().to_string()
    }

    /// One-line summary of a sentiment result
    ///
    /// `Sentiment Analysis: Very Positive (Polarity: 0.62, Subjectivity: 0.60)`
    pub fn sentiment_line(result: &SentimentResult) -> String {
        format!(
            "\nSentiment Analysis: {} (Polarity: {:.2}, Subjectivity: {:.2})",
            result.category.title(),
            result.polarity,
            result.subjectivity
        )
        .magenta()
        .to_string()
    }

    pub fn error(message: &str) -> String {
        format!("\nAn error occurred: {}", message).red().to_string()
    }

    pub fn saved(path: &Path) -> String {
        format!("\nConversation saved to {}!", path.display())
            .cyan()
            .to_string()
    }

    pub fn terminated() -> String {
        "\n\nChatbot terminated by user.".red().to_string()
    }

    pub fn help(exit_commands: &[String]) -> String {
        let mut output = String::new();
        output.push_str(&format!("\n{}\n", "Commands:".cyan().bold()));
        output.push_str("  /help    - Show this help\n");
        output.push_str("  /stats   - Show the sentiment of this conversation so far\n");
        output.push_str(&format!("  {:<8} - Save and exit", exit_commands.join(", ")));
        output
    }

    /// Turn count and category distribution for the session so far
    pub fn stats(log: &ConversationLog, turns: usize) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "\n{} {}\n",
            "Turns so far:".cyan().bold(),
            turns
        ));
        for (category, count) in log.category_counts() {
            output.push_str(&format!("  {:<14} {}\n", category.title(), count));
        }
        output.trim_end().to_string()
    }

    /// Render a saved conversation, one record per line
    pub fn transcript(log: &ConversationLog) -> String {
        if log.is_empty() {
            return "(empty conversation)".dimmed().to_string();
        }
        log.iter()
            .map(Self::transcript_line)
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn transcript_line(record: &MessageRecord) -> String {
        let mut line = format!(
            "{} {}: {}",
            format!("[{}]", record.timestamp()).dimmed(),
            record.speaker().bold(),
            record.message()
        );
        if let Some(sentiment) = record.sentiment() {
            line.push_str(
                &format!(
                    "  ({}, polarity {:.2})",
                    sentiment.category.title(),
                    sentiment.polarity
                )
                .magenta()
                .to_string(),
            );
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sentiment_domain::SentimentScore;

    fn plain() {
        colored::control::set_override(false);
    }

    fn sentiment(polarity: f64, subjectivity: f64) -> SentimentResult {
        SentimentResult::from_score(SentimentScore::new(polarity, subjectivity).unwrap())
    }

    #[test]
    fn test_sentiment_line_two_decimals() {
        plain();
        let line = ConsoleFormatter::sentiment_line(&sentiment(0.5833, 0.6));
        assert_eq!(
            line,
            "\nSentiment Analysis: Very Positive (Polarity: 0.58, Subjectivity: 0.60)"
        );
    }

    #[test]
    fn test_greeting_lists_first_two_exit_commands() {
        plain();
        let commands: Vec<String> = ["quit", "exit", "bye"].iter().map(|s| s.to_string()).collect();
        assert_eq!(
            ConsoleFormatter::greeting("Alice", &commands),
            "\nHello Alice! Type 'quit' or 'exit' to end the conversation."
        );
        assert_eq!(
            ConsoleFormatter::greeting("Alice", &commands[..1]),
            "\nHello Alice! Type 'quit' to end the conversation."
        );
    }

    #[test]
    fn test_bot_line() {
        plain();
        assert_eq!(ConsoleFormatter::bot_line("Bot", "Hi"), "\nBot: Hi");
    }

    #[test]
    fn test_transcript() {
        plain();
        let log = ConversationLog::from(vec![
            MessageRecord::new(
                "2024-03-21 10:00:00",
                "Alice",
                "I hate this.",
                Some(sentiment(-0.8, 0.9)),
            ),
            MessageRecord::new("2024-03-21 10:00:00", "Bot", "I hear you.", None),
        ]);

        let output = ConsoleFormatter::transcript(&log);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            lines[0],
            "[2024-03-21 10:00:00] Alice: I hate this.  (Very Negative, polarity -0.80)"
        );
        assert_eq!(lines[1], "[2024-03-21 10:00:00] Bot: I hear you.");
    }

    #[test]
    fn test_empty_transcript() {
        plain();
        assert_eq!(
            ConsoleFormatter::transcript(&ConversationLog::new()),
            "(empty conversation)"
        );
    }

    #[test]
    fn test_stats_counts_categories() {
        plain();
        let log = ConversationLog::from(vec![MessageRecord::new(
            "2024-03-21 10:00:00",
            "Alice",
            "I love this!",
            Some(sentiment(0.625, 0.6)),
        )]);

        let output = ConsoleFormatter::stats(&log, 1);
        assert!(output.contains("Turns so far: 1"));
        assert!(output.contains("Very Positive  1"));
        assert!(output.contains("Neutral        0"));
    }
}
