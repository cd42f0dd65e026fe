//! Presentation-level configuration
//!
//! Configuration for the interactive chat loop and terminal output.

use serde::{Deserialize, Serialize};

/// REPL configuration for the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplConfig {
    /// Print the sentiment analysis line after each reply
    pub show_sentiment: bool,
    /// Name used when the name prompt is left empty
    pub default_user_name: String,
    /// Use this name instead of prompting for one
    pub user_name: Option<String>,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            show_sentiment: true,
            default_user_name: "User".to_string(),
            user_name: None,
        }
    }
}

impl ReplConfig {
    /// Resolve the name typed at the prompt, falling back to the default
    pub fn resolve_user_name(&self, typed: &str) -> String {
        let typed = typed.trim();
        if typed.is_empty() {
            self.default_user_name.clone()
        } else {
            typed.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_name_falls_back() {
        let config = ReplConfig::default();
        assert_eq!(config.resolve_user_name("   "), "User");
        assert_eq!(config.resolve_user_name(" Alice "), "Alice");
    }
}
