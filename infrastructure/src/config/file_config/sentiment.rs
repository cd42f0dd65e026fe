//! Sentiment scorer configuration from TOML (`[sentiment]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw sentiment configuration from TOML
///
/// Relative paths resolve against the working directory; `~` is not expanded.
///
/// ```toml
/// [sentiment]
/// lexicon = "lexicons/slang.toml"   # merged over the built-in lexicon
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSentimentConfig {
    /// Extra lexicon file merged over the built-in one
    pub lexicon: Option<PathBuf>,
}
