//! Sentiment lexicon loaded from TOML.
//!
//! The built-in English lexicon is embedded at compile time; an extra lexicon
//! file can be merged over it to add or override entries.

use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use thiserror::Error;

const BUILTIN_LEXICON: &str = include_str!("en-lexicon.toml");

/// Errors raised while loading a lexicon
#[derive(Error, Debug)]
pub enum LexiconError {
    #[error("Could not read lexicon {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid lexicon TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid lexicon entry '{word}': {reason}")]
    InvalidEntry { word: String, reason: String },
}

/// Word-level sentiment scores.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WordScore {
    pub polarity: f64,
    pub subjectivity: f64,
}

/// Raw lexicon file layout
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct LexiconFile {
    negations: Vec<String>,
    intensifiers: HashMap<String, f64>,
    emoticons: HashMap<String, f64>,
    words: HashMap<String, (f64, f64)>,
}

/// Lookup tables used by the lexicon scorer.
///
/// All keys are stored lowercase.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    words: HashMap<String, WordScore>,
    intensifiers: HashMap<String, f64>,
    emoticons: HashMap<String, f64>,
    negations: HashSet<String>,
}

impl Lexicon {
    /// The embedded English lexicon
    pub fn builtin() -> Result<Self, LexiconError> {
        Self::from_toml_str(BUILTIN_LEXICON)
    }

    pub fn from_toml_str(source: &str) -> Result<Self, LexiconError> {
        let file: LexiconFile = toml::from_str(source)?;
        Self::from_file_layout(file)
    }

    pub fn from_path(path: &Path) -> Result<Self, LexiconError> {
        let source = std::fs::read_to_string(path).map_err(|source| LexiconError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    fn from_file_layout(file: LexiconFile) -> Result<Self, LexiconError> {
        let mut words = HashMap::with_capacity(file.words.len());
        for (word, (polarity, subjectivity)) in file.words {
            if !(-1.0..=1.0).contains(&polarity) {
                return Err(invalid(&word, format!("polarity {polarity} outside [-1, 1]")));
            }
            if !(0.0..=1.0).contains(&subjectivity) {
                return Err(invalid(
                    &word,
                    format!("subjectivity {subjectivity} outside [0, 1]"),
                ));
            }
            words.insert(
                word.to_lowercase(),
                WordScore {
                    polarity,
                    subjectivity,
                },
            );
        }

        let mut intensifiers = HashMap::with_capacity(file.intensifiers.len());
        for (word, multiplier) in file.intensifiers {
            if !(multiplier.is_finite() && multiplier > 0.0) {
                return Err(invalid(
                    &word,
                    format!("multiplier {multiplier} must be positive"),
                ));
            }
            intensifiers.insert(word.to_lowercase(), multiplier);
        }

        let mut emoticons = HashMap::with_capacity(file.emoticons.len());
        for (emoticon, polarity) in file.emoticons {
            if !(-1.0..=1.0).contains(&polarity) {
                return Err(invalid(
                    &emoticon,
                    format!("polarity {polarity} outside [-1, 1]"),
                ));
            }
            emoticons.insert(emoticon.to_lowercase(), polarity);
        }

        let negations = file.negations.iter().map(|w| w.to_lowercase()).collect();

        Ok(Self {
            words,
            intensifiers,
            emoticons,
            negations,
        })
    }

    /// Merge `other` into this lexicon; entries in `other` win.
    pub fn merge(&mut self, other: Lexicon) {
        self.words.extend(other.words);
        self.intensifiers.extend(other.intensifiers);
        self.emoticons.extend(other.emoticons);
        self.negations.extend(other.negations);
    }

    pub fn word(&self, word: &str) -> Option<WordScore> {
        self.words.get(word).copied()
    }

    pub fn intensifier(&self, word: &str) -> Option<f64> {
        self.intensifiers.get(word).copied()
    }

    pub fn emoticon(&self, token: &str) -> Option<f64> {
        self.emoticons.get(token).copied()
    }

    /// `not`, `never`, ... and any contraction ending in `n't`
    pub fn is_negation(&self, word: &str) -> bool {
        self.negations.contains(word) || word.ends_with("n't")
    }

    /// Number of scored words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

fn invalid(word: &str, reason: String) -> LexiconError {
    LexiconError::InvalidEntry {
        word: word.to_string(),
        reason,
    }
}
