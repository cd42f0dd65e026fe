//! Lexicon-based sentiment scorer.
//!
//! Scores text by averaging the polarity and subjectivity of every
//! recognised word or emoticon. Context rules:
//!
//! - an intensifier (`very`, `really`, ...) multiplies the next scored word
//!   and is kept across words of two letters or fewer
//! - a negation (`not`, `never`, `...n't`) flips and halves the next scored
//!   word and is kept across one-letter words ("not a good idea")
//! - `!` boosts the previous assessment's polarity by 25%
//!
//! Text without any recognised word scores `(0.0, 0.0)`.

use super::lexicon::{Lexicon, LexiconError};
use sentiment_application::{ScorerError, SentimentScorer};
use sentiment_domain::SentimentScore;
use std::path::Path;
use tracing::{debug, trace};

const EXCLAMATION_BOOST: f64 = 1.25;
const NEGATION_FACTOR: f64 = -0.5;

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Word(String),
    Emoticon(f64),
    Exclamation,
}

#[derive(Debug, Clone, Copy)]
struct Assessment {
    polarity: f64,
    subjectivity: f64,
    negated: bool,
}

impl Assessment {
    fn final_polarity(&self) -> f64 {
        if self.negated {
            self.polarity * NEGATION_FACTOR
        } else {
            self.polarity
        }
    }
}

/// [`SentimentScorer`] adapter backed by a [`Lexicon`].
#[derive(Debug, Clone)]
pub struct LexiconSentimentScorer {
    lexicon: Lexicon,
}

impl LexiconSentimentScorer {
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    /// Scorer using the embedded English lexicon
    pub fn builtin() -> Result<Self, LexiconError> {
        Ok(Self::new(Lexicon::builtin()?))
    }

    /// Built-in lexicon with an extra lexicon file merged on top
    pub fn with_extra_lexicon(path: &Path) -> Result<Self, LexiconError> {
        let mut lexicon = Lexicon::builtin()?;
        lexicon.merge(Lexicon::from_path(path)?);
        debug!("Merged extra lexicon from {}", path.display());
        Ok(Self::new(lexicon))
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    fn tokenize(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();

        for chunk in text.split_whitespace() {
            let chunk = chunk.to_lowercase();
            if let Some(polarity) = self.lexicon.emoticon(&chunk) {
                tokens.push(Token::Emoticon(polarity));
                continue;
            }

            let mut word = String::new();
            for c in chunk.chars() {
                if c.is_alphanumeric() || c == '\'' || c == '\u{2019}' {
                    word.push(if c == '\u{2019}' { '\'' } else { c });
                    continue;
                }
                push_word(&mut tokens, &mut word);
                if c == '!' {
                    tokens.push(Token::Exclamation);
                }
            }
            push_word(&mut tokens, &mut word);
        }

        tokens
    }

    fn assess(&self, tokens: &[Token]) -> Vec<Assessment> {
        let mut assessments: Vec<Assessment> = Vec::new();
        let mut modifier: Option<f64> = None;
        let mut negated = false;

        for token in tokens {
            match token {
                Token::Exclamation => {
                    if let Some(last) = assessments.last_mut() {
                        last.polarity = (last.polarity * EXCLAMATION_BOOST).clamp(-1.0, 1.0);
                    }
                }
                Token::Emoticon(polarity) => {
                    assessments.push(Assessment {
                        polarity: *polarity,
                        subjectivity: 1.0,
                        negated: false,
                    });
                }
                Token::Word(word) => {
                    if let Some(score) = self.lexicon.word(word) {
                        let multiplier = modifier.take().unwrap_or(1.0);
                        assessments.push(Assessment {
                            polarity: (score.polarity * multiplier).clamp(-1.0, 1.0),
                            subjectivity: (score.subjectivity * multiplier).clamp(0.0, 1.0),
                            negated,
                        });
                        negated = false;
                    } else if self.lexicon.is_negation(word) {
                        negated = true;
                    } else if let Some(multiplier) = self.lexicon.intensifier(word) {
                        modifier = Some(multiplier);
                    } else {
                        if word.chars().count() > 1 {
                            negated = false;
                        }
                        if word.chars().count() > 2 {
                            modifier = None;
                        }
                    }
                }
            }
        }

        assessments
    }
}

fn push_word(tokens: &mut Vec<Token>, word: &mut String) {
    let trimmed = word.trim_matches('\'');
    if !trimmed.is_empty() {
        tokens.push(Token::Word(trimmed.to_string()));
    }
    word.clear();
}

impl SentimentScorer for LexiconSentimentScorer {
    fn score(&self, text: &str) -> Result<SentimentScore, ScorerError> {
        let tokens = self.tokenize(text);
        let assessments = self.assess(&tokens);
        trace!(
            tokens = tokens.len(),
            assessments = assessments.len(),
            "Lexicon assessment"
        );

        if assessments.is_empty() {
            return Ok(SentimentScore::neutral());
        }

        let n = assessments.len() as f64;
        let polarity = assessments.iter().map(Assessment::final_polarity).sum::<f64>() / n;
        let subjectivity = assessments.iter().map(|a| a.subjectivity).sum::<f64>() / n;

        SentimentScore::new(polarity, subjectivity)
            .map_err(|e| ScorerError::InvalidScore(e.to_string()))
    }

    fn name(&self) -> &str {
        "lexicon"
    }
}
