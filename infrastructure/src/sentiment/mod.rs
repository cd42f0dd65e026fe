//! Sentiment scoring adapters.
//!
//! Provides [`LexiconSentimentScorer`], a lexicon-based implementation of the
//! [`SentimentScorer`](sentiment_application::SentimentScorer) port.

mod lexicon;
mod lexicon_scorer;

pub use lexicon::{Lexicon, LexiconError};
pub use lexicon_scorer::LexiconSentimentScorer;
