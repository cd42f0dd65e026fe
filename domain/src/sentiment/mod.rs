//! Sentiment subdomain.
//!
//! - [`category::SentimentCategory`]: the five polarity buckets
//! - [`result::SentimentScore`]: raw polarity/subjectivity from a scorer
//! - [`result::SentimentResult`]: score plus derived category
//! - [`response::select_response`]: category label to canned reply

pub mod category;
pub mod response;
pub mod result;
