//! Conversation subdomain: timestamped message records and the ordered log.

pub mod log;
pub mod record;
