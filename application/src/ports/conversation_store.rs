//! Port for durable conversation storage.
//!
//! A store writes the full ordered list of records to a destination in one
//! go, replacing whatever was there, and can read such a file back.

use sentiment_domain::{ConversationLog, MessageRecord};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while persisting or loading a conversation.
///
/// Every variant keeps the destination path and the underlying cause.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Error saving conversation to {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Error reading conversation from {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Could not encode conversation for {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Could not decode conversation from {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl StorageError {
    /// Destination the failed operation targeted
    pub fn path(&self) -> &Path {
        match self {
            StorageError::Write { path, .. }
            | StorageError::Read { path, .. }
            | StorageError::Encode { path, .. }
            | StorageError::Decode { path, .. } => path,
        }
    }
}

/// Durable storage for conversation logs.
pub trait ConversationStore: Send + Sync {
    /// Overwrite `destination` with all of `records`, in order.
    ///
    /// Either the whole log is written or an error is returned; a failed
    /// call never leaves a half-written destination behind.
    fn save(&self, records: &[MessageRecord], destination: &Path) -> Result<(), StorageError>;

    /// Read a log previously written by [`save`](Self::save).
    fn load(&self, source: &Path) -> Result<ConversationLog, StorageError>;
}
