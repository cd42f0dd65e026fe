//! JSON file writer for conversation logs.
//!
//! The whole log is written as one pretty-printed JSON array (4-space
//! indent). Writes go to a hidden sibling file first and are renamed over the
//! destination, so a failed save never leaves a truncated file behind.
//! A symlinked destination is written through to its target, and an existing
//! file keeps its permissions.

use sentiment_application::{ConversationStore, StorageError};
use sentiment_domain::{ConversationLog, MessageRecord};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const INDENT: &[u8] = b"    ";

/// Conversation store that writes a JSON array file.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFileConversationStore;

impl JsonFileConversationStore {
    pub fn new() -> Self {
        Self
    }

    /// Serialize records exactly as they are written to disk.
    pub fn to_json(records: &[MessageRecord], destination: &Path) -> Result<Vec<u8>, StorageError> {
        let mut buf = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
        records
            .serialize(&mut serializer)
            .map_err(|source| StorageError::Encode {
                path: destination.to_path_buf(),
                source,
            })?;
        Ok(buf)
    }

    fn temp_path(destination: &Path) -> PathBuf {
        let file_name = destination
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "conversation".to_string());
        destination.with_file_name(format!(".{file_name}.tmp"))
    }

    /// The file that actually gets replaced: the link target for a symlink.
    fn resolve_target(destination: &Path) -> PathBuf {
        match std::fs::symlink_metadata(destination) {
            Ok(meta) if meta.file_type().is_symlink() => {
                std::fs::canonicalize(destination).unwrap_or_else(|_| destination.to_path_buf())
            }
            _ => destination.to_path_buf(),
        }
    }

    fn write_atomically(bytes: &[u8], destination: &Path) -> std::io::Result<()> {
        let target = Self::resolve_target(destination);
        let temp = Self::temp_path(&target);
        let permissions = std::fs::metadata(&target).ok().map(|m| m.permissions());

        let result = File::create(&temp)
            .and_then(|mut file| {
                file.write_all(bytes)?;
                if let Some(permissions) = permissions {
                    file.set_permissions(permissions)?;
                }
                file.sync_all()
            })
            .and_then(|()| std::fs::rename(&temp, &target));

        if result.is_err() && temp.exists() {
            let _ = std::fs::remove_file(&temp);
        }
        result
    }
}

impl ConversationStore for JsonFileConversationStore {
    fn save(&self, records: &[MessageRecord], destination: &Path) -> Result<(), StorageError> {
        let bytes = Self::to_json(records, destination)?;

        Self::write_atomically(&bytes, destination).map_err(|source| {
            warn!(
                "Could not write conversation file {}: {}",
                destination.display(),
                source
            );
            StorageError::Write {
                path: destination.to_path_buf(),
                source,
            }
        })?;

        debug!(
            "Wrote {} records ({} bytes) to {}",
            records.len(),
            bytes.len(),
            destination.display()
        );
        Ok(())
    }

    fn load(&self, source: &Path) -> Result<ConversationLog, StorageError> {
        let content = std::fs::read_to_string(source).map_err(|e| StorageError::Read {
            path: source.to_path_buf(),
            source: e,
        })?;

        serde_json::from_str(&content).map_err(|e| StorageError::Decode {
            path: source.to_path_buf(),
            source: e,
        })
    }
}
