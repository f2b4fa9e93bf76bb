//! Storage error types for tasklet-store.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from writing to (or opening) a storage medium.
///
/// Reads never surface these to `TaskStore` callers: malformed or unreadable
/// persisted data degrades to an empty task list and the light theme.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem operation failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The task collection could not be serialized.
    #[error("Serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// A key that cannot be mapped onto the medium (e.g. contains a path separator).
    #[error("Invalid storage key '{0}'")]
    InvalidKey(String),
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
