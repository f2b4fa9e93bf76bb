//! Cross-cutting error types for Tasklet.
//!
//! Only user-supplied selectors can fail to parse here. Task operations on
//! blank text or unknown IDs are no-ops, not errors. Storage errors live in
//! `tasklet-store`, and everything converges into `anyhow` in `tasklet-cli`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// A filter name other than `all`, `active` or `completed`.
    #[error("Invalid filter '{0}' (expected all, active or completed)")]
    InvalidFilter(String),

    /// A task ID that is not an integer.
    #[error("Invalid task id '{0}'")]
    InvalidId(String),
}
