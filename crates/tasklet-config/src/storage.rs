//! Storage medium configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Which key-value medium backs the task list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// One file per key inside `dir`.
    File,
    /// Process memory only; nothing survives a restart.
    Memory,
}

fn default_backend() -> String {
    "file".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Data directory. Empty means the platform data dir (`~/.local/share/tasklet` on Linux).
    #[serde(default)]
    pub dir: String,

    /// `file` or `memory`.
    #[serde(default = "default_backend")]
    pub backend: String,
}

impl StorageConfig {
    /// Parse `backend`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for an unknown backend name.
    pub fn backend(&self) -> Result<StorageBackend, ConfigError> {
        match self.backend.trim().to_ascii_lowercase().as_str() {
            "file" => Ok(StorageBackend::File),
            "memory" => Ok(StorageBackend::Memory),
            other => Err(ConfigError::InvalidValue {
                field: "storage.backend".to_string(),
                reason: format!("unknown backend '{other}' (expected file or memory)"),
            }),
        }
    }

    /// Resolve the data directory, falling back to the platform default.
    ///
    /// Returns `None` only when `dir` is unset and the platform has no data dir.
    #[must_use]
    pub fn resolved_dir(&self) -> Option<PathBuf> {
        if self.dir.is_empty() {
            dirs::data_local_dir().map(|p| p.join("tasklet"))
        } else {
            Some(PathBuf::from(&self.dir))
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: String::new(),
            backend: default_backend(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_file_backend() {
        let config = StorageConfig::default();
        assert_eq!(config.backend().unwrap(), StorageBackend::File);
        assert!(config.dir.is_empty());
    }

    #[test]
    fn explicit_dir_wins() {
        let config = StorageConfig {
            dir: "/tmp/tasks".into(),
            ..StorageConfig::default()
        };
        assert_eq!(config.resolved_dir(), Some(PathBuf::from("/tmp/tasks")));
    }

    #[test]
    fn backend_is_case_insensitive() {
        let config = StorageConfig {
            backend: "Memory".into(),
            ..StorageConfig::default()
        };
        assert_eq!(config.backend().unwrap(), StorageBackend::Memory);
    }

    #[test]
    fn unknown_backend_is_invalid() {
        let config = StorageConfig {
            backend: "sqlite".into(),
            ..StorageConfig::default()
        };
        assert!(matches!(
            config.backend(),
            Err(ConfigError::InvalidValue { ref field, .. }) if field == "storage.backend"
        ));
    }
}
