//! General application configuration.

use serde::{Deserialize, Serialize};
use tasklet_core::enums::Filter;

use crate::error::ConfigError;

fn default_filter() -> String {
    Filter::All.as_str().to_string()
}

fn default_format() -> String {
    "table".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Filter a fresh process starts with (`all`, `active`, `completed`).
    #[serde(default = "default_filter")]
    pub default_filter: String,

    /// Output format used when `--format` is not given (`table`, `json`, `raw`).
    #[serde(default = "default_format")]
    pub default_format: String,
}

impl GeneralConfig {
    /// Parse `default_filter`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for anything other than a known filter name.
    pub fn filter(&self) -> Result<Filter, ConfigError> {
        self.default_filter
            .parse()
            .map_err(|e: tasklet_core::errors::CoreError| ConfigError::InvalidValue {
                field: "general.default_filter".to_string(),
                reason: e.to_string(),
            })
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_filter: default_filter(),
            default_format: default_format(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert_eq!(config.default_filter, "all");
        assert_eq!(config.default_format, "table");
        assert_eq!(config.filter().unwrap(), Filter::All);
    }

    #[test]
    fn unknown_filter_is_invalid() {
        let config = GeneralConfig {
            default_filter: "done".into(),
            ..GeneralConfig::default()
        };
        let err = config.filter().unwrap_err();
        assert!(err.to_string().contains("general.default_filter"));
    }
}
