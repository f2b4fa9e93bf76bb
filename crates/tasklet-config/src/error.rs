use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A layer failed to parse, or the merged result did not fit `TaskletConfig`.
    #[error("failed to load configuration: {0}")]
    Figment(#[from] figment::Error),

    /// An enumerated setting (`storage.backend`, `general.default_filter`) holds an unknown name.
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}
