use thiserror::Error;

/// Errors raised while loading or checking [`crate::CubikConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A layer failed to parse or did not match the config shape.
    #[error("failed to load configuration: {0}")]
    Figment(#[from] figment::Error),

    /// A section an operation depends on is empty.
    #[error("'{section}' is not configured: {hint}")]
    NotConfigured { section: String, hint: String },

    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}
