//! Config errors.

use thiserror::Error;

/// Failure while locating, reading, or checking a Dreamweaver config.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config is not valid JSON5: {0}")]
    Syntax(#[from] json5::Error),
    #[error("config does not match the expected shape: {0}")]
    Shape(#[from] serde_json::Error),
    /// A key or value rejected by the layer schema, located as `layer:path`.
    #[error("bad config value at {path}: {message}")]
    InvalidField { path: String, message: String },
    /// The merged config breaks a cross-field rule.
    #[error("unusable config: {0}")]
    Invalid(String),
}
