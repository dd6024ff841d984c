//! Error types for filter operations.

use thiserror::Error;

/// Error type for filter construction, application and persistence.
#[derive(Error, Debug)]
pub enum OpsError {
    /// Invalid dimensions specified.
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// Mask and data have incompatible shapes.
    #[error("size mismatch: {0}")]
    SizeMismatch(String),

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// I/O error reading or writing a stack file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Stack file could not be parsed or serialized.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type for filter operations.
pub type OpsResult<T> = Result<T, OpsError>;
