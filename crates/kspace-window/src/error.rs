//! Error types for window construction.

use thiserror::Error;

/// Error type for window specifications.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WindowError {
    /// Window family name not recognized.
    #[error("unknown window family: {0}")]
    UnknownFamily(String),

    /// Parametric family given without a shape parameter.
    #[error("window family '{0}' requires a shape parameter")]
    MissingShape(String),

    /// Shape parameter given for a family that takes none.
    #[error("window family '{0}' does not take a shape parameter")]
    UnexpectedShape(String),
}

/// Result type for window operations.
pub type WindowResult<T> = Result<T, WindowError>;
