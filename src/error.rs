//! Crate error type

use thiserror::Error;

/// Everything that can go wrong in cellscope.
///
/// Startup variants (`MissingWindow`, `MissingElement`, `ContextUnavailable`)
/// are fatal: the web shell logs them and stops.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("browser window or document unavailable")]
    MissingWindow,

    #[error("required element `#{0}` not found")]
    MissingElement(String),

    #[error("2D drawing context not supported by this browser")]
    ContextUnavailable,

    #[error("cell pitch must be positive and finite, got {pitch}")]
    InvalidLayout { pitch: f64 },

    #[error("block dimensions must be positive and finite, got {width}x{height}")]
    InvalidDimensions { width: f64, height: f64 },

    #[error("cell index {index} outside board of {len} cells")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("invalid color `{0}`")]
    InvalidColor(String),
}

pub type Result<T> = std::result::Result<T, Error>;
