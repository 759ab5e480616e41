//! Error types for the Weft simulator.
//!
//! The per-step pipeline is infallible; errors only arise at the
//! configuration and I/O boundary.

use thiserror::Error;

/// Unified error type for Weft.
#[derive(Debug, Error)]
pub enum WeftError {
    /// Configuration value is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Convenience alias for `Result<T, WeftError>`.
pub type WeftResult<T> = Result<T, WeftError>;
