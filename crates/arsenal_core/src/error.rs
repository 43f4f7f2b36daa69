//! # Codec Error Types
//!
//! All errors that can occur while decoding a barrel definition.
//! Encoding is total and has no error path.

use thiserror::Error;

/// Errors that can occur in the barrel codec.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BarrelError {
    /// Input buffer is not exactly one record long.
    #[error("barrel definition size mismatch: expected {expected} bytes, got {actual}")]
    SizeMismatch {
        /// Required length in bytes.
        expected: usize,
        /// Length that was supplied.
        actual: usize,
    },

    /// Input could not be turned into raw record bytes at all
    /// (e.g. a hex rendering with non-hex digits).
    #[error("malformed barrel definition: {reason}")]
    Malformed {
        /// What was wrong with the input.
        reason: String,
    },
}

/// Result type for codec operations.
pub type BarrelResult<T> = Result<T, BarrelError>;
