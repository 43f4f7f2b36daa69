//! # Inspect Error Types

use std::path::PathBuf;

use arsenal_core::BarrelError;
use thiserror::Error;

/// Errors that can occur while inspecting dumps.
#[derive(Error, Debug)]
pub enum InspectError {
    /// A file could not be read or written.
    #[error("i/o error on {}: {source}", .path.display())]
    Io {
        /// File involved.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// A TOML document (config or barrel) did not parse.
    #[error("invalid TOML in {}: {source}", .path.display())]
    Toml {
        /// File involved.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: toml::de::Error,
    },

    /// An `[addons]` key is not an integer index.
    #[error("invalid addon index {0:?}: expected an integer")]
    InvalidAddonKey(String),

    /// A record failed to decode.
    #[error(transparent)]
    Barrel(#[from] BarrelError),

    /// A dump does not end on a record boundary.
    #[error("dump is {len} bytes: {remainder} trailing bytes after the last whole record")]
    TrailingBytes {
        /// Dump length in bytes.
        len: usize,
        /// Bytes left over.
        remainder: usize,
    },

    /// A dump holds no records.
    #[error("dump {} contains no records", .path.display())]
    EmptyDump {
        /// File involved.
        path: PathBuf,
    },

    /// Bad command line.
    #[error("{0}")]
    Usage(String),
}

/// Result type for inspect operations.
pub type InspectResult<T> = Result<T, InspectError>;
