//! Error types for OCI operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for OCI operations.
pub type Result<T> = std::result::Result<T, OciError>;

/// Errors that can occur while reading hook state or a bundle.
#[derive(Debug, Error)]
pub enum OciError {
    /// The state document on stdin could not be decoded.
    #[error("could not decode container state: {0}")]
    StateDecode(#[source] serde_json::Error),

    /// `config.json` could not be opened.
    #[error("could not open OCI spec {path}: {source}")]
    SpecOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `config.json` could not be decoded.
    #[error("could not decode OCI spec {path}: {source}")]
    SpecDecode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Missing required field.
    #[error("{0} is empty in OCI spec")]
    MissingField(&'static str),

    /// A process environment entry without `=`.
    #[error("process environment map error: malformed entry {0:?}")]
    MalformedEnv(String),
}
