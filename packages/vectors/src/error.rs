//! Error types for vector generation

use thiserror::Error;

/// Fatal conditions that stop a vector run
///
/// None of these are recoverable: every buffer size is a compile-time
/// constant, so hitting one means the wiring or the library is broken.
#[derive(Debug, Error)]
pub enum VectorError {
    /// Secret below the library minimum length
    #[error("Secret too short: need at least {required} bytes, got {actual}")]
    SecretTooShort {
        /// Minimum length the library accepts
        required: usize,
        /// Length that was supplied
        actual: usize,
    },

    /// Hash library refused an otherwise valid call
    #[error("Hash library rejected input: {0}")]
    Library(String),

    /// Writing the transcript failed
    #[error("Output stream error: {0}")]
    Io(#[from] std::io::Error),

    /// Transcript bytes were not valid UTF-8
    #[error("Transcript is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// Serializing vectors to JSON failed
    #[error("Vector export error: {0}")]
    Json(#[from] serde_json::Error),
}

impl VectorError {
    /// Create a library error
    #[must_use]
    pub fn library(msg: impl Into<String>) -> Self {
        Self::Library(msg.into())
    }
}

/// Result type for vector generation
pub type Result<T> = std::result::Result<T, VectorError>;
