//! Persistence error types.
//!
//! Every store and staging operation returns a structured error that can
//! also render a short message fit for an API response.

use std::path::PathBuf;
use thiserror::Error;

/// Persistence operation error.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// File I/O error.
    #[error("failed to {operation} file: {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A record in the batch breaks the store schema. Nothing was written.
    #[error("record {index} failed validation: {reason}")]
    Validation { index: usize, reason: String },

    /// A stored line could not be decoded.
    #[error("corrupt record at {path}:{line}")]
    Corrupt {
        path: PathBuf,
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    /// Serialization error.
    #[error("failed to serialize question record")]
    Serialization {
        #[source]
        source: serde_json::Error,
    },

    /// Atomic write failed (temp file couldn't be renamed).
    #[error("failed to replace {target_path}")]
    AtomicWriteFailed {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Upload exceeds the staging size limit.
    #[error("upload is {size} bytes, limit is {limit}")]
    TooLarge { size: u64, limit: u64 },

    /// Upload extension is not on the staging allow-list.
    #[error("file type not allowed: {name}")]
    DisallowedType { name: String },
}

impl PersistenceError {
    /// A short message suitable for returning to the uploader.
    pub fn user_message(&self) -> String {
        match self {
            Self::Io {
                operation, path, ..
            } => format!("Could not {} the file at {}", operation, path.display()),
            Self::Validation { index, reason } => {
                format!("Question {} is invalid: {}", index + 1, reason)
            }
            Self::Corrupt { path, line, .. } => format!(
                "The question store at {} is damaged (line {}).",
                path.display(),
                line
            ),
            Self::Serialization { .. } => {
                "An error occurred while encoding the questions.".to_string()
            }
            Self::AtomicWriteFailed { target_path, .. } => format!(
                "Could not save questions to {}. Please check disk space and permissions.",
                target_path.display()
            ),
            Self::TooLarge { limit, .. } => {
                format!("File too large. The limit is {} bytes.", limit)
            }
            Self::DisallowedType { .. } => {
                "Only image, CSV and Excel files are allowed.".to_string()
            }
        }
    }
}

/// Result type alias for persistence operations.
pub type Result<T> = std::result::Result<T, PersistenceError>;
