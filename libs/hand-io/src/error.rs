//! # IO Error Types
//!
//! Error taxonomy for the serialization boundary.

use std::path::PathBuf;
use thiserror::Error;

/// Result alias for serialization operations.
pub type IoResult<T> = Result<T, IoError>;

/// Errors produced while reading or writing part geometry.
#[derive(Debug, Error)]
pub enum IoError {
    /// The requested file does not exist.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path that was requested.
        path: PathBuf,
    },

    /// The file exists but its content cannot be parsed.
    #[error("invalid STL content: {message}")]
    InvalidContent {
        /// Description of the malformed content.
        message: String,
    },

    /// A binary record ended before all its bytes were read.
    #[error("unexpected end of file at byte {position}")]
    UnexpectedEof {
        /// Byte offset at which data ran out.
        position: usize,
    },

    /// A binary header declared a different face count than the payload holds.
    #[error("face count mismatch: header declares {expected}, payload holds {got}")]
    InvalidFaceCount {
        /// Count declared in the header.
        expected: usize,
        /// Count implied by the payload size.
        got: usize,
    },

    /// STEP export was requested but no backend is linked into this build.
    #[error("STEP export is not available: no CAD backend is linked")]
    ExportUnsupported,

    /// The STEP backend accepted the mesh but failed to produce a file.
    #[error("STEP export failed: {message}")]
    ExportFailed {
        /// Backend-reported failure description.
        message: String,
    },

    /// Underlying filesystem error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl IoError {
    /// Creates an [`IoError::InvalidContent`] with the given message.
    pub fn invalid_content(message: impl Into<String>) -> Self {
        Self::InvalidContent {
            message: message.into(),
        }
    }

    /// Creates an [`IoError::ExportFailed`] with the given message.
    pub fn export_failed(message: impl Into<String>) -> Self {
        Self::ExportFailed {
            message: message.into(),
        }
    }
}
