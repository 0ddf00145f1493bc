//! # Part Error Types

use crate::params::PartKind;
use hand_mesh::MeshError;
use thiserror::Error;

/// Errors produced while generating or composing parts.
///
/// Asset-load problems are deliberately absent: a failed substitute
/// load falls back to generated geometry and never surfaces here.
#[derive(Debug, Error)]
pub enum PartError {
    /// Geometry generation rejected the parameters.
    #[error(transparent)]
    Mesh(#[from] MeshError),

    /// A parameter payload was handed to the wrong generator family.
    #[error("wrong parameter payload for part '{part}': {message}")]
    ParameterMismatch {
        /// Part kind whose generator rejected the payload.
        part: PartKind,
        /// Description of the mismatch.
        message: String,
    },
}

impl PartError {
    /// Creates a [`PartError::ParameterMismatch`].
    pub fn mismatch(part: PartKind, message: impl Into<String>) -> Self {
        Self::ParameterMismatch {
            part,
            message: message.into(),
        }
    }
}
