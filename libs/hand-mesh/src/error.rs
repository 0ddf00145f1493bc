//! # Mesh Errors
//!
//! Error types for shell and primitive generation.

use thiserror::Error;

/// Errors that can occur during mesh generation.
///
/// The kernel never clamps: structurally impossible parameters are
/// rejected before any sampling happens. Range clamping of user input
/// is the boundary collaborator's job.
#[derive(Debug, Error)]
pub enum MeshError {
    /// Shell grid parameters cannot form a surface.
    #[error("Degenerate grid: {message}")]
    DegenerateGrid { message: String },

    /// Degenerate primitive geometry.
    #[error("Degenerate geometry: {message}")]
    DegenerateGeometry { message: String },
}

impl MeshError {
    /// Creates a degenerate grid error.
    pub fn degenerate_grid(message: impl Into<String>) -> Self {
        Self::DegenerateGrid {
            message: message.into(),
        }
    }

    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }
}
