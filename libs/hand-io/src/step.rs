//! # STEP Export Capability
//!
//! STEP output requires a CAD kernel to stitch triangle faces into a
//! sewn shell, and not every build links one. The kernel lives behind
//! [`StepBackend`]; builds without a backend fail fast with
//! [`IoError::ExportUnsupported`] instead of producing partial output.

use crate::error::{IoError, IoResult};
use config::constants::SEW_TOLERANCE;
use hand_mesh::Mesh;
use std::any::Any;
use std::path::Path;

/// Opaque handle to a backend-sewn shell.
///
/// The concrete type belongs to the backend; the pipeline only passes
/// the handle from [`StepBackend::sew`] to [`StepBackend::write`].
pub struct SewnShell(Box<dyn Any + Send>);

impl SewnShell {
    /// Wraps a backend-specific shell value.
    pub fn new(inner: impl Any + Send) -> Self {
        Self(Box::new(inner))
    }

    /// Recovers the backend's concrete shell type.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref()
    }
}

/// A linked CAD kernel capable of sewing triangle soup into a STEP
/// solid.
///
/// Implementations turn every triangle into a closed planar polygon
/// face, sew the faces into a shell at the given tolerance, and write
/// the result to disk.
pub trait StepBackend {
    /// Whether the backend is usable in this process.
    ///
    /// Probed once when the pipeline is constructed, never per request.
    fn available(&self) -> bool {
        true
    }

    /// Sews the mesh into a shell at `tolerance` (mm).
    ///
    /// # Errors
    ///
    /// Returns [`IoError::ExportFailed`] when the mesh cannot be sewn.
    fn sew(&self, mesh: &Mesh, tolerance: f64) -> IoResult<SewnShell>;

    /// Writes a previously sewn shell to `path` as STEP.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::ExportFailed`] or [`IoError::Io`] on failure.
    fn write(&self, shell: &SewnShell, path: &Path) -> IoResult<()>;
}

/// Exports a mesh as STEP through an optional backend.
///
/// # Errors
///
/// Returns [`IoError::ExportUnsupported`] when no backend is linked or
/// the linked backend reports itself unavailable; sewing and write
/// failures propagate from the backend.
pub fn export_step(backend: Option<&dyn StepBackend>, mesh: &Mesh, path: &Path) -> IoResult<()> {
    let backend = backend
        .filter(|b| b.available())
        .ok_or(IoError::ExportUnsupported)?;
    let shell = backend.sew(mesh, SEW_TOLERANCE)?;
    backend.write(&shell, path)
}
