//! Centralized configuration values shared across the hand shell pipeline.
//!
//! Each public item in this module documents its purpose so that downstream
//! crates can remain declarative and avoid scattering literals.

/// Numerical tolerance used by geometry kernels.
///
/// # Examples
/// ```
/// use config::constants::EPSILON_TOLERANCE;
/// assert!(EPSILON_TOLERANCE < 1.0e-6);
/// ```
pub const EPSILON_TOLERANCE: f64 = 1.0e-9;

/// Tessellation segment count for the pin cylinders of the proxy pin part.
pub const PIN_SEGMENTS: u32 = 20;

/// Sewing tolerance (mm) handed to a STEP backend when stitching triangle
/// faces into a shell.
pub const SEW_TOLERANCE: f64 = 1.0e-6;

/// Size of the binary STL file header in bytes.
pub const STL_HEADER_BYTES: usize = 80;

/// Size of one binary STL triangle record in bytes
/// (normal + 3 vertices + attribute count).
pub const STL_TRIANGLE_RECORD_BYTES: usize = 50;

// =============================================================================
// PARAMETER CLAMP BOUNDS
// =============================================================================
//
// The boundary collaborator (form/query parsing) clamps raw numeric input to
// these ranges before the typed parameter record reaches the geometry core.
// The core itself rejects structurally impossible values instead of clamping.

/// Arc sweep bounds in degrees.
pub const ARC_DEG_RANGE: (f64, f64) = (30.0, 330.0);

/// Wall thickness bounds in millimeters.
pub const THICKNESS_MM_RANGE: (f64, f64) = (1.0, 10.0);

/// Longitudinal grid resolution bounds.
pub const GRID_U_RANGE: (u32, u32) = (6, 200);

/// Angular grid resolution bounds.
pub const GRID_V_RANGE: (u32, u32) = (6, 300);

/// Perforation stride bounds (0 disables perforation).
pub const HOLE_STRIDE_RANGE: (u32, u32) = (0, 50);

/// Perforation block edge length bounds, in grid cells.
pub const HOLE_SIZE_RANGE: (u32, u32) = (0, 10);

/// Linear taper ratio bounds.
pub const TAPER_RATIO_RANGE: (f64, f64) = (0.0, 0.9);

/// Uniform part scale bounds.
pub const SCALE_RANGE: (f64, f64) = (0.2, 3.0);

/// Maximum accepted length of a part display name.
pub const MAX_NAME_LEN: usize = 80;
