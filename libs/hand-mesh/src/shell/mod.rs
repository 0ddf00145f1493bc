//! # Parametric Shell Generation
//!
//! Samples a tapered, arc-swept cylindrical shell as two U x V point
//! grids (inner and outer surface), which the wall builder then seals
//! into a watertight triangle mesh around an arbitrary perforation
//! pattern.

pub mod holes;
pub mod walls;

#[cfg(test)]
mod tests;

pub use holes::HoleMask;
pub use walls::build_shell;

use crate::error::MeshError;
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// A U x V grid of sampled surface points.
pub type PointGrid = Vec<Vec<DVec3>>;

/// Validated parameters for a shell-type part.
///
/// The grid spans `grid_u` samples along the length axis and `grid_v`
/// samples across the arc sweep; the sweep is centered on the +X
/// direction, leaving an open gap when `arc_deg < 360`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShellParams {
    /// Inner surface radius (mm).
    pub inner_radius_mm: f64,
    /// Shell length along Z (mm).
    pub length_mm: f64,
    /// Arc sweep in degrees, in (0, 360].
    pub arc_deg: f64,
    /// Wall thickness (mm); the outer surface sits at radius + thickness.
    pub thickness_mm: f64,
    /// Longitudinal sample count (U).
    pub grid_u: u32,
    /// Angular sample count (V).
    pub grid_v: u32,
    /// Perforation stride in cells; 0 disables perforation.
    pub hole_every_n: u32,
    /// Perforation block edge length in cells; 0 disables perforation.
    pub hole_size_cells: u32,
    /// Linear radius reduction along the length axis, 0..1.
    pub taper_ratio: f64,
}

impl ShellParams {
    /// Rejects parameter combinations that cannot form a shell surface.
    ///
    /// This is structural validation, not range clamping: the boundary
    /// collaborator clamps user input before constructing `ShellParams`,
    /// and anything still impossible here is an error.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::DegenerateGrid`] when the grid has fewer than
    /// two samples in either direction, any length scale is non-positive,
    /// or the arc sweep lies outside (0, 360] degrees.
    pub fn validate(&self) -> Result<(), MeshError> {
        if self.grid_u < 2 || self.grid_v < 2 {
            return Err(MeshError::degenerate_grid(format!(
                "grid must be at least 2 x 2, got {} x {}",
                self.grid_u, self.grid_v
            )));
        }
        if self.inner_radius_mm <= 0.0 {
            return Err(MeshError::degenerate_grid(format!(
                "inner radius must be positive: {}",
                self.inner_radius_mm
            )));
        }
        if self.length_mm <= 0.0 {
            return Err(MeshError::degenerate_grid(format!(
                "length must be positive: {}",
                self.length_mm
            )));
        }
        if self.thickness_mm <= 0.0 {
            return Err(MeshError::degenerate_grid(format!(
                "thickness must be positive: {}",
                self.thickness_mm
            )));
        }
        if self.arc_deg <= 0.0 || self.arc_deg > 360.0 {
            return Err(MeshError::degenerate_grid(format!(
                "arc sweep must be in (0, 360] degrees: {}",
                self.arc_deg
            )));
        }
        Ok(())
    }
}

/// Samples the inner and outer surface grids for a shell part.
///
/// For grid indices `(i, j)` the fractional coordinates are
/// `u = i / (U - 1)` and `v = j / (V - 1)`; the sweep angle is
/// `(v - 0.5) * arc`, and the local radius tapers linearly as
/// `r * (1 - taper * u)`. The point is
/// `(r(u) cos a, r(u) sin a, u * length)`.
///
/// # Errors
///
/// Returns [`MeshError::DegenerateGrid`] for structurally invalid
/// parameters; nothing is sampled in that case.
pub fn sample_grids(params: &ShellParams) -> Result<(PointGrid, PointGrid), MeshError> {
    params.validate()?;

    let u_samples = params.grid_u as usize;
    let v_samples = params.grid_v as usize;
    let arc_rad = params.arc_deg.to_radians();

    let surface = |radius: f64| -> PointGrid {
        (0..u_samples)
            .map(|i| {
                let u = i as f64 / (u_samples - 1) as f64;
                let r_here = radius * (1.0 - params.taper_ratio * u);
                let z = u * params.length_mm;
                (0..v_samples)
                    .map(|j| {
                        let v = j as f64 / (v_samples - 1) as f64;
                        let ang = (v - 0.5) * arc_rad;
                        DVec3::new(r_here * ang.cos(), r_here * ang.sin(), z)
                    })
                    .collect()
            })
            .collect()
    };

    let inner = surface(params.inner_radius_mm);
    let outer = surface(params.inner_radius_mm + params.thickness_mm);
    Ok((inner, outer))
}
