//! # Cylinder Primitive
//!
//! Generates a solid cylinder mesh, axis along Z, centered at the origin.

use crate::error::MeshError;
use crate::mesh::{Mesh, Triangle};
use glam::DVec3;
use std::f64::consts::PI;

/// Creates a solid cylinder centered at the origin with its axis along Z.
///
/// # Arguments
///
/// * `radius` - Cylinder radius (mm)
/// * `height` - Total height (mm), extending `height / 2` above and below Z = 0
/// * `segments` - Number of side segments around the circumference
///
/// # Returns
///
/// A mesh with `2 * segments` side triangles (quad strip) plus
/// `2 * segments` fan-cap triangles.
///
/// # Example
///
/// ```rust
/// use hand_mesh::primitives::create_cylinder;
///
/// let mesh = create_cylinder(2.5, 12.0, 20).unwrap();
/// assert_eq!(mesh.triangle_count(), 80);
/// ```
pub fn create_cylinder(radius: f64, height: f64, segments: u32) -> Result<Mesh, MeshError> {
    if radius <= 0.0 {
        return Err(MeshError::degenerate(format!(
            "Cylinder radius must be positive: {radius}"
        )));
    }
    if height <= 0.0 {
        return Err(MeshError::degenerate(format!(
            "Cylinder height must be positive: {height}"
        )));
    }
    if segments < 3 {
        return Err(MeshError::degenerate(format!(
            "Cylinder segments must be at least 3: {segments}"
        )));
    }

    let h2 = height / 2.0;
    let rim = |i: u32, z: f64| -> DVec3 {
        let theta = 2.0 * PI * f64::from(i % segments) / f64::from(segments);
        DVec3::new(radius * theta.cos(), radius * theta.sin(), z)
    };

    let mut mesh = Mesh::with_capacity(4 * segments as usize);

    // Side quad strip, wound for radially outward normals
    for i in 0..segments {
        let p00 = rim(i, -h2);
        let p01 = rim(i, h2);
        let p10 = rim(i + 1, -h2);
        let p11 = rim(i + 1, h2);
        mesh.push(Triangle::new(p00, p10, p11));
        mesh.push(Triangle::new(p00, p11, p01));
    }

    // Fan caps from the two axis centers
    let center_top = DVec3::new(0.0, 0.0, h2);
    let center_bot = DVec3::new(0.0, 0.0, -h2);
    for i in 0..segments {
        mesh.push(Triangle::new(rim(i, h2), rim(i + 1, h2), center_top));
        mesh.push(Triangle::new(center_bot, rim(i + 1, -h2), rim(i, -h2)));
    }

    Ok(mesh)
}
