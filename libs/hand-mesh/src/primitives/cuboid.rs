//! # Box Primitive
//!
//! Generates an axis-aligned box mesh centered at the origin.

use crate::error::MeshError;
use crate::mesh::Mesh;
use glam::DVec3;

/// Creates an axis-aligned box centered at the origin.
///
/// # Arguments
///
/// * `size_x` - Extent along X (mm)
/// * `size_y` - Extent along Y (mm)
/// * `size_z` - Extent along Z (mm)
///
/// # Returns
///
/// A mesh of 12 triangles (2 per face), wound so all normals face
/// outward.
///
/// # Example
///
/// ```rust
/// use hand_mesh::primitives::create_box;
///
/// let mesh = create_box(60.0, 8.0, 80.0).unwrap();
/// assert_eq!(mesh.triangle_count(), 12);
/// ```
pub fn create_box(size_x: f64, size_y: f64, size_z: f64) -> Result<Mesh, MeshError> {
    if size_x <= 0.0 || size_y <= 0.0 || size_z <= 0.0 {
        return Err(MeshError::degenerate(format!(
            "Box size must be positive: {size_x} x {size_y} x {size_z}"
        )));
    }

    let h = DVec3::new(size_x / 2.0, size_y / 2.0, size_z / 2.0);

    // 8 corners, bottom ring then top ring, counter-clockwise seen from +Z
    let v = [
        DVec3::new(-h.x, -h.y, -h.z),
        DVec3::new(h.x, -h.y, -h.z),
        DVec3::new(h.x, h.y, -h.z),
        DVec3::new(-h.x, h.y, -h.z),
        DVec3::new(-h.x, -h.y, h.z),
        DVec3::new(h.x, -h.y, h.z),
        DVec3::new(h.x, h.y, h.z),
        DVec3::new(-h.x, h.y, h.z),
    ];

    let mut mesh = Mesh::with_capacity(12);

    // Bottom face (z = -h.z), wound for a -Z normal
    mesh.push_quad(v[0], v[3], v[2], v[1], false);
    // Top face (z = +h.z), +Z normal
    mesh.push_quad(v[4], v[5], v[6], v[7], false);
    // Front face (y = -h.y), -Y normal
    mesh.push_quad(v[0], v[1], v[5], v[4], false);
    // Back face (y = +h.y), +Y normal
    mesh.push_quad(v[2], v[3], v[7], v[6], false);
    // Left face (x = -h.x), -X normal
    mesh.push_quad(v[3], v[0], v[4], v[7], false);
    // Right face (x = +h.x), +X normal
    mesh.push_quad(v[1], v[2], v[6], v[5], false);

    Ok(mesh)
}
