//! # Rigid Transforms
//!
//! Pure translate / rotate-about-Z / mirror / uniform-scale operations
//! on triangle meshes, plus placement application for multi-part
//! assembly. Every operation returns a new mesh; sources are never
//! mutated.

use crate::mesh::Mesh;
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Mirror axis selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// A rigid placement: rotation about Z (degrees) followed by a
/// translation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// Translation vector in mm.
    #[serde(default)]
    pub translate: [f64; 3],
    /// Rotation about the Z axis in degrees, applied before translation.
    #[serde(default)]
    pub rotate_deg_z: f64,
}

impl Placement {
    /// The identity placement.
    pub const IDENTITY: Placement = Placement {
        translate: [0.0, 0.0, 0.0],
        rotate_deg_z: 0.0,
    };

    /// A pure translation.
    pub fn offset(x: f64, y: f64, z: f64) -> Self {
        Self {
            translate: [x, y, z],
            rotate_deg_z: 0.0,
        }
    }

    /// A rotation about Z followed by a translation.
    pub fn new(translate: [f64; 3], rotate_deg_z: f64) -> Self {
        Self {
            translate,
            rotate_deg_z,
        }
    }
}

impl Default for Placement {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Adds a fixed offset to every vertex.
pub fn translate(mesh: &Mesh, offset: DVec3) -> Mesh {
    mesh.triangles().iter().map(|t| t.map(|p| p + offset)).collect()
}

/// Rotates every vertex about the Z axis; Z coordinates are unchanged.
pub fn rotate_z(mesh: &Mesh, degrees: f64) -> Mesh {
    let (sa, ca) = degrees.to_radians().sin_cos();
    mesh.triangles()
        .iter()
        .map(|t| t.map(|p| DVec3::new(ca * p.x - sa * p.y, sa * p.x + ca * p.y, p.z)))
        .collect()
}

/// Scales every vertex uniformly about the origin.
pub fn scale_uniform(mesh: &Mesh, factor: f64) -> Mesh {
    if factor == 1.0 {
        return mesh.clone();
    }
    mesh.triangles().iter().map(|t| t.map(|p| p * factor)).collect()
}

/// Mirrors the mesh about the plane perpendicular to `axis`.
///
/// Reflecting coordinates alone inverts triangle orientation, so each
/// triangle's second and third vertices are swapped to restore the
/// outward-normal convention. Applying the same mirror twice reproduces
/// the original mesh exactly.
pub fn mirror(mesh: &Mesh, axis: Axis) -> Mesh {
    let reflect = move |p: DVec3| match axis {
        Axis::X => DVec3::new(-p.x, p.y, p.z),
        Axis::Y => DVec3::new(p.x, -p.y, p.z),
        Axis::Z => DVec3::new(p.x, p.y, -p.z),
    };
    mesh.triangles()
        .iter()
        .map(|t| t.map(reflect).flipped())
        .collect()
}

/// Applies a placement: rotate about Z, then translate.
pub fn place(mesh: &Mesh, placement: &Placement) -> Mesh {
    let (sa, ca) = placement.rotate_deg_z.to_radians().sin_cos();
    let [tx, ty, tz] = placement.translate;
    mesh.triangles()
        .iter()
        .map(|t| {
            t.map(|p| {
                DVec3::new(
                    ca * p.x - sa * p.y + tx,
                    sa * p.x + ca * p.y + ty,
                    p.z + tz,
                )
            })
        })
        .collect()
}

/// Instantiates the source mesh once per placement and concatenates the
/// results in placement order.
pub fn place_copies(mesh: &Mesh, placements: &[Placement]) -> Mesh {
    let mut out = Mesh::with_capacity(mesh.triangle_count() * placements.len());
    for placement in placements {
        out.merge(&place(mesh, placement));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::Triangle;

    fn sample_mesh() -> Mesh {
        let mut mesh = Mesh::new();
        mesh.push(Triangle::new(
            DVec3::new(1.0, 2.0, 3.0),
            DVec3::new(4.0, 5.0, 6.0),
            DVec3::new(7.0, 8.0, 9.0),
        ));
        mesh.push(Triangle::new(DVec3::ZERO, DVec3::X, DVec3::Y));
        mesh
    }

    #[test]
    fn test_translate_roundtrip() {
        let mesh = sample_mesh();
        let v = DVec3::new(12.5, -3.0, 7.25);
        let back = translate(&translate(&mesh, v), -v);
        for (orig, tri) in mesh.triangles().iter().zip(back.triangles()) {
            assert!((orig.a - tri.a).length() < 1e-12);
            assert!((orig.b - tri.b).length() < 1e-12);
            assert!((orig.c - tri.c).length() < 1e-12);
        }
    }

    #[test]
    fn test_rotate_z_quarter_turn() {
        let mut mesh = Mesh::new();
        mesh.push(Triangle::new(DVec3::X, DVec3::Y, DVec3::Z));
        let rotated = rotate_z(&mesh, 90.0);
        let tri = rotated.triangles()[0];
        assert!((tri.a - DVec3::Y).length() < 1e-12);
        assert!((tri.b - (-DVec3::X)).length() < 1e-12);
        // Z axis point is unchanged by a Z rotation
        assert!((tri.c - DVec3::Z).length() < 1e-12);
    }

    #[test]
    fn test_mirror_is_involution() {
        let mesh = sample_mesh();
        for axis in [Axis::X, Axis::Y, Axis::Z] {
            let back = mirror(&mirror(&mesh, axis), axis);
            assert_eq!(mesh, back);
        }
    }

    #[test]
    fn test_mirror_reverses_winding() {
        let mut mesh = Mesh::new();
        mesh.push(Triangle::new(DVec3::ZERO, DVec3::X, DVec3::Y));
        let mirrored = mirror(&mesh, Axis::Z);
        // Positions are unchanged for z = 0 geometry, but the winding flip
        // must reverse the derived normal.
        assert_eq!(mirrored.triangles()[0].normal(), -DVec3::Z);
    }

    #[test]
    fn test_mirror_y_negates_y() {
        let mesh = sample_mesh();
        let mirrored = mirror(&mesh, Axis::Y);
        for (orig, tri) in mesh.triangles().iter().zip(mirrored.triangles()) {
            // b and c swap under the winding correction
            assert_eq!(tri.a, DVec3::new(orig.a.x, -orig.a.y, orig.a.z));
            assert_eq!(tri.b, DVec3::new(orig.c.x, -orig.c.y, orig.c.z));
            assert_eq!(tri.c, DVec3::new(orig.b.x, -orig.b.y, orig.b.z));
        }
    }

    #[test]
    fn test_scale_uniform() {
        let mesh = sample_mesh();
        let scaled = scale_uniform(&mesh, 2.0);
        assert_eq!(scaled.triangles()[0].a, DVec3::new(2.0, 4.0, 6.0));
        assert_eq!(scale_uniform(&mesh, 1.0), mesh);
    }

    #[test]
    fn test_place_rotates_before_translating() {
        let mut mesh = Mesh::new();
        mesh.push(Triangle::new(DVec3::X, DVec3::Y, DVec3::Z));
        let placed = place(&mesh, &Placement::new([10.0, 0.0, 0.0], 90.0));
        let tri = placed.triangles()[0];
        // (1,0,0) rotates onto (0,1,0) and then shifts along X
        assert!((tri.a - DVec3::new(10.0, 1.0, 0.0)).length() < 1e-12);
    }

    #[test]
    fn test_place_copies_concatenates_instances() {
        let mesh = sample_mesh();
        let placements = [
            Placement::offset(-5.0, 0.0, 0.0),
            Placement::IDENTITY,
            Placement::offset(5.0, 0.0, 0.0),
        ];
        let all = place_copies(&mesh, &placements);
        assert_eq!(all.triangle_count(), mesh.triangle_count() * 3);
        // Second instance is the identity copy, in order
        assert_eq!(all.triangles()[2], mesh.triangles()[0]);
    }
}
