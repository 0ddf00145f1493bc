//! Tests for shell sampling and wall sealing.

use super::*;
use crate::error::MeshError;
use crate::mesh::Mesh;
use glam::DVec3;
use std::collections::HashMap;

fn shell_params(grid_u: u32, grid_v: u32, stride: u32, size: u32) -> ShellParams {
    ShellParams {
        inner_radius_mm: 38.0,
        length_mm: 120.0,
        arc_deg: 200.0,
        thickness_mm: 3.0,
        grid_u,
        grid_v,
        hole_every_n: stride,
        hole_size_cells: size,
        taper_ratio: 0.0,
    }
}

/// Quantizes a point so exact grid duplicates hash identically.
fn key(p: DVec3) -> (i64, i64, i64) {
    let q = |x: f64| (x * 1.0e6).round() as i64;
    (q(p.x), q(p.y), q(p.z))
}

/// Asserts every directed edge has exactly one reverse-directed partner.
fn assert_manifold(mesh: &Mesh) {
    let mut edges: HashMap<((i64, i64, i64), (i64, i64, i64)), i64> = HashMap::new();
    for tri in mesh.triangles() {
        let (a, b, c) = (key(tri.a), key(tri.b), key(tri.c));
        for edge in [(a, b), (b, c), (c, a)] {
            *edges.entry(edge).or_insert(0) += 1;
        }
    }
    for (&(p, q), &count) in &edges {
        assert_eq!(count, 1, "directed edge repeated: {p:?} -> {q:?}");
        assert_eq!(
            edges.get(&(q, p)).copied().unwrap_or(0),
            1,
            "unmatched boundary edge: {p:?} -> {q:?}"
        );
    }
}

#[test]
fn test_sample_grids_shape_and_extent() {
    let params = shell_params(5, 7, 0, 0);
    let (inner, outer) = sample_grids(&params).unwrap();
    assert_eq!(inner.len(), 5);
    assert_eq!(inner[0].len(), 7);

    // First row sits at z = 0, last at z = length
    assert!(inner[0][0].z.abs() < 1e-12);
    assert!((inner[4][0].z - 120.0).abs() < 1e-12);

    // Inner points sit on the inner radius, outer points thickness further out
    let r_in = inner[0][3].truncate().length();
    let r_out = outer[0][3].truncate().length();
    assert!((r_in - 38.0).abs() < 1e-9);
    assert!((r_out - 41.0).abs() < 1e-9);
}

#[test]
fn test_sample_grids_taper() {
    let mut params = shell_params(5, 7, 0, 0);
    params.taper_ratio = 0.2;
    let (inner, _) = sample_grids(&params).unwrap();
    // Full taper applies at u = 1: radius * (1 - 0.2)
    let r_end = inner[4][3].truncate().length();
    assert!((r_end - 38.0 * 0.8).abs() < 1e-9);
}

#[test]
fn test_sample_grids_arc_is_centered() {
    let params = shell_params(4, 5, 0, 0);
    let (inner, _) = sample_grids(&params).unwrap();
    // Middle angular sample lies on the +X axis (v = 0.5 -> angle 0)
    let mid = inner[0][2];
    assert!(mid.y.abs() < 1e-9);
    assert!(mid.x > 0.0);
}

#[test]
fn test_validation_rejects_degenerate_grids() {
    for params in [
        shell_params(1, 6, 0, 0),
        shell_params(6, 1, 0, 0),
        ShellParams {
            thickness_mm: 0.0,
            ..shell_params(6, 6, 0, 0)
        },
        ShellParams {
            arc_deg: 0.0,
            ..shell_params(6, 6, 0, 0)
        },
        ShellParams {
            arc_deg: 361.0,
            ..shell_params(6, 6, 0, 0)
        },
        ShellParams {
            length_mm: -1.0,
            ..shell_params(6, 6, 0, 0)
        },
    ] {
        assert!(matches!(
            build_shell(&params),
            Err(MeshError::DegenerateGrid { .. })
        ));
    }
}

#[test]
fn test_hole_free_shell_triangle_count() {
    // 4x4 grid -> 3x3 cells: 9 cells * 2 surfaces * 2 tris = 36 skins,
    // 3 cells * 2 arc edges * 2 tris = 12 perimeter walls,
    // 3 cells * 2 ends * 2 tris = 12 end caps. Total 60.
    let mesh = build_shell(&shell_params(4, 4, 0, 0)).unwrap();
    assert_eq!(mesh.triangle_count(), 60);
}

#[test]
fn test_hole_free_shell_is_watertight() {
    let mesh = build_shell(&shell_params(6, 8, 0, 0)).unwrap();
    assert_manifold(&mesh);
}

#[test]
fn test_perforated_shell_is_watertight() {
    let mesh = build_shell(&shell_params(9, 11, 3, 1)).unwrap();
    assert_manifold(&mesh);
}

#[test]
fn test_shell_with_merged_hole_blocks_is_watertight() {
    // Size-2 blocks at stride 3 touch the grid boundary and sit flush
    // against each other diagonally; interior hole-to-hole edges must not
    // grow rim walls and the boundary notches must still close.
    let mesh = build_shell(&shell_params(8, 8, 3, 2)).unwrap();
    assert_manifold(&mesh);
}

#[test]
fn test_shell_with_end_face_holes_is_watertight() {
    // Stride 2 puts hole blocks on both end faces; the caps there stay
    // open and the rims must still close the surface.
    let mesh = build_shell(&shell_params(7, 7, 2, 1)).unwrap();
    assert_manifold(&mesh);
}

#[test]
fn test_skin_normals_point_away_from_material() {
    // First two triangles of a hole-free shell are the inner skin of the
    // first cell, next two the outer skin. Inner normals must point
    // toward the axis, outer normals away from it.
    let mesh = build_shell(&shell_params(4, 4, 0, 0)).unwrap();
    let radial = |tri: &crate::mesh::Triangle| {
        let centroid = (tri.a + tri.b + tri.c) / 3.0;
        let dir = centroid.truncate().normalize().extend(0.0);
        tri.normal().dot(dir)
    };
    for tri in &mesh.triangles()[0..2] {
        assert!(radial(tri) < 0.0, "inner skin points outward");
    }
    for tri in &mesh.triangles()[2..4] {
        assert!(radial(tri) > 0.0, "outer skin points inward");
    }
}

#[test]
fn test_disabled_holes_only_seal_perimeter_and_caps() {
    let params = shell_params(6, 6, 0, 2);
    let mask = HoleMask::carve(5, 5, params.hole_every_n, params.hole_size_cells);
    assert_eq!(mask.hole_count(), 0);

    let mesh = build_shell(&params).unwrap();
    // 25 cells * 4 skin tris + 5 cells * 2 edges * 2 tris twice over
    // (perimeter + caps): no rim walls appear anywhere.
    assert_eq!(mesh.triangle_count(), 25 * 4 + 5 * 4 + 5 * 4);
}

#[test]
fn test_hole_cells_drop_skins_and_add_rims() {
    // Stride 2, size 1 on a 4x4 cell grid marks (0,0), (0,2), (2,0) and
    // (2,2); 12 of the 16 cells keep their skins.
    let params = shell_params(5, 5, 2, 1);
    let mask = HoleMask::carve(4, 4, 2, 1);
    assert_eq!(mask.hole_count(), 4);

    let mesh = build_shell(&params).unwrap();
    // Rim walls exist only on hole edges shared with a solid cell:
    // (0,0) has 2 solid neighbors, (0,2) and (2,0) have 3, (2,2) has 4,
    // for 12 walls. Perimeter walls skip the two holes on the v=0 edge
    // (2 + 4 cells sealed) and end caps skip the two holes on the u=0
    // end face (2 + 4 cells sealed).
    let skin_tris = 12 * 4;
    let rim_tris = (2 + 3 + 3 + 4) * 2;
    let perimeter_tris = (2 + 4) * 2;
    let cap_tris = (2 + 4) * 2;
    assert_eq!(
        mesh.triangle_count(),
        skin_tris + rim_tris + perimeter_tris + cap_tris
    );
    assert_manifold(&mesh);
}
