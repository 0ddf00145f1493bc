//! # Wall Builder
//!
//! Seals the sampled inner/outer surface grids into a watertight shell:
//! skins for solid cells, rim walls around perforations, perimeter
//! walls along the open arc edges, and end caps.
//!
//! Orientation convention: every face points away from the solid
//! material between the two surfaces. The inner skin faces the cylinder
//! axis, the outer skin faces away from it, and each wall faces out of
//! the solid through the edge it seals. Directed boundary edges of
//! every quad cancel against the neighboring quad, which is what makes
//! the result manifold for any hole mask.

use super::holes::HoleMask;
use super::{sample_grids, PointGrid, ShellParams};
use crate::error::MeshError;
use crate::mesh::Mesh;
use glam::DVec3;

/// Builds the complete triangulated shell for a shell-type part.
///
/// # Sealing rules
///
/// 1. **Skins**: every non-hole cell emits its inner quad with reversed
///    winding and its outer quad as-is, so both surfaces face away from
///    the material between them.
/// 2. **Hole rims**: a hole cell gets a connecting inner-to-outer wall
///    along each edge it shares with a non-hole cell, turning the
///    perforation into a closed radial window. Edges between two hole
///    cells are interior to the perforation and get nothing; edges on
///    the grid boundary are owned by the perimeter/cap pass, so a
///    perforation reaching the boundary stays open there as a notch.
/// 3. **Perimeter walls**: the two open longitudinal arc edges (v = 0
///    and v = V-1) are sealed cell by cell wherever shell material
///    exists - holes excepted, these walls are always present because
///    the shell is an open arc, not a closed cylinder.
/// 4. **End caps**: each end cell (u = 0, u = U-1) that is not itself a
///    hole gets a cap wall; a hole reaching the end face is left open,
///    its flanks already sealed by the rim walls.
///
/// The result is manifold-closed for any mask: every directed edge has
/// exactly one reverse-directed partner.
///
/// # Errors
///
/// Returns [`MeshError::DegenerateGrid`] for structurally invalid
/// parameters.
pub fn build_shell(params: &ShellParams) -> Result<Mesh, MeshError> {
    let (inner, outer) = sample_grids(params)?;
    let u_cells = params.grid_u as usize - 1;
    let v_cells = params.grid_v as usize - 1;
    let mask = HoleMask::carve(
        u_cells,
        v_cells,
        params.hole_every_n,
        params.hole_size_cells,
    );
    Ok(seal(&inner, &outer, &mask))
}

/// Seals two sampled surface grids around a hole mask.
pub fn seal(inner: &PointGrid, outer: &PointGrid, mask: &HoleMask) -> Mesh {
    let u_cells = mask.u_cells();
    let v_cells = mask.v_cells();
    // Grid index of the final sample row/column (one past the last cell).
    let u_last = u_cells;
    let v_last = v_cells;

    let mut mesh = Mesh::with_capacity(4 * u_cells * v_cells);

    // A wall quad runs from an inner edge to the matching outer edge.
    fn wall(mesh: &mut Mesh, p0_in: DVec3, p1_in: DVec3, p1_out: DVec3, p0_out: DVec3) {
        mesh.push_quad(p0_in, p1_in, p1_out, p0_out, false);
    }

    // Skin surfaces, skipping holes
    for i in 0..u_cells {
        for j in 0..v_cells {
            if mask.is_hole(i, j) {
                continue;
            }
            // Quad corners in grid order (i,j), (i,j+1), (i+1,j+1), (i+1,j)
            let (a_in, b_in, c_in, d_in) = (
                inner[i][j],
                inner[i][j + 1],
                inner[i + 1][j + 1],
                inner[i + 1][j],
            );
            let (a_out, b_out, c_out, d_out) = (
                outer[i][j],
                outer[i][j + 1],
                outer[i + 1][j + 1],
                outer[i + 1][j],
            );
            // Inner skin flips toward the axis, away from the wall material
            mesh.push_quad(a_in, b_in, c_in, d_in, true);
            mesh.push_quad(a_out, b_out, c_out, d_out, false);
        }
    }

    // Rim walls around holes, only on edges shared with a solid cell
    for i in 0..u_cells {
        for j in 0..v_cells {
            if !mask.is_hole(i, j) {
                continue;
            }
            if i > 0 && !mask.is_hole(i - 1, j) {
                wall(
                    &mut mesh,
                    inner[i][j + 1],
                    inner[i][j],
                    outer[i][j],
                    outer[i][j + 1],
                );
            }
            if i < u_cells - 1 && !mask.is_hole(i + 1, j) {
                wall(
                    &mut mesh,
                    inner[i + 1][j],
                    inner[i + 1][j + 1],
                    outer[i + 1][j + 1],
                    outer[i + 1][j],
                );
            }
            if j > 0 && !mask.is_hole(i, j - 1) {
                wall(
                    &mut mesh,
                    inner[i][j],
                    inner[i + 1][j],
                    outer[i + 1][j],
                    outer[i][j],
                );
            }
            if j < v_cells - 1 && !mask.is_hole(i, j + 1) {
                wall(
                    &mut mesh,
                    inner[i + 1][j + 1],
                    inner[i][j + 1],
                    outer[i][j + 1],
                    outer[i + 1][j + 1],
                );
            }
        }
    }

    // Perimeter walls along the two open longitudinal arc edges
    for i in 0..u_cells {
        if !mask.is_hole(i, 0) {
            wall(
                &mut mesh,
                inner[i + 1][0],
                inner[i][0],
                outer[i][0],
                outer[i + 1][0],
            );
        }
        if !mask.is_hole(i, v_cells - 1) {
            wall(
                &mut mesh,
                inner[i][v_last],
                inner[i + 1][v_last],
                outer[i + 1][v_last],
                outer[i][v_last],
            );
        }
    }

    // End caps, skipping cells whose perforation reaches the end face
    for j in 0..v_cells {
        if !mask.is_hole(0, j) {
            wall(
                &mut mesh,
                inner[0][j],
                inner[0][j + 1],
                outer[0][j + 1],
                outer[0][j],
            );
        }
        if !mask.is_hole(u_cells - 1, j) {
            wall(
                &mut mesh,
                inner[u_last][j + 1],
                inner[u_last][j],
                outer[u_last][j],
                outer[u_last][j + 1],
            );
        }
    }

    mesh
}
