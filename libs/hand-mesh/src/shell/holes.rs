//! # Hole Mask
//!
//! Boolean cell grid marking which shell quads are perforations.

/// Perforation mask over the shell's (U-1) x (V-1) quad cells.
///
/// `true` marks a hole: the cell's skins are skipped and rim walls seal
/// its boundary instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoleMask {
    u_cells: usize,
    v_cells: usize,
    cells: Vec<bool>,
}

impl HoleMask {
    /// Creates an all-false mask for a `u_cells` x `v_cells` grid.
    pub fn new(u_cells: usize, v_cells: usize) -> Self {
        Self {
            u_cells,
            v_cells,
            cells: vec![false; u_cells * v_cells],
        }
    }

    /// Carves a uniform grid of square perforation blocks.
    ///
    /// A `size` x `size` block of cells is marked at every origin whose
    /// indices are multiples of `stride`, clipped to the grid bounds.
    /// Overlapping blocks are idempotent. A `stride` or `size` of zero
    /// disables carving entirely and yields an all-false mask.
    pub fn carve(u_cells: usize, v_cells: usize, stride: u32, size: u32) -> Self {
        let mut mask = Self::new(u_cells, v_cells);
        if stride == 0 || size == 0 {
            return mask;
        }

        // Plain uniform block grid; rows are not offset against each other.
        let stride = stride as usize;
        let size = size as usize;
        for i in (0..u_cells).step_by(stride) {
            for j in (0..v_cells).step_by(stride) {
                for di in 0..size {
                    for dj in 0..size {
                        let (ii, jj) = (i + di, j + dj);
                        if ii < u_cells && jj < v_cells {
                            mask.cells[ii * v_cells + jj] = true;
                        }
                    }
                }
            }
        }
        mask
    }

    /// Returns true when cell `(i, j)` is a perforation.
    #[inline]
    pub fn is_hole(&self, i: usize, j: usize) -> bool {
        self.cells[i * self.v_cells + j]
    }

    /// Number of cells along the length axis.
    #[inline]
    pub fn u_cells(&self) -> usize {
        self.u_cells
    }

    /// Number of cells across the arc.
    #[inline]
    pub fn v_cells(&self) -> usize {
        self.v_cells
    }

    /// Total number of marked hole cells.
    pub fn hole_count(&self) -> usize {
        self.cells.iter().filter(|&&h| h).count()
    }
}
