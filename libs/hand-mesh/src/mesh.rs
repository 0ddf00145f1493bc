//! # Mesh Data Structure
//!
//! Triangle-soup mesh representation used throughout the shell pipeline.
//!
//! Triangles carry explicit vertex positions rather than indices: the
//! pipeline duplicates shared grid points freely, and the serializers
//! (ASCII STL, STEP sewing) consume per-facet coordinates anyway.
//! Triangle order is preserved end to end so output is deterministic.

use config::constants::EPSILON_TOLERANCE;
use glam::DVec3;

/// A single triangle with explicit vertex positions (mm).
///
/// The vertex ordering (winding) determines the outward surface normal
/// via the right-hand rule. No normal is stored; it is always derived.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// First vertex.
    pub a: DVec3,
    /// Second vertex.
    pub b: DVec3,
    /// Third vertex.
    pub c: DVec3,
}

impl Triangle {
    /// Creates a triangle from three vertices.
    pub fn new(a: DVec3, b: DVec3, c: DVec3) -> Self {
        Self { a, b, c }
    }

    /// Derives the unit normal from the winding.
    ///
    /// A degenerate (zero-area) triangle yields `DVec3::ZERO` rather than
    /// dividing by zero; serializers emit that as a safe placeholder.
    pub fn normal(&self) -> DVec3 {
        let n = (self.b - self.a).cross(self.c - self.a);
        let len = n.length();
        if len > EPSILON_TOLERANCE {
            n / len
        } else {
            DVec3::ZERO
        }
    }

    /// Returns the triangle with its second and third vertices swapped,
    /// reversing the winding and therefore the normal direction.
    pub fn flipped(&self) -> Self {
        Self {
            a: self.a,
            b: self.c,
            c: self.b,
        }
    }

    /// Applies a point mapping to every vertex, preserving winding.
    pub fn map(&self, f: impl Fn(DVec3) -> DVec3) -> Self {
        Self {
            a: f(self.a),
            b: f(self.b),
            c: f(self.c),
        }
    }
}

/// An ordered sequence of triangles.
///
/// # Example
///
/// ```rust
/// use hand_mesh::{Mesh, Triangle};
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.push(Triangle::new(DVec3::ZERO, DVec3::X, DVec3::Y));
/// assert_eq!(mesh.triangle_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    triangles: Vec<Triangle>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self {
            triangles: Vec::new(),
        }
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(triangle_count: usize) -> Self {
        Self {
            triangles: Vec::with_capacity(triangle_count),
        }
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh has no triangles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Appends a triangle.
    pub fn push(&mut self, triangle: Triangle) {
        self.triangles.push(triangle);
    }

    /// Appends a quad `a-b-c-d` triangulated along the fixed `a-c`
    /// diagonal as `(a,b,c)` and `(a,c,d)`.
    ///
    /// With `flip` set, the winding of both triangles is reversed,
    /// flipping the quad's normal.
    pub fn push_quad(&mut self, a: DVec3, b: DVec3, c: DVec3, d: DVec3, flip: bool) {
        if flip {
            self.triangles.push(Triangle::new(a, c, b));
            self.triangles.push(Triangle::new(a, d, c));
        } else {
            self.triangles.push(Triangle::new(a, b, c));
            self.triangles.push(Triangle::new(a, c, d));
        }
    }

    /// Returns a reference to the triangles.
    #[inline]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Appends all triangles of another mesh, preserving order.
    pub fn merge(&mut self, other: &Mesh) {
        self.triangles.extend_from_slice(&other.triangles);
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners; an empty mesh yields a zero box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let Some(first) = self.triangles.first() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };

        let mut min = first.a;
        let mut max = first.a;
        for tri in &self.triangles {
            for v in [tri.a, tri.b, tri.c] {
                min = min.min(v);
                max = max.max(v);
            }
        }
        (min, max)
    }
}

impl FromIterator<Triangle> for Mesh {
    fn from_iter<I: IntoIterator<Item = Triangle>>(iter: I) -> Self {
        Self {
            triangles: iter.into_iter().collect(),
        }
    }
}
