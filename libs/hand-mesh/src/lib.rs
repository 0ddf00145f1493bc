//! # Hand Mesh
//!
//! Procedural geometry kernel for 3D-printable rigid shell parts.
//! Generates perforated cylindrical shells and proxy primitives as
//! triangle meshes ready for STL or STEP serialization.
//!
//! ## Architecture
//!
//! ```text
//! ShellParams → shell (grids + hole mask + walls) ┐
//! primitives (box, cylinder)                      ├→ Mesh → transform → output
//! ```
//!
//! ## Guarantees
//!
//! All generation is a pure function of its inputs: no shared state, no
//! caching, no internal parallelism. A shell built from any valid hole
//! mask is manifold-closed: every directed edge has exactly one
//! reverse-directed partner.

pub mod error;
pub mod mesh;
pub mod primitives;
pub mod shell;
pub mod transform;

pub use error::MeshError;
pub use mesh::{Mesh, Triangle};
pub use shell::{build_shell, HoleMask, ShellParams};
pub use transform::{Axis, Placement};
