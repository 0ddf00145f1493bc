//! # Primitives
//!
//! Fixed-topology proxy meshes (box, solid cylinder) for parts that have
//! no parametric shell of their own.

pub mod cuboid;
pub mod cylinder;

pub use cuboid::create_box;
pub use cylinder::create_cylinder;
