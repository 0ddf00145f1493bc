//! # Hand Parts
//!
//! Part catalog and assembly composition for the hand shell pipeline.
//!
//! Every printable part belongs to a closed [`PartKind`] catalog. Each
//! kind carries parameter defaults, an optional external asset file,
//! and a built-in placement; [`compose`] runs the uniform
//! generate → scale → place pipeline over all of them and returns the
//! assembled hand.

pub mod assembly;
pub mod error;
pub mod layout;
pub mod params;
pub mod registry;

pub use assembly::{compose, Assembly, AssemblyRequest, Hand};
pub use error::PartError;
pub use layout::{default_placements, Layout, PlacementEntry};
pub use params::{default_cuff_shell, PartKind, PartParams, RawParams};
pub use registry::{asset_filename, generate_part, resolve_part};
