//! # Hand IO
//!
//! Serialization boundary for the hand shell pipeline.
//!
//! Writes generated meshes as deterministic ASCII STL, loads external
//! part assets from binary or ASCII STL files, and exposes STEP export
//! as a capability behind the [`StepBackend`] trait so builds without a
//! CAD kernel fail fast instead of producing partial output.

pub mod error;
pub mod step;
pub mod stl;

pub use error::{IoError, IoResult};
pub use step::{export_step, SewnShell, StepBackend};
pub use stl::{load_stl, save_stl, write_stl};
