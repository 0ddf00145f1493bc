//! # Config Crate
//!
//! Centralized configuration constants for the hand shell pipeline.
//! All magic numbers and tunable parameters are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPSILON_TOLERANCE, PIN_SEGMENTS};
//!
//! // Use EPSILON_TOLERANCE for floating-point comparisons
//! let value: f64 = 0.00000000001; // 1e-11, smaller than EPSILON_TOLERANCE
//! let is_zero = value.abs() < EPSILON_TOLERANCE;
//! assert!(is_zero);
//!
//! // Use the shared segment count when tessellating pin cylinders
//! assert!(PIN_SEGMENTS >= 3);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Boundary Contract**: Clamp bounds match the parameter contract the
//!   core exposes to its HTTP/form collaborator
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
