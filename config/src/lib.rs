//! # Config Crate
//!
//! Centralized configuration constants for the aeroflow domain pipeline.
//! All magic numbers and solver-contract names are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{plane_tolerance, GROUP_WALLS, MIN_REFERENCE_LENGTH};
//!
//! // Tolerances are always derived from the domain size, never absolute
//! let tol = plane_tolerance(19.0);
//! assert!(tol > 0.0 && tol < 1e-6);
//!
//! // Patch names are a contract with the downstream solver
//! assert_eq!(GROUP_WALLS, "walls");
//!
//! // Reference lengths are floored to stay usable for degenerate geometry
//! assert!(MIN_REFERENCE_LENGTH > 0.0);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Resolution Independent**: Tolerances scale with the geometry they test
//! - **Solver Compatible**: Patch names match the CFD solver's boundary-condition lookup
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
