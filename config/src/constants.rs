//! # Configuration Constants
//!
//! Centralized constants for the aeroflow domain pipeline. All tolerances,
//! reference-length floors, and solver-facing patch names are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Size-relative tolerances for plane membership tests
//! - **Solver Contract**: Physical group names consumed by the CFD solver
//! - **Defaults**: Preset and mesher defaults

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Relative tolerance factor for plane membership tests.
///
/// A boundary face is considered to lie on a domain plane when both of its
/// bounding-box extents along the plane axis fall within
/// `PLANE_TOLERANCE_FACTOR * Ldom` of the plane position, where `Ldom` is
/// the domain box diagonal. Scaling with the domain keeps the test
/// meaningful for millimeter-scale and kilometer-scale cases alike.
///
/// # Example
///
/// ```rust
/// use config::constants::{plane_tolerance, PLANE_TOLERANCE_FACTOR};
///
/// let ldom = 250.0;
/// assert_eq!(plane_tolerance(ldom), PLANE_TOLERANCE_FACTOR * ldom);
/// ```
pub const PLANE_TOLERANCE_FACTOR: f64 = 1e-8;

/// Floor for the geometric reference length.
///
/// The reference length drives every derived dimension (box margins, size
/// field targets), so it must never collapse to zero even for degenerate
/// input such as a single point or an axis-aligned plate.
///
/// # Example
///
/// ```rust
/// use config::constants::{reference_length, MIN_REFERENCE_LENGTH};
///
/// // A zero-thickness body still yields a usable reference length
/// assert_eq!(reference_length(0.0), MIN_REFERENCE_LENGTH);
/// ```
pub const MIN_REFERENCE_LENGTH: f64 = 1e-9;

// =============================================================================
// SOLVER CONTRACT (PHYSICAL GROUP NAMES)
// =============================================================================

/// Physical volume group covering the meshed fluid region.
///
/// Downstream solvers look boundary conditions up by these exact names, so
/// they are part of the output contract and must never be altered.
///
/// # Example
///
/// ```rust
/// use config::constants::GROUP_FLUID;
///
/// assert_eq!(GROUP_FLUID, "fluid");
/// ```
pub const GROUP_FLUID: &str = "fluid";

/// Physical surface group for the upstream (velocity inlet) plane.
pub const GROUP_INLET: &str = "inlet";

/// Physical surface group for the downstream (pressure outlet) plane.
pub const GROUP_OUTLET: &str = "outlet";

/// Physical surface group for the body surfaces exposed by the boolean cut.
///
/// # Example
///
/// ```rust
/// use config::constants::GROUP_WALLS;
///
/// assert_eq!(GROUP_WALLS, "walls");
/// ```
pub const GROUP_WALLS: &str = "walls";

/// Physical surface group for the four lateral domain planes.
pub const GROUP_FARFIELD: &str = "farfield";

// =============================================================================
// DEFAULT CONSTANTS
// =============================================================================

/// Name of the preset selected when a case does not specify one.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_PRESET;
///
/// assert_eq!(DEFAULT_PRESET, "mid-1p5m");
/// ```
pub const DEFAULT_PRESET: &str = "mid-1p5m";

/// Default finite element order requested from the mesher.
///
/// First-order tetrahedra keep element counts (and downstream solve times)
/// predictable for the target mesh sizes of the built-in presets.
pub const DEFAULT_ELEMENT_ORDER: u8 = 1;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Computes the absolute plane tolerance for a domain of diagonal `ldom`.
///
/// Falls back to a unit length scale when `ldom` is not positive, so the
/// tolerance itself stays positive and comparisons remain well-defined.
///
/// # Example
///
/// ```rust
/// use config::constants::plane_tolerance;
///
/// assert_eq!(plane_tolerance(100.0), 1e-6);
///
/// // Degenerate domains still get a positive tolerance
/// assert_eq!(plane_tolerance(0.0), 1e-8);
/// assert_eq!(plane_tolerance(-5.0), 1e-8);
/// ```
#[inline]
pub fn plane_tolerance(ldom: f64) -> f64 {
    let scale = if ldom > 0.0 { ldom } else { 1.0 };
    PLANE_TOLERANCE_FACTOR * scale
}

/// Floors a raw extent to the minimum usable reference length.
///
/// # Example
///
/// ```rust
/// use config::constants::reference_length;
///
/// assert_eq!(reference_length(2.0), 2.0);
/// assert_eq!(reference_length(0.0), 1e-9);
/// ```
#[inline]
pub fn reference_length(max_extent: f64) -> f64 {
    max_extent.max(MIN_REFERENCE_LENGTH)
}
