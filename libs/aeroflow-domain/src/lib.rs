//! # Aeroflow Domain
//!
//! Geometric core for external-aerodynamics domain preparation: bounding
//! analysis, farfield box construction, boundary face classification and
//! distance-graded size fields. Everything here is pure computation over
//! bounding boxes; talking to a geometry kernel is the pipeline's job.
//!
//! ## Architecture
//!
//! ```text
//! bounds (Lref) → domain_box (planes, Ldom) → classify (roles) → sizing
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use aeroflow_domain::{merged_bounds, Aabb, Axis, DomainBox, PresetRegistry, VolumeTag};
//! use glam::DVec3;
//!
//! let solid = Aabb::new(DVec3::splat(-0.5), DVec3::splat(0.5));
//! let bounds = merged_bounds(&[(VolumeTag(1), solid)])?;
//!
//! let registry = PresetRegistry::builtin();
//! let preset = registry.get("mid-1p5m")?;
//! let domain = DomainBox::build(&bounds, Axis::X, preset);
//! assert!(domain.aabb().strictly_contains(bounds.bbox()));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod aabb;
pub mod bounds;
pub mod classify;
pub mod domain_box;
pub mod error;
pub mod preset;
pub mod sizing;
pub mod types;

pub use aabb::Aabb;
pub use bounds::{merged_bounds, SolidBounds};
pub use classify::{classify_faces, ClassifiedFaces, Role, RoleCounts};
pub use domain_box::{BoxPlane, DomainBox, PlaneSide};
pub use error::{ConfigError, GeometryError};
pub use preset::{Preset, PresetRegistry};
pub use sizing::{SizeGrading, SizingReference};
pub use types::{Axis, FaceTag, VolumeTag};
