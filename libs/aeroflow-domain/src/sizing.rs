//! # Background Size Field
//!
//! Derives the distance-graded sizing scalars from a preset and evaluates
//! the grading ramp: fine cells inside the near band, coarse cells beyond
//! the far band, linear blending in between.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::preset::Preset;

/// Which faces the distance field measures against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizingReference {
    /// Distance to the classified wall faces, falling back to the body
    /// surfaces when classification leaves the wall set empty.
    #[default]
    WallFaces,
    /// Distance to the original body surfaces, ignoring classification.
    /// Keeps refinement tight on the body even when the cut produces
    /// box-influenced wall patches.
    BodySurface,
}

impl SizingReference {
    /// Serialized name, used in logs and reports.
    pub fn as_str(self) -> &'static str {
        match self {
            SizingReference::WallFaces => "wall_faces",
            SizingReference::BodySurface => "body_surface",
        }
    }
}

impl fmt::Display for SizingReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The four scalars of the graded size field, in model units.
///
/// Constructed from a validated preset, so `h_near < h_far` and
/// `d_near < d_far` hold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizeGrading {
    /// Cell size applied within `d_near` of the reference faces.
    pub h_near: f64,
    /// Cell size applied beyond `d_far`.
    pub h_far: f64,
    /// Distance up to which `h_near` applies.
    pub d_near: f64,
    /// Distance beyond which `h_far` applies.
    pub d_far: f64,
}

impl SizeGrading {
    /// Scales the preset fractions by the reference length.
    pub fn from_preset(preset: &Preset, lref: f64) -> Self {
        Self {
            h_near: lref * preset.near_size_frac,
            h_far: lref * preset.far_size_frac,
            d_near: lref * preset.near_dist_frac,
            d_far: lref * preset.far_dist_frac,
        }
    }

    /// Target cell size at `distance` from the reference faces.
    ///
    /// `h_near` on `[0, d_near]`, `h_far` on `[d_far, inf)`, linear in
    /// between. The result never leaves `[h_near, h_far]`.
    pub fn size_at(&self, distance: f64) -> f64 {
        if distance <= self.d_near {
            self.h_near
        } else if distance >= self.d_far {
            self.h_far
        } else {
            let t = (distance - self.d_near) / (self.d_far - self.d_near);
            self.h_near + t * (self.h_far - self.h_near)
        }
    }
}
