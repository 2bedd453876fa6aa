//! # Mesh Presets
//!
//! Named immutable bundles of domain-box multipliers and size-field
//! fractions, all expressed relative to the reference length. A registry of
//! validated presets is injected into the pipeline; there is no process-wide
//! mutable preset state.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// A named mesh preset.
///
/// The four extent multipliers size the farfield box; the four fractions
/// derive the size-field scalars. Everything scales with Lref, so one
/// preset serves a 30 cm drone and a 30 m wing alike.
///
/// # Example
///
/// ```rust
/// use aeroflow_domain::PresetRegistry;
///
/// let registry = PresetRegistry::builtin();
/// let preset = registry.get("mid-1p5m").unwrap();
/// assert_eq!(preset.upstream, 5.0);
/// assert_eq!(preset.downstream, 12.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    /// Inlet distance upstream of the solid, in multiples of Lref.
    pub upstream: f64,
    /// Outlet distance downstream of the solid, in multiples of Lref.
    pub downstream: f64,
    /// Half-extent along the first orthogonal axis, in multiples of Lref.
    pub half_ortho1: f64,
    /// Half-extent along the second orthogonal axis, in multiples of Lref.
    pub half_ortho2: f64,
    /// Near-wall cell size as a fraction of Lref.
    pub near_size_frac: f64,
    /// Farfield cell size as a fraction of Lref.
    pub far_size_frac: f64,
    /// Distance below which the near size applies, as a fraction of Lref.
    pub near_dist_frac: f64,
    /// Distance beyond which the far size applies, as a fraction of Lref.
    pub far_dist_frac: f64,
}

impl Preset {
    /// Validates the preset invariants: positive extents, positive
    /// fractions, and graded size/distance pairs.
    ///
    /// Called once at registry insertion so that every geometry run can
    /// rely on a valid preset without re-checking.
    pub fn validate(&self, name: &str) -> Result<(), ConfigError> {
        let extents = [
            ("upstream", self.upstream),
            ("downstream", self.downstream),
            ("half_ortho1", self.half_ortho1),
            ("half_ortho2", self.half_ortho2),
        ];
        for (field, value) in extents {
            // negated comparison so NaN fails as well
            if !(value > 0.0) {
                return Err(ConfigError::non_positive_extent(name, field, value));
            }
        }

        let fractions = [
            ("near_size_frac", self.near_size_frac),
            ("far_size_frac", self.far_size_frac),
            ("near_dist_frac", self.near_dist_frac),
            ("far_dist_frac", self.far_dist_frac),
        ];
        for (field, value) in fractions {
            if !(value > 0.0) {
                return Err(ConfigError::non_positive_fraction(name, field, value));
            }
        }

        if !(self.near_size_frac < self.far_size_frac) {
            return Err(ConfigError::SizeNotGraded {
                preset: name.to_string(),
                near: self.near_size_frac,
                far: self.far_size_frac,
            });
        }
        if !(self.near_dist_frac < self.far_dist_frac) {
            return Err(ConfigError::DistanceNotGraded {
                preset: name.to_string(),
                near: self.near_dist_frac,
                far: self.far_dist_frac,
            });
        }

        Ok(())
    }
}

/// Immutable registry of named presets.
///
/// Presets are validated on insertion, never at use time, so configuration
/// mistakes surface before any kernel call is made.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PresetRegistry {
    presets: BTreeMap<String, Preset>,
}

impl PresetRegistry {
    /// Creates an empty registry.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a registry holding the built-in presets.
    ///
    /// The names encode the rough target element count: `mid-1p5m` aims at
    /// ~1.5M tetrahedra for a typical wing, `tiny-0p6m` at ~0.6M.
    pub fn builtin() -> Self {
        let mut presets = BTreeMap::new();
        presets.insert(
            "mid-1p5m".to_string(),
            Preset {
                upstream: 5.0,
                downstream: 12.0,
                half_ortho1: 2.5,
                half_ortho2: 2.5,
                near_size_frac: 1.0 / 800.0,
                far_size_frac: 1.0 / 6.0,
                near_dist_frac: 1.0 / 60.0,
                far_dist_frac: 1.0 / 5.0,
            },
        );
        presets.insert(
            "low-0p8m".to_string(),
            Preset {
                upstream: 4.0,
                downstream: 10.0,
                half_ortho1: 2.0,
                half_ortho2: 2.0,
                near_size_frac: 1.0 / 600.0,
                far_size_frac: 1.0 / 4.0,
                near_dist_frac: 1.0 / 50.0,
                far_dist_frac: 1.0 / 4.0,
            },
        );
        presets.insert(
            "small-1p2m".to_string(),
            Preset {
                upstream: 2.5,
                downstream: 6.0,
                half_ortho1: 1.5,
                half_ortho2: 1.5,
                near_size_frac: 1.0 / 300.0,
                far_size_frac: 1.0 / 2.0,
                near_dist_frac: 1.0 / 50.0,
                far_dist_frac: 1.0 / 5.0,
            },
        );
        presets.insert(
            "tiny-0p6m".to_string(),
            Preset {
                upstream: 1.5,
                downstream: 3.5,
                half_ortho1: 1.0,
                half_ortho2: 1.0,
                near_size_frac: 1.0 / 180.0,
                far_size_frac: 1.0,
                near_dist_frac: 1.0 / 60.0,
                far_dist_frac: 1.0 / 6.0,
            },
        );
        presets.insert(
            "ultra-0p6m".to_string(),
            Preset {
                upstream: 2.0,
                downstream: 6.0,
                half_ortho1: 1.2,
                half_ortho2: 1.2,
                near_size_frac: 1.0 / 250.0,
                far_size_frac: 1.0 / 2.0,
                near_dist_frac: 1.0 / 40.0,
                far_dist_frac: 1.0 / 4.0,
            },
        );
        Self { presets }
    }

    /// Inserts a preset after validating it. Replaces any preset already
    /// registered under `name`.
    pub fn insert(&mut self, name: impl Into<String>, preset: Preset) -> Result<(), ConfigError> {
        let name = name.into();
        preset.validate(&name)?;
        self.presets.insert(name, preset);
        Ok(())
    }

    /// Looks a preset up by name.
    pub fn get(&self, name: &str) -> Result<&Preset, ConfigError> {
        self.presets
            .get(name)
            .ok_or_else(|| ConfigError::unknown_preset(name))
    }

    /// Registered preset names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.presets.keys().map(String::as_str)
    }

    /// Number of registered presets.
    #[inline]
    pub fn len(&self) -> usize {
        self.presets.len()
    }

    /// True when no presets are registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}
