//! # Domain Errors
//!
//! Error types for geometry analysis and preset validation. Both are fatal
//! and raised before any expensive kernel work.

use thiserror::Error;

use crate::types::VolumeTag;

/// Errors from analyzing the input solids.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    /// The caller supplied no solid bodies at all
    #[error("no solid volumes found; the input must contain at least one watertight solid")]
    EmptySolidSet,

    /// A solid reported a NaN or infinite bounding box
    #[error("volume {volume} has a non-finite bounding box")]
    NonFiniteBounds { volume: VolumeTag },
}

/// Errors from preset lookup and validation.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// Requested preset name is not in the registry
    #[error("unknown preset '{name}'")]
    UnknownPreset { name: String },

    /// A box extent multiplier is zero or negative
    #[error("preset '{preset}': {field} must be positive, got {value}")]
    NonPositiveExtent {
        preset: String,
        field: &'static str,
        value: f64,
    },

    /// A size or distance fraction is zero or negative
    #[error("preset '{preset}': {field} must be positive, got {value}")]
    NonPositiveFraction {
        preset: String,
        field: &'static str,
        value: f64,
    },

    /// Near size does not grade up to the far size
    #[error(
        "preset '{preset}': near_size_frac ({near}) must be smaller than far_size_frac ({far})"
    )]
    SizeNotGraded { preset: String, near: f64, far: f64 },

    /// Near distance does not grade up to the far distance
    #[error(
        "preset '{preset}': near_dist_frac ({near}) must be smaller than far_dist_frac ({far})"
    )]
    DistanceNotGraded { preset: String, near: f64, far: f64 },
}

impl ConfigError {
    /// Creates an unknown-preset error.
    pub fn unknown_preset(name: impl Into<String>) -> Self {
        Self::UnknownPreset { name: name.into() }
    }

    /// Creates a non-positive extent multiplier error.
    pub fn non_positive_extent(preset: impl Into<String>, field: &'static str, value: f64) -> Self {
        Self::NonPositiveExtent {
            preset: preset.into(),
            field,
            value,
        }
    }

    /// Creates a non-positive fraction error.
    pub fn non_positive_fraction(
        preset: impl Into<String>,
        field: &'static str,
        value: f64,
    ) -> Self {
        Self::NonPositiveFraction {
            preset: preset.into(),
            field,
            value,
        }
    }
}
