//! # Solid Bounds
//!
//! Merges the bounding boxes of all input solids and derives the reference
//! length that every later dimension is expressed against.

use config::constants::reference_length;
use serde::{Deserialize, Serialize};

use crate::aabb::Aabb;
use crate::error::GeometryError;
use crate::types::VolumeTag;

/// Merged bounds of the input solids plus the derived reference length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolidBounds {
    bbox: Aabb,
    reference_length: f64,
}

impl SolidBounds {
    /// Merged bounding box over all solids.
    #[inline]
    pub fn bbox(&self) -> &Aabb {
        &self.bbox
    }

    /// Reference length Lref: the largest extent of the merged box,
    /// floored so it is always positive.
    #[inline]
    pub fn reference_length(&self) -> f64 {
        self.reference_length
    }
}

/// Computes the merged bounds and reference length of the input solids.
///
/// Fails when the collection is empty or any solid reports non-finite
/// bounds; both abort the run before a domain box is ever constructed.
///
/// # Example
///
/// ```rust
/// use aeroflow_domain::{merged_bounds, Aabb, VolumeTag};
/// use glam::DVec3;
///
/// let wing = Aabb::new(DVec3::new(0.0, 0.0, 0.0), DVec3::new(1.0, 4.0, 0.2));
/// let bounds = merged_bounds(&[(VolumeTag(1), wing)]).unwrap();
/// assert_eq!(bounds.reference_length(), 4.0);
/// ```
pub fn merged_bounds(solids: &[(VolumeTag, Aabb)]) -> Result<SolidBounds, GeometryError> {
    let mut merged: Option<Aabb> = None;

    for (volume, bbox) in solids {
        if !bbox.is_finite() {
            return Err(GeometryError::NonFiniteBounds { volume: *volume });
        }
        merged = Some(match merged {
            Some(acc) => acc.union(bbox),
            None => *bbox,
        });
    }

    let bbox = merged.ok_or(GeometryError::EmptySolidSet)?;
    Ok(SolidBounds {
        bbox,
        reference_length: reference_length(bbox.max_extent()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::constants::MIN_REFERENCE_LENGTH;
    use glam::DVec3;

    #[test]
    fn test_empty_collection_is_rejected() {
        assert_eq!(merged_bounds(&[]), Err(GeometryError::EmptySolidSet));
    }

    #[test]
    fn test_single_solid_passes_through() {
        let bb = Aabb::new(DVec3::splat(-0.5), DVec3::splat(0.5));
        let bounds = merged_bounds(&[(VolumeTag(3), bb)]).unwrap();
        assert_eq!(*bounds.bbox(), bb);
        assert_eq!(bounds.reference_length(), 1.0);
    }

    #[test]
    fn test_multiple_solids_are_merged() {
        let a = Aabb::new(DVec3::new(0.0, 0.0, 0.0), DVec3::new(1.0, 1.0, 1.0));
        let b = Aabb::new(DVec3::new(2.0, -1.0, 0.0), DVec3::new(3.0, 0.5, 2.0));
        let bounds = merged_bounds(&[(VolumeTag(1), a), (VolumeTag(2), b)]).unwrap();
        assert_eq!(bounds.bbox().min, DVec3::new(0.0, -1.0, 0.0));
        assert_eq!(bounds.bbox().max, DVec3::new(3.0, 1.0, 2.0));
        // x spans 0..3, the largest merged extent
        assert_eq!(bounds.reference_length(), 3.0);
    }

    #[test]
    fn test_degenerate_solid_gets_floored_reference() {
        let point = Aabb::new(DVec3::ONE, DVec3::ONE);
        let bounds = merged_bounds(&[(VolumeTag(1), point)]).unwrap();
        assert_eq!(bounds.reference_length(), MIN_REFERENCE_LENGTH);
    }

    #[test]
    fn test_non_finite_bounds_name_the_volume() {
        let good = Aabb::new(DVec3::ZERO, DVec3::ONE);
        let bad = Aabb::new(DVec3::new(f64::NAN, 0.0, 0.0), DVec3::ONE);
        let err = merged_bounds(&[(VolumeTag(1), good), (VolumeTag(9), bad)]).unwrap_err();
        assert_eq!(
            err,
            GeometryError::NonFiniteBounds {
                volume: VolumeTag(9)
            }
        );
    }
}
