//! # Core Identifiers
//!
//! Axis selection and the opaque entity handles shared with the geometry
//! kernel.

use std::fmt;

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// A coordinate axis. Doubles as the freestream flow direction and as the
/// normal axis of a domain plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All three axes in index order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Returns the component index (0, 1, 2) of this axis.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// Extracts this axis' component from a vector.
    #[inline]
    pub fn component(self, v: DVec3) -> f64 {
        match self {
            Axis::X => v.x,
            Axis::Y => v.y,
            Axis::Z => v.z,
        }
    }

    /// Returns the two remaining axes, lower component index first.
    ///
    /// The ordering matters: the first orthogonal axis receives the
    /// `half_ortho1` extent of a preset, the second `half_ortho2`.
    pub fn orthogonal(self) -> [Axis; 2] {
        match self {
            Axis::X => [Axis::Y, Axis::Z],
            Axis::Y => [Axis::X, Axis::Z],
            Axis::Z => [Axis::X, Axis::Y],
        }
    }

    /// Lowercase axis letter, matching the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opaque handle of a volume entity owned by the geometry kernel.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct VolumeTag(pub i64);

impl fmt::Display for VolumeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque handle of a boundary face entity owned by the geometry kernel.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct FaceTag(pub i64);

impl fmt::Display for FaceTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_index_order() {
        assert_eq!(Axis::X.index(), 0);
        assert_eq!(Axis::Y.index(), 1);
        assert_eq!(Axis::Z.index(), 2);
    }

    #[test]
    fn test_axis_component_extraction() {
        let v = DVec3::new(1.0, 2.0, 3.0);
        assert_eq!(Axis::X.component(v), 1.0);
        assert_eq!(Axis::Y.component(v), 2.0);
        assert_eq!(Axis::Z.component(v), 3.0);
    }

    #[test]
    fn test_orthogonal_axes_lower_index_first() {
        assert_eq!(Axis::X.orthogonal(), [Axis::Y, Axis::Z]);
        assert_eq!(Axis::Y.orthogonal(), [Axis::X, Axis::Z]);
        assert_eq!(Axis::Z.orthogonal(), [Axis::X, Axis::Y]);
    }

    #[test]
    fn test_orthogonal_never_contains_self() {
        for axis in Axis::ALL {
            assert!(!axis.orthogonal().contains(&axis));
        }
    }

    #[test]
    fn test_axis_display() {
        assert_eq!(Axis::X.to_string(), "x");
        assert_eq!(Axis::Z.to_string(), "z");
    }

    #[test]
    fn test_tags_display_raw_value() {
        assert_eq!(VolumeTag(7).to_string(), "7");
        assert_eq!(FaceTag(42).to_string(), "42");
    }

    #[test]
    fn test_tags_are_ordered() {
        assert!(VolumeTag(1) < VolumeTag(2));
        assert!(FaceTag(-1) < FaceTag(0));
    }
}
