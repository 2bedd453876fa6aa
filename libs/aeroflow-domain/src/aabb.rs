//! # Axis-Aligned Bounding Box
//!
//! The `Aabb` is the only geometric view this workspace takes of kernel
//! entities: solids, the domain box and boundary faces are all handled
//! through their bounds. All math is f64.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::types::Axis;

/// An axis-aligned box given by its minimum and maximum corners.
///
/// Boundary faces are represented as degenerate boxes (zero extent along
/// their plane axis), exactly as the geometry kernel reports them.
///
/// # Example
///
/// ```rust
/// use aeroflow_domain::Aabb;
/// use glam::DVec3;
///
/// let unit = Aabb::new(DVec3::splat(-0.5), DVec3::splat(0.5));
/// assert_eq!(unit.max_extent(), 1.0);
/// assert_eq!(unit.diagonal(), 3.0_f64.sqrt());
/// assert_eq!(unit.center(), DVec3::ZERO);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Minimum corner.
    pub min: DVec3,
    /// Maximum corner.
    pub max: DVec3,
}

impl Aabb {
    /// Creates a box from its two corners. `min` must be componentwise
    /// below or equal to `max`; callers hold that invariant.
    #[inline]
    pub fn new(min: DVec3, max: DVec3) -> Self {
        Self { min, max }
    }

    /// Smallest box containing both `self` and `other`.
    pub fn union(&self, other: &Aabb) -> Aabb {
        Aabb::new(self.min.min(other.min), self.max.max(other.max))
    }

    /// Per-axis extents.
    #[inline]
    pub fn extent(&self) -> DVec3 {
        self.max - self.min
    }

    /// Largest extent over the three axes.
    #[inline]
    pub fn max_extent(&self) -> f64 {
        self.extent().max_element()
    }

    /// Length of the main diagonal.
    #[inline]
    pub fn diagonal(&self) -> f64 {
        self.extent().length()
    }

    /// Geometric center.
    #[inline]
    pub fn center(&self) -> DVec3 {
        0.5 * (self.min + self.max)
    }

    /// True when every bound is a finite number.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }

    /// Lower bound along `axis`.
    #[inline]
    pub fn min_on(&self, axis: Axis) -> f64 {
        axis.component(self.min)
    }

    /// Upper bound along `axis`.
    #[inline]
    pub fn max_on(&self, axis: Axis) -> f64 {
        axis.component(self.max)
    }

    /// True when `other` lies strictly inside `self` on every axis.
    ///
    /// Touching bounds do not count: a solid flush with a domain wall is
    /// not strictly contained.
    pub fn strictly_contains(&self, other: &Aabb) -> bool {
        self.min.cmplt(other.min).all() && self.max.cmpgt(other.max).all()
    }

    /// The six boundary faces of this box as degenerate boxes, ordered
    /// x-min, x-max, y-min, y-max, z-min, z-max.
    ///
    /// # Example
    ///
    /// ```rust
    /// use aeroflow_domain::Aabb;
    /// use glam::DVec3;
    ///
    /// let bb = Aabb::new(DVec3::ZERO, DVec3::new(2.0, 3.0, 4.0));
    /// let faces = bb.face_boxes();
    /// assert_eq!(faces.len(), 6);
    /// // The x-min face is flat at x = 0 and spans the full y/z extents
    /// assert_eq!(faces[0].min, DVec3::new(0.0, 0.0, 0.0));
    /// assert_eq!(faces[0].max, DVec3::new(0.0, 3.0, 4.0));
    /// ```
    pub fn face_boxes(&self) -> [Aabb; 6] {
        [
            self.face_at(Axis::X, self.min.x),
            self.face_at(Axis::X, self.max.x),
            self.face_at(Axis::Y, self.min.y),
            self.face_at(Axis::Y, self.max.y),
            self.face_at(Axis::Z, self.min.z),
            self.face_at(Axis::Z, self.max.z),
        ]
    }

    /// Cross-section of this box pinned at `position` along `axis`.
    fn face_at(&self, axis: Axis, position: f64) -> Aabb {
        let mut min = self.min.to_array();
        let mut max = self.max.to_array();
        min[axis.index()] = position;
        max[axis.index()] = position;
        Aabb::new(DVec3::from(min), DVec3::from(max))
    }
}
