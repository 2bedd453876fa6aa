//! # Domain Box
//!
//! Sizes and positions the farfield box around the solid bounds: upstream
//! and downstream margins stretch along the flow axis, the orthogonal axes
//! are centered on the solid centroid. The box exposes its six labeled
//! planes, which later drive face classification.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::aabb::Aabb;
use crate::bounds::SolidBounds;
use crate::preset::Preset;
use crate::types::Axis;

/// Which side of the domain box a plane bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaneSide {
    Min,
    Max,
}

/// One of the six bounding planes of the domain box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxPlane {
    /// Normal axis of the plane.
    pub axis: Axis,
    /// Side of the box the plane bounds.
    pub side: PlaneSide,
    /// Coordinate of the plane along its axis.
    pub position: f64,
}

impl BoxPlane {
    /// True when `face` lies flat on this plane within `tol`.
    ///
    /// Both bounding-box extents of the face along the plane axis must sit
    /// within `tol` of the plane position. A face that merely touches the
    /// plane at an edge or point has only one extent there and is rejected.
    pub fn contains_face(&self, face: &Aabb, tol: f64) -> bool {
        (face.min_on(self.axis) - self.position).abs() <= tol
            && (face.max_on(self.axis) - self.position).abs() <= tol
    }
}

/// The farfield box derived from solid bounds, flow axis and preset.
#[derive(Debug, Clone, PartialEq)]
pub struct DomainBox {
    aabb: Aabb,
    flow_axis: Axis,
    planes: [BoxPlane; 6],
    ldom: f64,
}

impl DomainBox {
    /// Builds the farfield box.
    ///
    /// Along the flow axis the box spans
    /// `[min - upstream * Lref, max + downstream * Lref]`; each orthogonal
    /// axis is centered on the solid centroid and spans `half_ortho * Lref`
    /// to either side, `half_ortho1` on the lower-indexed orthogonal axis.
    ///
    /// Containment of the solids is a preset-validity contract checked at
    /// registry insertion, not re-verified here; an undersized box surfaces
    /// later as a failed boolean cut.
    ///
    /// # Example
    ///
    /// ```rust
    /// use aeroflow_domain::{merged_bounds, Aabb, Axis, DomainBox, PresetRegistry, VolumeTag};
    /// use glam::DVec3;
    ///
    /// let cube = Aabb::new(DVec3::splat(-0.5), DVec3::splat(0.5));
    /// let bounds = merged_bounds(&[(VolumeTag(1), cube)]).unwrap();
    /// let registry = PresetRegistry::builtin();
    /// let preset = registry.get("mid-1p5m").unwrap();
    ///
    /// let domain = DomainBox::build(&bounds, Axis::X, preset);
    /// assert_eq!(domain.aabb().min, DVec3::new(-5.5, -2.5, -2.5));
    /// assert_eq!(domain.aabb().max, DVec3::new(12.5, 2.5, 2.5));
    /// ```
    pub fn build(bounds: &SolidBounds, flow_axis: Axis, preset: &Preset) -> Self {
        let lref = bounds.reference_length();
        let solid = bounds.bbox();
        let center = solid.center();

        let mut min = center.to_array();
        let mut max = center.to_array();

        min[flow_axis.index()] = solid.min_on(flow_axis) - preset.upstream * lref;
        max[flow_axis.index()] = solid.max_on(flow_axis) + preset.downstream * lref;

        let [ortho1, ortho2] = flow_axis.orthogonal();
        for (axis, half) in [
            (ortho1, preset.half_ortho1 * lref),
            (ortho2, preset.half_ortho2 * lref),
        ] {
            let c = axis.component(center);
            min[axis.index()] = c - half;
            max[axis.index()] = c + half;
        }

        let aabb = Aabb::new(DVec3::from(min), DVec3::from(max));
        let planes = [
            Self::plane_of(&aabb, Axis::X, PlaneSide::Min),
            Self::plane_of(&aabb, Axis::X, PlaneSide::Max),
            Self::plane_of(&aabb, Axis::Y, PlaneSide::Min),
            Self::plane_of(&aabb, Axis::Y, PlaneSide::Max),
            Self::plane_of(&aabb, Axis::Z, PlaneSide::Min),
            Self::plane_of(&aabb, Axis::Z, PlaneSide::Max),
        ];

        Self {
            ldom: aabb.diagonal(),
            aabb,
            flow_axis,
            planes,
        }
    }

    fn plane_of(aabb: &Aabb, axis: Axis, side: PlaneSide) -> BoxPlane {
        let position = match side {
            PlaneSide::Min => aabb.min_on(axis),
            PlaneSide::Max => aabb.max_on(axis),
        };
        BoxPlane {
            axis,
            side,
            position,
        }
    }

    /// Bounds of the box.
    #[inline]
    pub fn aabb(&self) -> &Aabb {
        &self.aabb
    }

    /// Flow axis the box was built for.
    #[inline]
    pub fn flow_axis(&self) -> Axis {
        self.flow_axis
    }

    /// Diagonal length of the box; scales the classification tolerance.
    #[inline]
    pub fn ldom(&self) -> f64 {
        self.ldom
    }

    /// All six planes, ordered x-min, x-max, y-min, y-max, z-min, z-max.
    #[inline]
    pub fn planes(&self) -> &[BoxPlane; 6] {
        &self.planes
    }

    /// The plane bounding `side` of the box along `axis`.
    pub fn plane(&self, axis: Axis, side: PlaneSide) -> &BoxPlane {
        let offset = match side {
            PlaneSide::Min => 0,
            PlaneSide::Max => 1,
        };
        &self.planes[2 * axis.index() + offset]
    }

    /// The upstream plane (flow-axis minimum), where the inlet lives.
    #[inline]
    pub fn inlet_plane(&self) -> &BoxPlane {
        self.plane(self.flow_axis, PlaneSide::Min)
    }

    /// The downstream plane (flow-axis maximum), where the outlet lives.
    #[inline]
    pub fn outlet_plane(&self) -> &BoxPlane {
        self.plane(self.flow_axis, PlaneSide::Max)
    }

    /// The four planes orthogonal to the flow axis, the farfield walls.
    pub fn lateral_planes(&self) -> [&BoxPlane; 4] {
        let [o1, o2] = self.flow_axis.orthogonal();
        [
            self.plane(o1, PlaneSide::Min),
            self.plane(o1, PlaneSide::Max),
            self.plane(o2, PlaneSide::Min),
            self.plane(o2, PlaneSide::Max),
        ]
    }
}
