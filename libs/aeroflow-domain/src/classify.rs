//! # Boundary Face Classification
//!
//! Partitions the fluid volume's boundary faces into inlet, outlet,
//! farfield and wall sets by testing each face against the labeled domain
//! planes. Wall faces are whatever remains unmatched: positive shape
//! matching on curved body surfaces would be fragile against numerical
//! noise, the subtractive definition is not.

use config::constants::{plane_tolerance, GROUP_FARFIELD, GROUP_INLET, GROUP_OUTLET, GROUP_WALLS};
use serde::{Deserialize, Serialize};

use crate::aabb::Aabb;
use crate::domain_box::DomainBox;
use crate::types::FaceTag;

/// Boundary role of a classified face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Inlet,
    Outlet,
    Wall,
    Farfield,
}

impl Role {
    /// All roles, in physical-group definition order.
    pub const ALL: [Role; 4] = [Role::Inlet, Role::Outlet, Role::Wall, Role::Farfield];

    /// The exported physical group name for this role.
    pub fn group_name(self) -> &'static str {
        match self {
            Role::Inlet => GROUP_INLET,
            Role::Outlet => GROUP_OUTLET,
            Role::Wall => GROUP_WALLS,
            Role::Farfield => GROUP_FARFIELD,
        }
    }
}

/// Face counts per role, reported after every run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleCounts {
    pub inlet: usize,
    pub outlet: usize,
    pub walls: usize,
    pub farfield: usize,
}

/// The four pairwise-disjoint face sets covering the fluid boundary.
///
/// Input face order is preserved within each set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassifiedFaces {
    inlet: Vec<FaceTag>,
    outlet: Vec<FaceTag>,
    walls: Vec<FaceTag>,
    farfield: Vec<FaceTag>,
}

impl ClassifiedFaces {
    /// Faces on the upstream domain plane.
    #[inline]
    pub fn inlet(&self) -> &[FaceTag] {
        &self.inlet
    }

    /// Faces on the downstream domain plane.
    #[inline]
    pub fn outlet(&self) -> &[FaceTag] {
        &self.outlet
    }

    /// Faces on the solid body, exposed by the boolean cut.
    #[inline]
    pub fn walls(&self) -> &[FaceTag] {
        &self.walls
    }

    /// Faces on the four lateral domain planes.
    #[inline]
    pub fn farfield(&self) -> &[FaceTag] {
        &self.farfield
    }

    /// The face set of `role`.
    pub fn faces_of(&self, role: Role) -> &[FaceTag] {
        match role {
            Role::Inlet => &self.inlet,
            Role::Outlet => &self.outlet,
            Role::Wall => &self.walls,
            Role::Farfield => &self.farfield,
        }
    }

    /// Per-role face counts.
    pub fn counts(&self) -> RoleCounts {
        RoleCounts {
            inlet: self.inlet.len(),
            outlet: self.outlet.len(),
            walls: self.walls.len(),
            farfield: self.farfield.len(),
        }
    }

    /// Total number of classified faces.
    pub fn total(&self) -> usize {
        self.inlet.len() + self.outlet.len() + self.walls.len() + self.farfield.len()
    }
}

/// Classifies the boundary faces of the fluid volume.
///
/// Each face is tested against the domain planes with a tolerance of
/// `PLANE_TOLERANCE_FACTOR * Ldom`, relative to the domain size so the
/// outcome is identical across unit systems. First match wins:
///
/// 1. flat on the flow-axis minimum plane → `Inlet`
/// 2. flat on the flow-axis maximum plane → `Outlet`
/// 3. flat on any of the four lateral planes → `Farfield`
/// 4. everything else → `Wall`
///
/// Every face receives exactly one role, so the four sets are pairwise
/// disjoint and together cover the input exactly.
pub fn classify_faces(faces: &[(FaceTag, Aabb)], domain: &DomainBox) -> ClassifiedFaces {
    let tol = plane_tolerance(domain.ldom());
    let inlet_plane = domain.inlet_plane();
    let outlet_plane = domain.outlet_plane();
    let lateral = domain.lateral_planes();

    let mut classified = ClassifiedFaces::default();
    for (tag, bbox) in faces {
        if inlet_plane.contains_face(bbox, tol) {
            classified.inlet.push(*tag);
        } else if outlet_plane.contains_face(bbox, tol) {
            classified.outlet.push(*tag);
        } else if lateral.iter().any(|p| p.contains_face(bbox, tol)) {
            classified.farfield.push(*tag);
        } else {
            classified.walls.push(*tag);
        }
    }
    classified
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bounds::merged_bounds;
    use crate::domain_box::DomainBox;
    use crate::preset::{Preset, PresetRegistry};
    use crate::types::{Axis, VolumeTag};
    use glam::DVec3;
    use std::collections::HashSet;

    fn mid_preset() -> Preset {
        PresetRegistry::builtin().get("mid-1p5m").unwrap().clone()
    }

    /// Domain and boundary faces for a cube cut out of its farfield box:
    /// six outer box faces followed by the six cavity faces.
    fn cube_case(scale: f64, flow: Axis) -> (DomainBox, Vec<(FaceTag, Aabb)>) {
        let cube = Aabb::new(
            DVec3::splat(-0.5 * scale),
            DVec3::splat(0.5 * scale),
        );
        let bounds = merged_bounds(&[(VolumeTag(1), cube)]).unwrap();
        let domain = DomainBox::build(&bounds, flow, &mid_preset());

        let mut faces = Vec::new();
        for bb in domain.aabb().face_boxes() {
            faces.push(bb);
        }
        for bb in cube.face_boxes() {
            faces.push(bb);
        }
        let tagged = faces
            .into_iter()
            .enumerate()
            .map(|(i, bb)| (FaceTag(i as i64 + 1), bb))
            .collect();
        (domain, tagged)
    }

    #[test]
    fn test_unit_cube_classification_counts() {
        let (domain, faces) = cube_case(1.0, Axis::X);
        let classified = classify_faces(&faces, &domain);
        let counts = classified.counts();

        assert_eq!(counts.inlet, 1);
        assert_eq!(counts.outlet, 1);
        assert_eq!(counts.farfield, 4);
        assert_eq!(counts.walls, 6);
        assert_eq!(classified.total(), faces.len());
    }

    #[test]
    fn test_roles_land_on_the_expected_faces() {
        // face_boxes order: x-min, x-max, y-min, y-max, z-min, z-max
        let (domain, faces) = cube_case(1.0, Axis::X);
        let classified = classify_faces(&faces, &domain);

        assert_eq!(classified.inlet(), &[FaceTag(1)]);
        assert_eq!(classified.outlet(), &[FaceTag(2)]);
        assert_eq!(
            classified.farfield(),
            &[FaceTag(3), FaceTag(4), FaceTag(5), FaceTag(6)]
        );
        let walls: Vec<i64> = classified.walls().iter().map(|t| t.0).collect();
        assert_eq!(walls, vec![7, 8, 9, 10, 11, 12]);
    }

    #[test]
    fn test_flow_axis_selects_the_inlet_plane() {
        let (domain, faces) = cube_case(1.0, Axis::Y);
        let classified = classify_faces(&faces, &domain);

        // With flow along y, the y-min box face (index 3, tag 3) is the inlet
        assert_eq!(classified.inlet(), &[FaceTag(3)]);
        assert_eq!(classified.outlet(), &[FaceTag(4)]);
        assert_eq!(classified.counts().farfield, 4);
    }

    #[test]
    fn test_sets_are_disjoint_and_exhaustive() {
        let (domain, faces) = cube_case(1.0, Axis::X);
        let classified = classify_faces(&faces, &domain);

        let mut seen = HashSet::new();
        for role in Role::ALL {
            for tag in classified.faces_of(role) {
                assert!(seen.insert(*tag), "face {tag} classified twice");
            }
        }
        assert_eq!(seen.len(), faces.len());
    }

    #[test]
    fn test_classification_is_scale_invariant() {
        let (domain_ref, faces_ref) = cube_case(1.0, Axis::X);
        let reference = classify_faces(&faces_ref, &domain_ref);

        for scale in [1e-3, 1.0, 1e3, 1e6] {
            let (domain, faces) = cube_case(scale, Axis::X);
            let classified = classify_faces(&faces, &domain);
            assert_eq!(
                classified.counts(),
                reference.counts(),
                "classification changed at scale {scale}"
            );
            assert_eq!(classified.inlet(), reference.inlet());
            assert_eq!(classified.walls(), reference.walls());
        }
    }

    #[test]
    fn test_face_beyond_tolerance_falls_back_to_wall() {
        let (domain, mut faces) = cube_case(1.0, Axis::X);
        let tol = plane_tolerance(domain.ldom());

        // Nudge the inlet face off its plane by a few tolerances
        let inlet_bb = &mut faces[0].1;
        inlet_bb.min.x += 5.0 * tol;
        inlet_bb.max.x += 5.0 * tol;

        let classified = classify_faces(&faces, &domain);
        assert!(classified.inlet().is_empty());
        assert!(classified.walls().contains(&FaceTag(1)));
        assert_eq!(classified.total(), faces.len());
    }

    #[test]
    fn test_edge_touching_face_is_not_an_inlet() {
        let (domain, mut faces) = cube_case(1.0, Axis::X);
        let x0 = domain.inlet_plane().position;

        // One bound on the plane, the other well inside the domain
        faces[0].1 = Aabb::new(
            DVec3::new(x0, -1.0, -1.0),
            DVec3::new(x0 + 1.0, 1.0, 1.0),
        );

        let classified = classify_faces(&faces, &domain);
        assert!(classified.inlet().is_empty());
        assert!(classified.walls().contains(&FaceTag(1)));
    }

    #[test]
    fn test_degenerate_edge_face_prefers_inlet_over_farfield() {
        // A zero-width strip on the box edge lies on the inlet plane and on
        // a lateral plane at once; first match assigns it to the inlet
        let (domain, _) = cube_case(1.0, Axis::X);
        let bb = domain.aabb();
        let strip = Aabb::new(
            DVec3::new(bb.min.x, bb.min.y, bb.min.z),
            DVec3::new(bb.min.x, bb.min.y, bb.max.z),
        );

        let classified = classify_faces(&[(FaceTag(99), strip)], &domain);
        assert_eq!(classified.inlet(), &[FaceTag(99)]);
        assert!(classified.farfield().is_empty());
    }

    #[test]
    fn test_role_group_names_match_contract() {
        assert_eq!(Role::Inlet.group_name(), "inlet");
        assert_eq!(Role::Outlet.group_name(), "outlet");
        assert_eq!(Role::Wall.group_name(), "walls");
        assert_eq!(Role::Farfield.group_name(), "farfield");
    }

    #[test]
    fn test_empty_input_yields_empty_sets() {
        let (domain, _) = cube_case(1.0, Axis::X);
        let classified = classify_faces(&[], &domain);
        assert_eq!(classified.total(), 0);
        assert_eq!(classified.counts(), RoleCounts::default());
    }
}
