//! # Stub Kernel
//!
//! In-memory [`GeometryKernel`] over axis-aligned boxes, used by unit and
//! integration tests. Solids strictly inside the domain box are carved
//! analytically (outer shell plus one six-face cavity per solid); cut
//! results and meshing failures can also be scripted to reproduce
//! degenerate provider behavior. Every method bumps a call counter so
//! tests can assert what was, and was not, asked of the provider.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use aeroflow_domain::{Aabb, FaceTag, SizeGrading, VolumeTag};

use crate::error::KernelError;
use crate::options::{ExportFormat, MesherOptions};
use crate::{GeometryKernel, MeshStats};

/// Per-method invocation counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CallCounts {
    pub solid_volumes: u32,
    pub volume_bounds: u32,
    pub face_bounds: u32,
    pub volume_measure: u32,
    pub create_box: u32,
    pub subtract: u32,
    pub boundary_faces: u32,
    pub solid_surfaces: u32,
    pub define_volume_group: u32,
    pub define_face_group: u32,
    pub apply_size_field: u32,
    pub generate_mesh: u32,
    pub write_mesh: u32,
}

impl CallCounts {
    /// Total number of kernel calls across all methods.
    pub fn total(&self) -> u32 {
        self.solid_volumes
            + self.volume_bounds
            + self.face_bounds
            + self.volume_measure
            + self.create_box
            + self.subtract
            + self.boundary_faces
            + self.solid_surfaces
            + self.define_volume_group
            + self.define_face_group
            + self.apply_size_field
            + self.generate_mesh
            + self.write_mesh
    }
}

/// One scripted result piece of a boolean cut.
#[derive(Debug, Clone)]
pub struct ScriptedPiece {
    /// Measure reported for the piece.
    pub measure: f64,
    /// Boundary face boxes of the piece.
    pub faces: Vec<Aabb>,
}

#[derive(Debug, Clone)]
enum CutScript {
    Pieces(Vec<ScriptedPiece>),
    Fail(String),
}

/// A physical group definition recorded by the stub.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupRecord {
    pub name: String,
    pub dimension: u8,
    pub entities: usize,
}

/// In-memory test kernel. See the module docs.
#[derive(Debug, Default)]
pub struct StubKernel {
    solids: Vec<VolumeTag>,
    volumes: HashMap<VolumeTag, Aabb>,
    measures: HashMap<VolumeTag, f64>,
    faces: HashMap<FaceTag, Aabb>,
    volume_faces: HashMap<VolumeTag, Vec<FaceTag>>,
    surface_faces: Vec<FaceTag>,
    groups: Vec<GroupRecord>,
    size_field: Option<(Vec<FaceTag>, SizeGrading)>,
    written: Vec<PathBuf>,
    cut_script: Option<CutScript>,
    meshing_failure: Option<String>,
    mesh_stats: Option<MeshStats>,
    last_options: Option<MesherOptions>,
    /// Invocation counters, public for test assertions.
    pub calls: CallCounts,
    next_volume: i64,
    next_face: i64,
}

fn box_volume(bounds: &Aabb) -> f64 {
    let e = bounds.extent();
    e.x * e.y * e.z
}

impl StubKernel {
    /// Creates a kernel with no geometry loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a kernel seeded with one solid per bounding box.
    pub fn with_solids(solids: impl IntoIterator<Item = Aabb>) -> Self {
        let mut kernel = Self::new();
        for bounds in solids {
            kernel.add_solid(bounds);
        }
        kernel
    }

    /// Seeds a solid; its six surface faces are registered immediately.
    pub fn add_solid(&mut self, bounds: Aabb) -> VolumeTag {
        let volume = self.alloc_volume();
        self.volumes.insert(volume, bounds);
        self.measures.insert(volume, box_volume(&bounds));
        let faces = self.register_faces(bounds.face_boxes());
        self.surface_faces.extend(&faces);
        self.volume_faces.insert(volume, faces);
        self.solids.push(volume);
        volume
    }

    /// Forces the next `subtract` call to return these pieces.
    pub fn script_cut_pieces(&mut self, pieces: Vec<ScriptedPiece>) {
        self.cut_script = Some(CutScript::Pieces(pieces));
    }

    /// Forces the next `subtract` call to fail with this diagnostic.
    pub fn script_cut_failure(&mut self, diagnostic: impl Into<String>) {
        self.cut_script = Some(CutScript::Fail(diagnostic.into()));
    }

    /// Forces the next `generate_mesh` call to fail with this diagnostic.
    pub fn script_meshing_failure(&mut self, diagnostic: impl Into<String>) {
        self.meshing_failure = Some(diagnostic.into());
    }

    /// Physical groups defined so far, in definition order.
    pub fn groups(&self) -> &[GroupRecord] {
        &self.groups
    }

    /// Looks a defined group up by name.
    pub fn group(&self, name: &str) -> Option<&GroupRecord> {
        self.groups.iter().find(|g| g.name == name)
    }

    /// The installed background size field, if any.
    pub fn size_field(&self) -> Option<&(Vec<FaceTag>, SizeGrading)> {
        self.size_field.as_ref()
    }

    /// Paths written by `write_mesh`, in order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    /// Surface faces of all seeded solids, in creation order.
    pub fn surface_faces(&self) -> &[FaceTag] {
        &self.surface_faces
    }

    /// Options passed to the last `generate_mesh` call.
    pub fn last_options(&self) -> Option<&MesherOptions> {
        self.last_options.as_ref()
    }

    fn alloc_volume(&mut self) -> VolumeTag {
        self.next_volume += 1;
        VolumeTag(self.next_volume)
    }

    fn alloc_face(&mut self) -> FaceTag {
        self.next_face += 1;
        FaceTag(self.next_face)
    }

    fn register_faces(&mut self, boxes: impl IntoIterator<Item = Aabb>) -> Vec<FaceTag> {
        let mut tags = Vec::new();
        for bounds in boxes {
            let tag = self.alloc_face();
            self.faces.insert(tag, bounds);
            tags.push(tag);
        }
        tags
    }

    fn require_volume(&self, volume: VolumeTag) -> Result<Aabb, KernelError> {
        self.volumes
            .get(&volume)
            .copied()
            .ok_or(KernelError::UnknownVolume(volume))
    }
}

impl GeometryKernel for StubKernel {
    fn solid_volumes(&mut self) -> Result<Vec<VolumeTag>, KernelError> {
        self.calls.solid_volumes += 1;
        Ok(self.solids.clone())
    }

    fn volume_bounds(&mut self, volume: VolumeTag) -> Result<Aabb, KernelError> {
        self.calls.volume_bounds += 1;
        self.require_volume(volume)
    }

    fn face_bounds(&mut self, face: FaceTag) -> Result<Aabb, KernelError> {
        self.calls.face_bounds += 1;
        self.faces
            .get(&face)
            .copied()
            .ok_or(KernelError::UnknownFace(face))
    }

    fn volume_measure(&mut self, volume: VolumeTag) -> Result<f64, KernelError> {
        self.calls.volume_measure += 1;
        self.measures
            .get(&volume)
            .copied()
            .ok_or(KernelError::UnknownVolume(volume))
    }

    fn create_box(&mut self, bounds: &Aabb) -> Result<VolumeTag, KernelError> {
        self.calls.create_box += 1;
        let volume = self.alloc_volume();
        self.volumes.insert(volume, *bounds);
        self.measures.insert(volume, box_volume(bounds));
        Ok(volume)
    }

    fn subtract(
        &mut self,
        object: VolumeTag,
        tools: &[VolumeTag],
    ) -> Result<Vec<VolumeTag>, KernelError> {
        self.calls.subtract += 1;
        let object_bounds = self.require_volume(object)?;
        for tool in tools {
            self.require_volume(*tool)?;
        }

        // The object is consumed either way; the tools survive
        if let Some(script) = self.cut_script.take() {
            self.volumes.remove(&object);
            self.measures.remove(&object);
            return match script {
                CutScript::Fail(diagnostic) => Err(KernelError::Boolean(diagnostic)),
                CutScript::Pieces(pieces) => {
                    let mut tags = Vec::with_capacity(pieces.len());
                    for piece in pieces {
                        let volume = self.alloc_volume();
                        self.volumes.insert(volume, object_bounds);
                        self.measures.insert(volume, piece.measure);
                        let face_tags = self.register_faces(piece.faces);
                        self.volume_faces.insert(volume, face_tags);
                        tags.push(volume);
                    }
                    Ok(tags)
                }
            };
        }

        let mut carved: Vec<Aabb> = Vec::with_capacity(tools.len());
        for tool in tools {
            let tool_bounds = self.volumes[tool];
            let swallows_object = tool_bounds.min.cmple(object_bounds.min).all()
                && tool_bounds.max.cmpge(object_bounds.max).all();
            if swallows_object {
                self.volumes.remove(&object);
                self.measures.remove(&object);
                return Ok(Vec::new());
            }
            if !object_bounds.strictly_contains(&tool_bounds) {
                return Err(KernelError::Boolean(format!(
                    "tool volume {tool} intersects the object boundary; \
                     the difference is not watertight"
                )));
            }
            carved.push(tool_bounds);
        }

        self.volumes.remove(&object);
        self.measures.remove(&object);

        let fluid = self.alloc_volume();
        let mut measure = box_volume(&object_bounds);
        let mut face_boxes: Vec<Aabb> = object_bounds.face_boxes().to_vec();
        for tool_bounds in &carved {
            measure -= box_volume(tool_bounds);
            face_boxes.extend(tool_bounds.face_boxes());
        }
        self.volumes.insert(fluid, object_bounds);
        self.measures.insert(fluid, measure);
        let tags = self.register_faces(face_boxes);
        self.volume_faces.insert(fluid, tags);
        Ok(vec![fluid])
    }

    fn boundary_faces(&mut self, volume: VolumeTag) -> Result<Vec<FaceTag>, KernelError> {
        self.calls.boundary_faces += 1;
        self.require_volume(volume)?;
        Ok(self.volume_faces.get(&volume).cloned().unwrap_or_default())
    }

    fn solid_surfaces(&mut self, volumes: &[VolumeTag]) -> Result<Vec<FaceTag>, KernelError> {
        self.calls.solid_surfaces += 1;
        let mut faces = Vec::new();
        for volume in volumes {
            self.require_volume(*volume)?;
            if let Some(tags) = self.volume_faces.get(volume) {
                faces.extend(tags.iter().copied());
            }
        }
        Ok(faces)
    }

    fn define_volume_group(
        &mut self,
        name: &str,
        volumes: &[VolumeTag],
    ) -> Result<(), KernelError> {
        self.calls.define_volume_group += 1;
        for volume in volumes {
            self.require_volume(*volume)?;
        }
        self.groups.push(GroupRecord {
            name: name.to_string(),
            dimension: 3,
            entities: volumes.len(),
        });
        Ok(())
    }

    fn define_face_group(&mut self, name: &str, faces: &[FaceTag]) -> Result<(), KernelError> {
        self.calls.define_face_group += 1;
        for face in faces {
            if !self.faces.contains_key(face) {
                return Err(KernelError::UnknownFace(*face));
            }
        }
        self.groups.push(GroupRecord {
            name: name.to_string(),
            dimension: 2,
            entities: faces.len(),
        });
        Ok(())
    }

    fn apply_size_field(
        &mut self,
        reference: &[FaceTag],
        grading: &SizeGrading,
    ) -> Result<(), KernelError> {
        self.calls.apply_size_field += 1;
        for face in reference {
            if !self.faces.contains_key(face) {
                return Err(KernelError::UnknownFace(*face));
            }
        }
        self.size_field = Some((reference.to_vec(), *grading));
        Ok(())
    }

    fn generate_mesh(&mut self, options: &MesherOptions) -> Result<MeshStats, KernelError> {
        self.calls.generate_mesh += 1;
        self.last_options = Some(options.clone());
        if let Some(diagnostic) = self.meshing_failure.take() {
            return Err(KernelError::Meshing(diagnostic));
        }
        if self.size_field.is_none() {
            return Err(KernelError::Meshing(
                "no background size field installed".to_string(),
            ));
        }
        // Deterministic but face-count dependent, enough for reporting
        let nodes = 250 + 60 * self.faces.len() as u64;
        let stats = MeshStats {
            nodes,
            elements: 5 * nodes,
        };
        self.mesh_stats = Some(stats);
        Ok(stats)
    }

    fn write_mesh(&mut self, path: &Path) -> Result<(), KernelError> {
        self.calls.write_mesh += 1;
        if self.mesh_stats.is_none() {
            return Err(KernelError::Export(
                "no mesh has been generated".to_string(),
            ));
        }
        if ExportFormat::from_path(path).is_none() {
            return Err(KernelError::Export(format!(
                "unrecognized mesh format for '{}'",
                path.display()
            )));
        }
        self.written.push(path.to_path_buf());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use glam::DVec3;

    fn unit_cube() -> Aabb {
        Aabb::new(DVec3::splat(-0.5), DVec3::splat(0.5))
    }

    fn big_box() -> Aabb {
        Aabb::new(DVec3::splat(-5.0), DVec3::splat(5.0))
    }

    #[test]
    fn test_seeded_solid_exposes_six_faces() {
        let mut kernel = StubKernel::with_solids([unit_cube()]);
        let solids = kernel.solid_volumes().unwrap();
        assert_eq!(solids.len(), 1);
        assert_eq!(kernel.boundary_faces(solids[0]).unwrap().len(), 6);
        assert_eq!(kernel.surface_faces().len(), 6);
    }

    #[test]
    fn test_analytic_cut_carves_a_cavity() {
        let mut kernel = StubKernel::with_solids([unit_cube()]);
        let solids = kernel.solid_volumes().unwrap();
        let object = kernel.create_box(&big_box()).unwrap();

        let pieces = kernel.subtract(object, &solids).unwrap();
        assert_eq!(pieces.len(), 1);

        let fluid = pieces[0];
        // 6 outer faces + 6 cavity faces
        assert_eq!(kernel.boundary_faces(fluid).unwrap().len(), 12);
        // 10^3 - 1^3
        assert_relative_eq!(
            kernel.volume_measure(fluid).unwrap(),
            999.0,
            max_relative = 1e-12
        );
        // The tool solid survives the cut
        assert!(kernel.volume_bounds(solids[0]).is_ok());
        // The object box does not
        assert_eq!(
            kernel.volume_bounds(object).unwrap_err(),
            KernelError::UnknownVolume(object)
        );
    }

    #[test]
    fn test_cavity_faces_are_new_entities() {
        let mut kernel = StubKernel::with_solids([unit_cube()]);
        let solids = kernel.solid_volumes().unwrap();
        let object = kernel.create_box(&big_box()).unwrap();
        let fluid = kernel.subtract(object, &solids).unwrap()[0];

        let boundary = kernel.boundary_faces(fluid).unwrap();
        for face in kernel.surface_faces().to_vec() {
            assert!(!boundary.contains(&face));
        }
    }

    #[test]
    fn test_poking_tool_fails_the_cut() {
        // Solid sticking out of the box on +x
        let poking = Aabb::new(DVec3::splat(-0.5), DVec3::new(9.0, 0.5, 0.5));
        let mut kernel = StubKernel::with_solids([poking]);
        let solids = kernel.solid_volumes().unwrap();
        let object = kernel.create_box(&big_box()).unwrap();

        let err = kernel.subtract(object, &solids).unwrap_err();
        match err {
            KernelError::Boolean(diagnostic) => {
                assert!(diagnostic.contains("intersects the object boundary"));
            }
            other => panic!("expected a boolean failure, got {other:?}"),
        }
    }

    #[test]
    fn test_swallowing_tool_leaves_nothing() {
        let huge = Aabb::new(DVec3::splat(-100.0), DVec3::splat(100.0));
        let mut kernel = StubKernel::with_solids([huge]);
        let solids = kernel.solid_volumes().unwrap();
        let object = kernel.create_box(&big_box()).unwrap();

        let pieces = kernel.subtract(object, &solids).unwrap();
        assert!(pieces.is_empty());
    }

    #[test]
    fn test_scripted_pieces_override_the_analytic_cut() {
        let mut kernel = StubKernel::with_solids([unit_cube()]);
        let solids = kernel.solid_volumes().unwrap();
        let object = kernel.create_box(&big_box()).unwrap();

        kernel.script_cut_pieces(vec![
            ScriptedPiece {
                measure: 1.0,
                faces: vec![],
            },
            ScriptedPiece {
                measure: 900.0,
                faces: big_box().face_boxes().to_vec(),
            },
        ]);

        let pieces = kernel.subtract(object, &solids).unwrap();
        assert_eq!(pieces.len(), 2);
        assert_eq!(kernel.volume_measure(pieces[0]).unwrap(), 1.0);
        assert_eq!(kernel.volume_measure(pieces[1]).unwrap(), 900.0);
        assert_eq!(kernel.boundary_faces(pieces[1]).unwrap().len(), 6);
    }

    #[test]
    fn test_scripted_cut_failure() {
        let mut kernel = StubKernel::with_solids([unit_cube()]);
        let solids = kernel.solid_volumes().unwrap();
        let object = kernel.create_box(&big_box()).unwrap();
        kernel.script_cut_failure("self-intersection in tool shell");

        let err = kernel.subtract(object, &solids).unwrap_err();
        assert_eq!(
            err,
            KernelError::Boolean("self-intersection in tool shell".to_string())
        );
    }

    #[test]
    fn test_groups_and_size_field_are_recorded() {
        let mut kernel = StubKernel::with_solids([unit_cube()]);
        let solids = kernel.solid_volumes().unwrap();
        let faces = kernel.boundary_faces(solids[0]).unwrap();

        kernel.define_volume_group("fluid", &solids).unwrap();
        kernel.define_face_group("walls", &faces).unwrap();

        assert_eq!(kernel.groups().len(), 2);
        assert_eq!(
            kernel.group("walls"),
            Some(&GroupRecord {
                name: "walls".to_string(),
                dimension: 2,
                entities: 6,
            })
        );

        let grading = SizeGrading {
            h_near: 0.01,
            h_far: 0.1,
            d_near: 0.1,
            d_far: 1.0,
        };
        kernel.apply_size_field(&faces, &grading).unwrap();
        let (reference, stored) = kernel.size_field().unwrap();
        assert_eq!(reference, &faces);
        assert_eq!(*stored, grading);
    }

    #[test]
    fn test_meshing_requires_a_size_field() {
        let mut kernel = StubKernel::with_solids([unit_cube()]);
        let err = kernel.generate_mesh(&MesherOptions::default()).unwrap_err();
        assert!(matches!(err, KernelError::Meshing(_)));
    }

    #[test]
    fn test_write_requires_a_mesh_and_known_format() {
        let mut kernel = StubKernel::with_solids([unit_cube()]);
        let err = kernel.write_mesh(Path::new("out.su2")).unwrap_err();
        assert!(matches!(err, KernelError::Export(_)));

        let solids = kernel.solid_volumes().unwrap();
        let faces = kernel.boundary_faces(solids[0]).unwrap();
        let grading = SizeGrading {
            h_near: 0.01,
            h_far: 0.1,
            d_near: 0.1,
            d_far: 1.0,
        };
        kernel.apply_size_field(&faces, &grading).unwrap();
        kernel.generate_mesh(&MesherOptions::default()).unwrap();

        kernel.write_mesh(Path::new("out.su2")).unwrap();
        let err = kernel.write_mesh(Path::new("out.stl")).unwrap_err();
        assert!(matches!(err, KernelError::Export(_)));
        assert_eq!(kernel.written().len(), 1);
    }

    #[test]
    fn test_call_counters_accumulate() {
        let mut kernel = StubKernel::with_solids([unit_cube()]);
        assert_eq!(kernel.calls.total(), 0);

        let solids = kernel.solid_volumes().unwrap();
        let _ = kernel.volume_bounds(solids[0]).unwrap();
        let object = kernel.create_box(&big_box()).unwrap();
        let _ = kernel.subtract(object, &solids).unwrap();

        assert_eq!(kernel.calls.solid_volumes, 1);
        assert_eq!(kernel.calls.volume_bounds, 1);
        assert_eq!(kernel.calls.create_box, 1);
        assert_eq!(kernel.calls.subtract, 1);
        assert_eq!(kernel.calls.total(), 4);
    }
}
