//! # Aeroflow Kernel
//!
//! Abstraction over the external geometry/meshing provider. The pipeline
//! consumes exactly the capabilities listed on [`GeometryKernel`]; a real
//! binding wraps the provider's API behind it, and
//! [`stub::StubKernel`] supplies an in-memory implementation for tests.
//!
//! Every call is blocking, CPU-bound and atomic: there is no cancellation
//! or progress reporting, and a kernel instance must never be shared
//! between threads. Running several cases in parallel means one process
//! per case, each with its own kernel.

pub mod error;
pub mod options;
pub mod stub;

use std::path::Path;

use aeroflow_domain::{Aabb, FaceTag, SizeGrading, VolumeTag};
use serde::{Deserialize, Serialize};

pub use error::KernelError;
pub use options::{default_threads, ExportFormat, MeshAlgorithm3D, MesherOptions};

/// Node and element counts of a generated volume mesh.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeshStats {
    /// Number of mesh nodes.
    pub nodes: u64,
    /// Number of volume elements.
    pub elements: u64,
}

/// The geometry and meshing capabilities this workspace consumes.
///
/// All methods take `&mut self`: providers keep hidden model state, and
/// even queries may synchronize it.
pub trait GeometryKernel {
    /// Enumerates the solid volumes of the loaded input geometry.
    fn solid_volumes(&mut self) -> Result<Vec<VolumeTag>, KernelError>;

    /// Bounding box of a volume.
    fn volume_bounds(&mut self, volume: VolumeTag) -> Result<Aabb, KernelError>;

    /// Bounding box of a boundary face.
    fn face_bounds(&mut self, face: FaceTag) -> Result<Aabb, KernelError>;

    /// Measure (volume) of a volume entity, for largest-piece selection.
    fn volume_measure(&mut self, volume: VolumeTag) -> Result<f64, KernelError>;

    /// Creates an axis-aligned box volume.
    fn create_box(&mut self, bounds: &Aabb) -> Result<VolumeTag, KernelError>;

    /// Boolean difference `object - tools`.
    ///
    /// The object is consumed; the tool volumes survive so their surfaces
    /// stay available afterwards. Returns the resulting pieces, possibly
    /// none when the object is swallowed entirely.
    fn subtract(
        &mut self,
        object: VolumeTag,
        tools: &[VolumeTag],
    ) -> Result<Vec<VolumeTag>, KernelError>;

    /// Boundary faces of a volume.
    fn boundary_faces(&mut self, volume: VolumeTag) -> Result<Vec<FaceTag>, KernelError>;

    /// Surface faces of the given solids, independent of any cut.
    fn solid_surfaces(&mut self, volumes: &[VolumeTag]) -> Result<Vec<FaceTag>, KernelError>;

    /// Defines a named physical volume group.
    fn define_volume_group(
        &mut self,
        name: &str,
        volumes: &[VolumeTag],
    ) -> Result<(), KernelError>;

    /// Defines a named physical surface group.
    fn define_face_group(&mut self, name: &str, faces: &[FaceTag]) -> Result<(), KernelError>;

    /// Installs the distance-graded background size field measured against
    /// `reference` faces.
    fn apply_size_field(
        &mut self,
        reference: &[FaceTag],
        grading: &SizeGrading,
    ) -> Result<(), KernelError>;

    /// Generates the volume mesh. Called at most once per run; a failure
    /// is final for the given inputs.
    fn generate_mesh(&mut self, options: &MesherOptions) -> Result<MeshStats, KernelError>;

    /// Writes the generated mesh to `path`, format chosen by extension.
    fn write_mesh(&mut self, path: &Path) -> Result<(), KernelError>;
}
