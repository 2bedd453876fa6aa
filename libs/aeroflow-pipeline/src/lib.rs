//! # Aeroflow Pipeline
//!
//! Orchestrates external-aerodynamics domain preparation against a
//! [`GeometryKernel`]:
//!
//! ```text
//! solids -> merged bounds -> farfield box -> boolean cut -> fluid volume
//!        -> face classification -> physical groups -> size field
//!        -> mesh generation -> export
//! ```
//!
//! The pipeline never touches geometry directly; every entity lives on
//! the kernel and is addressed by tag. Configuration mistakes (unknown
//! preset, empty solid set) fail before the first kernel mutation.
//!
//! # Usage
//!
//! ```rust
//! use aeroflow_domain::Aabb;
//! use aeroflow_kernel::stub::StubKernel;
//! use aeroflow_pipeline::{CaseConfig, DomainPipeline};
//! use glam::DVec3;
//!
//! // A wing-like solid, 4 units long
//! let mut kernel = StubKernel::with_solids([Aabb::new(
//!     DVec3::new(0.0, 0.0, 0.0),
//!     DVec3::new(4.0, 0.5, 2.5),
//! )]);
//!
//! let pipeline = DomainPipeline::default();
//! let report = pipeline.run(&mut kernel, &CaseConfig::default())?;
//!
//! assert_eq!(report.reference_length, 4.0);
//! assert_eq!(report.counts.inlet, 1);
//! assert_eq!(report.counts.walls, 6);
//! assert!(!report.wall_fallback);
//! # Ok::<(), aeroflow_pipeline::PipelineError>(())
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use aeroflow_domain::{
    classify_faces, merged_bounds, Axis, DomainBox, FaceTag, PresetRegistry, Role, SizeGrading,
    SizingReference,
};
use aeroflow_kernel::{ExportFormat, GeometryKernel, KernelError, MesherOptions};
use config::constants::{DEFAULT_PRESET, GROUP_FLUID};

pub mod error;
pub mod report;
pub mod subtract;

pub use error::PipelineError;
pub use report::{CaseReport, GroupSummary};
pub use subtract::subtract_solids;

/// One meshing case: which preset to apply and what to produce.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaseConfig {
    /// Name of the preset to resolve against the registry.
    pub preset: String,
    /// Freestream flow axis.
    pub flow_axis: Axis,
    /// Which faces the size field measures distance against.
    pub sizing_reference: SizingReference,
    /// Mesher tuning, defaults to the fast-run settings.
    pub mesher: MesherOptions,
    /// Mesh files to write; the format follows each extension.
    pub outputs: Vec<PathBuf>,
}

impl Default for CaseConfig {
    fn default() -> Self {
        Self {
            preset: DEFAULT_PRESET.to_string(),
            flow_axis: Axis::X,
            sizing_reference: SizingReference::default(),
            mesher: MesherOptions::default(),
            outputs: Vec::new(),
        }
    }
}

/// Runs meshing cases against a preset registry.
#[derive(Debug, Clone)]
pub struct DomainPipeline {
    registry: PresetRegistry,
}

impl Default for DomainPipeline {
    fn default() -> Self {
        Self::new(PresetRegistry::builtin())
    }
}

impl DomainPipeline {
    /// Creates a pipeline over `registry`.
    pub fn new(registry: PresetRegistry) -> Self {
        Self { registry }
    }

    /// The preset registry this pipeline resolves case names against.
    pub fn registry(&self) -> &PresetRegistry {
        &self.registry
    }

    /// Runs one case end to end and returns its report.
    ///
    /// On failure the kernel may hold partial state; callers discard it
    /// and start over rather than resuming.
    pub fn run<K: GeometryKernel>(
        &self,
        kernel: &mut K,
        case: &CaseConfig,
    ) -> Result<CaseReport, PipelineError> {
        // Resolve the preset before any kernel work
        let preset = self.registry.get(&case.preset)?;
        info!(preset = %case.preset, flow_axis = %case.flow_axis, "preparing domain");

        let solids = kernel.solid_volumes()?;
        let mut solid_bounds = Vec::with_capacity(solids.len());
        for &volume in &solids {
            solid_bounds.push((volume, kernel.volume_bounds(volume)?));
        }
        let bounds = merged_bounds(&solid_bounds)?;
        let lref = bounds.reference_length();
        debug!(solids = solids.len(), lref, "merged solid bounds");

        let domain = DomainBox::build(&bounds, case.flow_axis, preset);
        debug!(ldom = domain.ldom(), "farfield box placed");

        let fluid = subtract_solids(kernel, &domain, &solids)?;

        let boundary = kernel.boundary_faces(fluid)?;
        let mut face_bounds = Vec::with_capacity(boundary.len());
        for &face in &boundary {
            face_bounds.push((face, kernel.face_bounds(face)?));
        }
        let classified = classify_faces(&face_bounds, &domain);
        let counts = classified.counts();
        info!(
            inlet = counts.inlet,
            outlet = counts.outlet,
            walls = counts.walls,
            farfield = counts.farfield,
            "classified fluid boundary"
        );

        // The size field measures distance to these faces
        let mut wall_fallback = false;
        let sizing_faces: Vec<FaceTag> = match case.sizing_reference {
            SizingReference::BodySurface => kernel.solid_surfaces(&solids)?,
            SizingReference::WallFaces => {
                if classified.walls().is_empty() {
                    warn!("no wall faces after classification, grading from the body surfaces");
                    wall_fallback = true;
                    kernel.solid_surfaces(&solids)?
                } else {
                    classified.walls().to_vec()
                }
            }
        };
        let grading = SizeGrading::from_preset(preset, lref);

        let mut groups = Vec::new();
        kernel.define_volume_group(GROUP_FLUID, &[fluid])?;
        groups.push(GroupSummary {
            name: GROUP_FLUID.to_string(),
            dimension: 3,
            entities: 1,
        });
        for role in Role::ALL {
            let faces = classified.faces_of(role);
            if faces.is_empty() {
                debug!(group = role.group_name(), "skipping empty group");
                continue;
            }
            kernel.define_face_group(role.group_name(), faces)?;
            groups.push(GroupSummary {
                name: role.group_name().to_string(),
                dimension: 2,
                entities: faces.len(),
            });
        }

        kernel.apply_size_field(&sizing_faces, &grading)?;

        let mesh = match kernel.generate_mesh(&case.mesher) {
            Ok(stats) => stats,
            Err(KernelError::Meshing(diagnostic)) => {
                return Err(PipelineError::mesher_failure(diagnostic));
            }
            Err(other) => return Err(other.into()),
        };

        for path in &case.outputs {
            kernel.write_mesh(path)?;
            let format = ExportFormat::from_path(path).map_or("unknown", ExportFormat::as_str);
            info!(path = %path.display(), format, "mesh written");
        }

        info!(
            nodes = mesh.nodes,
            elements = mesh.elements,
            outputs = case.outputs.len(),
            "domain preparation complete"
        );

        Ok(CaseReport {
            preset: case.preset.clone(),
            flow_axis: case.flow_axis,
            reference_length: lref,
            solid_bbox: *bounds.bbox(),
            domain_bbox: *domain.aabb(),
            ldom: domain.ldom(),
            counts,
            groups,
            grading,
            sizing_reference: case.sizing_reference,
            wall_fallback,
            mesh,
            outputs: case.outputs.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_config_defaults() {
        let case = CaseConfig::default();
        assert_eq!(case.preset, DEFAULT_PRESET);
        assert_eq!(case.flow_axis, Axis::X);
        assert_eq!(case.sizing_reference, SizingReference::WallFaces);
        assert!(case.outputs.is_empty());
    }

    #[test]
    fn test_default_pipeline_carries_builtin_presets() {
        let pipeline = DomainPipeline::default();
        assert!(pipeline.registry().get(DEFAULT_PRESET).is_ok());
    }
}
