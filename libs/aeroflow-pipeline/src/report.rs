//! # Case Report
//!
//! Summary of a completed run, serializable for logs and regression
//! baselines.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use aeroflow_domain::{Aabb, Axis, RoleCounts, SizeGrading, SizingReference};
use aeroflow_kernel::MeshStats;

/// One physical group as exported to the mesh file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupSummary {
    /// Group name, part of the solver contract.
    pub name: String,
    /// 3 for the fluid volume group, 2 for face groups.
    pub dimension: u8,
    /// Number of entities in the group.
    pub entities: usize,
}

/// Everything a run decided and produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseReport {
    /// Name of the preset the run used.
    pub preset: String,
    /// Freestream flow axis.
    pub flow_axis: Axis,
    /// Reference length derived from the merged solid bounds.
    pub reference_length: f64,
    /// Merged bounding box of the input solids.
    pub solid_bbox: Aabb,
    /// Farfield domain box.
    pub domain_bbox: Aabb,
    /// Domain box diagonal, the scale for plane tolerances.
    pub ldom: f64,
    /// Boundary face counts per role.
    pub counts: RoleCounts,
    /// Exported physical groups, in definition order. Empty groups are
    /// omitted, so the list also records which roles were present.
    pub groups: Vec<GroupSummary>,
    /// Size field scalars in model units.
    pub grading: SizeGrading,
    /// Which faces the size field measured distance against.
    pub sizing_reference: SizingReference,
    /// True when no wall faces were found and sizing fell back to the
    /// body surfaces.
    pub wall_fallback: bool,
    /// Mesh statistics from the generator.
    pub mesh: MeshStats,
    /// Mesh files written, in order.
    pub outputs: Vec<PathBuf>,
}
