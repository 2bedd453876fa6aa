//! # Mesher Options
//!
//! Settings forwarded to the external volume mesher. Defaults mirror the
//! fast single-pass configuration: first-order tetrahedra, no optimizer
//! passes, sizes driven purely by the background field.

use std::fmt;
use std::path::Path;
use std::thread;

use config::constants::DEFAULT_ELEMENT_ORDER;
use serde::{Deserialize, Serialize};

/// 3D meshing algorithm requested from the provider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeshAlgorithm3D {
    /// Classic Delaunay refinement.
    Delaunay,
    /// Frontal-Delaunay hybrid.
    FrontalDelaunay,
    /// Parallel HXT algorithm, the fastest when available.
    #[default]
    Hxt,
}

impl MeshAlgorithm3D {
    /// Serialized name, used in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            MeshAlgorithm3D::Delaunay => "delaunay",
            MeshAlgorithm3D::FrontalDelaunay => "frontal_delaunay",
            MeshAlgorithm3D::Hxt => "hxt",
        }
    }
}

impl fmt::Display for MeshAlgorithm3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output format of an exported mesh, inferred from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// CGNS, for solvers reading the CFD General Notation System.
    Cgns,
    /// SU2 native ASCII format.
    Su2,
    /// The provider's own mesh format.
    Msh,
}

impl ExportFormat {
    /// Infers the format from a path's extension, case-insensitive.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "cgns" => Some(ExportFormat::Cgns),
            "su2" => Some(ExportFormat::Su2),
            "msh" => Some(ExportFormat::Msh),
            _ => None,
        }
    }

    /// Canonical file extension.
    pub fn as_str(self) -> &'static str {
        match self {
            ExportFormat::Cgns => "cgns",
            ExportFormat::Su2 => "su2",
            ExportFormat::Msh => "msh",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options handed to the external mesher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MesherOptions {
    /// 3D algorithm choice.
    pub algorithm: MeshAlgorithm3D,
    /// Finite element order; 1 keeps memory and element counts low.
    pub element_order: u8,
    /// Whether the provider runs its mesh optimizer passes.
    pub optimize: bool,
    /// Thread-count hint forwarded to the provider's own parallelism.
    pub threads: usize,
    /// Derive sizes from surface curvature in addition to the field.
    pub size_from_curvature: bool,
    /// Derive sizes from geometry points in addition to the field.
    pub size_from_points: bool,
    /// Extend boundary sizes into the volume in addition to the field.
    pub size_extend_from_boundary: bool,
    /// Export entities outside physical groups as well.
    pub save_all: bool,
}

impl Default for MesherOptions {
    fn default() -> Self {
        Self {
            algorithm: MeshAlgorithm3D::default(),
            element_order: DEFAULT_ELEMENT_ORDER,
            optimize: false,
            threads: default_threads(),
            size_from_curvature: false,
            size_from_points: false,
            size_extend_from_boundary: false,
            save_all: false,
        }
    }
}

/// One thread less than the machine offers, floored at one, so the meshing
/// pass leaves room for the invoking process.
pub fn default_threads() -> usize {
    thread::available_parallelism()
        .map(|n| n.get().saturating_sub(1).max(1))
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_defaults_mirror_the_fast_settings() {
        let options = MesherOptions::default();
        assert_eq!(options.algorithm, MeshAlgorithm3D::Hxt);
        assert_eq!(options.element_order, 1);
        assert!(!options.optimize);
        assert!(!options.size_from_curvature);
        assert!(!options.size_from_points);
        assert!(!options.size_extend_from_boundary);
        assert!(!options.save_all);
        assert!(options.threads >= 1);
    }

    #[test]
    fn test_format_inferred_from_extension() {
        assert_eq!(
            ExportFormat::from_path(&PathBuf::from("out/mesh.cgns")),
            Some(ExportFormat::Cgns)
        );
        assert_eq!(
            ExportFormat::from_path(&PathBuf::from("mesh.SU2")),
            Some(ExportFormat::Su2)
        );
        assert_eq!(
            ExportFormat::from_path(&PathBuf::from("case.msh")),
            Some(ExportFormat::Msh)
        );
    }

    #[test]
    fn test_unknown_or_missing_extension_is_none() {
        assert_eq!(ExportFormat::from_path(&PathBuf::from("mesh.stl")), None);
        assert_eq!(ExportFormat::from_path(&PathBuf::from("meshfile")), None);
    }

    #[test]
    fn test_algorithm_names() {
        assert_eq!(MeshAlgorithm3D::Hxt.to_string(), "hxt");
        assert_eq!(
            MeshAlgorithm3D::FrontalDelaunay.to_string(),
            "frontal_delaunay"
        );
    }
}
