//! # Kernel Errors
//!
//! Failures reported by the geometry/meshing provider. Diagnostics are
//! carried verbatim; the pipeline decides which ones are boolean or mesher
//! failures.

use aeroflow_domain::{FaceTag, VolumeTag};
use thiserror::Error;

/// Errors surfaced by a [`GeometryKernel`](crate::GeometryKernel).
#[derive(Debug, Error, PartialEq)]
pub enum KernelError {
    /// Operation referenced a volume the kernel does not know
    #[error("unknown volume {0}")]
    UnknownVolume(VolumeTag),

    /// Operation referenced a face the kernel does not know
    #[error("unknown face {0}")]
    UnknownFace(FaceTag),

    /// Boolean operation failed; carries the provider diagnostic
    #[error("boolean operation failed: {0}")]
    Boolean(String),

    /// Volume meshing failed; carries the provider diagnostic
    #[error("mesh generation failed: {0}")]
    Meshing(String),

    /// Mesh export failed
    #[error("mesh export failed: {0}")]
    Export(String),

    /// The provider does not implement the requested capability
    #[error("unsupported operation: {0}")]
    Unsupported(String),
}
