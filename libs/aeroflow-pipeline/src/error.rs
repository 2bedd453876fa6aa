//! # Pipeline Errors
//!
//! One error type for the whole run. Domain, configuration and kernel
//! errors convert into it; boolean and mesher failures get their own
//! variants because callers act on them differently (enlarge the box,
//! repair the geometry, retune the preset).

use thiserror::Error;

use aeroflow_domain::{ConfigError, GeometryError};
use aeroflow_kernel::KernelError;

/// Failure of a pipeline run.
#[derive(Debug, Error, PartialEq)]
pub enum PipelineError {
    /// Solid inspection failed before any geometry was created.
    #[error("geometry inspection failed: {0}")]
    Geometry(#[from] GeometryError),

    /// The requested preset is unknown or invalid.
    #[error("configuration rejected: {0}")]
    Config(#[from] ConfigError),

    /// The cut failed or produced no usable fluid volume.
    #[error("boolean subtraction failed: {diagnostic}")]
    BooleanFailure { diagnostic: String },

    /// The mesher rejected the model.
    #[error("mesh generation failed: {diagnostic}")]
    MesherFailure { diagnostic: String },

    /// Any other provider-side failure.
    #[error("kernel call failed: {0}")]
    Kernel(#[from] KernelError),
}

impl PipelineError {
    /// Creates a [`PipelineError::BooleanFailure`] from a diagnostic.
    pub fn boolean_failure(diagnostic: impl Into<String>) -> Self {
        PipelineError::BooleanFailure {
            diagnostic: diagnostic.into(),
        }
    }

    /// Creates a [`PipelineError::MesherFailure`] from a diagnostic.
    pub fn mesher_failure(diagnostic: impl Into<String>) -> Self {
        PipelineError::MesherFailure {
            diagnostic: diagnostic.into(),
        }
    }
}
