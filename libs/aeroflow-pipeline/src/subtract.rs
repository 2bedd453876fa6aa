//! # Fluid Volume Extraction
//!
//! Creates the farfield box on the kernel, cuts the solids out of it and
//! picks the fluid volume from the result.

use aeroflow_domain::{DomainBox, VolumeTag};
use aeroflow_kernel::{GeometryKernel, KernelError};
use tracing::debug;

use crate::error::PipelineError;

/// Subtracts `solids` from the domain box and returns the fluid volume.
///
/// The box is consumed by the cut; the solids survive it. When the cut
/// shatters the box into several pieces, the piece with the largest
/// measure is the fluid region and the slivers are left untagged. An
/// empty result means the box was swallowed entirely, which is reported
/// as a boolean failure with a remediation hint.
pub fn subtract_solids<K: GeometryKernel>(
    kernel: &mut K,
    domain: &DomainBox,
    solids: &[VolumeTag],
) -> Result<VolumeTag, PipelineError> {
    let object = kernel.create_box(domain.aabb())?;
    let pieces = match kernel.subtract(object, solids) {
        Ok(pieces) => pieces,
        Err(KernelError::Boolean(diagnostic)) => {
            return Err(PipelineError::boolean_failure(diagnostic));
        }
        Err(other) => return Err(other.into()),
    };

    if pieces.is_empty() {
        return Err(PipelineError::boolean_failure(
            "the cut produced no fluid volume; enlarge the domain box or repair the solid geometry",
        ));
    }
    if pieces.len() == 1 {
        return Ok(pieces[0]);
    }

    debug!(
        pieces = pieces.len(),
        "cut shattered the box, keeping the largest piece"
    );
    let mut best = pieces[0];
    let mut best_measure = kernel.volume_measure(best)?;
    for &piece in &pieces[1..] {
        let measure = kernel.volume_measure(piece)?;
        if measure > best_measure {
            best = piece;
            best_measure = measure;
        }
    }
    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use aeroflow_domain::{merged_bounds, Aabb, Axis, PresetRegistry};
    use aeroflow_kernel::stub::{ScriptedPiece, StubKernel};
    use config::constants::DEFAULT_PRESET;
    use glam::DVec3;

    fn unit_cube() -> Aabb {
        Aabb::new(DVec3::splat(-0.5), DVec3::splat(0.5))
    }

    fn domain_around(solid: Aabb) -> DomainBox {
        let bounds = merged_bounds(&[(aeroflow_domain::VolumeTag(1), solid)]).unwrap();
        let registry = PresetRegistry::builtin();
        DomainBox::build(&bounds, Axis::X, registry.get(DEFAULT_PRESET).unwrap())
    }

    #[test]
    fn test_single_piece_cut_returns_it() {
        let mut kernel = StubKernel::with_solids([unit_cube()]);
        let solids = kernel.solid_volumes().unwrap();
        let domain = domain_around(unit_cube());

        let fluid = subtract_solids(&mut kernel, &domain, &solids).unwrap();
        // Outer shell plus the cube cavity
        assert_eq!(kernel.boundary_faces(fluid).unwrap().len(), 12);
        // No measure comparison needed for a single piece
        assert_eq!(kernel.calls.volume_measure, 0);
    }

    #[test]
    fn test_largest_piece_wins() {
        let mut kernel = StubKernel::with_solids([unit_cube()]);
        let solids = kernel.solid_volumes().unwrap();
        let domain = domain_around(unit_cube());
        kernel.script_cut_pieces(vec![
            ScriptedPiece {
                measure: 2.0,
                faces: vec![],
            },
            ScriptedPiece {
                measure: 40.0,
                faces: vec![],
            },
            ScriptedPiece {
                measure: 7.0,
                faces: vec![],
            },
        ]);

        let fluid = subtract_solids(&mut kernel, &domain, &solids).unwrap();
        assert_eq!(kernel.volume_measure(fluid).unwrap(), 40.0);
    }

    #[test]
    fn test_empty_cut_is_a_boolean_failure() {
        let mut kernel = StubKernel::with_solids([unit_cube()]);
        let solids = kernel.solid_volumes().unwrap();
        let domain = domain_around(unit_cube());
        kernel.script_cut_pieces(vec![]);

        let err = subtract_solids(&mut kernel, &domain, &solids).unwrap_err();
        match err {
            PipelineError::BooleanFailure { diagnostic } => {
                assert!(diagnostic.contains("no fluid volume"));
            }
            other => panic!("expected a boolean failure, got {other:?}"),
        }
    }

    #[test]
    fn test_kernel_diagnostic_is_preserved() {
        let mut kernel = StubKernel::with_solids([unit_cube()]);
        let solids = kernel.solid_volumes().unwrap();
        let domain = domain_around(unit_cube());
        kernel.script_cut_failure("tool shell is open");

        let err = subtract_solids(&mut kernel, &domain, &solids).unwrap_err();
        assert_eq!(err, PipelineError::boolean_failure("tool shell is open"));
    }
}
