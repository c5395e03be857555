//! Deterministic midpoint stub

use super::{check_bounds, Distribution, UncertainValue};
use crate::errors::UncertainResult;

/// Collapses every band to its midpoint
///
/// Still enforces the bound contract, so it can stand in for a real sampler
/// when only the nominal chain matters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MidpointDistribution;

impl Distribution for MidpointDistribution {
    fn uniform<const N: usize>(
        &mut self,
        lower: f64,
        upper: f64,
    ) -> UncertainResult<UncertainValue<N>> {
        check_bounds(lower, upper)?;
        Ok(UncertainValue::exact(0.5 * (lower + upper)))
    }
}
