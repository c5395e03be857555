//! Uncertainty Primitive
//!
//! ## Overview
//!
//! The lift model never works with bare scalars for sensor readings. Each
//! reading becomes an [`UncertainValue`], a quantity uniformly distributed
//! between a lower and an upper bound, and every equation is evaluated on
//! those values so the spread flows through to density, speed and lift.
//!
//! The model only depends on the [`Distribution`] port:
//!
//! ```text
//! uniform(lower, upper) → UncertainValue
//! ```
//!
//! Any implementation must:
//! - reject `lower > upper` and non-finite bounds, never swap them
//! - produce a value whose support is exactly `[lower, upper]`
//! - produce values that compose under `+ − × ÷` and `sqrt` with the correct
//!   pushforward distribution, keeping operands from the same draw correlated
//!
//! ## Implementations
//!
//! | Type                     | Behavior                                       |
//! |--------------------------|------------------------------------------------|
//! | [`StratifiedSampler`]    | Evenly spaced strata incl. endpoints, shuffled |
//! | [`MonteCarloSampler`]    | Independent pseudo-random uniform draws        |
//! | [`MidpointDistribution`] | Deterministic, collapses to the midpoint       |
//!
//! `StratifiedSampler` is the default: it covers the band evenly with few
//! samples and hits both bounds exactly. `MonteCarloSampler` is the textbook
//! estimator. `MidpointDistribution` is a stub for nominal evaluation and tests.
//!
//! ## Example
//!
//! ```rust
//! use aerolift_core::uncertain::{Distribution, StratifiedSampler, UncertainValue};
//!
//! let mut sampler = StratifiedSampler::default();
//! let temperature: UncertainValue = sampler.uniform(298.8, 301.2)?;
//!
//! assert_eq!(temperature.lower(), 298.8);
//! assert_eq!(temperature.upper(), 301.2);
//! # Ok::<(), aerolift_core::UncertaintyError>(())
//! ```

mod midpoint;
mod sampler;
mod value;

pub use midpoint::MidpointDistribution;
pub use sampler::{MonteCarloSampler, StratifiedSampler};
pub use value::UncertainValue;

use crate::errors::{UncertainResult, UncertaintyError};

/// Source of uniformly distributed uncertain values
pub trait Distribution {
    /// Produce a value uniformly distributed on `[lower, upper]`
    fn uniform<const N: usize>(
        &mut self,
        lower: f64,
        upper: f64,
    ) -> UncertainResult<UncertainValue<N>>;
}

impl<D: Distribution> Distribution for &mut D {
    fn uniform<const N: usize>(
        &mut self,
        lower: f64,
        upper: f64,
    ) -> UncertainResult<UncertainValue<N>> {
        (**self).uniform(lower, upper)
    }
}

/// Bounds check shared by every implementation
///
/// Both bounds and the band width must be finite; `f64::MIN..f64::MAX` has
/// finite ends but an infinite width.
pub(crate) fn check_bounds(lower: f64, upper: f64) -> UncertainResult<()> {
    if !lower.is_finite() || !upper.is_finite() {
        return Err(UncertaintyError::NonFiniteBound);
    }
    if lower > upper {
        return Err(UncertaintyError::InvalidBounds { lower, upper });
    }
    if !(upper - lower).is_finite() {
        return Err(UncertaintyError::NonFiniteBound);
    }
    Ok(())
}
