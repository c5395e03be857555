//! Input and Configuration Checks
//!
//! ## Overview
//!
//! Shared checks used by [`AirfoilConfig`](crate::model::AirfoilConfig) at
//! construction and by [`AirfoilModel::update`](crate::model::AirfoilModel::update)
//! before any sampling happens.
//!
//! All functions are pure and allocation-free. They never clamp or repair a
//! value: a reading that fails a check is reported, not corrected.
//!
//! ## Why Check Before Sampling?
//!
//! The speed equation takes a square root of
//!
//! ```text
//! 2 × (P_pitot − P_static) / ρ
//! ```
//!
//! If any joint sample of the pitot band sits at or below the static band the
//! radicand goes non-positive and `NaN` spreads through speed, pressure
//! differential and lift. Checking the nominal readings, and then the bands
//! produced by the tolerance policy, rejects those inputs up front.
//!
//! ```rust
//! use aerolift_core::validation::check_positive;
//!
//! assert!(check_positive(300.0, "Air temperature must be positive").is_ok());
//! assert!(check_positive(0.0, "Air temperature must be positive").is_err());
//! ```

use crate::errors::{ModelError, ModelResult};

/// Values that can be checked for mathematical validity
pub trait Validatable {
    /// Check the value is a usable number (not NaN or infinite)
    fn is_valid(&self) -> bool;
}

impl Validatable for f64 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}

/// Require a finite, strictly positive value
pub fn check_positive(value: f64, reason: &'static str) -> ModelResult<()> {
    if value.is_valid() && value > 0.0 {
        Ok(())
    } else {
        Err(ModelError::PhysicallyInvalidInput { reason })
    }
}

/// Require a finite value
pub fn check_finite(value: f64, reason: &'static str) -> ModelResult<()> {
    if value.is_valid() {
        Ok(())
    } else {
        Err(ModelError::PhysicallyInvalidInput { reason })
    }
}

/// Require a fractional tolerance in `[0, 1)`
///
/// A tolerance of 1 or more would put the lower bound of a strictly positive
/// quantity at or below zero.
pub fn check_tolerance(tolerance: f64, reason: &'static str) -> ModelResult<()> {
    if tolerance.is_valid() && (0.0..1.0).contains(&tolerance) {
        Ok(())
    } else {
        Err(ModelError::Configuration { reason })
    }
}

/// Require `upper` strictly above `lower`
///
/// Used for the pitot/static pair, both on nominal readings and on the
/// edges of their uncertainty bands.
pub fn check_strictly_above(upper: f64, lower: f64, reason: &'static str) -> ModelResult<()> {
    if upper > lower {
        Ok(())
    } else {
        Err(ModelError::PhysicallyInvalidInput { reason })
    }
}

/// Turn a physical-input failure into a configuration failure
///
/// Construction reuses the positivity checks but reports them as
/// configuration errors.
pub(crate) fn as_configuration(result: ModelResult<()>) -> ModelResult<()> {
    result.map_err(|err| match err {
        ModelError::PhysicallyInvalidInput { reason } => ModelError::Configuration { reason },
        other => other,
    })
}
