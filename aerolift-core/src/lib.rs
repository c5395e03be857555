//! Uncertainty-aware airfoil lift estimation
//!
//! Estimates the lift produced by a wing from three raw sensor readings
//! (outside air temperature, static pressure and pitot pressure) while
//! carrying each sensor's tolerance through every derived quantity.
//!
//! Readings become uniformly distributed uncertain values, and the equation
//! chain (air density, air speed, pressure differential, lift) runs on those
//! values instead of on scalars. The result is a distribution for each
//! quantity, not a single number.
//!
//! Key properties:
//! - No heap allocation: uncertain values are fixed-size sample ensembles
//! - Readings that would produce `NaN` are rejected, never propagated
//! - Sampling is seeded and reproducible
//!
//! ```no_run
//! use aerolift_core::AirfoilModel;
//!
//! let mut model = AirfoilModel::new(16.17, 1.17, 0.004, 0.0002)?;
//! model.update(300.0, 101_000.0, 102_900.0)?;
//!
//! let report = model.report()?;
//! let (low, high) = report.lift_force_kgf.interval(0.95);
//! # let _ = (low, high);
//! # Ok::<(), aerolift_core::ModelError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[macro_use]
mod macros;

pub mod constants;
pub mod envelope;
pub mod errors;
pub mod model;
pub mod tolerance;
pub mod uncertain;
pub mod validation;

// Public API
pub use envelope::{EnvelopeAssessment, FlightEnvelope};
pub use errors::{ModelError, ModelResult, UncertainResult, UncertaintyError};
pub use model::{
    AirfoilConfig,
    AirfoilModel,
    LiftReport,
    ObservationState,
    QuantitySummary,
    ReportSummary,
};
pub use tolerance::{Proportional, ToleranceModel};
pub use uncertain::{Distribution, UncertainValue};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
