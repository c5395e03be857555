//! Error Types for Lift Model Failures
//!
//! ## Design Philosophy
//!
//! Errors follow the same rules as the rest of the crate:
//!
//! 1. **Small Size**: every variant carries at most two `f64` values or a
//!    `&'static str` reason, so errors are cheap to return from `update`.
//!
//! 2. **No Heap Allocation**: reasons are `&'static str`, never `String`.
//!
//! 3. **Copy Semantics**: errors implement `Copy`.
//!
//! 4. **Surfaced, Never Defaulted**: no error is turned into a zero or `NaN`
//!    value. A failed update leaves the model exactly as it was.
//!
//! ## Error Categories
//!
//! ### Construction
//! - `Configuration`: base area not positive, tolerance outside `[0, 1)`
//!
//! ### Update
//! - `PhysicallyInvalidInput`: readings that would take the square root of a
//!   non-positive number somewhere in the uncertainty band (pitot pressure not
//!   above static pressure, non-positive temperature, non-finite readings)
//! - `UncertaintyPrimitive`: the distribution rejected the bounds it was
//!   handed; passed through unchanged
//!
//! ### Reporting
//! - `NotObserved`: a report was requested before the first successful update
//!
//! ## Error Handling Strategy
//!
//! ```rust
//! use aerolift_core::{AirfoilModel, ModelError};
//!
//! let mut model = AirfoilModel::new(16.17, 1.17, 0.004, 0.0002)?;
//!
//! match model.update(300.0, 101_000.0, 100_000.0) {
//!     Ok(_) => {}
//!     Err(ModelError::PhysicallyInvalidInput { reason }) => {
//!         // Pitot port blocked or sensors swapped
//!         let _ = reason;
//!     }
//!     Err(other) => return Err(other),
//! }
//! # Ok::<(), ModelError>(())
//! ```

use thiserror_no_std::Error;

/// Result type for model operations
pub type ModelResult<T> = Result<T, ModelError>;

/// Result type for uncertainty primitive operations
pub type UncertainResult<T> = Result<T, UncertaintyError>;

/// Errors raised by a [`Distribution`](crate::uncertain::Distribution)
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum UncertaintyError {
    /// Lower bound above upper bound
    #[error("Invalid bounds: lower {lower} exceeds upper {upper}")]
    InvalidBounds {
        /// Requested lower bound
        lower: f64,
        /// Requested upper bound
        upper: f64,
    },

    /// A bound, or the width between them, was NaN or infinite
    #[error("Bounds and band width must be finite")]
    NonFiniteBound,
}

/// Errors raised while constructing, updating or reporting a lift model
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ModelError {
    /// Construction parameters outside their valid domain
    #[error("Configuration error: {reason}")]
    Configuration {
        /// Which parameter was rejected
        reason: &'static str,
    },

    /// Readings that cannot describe forward flight in a real atmosphere
    #[error("Physically invalid input: {reason}")]
    PhysicallyInvalidInput {
        /// Which reading or band failed
        reason: &'static str,
    },

    /// Error reported by the uncertainty primitive, surfaced as-is
    #[error("Uncertainty primitive error: {0}")]
    UncertaintyPrimitive(#[from] UncertaintyError),

    /// Report requested before any successful update
    #[error("No observation available: call update first")]
    NotObserved,
}

#[cfg(feature = "defmt")]
impl defmt::Format for UncertaintyError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::InvalidBounds { lower, upper } =>
                defmt::write!(fmt, "Invalid bounds [{}, {}]", lower, upper),
            Self::NonFiniteBound =>
                defmt::write!(fmt, "Non-finite bound"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ModelError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::Configuration { reason } =>
                defmt::write!(fmt, "Configuration: {}", reason),
            Self::PhysicallyInvalidInput { reason } =>
                defmt::write!(fmt, "Invalid input: {}", reason),
            Self::UncertaintyPrimitive(err) =>
                defmt::write!(fmt, "Uncertainty: {}", err),
            Self::NotObserved =>
                defmt::write!(fmt, "Not observed"),
        }
    }
}
