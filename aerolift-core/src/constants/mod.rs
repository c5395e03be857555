//! Constants for AeroLift Core
//!
//! Every numeric value used by the model lives here, with its unit in the
//! name and a note on where it comes from.
//!
//! ## Organization
//!
//! - **Physics**: gas constant and temperature scale offsets
//! - **Units**: conversion factors used by reports
//! - **Sensors**: datasheet tolerances and sampling defaults
//! - **Airframes**: reference airframe geometry and flight envelope
//!
//! ## Usage Guidelines
//!
//! 1. Always use these constants instead of magic numbers
//! 2. Include the unit in the constant name
//! 3. Reference the datasheet or standard the value comes from

/// Physical constants used by the equation chain.
pub mod physics;

/// Unit conversion factors for reporting.
pub mod units;

/// Sensor tolerances and uncertainty sampling defaults.
pub mod sensors;

/// Reference airframe data.
pub mod airframes;

pub use physics::{ABSOLUTE_ZERO_CELSIUS, DRY_AIR_GAS_CONSTANT};

pub use units::{MPS_TO_KNOTS, NEWTON_TO_KGF};

pub use sensors::{
    CPT6010_PRESSURE_TOLERANCE, DEFAULT_SAMPLER_SEED, DEFAULT_SAMPLE_COUNT,
    RTD_TEMPERATURE_TOLERANCE,
};
