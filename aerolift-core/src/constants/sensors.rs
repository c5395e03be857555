//! Sensor Specifications and Sampling Defaults
//!
//! Fractional tolerances are half-widths of the uncertainty band relative to
//! the nominal reading: a tolerance of `0.004` means ±0.4 %.

// ===== TEMPERATURE SENSOR SPECIFICATIONS =====

/// RTD air temperature sensor tolerance (fraction of reading).
///
/// ±0.4 % of reading, typical of a class-B platinum RTD over the flight
/// temperature range.
///
/// Source: IEC 60751 class B
pub const RTD_TEMPERATURE_TOLERANCE: f64 = 0.004;

// ===== PRESSURE SENSOR SPECIFICATIONS =====

/// Absolute pressure transducer tolerance (fraction of reading).
///
/// ±0.02 % FS, applied to both the static and the pitot port.
///
/// Source: CPT6010 datasheet
pub const CPT6010_PRESSURE_TOLERANCE: f64 = 0.0002;

/// Full-scale range of the CPT6010 pressure transducer (Pa).
///
/// Used by the full-scale tolerance policy, which expresses uncertainty as a
/// fraction of the sensor range instead of the reading.
///
/// Source: CPT6010 datasheet (0 - 130 kPa absolute)
pub const CPT6010_FULL_SCALE_PA: f64 = 130_000.0;

/// Full-scale span of the RTD temperature channel (K).
///
/// Source: typical avionics OAT probe span (-70 °C to +80 °C)
pub const RTD_FULL_SCALE_K: f64 = 150.0;

// ===== UNCERTAINTY SAMPLING =====

/// Number of joint samples carried by each uncertain quantity.
///
/// 256 samples × 8 bytes = 2 KB per quantity, 14 KB for a full observation.
/// Enough to resolve the 1 % tails of the lift distribution.
pub const DEFAULT_SAMPLE_COUNT: usize = 256;

/// Seed for the default samplers.
///
/// Fixed so that two models built the same way produce identical ensembles.
pub const DEFAULT_SAMPLER_SEED: u64 = 0x5EED_A1F0;
