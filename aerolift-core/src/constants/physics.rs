//! Physical Constants for AeroLift
//!
//! Fundamental constants used by the density, speed and lift equations.

/// Specific gas constant of dry air (J/(kg·K)).
///
/// Relates static pressure, density and temperature through the ideal gas
/// law: `ρ = P / (R_specific × T)`.
///
/// Source: ISO 2533:1975 Standard Atmosphere
pub const DRY_AIR_GAS_CONSTANT: f64 = 287.05;

/// Absolute zero in Celsius (°C).
///
/// Offset between the Kelvin and Celsius scales. Used to present air
/// temperature in Celsius alongside the Kelvin value the model works in.
///
/// Source: NIST Special Publication 330 (2019)
pub const ABSOLUTE_ZERO_CELSIUS: f64 = -273.15;

/// Dynamic pressure coefficient (dimensionless).
///
/// The `½` in `q = ½ρv²`, shared by Bernoulli's speed equation and the
/// pressure differential across the airfoil.
pub const DYNAMIC_PRESSURE_COEFFICIENT: f64 = 0.5;
