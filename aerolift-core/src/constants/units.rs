//! Unit Conversion Factors
//!
//! Multipliers applied when projecting SI results into the units pilots and
//! airframe documentation use.

/// Meters per second to knots.
///
/// 1 knot = 1852 m / 3600 s, so 1 m/s ≈ 1.94384 kt.
pub const MPS_TO_KNOTS: f64 = 1.94384;

/// Newtons to kilograms-force.
///
/// 1 kgf = 9.80665 N (standard gravity), so 1 N ≈ 0.101972 kgf.
pub const NEWTON_TO_KGF: f64 = 0.101972;

/// Knots to meters per second, the inverse of [`MPS_TO_KNOTS`].
pub const KNOTS_TO_MPS: f64 = 1.0 / MPS_TO_KNOTS;
