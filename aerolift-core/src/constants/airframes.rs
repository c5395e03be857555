//! Reference Airframe Data
//!
//! Published figures for the airframes used by the presets and demos.

// ===== CESSNA 172 =====

/// Cessna 172 wing reference area (m²).
///
/// 174 sq ft.
///
/// Source: Cessna 172 Pilot's Operating Handbook
pub const CESSNA_172_WING_AREA_M2: f64 = 16.17;

/// Cessna 172 airfoil geometry constant (dimensionless).
///
/// Estimated from wing profile photographs; the model uses `c² − 1`.
pub const CESSNA_172_GEOMETRY_CONSTANT: f64 = 1.17;

/// Cessna 172 maximum landing weight (kg).
///
/// 2400 lb.
pub const CESSNA_172_MAX_LANDING_WEIGHT_KG: f64 = 1088.622;

/// Cessna 172 maximum speed at sea level (knots).
pub const CESSNA_172_MAX_SPEED_KNOTS: f64 = 124.0;

/// Cessna 172 stall speed, flaps up (knots).
pub const CESSNA_172_STALL_FLAPS_UP_KNOTS: f64 = 48.0;

/// Cessna 172 stall speed, flaps down (knots).
pub const CESSNA_172_STALL_FLAPS_DOWN_KNOTS: f64 = 40.0;
