//! Static airframe geometry and sensor tolerances

use crate::{
    constants::airframes::{CESSNA_172_GEOMETRY_CONSTANT, CESSNA_172_WING_AREA_M2},
    constants::sensors::{CPT6010_PRESSURE_TOLERANCE, RTD_TEMPERATURE_TOLERANCE},
    errors::ModelResult,
    validation::{as_configuration, check_finite, check_positive, check_tolerance},
};

/// Immutable configuration of one airfoil and its sensors
///
/// The geometry constant `c` is turned into the geometry factor `c² − 1`
/// once, here, and never recomputed.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AirfoilConfig {
    base_area_m2: f64,
    geometry_constant: f64,
    geometry_factor: f64,
    temperature_tolerance: f64,
    pressure_tolerance: f64,
}

impl AirfoilConfig {
    /// Validate and build a configuration
    ///
    /// Fails with [`ModelError::Configuration`](crate::ModelError::Configuration)
    /// when the base area is not a positive number or a tolerance is outside
    /// `[0, 1)`.
    pub fn new(
        base_area_m2: f64,
        geometry_constant: f64,
        temperature_tolerance: f64,
        pressure_tolerance: f64,
    ) -> ModelResult<Self> {
        as_configuration(check_positive(base_area_m2, "Base area must be positive"))?;
        as_configuration(check_finite(geometry_constant, "Geometry constant must be finite"))?;
        check_tolerance(temperature_tolerance, "Temperature tolerance must be in [0, 1)")?;
        check_tolerance(pressure_tolerance, "Pressure tolerance must be in [0, 1)")?;

        Ok(Self {
            base_area_m2,
            geometry_constant,
            geometry_factor: geometry_constant * geometry_constant - 1.0,
            temperature_tolerance,
            pressure_tolerance,
        })
    }

    /// Cessna 172 wing with an RTD temperature probe and CPT6010 transducers
    pub fn cessna_172() -> Self {
        Self {
            base_area_m2: CESSNA_172_WING_AREA_M2,
            geometry_constant: CESSNA_172_GEOMETRY_CONSTANT,
            geometry_factor: CESSNA_172_GEOMETRY_CONSTANT * CESSNA_172_GEOMETRY_CONSTANT - 1.0,
            temperature_tolerance: RTD_TEMPERATURE_TOLERANCE,
            pressure_tolerance: CPT6010_PRESSURE_TOLERANCE,
        }
    }

    /// Same airfoil with every tolerance forced to zero
    ///
    /// Evaluating with this configuration gives the nominal, spread-free
    /// result of the equation chain.
    pub fn without_tolerances(&self) -> Self {
        Self {
            temperature_tolerance: 0.0,
            pressure_tolerance: 0.0,
            ..*self
        }
    }

    /// Wing reference area (m²)
    pub fn base_area_m2(&self) -> f64 {
        self.base_area_m2
    }

    /// Raw geometry constant `c` as supplied at construction
    pub fn geometry_constant(&self) -> f64 {
        self.geometry_constant
    }

    /// Precomputed geometry factor `c² − 1`
    pub fn geometry_factor(&self) -> f64 {
        self.geometry_factor
    }

    /// Fractional temperature tolerance
    pub fn temperature_tolerance(&self) -> f64 {
        self.temperature_tolerance
    }

    /// Fractional pressure tolerance, shared by static and pitot ports
    pub fn pressure_tolerance(&self) -> f64 {
        self.pressure_tolerance
    }
}
