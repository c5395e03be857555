//! Observation State and the Lift Equation Chain
//!
//! ## Equations
//!
//! Evaluated in order on uncertain values, sample by sample:
//!
//! ```text
//! ρ  = P_static / (R × T)                  air density         (kg/m³)
//! v  = √(2 × (P_pitot − P_static) / ρ)     air speed           (m/s)
//! ΔP = ½ × ρ × v² × (c² − 1)               pressure delta      (Pa)
//! L  = ΔP × A                              lift force          (N)
//!
//! R = 287.05 J/(kg·K), dry air
//! ```
//!
//! The first is the ideal gas law, the second Bernoulli's relation for a
//! pitot-static probe, the third the pressure differential across the airfoil
//! for the configured geometry factor.
//!
//! Since `½ρv² = P_pitot − P_static` on every sample, the pressure delta is
//! also `(P_pitot − P_static) × (c² − 1)`. That identity only holds
//! sample-wise if the static pressure feeding density and the one feeding the
//! speed equation are the same draw, which the ensemble representation
//! guarantees.

use crate::{
    constants::physics::{DRY_AIR_GAS_CONSTANT, DYNAMIC_PRESSURE_COEFFICIENT},
    constants::sensors::DEFAULT_SAMPLE_COUNT,
    uncertain::UncertainValue,
};

use super::AirfoilConfig;

/// Immutable snapshot of one evaluation of the equation chain
///
/// A new value is produced for every update; nothing is patched in place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObservationState<const N: usize = DEFAULT_SAMPLE_COUNT> {
    /// Air temperature (K)
    pub air_temperature: UncertainValue<N>,
    /// Static pressure (Pa)
    pub pressure_absolute: UncertainValue<N>,
    /// Pitot pressure (Pa)
    pub pressure_pitot: UncertainValue<N>,
    /// Air density (kg/m³)
    pub air_density: UncertainValue<N>,
    /// True air speed (m/s)
    pub air_speed: UncertainValue<N>,
    /// Pressure differential across the airfoil (Pa)
    pub pressure_delta: UncertainValue<N>,
    /// Lift force (N)
    pub lift_force: UncertainValue<N>,
}

impl<const N: usize> ObservationState<N> {
    /// Run the equation chain on uncertain inputs
    pub fn evaluate(
        config: &AirfoilConfig,
        air_temperature: UncertainValue<N>,
        pressure_absolute: UncertainValue<N>,
        pressure_pitot: UncertainValue<N>,
    ) -> Self {
        let air_density = pressure_absolute / (DRY_AIR_GAS_CONSTANT * air_temperature);
        let air_speed = (2.0 * (pressure_pitot - pressure_absolute) / air_density).sqrt();
        let pressure_delta = DYNAMIC_PRESSURE_COEFFICIENT
            * air_density
            * air_speed.squared()
            * config.geometry_factor();
        let lift_force = pressure_delta * config.base_area_m2();

        Self {
            air_temperature,
            pressure_absolute,
            pressure_pitot,
            air_density,
            air_speed,
            pressure_delta,
            lift_force,
        }
    }

    /// True when every derived quantity is finite on every sample
    pub fn is_finite(&self) -> bool {
        self.air_density.is_finite()
            && self.air_speed.is_finite()
            && self.pressure_delta.is_finite()
            && self.lift_force.is_finite()
    }
}
