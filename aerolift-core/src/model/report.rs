//! Read-only projection of an observation for presentation
//!
//! A [`LiftReport`] copies the derived quantities out of an
//! [`ObservationState`] and adds the unit-converted variants pilots read:
//! knots for speed, kilograms-force for lift. Nothing is recomputed from the
//! inputs.
//!
//! ```text
//! air_density             : 1.172850 (kg/m³)
//! air_speed               : 56.920737 (m/s) 110.644805 (kt)
//! airfoil_pressure_delta  : 700.910000 (Pa)
//! lift_force              : 11333.714700 (N) 1155.722652 (kgf)
//! ```

use core::fmt;

use crate::{
    constants::physics::ABSOLUTE_ZERO_CELSIUS,
    constants::sensors::DEFAULT_SAMPLE_COUNT,
    constants::units::{MPS_TO_KNOTS, NEWTON_TO_KGF},
    uncertain::UncertainValue,
};

use super::ObservationState;

/// Derived quantities of one observation, with unit-converted variants
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiftReport<const N: usize = DEFAULT_SAMPLE_COUNT> {
    /// Air temperature (K)
    pub air_temperature: UncertainValue<N>,
    /// Air temperature (°C)
    pub air_temperature_celsius: UncertainValue<N>,
    /// Static pressure (Pa)
    pub pressure_absolute: UncertainValue<N>,
    /// Pitot pressure (Pa)
    pub pressure_pitot: UncertainValue<N>,
    /// Air density (kg/m³)
    pub air_density: UncertainValue<N>,
    /// Air speed (m/s)
    pub air_speed: UncertainValue<N>,
    /// Air speed (knots)
    pub air_speed_knots: UncertainValue<N>,
    /// Pressure differential across the airfoil (Pa)
    pub pressure_delta: UncertainValue<N>,
    /// Lift force (N)
    pub lift_force: UncertainValue<N>,
    /// Lift force (kgf)
    pub lift_force_kgf: UncertainValue<N>,
}

impl<const N: usize> LiftReport<N> {
    /// Project an observation
    pub fn from_observation(observation: &ObservationState<N>) -> Self {
        Self {
            air_temperature: observation.air_temperature,
            air_temperature_celsius: observation.air_temperature + ABSOLUTE_ZERO_CELSIUS,
            pressure_absolute: observation.pressure_absolute,
            pressure_pitot: observation.pressure_pitot,
            air_density: observation.air_density,
            air_speed: observation.air_speed,
            air_speed_knots: observation.air_speed.scale(MPS_TO_KNOTS),
            pressure_delta: observation.pressure_delta,
            lift_force: observation.lift_force,
            lift_force_kgf: observation.lift_force.scale(NEWTON_TO_KGF),
        }
    }

    /// Collapse every quantity to mean, spread and support
    pub fn summary(&self) -> ReportSummary {
        ReportSummary {
            air_temperature: QuantitySummary::of(&self.air_temperature),
            pressure_absolute: QuantitySummary::of(&self.pressure_absolute),
            pressure_pitot: QuantitySummary::of(&self.pressure_pitot),
            air_density: QuantitySummary::of(&self.air_density),
            air_speed: QuantitySummary::of(&self.air_speed),
            air_speed_knots: QuantitySummary::of(&self.air_speed_knots),
            pressure_delta: QuantitySummary::of(&self.pressure_delta),
            lift_force: QuantitySummary::of(&self.lift_force),
            lift_force_kgf: QuantitySummary::of(&self.lift_force_kgf),
        }
    }
}

/// Scalar description of one uncertain quantity
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct QuantitySummary {
    /// Ensemble mean
    pub mean: f64,
    /// Ensemble standard deviation
    pub std_dev: f64,
    /// Smallest sample
    pub lower: f64,
    /// Largest sample
    pub upper: f64,
}

impl QuantitySummary {
    /// Summarize an uncertain value
    pub fn of<const N: usize>(value: &UncertainValue<N>) -> Self {
        Self {
            mean: value.mean(),
            std_dev: value.std_dev(),
            lower: value.lower(),
            upper: value.upper(),
        }
    }
}

impl fmt::Display for QuantitySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6} ± {:.6} [{:.6}, {:.6}]", self.mean, self.std_dev, self.lower, self.upper)
    }
}

/// Scalar summary of a whole report
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ReportSummary {
    /// Air temperature (K)
    pub air_temperature: QuantitySummary,
    /// Static pressure (Pa)
    pub pressure_absolute: QuantitySummary,
    /// Pitot pressure (Pa)
    pub pressure_pitot: QuantitySummary,
    /// Air density (kg/m³)
    pub air_density: QuantitySummary,
    /// Air speed (m/s)
    pub air_speed: QuantitySummary,
    /// Air speed (knots)
    pub air_speed_knots: QuantitySummary,
    /// Pressure differential (Pa)
    pub pressure_delta: QuantitySummary,
    /// Lift force (N)
    pub lift_force: QuantitySummary,
    /// Lift force (kgf)
    pub lift_force_kgf: QuantitySummary,
}

impl<const N: usize> fmt::Display for LiftReport<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "air_density             : {:.6} (kg/m³)",
            self.air_density.mean()
        )?;
        writeln!(
            f,
            "air_speed               : {:.6} (m/s) {:.6} (kt)",
            self.air_speed.mean(),
            self.air_speed_knots.mean()
        )?;
        writeln!(
            f,
            "airfoil_pressure_delta  : {:.6} (Pa)",
            self.pressure_delta.mean()
        )?;
        write!(
            f,
            "lift_force              : {:.6} (N) {:.6} (kgf)",
            self.lift_force.mean(),
            self.lift_force_kgf.mean()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AirfoilConfig;

    fn report() -> LiftReport<8> {
        let t = UncertainValue::from_samples([
            298.8, 299.0, 299.5, 300.0, 300.0, 300.5, 301.0, 301.2,
        ]);
        let pa = UncertainValue::from_samples([
            100_990.0, 101_020.0, 100_980.0, 101_000.0, 101_010.0, 101_005.0, 100_995.0, 101_000.0,
        ]);
        let pp = UncertainValue::from_samples([
            102_900.0, 102_880.0, 102_920.0, 102_890.0, 102_910.0, 102_905.0, 102_895.0, 102_900.0,
        ]);
        let obs = ObservationState::evaluate(&AirfoilConfig::cessna_172(), t, pa, pp);
        LiftReport::from_observation(&obs)
    }

    #[test]
    fn conversions_hold_per_sample() {
        let report = report();

        for (kt, ms) in report.air_speed_knots.samples().iter().zip(report.air_speed.samples()) {
            assert!((kt - ms * MPS_TO_KNOTS).abs() < 1e-9);
        }
        for (kgf, n) in report.lift_force_kgf.samples().iter().zip(report.lift_force.samples()) {
            assert!((kgf - n * NEWTON_TO_KGF).abs() < 1e-9);
        }
        assert!((report.air_temperature_celsius.mean() - 26.85).abs() < 1e-9);
    }

    #[test]
    fn summary_matches_values() {
        let report = report();
        let summary = report.summary();

        assert_eq!(summary.lift_force.mean, report.lift_force.mean());
        assert_eq!(summary.air_speed.lower, report.air_speed.lower());
        assert_eq!(summary.air_temperature.upper, 301.2);
        assert!(summary.lift_force.std_dev > 0.0);
    }

    #[test]
    fn display_lists_every_derived_quantity() {
        let text = format!("{}", report());
        assert!(text.contains("air_density"));
        assert!(text.contains("(kt)"));
        assert!(text.contains("airfoil_pressure_delta"));
        assert!(text.contains("(kgf)"));
        assert_eq!(text.lines().count(), 4);
    }
}
