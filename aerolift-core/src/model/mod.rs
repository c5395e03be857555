//! Uncertainty-Aware Airfoil Lift Model
//!
//! ## Overview
//!
//! [`AirfoilModel`] owns an immutable [`AirfoilConfig`], an uncertainty
//! primitive and a tolerance policy. Each call to
//! [`update`](AirfoilModel::update) turns three nominal readings into
//! uncertain inputs and evaluates the lift equation chain on them:
//!
//! ```text
//! nominal readings ──► tolerance policy ──► [lower, upper] bands
//!                                                 │
//!                                                 ▼
//!                                     Distribution::uniform
//!                                                 │
//!                                                 ▼
//!     ρ = P/(R·T) ──► v = √(2ΔP/ρ) ──► ΔP_wing = ½ρv²(c²−1) ──► L = ΔP_wing·A
//! ```
//!
//! ## Lifecycle
//!
//! ```text
//! new() ──► configured ──update() Ok──► observed ──update() Ok──► observed
//!               │                          │
//!               └──update() Err──► configured   └──update() Err──► observed (unchanged)
//! ```
//!
//! A failed update never publishes a partial observation: the new state is
//! built off to the side and only swapped in once every derived sample is
//! finite.
//!
//! ## Input Checks
//!
//! Before sampling, `update` requires finite readings, a positive temperature,
//! a positive static pressure and a pitot pressure above the static pressure.
//! The tolerance policy then produces the three bands and the distribution
//! samples them, so malformed bands are reported by the distribution as
//! [`ModelError::UncertaintyPrimitive`]. Only then does `update` require the
//! lowest pitot value to sit above the highest static value, which keeps the
//! speed radicand positive on every sample.
//!
//! ## Example
//!
//! ```rust
//! use aerolift_core::AirfoilModel;
//!
//! // Cessna 172: 16.17 m² wing, c = 1.17, RTD ±0.4 %, CPT6010 ±0.02 %
//! let mut model = AirfoilModel::new(16.17, 1.17, 0.004, 0.0002)?;
//!
//! // Cruise near sea level
//! model.update(300.0, 101_000.0, 102_900.0)?;
//!
//! let report = model.report()?;
//! assert!(report.lift_force.mean() > 0.0);
//! assert!(report.air_speed_knots.lower() < report.air_speed_knots.upper());
//! # Ok::<(), aerolift_core::ModelError>(())
//! ```

mod config;
mod observation;
mod report;

pub use config::AirfoilConfig;
pub use observation::ObservationState;
pub use report::{LiftReport, QuantitySummary, ReportSummary};

use crate::{
    constants::sensors::DEFAULT_SAMPLE_COUNT,
    errors::{ModelError, ModelResult},
    tolerance::{Proportional, Quantity, ToleranceModel},
    uncertain::{Distribution, StratifiedSampler},
    validation::{check_finite, check_positive, check_strictly_above},
};

/// Lift model bound to one airfoil configuration
#[derive(Debug, Clone)]
pub struct AirfoilModel<
    D = StratifiedSampler,
    P = Proportional,
    const N: usize = DEFAULT_SAMPLE_COUNT,
> {
    config: AirfoilConfig,
    distribution: D,
    tolerance: P,
    observation: Option<ObservationState<N>>,
}

impl AirfoilModel {
    /// Build a model with the default sampler and proportional tolerances
    ///
    /// Fails with [`ModelError::Configuration`] when `base_area_m2 ≤ 0` or a
    /// tolerance is outside `[0, 1)`.
    pub fn new(
        base_area_m2: f64,
        geometry_constant: f64,
        temperature_tolerance: f64,
        pressure_tolerance: f64,
    ) -> ModelResult<Self> {
        let config = AirfoilConfig::new(
            base_area_m2,
            geometry_constant,
            temperature_tolerance,
            pressure_tolerance,
        )?;
        Ok(Self::from_config(config))
    }

    /// Build a model from an already validated configuration
    pub fn from_config(config: AirfoilConfig) -> Self {
        Self::from_parts(config, StratifiedSampler::default(), Proportional)
    }
}

impl<D, P, const N: usize> AirfoilModel<D, P, N>
where
    D: Distribution,
    P: ToleranceModel,
{
    /// Build a model from explicit parts
    ///
    /// This is the constructor to use for a non-default sample count:
    ///
    /// ```rust
    /// use aerolift_core::{AirfoilConfig, AirfoilModel};
    /// use aerolift_core::tolerance::Proportional;
    /// use aerolift_core::uncertain::MonteCarloSampler;
    ///
    /// let model: AirfoilModel<_, _, 1024> = AirfoilModel::from_parts(
    ///     AirfoilConfig::cessna_172(),
    ///     MonteCarloSampler::new(7),
    ///     Proportional,
    /// );
    /// assert!(!model.is_observed());
    /// ```
    pub fn from_parts(config: AirfoilConfig, distribution: D, tolerance: P) -> Self {
        log_debug!(
            "Airfoil model: area={} m², geometry factor={}, tol T={}, tol P={}, samples={}",
            config.base_area_m2(),
            config.geometry_factor(),
            config.temperature_tolerance(),
            config.pressure_tolerance(),
            N
        );

        Self {
            config,
            distribution,
            tolerance,
            observation: None,
        }
    }

    /// Replace the uncertainty primitive, dropping any observation
    pub fn with_distribution<D2: Distribution>(self, distribution: D2) -> AirfoilModel<D2, P, N> {
        AirfoilModel::from_parts(self.config, distribution, self.tolerance)
    }

    /// Replace the tolerance policy, dropping any observation
    pub fn with_tolerance_model<P2: ToleranceModel>(self, tolerance: P2) -> AirfoilModel<D, P2, N> {
        AirfoilModel::from_parts(self.config, self.distribution, tolerance)
    }

    /// Immutable configuration
    pub fn config(&self) -> &AirfoilConfig {
        &self.config
    }

    /// Latest observation, if any update has succeeded
    pub fn observation(&self) -> Option<&ObservationState<N>> {
        self.observation.as_ref()
    }

    /// True once an update has succeeded
    pub fn is_observed(&self) -> bool {
        self.observation.is_some()
    }

    /// Recompute the observation from new nominal readings
    ///
    /// `temperature_k` in Kelvin, both pressures in Pascal. On error the
    /// previous observation (or lack of one) is kept.
    pub fn update(
        &mut self,
        temperature_k: f64,
        pressure_absolute_pa: f64,
        pressure_pitot_pa: f64,
    ) -> ModelResult<&ObservationState<N>> {
        match self.observe(temperature_k, pressure_absolute_pa, pressure_pitot_pa) {
            Ok(observation) => {
                log_debug!(
                    "Update T={} K Pa={} Pa Pp={} Pa: rho={} v={} L={}",
                    temperature_k,
                    pressure_absolute_pa,
                    pressure_pitot_pa,
                    observation.air_density.mean(),
                    observation.air_speed.mean(),
                    observation.lift_force.mean()
                );
                Ok(&*self.observation.insert(observation))
            }
            Err(err) => {
                log_warn!(
                    "Rejected update T={} K Pa={} Pa Pp={} Pa: {}",
                    temperature_k,
                    pressure_absolute_pa,
                    pressure_pitot_pa,
                    err
                );
                Err(err)
            }
        }
    }

    /// Project the latest observation for presentation
    pub fn report(&self) -> ModelResult<LiftReport<N>> {
        self.observation
            .as_ref()
            .map(LiftReport::from_observation)
            .ok_or(ModelError::NotObserved)
    }

    /// Build a new observation without touching `self.observation`
    fn observe(
        &mut self,
        temperature_k: f64,
        pressure_absolute_pa: f64,
        pressure_pitot_pa: f64,
    ) -> ModelResult<ObservationState<N>> {
        check_positive(temperature_k, "Air temperature must be positive")?;
        check_positive(pressure_absolute_pa, "Static pressure must be positive")?;
        check_finite(pressure_pitot_pa, "Pitot pressure must be finite")?;
        check_strictly_above(
            pressure_pitot_pa,
            pressure_absolute_pa,
            "Pitot pressure must exceed static pressure",
        )?;

        let temperature_tolerance = self.config.temperature_tolerance();
        let pressure_tolerance = self.config.pressure_tolerance();

        let (t_lo, t_hi) =
            self.tolerance
                .bounds(Quantity::AirTemperature, temperature_k, temperature_tolerance);
        let (pa_lo, pa_hi) =
            self.tolerance
                .bounds(Quantity::PressureAbsolute, pressure_absolute_pa, pressure_tolerance);
        let (pp_lo, pp_hi) =
            self.tolerance
                .bounds(Quantity::PressurePitot, pressure_pitot_pa, pressure_tolerance);

        let air_temperature = self.distribution.uniform(t_lo, t_hi)?;
        let pressure_absolute = self.distribution.uniform(pa_lo, pa_hi)?;
        let pressure_pitot = self.distribution.uniform(pp_lo, pp_hi)?;

        // Bands are well formed here; only their relative position is left
        check_strictly_above(
            pp_lo,
            pa_hi,
            "Pitot and static pressure bands overlap",
        )?;

        let observation = ObservationState::evaluate(
            &self.config,
            air_temperature,
            pressure_absolute,
            pressure_pitot,
        );

        if !observation.is_finite() {
            return Err(ModelError::PhysicallyInvalidInput {
                reason: "Derived quantities not finite across the uncertainty band",
            });
        }

        Ok(observation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::UncertaintyError;
    use crate::tolerance::{Asymmetric, FullScale};
    use crate::uncertain::MidpointDistribution;

    #[test]
    fn starts_configured() {
        let model = AirfoilModel::new(16.17, 1.17, 0.004, 0.0002).unwrap();
        assert!(!model.is_observed());
        assert_eq!(model.report().unwrap_err(), ModelError::NotObserved);
    }

    #[test]
    fn update_moves_to_observed() {
        let mut model = AirfoilModel::from_config(AirfoilConfig::cessna_172());
        model.update(300.0, 101_000.0, 102_900.0).unwrap();

        assert!(model.is_observed());
        let report = model.report().unwrap();
        assert!(report.lift_force.is_finite());
        assert!(report.lift_force.lower() > 0.0);
    }

    #[test]
    fn inputs_span_tolerance_band() {
        let mut model = AirfoilModel::from_config(AirfoilConfig::cessna_172());
        let obs = model.update(300.0, 101_000.0, 102_900.0).unwrap();

        assert!((obs.air_temperature.lower() - 298.8).abs() < 1e-9);
        assert!((obs.air_temperature.upper() - 301.2).abs() < 1e-9);
        assert!((obs.pressure_absolute.lower() - 100_979.8).abs() < 1e-6);
        assert!((obs.pressure_pitot.upper() - 102_920.58).abs() < 1e-6);
    }

    #[test]
    fn rejects_reversed_pressures() {
        let mut model = AirfoilModel::from_config(AirfoilConfig::cessna_172());
        let result = model.update(300.0, 101_000.0, 100_000.0);

        assert!(matches!(result, Err(ModelError::PhysicallyInvalidInput { .. })));
        assert!(!model.is_observed());
    }

    #[test]
    fn rejects_non_positive_temperature() {
        let mut model = AirfoilModel::from_config(AirfoilConfig::cessna_172());
        for t in [0.0, -10.0, f64::NAN] {
            assert!(matches!(
                model.update(t, 101_000.0, 102_900.0),
                Err(ModelError::PhysicallyInvalidInput { .. })
            ));
        }
    }

    #[test]
    fn rejects_non_finite_pitot() {
        let mut model = AirfoilModel::from_config(AirfoilConfig::cessna_172());
        for pitot in [f64::INFINITY, f64::NAN] {
            assert_eq!(
                model.update(300.0, 101_000.0, pitot).unwrap_err(),
                ModelError::PhysicallyInvalidInput {
                    reason: "Pitot pressure must be finite"
                }
            );
        }
        assert!(!model.is_observed());
    }

    #[test]
    fn rejects_band_reaching_below_absolute_zero() {
        // ±0.9 of a 150 K span around 100 K puts part of the band below 0 K
        let config = AirfoilConfig::new(16.17, 1.17, 0.9, 0.0002).unwrap();
        let mut model =
            AirfoilModel::from_config(config).with_tolerance_model(FullScale::default());

        assert_eq!(
            model.update(100.0, 101_000.0, 102_900.0).unwrap_err(),
            ModelError::PhysicallyInvalidInput {
                reason: "Derived quantities not finite across the uncertainty band"
            }
        );
        assert!(!model.is_observed());
    }

    #[test]
    fn inverted_band_reported_before_overlap() {
        // Negative span inverts the temperature band; pressure bands also overlap
        let policy = FullScale {
            temperature_span_k: -150.0,
            pressure_span_pa: 130_000.0,
        };
        let mut model = AirfoilModel::from_config(AirfoilConfig::cessna_172())
            .with_tolerance_model(policy);

        let err = model.update(300.0, 101_000.0, 101_010.0).unwrap_err();
        assert!(matches!(
            err,
            ModelError::UncertaintyPrimitive(UncertaintyError::InvalidBounds { .. })
        ));
        assert!(!model.is_observed());
    }

    #[test]
    fn rejects_overlapping_bands() {
        // Nominal pitot 1 Pa above static, bands are ±20 Pa wide
        let mut model = AirfoilModel::from_config(AirfoilConfig::cessna_172());
        assert_eq!(
            model.update(300.0, 101_000.0, 101_001.0).unwrap_err(),
            ModelError::PhysicallyInvalidInput {
                reason: "Pitot and static pressure bands overlap"
            }
        );
    }

    #[test]
    fn failed_update_keeps_previous_observation() {
        let mut model = AirfoilModel::from_config(AirfoilConfig::cessna_172());
        model.update(300.0, 101_000.0, 102_900.0).unwrap();
        let before = *model.observation().unwrap();

        assert!(model.update(300.0, 101_000.0, 100_000.0).is_err());
        assert_eq!(model.observation(), Some(&before));
    }

    #[test]
    fn primitive_errors_surface_unchanged() {
        // Negative weight flips the band: lower ends up above upper
        let mut model = AirfoilModel::from_config(AirfoilConfig::cessna_172())
            .with_tolerance_model(Asymmetric::new(-2.0, -2.0));

        let err = model.update(300.0, 101_000.0, 102_900.0).unwrap_err();
        assert!(matches!(
            err,
            ModelError::UncertaintyPrimitive(UncertaintyError::InvalidBounds { .. })
        ));
        assert!(!model.is_observed());
    }

    #[test]
    fn midpoint_stub_gives_nominal_chain() {
        let mut model = AirfoilModel::from_config(AirfoilConfig::cessna_172())
            .with_distribution(MidpointDistribution);
        let obs = model.update(300.0, 101_000.0, 102_900.0).unwrap();

        assert!(obs.lift_force.is_point());
        assert!((obs.air_speed.mean() - 56.92).abs() < 0.01);
    }
}
