//! Tolerance Policies
//!
//! ## Overview
//!
//! A tolerance policy turns a nominal reading and the configured tolerance
//! into the `[lower, upper]` band handed to the uncertainty primitive. The
//! equation chain never sees the policy, so a different sensor-noise model
//! can be swapped in without touching the physics.
//!
//! ## Policies
//!
//! ```text
//! Proportional   [v·(1−t),        v·(1+t)]         % of reading (default)
//! FullScale      [v − t·FS,       v + t·FS]        % of sensor range
//! Asymmetric     [v·(1−t·below),  v·(1+t·above)]   weighted per side
//! ```
//!
//! Proportional is the simplest encoding and the one datasheets quoting
//! "% of reading" describe. Sensors specified as "% FS" (such as the CPT6010
//! pressure transducer) have a constant absolute band regardless of the
//! reading, which `FullScale` models. `Asymmetric` covers sensors with a known
//! bias direction, such as an RTD that self-heats and reads high.
//!
//! ## Example
//!
//! ```rust
//! use aerolift_core::tolerance::{Proportional, Quantity, ToleranceModel};
//!
//! let (lower, upper) = Proportional.bounds(Quantity::AirTemperature, 300.0, 0.004);
//! assert!((lower - 298.8).abs() < 1e-9);
//! assert!((upper - 301.2).abs() < 1e-9);
//! ```

use crate::constants::sensors::{CPT6010_FULL_SCALE_PA, RTD_FULL_SCALE_K};

/// Sensor channel a band is being built for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    /// Outside air temperature (K)
    AirTemperature,
    /// Static port pressure (Pa)
    PressureAbsolute,
    /// Pitot (stagnation) pressure (Pa)
    PressurePitot,
}

/// Maps a nominal reading and tolerance to uncertainty bounds
pub trait ToleranceModel {
    /// Return `(lower, upper)` for `nominal` read on `quantity`
    fn bounds(&self, quantity: Quantity, nominal: f64, tolerance: f64) -> (f64, f64);
}

/// Symmetric band as a fraction of the reading
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Proportional;

impl ToleranceModel for Proportional {
    fn bounds(&self, _quantity: Quantity, nominal: f64, tolerance: f64) -> (f64, f64) {
        (nominal * (1.0 - tolerance), nominal * (1.0 + tolerance))
    }
}

/// Symmetric band as a fraction of each sensor's full-scale range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FullScale {
    /// Temperature channel span (K)
    pub temperature_span_k: f64,
    /// Pressure channel span (Pa), shared by static and pitot ports
    pub pressure_span_pa: f64,
}

impl Default for FullScale {
    fn default() -> Self {
        Self {
            temperature_span_k: RTD_FULL_SCALE_K,
            pressure_span_pa: CPT6010_FULL_SCALE_PA,
        }
    }
}

impl ToleranceModel for FullScale {
    fn bounds(&self, quantity: Quantity, nominal: f64, tolerance: f64) -> (f64, f64) {
        let span = match quantity {
            Quantity::AirTemperature => self.temperature_span_k,
            Quantity::PressureAbsolute | Quantity::PressurePitot => self.pressure_span_pa,
        };
        let half_width = tolerance * span;
        (nominal - half_width, nominal + half_width)
    }
}

/// Fractional band with separate weights below and above the reading
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Asymmetric {
    /// Multiplier on the tolerance below the reading
    pub below: f64,
    /// Multiplier on the tolerance above the reading
    pub above: f64,
}

impl Asymmetric {
    /// Create a policy with the given side weights
    pub fn new(below: f64, above: f64) -> Self {
        Self { below, above }
    }
}

impl Default for Asymmetric {
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}

impl ToleranceModel for Asymmetric {
    fn bounds(&self, _quantity: Quantity, nominal: f64, tolerance: f64) -> (f64, f64) {
        (
            nominal * (1.0 - tolerance * self.below),
            nominal * (1.0 + tolerance * self.above),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proportional_band() {
        let (lo, hi) = Proportional.bounds(Quantity::PressureAbsolute, 101_000.0, 0.0002);
        assert!((lo - 100_979.8).abs() < 1e-6);
        assert!((hi - 101_020.2).abs() < 1e-6);
    }

    #[test]
    fn zero_tolerance_is_a_point() {
        let (lo, hi) = Proportional.bounds(Quantity::AirTemperature, 300.0, 0.0);
        assert_eq!(lo, 300.0);
        assert_eq!(hi, 300.0);
    }

    #[test]
    fn full_scale_band_is_constant_width() {
        let policy = FullScale::default();

        let (lo, hi) = policy.bounds(Quantity::PressurePitot, 63_800.0, 0.0002);
        assert!((hi - lo - 52.0).abs() < 1e-9);

        let (lo, hi) = policy.bounds(Quantity::PressurePitot, 102_900.0, 0.0002);
        assert!((hi - lo - 52.0).abs() < 1e-9);

        let (lo, hi) = policy.bounds(Quantity::AirTemperature, 300.0, 0.004);
        assert!((lo - 299.4).abs() < 1e-9);
        assert!((hi - 300.6).abs() < 1e-9);
    }

    #[test]
    fn asymmetric_weights() {
        let self_heating = Asymmetric::new(0.5, 2.0);
        let (lo, hi) = self_heating.bounds(Quantity::AirTemperature, 300.0, 0.01);
        assert!((lo - 298.5).abs() < 1e-9);
        assert!((hi - 306.0).abs() < 1e-9);

        assert_eq!(
            Asymmetric::default().bounds(Quantity::AirTemperature, 300.0, 0.01),
            Proportional.bounds(Quantity::AirTemperature, 300.0, 0.01)
        );
    }
}
