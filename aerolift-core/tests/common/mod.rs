//! Shared fixtures for integration tests
//!
//! Provides:
//! - Flight scenarios taken from the Cessna 172 operating data
//! - Scalar reference implementations of the equation chain
//! - Tolerance-aware assertion helpers

#![allow(dead_code)]

pub mod scenarios;

use aerolift_core::{AirfoilConfig, AirfoilModel};

/// Cessna 172 model with the default sampler
pub fn cessna_model() -> AirfoilModel {
    AirfoilModel::from_config(AirfoilConfig::cessna_172())
}

/// Cessna 172 model with every tolerance set to zero
pub fn nominal_cessna_model() -> AirfoilModel {
    AirfoilModel::from_config(AirfoilConfig::cessna_172().without_tolerances())
}

/// Scalar results of the equation chain
#[derive(Debug, Clone, Copy)]
pub struct ScalarChain {
    pub air_density: f64,
    pub air_speed: f64,
    pub pressure_delta: f64,
    pub lift_force: f64,
}

/// Evaluate the lift equations on plain numbers
pub fn scalar_chain(config: &AirfoilConfig, t: f64, pa: f64, pp: f64) -> ScalarChain {
    let air_density = pa / (287.05 * t);
    let air_speed = (2.0 * (pp - pa) / air_density).sqrt();
    let pressure_delta = 0.5 * air_density * air_speed * air_speed * config.geometry_factor();
    ScalarChain {
        air_density,
        air_speed,
        pressure_delta,
        lift_force: pressure_delta * config.base_area_m2(),
    }
}

/// Assert two values agree to a relative tolerance
pub fn assert_close(actual: f64, expected: f64, rel_tol: f64) {
    let scale = expected.abs().max(1e-12);
    assert!(
        (actual - expected).abs() / scale <= rel_tol,
        "expected {} within {} (relative) of {}",
        actual,
        rel_tol,
        expected
    );
}
