//! Tolerance Policies
//!
//! Evaluates the same ceiling-altitude readings under three sensor-noise
//! models and compares how wide the resulting lift band is.
//!
//! ## What You'll Learn
//!
//! - Swapping the tolerance policy without touching the equations
//! - Why "% of full scale" sensors lose relative accuracy at altitude
//! - Using the deterministic midpoint stub for a nominal reference
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 02_tolerance_models
//! ```

use aerolift_core::{
    tolerance::{Asymmetric, FullScale, Proportional},
    uncertain::MidpointDistribution,
    AirfoilConfig, AirfoilModel, ModelResult, ToleranceModel,
};

const TEMPERATURE_K: f64 = 270.0;
const STATIC_PA: f64 = 62_500.0;
const PITOT_PA: f64 = 63_800.0;

fn main() -> ModelResult<()> {
    println!("AeroLift Tolerance Policy Example");
    println!("=================================\n");

    let config = AirfoilConfig::cessna_172();

    let mut nominal = AirfoilModel::from_config(config).with_distribution(MidpointDistribution);
    let reference = nominal.update(TEMPERATURE_K, STATIC_PA, PITOT_PA)?.lift_force.mean();
    println!("Nominal lift: {:.1} N\n", reference);

    run("% of reading", config, Proportional)?;
    run("% of full scale", config, FullScale::default())?;
    run("RTD self-heating", config, Asymmetric::new(0.5, 2.0))?;

    Ok(())
}

fn run<P: ToleranceModel>(label: &str, config: AirfoilConfig, policy: P) -> ModelResult<()> {
    let mut model = AirfoilModel::from_config(config).with_tolerance_model(policy);
    let lift = model.update(TEMPERATURE_K, STATIC_PA, PITOT_PA)?.lift_force;

    println!(
        "{:<18} mean {:>8.1} N   band [{:.1}, {:.1}] N   σ {:.2} N",
        label,
        lift.mean(),
        lift.lower(),
        lift.upper(),
        lift.std_dev()
    );
    Ok(())
}
