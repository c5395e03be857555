//! Cessna 172 Lift Estimate
//!
//! Runs the two reference flight conditions for a Cessna 172 and prints the
//! propagated density, speed, pressure differential and lift.
//!
//! ## What You'll Learn
//!
//! - Building a model from airframe and sensor datasheet figures
//! - Feeding nominal readings through `update`
//! - Reading means and uncertainty bands from the report
//!
//! ## Airframe
//!
//! - Wing area: 174 sq ft (16.17 m²)
//! - Max landing weight: 2400 lb (1088.622 kg)
//! - Normal cruise: 111 kt, stall (flaps up): 48 kt
//! - Absolute ceiling: 13,000 ft (3962.4 m)
//! - Airfoil geometry constant ~1.17, estimated from wing profile pictures
//!
//! ## Sensors
//!
//! - RTD temperature sensor: 0.4 % uncertainty
//! - CPT6010 absolute pressure sensor: 0.02 % uncertainty
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_cessna_172
//! ```

use aerolift_core::{AirfoilModel, ModelResult};

fn main() -> ModelResult<()> {
    println!("AeroLift Cessna 172 Example");
    println!("===========================\n");

    let mut cessna_172 = AirfoilModel::new(16.17, 1.17, 0.004, 0.0002)?;

    println!("Cessna 172, cruise speed, altitude is close to sea level.");
    cessna_172.update(300.0, 101_000.0, 102_900.0)?;
    print_report(&cessna_172)?;
    println!();

    println!("Cessna 172, cruise speed, altitude is close to the absolute ceiling (4000 m).");
    cessna_172.update(270.0, 62_500.0, 63_800.0)?;
    print_report(&cessna_172)?;

    Ok(())
}

fn print_report(model: &AirfoilModel) -> ModelResult<()> {
    let report = model.report()?;
    println!("{}", report);

    let summary = report.summary();
    let (lift_lo, lift_hi) = report.lift_force_kgf.interval(0.95);
    println!("  air temperature : {} K", summary.air_temperature);
    println!("  air speed       : {} kt", summary.air_speed_knots);
    println!("  lift (95 %)     : {:.1} .. {:.1} kgf", lift_lo, lift_hi);
    Ok(())
}
