//! Flight Envelope Check
//!
//! Sweeps pitot pressure from near-stall to near-maximum speed at sea level
//! and reports the probability of being outside the Cessna 172 envelope.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 03_flight_envelope
//! ```

use aerolift_core::{AirfoilModel, FlightEnvelope, ModelResult};

fn main() -> ModelResult<()> {
    println!("AeroLift Flight Envelope Example");
    println!("================================\n");

    let mut model = AirfoilModel::new(16.17, 1.17, 0.004, 0.0002)?;
    let envelope = FlightEnvelope::cessna_172();

    println!(
        "{:>10} {:>10} {:>10} {:>12} {:>10}",
        "q (Pa)", "v (kt)", "P(stall)", "P(overspeed)", "L/W"
    );

    for dynamic_pa in [300.0, 400.0, 600.0, 1_200.0, 1_900.0, 2_400.0, 2_600.0] {
        model.update(288.15, 101_325.0, 101_325.0 + dynamic_pa)?;
        let report = model.report()?;
        let assessment = envelope.assess(&report);

        println!(
            "{:>10.0} {:>10.1} {:>10.2} {:>12.2} {:>10.2}",
            dynamic_pa,
            report.air_speed_knots.mean(),
            assessment.stall_probability,
            assessment.overspeed_probability,
            assessment.lift_to_weight
        );
    }

    Ok(())
}
