//! Flight Envelope Assessment
//!
//! ## Overview
//!
//! A lift estimate is most useful against the airframe's published limits.
//! Because speed and lift are distributions, the assessment reports
//! probabilities rather than pass/fail flags: a reading a few knots above
//! stall with a wide uncertainty band is not the same as one with a tight band.
//!
//! ```text
//! P(stall)     = fraction of speed samples at or below stall speed
//! P(overspeed) = fraction of speed samples above maximum speed
//! lift ratio   = mean lift (kgf) / maximum weight (kg)
//! ```
//!
//! A lift ratio near 1 means the wing is carrying the aircraft's maximum
//! weight in level flight.
//!
//! ## Example
//!
//! ```rust
//! use aerolift_core::{AirfoilModel, FlightEnvelope};
//!
//! let mut model = AirfoilModel::new(16.17, 1.17, 0.004, 0.0002)?;
//! model.update(300.0, 101_000.0, 102_900.0)?;
//!
//! let assessment = FlightEnvelope::cessna_172().assess(&model.report()?);
//! assert_eq!(assessment.stall_probability, 0.0);
//! # Ok::<(), aerolift_core::ModelError>(())
//! ```

use crate::{
    constants::airframes::{
        CESSNA_172_MAX_LANDING_WEIGHT_KG, CESSNA_172_MAX_SPEED_KNOTS,
        CESSNA_172_STALL_FLAPS_DOWN_KNOTS, CESSNA_172_STALL_FLAPS_UP_KNOTS,
    },
    model::LiftReport,
};

/// Published speed and weight limits of an airframe
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FlightEnvelope {
    /// Stall speed for the current configuration (knots)
    pub stall_speed_knots: f64,
    /// Maximum speed (knots)
    pub max_speed_knots: f64,
    /// Maximum weight the lift is compared against (kg)
    pub max_weight_kg: f64,
}

/// Result of checking a report against an envelope
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EnvelopeAssessment {
    /// Probability the air speed is at or below stall speed
    pub stall_probability: f64,
    /// Probability the air speed exceeds maximum speed
    pub overspeed_probability: f64,
    /// Mean lift in kgf divided by maximum weight
    pub lift_to_weight: f64,
}

impl FlightEnvelope {
    /// Cessna 172, flaps up, at maximum landing weight
    pub fn cessna_172() -> Self {
        Self {
            stall_speed_knots: CESSNA_172_STALL_FLAPS_UP_KNOTS,
            max_speed_knots: CESSNA_172_MAX_SPEED_KNOTS,
            max_weight_kg: CESSNA_172_MAX_LANDING_WEIGHT_KG,
        }
    }

    /// Cessna 172 with flaps extended
    pub fn cessna_172_flaps_down() -> Self {
        Self {
            stall_speed_knots: CESSNA_172_STALL_FLAPS_DOWN_KNOTS,
            ..Self::cessna_172()
        }
    }

    /// Compare a report's speed and lift distributions with the limits
    pub fn assess<const N: usize>(&self, report: &LiftReport<N>) -> EnvelopeAssessment {
        EnvelopeAssessment {
            stall_probability: 1.0
                - report.air_speed_knots.probability_above(self.stall_speed_knots),
            overspeed_probability: report.air_speed_knots.probability_above(self.max_speed_knots),
            lift_to_weight: report.lift_force_kgf.mean() / self.max_weight_kg,
        }
    }
}

impl EnvelopeAssessment {
    /// True when at least `confidence` of the samples lie inside both speed limits
    pub fn within_limits(&self, confidence: f64) -> bool {
        1.0 - self.stall_probability - self.overspeed_probability >= confidence
    }
}
