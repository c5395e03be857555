//! Seeded Sampling Distributions
//!
//! Both samplers own a `SmallRng` seeded at construction, so a model built
//! with the same seed reproduces the same ensembles run after run. Each call
//! to `uniform` advances the generator, which keeps successive inputs
//! independent of each other.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::{check_bounds, Distribution, UncertainValue};
use crate::constants::sensors::DEFAULT_SAMPLER_SEED;
use crate::errors::UncertainResult;

/// Evenly spaced strata over the band, in shuffled order
///
/// For `N` samples on `[lower, upper]` the strata are
///
/// ```text
/// lower + k × (upper − lower) / (N − 1),   k = 0 .. N−1
/// ```
///
/// so both bounds are hit exactly and the mean equals the midpoint. The order
/// is shuffled per call; two inputs drawn one after the other are paired
/// through independent permutations, which is what makes them independent.
#[derive(Debug, Clone)]
pub struct StratifiedSampler {
    rng: SmallRng,
}

impl StratifiedSampler {
    /// Create a sampler with an explicit seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for StratifiedSampler {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLER_SEED)
    }
}

impl Distribution for StratifiedSampler {
    fn uniform<const N: usize>(
        &mut self,
        lower: f64,
        upper: f64,
    ) -> UncertainResult<UncertainValue<N>> {
        check_bounds(lower, upper)?;

        let mut samples = [lower; N];
        match N {
            0 => {}
            1 => samples[0] = 0.5 * (lower + upper),
            _ => {
                let step = (upper - lower) / (N - 1) as f64;
                for (k, sample) in samples.iter_mut().enumerate() {
                    *sample = (lower + step * k as f64).min(upper);
                }
                samples[N - 1] = upper;
                samples.shuffle(&mut self.rng);
            }
        }

        Ok(UncertainValue::from_samples(samples))
    }
}

/// Independent pseudo-random uniform draws
#[derive(Debug, Clone)]
pub struct MonteCarloSampler {
    rng: SmallRng,
}

impl MonteCarloSampler {
    /// Create a sampler with an explicit seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for MonteCarloSampler {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLER_SEED)
    }
}

impl Distribution for MonteCarloSampler {
    fn uniform<const N: usize>(
        &mut self,
        lower: f64,
        upper: f64,
    ) -> UncertainResult<UncertainValue<N>> {
        check_bounds(lower, upper)?;

        let mut samples = [lower; N];
        for sample in samples.iter_mut() {
            *sample = self.rng.gen_range(lower..=upper);
        }

        Ok(UncertainValue::from_samples(samples))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::UncertaintyError;

    #[test]
    fn stratified_hits_both_bounds() {
        let mut sampler = StratifiedSampler::new(7);
        let v: UncertainValue<64> = sampler.uniform(100_980.0, 101_020.0).unwrap();

        assert_eq!(v.lower(), 100_980.0);
        assert_eq!(v.upper(), 101_020.0);
        assert!((v.mean() - 101_000.0).abs() < 1e-6);
    }

    #[test]
    fn stratified_is_reproducible() {
        let a: UncertainValue<32> = StratifiedSampler::new(1).uniform(0.0, 1.0).unwrap();
        let b: UncertainValue<32> = StratifiedSampler::new(1).uniform(0.0, 1.0).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn successive_draws_are_permuted_differently() {
        let mut sampler = StratifiedSampler::default();
        let a: UncertainValue<64> = sampler.uniform(0.0, 1.0).unwrap();
        let b: UncertainValue<64> = sampler.uniform(0.0, 1.0).unwrap();

        // Same strata, different pairing
        assert_eq!(a.lower(), b.lower());
        assert_eq!(a.upper(), b.upper());
        assert_ne!(a, b);
    }

    #[test]
    fn zero_width_band_collapses() {
        let v: UncertainValue<16> = StratifiedSampler::default().uniform(300.0, 300.0).unwrap();
        assert!(v.is_point());
        assert_eq!(v.mean(), 300.0);
    }

    #[test]
    fn monte_carlo_stays_in_band() {
        let mut sampler = MonteCarloSampler::new(42);
        let v: UncertainValue<512> = sampler.uniform(298.8, 301.2).unwrap();

        assert!(v.lower() >= 298.8);
        assert!(v.upper() <= 301.2);
        assert!((v.mean() - 300.0).abs() < 0.15);
    }

    #[test]
    fn inverted_bounds_rejected() {
        let result: UncertainResult<UncertainValue<8>> =
            MonteCarloSampler::default().uniform(2.0, 1.0);
        assert_eq!(result, Err(UncertaintyError::InvalidBounds { lower: 2.0, upper: 1.0 }));

        let result: UncertainResult<UncertainValue<8>> =
            StratifiedSampler::default().uniform(2.0, 1.0);
        assert!(result.is_err());
    }

    #[test]
    fn overflowing_width_rejected() {
        let result: UncertainResult<UncertainValue<8>> =
            StratifiedSampler::new(1).uniform(-1e308, 1e308);
        assert_eq!(result, Err(UncertaintyError::NonFiniteBound));

        let result: UncertainResult<UncertainValue<8>> =
            MonteCarloSampler::new(1).uniform(-1e308, 1e308);
        assert_eq!(result, Err(UncertaintyError::NonFiniteBound));
    }

    #[test]
    fn wide_finite_band_keeps_exact_support() {
        let v: UncertainValue<8> = StratifiedSampler::new(1).uniform(-1e307, 1e307).unwrap();
        assert_eq!(v.lower(), -1e307);
        assert_eq!(v.upper(), 1e307);
    }
}
