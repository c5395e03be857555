//! Sample-Ensemble Uncertain Values
//!
//! ## Representation
//!
//! An [`UncertainValue`] is a fixed-size ensemble of `N` samples. Sample `i`
//! of every value in one computation belongs to the same joint draw of the
//! inputs, so arithmetic is applied index by index:
//!
//! ```text
//! a = [a0, a1, a2, ...]
//! b = [b0, b1, b2, ...]
//! a + b = [a0+b0, a1+b1, a2+b2, ...]
//! ```
//!
//! Because the index pairing is never broken, quantities that share an origin
//! stay correlated. Static pressure appears in both the numerator of the speed
//! equation and in air density; the ensemble carries that dependence without
//! any covariance bookkeeping.
//!
//! ## Memory Layout
//!
//! Samples are stored inline as `[f64; N]`. No heap allocation, and the type
//! is `Copy`:
//!
//! ```text
//! UncertainValue<256> = 256 × 8 bytes = 2 KB
//! ```
//!
//! Operators consume by value and return a new ensemble; nothing is mutated in
//! place.

use core::ops::{Add, Div, Mul, Neg, Sub};

use crate::constants::sensors::DEFAULT_SAMPLE_COUNT;

/// Quantity carrying a sampled distribution instead of a single scalar
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UncertainValue<const N: usize = DEFAULT_SAMPLE_COUNT> {
    samples: [f64; N],
}

impl<const N: usize> UncertainValue<N> {
    /// Wrap a joint-draw ensemble
    ///
    /// The caller is responsible for keeping sample `i` aligned with sample
    /// `i` of any value this one will be combined with.
    pub fn from_samples(samples: [f64; N]) -> Self {
        Self { samples }
    }

    /// Value with no spread
    pub fn exact(value: f64) -> Self {
        Self { samples: [value; N] }
    }

    /// Borrow the raw ensemble
    pub fn samples(&self) -> &[f64; N] {
        &self.samples
    }

    /// Apply `f` to every sample
    pub fn map<F: Fn(f64) -> f64>(&self, f: F) -> Self {
        Self { samples: self.samples.map(f) }
    }

    /// Combine with another ensemble sample by sample
    pub fn zip_with<F: Fn(f64, f64) -> f64>(&self, other: &Self, f: F) -> Self {
        let mut samples = self.samples;
        for (out, rhs) in samples.iter_mut().zip(other.samples.iter()) {
            *out = f(*out, *rhs);
        }
        Self { samples }
    }

    /// Square root of every sample
    ///
    /// Negative samples yield `NaN`; callers keep the radicand positive.
    pub fn sqrt(&self) -> Self {
        self.map(libm::sqrt)
    }

    /// Square of every sample
    pub fn squared(&self) -> Self {
        self.map(|s| s * s)
    }

    /// Multiply every sample by a scalar
    pub fn scale(&self, factor: f64) -> Self {
        self.map(|s| s * factor)
    }

    /// Ensemble mean
    pub fn mean(&self) -> f64 {
        if N == 0 {
            return f64::NAN;
        }
        self.samples.iter().sum::<f64>() / N as f64
    }

    /// Population variance of the ensemble
    pub fn variance(&self) -> f64 {
        if N == 0 {
            return f64::NAN;
        }
        let mean = self.mean();
        self.samples
            .iter()
            .map(|s| (s - mean) * (s - mean))
            .sum::<f64>()
            / N as f64
    }

    /// Standard deviation of the ensemble
    pub fn std_dev(&self) -> f64 {
        libm::sqrt(self.variance())
    }

    /// Smallest sample (lower edge of the support)
    pub fn lower(&self) -> f64 {
        self.samples.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Largest sample (upper edge of the support)
    pub fn upper(&self) -> f64 {
        self.samples.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Center of the support
    pub fn midpoint(&self) -> f64 {
        0.5 * (self.lower() + self.upper())
    }

    /// Width of the support
    pub fn spread(&self) -> f64 {
        self.upper() - self.lower()
    }

    /// True when every sample holds the same value
    pub fn is_point(&self) -> bool {
        match self.samples.first() {
            Some(first) => self.samples.iter().all(|s| s == first),
            None => true,
        }
    }

    /// True when no sample is NaN or infinite
    pub fn is_finite(&self) -> bool {
        self.samples.iter().all(|s| s.is_finite())
    }

    /// Fraction of samples strictly above `threshold`
    pub fn probability_above(&self, threshold: f64) -> f64 {
        if N == 0 {
            return 0.0;
        }
        self.samples.iter().filter(|s| **s > threshold).count() as f64 / N as f64
    }

    /// Fraction of samples strictly below `threshold`
    pub fn probability_below(&self, threshold: f64) -> f64 {
        if N == 0 {
            return 0.0;
        }
        self.samples.iter().filter(|s| **s < threshold).count() as f64 / N as f64
    }

    /// Central empirical interval holding `confidence` of the samples
    ///
    /// `confidence` is clamped to `[0, 1]`. A confidence of 1 returns the full
    /// support; 0 returns the median sample twice.
    pub fn interval(&self, confidence: f64) -> (f64, f64) {
        if N == 0 {
            return (f64::NAN, f64::NAN);
        }

        let mut sorted = self.samples;
        sorted.sort_unstable_by(|a, b| a.total_cmp(b));

        let tail = (1.0 - confidence.clamp(0.0, 1.0)) / 2.0;
        let lo = (libm::round(tail * (N - 1) as f64) as usize).min((N - 1) / 2);
        let hi = N - 1 - lo;

        (sorted[lo], sorted[hi])
    }
}

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $op:tt) => {
        impl<const N: usize> $trait for UncertainValue<N> {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self {
                self.zip_with(&rhs, |a, b| a $op b)
            }
        }

        impl<const N: usize> $trait<f64> for UncertainValue<N> {
            type Output = Self;

            fn $method(self, rhs: f64) -> Self {
                self.map(|a| a $op rhs)
            }
        }

        impl<const N: usize> $trait<UncertainValue<N>> for f64 {
            type Output = UncertainValue<N>;

            fn $method(self, rhs: UncertainValue<N>) -> UncertainValue<N> {
                rhs.map(|b| self $op b)
            }
        }
    };
}

impl_binary_op!(Add, add, +);
impl_binary_op!(Sub, sub, -);
impl_binary_op!(Mul, mul, *);
impl_binary_op!(Div, div, /);

impl<const N: usize> Neg for UncertainValue<N> {
    type Output = Self;

    fn neg(self) -> Self {
        self.map(|s| -s)
    }
}
