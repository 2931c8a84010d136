//! Triangular distribution implementation
//!
//! This module provides a triangular distribution over `[a, c]` with mode `b`,
//! restricted to the symmetric family used by trigen: `a = 0`, `b = mode`,
//! `c = 2 * mode`.
//!
//! # Characteristics
//!
//! - Piecewise-quadratic CDF, linear density rising to the mode and falling after
//! - Mean `(a + b + c) / 3`, variance `(a² + b² + c² − ab − ac − bc) / 18`
//! - All samples fall in `[0, 2b]`
//!
//! # Sampling
//!
//! Uses inverse-transform sampling: a uniform draw `r ∈ [0, 1)` is compared
//! against the CDF value at the mode, `F_c = (b − a) / (c − a)`, and mapped
//! through the inverse of the matching CDF branch. O(1) per sample, one uniform
//! draw per call.
//!
//! # Example
//!
//! ```
//! use trigen::distribution::{DistributionGenerator, triangular::TriangularDistribution};
//!
//! let mut dist = TriangularDistribution::new(10.0).unwrap();
//! let sample = dist.next_sample();
//! assert!(sample >= 0.0 && sample <= 20.0);
//! ```

use super::DistributionGenerator;
use crate::error::Error;
use rand::Rng;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

/// Triangular distribution with `a = 0`, mode `b`, `c = 2b`
///
/// Parameters are fixed at construction; the instance only mutates its uniform
/// source when drawing samples.
#[derive(Debug)]
pub struct TriangularDistribution {
    /// Lower bound (always 0 in this family)
    a: f64,

    /// Mode
    b: f64,

    /// Upper bound (always 2b in this family)
    c: f64,

    /// Uniform source
    rng: Xoshiro256PlusPlus,
}

impl TriangularDistribution {
    /// Create a new triangular distribution with random seed
    ///
    /// # Arguments
    ///
    /// * `mode` - The mode `b` of the distribution (must be > 0 and finite)
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `mode <= 0` or `mode` is not
    /// finite. A non-positive mode would degenerate to `a == b == c == 0`,
    /// which is rejected rather than silently producing a constant stream.
    pub fn new(mode: f64) -> Result<Self, Error> {
        Self::build(mode, Xoshiro256PlusPlus::from_entropy())
    }

    /// Create a new triangular distribution with specific seed
    ///
    /// Useful for reproducible tests.
    pub fn with_seed(mode: f64, seed: u64) -> Result<Self, Error> {
        Self::build(mode, Xoshiro256PlusPlus::seed_from_u64(seed))
    }

    fn build(mode: f64, rng: Xoshiro256PlusPlus) -> Result<Self, Error> {
        if !mode.is_finite() || mode <= 0.0 {
            return Err(Error::invalid_parameter(
                "mode",
                format!("must be a positive finite number, got {}", mode),
            ));
        }

        Ok(Self {
            a: 0.0,
            b: mode,
            c: 2.0 * mode,
            rng,
        })
    }

    /// Map a uniform draw `r ∈ [0, 1)` to a triangular sample
    ///
    /// This is the inverse CDF. Exposed separately from [`next_sample`] so the
    /// mapping can be tested against arbitrary draws without an RNG.
    ///
    /// [`next_sample`]: DistributionGenerator::next_sample
    pub fn sample_from_uniform(&self, r: f64) -> f64 {
        // CDF value at the mode; the boundary itself has probability zero so
        // the strictness of the comparison is immaterial.
        let f_c = (self.b - self.a) / (self.c - self.a);

        if r < f_c {
            self.a + (r * (self.c - self.a) * (self.b - self.a)).sqrt()
        } else {
            self.c - ((1.0 - r) * (self.c - self.a) * (self.c - self.b)).sqrt()
        }
    }
}

impl DistributionGenerator for TriangularDistribution {
    #[inline]
    fn next_sample(&mut self) -> f64 {
        let r: f64 = self.rng.gen();
        self.sample_from_uniform(r)
    }

    fn expected_mean(&self) -> f64 {
        (self.a + self.b + self.c) / 3.0
    }

    fn expected_variance(&self) -> f64 {
        (self.a * self.a + self.b * self.b + self.c * self.c
            - self.a * self.b
            - self.a * self.c
            - self.b * self.c)
            / 18.0
    }

    fn max_value(&self) -> f64 {
        self.c
    }
}
