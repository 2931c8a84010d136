//! Random distribution generators
//!
//! This module provides the generator abstraction that turns a uniform random
//! source into samples from a target distribution, plus the concrete
//! distributions implementing it.
//!
//! # Distributions
//!
//! - **Triangular**: triangular distribution with lower bound 0, caller-supplied
//!   mode, and upper bound twice the mode
//!
//! # Inverse-Transform Design
//!
//! Generators consume one uniform draw in `[0, 1)` per sample and map it through
//! the inverse CDF of the target distribution. This keeps the uniform source
//! pluggable (any conforming RNG works) and makes the mapping itself a pure
//! function that can be tested against hand-picked draws.
//!
//! # Example
//!
//! ```
//! use trigen::distribution::{DistributionGenerator, triangular::TriangularDistribution};
//!
//! let mut dist = TriangularDistribution::new(5.0).unwrap();
//! let sample = dist.next_sample();
//! assert!(sample >= 0.0 && sample <= 10.0);
//! assert_eq!(dist.expected_mean(), 5.0);
//! ```

use crate::config::DistributionType;
use crate::Result;

/// Generator of samples from a target distribution
///
/// Each implementation owns its uniform source and fixed distribution
/// parameters; the parameters are immutable once constructed, so the
/// theoretical moments are pure functions of the construction arguments.
///
/// # Thread Safety
///
/// Generators must be `Send` so a runner can be moved between threads. No
/// state is shared between instances.
pub trait DistributionGenerator: Send {
    /// Draw the next sample
    ///
    /// Consumes exactly one uniform draw from the underlying source and
    /// returns a sample of the target distribution. Safe to call repeatedly;
    /// successive samples are independent.
    fn next_sample(&mut self) -> f64;

    /// Theoretical mean of the distribution
    fn expected_mean(&self) -> f64;

    /// Theoretical variance of the distribution
    fn expected_variance(&self) -> f64;

    /// Maximum attainable sample value
    ///
    /// Used by fixed-width bucketing to size the histogram range `[0, max_value)`.
    fn max_value(&self) -> f64;
}

/// Create a generator from its configuration
///
/// # Errors
///
/// Returns an error if the distribution parameters violate the generator's
/// contract (e.g. non-positive triangular mode).
pub fn create_generator(
    distribution: &DistributionType,
    seed: Option<u64>,
) -> Result<Box<dyn DistributionGenerator>> {
    let generator: Box<dyn DistributionGenerator> = match distribution {
        DistributionType::Triangular { mode } => match seed {
            Some(seed) => Box::new(triangular::TriangularDistribution::with_seed(*mode, seed)?),
            None => Box::new(triangular::TriangularDistribution::new(*mode)?),
        },
    };

    Ok(generator)
}

pub mod triangular;
