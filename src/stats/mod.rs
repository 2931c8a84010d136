//! Statistics collection
//!
//! Sampling loop, histogram accumulation, and derivation of empirical moments.
//!
//! The runner draws a fixed number of samples from a generator and accumulates
//! them into a [`Histogram`]; the empirical mean and variance are then derived
//! from the histogram's bucket counts. The histogram is the source of truth
//! for the moments: mathematically equivalent to direct averaging for the
//! exact-value policy, but the full sample sequence is never retained.
//!
//! # Example
//!
//! ```
//! use trigen::distribution::triangular::TriangularDistribution;
//! use trigen::stats::{BucketingPolicy, StatisticsRunner};
//!
//! let dist = TriangularDistribution::with_seed(5.0, 42).unwrap();
//! let mut runner =
//!     StatisticsRunner::new(10_000, Box::new(dist), BucketingPolicy::Exact).unwrap();
//! runner.run();
//!
//! assert_eq!(runner.expected_mean(), 5.0);
//! assert!((runner.mean() - 5.0).abs() < 0.5);
//! ```

pub mod histogram;

use crate::distribution::DistributionGenerator;
use crate::error::Error;
use histogram::{Histogram, DEFAULT_BUCKET_COUNT};
use serde::{Deserialize, Serialize};

/// How sampled values are assigned to histogram buckets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BucketingPolicy {
    /// Sparse histogram keyed by the exact sample values
    Exact,
    /// Dense histogram of equal-width buckets over `[0, generator.max_value())`
    FixedWidth {
        /// Number of buckets
        bucket_count: usize,
    },
}

impl Default for BucketingPolicy {
    fn default() -> Self {
        Self::FixedWidth {
            bucket_count: DEFAULT_BUCKET_COUNT,
        }
    }
}

/// Lifecycle of a [`StatisticsRunner`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// Created, no samples drawn; statistics accessors return neutral zeros
    Uninitialized,
    /// Inside `run()`
    Running,
    /// `run()` finished; statistics are valid
    Completed,
}

/// Drives sampling and produces a histogram plus derived moment statistics
///
/// Created with a fixed sample count and a generator. `run()` executes the
/// whole experiment; the instance is intended for one result set per
/// parameter set, and calling `run()` again restarts from a clean histogram
/// rather than accumulating.
pub struct StatisticsRunner {
    /// Count of samples to draw
    sample_count: u64,

    /// Generator to be used
    generator: Box<dyn DistributionGenerator>,

    /// Frequency histogram built during the run
    histogram: Histogram,

    /// Empirical mean, derived from the histogram after the run
    mean: f64,

    /// Empirical population variance, derived from the histogram after the run
    variance: f64,

    /// Lifecycle state
    state: RunState,
}

impl std::fmt::Debug for StatisticsRunner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatisticsRunner")
            .field("sample_count", &self.sample_count)
            .field("histogram", &self.histogram)
            .field("mean", &self.mean)
            .field("variance", &self.variance)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl StatisticsRunner {
    /// Create a new runner
    ///
    /// # Arguments
    ///
    /// * `sample_count` - Number of samples to draw (must be > 0)
    /// * `generator` - Distribution to sample from
    /// * `bucketing` - Histogram bucketing policy
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `sample_count` is 0 or the
    /// fixed-width bucket count is 0.
    pub fn new(
        sample_count: u64,
        generator: Box<dyn DistributionGenerator>,
        bucketing: BucketingPolicy,
    ) -> Result<Self, Error> {
        if sample_count == 0 {
            return Err(Error::invalid_parameter(
                "sample_count",
                "must be at least 1",
            ));
        }

        let histogram = match bucketing {
            BucketingPolicy::Exact => Histogram::exact(),
            BucketingPolicy::FixedWidth { bucket_count } => {
                Histogram::fixed_width(bucket_count, generator.max_value())?
            }
        };

        Ok(Self {
            sample_count,
            generator,
            histogram,
            mean: 0.0,
            variance: 0.0,
            state: RunState::Uninitialized,
        })
    }

    /// Draw all samples and derive the statistics
    ///
    /// Resets any previous results first, then draws exactly `sample_count`
    /// samples, accumulating the histogram and max trackers per sample. The
    /// moments are computed from the finished histogram, not as running sums.
    pub fn run(&mut self) {
        self.histogram.reset();
        self.mean = 0.0;
        self.variance = 0.0;
        self.state = RunState::Running;

        for _ in 0..self.sample_count {
            let sample = self.generator.next_sample();
            self.histogram.record(sample);
        }

        self.mean = self.histogram.mean();
        self.variance = self.histogram.variance();
        self.state = RunState::Completed;
    }

    /// Empirical mean, or 0 before `run()` completes
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Empirical population variance, or 0 before `run()` completes
    pub fn variance(&self) -> f64 {
        self.variance
    }

    /// Theoretical mean of the underlying distribution
    pub fn expected_mean(&self) -> f64 {
        self.generator.expected_mean()
    }

    /// Theoretical variance of the underlying distribution
    pub fn expected_variance(&self) -> f64 {
        self.generator.expected_variance()
    }

    /// The accumulated histogram (empty before `run()`)
    pub fn histogram(&self) -> &Histogram {
        &self.histogram
    }

    /// Number of samples this runner draws
    pub fn sample_count(&self) -> u64 {
        self.sample_count
    }

    /// Largest sample observed during the run, or 0 before it
    pub fn max_observed_value(&self) -> f64 {
        self.histogram.max_observed()
    }

    /// Largest single-bucket count, or 0 before the run
    ///
    /// Used by presentation code to scale bar charts.
    pub fn max_bucket_count(&self) -> u64 {
        self.histogram.max_bucket_count()
    }

    /// Current lifecycle state
    pub fn state(&self) -> RunState {
        self.state
    }

    /// Whether `run()` has completed
    pub fn is_complete(&self) -> bool {
        self.state == RunState::Completed
    }
}
