//! Sample frequency histogram
//!
//! A histogram of sampled values supporting two bucketing policies behind one
//! type:
//!
//! - **Exact-value**: a sparse ordered map keyed by the sampled value itself.
//!   No information loss; the histogram-weighted moments equal the raw-sample
//!   moments exactly. Suited to generators whose output is naturally discrete
//!   or few-valued.
//! - **Fixed-width**: the range `[0, max_value)` is split into a fixed number
//!   of equal-width buckets (default 10). Constant memory regardless of sample
//!   diversity; bucket midpoints stand in for the samples when deriving
//!   moments. Suited to bar-chart presentation of continuous output.
//!
//! Both policies maintain the same auxiliary trackers incrementally: total
//! sample count, maximum observed value, and the largest single-bucket count
//! (used by the text output to scale bars).

use crate::error::Error;
use std::collections::BTreeMap;

/// Default number of buckets for fixed-width bucketing
pub const DEFAULT_BUCKET_COUNT: usize = 10;

/// Bucket storage, one variant per bucketing policy
///
/// Exact-value keys are the `f64` bit patterns of the samples. For the
/// non-negative finite values generators produce, bit-pattern order equals
/// numeric order, so the map iterates buckets in ascending sample order.
#[derive(Debug, Clone)]
enum Buckets {
    Exact(BTreeMap<u64, u64>),
    Fixed { counts: Vec<u64>, width: f64 },
}

/// Frequency histogram over sampled values
///
/// Counts are non-negative and their sum always equals the number of samples
/// recorded so far.
#[derive(Debug, Clone)]
pub struct Histogram {
    /// Bucket counts, per policy
    buckets: Buckets,

    /// Total number of samples recorded
    num_samples: u64,

    /// Largest sample seen so far (0 when empty)
    max_observed: f64,

    /// Largest count held by any single bucket (0 when empty)
    max_bucket_count: u64,
}

impl Histogram {
    /// Create an empty exact-value histogram
    pub fn exact() -> Self {
        Self {
            buckets: Buckets::Exact(BTreeMap::new()),
            num_samples: 0,
            max_observed: 0.0,
            max_bucket_count: 0,
        }
    }

    /// Create an empty fixed-width histogram over `[0, max_value)`
    ///
    /// # Arguments
    ///
    /// * `bucket_count` - Number of equal-width buckets (must be > 0)
    /// * `max_value` - Upper end of the bucketed range (must be positive and finite)
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if either argument violates its
    /// contract.
    pub fn fixed_width(bucket_count: usize, max_value: f64) -> Result<Self, Error> {
        if bucket_count == 0 {
            return Err(Error::invalid_parameter(
                "bucket_count",
                "must be at least 1",
            ));
        }
        if !max_value.is_finite() || max_value <= 0.0 {
            return Err(Error::invalid_parameter(
                "max_value",
                format!("must be a positive finite number, got {}", max_value),
            ));
        }

        Ok(Self {
            buckets: Buckets::Fixed {
                counts: vec![0; bucket_count],
                width: max_value / bucket_count as f64,
            },
            num_samples: 0,
            max_observed: 0.0,
            max_bucket_count: 0,
        })
    }

    /// Record one sample
    ///
    /// This is the hot path of the sampling loop: one map/array increment plus
    /// the max trackers.
    #[inline]
    pub fn record(&mut self, value: f64) {
        self.num_samples += 1;

        if value > self.max_observed {
            self.max_observed = value;
        }

        let count = match &mut self.buckets {
            Buckets::Exact(map) => {
                let count = map.entry(value.to_bits()).or_insert(0);
                *count += 1;
                *count
            }
            Buckets::Fixed { counts, width } => {
                // A sample exactly at max_value would index one past the end;
                // clamp to the last bucket, which also absorbs any float
                // rounding at the upper boundary.
                let idx = ((value / *width) as usize).min(counts.len() - 1);
                counts[idx] += 1;
                counts[idx]
            }
        };

        if count > self.max_bucket_count {
            self.max_bucket_count = count;
        }
    }

    /// Number of samples recorded
    pub fn len(&self) -> u64 {
        self.num_samples
    }

    /// Check if the histogram is empty
    pub fn is_empty(&self) -> bool {
        self.num_samples == 0
    }

    /// Largest sample recorded, or 0 when empty
    pub fn max_observed(&self) -> f64 {
        self.max_observed
    }

    /// Largest count held by any single bucket, or 0 when empty
    pub fn max_bucket_count(&self) -> u64 {
        self.max_bucket_count
    }

    /// Bucket width, if this histogram uses fixed-width bucketing
    pub fn bucket_width(&self) -> Option<f64> {
        match &self.buckets {
            Buckets::Exact(_) => None,
            Buckets::Fixed { width, .. } => Some(*width),
        }
    }

    /// Occupied buckets in ascending value order
    ///
    /// Yields `(representative_value, count)` pairs. For exact-value
    /// histograms the representative is the sample itself; for fixed-width
    /// histograms it is the bucket midpoint, and empty buckets are skipped.
    pub fn buckets(&self) -> Vec<(f64, u64)> {
        match &self.buckets {
            Buckets::Exact(map) => map
                .iter()
                .map(|(&bits, &count)| (f64::from_bits(bits), count))
                .collect(),
            Buckets::Fixed { counts, width } => counts
                .iter()
                .enumerate()
                .filter(|(_, &count)| count > 0)
                .map(|(i, &count)| ((i as f64 + 0.5) * width, count))
                .collect(),
        }
    }

    /// All fixed-width bucket counts in index order, if applicable
    ///
    /// Unlike [`buckets`](Self::buckets) this includes empty buckets, for
    /// callers that render the full bucket sequence.
    pub fn fixed_counts(&self) -> Option<&[u64]> {
        match &self.buckets {
            Buckets::Exact(_) => None,
            Buckets::Fixed { counts, .. } => Some(counts),
        }
    }

    /// Histogram-weighted empirical mean
    ///
    /// `Σ representative · count / n`. Returns 0 when empty; this is the
    /// documented neutral value for queries before any sample is recorded.
    pub fn mean(&self) -> f64 {
        if self.num_samples == 0 {
            return 0.0;
        }

        let n = self.num_samples as f64;
        self.buckets()
            .iter()
            .map(|&(value, count)| value * count as f64 / n)
            .sum()
    }

    /// Histogram-weighted empirical population variance
    ///
    /// `Σ (representative − mean)² · count / n`, dividing by n rather than
    /// n − 1: the histogram is treated as the full empirical distribution.
    /// Returns 0 when empty.
    pub fn variance(&self) -> f64 {
        if self.num_samples == 0 {
            return 0.0;
        }

        let n = self.num_samples as f64;
        let mean = self.mean();
        self.buckets()
            .iter()
            .map(|&(value, count)| (value - mean).powi(2) * count as f64 / n)
            .sum()
    }

    /// Merge another histogram into this one
    ///
    /// Both histograms must use the same bucketing policy (and, for
    /// fixed-width, the same bucket layout). Moments must only be derived
    /// after all partial histograms are merged, never combined from partial
    /// means/variances.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MergeMismatch`] if the policies or bucket layouts
    /// differ.
    pub fn merge(&mut self, other: &Histogram) -> Result<(), Error> {
        match (&mut self.buckets, &other.buckets) {
            (Buckets::Exact(map), Buckets::Exact(other_map)) => {
                for (&bits, &count) in other_map {
                    *map.entry(bits).or_insert(0) += count;
                }
            }
            (
                Buckets::Fixed { counts, width },
                Buckets::Fixed {
                    counts: other_counts,
                    width: other_width,
                },
            ) => {
                if counts.len() != other_counts.len() || *width != *other_width {
                    return Err(Error::MergeMismatch {
                        reason: format!(
                            "bucket layouts differ ({} x {} vs {} x {})",
                            counts.len(),
                            width,
                            other_counts.len(),
                            other_width
                        ),
                    });
                }
                for (count, other_count) in counts.iter_mut().zip(other_counts) {
                    *count += other_count;
                }
            }
            _ => {
                return Err(Error::MergeMismatch {
                    reason: "bucketing policies differ".to_string(),
                })
            }
        }

        self.num_samples += other.num_samples;
        if other.max_observed > self.max_observed {
            self.max_observed = other.max_observed;
        }
        // Counts changed wholesale, recompute rather than track
        self.max_bucket_count = match &self.buckets {
            Buckets::Exact(map) => map.values().copied().max().unwrap_or(0),
            Buckets::Fixed { counts, .. } => counts.iter().copied().max().unwrap_or(0),
        };

        Ok(())
    }

    /// Reset to the empty state, keeping the bucketing policy
    pub fn reset(&mut self) {
        match &mut self.buckets {
            Buckets::Exact(map) => map.clear(),
            Buckets::Fixed { counts, .. } => counts.fill(0),
        }
        self.num_samples = 0;
        self.max_observed = 0.0;
        self.max_bucket_count = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_histogram_exact_basic() {
        let mut hist = Histogram::exact();

        assert_eq!(hist.len(), 0);
        assert!(hist.is_empty());

        hist.record(2.5);
        assert_eq!(hist.len(), 1);
        assert!(!hist.is_empty());
        assert_eq!(hist.buckets(), vec![(2.5, 1)]);
    }

    #[test]
    fn test_histogram_exact_conservation() {
        let mut hist = Histogram::exact();

        for i in 0..1000 {
            hist.record((i % 7) as f64);
        }

        let total: u64 = hist.buckets().iter().map(|&(_, c)| c).sum();
        assert_eq!(total, 1000);
        assert_eq!(hist.len(), 1000);
    }

    #[test]
    fn test_histogram_exact_ascending_order() {
        let mut hist = Histogram::exact();

        hist.record(3.0);
        hist.record(1.0);
        hist.record(2.0);
        hist.record(1.0);

        let buckets = hist.buckets();
        assert_eq!(buckets, vec![(1.0, 2), (2.0, 1), (3.0, 1)]);
    }

    #[test]
    fn test_histogram_exact_moments_match_raw() {
        let mut hist = Histogram::exact();
        let samples = [1.0, 2.0, 2.0, 3.0, 4.0];

        for &s in &samples {
            hist.record(s);
        }

        let n = samples.len() as f64;
        let raw_mean = samples.iter().sum::<f64>() / n;
        let raw_var = samples.iter().map(|s| (s - raw_mean).powi(2)).sum::<f64>() / n;

        assert!((hist.mean() - raw_mean).abs() < 1e-12);
        assert!((hist.variance() - raw_var).abs() < 1e-12);
    }

    #[test]
    fn test_histogram_fixed_width() {
        let hist = Histogram::fixed_width(10, 20.0).unwrap();
        assert_eq!(hist.bucket_width(), Some(2.0));
        assert_eq!(hist.fixed_counts().unwrap().len(), 10);
    }

    #[test]
    fn test_histogram_fixed_bucket_assignment() {
        let mut hist = Histogram::fixed_width(10, 20.0).unwrap();

        hist.record(0.0); // bucket 0
        hist.record(1.9); // bucket 0
        hist.record(2.0); // bucket 1
        hist.record(19.9); // bucket 9

        let counts = hist.fixed_counts().unwrap();
        assert_eq!(counts[0], 2);
        assert_eq!(counts[1], 1);
        assert_eq!(counts[9], 1);
    }

    #[test]
    fn test_histogram_fixed_clamps_upper_boundary() {
        let mut hist = Histogram::fixed_width(10, 20.0).unwrap();

        // Exactly max_value would index bucket 10; it must land in bucket 9
        hist.record(20.0);
        assert_eq!(hist.fixed_counts().unwrap()[9], 1);
    }

    #[test]
    fn test_histogram_fixed_midpoint_representatives() {
        let mut hist = Histogram::fixed_width(4, 8.0).unwrap();

        hist.record(0.5); // bucket 0, midpoint 1.0
        hist.record(7.5); // bucket 3, midpoint 7.0

        assert_eq!(hist.buckets(), vec![(1.0, 1), (7.0, 1)]);
    }

    #[test]
    fn test_histogram_max_trackers() {
        let mut hist = Histogram::fixed_width(10, 10.0).unwrap();

        hist.record(3.0);
        hist.record(3.1);
        hist.record(9.5);

        assert_eq!(hist.max_observed(), 9.5);
        assert_eq!(hist.max_bucket_count(), 2);
    }

    #[test]
    fn test_histogram_empty_neutral_values() {
        let hist = Histogram::exact();

        assert_eq!(hist.mean(), 0.0);
        assert_eq!(hist.variance(), 0.0);
        assert_eq!(hist.max_observed(), 0.0);
        assert_eq!(hist.max_bucket_count(), 0);
        assert!(hist.buckets().is_empty());
    }

    #[test]
    fn test_histogram_single_sample() {
        let mut hist = Histogram::exact();
        hist.record(4.25);

        assert_eq!(hist.buckets(), vec![(4.25, 1)]);
        assert_eq!(hist.mean(), 4.25);
        assert_eq!(hist.variance(), 0.0);
    }

    #[test]
    fn test_histogram_invalid_construction() {
        assert!(Histogram::fixed_width(0, 10.0).is_err());
        assert!(Histogram::fixed_width(10, 0.0).is_err());
        assert!(Histogram::fixed_width(10, -5.0).is_err());
        assert!(Histogram::fixed_width(10, f64::NAN).is_err());
    }

    #[test]
    fn test_histogram_merge_exact() {
        let mut h1 = Histogram::exact();
        let mut h2 = Histogram::exact();

        h1.record(1.0);
        h1.record(2.0);
        h2.record(2.0);
        h2.record(3.0);

        h1.merge(&h2).unwrap();

        assert_eq!(h1.len(), 4);
        assert_eq!(h1.buckets(), vec![(1.0, 1), (2.0, 2), (3.0, 1)]);
        assert_eq!(h1.max_observed(), 3.0);
        assert_eq!(h1.max_bucket_count(), 2);
    }

    #[test]
    fn test_histogram_merge_fixed() {
        let mut h1 = Histogram::fixed_width(10, 20.0).unwrap();
        let mut h2 = Histogram::fixed_width(10, 20.0).unwrap();

        h1.record(1.0);
        h2.record(1.5);
        h2.record(15.0);

        h1.merge(&h2).unwrap();

        assert_eq!(h1.len(), 3);
        assert_eq!(h1.fixed_counts().unwrap()[0], 2);
        assert_eq!(h1.fixed_counts().unwrap()[7], 1);
    }

    #[test]
    fn test_histogram_merge_mismatch() {
        let mut exact = Histogram::exact();
        let fixed = Histogram::fixed_width(10, 20.0).unwrap();
        assert!(exact.merge(&fixed).is_err());

        let mut narrow = Histogram::fixed_width(5, 20.0).unwrap();
        assert!(narrow.merge(&fixed).is_err());
    }

    #[test]
    fn test_histogram_reset() {
        let mut hist = Histogram::fixed_width(10, 20.0).unwrap();

        hist.record(5.0);
        hist.record(15.0);
        hist.reset();

        assert!(hist.is_empty());
        assert_eq!(hist.max_observed(), 0.0);
        assert_eq!(hist.max_bucket_count(), 0);
        assert!(hist.fixed_counts().unwrap().iter().all(|&c| c == 0));
        // Policy survives the reset
        assert_eq!(hist.bucket_width(), Some(2.0));
    }
}
