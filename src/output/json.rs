//! JSON output formatting
//!
//! Machine-readable report of a completed run: run parameters, expected vs
//! empirical moments, the histogram buckets, and the presentation-scaling
//! auxiliaries (max observed value, bucket width when fixed-width bucketing
//! was used).

use crate::config::Config;
use crate::stats::StatisticsRunner;
use crate::Result;
use serde::{Deserialize, Serialize};

/// One histogram bucket
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonBucket {
    /// Representative value (exact sample or bucket midpoint)
    pub value: f64,
    /// Occurrence count
    pub count: u64,
}

/// Complete run report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonReport {
    pub distribution: String,
    pub sample_count: u64,
    pub expected_mean: f64,
    pub expected_variance: f64,
    pub empirical_mean: f64,
    pub empirical_variance: f64,
    pub max_observed_value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bucket_width: Option<f64>,
    pub histogram: Vec<JsonBucket>,
}

impl JsonReport {
    /// Build a report from a completed runner
    pub fn from_runner(runner: &StatisticsRunner, config: &Config) -> Self {
        Self {
            distribution: config.run.distribution.to_string(),
            sample_count: runner.sample_count(),
            expected_mean: runner.expected_mean(),
            expected_variance: runner.expected_variance(),
            empirical_mean: runner.mean(),
            empirical_variance: runner.variance(),
            max_observed_value: runner.max_observed_value(),
            bucket_width: runner.histogram().bucket_width(),
            histogram: runner
                .histogram()
                .buckets()
                .into_iter()
                .map(|(value, count)| JsonBucket { value, count })
                .collect(),
        }
    }
}

/// Print run results as pretty-printed JSON to stdout
pub fn print_results(runner: &StatisticsRunner, config: &Config) -> Result<()> {
    let report = JsonReport::from_runner(runner, config);
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DistributionType, OutputConfig, RunConfig};
    use crate::distribution::triangular::TriangularDistribution;
    use crate::stats::BucketingPolicy;

    fn completed_run() -> (StatisticsRunner, Config) {
        let config = Config {
            run: RunConfig {
                sample_count: 1000,
                distribution: DistributionType::Triangular { mode: 5.0 },
                bucketing: BucketingPolicy::FixedWidth { bucket_count: 10 },
                seed: Some(42),
            },
            output: OutputConfig::default(),
        };

        let dist = TriangularDistribution::with_seed(5.0, 42).unwrap();
        let mut runner =
            StatisticsRunner::new(1000, Box::new(dist), config.run.bucketing).unwrap();
        runner.run();

        (runner, config)
    }

    #[test]
    fn test_report_fields() {
        let (runner, config) = completed_run();
        let report = JsonReport::from_runner(&runner, &config);

        assert_eq!(report.distribution, "triangular(mode=5)");
        assert_eq!(report.sample_count, 1000);
        assert_eq!(report.expected_mean, 5.0);
        assert_eq!(report.bucket_width, Some(1.0));

        let total: u64 = report.histogram.iter().map(|b| b.count).sum();
        assert_eq!(total, 1000);
    }

    #[test]
    fn test_report_round_trips_through_json() {
        let (runner, config) = completed_run();
        let report = JsonReport::from_runner(&runner, &config);

        let json = serde_json::to_string(&report).unwrap();
        let parsed: JsonReport = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.sample_count, report.sample_count);
        assert_eq!(parsed.empirical_mean, report.empirical_mean);
        assert_eq!(parsed.histogram.len(), report.histogram.len());
    }

    #[test]
    fn test_report_exact_has_no_bucket_width() {
        let dist = TriangularDistribution::with_seed(5.0, 1).unwrap();
        let mut runner =
            StatisticsRunner::new(100, Box::new(dist), BucketingPolicy::Exact).unwrap();
        runner.run();

        let config = Config {
            run: RunConfig {
                sample_count: 100,
                distribution: DistributionType::Triangular { mode: 5.0 },
                bucketing: BucketingPolicy::Exact,
                seed: Some(1),
            },
            output: OutputConfig::default(),
        };

        let report = JsonReport::from_runner(&runner, &config);
        assert_eq!(report.bucket_width, None);
        // Continuous samples rarely collide, so the sparse histogram is wide
        assert_eq!(report.histogram.len(), 100);
    }
}
