//! CLI argument parsing using clap

use crate::config::{Config, DistributionType, OutputConfig, OutputFormat, RunConfig};
use crate::stats::BucketingPolicy;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Histogram bucketing policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BucketingKind {
    /// Sparse histogram keyed by exact sample values
    Exact,
    /// Equal-width buckets over the distribution's range
    Fixed,
}

/// Report format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatKind {
    /// Human-readable console report
    Text,
    /// Machine-readable JSON
    Json,
}

/// trigen - Random sampling with empirical statistics
#[derive(Parser, Debug)]
#[command(name = "trigen")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Number of samples to draw
    ///
    /// When SAMPLES and MODE are both omitted, trigen picks random
    /// parameters itself and runs the experiment twice.
    #[arg(value_name = "SAMPLES")]
    pub sample_count: Option<u64>,

    /// Mode parameter b of the triangular distribution (bounds are 0 and 2b)
    #[arg(value_name = "MODE")]
    pub mode: Option<f64>,

    /// TOML configuration file (CLI flags take precedence)
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    // === Sampling Options ===
    /// Histogram bucketing policy
    #[arg(long, value_enum, default_value = "fixed")]
    pub bucketing: BucketingKind,

    /// Number of buckets for fixed-width bucketing
    #[arg(long, default_value = "10")]
    pub bucket_count: usize,

    /// Seed for the uniform source (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    // === Output Options ===
    /// Report format
    #[arg(long, value_enum, default_value = "text")]
    pub format: FormatKind,

    /// Width in characters of the longest histogram bar
    #[arg(long, default_value = "60")]
    pub bar_width: usize,

    /// Validate the configuration and exit without sampling
    #[arg(long)]
    pub dry_run: bool,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate argument combinations before building a configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        // SAMPLES and MODE come as a pair; a config file can supply both
        if self.config.is_none() && self.sample_count.is_some() != self.mode.is_some() {
            anyhow::bail!("SAMPLES and MODE must be given together");
        }

        if let Some(count) = self.sample_count {
            if count == 0 {
                anyhow::bail!("SAMPLES must be at least 1");
            }
        }

        if let Some(mode) = self.mode {
            if !mode.is_finite() || mode <= 0.0 {
                anyhow::bail!("MODE must be a positive finite number, got {}", mode);
            }
        }

        if self.bucket_count == 0 {
            anyhow::bail!("bucket_count must be at least 1");
        }

        if self.bar_width == 0 {
            anyhow::bail!("bar_width must be at least 1");
        }

        Ok(())
    }

    /// Bucketing policy selected by the flags
    pub fn bucketing_policy(&self) -> BucketingPolicy {
        match self.bucketing {
            BucketingKind::Exact => BucketingPolicy::Exact,
            BucketingKind::Fixed => BucketingPolicy::FixedWidth {
                bucket_count: self.bucket_count,
            },
        }
    }

    /// Build a complete configuration from CLI arguments alone
    ///
    /// Requires SAMPLES and MODE to be present; callers that support the
    /// no-arguments mode generate those first.
    pub fn to_config(&self) -> anyhow::Result<Config> {
        let (sample_count, mode) = match (self.sample_count, self.mode) {
            (Some(n), Some(m)) => (n, m),
            _ => anyhow::bail!("SAMPLES and MODE are required without a config file"),
        };

        Ok(Config {
            run: RunConfig {
                sample_count,
                distribution: DistributionType::Triangular { mode },
                bucketing: self.bucketing_policy(),
                seed: self.seed,
            },
            output: OutputConfig {
                format: match self.format {
                    FormatKind::Text => OutputFormat::Text,
                    FormatKind::Json => OutputFormat::Json,
                },
                bar_width: self.bar_width,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::histogram::DEFAULT_BUCKET_COUNT;

    fn base_cli() -> Cli {
        Cli {
            sample_count: Some(10_000),
            mode: Some(5.0),
            config: None,
            bucketing: BucketingKind::Fixed,
            bucket_count: DEFAULT_BUCKET_COUNT,
            seed: None,
            format: FormatKind::Text,
            bar_width: 60,
            dry_run: false,
        }
    }

    #[test]
    fn test_cli_validate_ok() {
        assert!(base_cli().validate().is_ok());
    }

    #[test]
    fn test_cli_validate_unpaired_positionals() {
        let mut cli = base_cli();
        cli.mode = None;
        assert!(cli.validate().is_err());
    }

    #[test]
    fn test_cli_validate_zero_samples() {
        let mut cli = base_cli();
        cli.sample_count = Some(0);
        assert!(cli.validate().is_err());
    }

    #[test]
    fn test_cli_validate_bad_mode() {
        let mut cli = base_cli();
        cli.mode = Some(-2.0);
        assert!(cli.validate().is_err());
    }

    #[test]
    fn test_cli_to_config() {
        let mut cli = base_cli();
        cli.bucketing = BucketingKind::Exact;
        cli.seed = Some(99);

        let config = cli.to_config().unwrap();
        assert_eq!(config.run.sample_count, 10_000);
        assert_eq!(config.run.bucketing, BucketingPolicy::Exact);
        assert_eq!(config.run.seed, Some(99));
        match config.run.distribution {
            DistributionType::Triangular { mode } => assert_eq!(mode, 5.0),
        }
    }

    #[test]
    fn test_cli_to_config_requires_positionals() {
        let mut cli = base_cli();
        cli.sample_count = None;
        cli.mode = None;
        assert!(cli.to_config().is_err());
    }
}
