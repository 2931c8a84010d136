//! Configuration validation

use super::*;
use crate::stats::BucketingPolicy;
use anyhow::Result;

/// Upper bound on fixed-width bucket counts; anything larger cannot be
/// rendered meaningfully and almost certainly indicates a typo
const MAX_BUCKET_COUNT: usize = 10_000;

/// Validate complete configuration
pub fn validate_config(config: &Config) -> Result<()> {
    validate_run(&config.run)?;
    validate_output(&config.output)?;

    Ok(())
}

/// Validate sampling run configuration
pub fn validate_run(run: &RunConfig) -> Result<()> {
    if run.sample_count == 0 {
        anyhow::bail!("sample_count must be at least 1");
    }

    match run.distribution {
        DistributionType::Triangular { mode } => {
            if !mode.is_finite() || mode <= 0.0 {
                anyhow::bail!(
                    "triangular mode must be a positive finite number, got {}",
                    mode
                );
            }
        }
    }

    if let BucketingPolicy::FixedWidth { bucket_count } = run.bucketing {
        if bucket_count == 0 {
            anyhow::bail!("bucket_count must be at least 1");
        }
        if bucket_count > MAX_BUCKET_COUNT {
            anyhow::bail!(
                "bucket_count must be at most {}, got {}",
                MAX_BUCKET_COUNT,
                bucket_count
            );
        }
    }

    Ok(())
}

/// Validate output configuration
pub fn validate_output(output: &OutputConfig) -> Result<()> {
    if output.bar_width == 0 {
        anyhow::bail!("bar_width must be at least 1");
    }

    Ok(())
}
