//! TOML configuration file parsing

use super::*;
use crate::config::cli::{Cli, FormatKind};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Parse TOML configuration file
pub fn parse_toml_file(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    parse_toml_string(&contents)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Parse TOML configuration from string
pub fn parse_toml_string(contents: &str) -> Result<Config> {
    let config: Config =
        ::toml::from_str(contents).context("Failed to parse TOML configuration")?;

    Ok(config)
}

/// Merge CLI arguments with TOML configuration (CLI takes precedence)
pub fn merge_cli_with_config(cli: &Cli, mut config: Config) -> Result<Config> {
    if let Some(count) = cli.sample_count {
        config.run.sample_count = count;
    }

    if let Some(mode) = cli.mode {
        config.run.distribution = DistributionType::Triangular { mode };
    }

    if cli.seed.is_some() {
        config.run.seed = cli.seed;
    }

    // Bucketing and output flags always carry defaults, so the merged value
    // reflects whatever the flags resolve to
    config.run.bucketing = cli.bucketing_policy();
    config.output.format = match cli.format {
        FormatKind::Text => OutputFormat::Text,
        FormatKind::Json => OutputFormat::Json,
    };
    config.output.bar_width = cli.bar_width;

    Ok(config)
}
