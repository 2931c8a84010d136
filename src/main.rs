//! trigen CLI entry point

use anyhow::{Context, Result};
use rand::Rng;
use trigen::config::cli::Cli;
use trigen::config::{
    toml as config_toml, validator, Config, DistributionType, OutputConfig, OutputFormat,
    RunConfig,
};
use trigen::distribution::create_generator;
use trigen::output::{json, text};
use trigen::stats::StatisticsRunner;

fn main() -> Result<()> {
    let cli = Cli::parse_args();
    cli.validate()?;

    // No parameters at all: pick random ones and run the experiment twice
    if cli.sample_count.is_none() && cli.mode.is_none() && cli.config.is_none() {
        println!("No parameters given, generating random parameters");
        println!();

        for _ in 0..2 {
            let config = random_config(&cli);
            validator::validate_config(&config).context("Generated configuration invalid")?;
            run_experiment(&config)?;
            println!();
        }
        return Ok(());
    }

    // Build configuration: TOML file merged with CLI flags, or CLI alone
    let config = match &cli.config {
        Some(path) => {
            let file_config = config_toml::parse_toml_file(path)?;
            config_toml::merge_cli_with_config(&cli, file_config)?
        }
        None => cli.to_config()?,
    };

    validator::validate_config(&config).context("Configuration validation failed")?;

    if cli.dry_run {
        println!("Dry run mode - configuration validated successfully");
        return Ok(());
    }

    run_experiment(&config)
}

/// Sample, derive statistics, and print the report
fn run_experiment(config: &Config) -> Result<()> {
    let generator = create_generator(&config.run.distribution, config.run.seed)?;
    let mut runner =
        StatisticsRunner::new(config.run.sample_count, generator, config.run.bucketing)?;

    runner.run();

    match config.output.format {
        OutputFormat::Text => text::print_results(&runner, config),
        OutputFormat::Json => json::print_results(&runner, config)?,
    }

    Ok(())
}

/// Generate a random sample count and triangular mode, keeping the
/// bucketing/output flags from the command line
fn random_config(cli: &Cli) -> Config {
    let mut rng = rand::thread_rng();
    let sample_count = rng.gen_range(10_000..=100_000);
    let mode = rng.gen_range(1.0..20.0);

    Config {
        run: RunConfig {
            sample_count,
            distribution: DistributionType::Triangular { mode },
            bucketing: cli.bucketing_policy(),
            seed: cli.seed,
        },
        output: OutputConfig {
            format: OutputFormat::Text,
            bar_width: cli.bar_width,
        },
    }
}
