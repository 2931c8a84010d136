//! Configuration module
//!
//! Handles CLI argument parsing, TOML configuration files, and validation.
//!
//! All run parameters live in one immutable [`Config`] passed into the core's
//! constructors; nothing is kept in global state.

pub mod cli;
pub mod toml;
pub mod validator;

use crate::stats::BucketingPolicy;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Complete experiment configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub run: RunConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Sampling run configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Number of samples to draw (must be > 0)
    pub sample_count: u64,
    /// Distribution to sample from
    pub distribution: DistributionType,
    /// Histogram bucketing policy
    #[serde(default)]
    pub bucketing: BucketingPolicy,
    /// Seed for the uniform source (random when omitted)
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Distribution configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum DistributionType {
    /// Triangular over `[0, 2*mode]` with the given mode
    Triangular { mode: f64 },
}

impl fmt::Display for DistributionType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DistributionType::Triangular { mode } => write!(f, "triangular(mode={})", mode),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Report format
    #[serde(default)]
    pub format: OutputFormat,
    /// Width in characters of the longest histogram bar in the text report
    #[serde(default = "default_bar_width")]
    pub bar_width: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            bar_width: default_bar_width(),
        }
    }
}

fn default_bar_width() -> usize {
    60
}

/// Report format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable console report with a bar-chart histogram
    Text,
    /// Machine-readable JSON report
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Text
    }
}
