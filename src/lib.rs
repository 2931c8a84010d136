//! trigen - Random sampling with empirical statistics
//!
//! trigen draws a configurable number of samples from a pluggable random-variable
//! model and compares empirical statistics (mean, variance, histogram) against the
//! model's theoretical moments.
//!
//! # Architecture
//!
//! - **Pluggable generators**: the [`DistributionGenerator`] trait turns a uniform
//!   random source into samples from a target distribution via inverse-transform
//!   sampling, and reports the distribution's theoretical mean/variance
//! - **Histogram-centric statistics**: samples are accumulated into a [`Histogram`]
//!   (exact-value or fixed-width bucketing); empirical mean and variance are
//!   derived from the bucket counts, never from a retained sample sequence
//! - **Single-use runner**: [`StatisticsRunner`] drives a fixed number of draws
//!   and exposes the results for presentation

pub mod config;
pub mod distribution;
pub mod error;
pub mod output;
pub mod stats;

// Re-export commonly used types
pub use config::Config;
pub use distribution::DistributionGenerator;
pub use error::Error;
pub use stats::histogram::Histogram;
pub use stats::StatisticsRunner;

/// Result type used throughout trigen
pub type Result<T> = anyhow::Result<T>;
