//! Result presentation
//!
//! Formats a completed run for consumption: a human-readable console report
//! and a machine-readable JSON report. Both read the same output contract from
//! the runner (expected and empirical moments, histogram, max trackers) and
//! never reach into the sampling core.

pub mod json;
pub mod text;
