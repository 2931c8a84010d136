//! Typed errors for the sampling core
//!
//! Construction-time contract violations are reported immediately and never
//! silently clamped. Everything above the core (CLI, config files) uses
//! `anyhow` and converts from this type transparently.

/// Errors produced by the sampling and statistics core
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A constructor was given a parameter outside its contract
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        /// Name of the offending parameter
        name: &'static str,
        /// Why the value was rejected
        reason: String,
    },

    /// Two histograms with different bucketing policies cannot be combined
    #[error("cannot merge histograms: {reason}")]
    MergeMismatch {
        /// What differed between the two histograms
        reason: String,
    },
}

impl Error {
    /// Shorthand for an [`Error::InvalidParameter`]
    pub fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}
