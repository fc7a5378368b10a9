//! Error types for staircase sessions.

use thiserror::Error;

/// Error returned by staircase construction and threshold queries.
///
/// Every error is terminal to the calling operation: nothing is retried or
/// swallowed internally, and propagation is the caller's responsibility.
/// The per-trial [`step`](crate::Staircase::step) operation itself is total
/// and never fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StaircaseError {
    /// Threshold requested before the stopping condition was reached.
    #[error("threshold requested before stopping condition reached")]
    NotStopped,

    /// The run stopped, but no intensity level met the detection criterion.
    ///
    /// This happens when the subject never detected any level at 50% or
    /// better, e.g. a run of all misses. An earlier revision returned an
    /// infinite sentinel here, which silently poisoned downstream
    /// arithmetic; it is an explicit error now.
    #[error("no intensity level met the 50% detection criterion")]
    NoThresholdData,

    /// The configuration is invalid.
    #[error("invalid staircase configuration: {reason}")]
    InvalidConfig {
        /// What was wrong with the configuration.
        reason: String,
    },
}

impl StaircaseError {
    /// Shorthand for an [`StaircaseError::InvalidConfig`] with the given reason.
    pub(crate) fn invalid_config(reason: impl Into<String>) -> Self {
        StaircaseError::InvalidConfig {
            reason: reason.into(),
        }
    }
}
