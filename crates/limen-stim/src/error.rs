//! Error types for stimulus construction.

use thiserror::Error;

/// Error returned by stimulus construction utilities.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StimulusError {
    /// The packing configuration cannot produce a valid layout.
    #[error("invalid packing configuration: {reason}")]
    InvalidPacking {
        /// What was wrong with the configuration.
        reason: String,
    },

    /// The device RGB-to-XYZ matrix is not invertible, so colors cannot be
    /// mapped back from XYZ to device RGB.
    #[error("device color matrix is singular and cannot be inverted")]
    SingularMatrix,
}

impl StimulusError {
    pub(crate) fn invalid_packing(reason: impl Into<String>) -> Self {
        StimulusError::InvalidPacking {
            reason: reason.into(),
        }
    }
}
