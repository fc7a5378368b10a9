//! Result types for completed staircase runs.

use serde::{Deserialize, Serialize};

/// Threshold estimate derived from a stopped staircase run.
///
/// The bare threshold value answers the experimental question; the rest of
/// the fields say how much evidence stands behind it, which is what a
/// session report or a quality check wants to see.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdEstimate {
    /// The estimated detection threshold: the least intense level at which
    /// the subject responded correctly at least half the time.
    pub threshold: f64,

    /// Detection rate observed at the threshold level.
    pub hit_rate: f64,

    /// Detected trials at the threshold level.
    pub hits: u32,

    /// Total trials presented at the threshold level.
    pub trials_at_threshold: u32,

    /// Total trials across the whole run.
    pub total_trials: u64,

    /// Number of distinct intensity levels visited during the run.
    pub levels_visited: usize,
}
