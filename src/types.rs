//! Common types shared across the crate.

use serde::{Deserialize, Serialize};

/// Numeric direction a correct (detected) response moves the intensity.
///
/// Which numeric direction corresponds to a *weaker* stimulus depends on the
/// physical scale: contrast and loudness get weaker as the number shrinks,
/// while a masking level gets "weaker" (easier) as the number grows. The
/// direction is fixed at construction and orients both the per-trial update
/// and the final threshold scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// A detected stimulus moves the intensity numerically upward.
    ///
    /// Use when larger numbers mean *harder to detect* (e.g. masking noise
    /// level). The threshold is then the numerically largest level the
    /// subject still detected at criterion.
    IncreaseOnCorrect,

    /// A detected stimulus moves the intensity numerically downward.
    ///
    /// Use when larger numbers mean *easier to detect* (e.g. tone level in
    /// a hearing screening). The threshold is then the numerically smallest
    /// level the subject still detected at criterion.
    DecreaseOnCorrect,
}

impl Direction {
    /// Sign applied to the step on a correct response: +1.0 or -1.0.
    pub fn signum(&self) -> f64 {
        match self {
            Direction::IncreaseOnCorrect => 1.0,
            Direction::DecreaseOnCorrect => -1.0,
        }
    }

    /// Human-readable description of this direction convention.
    pub fn description(&self) -> &'static str {
        match self {
            Direction::IncreaseOnCorrect => "intensity increases on correct response",
            Direction::DecreaseOnCorrect => "intensity decreases on correct response",
        }
    }
}

/// Outcome tally for a single intensity level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialTally {
    /// Number of trials at this level where the subject detected the stimulus.
    pub hits: u32,
    /// Total number of trials presented at this level.
    pub trials: u32,
}

impl TrialTally {
    /// Create a tally with the given counts.
    pub fn new(hits: u32, trials: u32) -> Self {
        Self { hits, trials }
    }

    /// Fraction of trials at this level that were detected.
    ///
    /// Returns 0.0 for an empty tally rather than NaN.
    pub fn hit_rate(&self) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            f64::from(self.hits) / f64::from(self.trials)
        }
    }
}

impl core::fmt::Display for TrialTally {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} hits in {} trials", self.hits, self.trials)
    }
}
