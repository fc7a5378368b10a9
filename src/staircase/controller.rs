//! The staircase controller state machine.

use crate::config::StaircaseConfig;
use crate::error::StaircaseError;
use crate::result::ThresholdEstimate;
use crate::staircase::history::ResponseHistory;
use crate::types::TrialTally;

/// Adaptive staircase controller.
///
/// Owns the intensity state machine for one test session: it consumes a
/// stream of binary detected/not-detected responses, produces the next
/// stimulus intensity after each, detects the stopping condition, and
/// derives the threshold estimate from the accumulated response history.
///
/// The machine has two states. It starts **running** and becomes
/// **stopped** when the configured number of consecutive misses is
/// reached; no transition leaves the stopped state.
#[derive(Debug, Clone)]
pub struct Staircase {
    config: StaircaseConfig,
    current_intensity: f64,
    consecutive_misses: u32,
    stopped: bool,
    trials_run: u64,
    history: ResponseHistory,
}

impl Staircase {
    /// Create a controller from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`StaircaseError::InvalidConfig`] when the configuration
    /// fails [`StaircaseConfig::validate`] (non-positive or non-finite
    /// step, non-finite start, zero miss limit).
    pub fn new(config: StaircaseConfig) -> Result<Self, StaircaseError> {
        config.validate()?;
        Ok(Self {
            current_intensity: config.start_value,
            consecutive_misses: 0,
            stopped: false,
            trials_run: 0,
            history: ResponseHistory::new(config.grid_decimals),
            config,
        })
    }

    /// Consume one trial outcome and return the next stimulus intensity.
    ///
    /// The outcome is recorded against the intensity that was just
    /// presented (the current one), then the intensity moves one step:
    /// toward "harder to detect" on a detection, toward "easier to detect"
    /// on a miss. A detection resets the consecutive-miss count; a miss
    /// increments it and stops the run once it reaches the miss limit.
    ///
    /// Each call consumes exactly one trial. The controller does not
    /// refuse calls after the run has stopped: callers are expected to
    /// check [`is_stopped`](Self::is_stopped) and cease presenting
    /// stimuli, but a late response still lands in the history rather
    /// than being dropped.
    pub fn step(&mut self, responded: bool) -> f64 {
        self.history.record(self.current_intensity, responded);
        self.trials_run += 1;

        let delta = self.config.direction.signum() * self.config.step_size;
        if responded {
            self.current_intensity += delta;
            self.consecutive_misses = 0;
        } else {
            self.current_intensity -= delta;
            self.consecutive_misses += 1;
            if self.consecutive_misses >= self.config.miss_limit {
                self.stopped = true;
            }
        }
        self.current_intensity
    }

    /// Whether the stopping condition has fired. Terminal once true.
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// The estimated detection threshold.
    ///
    /// The least intense level at which the subject responded correctly in
    /// at least half the trials, where "least intense" is oriented by the
    /// configured [`Direction`](crate::Direction).
    ///
    /// # Errors
    ///
    /// - [`StaircaseError::NotStopped`] while the run is still going.
    /// - [`StaircaseError::NoThresholdData`] when no level met the
    ///   criterion.
    pub fn threshold(&self) -> Result<f64, StaircaseError> {
        if !self.stopped {
            return Err(StaircaseError::NotStopped);
        }
        self.history
            .threshold_level(self.config.direction)
            .ok_or(StaircaseError::NoThresholdData)
    }

    /// The full threshold estimate, with the evidence behind it.
    ///
    /// Same preconditions as [`threshold`](Self::threshold).
    pub fn estimate(&self) -> Result<ThresholdEstimate, StaircaseError> {
        let threshold = self.threshold()?;
        // threshold() only returns levels present in the history.
        let tally = self
            .history
            .tally_at(threshold)
            .unwrap_or_else(|| TrialTally::new(0, 0));
        Ok(ThresholdEstimate {
            threshold,
            hit_rate: tally.hit_rate(),
            hits: tally.hits,
            trials_at_threshold: tally.trials,
            total_trials: self.trials_run,
            levels_visited: self.history.levels(),
        })
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The next stimulus intensity to present.
    pub fn current_intensity(&self) -> f64 {
        self.current_intensity
    }

    /// Consecutive misses ending at the most recent trial.
    pub fn consecutive_misses(&self) -> u32 {
        self.consecutive_misses
    }

    /// Total trials consumed so far.
    pub fn trials_run(&self) -> u64 {
        self.trials_run
    }

    /// The session configuration.
    pub fn config(&self) -> &StaircaseConfig {
        &self.config
    }

    /// The per-level response tallies accumulated so far.
    pub fn history(&self) -> &ResponseHistory {
        &self.history
    }
}
