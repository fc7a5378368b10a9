//! Configuration for staircase sessions.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_GRID_DECIMALS, DEFAULT_MISS_LIMIT};
use crate::error::StaircaseError;
use crate::types::Direction;

/// Configuration options for a [`Staircase`](crate::Staircase) session.
///
/// Created once per test session with a starting value, a step size, and
/// the direction a correct response should move the intensity. The
/// remaining fields have sensible defaults and are adjusted through the
/// builder methods.
///
/// Validation happens when the configuration is handed to
/// [`Staircase::new`](crate::Staircase::new), which rejects non-positive
/// step sizes, non-finite values, and a zero miss limit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaircaseConfig {
    /// Intensity of the first stimulus presented.
    pub start_value: f64,

    /// Magnitude of the intensity adjustment after each trial. Must be
    /// positive; the sign of each adjustment comes from `direction` and
    /// the trial outcome, never from the step itself.
    pub step_size: f64,

    /// Which numeric direction a detected stimulus moves the intensity.
    pub direction: Direction,

    /// Number of consecutive misses that stops the run. Default 3.
    pub miss_limit: u32,

    /// Decimal places for the intensity grid used to key the response
    /// history. Default 6. Intensities are snapped to this grid before
    /// tallying so that levels reached by repeated stepping compare equal
    /// regardless of float rounding.
    pub grid_decimals: u32,
}

impl StaircaseConfig {
    /// Create a configuration with the given start value, step size, and
    /// direction, and defaults for everything else.
    pub fn new(start_value: f64, step_size: f64, direction: Direction) -> Self {
        Self {
            start_value,
            step_size,
            direction,
            miss_limit: DEFAULT_MISS_LIMIT,
            grid_decimals: DEFAULT_GRID_DECIMALS,
        }
    }

    // =========================================================================
    // Builder methods
    // =========================================================================

    /// Set the number of consecutive misses that stops the run.
    pub fn miss_limit(mut self, limit: u32) -> Self {
        self.miss_limit = limit;
        self
    }

    /// Set the number of decimal places for the intensity grid.
    pub fn grid_decimals(mut self, decimals: u32) -> Self {
        self.grid_decimals = decimals;
        self
    }

    // =========================================================================
    // Validation
    // =========================================================================

    /// Check that the configuration describes a runnable session.
    pub fn validate(&self) -> Result<(), StaircaseError> {
        if !self.start_value.is_finite() {
            return Err(StaircaseError::invalid_config("start_value must be finite"));
        }
        if !self.step_size.is_finite() {
            return Err(StaircaseError::invalid_config("step_size must be finite"));
        }
        if self.step_size <= 0.0 {
            return Err(StaircaseError::invalid_config("step_size must be positive"));
        }
        if self.miss_limit == 0 {
            return Err(StaircaseError::invalid_config(
                "miss_limit must be at least 1",
            ));
        }
        // Beyond ~15 decimals an f64 cannot represent the grid spacing and
        // quantization would collapse every level onto the same key.
        if self.grid_decimals > 12 {
            return Err(StaircaseError::invalid_config(
                "grid_decimals must be at most 12",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = StaircaseConfig::new(5.0, 1.0, Direction::DecreaseOnCorrect);
        assert_eq!(config.miss_limit, DEFAULT_MISS_LIMIT);
        assert_eq!(config.grid_decimals, DEFAULT_GRID_DECIMALS);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn builder_methods() {
        let config = StaircaseConfig::new(5.0, 1.0, Direction::IncreaseOnCorrect)
            .miss_limit(5)
            .grid_decimals(3);
        assert_eq!(config.miss_limit, 5);
        assert_eq!(config.grid_decimals, 3);
    }

    #[test]
    fn zero_step_size_rejected() {
        let config = StaircaseConfig::new(5.0, 0.0, Direction::DecreaseOnCorrect);
        assert!(matches!(
            config.validate(),
            Err(StaircaseError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn negative_step_size_rejected() {
        let config = StaircaseConfig::new(5.0, -1.0, Direction::DecreaseOnCorrect);
        assert!(config.validate().is_err());
    }

    #[test]
    fn non_finite_values_rejected() {
        let nan_start = StaircaseConfig::new(f64::NAN, 1.0, Direction::DecreaseOnCorrect);
        assert!(nan_start.validate().is_err());

        let inf_step = StaircaseConfig::new(5.0, f64::INFINITY, Direction::DecreaseOnCorrect);
        assert!(inf_step.validate().is_err());
    }

    #[test]
    fn zero_miss_limit_rejected() {
        let config = StaircaseConfig::new(5.0, 1.0, Direction::DecreaseOnCorrect).miss_limit(0);
        assert!(config.validate().is_err());
    }
}
