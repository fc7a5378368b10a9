//! Per-intensity response tallies.

use std::collections::BTreeMap;

use crate::constants::HIT_RATE_CRITERION;
use crate::types::{Direction, TrialTally};

/// Tally of responses at each distinct intensity level presented.
///
/// Intensities are snapped to a fixed-precision decimal grid and keyed by
/// the integer grid index, never by the raw float. A staircase only ever
/// reaches levels of the form `start ± k * step`, so neighboring levels are
/// at least one step apart and a grid much finer than the step size maps
/// each level to a unique key while absorbing float rounding drift.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseHistory {
    /// Grid spacing as a multiplier: 10^grid_decimals.
    scale: f64,
    tallies: BTreeMap<i64, TrialTally>,
}

impl ResponseHistory {
    /// Create an empty history with the given grid resolution.
    pub(crate) fn new(grid_decimals: u32) -> Self {
        Self {
            scale: 10f64.powi(grid_decimals as i32),
            tallies: BTreeMap::new(),
        }
    }

    fn key(&self, intensity: f64) -> i64 {
        (intensity * self.scale).round() as i64
    }

    fn value(&self, key: i64) -> f64 {
        key as f64 / self.scale
    }

    /// Record one trial outcome at the given intensity.
    pub(crate) fn record(&mut self, intensity: f64, responded: bool) {
        let tally = self.tallies.entry(self.key(intensity)).or_default();
        tally.trials += 1;
        if responded {
            tally.hits += 1;
        }
    }

    /// Number of distinct intensity levels presented so far.
    pub fn levels(&self) -> usize {
        self.tallies.len()
    }

    /// Tally recorded at the given intensity, if it was ever presented.
    pub fn tally_at(&self, intensity: f64) -> Option<TrialTally> {
        self.tallies.get(&self.key(intensity)).copied()
    }

    /// Iterate over `(intensity, tally)` pairs in ascending intensity order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, TrialTally)> + '_ {
        self.tallies.iter().map(|(&k, &t)| (self.value(k), t))
    }

    /// Find the threshold level for the given direction convention.
    ///
    /// Scans every level whose detection rate meets [`HIT_RATE_CRITERION`]
    /// and picks the least intense one: the numerically smallest level when
    /// intensity decreases on correct responses (larger numbers are more
    /// intense), the numerically largest when intensity increases on
    /// correct responses (smaller numbers are more intense). Returns `None`
    /// when no level qualifies.
    pub(crate) fn threshold_level(&self, direction: Direction) -> Option<f64> {
        let mut qualifying = self
            .tallies
            .iter()
            .filter(|(_, tally)| tally.hit_rate() >= HIT_RATE_CRITERION)
            .map(|(&key, _)| key);

        let key = match direction {
            Direction::DecreaseOnCorrect => qualifying.next(),
            Direction::IncreaseOnCorrect => qualifying.next_back(),
        }?;
        Some(self.value(key))
    }
}
