//! Default configuration constants.

/// Default number of consecutive misses that stops a staircase run.
///
/// Three misses in a row is the classic stopping rule for a simple
/// down-on-correct staircase and matches the behavior the procedure was
/// originally tuned with.
pub const DEFAULT_MISS_LIMIT: u32 = 3;

/// Default number of decimal places for the intensity grid.
///
/// Intensities are only ever reached by repeated addition or subtraction of
/// a fixed step from a fixed start, so exact float equality is reproducible
/// given identical arithmetic. Snapping to a fixed-precision grid removes
/// the remaining cross-platform drift risk when tallies are keyed by
/// intensity. Six decimals is far below any step size a display or audio
/// device can actually present.
pub const DEFAULT_GRID_DECIMALS: u32 = 6;

/// Detection-rate criterion that defines the threshold level.
///
/// The threshold is the least intense level at which the subject responded
/// correctly in at least this fraction of trials.
pub const HIT_RATE_CRITERION: f64 = 0.5;
