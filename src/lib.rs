//! # limen
//!
//! Adaptive staircase procedures for psychophysical threshold estimation.
//!
//! A staircase procedure converges on a subject's detection threshold by
//! adjusting stimulus intensity after every trial: a detected stimulus gets
//! harder to detect, a missed stimulus gets easier. The run stops after a
//! configurable number of consecutive misses, and the threshold is read off
//! the response history as the least intense level the subject detected at
//! least half the time.
//!
//! ## Quick Start
//!
//! ```
//! use limen::{Direction, Staircase, StaircaseConfig};
//!
//! # fn main() -> Result<(), limen::StaircaseError> {
//! // Intensity starts at 5.0 and drops by 1.0 on every detection.
//! let config = StaircaseConfig::new(5.0, 1.0, Direction::DecreaseOnCorrect);
//! let mut staircase = Staircase::new(config)?;
//!
//! // Responses would normally come from a presentation loop.
//! for &detected in &[true, true, false, false, false] {
//!     staircase.step(detected);
//! }
//!
//! assert!(staircase.is_stopped());
//! let estimate = staircase.estimate()?;
//! assert_eq!(estimate.threshold, 4.0);
//! # Ok(())
//! # }
//! ```
//!
//! The controller is a pure, synchronous state machine: it performs no I/O
//! and holds no shared state, so the caller's presentation loop is the only
//! thing that needs to serialize trials.
//!
//! Stimulus construction utilities (random circle packing, device RGB to
//! CIEL\*a\*b\* conversion) live in the companion `limen-stim` crate.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
mod config;
mod constants;
mod error;
mod result;
mod types;

// Functional modules
pub mod output;
pub mod staircase;

// Re-exports for public API
pub use config::StaircaseConfig;
pub use constants::{DEFAULT_GRID_DECIMALS, DEFAULT_MISS_LIMIT, HIT_RATE_CRITERION};
pub use error::StaircaseError;
pub use result::ThresholdEstimate;
pub use staircase::{ResponseHistory, Staircase};
pub use types::{Direction, TrialTally};
