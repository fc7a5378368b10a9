//! Adaptive staircase state machine.
//!
//! Implements the classic up-down procedure for threshold finding:
//!
//! 1. **Stepping**: every trial records the outcome at the current
//!    intensity, then moves the intensity one step toward "harder" on a
//!    detection or one step toward "easier" on a miss.
//!
//! 2. **Stopping**: a run of consecutive misses reaching the configured
//!    limit (default 3) ends the session. The stopped flag is terminal.
//!
//! 3. **Estimation**: once stopped, the threshold is the least intense
//!    level whose tally shows a detection rate of at least 50%, where
//!    "least intense" is oriented by the configured direction.
//!
//! ## Key Design Decisions
//!
//! - **Grid-keyed history**: tallies are keyed by an integer grid index
//!   rather than a raw `f64`, so levels reached by repeated stepping
//!   compare equal on every platform. See [`ResponseHistory`].
//!
//! - **Stepping never fails**: `step` stays callable after the stopping
//!   condition fires and keeps accumulating history. Callers are expected
//!   to poll `is_stopped` and cease presenting stimuli; refusing the call
//!   would turn a caller bug into a lost response.

mod controller;
mod history;

pub use controller::Staircase;
pub use history::ResponseHistory;
