//! Human-readable rendering of staircase sessions.

mod terminal;

pub use terminal::{format_estimate, format_session};
