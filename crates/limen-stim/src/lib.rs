//! # limen-stim
//!
//! Stimulus construction utilities for the `limen` psychophysics crates.
//!
//! Two independent numeric tools live here:
//!
//! - [`packing`]: randomly fill the unit disk with non-overlapping circles,
//!   the geometry behind dot-pattern visual stimuli.
//! - [`color`]: convert device RGB to and from the CIEL\*a\*b\* space, so
//!   stimulus colors can be picked at controlled perceptual distances.
//!
//! Neither tool draws anything or touches the display; rendering belongs
//! to the presentation layer.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod error;

pub mod color;
pub mod packing;

pub use color::{ColorConverter, Lab, Rgb};
pub use error::StimulusError;
pub use packing::{pack, Circle, PackingConfig};
