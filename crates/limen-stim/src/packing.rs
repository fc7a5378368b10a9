//! Random non-overlapping circle packing inside the unit disk.
//!
//! Greedy rejection sampling: draw a random candidate circle, shrink it
//! until it clears every accepted circle, and keep it if it still meets
//! the minimum radius and lies inside the disk. The loop ends when the
//! covered-area ratio reaches its target or the circle budget runs out.

use std::f64::consts::PI;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::StimulusError;

/// Consecutive rejected candidates after which the disk is considered
/// jammed and [`pack`] returns the layout it has.
pub const MAX_CONSECUTIVE_REJECTS: usize = 10_000;

/// A circle as center coordinates and radius, in unit-disk coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    /// X coordinate of the center, in `[-1, 1]`.
    pub x: f64,
    /// Y coordinate of the center, in `[-1, 1]`.
    pub y: f64,
    /// Radius.
    pub r: f64,
}

impl Circle {
    /// Area of this circle.
    pub fn area(&self) -> f64 {
        PI * self.r * self.r
    }

    /// Distance between the centers of two circles.
    pub fn center_distance(&self, other: &Circle) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Whether two circles overlap (touching counts as clear).
    pub fn overlaps(&self, other: &Circle) -> bool {
        self.center_distance(other) < self.r + other.r
    }

    /// Whether this circle lies entirely inside the unit disk.
    pub fn inside_unit_disk(&self) -> bool {
        (self.x * self.x + self.y * self.y).sqrt() + self.r.abs() <= 1.0
    }
}

/// Configuration for [`pack`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackingConfig {
    /// Smallest radius a placed circle may have. Default 1/80.
    pub min_radius: f64,
    /// Upper bound (exclusive) on candidate radii. Default 1/20.
    pub max_radius: f64,
    /// Target ratio of covered area to disk area, in `(0, 1]`. Default 0.7.
    pub target_fill: f64,
    /// Hard cap on the number of placed circles. Default 10,000.
    pub max_circles: usize,
}

impl Default for PackingConfig {
    fn default() -> Self {
        Self {
            min_radius: 1.0 / 80.0,
            max_radius: 1.0 / 20.0,
            target_fill: 0.7,
            max_circles: 10_000,
        }
    }
}

impl PackingConfig {
    /// Create a configuration with the given radius range and defaults for
    /// the rest.
    pub fn new(min_radius: f64, max_radius: f64, target_fill: f64) -> Self {
        Self {
            min_radius,
            max_radius,
            target_fill,
            ..Default::default()
        }
    }

    /// Set the circle budget.
    pub fn max_circles(mut self, max: usize) -> Self {
        self.max_circles = max;
        self
    }

    /// Check that the configuration describes a feasible packing.
    pub fn validate(&self) -> Result<(), StimulusError> {
        if !(self.min_radius.is_finite() && self.max_radius.is_finite()) {
            return Err(StimulusError::invalid_packing("radii must be finite"));
        }
        if self.min_radius <= 0.0 {
            return Err(StimulusError::invalid_packing(
                "min_radius must be positive",
            ));
        }
        if self.max_radius <= self.min_radius {
            return Err(StimulusError::invalid_packing(
                "max_radius must exceed min_radius",
            ));
        }
        if self.max_radius > 1.0 {
            return Err(StimulusError::invalid_packing(
                "max_radius cannot exceed the unit disk",
            ));
        }
        if !(self.target_fill > 0.0 && self.target_fill <= 1.0) {
            return Err(StimulusError::invalid_packing(
                "target_fill must be in (0, 1]",
            ));
        }
        if self.max_circles == 0 {
            return Err(StimulusError::invalid_packing(
                "max_circles must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Randomly fill the unit disk with non-overlapping circles.
///
/// Candidates are drawn with centers uniform in `[-1, 1]²` and radii
/// uniform in `[min_radius, max_radius)`. A candidate that would overlap
/// an accepted circle is shrunk to just clear it; it is kept only if the
/// shrunk radius still meets `min_radius` and the circle stays inside the
/// disk. Placement stops once the covered fraction of the disk reaches
/// `target_fill` or `max_circles` circles were placed.
///
/// The caller supplies the RNG, so a seeded generator gives a
/// reproducible layout.
///
/// A high `target_fill` can be unreachable once the disk jams; the packing
/// is returned as-is after [`MAX_CONSECUTIVE_REJECTS`] failed candidates
/// in a row.
pub fn pack<R: Rng + ?Sized>(
    config: &PackingConfig,
    rng: &mut R,
) -> Result<Vec<Circle>, StimulusError> {
    config.validate()?;

    let disk_area = PI;
    let mut covered = 0.0;
    let mut rejects = 0usize;
    let mut circles: Vec<Circle> = Vec::new();

    while covered / disk_area < config.target_fill
        && circles.len() < config.max_circles
        && rejects < MAX_CONSECUTIVE_REJECTS
    {
        let mut candidate = Circle {
            x: rng.gen_range(-1.0..1.0),
            y: rng.gen_range(-1.0..1.0),
            r: rng.gen_range(config.min_radius..config.max_radius),
        };

        // Shrink the candidate until it clears every accepted circle. The
        // radius can go negative here; the acceptance check below rejects
        // those candidates.
        for placed in &circles {
            let d = candidate.center_distance(placed);
            if d < candidate.r + placed.r {
                candidate.r = d - placed.r;
            }
        }

        if candidate.r >= config.min_radius && candidate.inside_unit_disk() {
            covered += candidate.area();
            circles.push(candidate);
            rejects = 0;
        } else {
            rejects += 1;
        }
    }

    Ok(circles)
}
