//! Radial distortion around the cursor.
//!
//! Displacement is applied along the vertical axis only, for vertical and
//! horizontal lines alike, so the grid bows upward under the cursor instead
//! of being pushed aside. X is never modified.

#[cfg(test)]
#[path = "field_test.rs"]
mod field_test;

use std::f64::consts::FRAC_PI_2;

use crate::consts::{INFLUENCE_RADIUS_PX, MAX_DISPLACEMENT_PX};
use crate::geometry::Point;

/// Falloff parameters for the cursor's influence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistortionField {
    /// Distance at which the displacement reaches zero.
    pub radius: f64,
    /// Displacement at the cursor's immediate neighbourhood.
    pub max_displacement: f64,
}

impl Default for DistortionField {
    fn default() -> Self {
        Self { radius: INFLUENCE_RADIUS_PX, max_displacement: MAX_DISPLACEMENT_PX }
    }
}

impl DistortionField {
    /// Upward displacement for a sample at `distance` from the cursor.
    ///
    /// `D * cos(d/R * π/2)²` inside the radius, zero at or beyond it and at
    /// the cursor itself.
    #[must_use]
    pub fn displacement(&self, distance: f64) -> f64 {
        if distance >= self.radius || distance == 0.0 {
            return 0.0;
        }
        let strength = (distance / self.radius * FRAC_PI_2).cos();
        self.max_displacement * strength * strength
    }

    /// Displace `sample` away from `cursor`.
    #[must_use]
    pub fn apply(&self, sample: Point, cursor: Point) -> Point {
        let lift = self.displacement(sample.distance_to(cursor));
        Point { x: sample.x, y: sample.y - lift }
    }
}
