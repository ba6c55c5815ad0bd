//! Pointer tracking: raw samples from input events and the lagged cursor the
//! distortion math follows.
//!
//! Input events only ever write [`PointerState::raw`]. The frame step is the
//! sole caller of [`PointerState::advance`], so the smoothed cursor moves once
//! per executed frame no matter how many events arrived in between.

#[cfg(test)]
#[path = "pointer_test.rs"]
mod pointer_test;

use crate::consts::OFFSCREEN_POINTER;
use crate::geometry::Point;

/// One exponential smoothing step: `prev + (raw - prev) * k`, per axis.
#[must_use]
pub fn smooth(prev: Point, raw: Point, k: f64) -> Point {
    Point {
        x: prev.x + (raw.x - prev.x) * k,
        y: prev.y + (raw.y - prev.y) * k,
    }
}

/// Raw and smoothed cursor positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerState {
    /// Latest sample from a pointer-move event.
    pub raw: Point,
    smoothed: Point,
}

impl Default for PointerState {
    fn default() -> Self {
        let offscreen = Point::new(OFFSCREEN_POINTER, OFFSCREEN_POINTER);
        Self { raw: offscreen, smoothed: offscreen }
    }
}

impl PointerState {
    /// Record a pointer-move sample. Never touches the smoothed cursor.
    pub fn record(&mut self, sample: Point) {
        self.raw = sample;
    }

    /// Move the smoothed cursor one step toward the raw sample.
    pub fn advance(&mut self, k: f64) -> Point {
        self.smoothed = smooth(self.smoothed, self.raw, k);
        self.smoothed
    }

    /// The lagged cursor used for distortion and the glow.
    #[must_use]
    pub fn smoothed(&self) -> Point {
        self.smoothed
    }
}
