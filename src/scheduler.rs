//! Per-tick gating for the frame loop.
//!
//! The loop itself re-arms unconditionally (see [`crate::engine`]); this
//! module only decides whether a given tick does any drawing work.

#[cfg(test)]
#[path = "scheduler_test.rs"]
mod scheduler_test;

use crate::consts::MIN_VISIBLE_OPACITY;

/// Outcome of a single tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickDecision {
    /// Field is effectively transparent; skip all work.
    Invisible,
    /// Too soon after the last executed frame.
    Throttled,
    /// Advance, rebuild and draw.
    Render,
}

/// Caps executed frames to one per `interval_ms`.
#[derive(Debug, Clone)]
pub struct FrameThrottle {
    interval_ms: f64,
    last_frame_ms: Option<f64>,
}

impl FrameThrottle {
    #[must_use]
    pub fn new(interval_ms: f64) -> Self {
        Self { interval_ms, last_frame_ms: None }
    }

    /// Classify the tick at `timestamp_ms` given the current opacity.
    ///
    /// Only a [`TickDecision::Render`] outcome moves the throttle's clock.
    pub fn decide(&mut self, timestamp_ms: f64, opacity: f64) -> TickDecision {
        if opacity < MIN_VISIBLE_OPACITY {
            return TickDecision::Invisible;
        }
        if let Some(last) = self.last_frame_ms
            && timestamp_ms - last < self.interval_ms
        {
            return TickDecision::Throttled;
        }
        self.last_frame_ms = Some(timestamp_ms);
        TickDecision::Render
    }
}

/// Counters for how ticks were spent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub rendered: u64,
    pub invisible: u64,
    pub throttled: u64,
}

impl FrameStats {
    pub fn record(&mut self, decision: TickDecision) {
        match decision {
            TickDecision::Invisible => self.invisible += 1,
            TickDecision::Throttled => self.throttled += 1,
            TickDecision::Render => self.rendered += 1,
        }
    }

    /// Total ticks observed.
    #[must_use]
    pub fn ticks(&self) -> u64 {
        self.rendered + self.invisible + self.throttled
    }
}
