//! Visibility state machine: delayed intro reveal combined with a scroll fade.
//!
//! ```text
//!            visible=true             timer fires (matching token)
//!   Hidden ───────────────▶ Armed ──────────────────────────────▶ Elapsed
//!     ▲                       │
//!     └───── visible=false ───┘   (timer cancelled, token retired)
//! ```
//!
//! `Elapsed` is terminal while mounted. The scroll fade is independent and
//! moves in either direction on every scroll event. Effective opacity is the
//! scroll fade once the intro has elapsed and zero before.

#[cfg(test)]
#[path = "visibility_test.rs"]
mod visibility_test;

use crate::config::GridConfig;

/// Fade from 0 to 1 as the page scrolls from `start * vh` to `end * vh`.
#[must_use]
pub fn scroll_fade(scroll_y: f64, viewport_height: f64, start: f64, end: f64) -> f64 {
    let fade_start = viewport_height * start;
    let fade_end = viewport_height * end;
    if scroll_y <= fade_start {
        0.0
    } else if scroll_y >= fade_end {
        1.0
    } else {
        (scroll_y - fade_start) / (fade_end - fade_start)
    }
}

/// Where the intro sequence stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntroPhase {
    /// Waiting for the host to signal visibility.
    #[default]
    Hidden,
    /// Delay timer running; only a firing carrying `token` may complete it.
    Armed { token: u64 },
    /// Intro done; the scroll fade alone decides opacity from here on.
    Elapsed,
}

/// What the caller must do with the intro timer after a host signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntroCommand {
    /// Nothing changes.
    Keep,
    /// Start a timer that reports `token` back after `delay_ms`.
    Arm { token: u64, delay_ms: u32 },
    /// Cancel the pending timer.
    Cancel,
}

/// Intro phase plus scroll fade.
#[derive(Debug, Clone)]
pub struct Visibility {
    phase: IntroPhase,
    next_token: u64,
    scroll_fade: f64,
    intro_delay_ms: u32,
    fade_in_start: f64,
    fade_in_end: f64,
}

impl Default for Visibility {
    fn default() -> Self {
        Self::new(&GridConfig::default())
    }
}

impl Visibility {
    #[must_use]
    pub fn new(config: &GridConfig) -> Self {
        Self {
            phase: IntroPhase::Hidden,
            next_token: 0,
            scroll_fade: 0.0,
            intro_delay_ms: config.intro_delay_ms,
            fade_in_start: config.fade_in_start,
            fade_in_end: config.fade_in_end,
        }
    }

    /// Apply the host's visibility signal.
    pub fn set_host_visible(&mut self, visible: bool) -> IntroCommand {
        match (self.phase, visible) {
            (IntroPhase::Hidden, true) => {
                self.next_token += 1;
                let token = self.next_token;
                self.phase = IntroPhase::Armed { token };
                IntroCommand::Arm { token, delay_ms: self.intro_delay_ms }
            }
            (IntroPhase::Armed { .. }, false) => {
                self.phase = IntroPhase::Hidden;
                IntroCommand::Cancel
            }
            _ => IntroCommand::Keep,
        }
    }

    /// The intro timer armed with `token` fired.
    ///
    /// Returns `true` if this completed the intro. Stale tokens from a
    /// cancelled arm are ignored.
    pub fn intro_elapsed(&mut self, token: u64) -> bool {
        if self.phase == (IntroPhase::Armed { token }) {
            self.phase = IntroPhase::Elapsed;
            true
        } else {
            false
        }
    }

    /// Recompute the scroll fade for the current scroll offset.
    pub fn update_scroll(&mut self, scroll_y: f64, viewport_height: f64) {
        self.scroll_fade = scroll_fade(scroll_y, viewport_height, self.fade_in_start, self.fade_in_end);
    }

    #[must_use]
    pub fn phase(&self) -> IntroPhase {
        self.phase
    }

    #[must_use]
    pub fn scroll_fade(&self) -> f64 {
        self.scroll_fade
    }

    /// Opacity applied to drawing and to the canvas element.
    #[must_use]
    pub fn opacity(&self) -> f64 {
        if self.phase == IntroPhase::Elapsed { self.scroll_fade } else { 0.0 }
    }
}
