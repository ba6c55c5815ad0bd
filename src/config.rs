//! Tunable design values for the grid field.
//!
//! The host may pass a JSON object at mount time; any field it omits keeps the
//! default from [`crate::consts`]. Keys are camelCase to match the JS side:
//!
//! ```json
//! { "gridSpacing": 120, "influenceRadius": 300, "introDelayMs": 0 }
//! ```

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{
    FADE_IN_END, FADE_IN_START, GRID_SPACING_PX, INFLUENCE_RADIUS_PX, INTRO_DELAY_MS, MAX_DISPLACEMENT_PX,
    PARALLAX_FACTOR, POINTER_SMOOTHING, SAMPLE_STEP_PX, TARGET_FPS,
};
use crate::error::ConfigError;
use crate::field::DistortionField;

/// Renderer configuration. Construct with [`GridConfig::default`] or
/// [`GridConfig::from_json`].
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct GridConfig {
    /// Distance between adjacent grid lines.
    pub grid_spacing: f64,
    /// Distance between sampled points along a line.
    pub sample_step: f64,
    /// Radius of the cursor's influence.
    pub influence_radius: f64,
    /// Displacement directly under the cursor.
    pub max_displacement: f64,
    /// Fraction of the scroll offset applied as parallax.
    pub parallax_factor: f64,
    /// Per-frame cursor interpolation factor, in `(0, 1]`.
    pub pointer_smoothing: f64,
    /// Redraw cadence ceiling.
    pub target_fps: f64,
    /// Delay from the host's visible signal to the intro reveal.
    pub intro_delay_ms: u32,
    /// Fade-in start, as a fraction of viewport height.
    pub fade_in_start: f64,
    /// Fade-in end, as a fraction of viewport height.
    pub fade_in_end: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            grid_spacing: GRID_SPACING_PX,
            sample_step: SAMPLE_STEP_PX,
            influence_radius: INFLUENCE_RADIUS_PX,
            max_displacement: MAX_DISPLACEMENT_PX,
            parallax_factor: PARALLAX_FACTOR,
            pointer_smoothing: POINTER_SMOOTHING,
            target_fps: TARGET_FPS,
            intro_delay_ms: INTRO_DELAY_MS,
            fade_in_start: FADE_IN_START,
            fade_in_end: FADE_IN_END,
        }
    }
}

impl GridConfig {
    /// Parse and validate a host-supplied JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown keys and
    /// [`ConfigError::Invalid`] for out-of-range values.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every field is usable.
    ///
    /// # Errors
    ///
    /// Returns the first offending field as [`ConfigError::Invalid`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("gridSpacing", self.grid_spacing)?;
        positive("sampleStep", self.sample_step)?;
        positive("influenceRadius", self.influence_radius)?;
        positive("targetFps", self.target_fps)?;
        non_negative("maxDisplacement", self.max_displacement)?;
        non_negative("parallaxFactor", self.parallax_factor)?;
        if !(self.pointer_smoothing > 0.0 && self.pointer_smoothing <= 1.0) {
            return Err(ConfigError::Invalid { field: "pointerSmoothing", reason: "must be in (0, 1]" });
        }
        non_negative("fadeInStart", self.fade_in_start)?;
        if !(self.fade_in_end.is_finite() && self.fade_in_end > self.fade_in_start) {
            return Err(ConfigError::Invalid { field: "fadeInEnd", reason: "must be greater than fadeInStart" });
        }
        Ok(())
    }

    /// Milliseconds between executed frames at the target cadence.
    #[must_use]
    pub fn frame_interval_ms(&self) -> f64 {
        1000.0 / self.target_fps
    }

    /// The distortion parameters as a standalone value.
    #[must_use]
    pub fn field(&self) -> DistortionField {
        DistortionField { radius: self.influence_radius, max_displacement: self.max_displacement }
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid { field, reason: "must be a positive number" })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid { field, reason: "must not be negative" })
    }
}
