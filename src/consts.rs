//! Shared numeric constants for the grid field.
//!
//! These are the design values; [`crate::config::GridConfig`] defaults to them
//! and hosts may override most of them at mount time.

// ── Grid ────────────────────────────────────────────────────────

/// Distance between adjacent grid lines, in CSS pixels.
pub const GRID_SPACING_PX: f64 = 150.0;

/// Distance between sampled points along a grid line, in CSS pixels.
pub const SAMPLE_STEP_PX: f64 = 15.0;

/// Fraction of the scroll offset applied as vertical parallax.
pub const PARALLAX_FACTOR: f64 = 0.3;

// ── Distortion ──────────────────────────────────────────────────

/// Radius around the cursor inside which lines bend.
pub const INFLUENCE_RADIUS_PX: f64 = 350.0;

/// Upward displacement applied directly under the cursor.
pub const MAX_DISPLACEMENT_PX: f64 = 25.0;

/// Per-frame interpolation factor for the lagged cursor.
pub const POINTER_SMOOTHING: f64 = 0.15;

/// Initial pointer position, far enough off-screen to leave the grid flat.
pub const OFFSCREEN_POINTER: f64 = -1000.0;

// ── Frame loop ──────────────────────────────────────────────────

/// Target redraw cadence.
pub const TARGET_FPS: f64 = 60.0;

/// Opacity below which a frame does no drawing work.
pub const MIN_VISIBLE_OPACITY: f64 = 0.01;

// ── Visibility ──────────────────────────────────────────────────

/// Delay between the host's visible signal and the intro reveal.
pub const INTRO_DELAY_MS: u32 = 2500;

/// Scroll offset (as a fraction of viewport height) where the fade-in starts.
pub const FADE_IN_START: f64 = 0.3;

/// Scroll offset (as a fraction of viewport height) where the field is fully opaque.
pub const FADE_IN_END: f64 = 0.8;

/// CSS transition the canvas element carries for opacity changes.
pub const OPACITY_TRANSITION: &str = "opacity 1.5s ease-out";

// ── Glow ────────────────────────────────────────────────────────

/// Radial gradient stops for the cursor glow, from core to rim.
pub const GLOW_STOPS: [(f32, &str); 5] = [
    (0.0, "rgba(255, 150, 50, 1)"),
    (0.25, "rgba(255, 120, 40, 0.7)"),
    (0.5, "rgba(255, 80, 35, 0.4)"),
    (0.75, "rgba(255, 50, 30, 0.2)"),
    (1.0, "rgba(255, 30, 30, 0.12)"),
];

/// Stroke width for grid lines.
pub const LINE_WIDTH_PX: f64 = 1.0;
