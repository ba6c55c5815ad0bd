//! Drawing seam between the frame step and the pixels.
//!
//! [`crate::render::CanvasSurface`] is the browser implementation. Tests use a
//! recording implementation so the frame loop can run without a canvas.

use crate::error::RendererError;
use crate::geometry::{Point, Viewport};
use crate::grid::Grid;

/// Radial glow centered on the smoothed cursor; also the stroke style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glow {
    pub center: Point,
    pub radius: f64,
}

/// Everything one executed frame draws.
#[derive(Debug, Clone, Copy)]
pub struct FrameView<'a> {
    pub viewport: Viewport,
    pub grid: &'a Grid,
    pub glow: Glow,
}

/// A 2D target the renderer draws into.
pub trait Surface {
    /// Match the backing store to the viewport.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the underlying surface rejects the new size.
    fn resize(&mut self, viewport: Viewport) -> Result<(), RendererError>;

    /// Clear, then stroke the horizontal and vertical groups as one path each.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any drawing call fails; the frame is abandoned.
    fn draw(&mut self, frame: FrameView<'_>) -> Result<(), RendererError>;

    /// Write the composited opacity of the whole layer.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the style property cannot be written.
    fn set_opacity(&mut self, opacity: f64) -> Result<(), RendererError>;
}
