//! Rendering: draws a frame of the grid field to a 2D canvas context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives a read-only [`FrameView`] and produces pixels; it does not
//! mutate any renderer state.
//!
//! Fallible `Canvas2D` calls propagate `JsValue` errors internally; the
//! [`Surface`] impl converts them to [`RendererError`] at the boundary.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasGradient, CanvasRenderingContext2d, HtmlCanvasElement, Path2d};

use crate::consts::{GLOW_STOPS, LINE_WIDTH_PX, OPACITY_TRANSITION};
use crate::error::RendererError;
use crate::geometry::Viewport;
use crate::grid::GridLine;
use crate::surface::{FrameView, Glow, Surface};

/// Fixed, full-viewport, click-through layer styling.
const LAYER_STYLE: [(&str, &str); 9] = [
    ("position", "fixed"),
    ("top", "0"),
    ("left", "0"),
    ("width", "100%"),
    ("height", "100%"),
    ("pointer-events", "none"),
    ("z-index", "0"),
    ("transition", OPACITY_TRANSITION),
    ("will-change", "opacity"),
];

/// A `<canvas>` element and its 2D context.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Acquire the 2D context and apply the layer styling.
    ///
    /// # Errors
    ///
    /// Returns [`RendererError::NoContext`] if the canvas has no 2D context,
    /// or [`RendererError::Js`] if styling fails.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, RendererError> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or(RendererError::NoContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| RendererError::NoContext)?;

        let style = canvas.style();
        for (property, value) in LAYER_STYLE {
            style.set_property(property, value)?;
        }
        style.set_property("opacity", "0")?;

        Ok(Self { canvas, ctx })
    }
}

impl Surface for CanvasSurface {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn resize(&mut self, viewport: Viewport) -> Result<(), RendererError> {
        self.canvas.set_width(viewport.width.round() as u32);
        self.canvas.set_height(viewport.height.round() as u32);
        Ok(())
    }

    fn draw(&mut self, frame: FrameView<'_>) -> Result<(), RendererError> {
        draw(&self.ctx, frame)?;
        Ok(())
    }

    fn set_opacity(&mut self, opacity: f64) -> Result<(), RendererError> {
        self.canvas.style().set_property("opacity", &opacity.to_string())?;
        Ok(())
    }
}

/// Draw one frame: clear, build the glow, stroke both line groups with it.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails.
pub fn draw(ctx: &CanvasRenderingContext2d, frame: FrameView<'_>) -> Result<(), JsValue> {
    let FrameView { viewport, grid, glow } = frame;

    ctx.clear_rect(0.0, 0.0, viewport.width, viewport.height);

    ctx.set_line_width(LINE_WIDTH_PX);
    ctx.set_line_cap("round");
    ctx.set_line_join("round");
    let gradient = glow_gradient(ctx, glow)?;
    ctx.set_stroke_style_canvas_gradient(&gradient);

    ctx.stroke_with_path(&group_path(&grid.horizontal)?);
    ctx.stroke_with_path(&group_path(&grid.vertical)?);
    Ok(())
}

fn glow_gradient(ctx: &CanvasRenderingContext2d, glow: Glow) -> Result<CanvasGradient, JsValue> {
    let Glow { center, radius } = glow;
    let gradient = ctx.create_radial_gradient(center.x, center.y, 0.0, center.x, center.y, radius)?;
    for (offset, color) in GLOW_STOPS {
        gradient.add_color_stop(offset, color)?;
    }
    Ok(gradient)
}

/// One path holding every line of a group, each as its own open subpath.
fn group_path(lines: &[GridLine]) -> Result<Path2d, JsValue> {
    let path = Path2d::new()?;
    for line in lines {
        let mut points = line.points.iter();
        let Some(first) = points.next() else {
            continue;
        };
        path.move_to(first.x, first.y);
        for p in points {
            path.line_to(p.x, p.y);
        }
    }
    Ok(path)
}
