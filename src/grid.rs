//! Grid geometry: which lines exist this frame and where their sampled
//! points land after parallax and distortion.
//!
//! Horizontal lines scroll with the page (parallax); vertical lines keep
//! their x but their sampled y values shift with the same offset. A line
//! whose shifted coordinate sits on or outside the viewport edge is a
//! perimeter line and stays flat.

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;

use crate::field::DistortionField;
use crate::geometry::{Point, Viewport};

/// Line orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Spacing, sampling and parallax inputs for [`build`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    pub spacing: f64,
    pub step: f64,
    pub parallax_factor: f64,
}

/// One open polyline of the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct GridLine {
    pub orientation: Orientation,
    /// y for horizontal lines (after parallax), x for vertical lines.
    pub coord: f64,
    /// On or outside the viewport edge; never distorted.
    pub perimeter: bool,
    pub points: Vec<Point>,
}

/// All lines for one frame, grouped so each group strokes as one path.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Grid {
    pub horizontal: Vec<GridLine>,
    pub vertical: Vec<GridLine>,
}

impl Grid {
    /// Total number of lines in both groups.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.horizontal.len() + self.vertical.len()
    }
}

/// Vertical shift for the current scroll offset: `-(scroll * factor) mod spacing`.
///
/// Uses truncated remainder, so a non-negative scroll yields a value in
/// `(-spacing, 0]`.
#[must_use]
pub fn parallax_offset(scroll_y: f64, factor: f64, spacing: f64) -> f64 {
    -(scroll_y * factor) % spacing
}

/// Whether a line at `coord` lies on or beyond the `[0, extent]` edges.
#[must_use]
pub fn is_perimeter(coord: f64, extent: f64) -> bool {
    coord <= 0.0 || coord >= extent
}

/// Positions `start, start + step, ...` up to and including `end`.
///
/// Computed by index rather than accumulation so long lines do not drift.
fn stepped(start: f64, end: f64, step: f64) -> impl Iterator<Item = f64> {
    (0_u32..)
        .map(move |i| start + f64::from(i) * step)
        .take_while(move |v| *v <= end)
}

/// Generate the grid for one frame.
#[must_use]
pub fn build(viewport: Viewport, scroll_y: f64, cursor: Point, layout: GridLayout, field: DistortionField) -> Grid {
    let GridLayout { spacing, step, parallax_factor } = layout;
    let offset = parallax_offset(scroll_y, parallax_factor, spacing);
    let top = -spacing;
    let bottom = viewport.height + spacing;

    let displace = |sample: Point, perimeter: bool| {
        if perimeter { sample } else { field.apply(sample, cursor) }
    };

    let horizontal = stepped(top, bottom, spacing)
        .map(|base| base + offset)
        .filter(|y| (top..=bottom).contains(y))
        .map(|y| {
            let perimeter = is_perimeter(y, viewport.height);
            let points = stepped(0.0, viewport.width, step)
                .map(|x| displace(Point::new(x, y), perimeter))
                .collect();
            GridLine { orientation: Orientation::Horizontal, coord: y, perimeter, points }
        })
        .collect();

    let vertical = stepped(0.0, viewport.width, spacing)
        .map(|x| {
            let perimeter = is_perimeter(x, viewport.width);
            let points = stepped(top, bottom, step)
                .map(|base| displace(Point::new(x, base + offset), perimeter))
                .collect();
            GridLine { orientation: Orientation::Vertical, coord: x, perimeter, points }
        })
        .collect();

    Grid { horizontal, vertical }
}
