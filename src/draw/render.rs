//! Cairo-based rendering functions for shapes.

use super::color::Color;
use super::shape::{Geometry, Shape};
use crate::util::Point;
use std::f64::consts::PI;

/// Fills the whole target with the canvas background.
pub fn fill_background(ctx: &cairo::Context, background: Color) {
    background.apply(ctx);
    let _ = ctx.paint(); // a failed paint leaves the surface as it was
}

/// Renders one full canvas frame.
///
/// Clears to `background`, draws `shapes` in insertion order (first shape =
/// bottom layer) and finally the in-progress `preview` shape, if any, on top.
pub fn render_canvas<'a>(
    ctx: &cairo::Context,
    background: Color,
    shapes: impl IntoIterator<Item = &'a Shape>,
    preview: Option<&Shape>,
    line_width: f64,
) {
    fill_background(ctx, background);
    render_shapes(ctx, shapes, line_width);
    if let Some(shape) = preview {
        render_shape(ctx, shape, line_width);
    }
}

/// Renders all shapes in a collection to a Cairo context, in order.
pub fn render_shapes<'a>(
    ctx: &cairo::Context,
    shapes: impl IntoIterator<Item = &'a Shape>,
    line_width: f64,
) {
    for shape in shapes {
        render_shape(ctx, shape, line_width);
    }
}

/// Renders a single shape using its own colors. Never mutates the shape.
pub fn render_shape(ctx: &cairo::Context, shape: &Shape, line_width: f64) {
    match *shape.geometry() {
        Geometry::Line { start, end, color } => render_line(ctx, start, end, color, line_width),
        Geometry::Circle {
            center,
            radius,
            color,
        } => render_circle(ctx, center, radius, color, None, line_width),
        Geometry::FilledCircle {
            center,
            radius,
            color,
            fill,
        } => render_circle(ctx, center, radius, color, Some(fill), line_width),
    }
}

/// Render a straight line
fn render_line(ctx: &cairo::Context, start: Point, end: Point, color: Color, thick: f64) {
    color.apply(ctx);
    ctx.set_line_width(thick);
    ctx.set_line_cap(cairo::LineCap::Round);

    ctx.move_to(start.x as f64, start.y as f64);
    ctx.line_to(end.x as f64, end.y as f64);
    let _ = ctx.stroke();
}

/// Render a circle outline, with the interior filled first when `fill` is set
fn render_circle(
    ctx: &cairo::Context,
    center: Point,
    radius: i32,
    color: Color,
    fill: Option<Color>,
    thick: f64,
) {
    ctx.new_path();
    ctx.arc(center.x as f64, center.y as f64, radius as f64, 0.0, 2.0 * PI);

    if let Some(fill) = fill {
        fill.apply(ctx);
        let _ = ctx.fill_preserve();
    }

    color.apply(ctx);
    ctx.set_line_width(thick);
    let _ = ctx.stroke();
}
