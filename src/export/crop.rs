//! Tight framing of exported images around the drawn content.

use crate::draw::Shape;
use crate::util::Rect;

/// Minimal rectangle covering every shape, clamped to the canvas.
///
/// Returns `None` ("no crop", export the full canvas) when there are no shapes.
/// The origin is clamped to be non-negative and the far corner to the canvas
/// size, so the result may be degenerate when content lies on or beyond an edge.
pub fn compute_crop_rect<'a>(
    shapes: impl IntoIterator<Item = &'a Shape>,
    canvas_width: i32,
    canvas_height: i32,
) -> Option<Rect> {
    let mut shapes = shapes.into_iter().peekable();
    shapes.peek()?;

    let mut x_min = canvas_width;
    let mut y_min = canvas_height;
    let mut x_max = 0;
    let mut y_max = 0;
    for shape in shapes {
        let bounds = shape.bounding_box();
        x_min = x_min.min(bounds.x);
        y_min = y_min.min(bounds.y);
        x_max = x_max.max(bounds.right());
        y_max = y_max.max(bounds.bottom());
    }

    let x0 = x_min.max(0);
    let y0 = y_min.max(0);
    let x1 = x_max.min(canvas_width);
    let y1 = y_max.min(canvas_height);
    Some(Rect::new(x0, y0, (x1 - x0).max(0), (y1 - y0).max(0)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::ShapeNamer;
    use crate::draw::color::{BLACK, WHITE};
    use crate::util::Point;

    #[test]
    fn empty_document_means_no_crop() {
        let shapes: Vec<Shape> = Vec::new();
        assert_eq!(compute_crop_rect(&shapes, 100, 100), None);
    }

    #[test]
    fn single_circle_is_framed_exactly() {
        let mut namer = ShapeNamer::new();
        let shapes = vec![Shape::circle(&mut namer, Point::new(50, 50), 10, BLACK)];
        assert_eq!(
            compute_crop_rect(&shapes, 100, 100),
            Some(Rect::new(40, 40, 20, 20))
        );
    }

    #[test]
    fn union_covers_all_shapes() {
        let mut namer = ShapeNamer::new();
        let shapes = vec![
            Shape::line(&mut namer, Point::new(10, 70), Point::new(30, 60), BLACK),
            Shape::filled_circle(&mut namer, Point::new(60, 20), 5, BLACK, WHITE),
        ];
        assert_eq!(
            compute_crop_rect(&shapes, 200, 200),
            Some(Rect::new(10, 15, 55, 55))
        );
    }

    #[test]
    fn content_past_edges_is_clamped_to_canvas() {
        let mut namer = ShapeNamer::new();
        let shapes = vec![
            Shape::circle(&mut namer, Point::new(5, 5), 20, BLACK),
            Shape::line(&mut namer, Point::new(90, 90), Point::new(150, 130), BLACK),
        ];
        assert_eq!(
            compute_crop_rect(&shapes, 100, 120),
            Some(Rect::new(0, 0, 100, 120))
        );
    }

    #[test]
    fn axis_aligned_line_gives_degenerate_rect() {
        let mut namer = ShapeNamer::new();
        let shapes = vec![Shape::line(
            &mut namer,
            Point::new(10, 40),
            Point::new(60, 40),
            BLACK,
        )];
        assert_eq!(
            compute_crop_rect(&shapes, 100, 100),
            Some(Rect::new(10, 40, 50, 0))
        );
    }
}
