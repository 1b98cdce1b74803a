//! Shape definitions for the drawing document.

use super::color::Color;
use crate::util::{self, Point, Rect};
use std::fmt;
use std::hash::{Hash, Hasher};

/// The three kinds of shape the editor can create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Line,
    Circle,
    FilledCircle,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Line, ShapeKind::Circle, ShapeKind::FilledCircle];

    /// Human readable kind name, used as the prefix of display names.
    pub fn label(self) -> &'static str {
        match self {
            ShapeKind::Line => "Line",
            ShapeKind::Circle => "Circle",
            ShapeKind::FilledCircle => "Filled circle",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Stable display name of a shape: kind plus a per-kind serial number.
///
/// Assigned once at construction and used as the shape's identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeName {
    kind: ShapeKind,
    serial: u32,
}

impl ShapeName {
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn serial(&self) -> u32 {
        self.serial
    }
}

impl fmt::Display for ShapeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind.label(), self.serial)
    }
}

/// Allocates display names with one monotonic counter per shape kind.
///
/// Owned by a [`DrawingDocument`](crate::document::DrawingDocument) rather than
/// held in global state, so naming is deterministic per document.
#[derive(Debug, Clone, Default)]
pub struct ShapeNamer {
    lines: u32,
    circles: u32,
    filled_circles: u32,
}

impl ShapeNamer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the next unused name for `kind`.
    pub fn next(&mut self, kind: ShapeKind) -> ShapeName {
        let counter = self.counter_mut(kind);
        *counter += 1;
        ShapeName {
            kind,
            serial: *counter,
        }
    }

    /// Marks `name` as taken so later allocations for its kind come after it.
    pub(crate) fn reserve(&mut self, name: ShapeName) {
        let counter = self.counter_mut(name.kind);
        *counter = (*counter).max(name.serial);
    }

    fn counter_mut(&mut self, kind: ShapeKind) -> &mut u32 {
        match kind {
            ShapeKind::Line => &mut self.lines,
            ShapeKind::Circle => &mut self.circles,
            ShapeKind::FilledCircle => &mut self.filled_circles,
        }
    }
}

/// Variant-specific geometry and colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Geometry {
    /// Straight segment between two points
    Line {
        start: Point,
        end: Point,
        color: Color,
    },
    /// Circle outline
    Circle {
        center: Point,
        /// Always >= 0
        radius: i32,
        color: Color,
    },
    /// Circle with an interior fill drawn beneath the outline
    FilledCircle {
        center: Point,
        /// Always >= 0
        radius: i32,
        color: Color,
        fill: Color,
    },
}

impl Geometry {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Geometry::Line { .. } => ShapeKind::Line,
            Geometry::Circle { .. } => ShapeKind::Circle,
            Geometry::FilledCircle { .. } => ShapeKind::FilledCircle,
        }
    }

    /// Clamps any negative radius to zero.
    fn normalised(self) -> Self {
        match self {
            Geometry::Circle {
                center,
                radius,
                color,
            } => Geometry::Circle {
                center,
                radius: radius.max(0),
                color,
            },
            Geometry::FilledCircle {
                center,
                radius,
                color,
                fill,
            } => Geometry::FilledCircle {
                center,
                radius: radius.max(0),
                color,
                fill,
            },
            line => line,
        }
    }
}

/// A drawable vector primitive with a stable identity.
///
/// Equality and hashing use only the display name, so a shape keeps its
/// identity while its geometry is edited.
#[derive(Debug, Clone)]
pub struct Shape {
    name: ShapeName,
    geometry: Geometry,
}

impl Shape {
    /// Creates a shape, allocating its name from `namer`.
    pub fn new(namer: &mut ShapeNamer, geometry: Geometry) -> Self {
        Self {
            name: namer.next(geometry.kind()),
            geometry: geometry.normalised(),
        }
    }

    pub fn line(namer: &mut ShapeNamer, start: Point, end: Point, color: Color) -> Self {
        Self::new(namer, Geometry::Line { start, end, color })
    }

    pub fn circle(namer: &mut ShapeNamer, center: Point, radius: i32, color: Color) -> Self {
        Self::new(
            namer,
            Geometry::Circle {
                center,
                radius,
                color,
            },
        )
    }

    /// Circle whose rim passes through `edge`.
    pub fn circle_through(namer: &mut ShapeNamer, center: Point, edge: Point, color: Color) -> Self {
        Self::circle(namer, center, util::radius_between(center, edge), color)
    }

    pub fn filled_circle(
        namer: &mut ShapeNamer,
        center: Point,
        radius: i32,
        color: Color,
        fill: Color,
    ) -> Self {
        Self::new(
            namer,
            Geometry::FilledCircle {
                center,
                radius,
                color,
                fill,
            },
        )
    }

    /// Filled circle whose rim passes through `edge`.
    pub fn filled_circle_through(
        namer: &mut ShapeNamer,
        center: Point,
        edge: Point,
        color: Color,
        fill: Color,
    ) -> Self {
        Self::filled_circle(namer, center, util::radius_between(center, edge), color, fill)
    }

    /// Starts a shape of `kind` where both defining points are `origin`.
    ///
    /// This is the degenerate shape the interaction controller previews before
    /// the pointer moves.
    pub fn starting_at(
        namer: &mut ShapeNamer,
        kind: ShapeKind,
        origin: Point,
        stroke: Color,
        fill: Color,
    ) -> Self {
        match kind {
            ShapeKind::Line => Self::line(namer, origin, origin, stroke),
            ShapeKind::Circle => Self::circle(namer, origin, 0, stroke),
            ShapeKind::FilledCircle => Self::filled_circle(namer, origin, 0, stroke, fill),
        }
    }

    /// Replaces the identity; only a document resolving a name clash does this.
    pub(crate) fn rename(&mut self, name: ShapeName) {
        self.name = name;
    }

    pub fn name(&self) -> ShapeName {
        self.name
    }

    pub fn kind(&self) -> ShapeKind {
        self.name.kind
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Replaces the geometry, keeping the identity. The variant must not change.
    pub(crate) fn set_geometry(&mut self, geometry: Geometry) {
        debug_assert_eq!(geometry.kind(), self.kind());
        self.geometry = geometry.normalised();
    }

    /// True when both shapes have the same variant and field values,
    /// regardless of their names.
    pub fn same_content(&self, other: &Shape) -> bool {
        self.geometry == other.geometry
    }

    /// Minimal axis-aligned rectangle containing the shape.
    ///
    /// Lines span their endpoints (possibly zero width or height); circles
    /// cover `[cx - r, cy - r, 2r, 2r]`.
    pub fn bounding_box(&self) -> Rect {
        match self.geometry {
            Geometry::Line { start, end, .. } => Rect::spanning(start, end),
            Geometry::Circle { center, radius, .. }
            | Geometry::FilledCircle { center, radius, .. } => circle_bounds(center, radius),
        }
    }

    /// Reinterprets a live pointer position as the shape's free parameter.
    ///
    /// Lines move their end point; circles recompute the radius from the fixed
    /// center. Idempotent for a repeated point.
    pub fn set_second_point(&mut self, point: Point) {
        match &mut self.geometry {
            Geometry::Line { end, .. } => *end = point,
            Geometry::Circle { center, radius, .. }
            | Geometry::FilledCircle { center, radius, .. } => {
                *radius = util::radius_between(*center, point);
            }
        }
    }
}

impl PartialEq for Shape {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Shape {}

impl Hash for Shape {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.name.fmt(f)
    }
}

pub(crate) fn circle_bounds(center: Point, radius: i32) -> Rect {
    let diameter = radius.saturating_mul(2);
    Rect::new(
        center.x.saturating_sub(radius),
        center.y.saturating_sub(radius),
        diameter,
        diameter,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLACK, RED, WHITE};
    use std::collections::HashSet;

    #[test]
    fn names_count_per_kind() {
        let mut namer = ShapeNamer::new();
        let a = Shape::line(&mut namer, Point::new(0, 0), Point::new(1, 1), RED);
        let b = Shape::circle(&mut namer, Point::new(0, 0), 4, RED);
        let c = Shape::line(&mut namer, Point::new(0, 0), Point::new(2, 2), RED);
        let d = Shape::filled_circle(&mut namer, Point::new(0, 0), 4, RED, WHITE);

        assert_eq!(a.name().to_string(), "Line 1");
        assert_eq!(b.name().to_string(), "Circle 1");
        assert_eq!(c.name().to_string(), "Line 2");
        assert_eq!(d.to_string(), "Filled circle 1");
    }

    #[test]
    fn equality_follows_identity_not_content() {
        let mut namer = ShapeNamer::new();
        let a = Shape::circle(&mut namer, Point::new(5, 5), 3, BLACK);
        let b = Shape::circle(&mut namer, Point::new(5, 5), 3, BLACK);
        assert_ne!(a, b);
        assert!(a.same_content(&b));

        let mut edited = a.clone();
        edited.set_second_point(Point::new(50, 5));
        assert_eq!(edited, a);
        assert!(!edited.same_content(&a));

        let set: HashSet<Shape> = [a.clone(), edited].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn circle_through_uses_truncated_distance() {
        let mut namer = ShapeNamer::new();
        let shape = Shape::circle_through(&mut namer, Point::new(0, 0), Point::new(3, 3), RED);
        match shape.geometry() {
            Geometry::Circle { radius, .. } => assert_eq!(*radius, 4),
            other => panic!("unexpected geometry {other:?}"),
        }
    }

    #[test]
    fn negative_radius_is_clamped() {
        let mut namer = ShapeNamer::new();
        let shape = Shape::circle(&mut namer, Point::new(0, 0), -7, RED);
        assert_eq!(shape.bounding_box(), Rect::new(0, 0, 0, 0));
    }

    #[test]
    fn circle_bounding_box_is_centered_square() {
        let mut namer = ShapeNamer::new();
        let circle = Shape::circle(&mut namer, Point::new(50, 50), 10, RED);
        assert_eq!(circle.bounding_box(), Rect::new(40, 40, 20, 20));

        let filled = Shape::filled_circle(&mut namer, Point::new(50, 50), 10, RED, WHITE);
        assert_eq!(filled.bounding_box(), circle.bounding_box());
    }

    #[test]
    fn line_bounding_box_spans_endpoints() {
        let mut namer = ShapeNamer::new();
        let line = Shape::line(&mut namer, Point::new(70, 90), Point::new(50, 40), RED);
        assert_eq!(line.bounding_box(), Rect::new(50, 40, 20, 50));

        let flat = Shape::line(&mut namer, Point::new(0, 10), Point::new(30, 10), RED);
        assert_eq!(flat.bounding_box(), Rect::new(0, 10, 30, 0));
    }

    #[test]
    fn second_point_is_idempotent() {
        let mut namer = ShapeNamer::new();
        for kind in ShapeKind::ALL {
            let mut shape = Shape::starting_at(&mut namer, kind, Point::new(10, 10), RED, WHITE);
            shape.set_second_point(Point::new(13, 14));
            let once = *shape.geometry();
            shape.set_second_point(Point::new(13, 14));
            assert_eq!(*shape.geometry(), once, "{kind} changed on repeat");
        }
    }

    #[test]
    fn second_point_moves_line_end_and_circle_radius() {
        let mut namer = ShapeNamer::new();
        let mut line = Shape::starting_at(&mut namer, ShapeKind::Line, Point::new(1, 2), RED, WHITE);
        line.set_second_point(Point::new(8, 9));
        assert_eq!(
            *line.geometry(),
            Geometry::Line {
                start: Point::new(1, 2),
                end: Point::new(8, 9),
                color: RED,
            }
        );

        let mut filled =
            Shape::starting_at(&mut namer, ShapeKind::FilledCircle, Point::new(0, 0), RED, WHITE);
        filled.set_second_point(Point::new(6, 8));
        assert_eq!(
            *filled.geometry(),
            Geometry::FilledCircle {
                center: Point::new(0, 0),
                radius: 10,
                color: RED,
                fill: WHITE,
            }
        );
    }
}
