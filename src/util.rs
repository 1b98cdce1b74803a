//! Geometry primitives shared by shapes, the interaction controller and export.
//!
//! Coordinates are integer canvas pixels, matching the persisted text format.

/// A point on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle (origin + extent).
///
/// Width and height may be zero: the bounding box of an axis-aligned line is a
/// degenerate rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Builds a rectangle spanning two arbitrary corners.
    pub fn spanning(a: Point, b: Point) -> Self {
        let min_x = a.x.min(b.x);
        let min_y = a.y.min(b.y);
        let max_x = a.x.max(b.x);
        let max_y = a.y.max(b.y);
        Self::new(
            min_x,
            min_y,
            max_x.saturating_sub(min_x),
            max_y.saturating_sub(min_y),
        )
    }

    /// Far corner X (exclusive edge).
    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    /// Far corner Y (exclusive edge).
    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// Returns true if rectangle has a positive area.
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    let dx = a.x as f64 - b.x as f64;
    let dy = a.y as f64 - b.y as f64;
    (dx * dx + dy * dy).sqrt()
}

/// Circle radius defined by a center and a point on the rim.
///
/// The distance is truncated toward zero, so the result is never negative.
pub fn radius_between(center: Point, edge: Point) -> i32 {
    // `as` saturates for values beyond i32::MAX
    distance(center, edge) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spanning_normalises_corner_order() {
        let rect = Rect::spanning(Point::new(30, 5), Point::new(10, 25));
        assert_eq!(rect, Rect::new(10, 5, 20, 20));
        assert_eq!(rect.right(), 30);
        assert_eq!(rect.bottom(), 25);
    }

    #[test]
    fn spanning_axis_aligned_points_is_degenerate() {
        let rect = Rect::spanning(Point::new(0, 7), Point::new(12, 7));
        assert_eq!(rect.height, 0);
        assert!(!rect.is_valid());
    }

    #[test]
    fn radius_truncates_toward_zero() {
        // sqrt(2) * 10 = 14.14...
        assert_eq!(radius_between(Point::new(0, 0), Point::new(10, 10)), 14);
        // sqrt(9 + 16) = 5 exactly
        assert_eq!(radius_between(Point::new(1, 1), Point::new(4, 5)), 5);
        // 0.999 -> 0, never rounds up
        assert_eq!(radius_between(Point::new(3, 3), Point::new(3, 3)), 0);
    }

    #[test]
    fn radius_is_never_negative() {
        let points = [
            (Point::new(-50, -50), Point::new(50, 50)),
            (Point::new(100, 0), Point::new(-100, 0)),
            (Point::new(i32::MIN, 0), Point::new(i32::MAX, 0)),
        ];
        for (center, edge) in points {
            assert!(radius_between(center, edge) >= 0);
        }
    }
}
