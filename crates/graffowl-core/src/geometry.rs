//! Geometric primitives for diagram pages.
//!
//! This module provides the geometric types read from diagram records and
//! used to derive spatial relations between shapes.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in page space
//! - [`Size`] - Width and height dimensions
//! - [`Bounds`] - An axis-aligned rectangle defined by an origin and a size
//!
//! # Coordinate System
//!
//! Diagram pages use a screen coordinate system:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! - **Origin**: Top-left corner of the page at `(0, 0)`
//! - **X-axis**: Increases rightward
//! - **Y-axis**: Increases downward

use std::fmt;

/// A 2D point representing a position in page coordinate space.
///
/// # Examples
///
/// ```
/// # use graffowl_core::geometry::Point;
/// let p1 = Point::new(10.0, 20.0);
/// let p2 = Point::new(30.0, 40.0);
///
/// let mid = p1.midpoint(p2);
/// assert_eq!(mid.x(), 20.0);
/// assert_eq!(mid.y(), 30.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a new point with the given coordinates
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate
    pub fn x(self) -> f64 {
        self.x
    }

    /// Returns the y-coordinate
    pub fn y(self) -> f64 {
        self.y
    }

    /// Returns the point halfway between `self` and `other`
    pub fn midpoint(self, other: Point) -> Self {
        Self {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }
}

impl fmt::Display for Point {
    /// Formats the point with integer-truncated coordinates, `(x,y)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x as i64, self.y as i64)
    }
}

/// Width and height of a rectangle.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f64,
    height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn width(self) -> f64 {
        self.width
    }

    pub fn height(self) -> f64 {
        self.height
    }

    /// Returns `true` when either dimension is zero or negative
    pub fn is_empty(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// An axis-aligned rectangle given by its top-left origin and its size.
///
/// The containment and intersection tests treat a rectangle with a zero or
/// negative dimension as empty: an empty rectangle neither contains nor
/// intersects anything. Rectangles that only share an edge do not intersect.
///
/// # Examples
///
/// ```
/// # use graffowl_core::geometry::{Bounds, Point, Size};
/// let outer = Bounds::new(Point::new(0.0, 0.0), Size::new(100.0, 100.0));
/// let inner = Bounds::new(Point::new(10.0, 10.0), Size::new(20.0, 20.0));
///
/// assert!(outer.contains(&inner));
/// assert!(!inner.contains(&outer));
/// assert!(outer.intersects(&inner));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    origin: Point,
    size: Size,
}

impl Bounds {
    /// Creates new bounds from a top-left origin and a size
    pub fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Returns the top-left corner
    pub fn origin(self) -> Point {
        self.origin
    }

    /// Returns the size of the bounds
    pub fn size(self) -> Size {
        self.size
    }

    pub fn min_x(self) -> f64 {
        self.origin.x
    }

    pub fn min_y(self) -> f64 {
        self.origin.y
    }

    pub fn max_x(self) -> f64 {
        self.origin.x + self.size.width
    }

    pub fn max_y(self) -> f64 {
        self.origin.y + self.size.height
    }

    /// Returns the center point of the bounds
    pub fn center(self) -> Point {
        Point::new(
            self.origin.x + self.size.width / 2.0,
            self.origin.y + self.size.height / 2.0,
        )
    }

    /// Returns `true` when the bounds have no area
    pub fn is_empty(self) -> bool {
        self.size.is_empty()
    }

    /// Returns `true` if `other` lies entirely inside these bounds.
    ///
    /// Edges may coincide. Empty rectangles are never contained and never
    /// contain anything.
    pub fn contains(&self, other: &Bounds) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }

        other.min_x() >= self.min_x()
            && other.min_y() >= self.min_y()
            && other.max_x() <= self.max_x()
            && other.max_y() <= self.max_y()
    }

    /// Returns `true` if the interiors of the two bounds overlap.
    pub fn intersects(&self, other: &Bounds) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }

        other.max_x() > self.min_x()
            && other.max_y() > self.min_y()
            && other.min_x() < self.max_x()
            && other.min_y() < self.max_y()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: f64, y: f64, w: f64, h: f64) -> Bounds {
        Bounds::new(Point::new(x, y), Size::new(w, h))
    }

    #[test]
    fn test_point_display_truncates() {
        assert_eq!(Point::new(12.7, -3.2).to_string(), "(12,-3)");
    }

    #[test]
    fn test_bounds_edges() {
        let b = rect(10.0, 20.0, 30.0, 40.0);
        assert_eq!(b.min_x(), 10.0);
        assert_eq!(b.min_y(), 20.0);
        assert_eq!(b.max_x(), 40.0);
        assert_eq!(b.max_y(), 60.0);
        assert_eq!(b.center(), Point::new(25.0, 40.0));
    }

    #[test]
    fn test_contains_shared_edge() {
        let outer = rect(0.0, 0.0, 10.0, 10.0);
        let inner = rect(0.0, 0.0, 10.0, 5.0);
        assert!(outer.contains(&inner));
        assert!(outer.contains(&outer));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let left = rect(0.0, 0.0, 10.0, 10.0);
        let right = rect(10.0, 0.0, 10.0, 10.0);
        assert!(!left.intersects(&right));
        assert!(!right.intersects(&left));
    }

    #[test]
    fn test_empty_bounds() {
        let empty = rect(5.0, 5.0, 0.0, 10.0);
        let full = rect(0.0, 0.0, 100.0, 100.0);
        assert!(empty.is_empty());
        assert!(!full.contains(&empty));
        assert!(!empty.contains(&full));
        assert!(!full.intersects(&empty));
    }

    #[test]
    fn test_partial_overlap() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let b = rect(5.0, 5.0, 10.0, 10.0);
        assert!(a.intersects(&b));
        assert!(!a.contains(&b));
        assert!(!b.contains(&a));
    }
}
