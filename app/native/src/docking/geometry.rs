//! Geometric primitives for the docking engine.
//!
//! This module defines the `Point` and `Rect` types every docking decision is
//! computed from. All coordinates are workspace-local pixels stored as `f64`,
//! with the origin at the top-left corner and the y axis growing downward.

use serde::{Deserialize, Serialize};

// ============================================================================
// Point
// ============================================================================

/// A point in 2D space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self { Self { x, y } }

    /// Returns the Euclidean distance to another point.
    #[must_use]
    pub fn distance_to(&self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

// ============================================================================
// Rect
// ============================================================================

/// A rectangle defined by origin point and size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// X coordinate of the origin (top-left corner).
    pub x: f64,
    /// Y coordinate of the origin (top-left corner).
    pub y: f64,
    /// Width of the rectangle.
    pub width: f64,
    /// Height of the rectangle.
    pub height: f64,
}

impl Rect {
    /// Creates a new rectangle.
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Returns the x coordinate of the right edge.
    #[must_use]
    pub fn right(&self) -> f64 { self.x + self.width }

    /// Returns the y coordinate of the bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f64 { self.y + self.height }

    /// Returns the center point of the rectangle.
    #[must_use]
    pub fn center(&self) -> Point {
        Point {
            x: self.x + self.width / 2.0,
            y: self.y + self.height / 2.0,
        }
    }

    /// Returns the area of the rectangle.
    #[must_use]
    pub fn area(&self) -> f64 { self.width * self.height }

    /// Returns whether a point is inside the rectangle.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.right()
            && point.y >= self.y
            && point.y <= self.bottom()
    }

    /// Returns whether this rectangle fully contains another.
    #[must_use]
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Returns whether this rectangle intersects another.
    ///
    /// Touching edges do not count as an intersection.
    #[must_use]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// Returns the intersection of this rectangle with another, if any.
    #[must_use]
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        if !self.intersects(other) {
            return None;
        }

        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        Some(Rect::new(x, y, right - x, bottom - y))
    }

    /// Returns the overlapping area between this rectangle and another.
    ///
    /// Returns `0.0` when the rectangles do not intersect.
    #[must_use]
    pub fn overlap_area(&self, other: &Rect) -> f64 {
        self.intersection(other).map_or(0.0, |r| r.area())
    }

    /// Returns the fraction of this rectangle's own area covered by another.
    ///
    /// Returns `0.0` for degenerate (zero-area) rectangles.
    #[must_use]
    pub fn coverage_by(&self, other: &Rect) -> f64 {
        let area = self.area();
        if area <= 0.0 {
            return 0.0;
        }
        self.overlap_area(other) / area
    }

    /// Returns the distance between this rectangle's center and another's.
    #[must_use]
    pub fn center_distance(&self, other: &Rect) -> f64 {
        self.center().distance_to(other.center())
    }

    /// Returns whether the vertical spans of two rectangles overlap.
    ///
    /// Touching spans (one ending exactly where the other begins) do not
    /// count as overlap, which keeps diagonally adjacent windows from
    /// producing side-dock candidates.
    #[must_use]
    pub fn vertical_span_overlaps(&self, other: &Rect) -> bool {
        self.y < other.bottom() && self.bottom() > other.y
    }

    /// Returns whether the horizontal spans of two rectangles overlap.
    #[must_use]
    pub fn horizontal_span_overlaps(&self, other: &Rect) -> bool {
        self.x < other.right() && self.right() > other.x
    }
}

// ============================================================================
// Tests
// ============================================================================
