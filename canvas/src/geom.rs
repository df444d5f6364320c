//! Pure geometry: points, axis-aligned rectangles, and the distance tests
//! used by hit-testing.
//!
//! Every threshold passed to the `near_*` helpers is a world-unit radius at
//! zoom 1.0. The helpers divide it by the current zoom so the apparent
//! on-screen pick radius stays constant while zooming.

#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use serde::{Deserialize, Serialize};

/// A point in either screen or world space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance_to(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    #[must_use]
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self { x: self.x + dx, y: self.y + dy }
    }

    /// Component-wise `self - other`.
    #[must_use]
    pub fn delta_from(self, other: Point) -> Self {
        Self { x: self.x - other.x, y: self.y - other.y }
    }
}

/// Axis-aligned rectangle stored as two corners with `x1 <= x2` and `y1 <= y2`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Rect {
    /// Build a rectangle from two arbitrary corners, normalizing the order.
    #[must_use]
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self { x1: a.x.min(b.x), y1: a.y.min(b.y), x2: a.x.max(b.x), y2: a.y.max(b.y) }
    }

    /// Build a rectangle of `width` x `height` centered on `center`.
    #[must_use]
    pub fn from_center(center: Point, width: f64, height: f64) -> Self {
        let hw = width / 2.0;
        let hh = height / 2.0;
        Self { x1: center.x - hw, y1: center.y - hh, x2: center.x + hw, y2: center.y + hh }
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.x2 - self.x1
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.y2 - self.y1
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new((self.x1 + self.x2) / 2.0, (self.y1 + self.y2) / 2.0)
    }

    /// Inclusive containment test.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        point_in_rect(p, self)
    }

    /// Smallest rectangle covering both `self` and `other`.
    #[must_use]
    pub fn union(&self, other: &Rect) -> Self {
        Self {
            x1: self.x1.min(other.x1),
            y1: self.y1.min(other.y1),
            x2: self.x2.max(other.x2),
            y2: self.y2.max(other.y2),
        }
    }

    /// Grow the rectangle outward by `margin` on every side.
    #[must_use]
    pub fn expand(&self, margin: f64) -> Self {
        Self { x1: self.x1 - margin, y1: self.y1 - margin, x2: self.x2 + margin, y2: self.y2 + margin }
    }

    #[must_use]
    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        Self { x1: self.x1 + dx, y1: self.y1 + dy, x2: self.x2 + dx, y2: self.y2 + dy }
    }
}

/// Inclusive point-in-rectangle test.
#[must_use]
pub fn point_in_rect(p: Point, r: &Rect) -> bool {
    p.x >= r.x1 && p.x <= r.x2 && p.y >= r.y1 && p.y <= r.y2
}

/// Shortest distance from `p` to the segment `a`–`b`.
///
/// Projects `p` onto the segment's line and clamps the projection parameter to
/// `[0, 1]`. A zero-length segment degrades to point distance.
#[must_use]
pub fn distance_to_segment(p: Point, a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len_sq = dx * dx + dy * dy;
    if len_sq <= f64::EPSILON {
        return p.distance_to(a);
    }
    let t = (((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq).clamp(0.0, 1.0);
    p.distance_to(Point::new(a.x + t * dx, a.y + t * dy))
}

/// Convert a zoom-1.0 pick radius into the world radius at `zoom`.
#[must_use]
pub fn scaled_threshold(threshold: f64, zoom: f64) -> f64 {
    threshold / zoom
}

/// Whether `p` lies within the zoom-scaled `threshold` of `target`.
#[must_use]
pub fn near_point(p: Point, target: Point, threshold: f64, zoom: f64) -> bool {
    p.distance_to(target) <= scaled_threshold(threshold, zoom)
}

/// Whether `p` lies within the zoom-scaled `threshold` of any segment of `path`.
#[must_use]
pub fn near_polyline(p: Point, path: &[Point], threshold: f64, zoom: f64) -> bool {
    let limit = scaled_threshold(threshold, zoom);
    path.windows(2).any(|seg| distance_to_segment(p, seg[0], seg[1]) <= limit)
}
