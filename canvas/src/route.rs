//! Orthogonal connection routing.
//!
//! Produces Manhattan paths (horizontal and vertical segments only) between
//! two ports. The decision table, first match wins:
//!
//! | Case | Path |
//! |------|------|
//! | explicit waypoints | `start, waypoints.., end` |
//! | same-axis ports within [`ALIGN_TOLERANCE`] | `start, end` |
//! | perpendicular ports | `start, corner, end` |
//! | parallel, not aligned | `start, out1, jog1, jog2, out2, end` |
//!
//! Hit-testing and rendering both consume [`route`], so the path shape here
//! is the single source of truth for where a connection is.

#[cfg(test)]
#[path = "route_test.rs"]
mod route_test;

use crate::consts::{ALIGN_TOLERANCE, ROUTE_OFFSET};
use crate::doc::Port;
use crate::geom::Point;

/// One end of a route: where it attaches and which way it faces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    pub pos: Point,
    pub port: Port,
}

impl Anchor {
    #[must_use]
    pub fn new(pos: Point, port: Port) -> Self {
        Self { pos, port }
    }

    /// The point [`ROUTE_OFFSET`] units out along the port's facing direction.
    fn stepped_out(self) -> Point {
        let (dx, dy) = self.port.direction();
        self.pos.offset(dx * ROUTE_OFFSET, dy * ROUTE_OFFSET)
    }
}

/// Compute the path from `start` to `end`. Always returns at least two points.
#[must_use]
pub fn route(start: Anchor, end: Anchor, waypoints: &[Point]) -> Vec<Point> {
    if !waypoints.is_empty() {
        let mut path = Vec::with_capacity(waypoints.len() + 2);
        path.push(start.pos);
        path.extend_from_slice(waypoints);
        path.push(end.pos);
        return path;
    }

    let start_h = start.port.is_horizontal();
    let end_h = end.port.is_horizontal();

    if start_h && end_h && (start.pos.y - end.pos.y).abs() < ALIGN_TOLERANCE {
        return vec![start.pos, end.pos];
    }
    if !start_h && !end_h && (start.pos.x - end.pos.x).abs() < ALIGN_TOLERANCE {
        return vec![start.pos, end.pos];
    }

    if start_h != end_h {
        let corner = if start_h {
            Point::new(end.pos.x, start.pos.y)
        } else {
            Point::new(start.pos.x, end.pos.y)
        };
        return vec![start.pos, corner, end.pos];
    }

    let out1 = start.stepped_out();
    let out2 = end.stepped_out();
    let (jog1, jog2) = if start_h {
        let mid_x = (out1.x + out2.x) / 2.0;
        (Point::new(mid_x, out1.y), Point::new(mid_x, out2.y))
    } else {
        let mid_y = (out1.y + out2.y) / 2.0;
        (Point::new(out1.x, mid_y), Point::new(out2.x, mid_y))
    };
    vec![start.pos, out1, jog1, jog2, out2, end.pos]
}
