//! Path: an ordered sequence of Points plus a closure flag and options.

use super::point::Point;
use crate::options::Options;

/// Result of [`Path::add_point`], distinguishing an ordinary append from the
/// two special cases spec.md's invariants call out by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// The point was appended.
    Added,
    /// The point duplicated a non-initial vertex already in the path; the
    /// path is unchanged.
    Dedup,
    /// The point coincided with the path's first vertex; CLOSED was set and
    /// the point was *not* appended (closed paths store the boundary once).
    Closed,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    points: Vec<Point>,
    closed: bool,
    options: Options,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }

    /// Adds `point` to the path, applying the invariants from spec.md §3:
    /// marker points are appended unconditionally; a point equal to the
    /// first vertex closes the path instead of appending; any other
    /// duplicate of an existing vertex is a no-op.
    pub fn add_point(&mut self, point: Point) -> AddOutcome {
        if point.marker.is_some() {
            self.points.push(point);
            return AddOutcome::Added;
        }
        if let Some(first) = self.points.first() {
            if point.same_cell(first) {
                self.closed = true;
                return AddOutcome::Closed;
            }
        }
        if self.points.iter().skip(1).any(|q| q.same_cell(&point)) {
            return AddOutcome::Dedup;
        }
        self.points.push(point);
        AddOutcome::Added
    }

    /// Removes the last vertex, used by WallFollower/LineWalker to back out
    /// a corner it tentatively added but could not extend from.
    pub fn pop(&mut self) -> Option<Point> {
        self.points.pop()
    }

    /// Two boxes are equal iff they have the same number of vertices and
    /// every vertex of one matches some vertex of the other by grid
    /// coordinate (spec.md §4.2).
    pub fn same_polygon(&self, other: &Path) -> bool {
        if self.points.len() != other.points.len() {
            return false;
        }
        self.points
            .iter()
            .all(|p| other.points.iter().any(|q| p.same_cell(q)))
    }
}

/// Even-odd point-in-polygon test (spec.md §4.8), evaluated over scaled SVG
/// coordinates. Only meaningful for closed paths.
///
/// Each edge is treated as including its lower endpoint and excluding its
/// upper one, so that an edge shared by two adjacent boxes is counted by
/// exactly one of them.
pub fn point_in_polygon(path: &Path, x: f64, y: f64) -> bool {
    let verts = path.points();
    let n = verts.len();
    if n < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (xi, yi) = (verts[i].x, verts[i].y);
        let (xj, yj) = (verts[j].x, verts[j].y);
        if (yi > y) != (yj > y) {
            let x_intercept = (xj - xi) * (y - yi) / (yj - yi) + xi;
            if x < x_intercept {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}
