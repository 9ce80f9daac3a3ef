//! Point: a grid coordinate paired with its scaled canvas coordinate and
//! vertex/marker flags.

use crate::scale::DimensionScale;

/// Whether a vertex is an ordinary line-to point or a Bézier control point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexKind {
    /// Rendered with a straight `L` segment (sharp `+` corners, ordinary
    /// line points).
    Point,
    /// Rendered with a quadratic Bézier at render time (curved corners
    /// `\ / . '`).
    Control,
}

/// Which end-of-line arrowhead, if any, a point carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    /// Standard orientation: `marker-*="url(#Pointer)"`.
    Standard,
    /// Inverted orientation: `marker-*="url(#iPointer)"`.
    Inverted,
}

/// A single vertex of a Path or the anchor of a Text.
///
/// Immutable after construction. A point carries exactly one [`VertexKind`]
/// and at most one [`MarkerKind`] — both invariants the original's bitset
/// representation allowed to be violated are enforced here by the type
/// itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub grid_x: f64,
    pub grid_y: f64,
    pub x: f64,
    pub y: f64,
    pub kind: VertexKind,
    pub marker: Option<MarkerKind>,
}

impl VertexKind {
    /// `+` is a sharp corner (POINT); `\ / . '` are curved corners (CONTROL).
    /// Caller is expected to have already checked `classify::is_corner`.
    pub fn from_corner_char(c: char) -> Self {
        if c == '+' { VertexKind::Point } else { VertexKind::Control }
    }
}

impl Point {
    pub fn new(grid_x: f64, grid_y: f64, kind: VertexKind, scale: &DimensionScale) -> Self {
        Self {
            grid_x,
            grid_y,
            x: scale.x(grid_x),
            y: scale.y(grid_y),
            kind,
            marker: None,
        }
    }

    pub fn with_marker(mut self, marker: MarkerKind) -> Self {
        self.marker = Some(marker);
        self
    }

    /// Two points are the "same vertex" if their grid coordinates match,
    /// regardless of kind or marker — this is the equality Path::add_point
    /// uses for dedup/closure detection.
    pub fn same_cell(&self, other: &Point) -> bool {
        self.grid_x == other.grid_x && self.grid_y == other.grid_y
    }

    pub fn is_control(&self) -> bool {
        self.kind == VertexKind::Control
    }
}
