//! Column-major scan for open polylines with directional disambiguation
//! (spec.md §4.4).

use crate::classify::{Direction, is_corner, is_edge, is_marker};
use crate::error::AsciiSvgError;
use crate::geometry::{MarkerKind, Path, Point, VertexKind};
use crate::grid::Grid;
use crate::scale::DimensionScale;

use super::clearer;
use super::line_walker;

/// Scans `grid` column-major (outer loop on column, inner on row) for line
/// starts, walks each to termination, and clears its non-corner cells
/// immediately so the scan never rediscovers the same line.
/// Corners are deferred into `deferred_corners` per the two-phase erasure
/// strategy (spec.md §4.6, §4.9 "Shared corners across objects").
pub fn run(
    grid: &mut Grid,
    scale: &DimensionScale,
    deferred_corners: &mut Vec<(i64, i64)>,
    max_steps: usize,
) -> Result<Vec<Path>, AsciiSvgError> {
    let mut lines = Vec::new();
    let rows = grid.row_count() as i64;
    let cols = grid.max_cols() as i64;

    for col in 0..cols {
        for row in 0..rows {
            let Some((seed, dir)) = classify_start(grid, row, col, scale) else {
                continue;
            };

            let mut path = Path::new();
            path.add_point(seed);
            let (dr, dc) = dir.delta();
            let mut steps = 0usize;
            line_walker::walk(grid, &mut path, scale, row + dr, col + dc, dir, &mut steps, max_steps)?;

            clearer::clear_object(grid, &path, deferred_corners);
            lines.push(path);
        }
    }

    Ok(lines)
}

/// Returns the seed Point and initial walk direction if `(row, col)` starts
/// a line, or `None` if it doesn't.
fn classify_start(grid: &Grid, row: i64, col: i64, scale: &DimensionScale) -> Option<(Point, Direction)> {
    let ch = grid.get(row, col);

    if is_marker(ch) {
        let dir = marker_start_direction(grid, row, col, ch)?;
        let point = Point::new(col as f64, row as f64, VertexKind::Point, scale).with_marker(MarkerKind::Inverted);
        return Some((point, dir));
    }

    let dir = match ch {
        '|' | ':' => vertical_single_dir(grid, row, col),
        '-' | '=' => horizontal_single_dir(grid, row, col),
        _ if is_corner(ch) => corner_single_dir(grid, row, col),
        _ => None,
    }?;

    let point = Point::new(col as f64, row as f64, VertexKind::Point, scale);
    Some((point, dir))
}

fn marker_start_direction(grid: &Grid, row: i64, col: i64, ch: char) -> Option<Direction> {
    match ch {
        '<' if is_edge(grid.get(row, col + 1), Some(Direction::Right)) => Some(Direction::Right),
        '^' if is_edge(grid.get(row + 1, col), Some(Direction::Down)) => Some(Direction::Down),
        '>' if is_edge(grid.get(row, col - 1), Some(Direction::Left)) => Some(Direction::Left),
        'v' if is_edge(grid.get(row - 1, col), Some(Direction::Up)) => Some(Direction::Up),
        _ => None,
    }
}

fn vertically_edgy(c: char) -> bool {
    is_edge(c, Some(Direction::Up)) || is_corner(c)
}

fn horizontally_edgy(c: char) -> bool {
    is_edge(c, Some(Direction::Left)) || is_corner(c)
}

/// Exactly one of north/south is vertically edgy, the other is not.
fn vertical_single_dir(grid: &Grid, row: i64, col: i64) -> Option<Direction> {
    let north = vertically_edgy(grid.get(row - 1, col));
    let south = vertically_edgy(grid.get(row + 1, col));
    match (north, south) {
        (false, true) => Some(Direction::Down),
        (true, false) => Some(Direction::Up),
        _ => None,
    }
}

/// Exactly one of east/west is horizontally edgy, the other is not.
fn horizontal_single_dir(grid: &Grid, row: i64, col: i64) -> Option<Direction> {
    let west = horizontally_edgy(grid.get(row, col - 1));
    let east = horizontally_edgy(grid.get(row, col + 1));
    match (west, east) {
        (false, true) => Some(Direction::Right),
        (true, false) => Some(Direction::Left),
        _ => None,
    }
}

/// A corner may start a line along whichever single axis has exactly one
/// edgy neighbor; if both axes qualify at once it's an ambiguous junction
/// and is excluded, per spec.md §4.4.
fn corner_single_dir(grid: &Grid, row: i64, col: i64) -> Option<Direction> {
    let v = vertical_single_dir(grid, row, col);
    let h = horizontal_single_dir(grid, row, col);
    match (v, h) {
        (Some(d), None) => Some(d),
        (None, Some(d)) => Some(d),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_lines(text: &str) -> Vec<Path> {
        let mut grid = Grid::parse(text);
        let scale = DimensionScale::default();
        let mut deferred = Vec::new();
        run(&mut grid, &scale, &mut deferred, 10_000).unwrap()
    }

    #[test]
    fn horizontal_arrow() {
        let lines = run_lines("--->");
        assert_eq!(lines.len(), 1);
        let pts = lines[0].points();
        assert_eq!(pts.len(), 2);
        assert_eq!((pts[0].grid_x, pts[0].grid_y), (0.0, 0.0));
        assert_eq!((pts[1].grid_x, pts[1].grid_y), (3.0, 0.0));
        assert_eq!(pts[1].marker, Some(MarkerKind::Standard));
    }

    #[test]
    fn line_clearing_prevents_redetection() {
        let lines = run_lines("--->\n--->");
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn seed_point_honors_non_default_scale() {
        let scale = DimensionScale { x_scale: 2.0, y_scale: 2.0 };
        let mut grid = Grid::parse("  --->");
        let mut deferred = Vec::new();
        let lines = run(&mut grid, &scale, &mut deferred, 10_000).unwrap();
        let seed = lines[0].points()[0];
        assert_eq!((seed.x, seed.y), (4.0, 0.0));
    }
}
