//! The recursive right-turning traversal that extracts closed polygons
//! (spec.md §4.3).

use std::collections::{HashMap, HashSet};

use crate::classify::{Direction, is_corner, is_edge, is_marker};
use crate::error::AsciiSvgError;
use crate::geometry::{AddOutcome, Path, Point, VertexKind};
use crate::grid::Grid;
use crate::scale::DimensionScale;

type VisitBucket = HashMap<(i64, i64), HashSet<Direction>>;

/// Starting from a corner assumed to be the top-left of a candidate polygon
/// and moving initially RIGHTWARD, extends `path` (which must already
/// contain that starting corner) with a closed clockwise traversal of the
/// polygon's boundary. Returns `Ok(true)` if the path closed, `Ok(false)` if
/// the candidate was abandoned (in which case any corners this call
/// tentatively added have been popped back off).
pub fn follow(
    grid: &Grid,
    path: &mut Path,
    scale: &DimensionScale,
    start_row: i64,
    start_col: i64,
    max_steps: usize,
) -> Result<bool, AsciiSvgError> {
    let mut steps = 0usize;
    step(
        grid,
        path,
        scale,
        start_row,
        start_col,
        Direction::Right,
        VisitBucket::new(),
        1,
        &mut steps,
        max_steps,
    )
}

#[allow(clippy::too_many_arguments)]
fn step(
    grid: &Grid,
    path: &mut Path,
    scale: &DimensionScale,
    row: i64,
    col: i64,
    dir: Direction,
    mut bucket: VisitBucket,
    depth: u32,
    steps: &mut usize,
    max_steps: usize,
) -> Result<bool, AsciiSvgError> {
    *steps += 1;
    if *steps > max_steps {
        return Err(AsciiSvgError::TraversalDepthExceeded(max_steps));
    }

    // Step 1: advance while the cell ahead is an edge oriented for `dir`.
    let (dr, dc) = dir.delta();
    let (mut r, mut c) = (row, col);
    while is_edge(grid.get(r, c), Some(dir)) {
        r += dr;
        c += dc;
        *steps += 1;
        if *steps > max_steps {
            return Err(AsciiSvgError::TraversalDepthExceeded(max_steps));
        }
    }

    // Step 2: cycle detection — a corner visited once in this chain is never
    // revisited.
    let key = (r, c);
    if bucket.contains_key(&key) {
        return Ok(false);
    }

    // Step 3: classify the stopping cell.
    let ch = grid.get(r, c);
    if is_marker(ch) {
        return Ok(false);
    }
    if !is_corner(ch) {
        return Ok(false);
    }

    // Step 4: add the corner.
    let kind = VertexKind::from_corner_char(ch);
    let point = Point::new(c as f64, r as f64, kind, scale);
    match path.add_point(point) {
        AddOutcome::Closed => return Ok(true),
        AddOutcome::Dedup => return Ok(false),
        AddOutcome::Added => {}
    }

    // Step 5: depth-1 "double-dot" retry — a '.' directly above another '.'
    // is not really a turning corner; back it out and keep moving right
    // with depth reset, so the first-turn-required check still applies.
    if depth <= 1 && ch == '.' && grid.get(r + 1, c) == '.' {
        path.pop();
        return step(grid, path, scale, r, c + 1, dir, bucket, 0, steps, max_steps);
    }

    // Step 6: always try the right turn first.
    let right_dir = dir.turn_right();
    match try_direction(grid, path, scale, r, c, ch, right_dir, &mut bucket, depth, steps, max_steps)? {
        Some(true) => return Ok(true),
        Some(false) => {}
        None => {
            // Right turn geometrically impossible: at the first turn this
            // rejects the whole candidate outright.
            if depth <= 1 {
                path.pop();
                return Ok(false);
            }
        }
    }

    // Step 7: fall back to the remaining directions, skipping the direct
    // reverse of the direction we entered on.
    let entry_reverse = dir.reverse();
    for candidate in [Direction::Left, Direction::Right, Direction::Up, Direction::Down] {
        if candidate == entry_reverse {
            continue;
        }
        if let Some(true) =
            try_direction(grid, path, scale, r, c, ch, candidate, &mut bucket, depth, steps, max_steps)?
        {
            return Ok(true);
        }
    }

    // Step 8: nothing closed the path from here; back out and let the
    // caller continue exploring from the prior corner.
    path.pop();
    Ok(false)
}

/// Attempts to turn in `dir` from the corner at `(row, col)`. Returns `None`
/// if the turn was never attempted (already tried from this corner, or
/// geometrically infeasible); otherwise `Some(closed)`.
#[allow(clippy::too_many_arguments)]
fn try_direction(
    grid: &Grid,
    path: &mut Path,
    scale: &DimensionScale,
    row: i64,
    col: i64,
    corner_char: char,
    dir: Direction,
    bucket: &mut VisitBucket,
    depth: u32,
    steps: &mut usize,
    max_steps: usize,
) -> Result<Option<bool>, AsciiSvgError> {
    if bucket.get(&(row, col)).is_some_and(|tried| tried.contains(&dir)) {
        return Ok(None);
    }
    if !can_turn(grid, row, col, corner_char, dir) {
        return Ok(None);
    }
    bucket.entry((row, col)).or_default().insert(dir);
    let child_bucket = bucket.clone();
    let (dr, dc) = dir.delta();
    let closed = step(
        grid,
        path,
        scale,
        row + dr,
        col + dc,
        dir,
        child_bucket,
        depth + 1,
        steps,
        max_steps,
    )?;
    Ok(Some(closed))
}

/// The neighbor in `dir` must be an edge oriented for `dir` or any corner,
/// and turning into another top/bottom run through the same curved corner
/// character is disallowed (prevents mistaking a curved top/bottom row for
/// a side).
fn can_turn(grid: &Grid, row: i64, col: i64, corner_char: char, dir: Direction) -> bool {
    let (dr, dc) = dir.delta();
    let (nr, nc) = (row + dr, col + dc);
    let neighbor = grid.get(nr, nc);
    if !(is_edge(neighbor, Some(dir)) || is_corner(neighbor)) {
        return false;
    }
    if dir.is_vertical() {
        if corner_char == '.' && neighbor == '.' {
            return false;
        }
        if corner_char == '\'' && neighbor == '\'' {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::VertexKind;

    fn run(grid_text: &str) -> Option<Path> {
        let grid = Grid::parse(grid_text);
        let scale = DimensionScale::default();
        for row in 0..grid.row_count() as i64 {
            for col in 0..grid.max_cols() as i64 {
                let ch = grid.get(row, col);
                if !is_corner(ch) {
                    continue;
                }
                let mut path = Path::new();
                path.add_point(Point::new(col as f64, row as f64, VertexKind::from_corner_char(ch), &scale));
                if follow(&grid, &mut path, &scale, row, col + 1, 10_000).unwrap() {
                    return Some(path);
                }
            }
        }
        None
    }

    #[test]
    fn simple_rectangle_closes_clockwise() {
        let path = run("+---+\n|   |\n+---+").expect("rectangle should close");
        assert!(path.is_closed());
        let pts: Vec<(f64, f64)> = path.points().iter().map(|p| (p.grid_x, p.grid_y)).collect();
        assert_eq!(pts, vec![(0.0, 0.0), (4.0, 0.0), (4.0, 2.0), (0.0, 2.0)]);
    }

    #[test]
    fn curved_corners_are_control_points() {
        let path = run(".---.\n|   |\n'---'").expect("rounded rectangle should close");
        assert!(path.points().iter().all(|p| p.is_control()));
    }

    #[test]
    fn open_shape_does_not_close() {
        assert!(run("+---+\n|   \n+---+").is_none());
    }

    #[test]
    fn depth_exceeded_reports_internal_error() {
        let grid = Grid::parse("+---+\n|   |\n+---+");
        let scale = DimensionScale::default();
        let mut path = Path::new();
        path.add_point(Point::new(0.0, 0.0, VertexKind::Point, &scale));
        let err = follow(&grid, &mut path, &scale, 0, 1, 2).unwrap_err();
        assert!(matches!(err, AsciiSvgError::TraversalDepthExceeded(2)));
    }
}
