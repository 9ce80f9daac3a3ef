//! The straight-on recursive walker that extends an open Path until it
//! terminates (spec.md §4.5).

use crate::classify::{Direction, is_corner, is_edge, is_marker};
use crate::error::AsciiSvgError;
use crate::geometry::{AddOutcome, MarkerKind, Path, Point, VertexKind};
use crate::grid::Grid;
use crate::scale::DimensionScale;

/// Extends `path` from `(row, col)` moving in `dir` until the line
/// terminates at a marker, runs into open space, or a corner with no
/// further continuation.
#[allow(clippy::too_many_arguments)]
pub fn walk(
    grid: &Grid,
    path: &mut Path,
    scale: &DimensionScale,
    row: i64,
    col: i64,
    dir: Direction,
    steps: &mut usize,
    max_steps: usize,
) -> Result<(), AsciiSvgError> {
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

    let ch = grid.get(r, c);

    if is_corner(ch) {
        let kind = VertexKind::from_corner_char(ch);
        match path.add_point(Point::new(c as f64, r as f64, kind, scale)) {
            AddOutcome::Closed => {
                path.pop();
                return Ok(());
            }
            AddOutcome::Dedup => return Ok(()),
            AddOutcome::Added => {}
        }

        // (a) Straight on: the corner is cosmetic, keep going in `dir`.
        let (sr, sc) = (r + dr, c + dc);
        let straight_ch = grid.get(sr, sc);
        if is_corner(straight_ch) || is_edge(straight_ch, Some(dir)) {
            return walk(grid, path, scale, sr, sc, dir, steps, max_steps);
        }

        // (b) Otherwise bend: try UP, DOWN, RIGHT, LEFT, skipping the direct
        // reverse of the direction we arrived on.
        let reverse = dir.reverse();
        for candidate in [Direction::Up, Direction::Down, Direction::Right, Direction::Left] {
            if candidate == reverse {
                continue;
            }
            let (ndr, ndc) = candidate.delta();
            let (nr, nc) = (r + ndr, c + ndc);
            let neighbor = grid.get(nr, nc);
            if is_corner(neighbor) || is_edge(neighbor, Some(candidate)) {
                return walk(grid, path, scale, nr, nc, candidate, steps, max_steps);
            }
        }

        // No continuation: the corner is the line's natural end (e.g. a
        // stub terminating at a box corner it shares).
        Ok(())
    } else if is_marker(ch) {
        path.add_point(Point::new(c as f64, r as f64, VertexKind::Point, scale).with_marker(MarkerKind::Standard));
        Ok(())
    } else {
        // Anything else (blank, text): the line terminates in space.
        path.add_point(Point::new(c as f64, r as f64, VertexKind::Point, scale));
        Ok(())
    }
}
