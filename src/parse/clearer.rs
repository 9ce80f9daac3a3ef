//! Two-phase cell erasure: edge and marker cells belonging to an accepted
//! object are blanked immediately; corner cells are deferred until every
//! box and line has been parsed, since two adjacent objects may legitimately
//! share a corner cell (spec.md §4.6).

use crate::classify::is_corner;
use crate::geometry::Path;
use crate::grid::Grid;

/// Blanks the non-corner cells of every edge in `path`, and records each
/// vertex that currently sits on a corner character into `deferred_corners`
/// for the later [`blank_deferred`] pass.
pub fn clear_object(grid: &mut Grid, path: &Path, deferred_corners: &mut Vec<(i64, i64)>) {
    let pts = path.points();
    if pts.len() < 2 {
        return;
    }
    let n = pts.len();
    let edges = if path.is_closed() { n } else { n - 1 };

    for i in 0..edges {
        let a = &pts[i];
        let b = &pts[(i + 1) % n];
        clear_segment(
            grid,
            (a.grid_y as i64, a.grid_x as i64),
            (b.grid_y as i64, b.grid_x as i64),
            deferred_corners,
        );
    }
}

/// Blanks every deferred corner cell. Safe to call with duplicate entries.
pub fn blank_deferred(grid: &mut Grid, deferred_corners: &[(i64, i64)]) {
    for &(row, col) in deferred_corners {
        grid.blank(row, col);
    }
}

fn clear_segment(grid: &mut Grid, a: (i64, i64), b: (i64, i64), deferred_corners: &mut Vec<(i64, i64)>) {
    let dr = (b.0 - a.0).signum();
    let dc = (b.1 - a.1).signum();

    let mut cell = a;
    loop {
        if is_corner(grid.get(cell.0, cell.1)) {
            deferred_corners.push(cell);
        } else {
            grid.blank(cell.0, cell.1);
        }
        if cell == b {
            break;
        }
        cell = (cell.0 + dr, cell.1 + dc);
    }
}
