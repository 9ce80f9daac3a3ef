//! Scans for corner starts, invokes the WallFollower, and deduplicates
//! closed candidates into the accepted set of boxes (spec.md §4.2).

use crate::classify::is_corner;
use crate::command_table::CommandTable;
use crate::error::AsciiSvgError;
use crate::geometry::{Path, Point, VertexKind};
use crate::grid::Grid;
use crate::scale::DimensionScale;

use super::wall_follower;

/// Scans `grid` row-major, column-major for corner characters that start a
/// closed polygon, accepting only geometrically distinct boxes. Accepted
/// boxes have their `[N]` option reference (if present) resolved and
/// blanked from the grid.
pub fn run(
    grid: &mut Grid,
    scale: &DimensionScale,
    command_table: &CommandTable,
    max_steps: usize,
) -> Result<Vec<Path>, AsciiSvgError> {
    let mut accepted: Vec<Path> = Vec::new();
    let rows = grid.row_count() as i64;
    let cols = grid.max_cols() as i64;

    for row in 0..rows {
        for col in 0..cols {
            let ch = grid.get(row, col);
            if !is_corner(ch) {
                continue;
            }

            let mut path = Path::new();
            path.add_point(Point::new(col as f64, row as f64, VertexKind::from_corner_char(ch), scale));

            if wall_follower::follow(grid, &mut path, scale, row, col + 1, max_steps)? {
                if accepted.iter().any(|existing| existing.same_polygon(&path)) {
                    continue;
                }
                resolve_option_reference(grid, &mut path, row, col, command_table);
                accepted.push(path);
            }
        }
    }

    Ok(accepted)
}

/// At `(topRow+1, topLeftCol+1)`: `[` decimal-digits `]`. On a known key,
/// merges the referenced JSON into the box's options and blanks the
/// `[...]` text in place (spec.md §4.2, §6).
fn resolve_option_reference(grid: &mut Grid, path: &mut Path, top_row: i64, top_col: i64, table: &CommandTable) {
    let ref_row = top_row + 1;
    let open = top_col + 1;
    if grid.get(ref_row, open) != '[' {
        return;
    }

    let mut col = open + 1;
    let mut digits = String::new();
    while grid.get(ref_row, col).is_ascii_digit() {
        digits.push(grid.get(ref_row, col));
        col += 1;
    }
    if grid.get(ref_row, col) != ']' {
        return;
    }
    let close = col;

    if let Some(value) = table.get(&digits) {
        path.options_mut().merge_json(value);
        grid.blank_range(ref_row, open, close - open + 1);
    }
}
