//! Converts ASCII-art diagrams — boxes, lines, arrows, and labels drawn with
//! characters like `+ - | = : . ' / \ < > ^ v` — into a single SVG document.
//!
//! The core of the crate is the grid-to-geometry extraction pipeline: a
//! constrained wall-follower recognizes closed polygons, an independent
//! line walker extracts open polylines with directional disambiguation, a
//! two-phase clearer accounts for which grid cells belong to which object,
//! and a renderer serializes the result including Bézier-curved corners and
//! two built-in custom shapes (storage cylinder, document).

pub mod classify;
pub mod command_table;
pub mod config;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod group;
pub mod options;
pub mod parse;
pub mod render;
pub mod scale;
pub mod text;

pub use config::Config;
pub use error::AsciiSvgError;

use grid::Grid;
use group::Groups;

/// Runs the full pipeline: command-table extraction, box parsing, line
/// parsing, two-phase clearing, text parsing, and rendering.
///
/// Total over well-formed UTF-8 input per spec.md §7: every `&str` produces
/// *some* SVG document. No variant of [`AsciiSvgError`] is ever returned
/// here; the `Result` exists for forward-compatibility and because the
/// lower-level pipeline stages this function calls are themselves fallible
/// (a pathological input can exceed `config.max_traversal_depth`, in which
/// case the offending candidate object is simply abandoned, not the whole
/// conversion).
pub fn ascii_to_svg(input: &str, config: &Config) -> Result<String, AsciiSvgError> {
    let (body, command_table) = command_table::extract(input);
    let mut grid = Grid::parse(&body);
    let scale = config.scale();

    let mut groups = Groups::new();
    let mut deferred_corners = Vec::new();

    let boxes = match parse::box_parser::run(&mut grid, &scale, &command_table, config.max_traversal_depth) {
        Ok(boxes) => boxes,
        Err(error::AsciiSvgError::TraversalDepthExceeded(_)) => Vec::new(),
        Err(e) => return Err(e),
    };
    for b in &boxes {
        parse::clearer::clear_object(&mut grid, b, &mut deferred_corners);
    }

    let lines = match parse::line_parser::run(&mut grid, &scale, &mut deferred_corners, config.max_traversal_depth) {
        Ok(lines) => lines,
        Err(error::AsciiSvgError::TraversalDepthExceeded(_)) => Vec::new(),
        Err(e) => return Err(e),
    };

    parse::clearer::blank_deferred(&mut grid, &deferred_corners);

    let texts = parse::text_parser::run(&grid, &boxes, &scale);

    for b in boxes {
        groups.push_box(b);
    }
    for l in lines {
        groups.push_line(l);
    }
    for t in texts {
        groups.push_text(t);
    }

    Ok(render::render(&groups, grid.row_count(), grid.max_cols(), &scale))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_rectangle_end_to_end() {
        let svg = ascii_to_svg("+---+\n|   |\n+---+", &Config::default()).unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("<g id=\"boxes\""));
        assert!(svg.contains("fill=\"#fff\""));
    }

    #[test]
    fn touching_boxes_produce_two_distinct_boxes() {
        let svg = ascii_to_svg("+---+---+\n|   |   |\n+---+---+", &Config::default()).unwrap();
        assert_eq!(svg.matches("<path").count(), 2);
    }

    #[test]
    fn label_inside_dark_box_gets_white_fill() {
        let input = "+-----+\n|[1]fo|\n+-----+\n[1]: {\"fill\": \"#000\"}\n";
        let svg = ascii_to_svg(input, &Config::default()).unwrap();
        assert!(svg.contains("fill=\"#000\""));
        assert!(svg.contains(">fo<"));
        assert!(svg.contains("fill=\"#fff\""));
    }

    #[test]
    fn horizontal_arrow_gets_end_marker() {
        let svg = ascii_to_svg("--->", &Config::default()).unwrap();
        assert!(svg.contains("marker-end=\"url(#Pointer)\""));
    }

    #[test]
    fn pipeline_is_idempotent_on_detected_object_counts() {
        let input = "+---+\n|foo|\n+---+";
        let first = ascii_to_svg(input, &Config::default()).unwrap();
        let second = ascii_to_svg(input, &Config::default()).unwrap();
        assert_eq!(first, second);
    }
}
