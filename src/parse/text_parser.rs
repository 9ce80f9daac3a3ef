//! Final pass: whatever characters remain in the grid once boxes and lines
//! have been extracted and cleared are rendered as text (spec.md §4.7).

use crate::geometry::{Path, point_in_polygon};
use crate::grid::{BLANK, Grid};
use crate::scale::DimensionScale;
use crate::text::Text;

/// Scans `grid` row-major for runs of non-blank characters. A single blank
/// inside a run is tolerated (so multi-word labels survive as one run); two
/// consecutive blanks end it.
pub fn run(grid: &Grid, boxes: &[Path], scale: &DimensionScale) -> Vec<Text> {
    let mut texts = Vec::new();
    let rows = grid.row_count() as i64;
    let cols = grid.max_cols() as i64;

    for row in 0..rows {
        let mut col = 0;
        while col < cols {
            if grid.get(row, col) == BLANK {
                col += 1;
                continue;
            }

            let start = col;
            let mut content = String::new();
            let mut consecutive_blanks = 0;
            while col < cols {
                let ch = grid.get(row, col);
                if ch == BLANK {
                    consecutive_blanks += 1;
                    if consecutive_blanks >= 2 {
                        break;
                    }
                } else {
                    consecutive_blanks = 0;
                }
                content.push(ch);
                col += 1;
            }

            let trimmed = content.trim_end();
            if !trimmed.is_empty() {
                let mut text = Text::new(row, start, trimmed.to_string(), scale);
                apply_contrast(&mut text, boxes);
                texts.push(text);
            }
        }
    }

    texts
}

/// If the text's anchor falls inside a box with an explicit `fill`, switches
/// the text's own fill to white when that background is too dark to read
/// black text on, using the standard luminance-plus-sum heuristic (spec.md
/// §4.7, §4.11).
fn apply_contrast(text: &mut Text, boxes: &[Path]) {
    for b in boxes {
        if !b.is_closed() {
            continue;
        }
        if !point_in_polygon(b, text.anchor.x, text.anchor.y) {
            continue;
        }
        let Some(fill) = b.options().get_str("fill") else {
            return;
        };
        let Ok(color) = csscolorparser::parse(fill) else {
            return;
        };
        let [r, g, bl, _] = color.to_rgba8();
        let (r, g, bl) = (r as f64, g as f64, bl as f64);
        let luminance = (299.0 * r + 587.0 * g + 114.0 * bl) / 1000.0;
        let sum = r + g + bl;
        if luminance < 125.0 || sum < 500.0 {
            text.options_mut().set("fill", "#fff");
        }
        return;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_word_text_is_captured() {
        let grid = Grid::parse("hello");
        let texts = run(&grid, &[], &DimensionScale::default());
        assert_eq!(texts.len(), 1);
        assert_eq!(texts[0].content, "hello");
    }

    #[test]
    fn double_blank_splits_into_two_runs() {
        let grid = Grid::parse("foo  bar");
        let texts = run(&grid, &[], &DimensionScale::default());
        assert_eq!(texts.len(), 2);
        assert_eq!(texts[0].content, "foo");
        assert_eq!(texts[1].content, "bar");
    }

    #[test]
    fn single_blank_inside_run_is_kept() {
        let grid = Grid::parse("a b");
        let texts = run(&grid, &[], &DimensionScale::default());
        assert_eq!(texts.len(), 1);
        assert_eq!(texts[0].content, "a b");
    }

    #[test]
    fn dark_fill_forces_white_text() {
        let scale = DimensionScale::default();
        let mut grid = Grid::parse("+---+\n|hi |\n+---+");
        let boxes = crate::parse::box_parser::run(&mut grid, &scale, &Default::default(), 10_000).unwrap();
        let mut deferred = Vec::new();
        crate::parse::clearer::clear_object(&mut grid, &boxes[0], &mut deferred);
        crate::parse::clearer::blank_deferred(&mut grid, &deferred);
        let mut dark = boxes[0].clone();
        dark.options_mut().set("fill", "#000000");
        let texts = run(&grid, std::slice::from_ref(&dark), &scale);
        assert_eq!(texts.len(), 1);
        assert_eq!(texts[0].content, "hi");
        assert_eq!(texts[0].options().get_str("fill"), Some("#fff"));
    }
}
