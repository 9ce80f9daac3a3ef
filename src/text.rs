//! Text: a single anchor Point plus a display string and options.

use crate::geometry::{Point, VertexKind};
use crate::options::Options;
use crate::scale::DimensionScale;

/// Empirical baseline nudge applied to every Text anchor (spec.md §3/§4.7):
/// offset by (-0.6, +0.3) grid units from the cell containing the first
/// glyph of the run, to visually center monospaced text on that cell.
const ANCHOR_DX: f64 = -0.6;
const ANCHOR_DY: f64 = 0.3;

#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub anchor: Point,
    pub content: String,
    options: Options,
}

impl Text {
    /// `row`/`col` are the grid coordinates of the first glyph of the run.
    pub fn new(row: i64, col: i64, content: String, scale: &DimensionScale) -> Self {
        let anchor = Point::new(col as f64 + ANCHOR_DX, row as f64 + ANCHOR_DY, VertexKind::Point, scale);
        Self {
            anchor,
            content,
            options: Options::new(),
        }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_offset_matches_spec_baseline() {
        let scale = DimensionScale::default();
        let t = Text::new(1, 0, "foo".into(), &scale);
        assert_eq!(t.anchor.grid_x, -0.6);
        assert_eq!(t.anchor.grid_y, 1.3);
    }
}
