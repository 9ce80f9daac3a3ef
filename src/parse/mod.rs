//! The extraction pipeline: boxes, then lines, then the residual text left
//! once both have cleared their cells from the grid (spec.md §4).

pub mod box_parser;
pub mod clearer;
pub mod line_parser;
pub mod line_walker;
pub mod text_parser;
pub mod wall_follower;
