//! Serializes a parsed [`Groups`] to a complete SVG document, including
//! Bézier-curved corners and the two custom-shape templates (spec.md §4.9,
//! §6).

use std::fmt::Write;

use crate::geometry::{MarkerKind, Path, Point, VertexKind};
use crate::group::{GroupName, Groups};
use crate::scale::DimensionScale;
use crate::text::Text;

const CORNER_RADIUS: f64 = 10.0;

/// `M 0 100; A 50 25 0 0 0 100 100; V 20; A 50 25 0 0 0 0 20; A 50 25 0 0 0 100 20; A 50 25 0 0 0 0 20; Z`
const STORAGE_TEMPLATE: &str =
    "M 0 100; A 50 25 0 0 0 100 100; V 20; A 50 25 0 0 0 0 20; A 50 25 0 0 0 100 20; A 50 25 0 0 0 0 20; Z";

/// `M 0 100; C 25 115 75 85 100 100; V 0; H 0; Z`
const DOCUMENT_TEMPLATE: &str = "M 0 100; C 25 115 75 85 100 100; V 0; H 0; Z";

/// Builds the full SVG document for `groups`, sized for a grid of
/// `row_count` rows and `max_cols` columns under `scale`.
pub fn render(groups: &Groups, row_count: usize, max_cols: usize, scale: &DimensionScale) -> String {
    let width = max_cols as f64 * scale.x_scale + 30.0;
    let height = row_count as f64 * scale.y_scale + 30.0;

    let mut svg = String::new();
    writeln!(svg, r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width:.3}" height="{height:.3}">"#).unwrap();
    write_defs(&mut svg);

    write_group(&mut svg, "boxes", groups, GroupName::Boxes, r#" filter="url(#dsFilter)" stroke="black" stroke-width="2" fill="none""#);
    write_group(&mut svg, "lines", groups, GroupName::Lines, r#" stroke="black" stroke-width="2" fill="none""#);
    write_text_group(&mut svg, groups, scale);

    writeln!(svg, "</svg>").unwrap();
    svg
}

fn write_defs(svg: &mut String) {
    writeln!(
        svg,
        r#"<defs>
<filter id="dsFilter" x="-40%" y="-40%" width="180%" height="180%">
<feOffset result="offOut" in="SourceGraphic" dx="3" dy="3" />
<feColorMatrix result="matrixOut" in="offOut" type="matrix" values="0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0.4 0" />
<feGaussianBlur result="blurOut" in="matrixOut" stdDeviation="3" />
<feBlend in="SourceGraphic" in2="blurOut" mode="normal" />
</filter>
<marker id="Pointer" markerWidth="8" markerHeight="7" refX="0" refY="3.5" orient="auto">
<polygon points="0 0, 8 3.5, 0 7" />
</marker>
<marker id="iPointer" markerWidth="8" markerHeight="7" refX="8" refY="3.5" orient="auto">
<polygon points="8 0, 0 3.5, 8 7" />
</marker>
</defs>"#
    )
    .unwrap();
}

fn write_group(svg: &mut String, id: &str, groups: &Groups, name: GroupName, attrs: &str) {
    let paths: &[Path] = match name {
        GroupName::Boxes => groups.boxes(),
        GroupName::Lines => groups.lines(),
        GroupName::Text => &[],
    };
    writeln!(svg, r#"<g id="{id}"{attrs}>"#).unwrap();
    for path in paths {
        write_path(svg, path);
    }
    writeln!(svg, "</g>").unwrap();
}

fn write_text_group(svg: &mut String, groups: &Groups, scale: &DimensionScale) {
    writeln!(
        svg,
        r#"<g id="text" fill="black" style="font-family: monospace; font-size: {:.3}px">"#,
        scale.y_scale
    )
    .unwrap();
    for text in groups.text() {
        write_text(svg, text);
    }
    writeln!(svg, "</g>").unwrap();
}

fn write_path(svg: &mut String, path: &Path) {
    let shape_type = path.options().get_str("a2s:type").map(str::to_string);
    let is_closed_or_custom = path.is_closed() || shape_type.is_some();

    let d = match shape_type.as_deref() {
        Some("storage") => custom_shape_path(path, STORAGE_TEMPLATE),
        Some("document") => custom_shape_path(path, DOCUMENT_TEMPLATE),
        _ => ordinary_path(path),
    };

    write!(svg, r#"<path d="{d}""#).unwrap();

    let mut wrote_fill = false;
    for (k, v) in path.options().iter_svg_attrs() {
        if k == "a2s:type" {
            continue;
        }
        if k == "fill" {
            wrote_fill = true;
        }
        write!(svg, r#" {k}="{v}""#).unwrap();
    }
    if !wrote_fill && is_closed_or_custom {
        write!(svg, " fill=\"#fff\"").unwrap();
    }

    if shape_type.is_none() {
        if let Some(points) = non_empty_points(path) {
            if let Some(marker) = points.first().unwrap().marker {
                write!(svg, r#" marker-start="url(#{})""#, marker_id(marker)).unwrap();
            }
            if let Some(marker) = points.last().unwrap().marker {
                write!(svg, r#" marker-end="url(#{})""#, marker_id(marker)).unwrap();
            }
        }
    }

    writeln!(svg, " />").unwrap();
}

fn non_empty_points(path: &Path) -> Option<&[Point]> {
    let points = path.points();
    if points.is_empty() { None } else { Some(points) }
}

fn marker_id(marker: MarkerKind) -> &'static str {
    match marker {
        MarkerKind::Standard => "Pointer",
        MarkerKind::Inverted => "iPointer",
    }
}

fn write_text(svg: &mut String, text: &Text) {
    let escaped = html_escape::encode_text(&text.content);
    write!(svg, r#"<text x="{:.3}" y="{:.3}""#, text.anchor.x, text.anchor.y).unwrap();
    for (k, v) in text.options().iter_svg_attrs() {
        write!(svg, r#" {k}="{v}""#).unwrap();
    }
    writeln!(svg, ">{escaped}</text>").unwrap();
}

/// Axis a straight run of Points moves along.
#[derive(Clone, Copy, PartialEq)]
enum Axis {
    X,
    Y,
}

fn axis_and_sign(from: (f64, f64), to: (f64, f64)) -> (Axis, f64) {
    let (dx, dy) = (to.0 - from.0, to.1 - from.1);
    if dx == 0.0 { (Axis::Y, dy.signum()) } else { (Axis::X, dx.signum()) }
}

fn offset(point: (f64, f64), axis: Axis, sign: f64, units: f64) -> (f64, f64) {
    match axis {
        Axis::X => (point.0 + sign * units, point.1),
        Axis::Y => (point.0, point.1 + sign * units),
    }
}

/// The entry and exit points of the 10-unit-radius quadratic Bézier that
/// replaces a CONTROL vertex, per spec.md §4.9. `prev` is `None` only for an
/// opening CONTROL vertex with no real predecessor, in which case the entry
/// offset mirrors the exit offset so the opening curve is symmetric.
fn corner_offsets(prev: Option<(f64, f64)>, corner: (f64, f64), next: (f64, f64)) -> ((f64, f64), (f64, f64)) {
    let (exit_axis, exit_sign) = axis_and_sign(corner, next);
    let exit = offset(corner, exit_axis, exit_sign, CORNER_RADIUS);

    let entry = match prev {
        Some(prev) => {
            let (axis, sign) = axis_and_sign(prev, corner);
            offset(corner, axis, -sign, CORNER_RADIUS)
        }
        None => {
            let dx = exit.0 - corner.0;
            let dy = exit.1 - corner.1;
            (corner.0 - dx, corner.1 - dy)
        }
    };

    (entry, exit)
}

fn ordinary_path(path: &Path) -> String {
    let points = path.points();
    let n = points.len();
    if n == 0 {
        return String::new();
    }

    let mut d = String::new();
    let first = &points[0];
    if first.kind == VertexKind::Control {
        let next = points.get(1).unwrap_or(first);
        let prev = if path.is_closed() { Some((points[n - 1].x, points[n - 1].y)) } else { None };
        let (entry, exit) = corner_offsets(prev, (first.x, first.y), (next.x, next.y));
        write!(d, "M {:.3} {:.3} Q {:.3} {:.3} {:.3} {:.3} ", entry.0, entry.1, first.x, first.y, exit.0, exit.1).unwrap();
    } else {
        write!(d, "M {:.3} {:.3} ", first.x, first.y).unwrap();
    }

    for i in 1..n {
        let cur = &points[i];
        if cur.kind == VertexKind::Control {
            let prev = (points[i - 1].x, points[i - 1].y);
            let next = if i + 1 < n {
                points[i + 1]
            } else if path.is_closed() {
                points[0]
            } else {
                *cur
            };
            let (entry, exit) = corner_offsets(Some(prev), (cur.x, cur.y), (next.x, next.y));
            write!(d, "L {:.3} {:.3} Q {:.3} {:.3} {:.3} {:.3} ", entry.0, entry.1, cur.x, cur.y, exit.0, exit.1).unwrap();
        } else {
            write!(d, "L {:.3} {:.3} ", cur.x, cur.y).unwrap();
        }
    }

    if path.is_closed() {
        d.push('Z');
    }
    d.trim_end().to_string()
}

/// Scales and translates a 100x100 template path to the bounding box of
/// `path`'s vertices (spec.md §4.9). Absolute commands translate and scale
/// their endpoints; relative commands scale only; arc radii scale like any
/// other length.
fn custom_shape_path(path: &Path, template: &str) -> String {
    let points = path.points();
    let (mut min_x, mut min_y) = (f64::INFINITY, f64::INFINITY);
    let (mut max_x, mut max_y) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
    for p in points {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }
    if !min_x.is_finite() {
        return String::new();
    }
    let (sx, sy) = ((max_x - min_x) / 100.0, (max_y - min_y) / 100.0);

    let mut out = String::new();
    for segment in template.split(';') {
        let seg = segment.trim();
        if seg.is_empty() {
            continue;
        }
        let mut tokens = seg.split_whitespace();
        let cmd = tokens.next().unwrap();
        let nums: Vec<f64> = tokens.map(|t| t.parse().expect("template literals are well-formed")).collect();
        write_template_command(&mut out, cmd, &nums, min_x, min_y, sx, sy);
    }
    out.trim_end().to_string()
}

fn write_template_command(out: &mut String, cmd: &str, n: &[f64], min_x: f64, min_y: f64, sx: f64, sy: f64) {
    match cmd {
        "M" | "L" => write!(out, "{cmd} {:.3} {:.3} ", min_x + n[0] * sx, min_y + n[1] * sy).unwrap(),
        "m" | "l" => write!(out, "{cmd} {:.3} {:.3} ", n[0] * sx, n[1] * sy).unwrap(),
        "H" => write!(out, "H {:.3} ", min_x + n[0] * sx).unwrap(),
        "h" => write!(out, "h {:.3} ", n[0] * sx).unwrap(),
        "V" => write!(out, "V {:.3} ", min_y + n[0] * sy).unwrap(),
        "v" => write!(out, "v {:.3} ", n[0] * sy).unwrap(),
        "C" => write!(
            out,
            "C {:.3} {:.3} {:.3} {:.3} {:.3} {:.3} ",
            min_x + n[0] * sx,
            min_y + n[1] * sy,
            min_x + n[2] * sx,
            min_y + n[3] * sy,
            min_x + n[4] * sx,
            min_y + n[5] * sy
        )
        .unwrap(),
        "c" => write!(
            out,
            "c {:.3} {:.3} {:.3} {:.3} {:.3} {:.3} ",
            n[0] * sx,
            n[1] * sy,
            n[2] * sx,
            n[3] * sy,
            n[4] * sx,
            n[5] * sy
        )
        .unwrap(),
        "A" => write!(
            out,
            "A {:.3} {:.3} {} {} {} {:.3} {:.3} ",
            n[0] * sx,
            n[1] * sy,
            n[2],
            n[3] as i64,
            n[4] as i64,
            min_x + n[5] * sx,
            min_y + n[6] * sy
        )
        .unwrap(),
        "a" => write!(
            out,
            "a {:.3} {:.3} {} {} {} {:.3} {:.3} ",
            n[0] * sx,
            n[1] * sy,
            n[2],
            n[3] as i64,
            n[4] as i64,
            n[5] * sx,
            n[6] * sy
        )
        .unwrap(),
        "Z" | "z" => out.push_str("Z "),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::group::Groups;

    #[test]
    fn rectangle_renders_default_fill_and_canvas_size() {
        let mut grid = crate::grid::Grid::parse("+---+\n|   |\n+---+");
        let scale = DimensionScale::default();
        let boxes = crate::parse::box_parser::run(&mut grid, &scale, &Default::default(), 10_000).unwrap();
        let mut groups = Groups::new();
        for b in boxes {
            groups.push_box(b);
        }
        let svg = render(&groups, 3, 5, &scale);
        assert!(svg.contains(r#"width="75.000""#));
        assert!(svg.contains(r#"height="78.000""#));
        assert!(svg.contains("fill=\"#fff\""));
        assert!(svg.contains("<g id=\"boxes\""));
    }

    #[test]
    fn arrow_gets_marker_end() {
        let mut grid = crate::grid::Grid::parse("--->");
        let scale = DimensionScale::default();
        let mut deferred = Vec::new();
        let lines = crate::parse::line_parser::run(&mut grid, &scale, &mut deferred, 10_000).unwrap();
        let mut groups = Groups::new();
        for l in lines {
            groups.push_line(l);
        }
        let svg = render(&groups, 1, 4, &scale);
        assert!(svg.contains("marker-end=\"url(#Pointer)\""));
    }

    #[test]
    fn curved_corner_produces_quadratic_segments() {
        let mut grid = crate::grid::Grid::parse(".---.\n|   |\n'---'");
        let scale = DimensionScale::default();
        let boxes = crate::parse::box_parser::run(&mut grid, &scale, &Default::default(), 10_000).unwrap();
        let mut groups = Groups::new();
        for b in boxes {
            groups.push_box(b);
        }
        let svg = render(&groups, 3, 5, &scale);
        assert!(svg.contains(" Q "));
    }
}
