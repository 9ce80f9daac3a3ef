//! End-to-end scenarios from spec.md §8.

use ascii2svg::{Config, ascii_to_svg};

#[test]
fn scenario_a_simple_rectangle() {
    let svg = ascii_to_svg("+---+\n|   |\n+---+", &Config::default()).unwrap();
    assert_eq!(svg.matches("<path").count(), 1);
    assert!(svg.contains("fill=\"#fff\""));
    assert!(!svg.contains(" Q "), "sharp corners should not produce Bézier segments");
}

#[test]
fn scenario_b_rounded_rectangle_uses_quadratics() {
    let svg = ascii_to_svg(".---.\n|   |\n'---'", &Config::default()).unwrap();
    assert_eq!(svg.matches("<path").count(), 1);
    assert_eq!(svg.matches(" Q ").count(), 4);
}

#[test]
fn scenario_c_touching_boxes_produce_two_distinct_boxes() {
    let svg = ascii_to_svg("+---+---+\n|   |   |\n+---+---+", &Config::default()).unwrap();
    assert_eq!(svg.matches("<path").count(), 2);
}

#[test]
fn scenario_d_horizontal_arrow() {
    let svg = ascii_to_svg("--->", &Config::default()).unwrap();
    assert_eq!(svg.matches("<path").count(), 1);
    assert!(svg.contains("marker-end=\"url(#Pointer)\""));
}

#[test]
fn scenario_e_curved_bend_line() {
    let svg = ascii_to_svg("---.\n   |\n   v", &Config::default()).unwrap();
    assert_eq!(svg.matches("<path").count(), 1);
    assert!(svg.contains(" Q "));
    assert!(svg.contains("marker-end=\"url(#Pointer)\""));
}

#[test]
fn scenario_f_label_inside_dark_box() {
    let input = "+-----+\n|[1]fo|\n+-----+\n[1]: {\"fill\": \"#000\"}\n";
    let svg = ascii_to_svg(input, &Config::default()).unwrap();
    assert!(svg.contains("fill=\"#000\""));
    assert!(svg.contains(">fo<"));
    assert!(svg.contains("fill=\"#fff\""));
}

#[test]
fn unequal_row_lengths_do_not_block_detection() {
    let svg = ascii_to_svg("+---+\n|\n+---+", &Config::default()).unwrap();
    assert_eq!(svg.matches("<path").count(), 1);
}

#[test]
fn corner_on_the_outer_edge_does_not_panic() {
    let svg = ascii_to_svg("+--", &Config::default()).unwrap();
    assert!(svg.starts_with("<svg"));
}

#[test]
fn empty_input_produces_a_minimal_document() {
    let svg = ascii_to_svg("", &Config::default()).unwrap();
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("<g id=\"boxes\""));
}

#[test]
fn parse_then_clear_is_idempotent_on_object_counts() {
    let input = "+---+\n|foo|\n+---+\n--->";
    let first = ascii_to_svg(input, &Config::default()).unwrap();
    let second = ascii_to_svg(input, &Config::default()).unwrap();
    assert_eq!(first, second);
}
