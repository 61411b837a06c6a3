use std::collections::BTreeMap;

use linework::model::{ArrowMode, Color, CornerStyle, Line, Vec2, Vertex};
use linework::path::{arrow_tangents, line_path};
use linework::Graph;

const INK: Color = Color { r: 11, g: 16, b: 32, a: 255 };

fn line_of(ids: &[u32]) -> Line {
    Line {
        vertices: ids.to_vec(),
        stroke: INK,
        stroke_width: 3.0,
        dash: None,
        arrow: ArrowMode::None,
    }
}

fn vmap(entries: &[(u32, f32, f32, CornerStyle)]) -> BTreeMap<u32, Vertex> {
    entries
        .iter()
        .map(|(id, x, y, corner)| {
            (
                *id,
                Vertex {
                    x: *x,
                    y: *y,
                    corner: *corner,
                },
            )
        })
        .collect()
}

#[test]
fn two_vertex_line_is_straight_for_any_corner_style() {
    for corner in [CornerStyle::Sharp, CornerStyle::Smooth] {
        let mut g = Graph::new();
        let a = g.add_vertex(0.0, 0.0, corner);
        let b = g.add_vertex(10.0, 0.0, corner);
        let l = g.add_line(&[a, b], INK, 3.0).unwrap();
        assert_eq!(g.line_path(l).unwrap(), "M 0 0 L 10 0");
    }
}

#[test]
fn smooth_three_vertex_line_is_one_curved_run() {
    let mut g = Graph::new();
    let a = g.add_vertex(0.0, 0.0, CornerStyle::Smooth);
    let b = g.add_vertex(10.0, 0.0, CornerStyle::Smooth);
    let c = g.add_vertex(20.0, 10.0, CornerStyle::Smooth);
    let l = g.add_line(&[a, b, c], INK, 3.0).unwrap();

    let path = g.line_path(l).unwrap();
    assert!(path.starts_with("M 0 0 C "), "path: {path}");
    assert_eq!(path.matches('M').count(), 1);
    assert_eq!(path.matches('C').count(), 2);
    assert!(!path.contains('L'));
}

#[test]
fn sharp_middle_vertex_splits_the_path() {
    let mut g = Graph::new();
    let a = g.add_vertex(0.0, 0.0, CornerStyle::Smooth);
    let b = g.add_vertex(10.0, 0.0, CornerStyle::Sharp);
    let c = g.add_vertex(20.0, 10.0, CornerStyle::Smooth);
    let l = g.add_line(&[a, b, c], INK, 3.0).unwrap();

    // Two independent straight runs meeting exactly at the sharp vertex.
    assert_eq!(g.line_path(l).unwrap(), "M 0 0 L 10 0 M 10 0 L 20 10");
}

#[test]
fn sharp_corner_styles_at_ends_do_not_split() {
    let mut g = Graph::new();
    let a = g.add_vertex(0.0, 0.0, CornerStyle::Smooth);
    let b = g.add_vertex(10.0, 0.0, CornerStyle::Smooth);
    let c = g.add_vertex(20.0, 10.0, CornerStyle::Sharp);
    let l = g.add_line(&[a, b, c], INK, 3.0).unwrap();

    // The last vertex never terminates a run early.
    let path = g.line_path(l).unwrap();
    assert_eq!(path.matches('M').count(), 1);
    assert_eq!(path.matches('C').count(), 2);
}

#[test]
fn unresolvable_ids_are_skipped() {
    let vertices = vmap(&[(7, 0.0, 0.0, CornerStyle::Smooth)]);
    let line = line_of(&[7, 8]);
    assert_eq!(line_path(&line, &vertices), "");

    let vertices = vmap(&[
        (1, 0.0, 0.0, CornerStyle::Smooth),
        (3, 10.0, 0.0, CornerStyle::Smooth),
    ]);
    let line = line_of(&[1, 2, 3]); // id 2 is gone
    assert_eq!(line_path(&line, &vertices), "M 0 0 L 10 0");
}

#[test]
fn coincident_points_stay_finite() {
    let vertices = vmap(&[
        (1, 5.0, 5.0, CornerStyle::Smooth),
        (2, 5.0, 5.0, CornerStyle::Smooth),
        (3, 5.0, 5.0, CornerStyle::Smooth),
        (4, 12.0, 5.0, CornerStyle::Smooth),
    ]);
    let line = line_of(&[1, 2, 3, 4]);
    let path = line_path(&line, &vertices);
    assert!(!path.is_empty());
    assert!(!path.contains("NaN"), "path: {path}");
    assert!(!path.contains("inf"), "path: {path}");
}

#[test]
fn leading_sharp_vertex_keeps_single_run() {
    let vertices = vmap(&[
        (1, 0.0, 0.0, CornerStyle::Sharp),
        (2, 10.0, 0.0, CornerStyle::Smooth),
        (3, 20.0, 10.0, CornerStyle::Smooth),
    ]);
    let line = line_of(&[1, 2, 3]);
    let path = line_path(&line, &vertices);
    assert_eq!(path.matches('M').count(), 1);
    assert_eq!(path.matches('C').count(), 2);
}

#[test]
fn arrow_tangents_follow_end_segments() {
    let vertices = vmap(&[
        (1, 0.0, 0.0, CornerStyle::Smooth),
        (2, 10.0, 0.0, CornerStyle::Smooth),
        (3, 20.0, 10.0, CornerStyle::Smooth),
    ]);
    let line = line_of(&[1, 2, 3]);
    let (start, end) = arrow_tangents(&line, &vertices).unwrap();
    assert_eq!(start, Vec2 { x: 10.0, y: 0.0 });
    assert_eq!(end, Vec2 { x: 10.0, y: 10.0 });

    let short = line_of(&[1]);
    assert!(arrow_tangents(&short, &vertices).is_none());
}
