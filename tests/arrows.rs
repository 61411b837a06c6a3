use linework::model::{Color, CornerStyle};
use linework::Graph;

const INK: Color = Color { r: 11, g: 16, b: 32, a: 255 };

fn vertex_at(g: &mut Graph, x: f32, y: f32) -> u32 {
    g.add_vertex(x, y, CornerStyle::Smooth)
}

#[test]
fn lone_line_gets_zero_offsets() {
    let mut g = Graph::new();
    let a = vertex_at(&mut g, 0.0, 0.0);
    let b = vertex_at(&mut g, 10.0, 0.0);
    let l = g.add_line(&[a, b], INK, 3.0).unwrap();
    let off = g.arrow_offsets(l);
    assert_eq!((off.start, off.end), (0.0, 0.0));
}

#[test]
fn missing_line_gets_zero_offsets() {
    let g = Graph::new();
    let off = g.arrow_offsets(42);
    assert_eq!((off.start, off.end), (0.0, 0.0));
}

#[test]
fn two_lines_sharing_a_vertex_spread_symmetrically() {
    let mut g = Graph::new();
    let s = vertex_at(&mut g, 0.0, 0.0);
    let a = vertex_at(&mut g, 10.0, 0.0);
    let b = vertex_at(&mut g, 0.0, 10.0);
    let l1 = g.add_line(&[s, a], INK, 3.0).unwrap();
    let l2 = g.add_line(&[s, b], INK, 3.0).unwrap();

    // degree 2 at the shared start, stable index by ascending line id
    assert_eq!(g.arrow_offsets(l1).start, -1.5);
    assert_eq!(g.arrow_offsets(l2).start, 1.5);
    // free ends stay centered
    assert_eq!(g.arrow_offsets(l1).end, 0.0);
    assert_eq!(g.arrow_offsets(l2).end, 0.0);
}

#[test]
fn three_lines_center_the_middle_one() {
    let mut g = Graph::new();
    let s = vertex_at(&mut g, 0.0, 0.0);
    let a = vertex_at(&mut g, 10.0, 0.0);
    let b = vertex_at(&mut g, 0.0, 10.0);
    let c = vertex_at(&mut g, -10.0, 0.0);
    let l1 = g.add_line(&[s, a], INK, 2.0).unwrap();
    let l2 = g.add_line(&[s, b], INK, 2.0).unwrap();
    let l3 = g.add_line(&[s, c], INK, 2.0).unwrap();

    assert_eq!(g.arrow_offsets(l1).start, -2.0);
    assert_eq!(g.arrow_offsets(l2).start, 0.0);
    assert_eq!(g.arrow_offsets(l3).start, 2.0);
}

#[test]
fn degree_counts_mid_sequence_occurrences() {
    let mut g = Graph::new();
    let s = vertex_at(&mut g, 0.0, 0.0);
    let a = vertex_at(&mut g, 10.0, 0.0);
    let p = vertex_at(&mut g, -10.0, 0.0);
    let q = vertex_at(&mut g, 0.0, -10.0);
    let l1 = g.add_line(&[s, a], INK, 3.0).unwrap();
    // s sits in the middle of this line, which still raises its degree
    let l2 = g.add_line(&[p, s, q], INK, 3.0).unwrap();

    assert_eq!(g.arrow_offsets(l1).start, -1.5);
    // l2's own endpoints are p and q, both degree 1
    let off = g.arrow_offsets(l2);
    assert_eq!((off.start, off.end), (0.0, 0.0));
}

#[test]
fn offsets_scale_with_stroke_width() {
    let mut g = Graph::new();
    let s = vertex_at(&mut g, 0.0, 0.0);
    let a = vertex_at(&mut g, 10.0, 0.0);
    let b = vertex_at(&mut g, 0.0, 10.0);
    let l1 = g.add_line(&[s, a], INK, 8.0).unwrap();
    let l2 = g.add_line(&[s, b], INK, 2.0).unwrap();

    // each line spreads by its own stroke width
    assert_eq!(g.arrow_offsets(l1).start, -4.0);
    assert_eq!(g.arrow_offsets(l2).start, 1.0);
}
