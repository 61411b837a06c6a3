use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::Line;

/// Lateral arrowhead offsets for a polyline's two endpoints, in the same
/// unit as the stroke width.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct ArrowOffsets {
    pub start: f32,
    pub end: f32,
}

/// Number of polylines whose sequence contains the vertex anywhere, not
/// just as an endpoint.
fn vertex_degree(vertex: u32, lines: &BTreeMap<u32, Line>) -> usize {
    lines.values().filter(|l| l.vertices.contains(&vertex)).count()
}

/// Stable index of `line_id` among the lines touching `vertex`. The map
/// iterates in ascending id order, so the touching lines come out already
/// sorted.
fn line_index_at_vertex(vertex: u32, line_id: u32, lines: &BTreeMap<u32, Line>) -> Option<usize> {
    lines
        .iter()
        .filter(|(_, l)| l.vertices.contains(&vertex))
        .position(|(id, _)| *id == line_id)
}

fn offset_at(vertex: u32, line_id: u32, stroke_width: f32, lines: &BTreeMap<u32, Line>) -> f32 {
    let degree = vertex_degree(vertex, lines);
    if degree <= 1 {
        return 0.0;
    }
    let Some(index) = line_index_at_vertex(vertex, line_id, lines) else {
        return 0.0;
    };
    let mid = (degree as f32 - 1.0) / 2.0;
    (index as f32 - mid) * stroke_width
}

/// Spread the arrowheads of lines sharing an endpoint so they do not stack:
/// each line gets an offset proportional to its stroke width, centered
/// around zero across the touching lines.
pub fn arrow_offsets(line_id: u32, lines: &BTreeMap<u32, Line>) -> ArrowOffsets {
    let Some(line) = lines.get(&line_id) else {
        return ArrowOffsets::default();
    };
    if line.vertices.len() < 2 {
        return ArrowOffsets::default();
    }
    let start_id = line.vertices[0];
    let end_id = line.vertices[line.vertices.len() - 1];
    ArrowOffsets {
        start: offset_at(start_id, line_id, line.stroke_width, lines),
        end: offset_at(end_id, line_id, line.stroke_width, lines),
    }
}
