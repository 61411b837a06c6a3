use std::collections::BTreeMap;
use std::fmt::Write as _;

use crate::geometry::curve::catmull_rom_controls;
use crate::geometry::math::reflect_point;
use crate::model::{CornerStyle, Line, Vec2, Vertex};

fn resolve(line: &Line, vertices: &BTreeMap<u32, Vertex>) -> Vec<(Vec2, CornerStyle)> {
    line.vertices
        .iter()
        .filter_map(|id| vertices.get(id))
        .map(|v| (v.pos(), v.corner))
        .collect()
}

/// Renderable SVG-style path for one polyline. Sharp interior vertices
/// split the sequence into smooth runs; the sharp vertex belongs to both
/// runs, so the path has a literal corner there. Ids that fail to resolve
/// are skipped; fewer than 2 resolved vertices yield an empty path.
pub fn line_path(line: &Line, vertices: &BTreeMap<u32, Vertex>) -> String {
    let resolved = resolve(line, vertices);
    if resolved.len() < 2 {
        return String::new();
    }

    let mut runs: Vec<Vec<Vec2>> = Vec::new();
    let mut current: Vec<Vec2> = Vec::new();
    for (i, (p, corner)) in resolved.iter().enumerate() {
        current.push(*p);
        if *corner == CornerStyle::Sharp && i != resolved.len() - 1 {
            runs.push(std::mem::replace(&mut current, vec![*p]));
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }

    let parts: Vec<String> = runs
        .iter()
        .filter(|run| run.len() >= 2)
        .map(|run| run_path(run))
        .collect();
    parts.join(" ")
}

/// One smooth run: a 2-point run is a straight segment, longer runs chain
/// cubic segments with first-derivative continuity across interior points.
/// Boundary segments use a neighbor reflected across the endpoint in place
/// of the missing real neighbor.
fn run_path(points: &[Vec2]) -> String {
    if points.len() == 2 {
        return format!(
            "M {} {} L {} {}",
            points[0].x, points[0].y, points[1].x, points[1].y
        );
    }

    let mut d = String::new();
    for i in 0..points.len() - 1 {
        let p1 = points[i];
        let p2 = points[i + 1];
        let p0 = if i == 0 {
            reflect_point(p1, p2)
        } else {
            points[i - 1]
        };
        let p3 = if i + 2 < points.len() {
            points[i + 2]
        } else {
            reflect_point(p2, p1)
        };
        let (c1, c2) = catmull_rom_controls(p0, p1, p2, p3);
        if i == 0 {
            let _ = write!(d, "M {} {}", p1.x, p1.y);
        }
        let _ = write!(d, " C {} {} {} {} {} {}", c1.x, c1.y, c2.x, c2.y, p2.x, p2.y);
    }
    d
}

/// Direction vectors for the arrowheads at a polyline's two ends, derived
/// from the first and last resolved segments. `None` below 2 resolved
/// vertices.
pub fn arrow_tangents(line: &Line, vertices: &BTreeMap<u32, Vertex>) -> Option<(Vec2, Vec2)> {
    let resolved = resolve(line, vertices);
    if resolved.len() < 2 {
        return None;
    }
    let n = resolved.len();
    let start = Vec2 {
        x: resolved[1].0.x - resolved[0].0.x,
        y: resolved[1].0.y - resolved[0].0.y,
    };
    let end = Vec2 {
        x: resolved[n - 1].0.x - resolved[n - 2].0.x,
        y: resolved[n - 1].0.y - resolved[n - 2].0.y,
    };
    Some((start, end))
}
