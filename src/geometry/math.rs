use super::tolerance::{near_zero, EPS_AREA};
use crate::model::Vec2;

#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    (a.x - b.x).hypot(a.y - b.y)
}

/// Mirror `target` through `origin`.
#[inline]
pub fn reflect_point(origin: Vec2, target: Vec2) -> Vec2 {
    Vec2 {
        x: 2.0 * origin.x - target.x,
        y: 2.0 * origin.y - target.y,
    }
}

pub fn polygon_area(poly: &[Vec2]) -> f32 {
    let mut a = 0.0f32;
    for i in 0..poly.len() {
        let j = (i + 1) % poly.len();
        a += poly[i].x * poly[j].y - poly[j].x * poly[i].y;
    }
    0.5 * a
}

fn point_average(poly: &[Vec2]) -> Vec2 {
    let mut sx = 0.0f32;
    let mut sy = 0.0f32;
    for p in poly {
        sx += p.x;
        sy += p.y;
    }
    let n = poly.len() as f32;
    Vec2 { x: sx / n, y: sy / n }
}

/// Area-weighted polygon centroid. Fewer than 3 points or a zero-area
/// polygon fall back to the equal-weight vertex average.
pub fn polygon_centroid(poly: &[Vec2]) -> Vec2 {
    if poly.is_empty() {
        return Vec2 { x: 0.0, y: 0.0 };
    }
    if poly.len() < 3 {
        return point_average(poly);
    }

    let mut a = 0.0f32;
    let mut cx = 0.0f32;
    let mut cy = 0.0f32;
    for i in 0..poly.len() {
        let j = (i + 1) % poly.len();
        let cross = poly[i].x * poly[j].y - poly[j].x * poly[i].y;
        a += cross;
        cx += (poly[i].x + poly[j].x) * cross;
        cy += (poly[i].y + poly[j].y) * cross;
    }
    let a = a * 0.5;
    if near_zero(a, EPS_AREA) {
        return point_average(poly);
    }
    Vec2 {
        x: cx / (6.0 * a),
        y: cy / (6.0 * a),
    }
}
