use super::math::distance;
use super::tolerance::EPS_LEN;
use crate::model::Vec2;

/// Cubic Bezier control points for the segment p1 -> p2 of a centripetal
/// Catmull-Rom chain (alpha 1/2), using p0 and p3 as the neighboring
/// points. Coincident neighbors collapse the blend weight to zero instead
/// of dividing by zero, so the control point falls on the endpoint itself.
pub fn catmull_rom_controls(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2) -> (Vec2, Vec2) {
    let d01 = distance(p0, p1).sqrt();
    let d12 = distance(p1, p2).sqrt();
    let d23 = distance(p2, p3).sqrt();

    let b1 = if d01 <= EPS_LEN || d12 <= EPS_LEN {
        0.0
    } else {
        d12 / (d01 + d12)
    };
    let b2 = if d23 <= EPS_LEN || d12 <= EPS_LEN {
        0.0
    } else {
        d12 / (d12 + d23)
    };

    let c0 = Vec2 {
        x: p1.x + (p2.x - p0.x) * b1,
        y: p1.y + (p2.y - p0.y) * b1,
    };
    let c1 = Vec2 {
        x: p2.x + (p1.x - p3.x) * b2,
        y: p2.y + (p1.y - p3.y) * b2,
    };

    let ctrl1 = Vec2 {
        x: p1.x + (c0.x - p1.x) / 3.0,
        y: p1.y + (c0.y - p1.y) / 3.0,
    };
    let ctrl2 = Vec2 {
        x: p2.x - (p2.x - c1.x) / 3.0,
        y: p2.y - (p2.y - c1.y) / 3.0,
    };
    (ctrl1, ctrl2)
}
