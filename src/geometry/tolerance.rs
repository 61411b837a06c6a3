// Centralized tolerances for robust geometry

pub const EPS_LEN: f32 = 1e-6;       // zero-length vector threshold
pub const EPS_AREA: f32 = 1e-6;      // zero polygon area threshold (px^2)

#[inline] pub fn near_zero(x: f32, eps: f32) -> bool { x.abs() <= eps }
