use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CornerStyle {
    Sharp,
    Smooth,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArrowMode {
    None,
    Forward,
    Backward,
    Both,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    pub x: f32,
    pub y: f32,
    pub corner: CornerStyle,
}

impl Vertex {
    pub fn pos(&self) -> Vec2 {
        Vec2 { x: self.x, y: self.y }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub vertices: Vec<u32>,
    pub stroke: Color,
    pub stroke_width: f32,
    pub dash: Option<Vec<f32>>,
    pub arrow: ArrowMode,
}

/// Derived enclosed region. Recomputed from vertices and lines on every
/// structural change; never edited in place.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegionObject {
    pub cycle: Vec<u32>,
    pub fill: Color,
    pub label: String,
}

/// Default fill for freshly derived regions.
pub const REGION_FILL: Color = Color { r: 253, g: 230, b: 138, a: 255 };
