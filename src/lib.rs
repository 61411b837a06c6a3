pub mod error;
pub mod model;
pub mod geometry {
    pub mod curve;
    pub mod math;
    pub mod tolerance;
}
pub mod algorithms {
    pub mod arrows;
    pub mod regions;
}
pub mod path;

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use algorithms::arrows::{arrow_offsets, ArrowOffsets};
use algorithms::regions::detect_regions;
use error::GraphError;
use model::{ArrowMode, Color, CornerStyle, Line, RegionObject, Vec2, Vertex};

/// The vertex/polyline graph store. Owns all vertices and lines, keeps the
/// derived region objects in sync with them, and tracks the collaborator's
/// selection bookkeeping (active line, dragged vertex, snap target).
///
/// Ids are opaque keys allocated from monotone counters and never reused.
/// Maps iterate in ascending id order, which every lexicographic tie-break
/// in the derivation algorithms relies on.
pub struct Graph {
    vertices: BTreeMap<u32, Vertex>,
    lines: BTreeMap<u32, Line>,
    objects: BTreeMap<u32, RegionObject>,
    active_line: Option<u32>,
    dragging_vertex: Option<u32>,
    snap_target: Option<u32>,
    next_vertex_id: u32,
    next_line_id: u32,
    geom_ver: u64,
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl Graph {
    pub fn new() -> Graph {
        Graph {
            vertices: BTreeMap::new(),
            lines: BTreeMap::new(),
            objects: BTreeMap::new(),
            active_line: None,
            dragging_vertex: None,
            snap_target: None,
            next_vertex_id: 0,
            next_line_id: 0,
            geom_ver: 1,
        }
    }

    /// Monotonic geometry version; increments on every successful mutation.
    pub fn geom_version(&self) -> u64 {
        self.geom_ver
    }

    fn bump(&mut self) {
        self.geom_ver = self.geom_ver.wrapping_add(1);
    }

    // Region objects depend only on the id topology, so this runs after
    // every structural change and nowhere else.
    fn refresh_objects(&mut self) {
        self.objects = detect_regions(&self.vertices, &self.lines);
    }

    // Vertices
    pub fn add_vertex(&mut self, x: f32, y: f32, corner: CornerStyle) -> u32 {
        let id = self.next_vertex_id;
        self.next_vertex_id += 1;
        self.vertices.insert(id, Vertex { x, y, corner });
        self.bump();
        id
    }

    pub fn move_vertex(&mut self, id: u32, x: f32, y: f32) -> Result<(), GraphError> {
        if !x.is_finite() || !y.is_finite() {
            return Err(GraphError::NonFinitePosition);
        }
        let v = self
            .vertices
            .get_mut(&id)
            .ok_or(GraphError::VertexNotFound(id))?;
        v.x = x;
        v.y = y;
        self.bump();
        Ok(())
    }

    pub fn set_corner_style(&mut self, id: u32, corner: CornerStyle) -> Result<(), GraphError> {
        let v = self
            .vertices
            .get_mut(&id)
            .ok_or(GraphError::VertexNotFound(id))?;
        v.corner = corner;
        self.bump();
        Ok(())
    }

    /// Delete a vertex. Its id is filtered out of every line's sequence
    /// (all occurrences, not just adjacent runs); lines left with fewer
    /// than 2 ids are deleted with it.
    pub fn remove_vertex(&mut self, id: u32) -> Result<(), GraphError> {
        if self.vertices.remove(&id).is_none() {
            return Err(GraphError::VertexNotFound(id));
        }
        let mut dropped: Vec<u32> = Vec::new();
        for (lid, line) in self.lines.iter_mut() {
            line.vertices.retain(|v| *v != id);
            if line.vertices.len() < 2 {
                dropped.push(*lid);
            }
        }
        for lid in &dropped {
            self.lines.remove(lid);
        }
        self.forget_dead_selection();
        debug!(vertex = id, lines_dropped = dropped.len(), "vertex removed");
        self.bump();
        self.refresh_objects();
        Ok(())
    }

    /// Collapse `removed` into `kept`. Sharp corners dominate; every line
    /// has its occurrences of `removed` rewritten to `kept` and immediately
    /// adjacent duplicate ids collapsed (non-adjacent repeats survive, a
    /// line may legitimately revisit a vertex). Lines left with fewer than
    /// 2 ids are deleted; a deleted active line clears the selection, and
    /// any pending snap target is cleared.
    pub fn merge_vertices(&mut self, kept: u32, removed: u32) -> Result<(), GraphError> {
        if kept == removed {
            return Ok(());
        }
        if !self.vertices.contains_key(&kept) {
            return Err(GraphError::VertexNotFound(kept));
        }
        let Some(removed_vertex) = self.vertices.remove(&removed) else {
            return Err(GraphError::VertexNotFound(removed));
        };
        if removed_vertex.corner == CornerStyle::Sharp {
            if let Some(v) = self.vertices.get_mut(&kept) {
                v.corner = CornerStyle::Sharp;
            }
        }

        let mut dropped: Vec<u32> = Vec::new();
        for (lid, line) in self.lines.iter_mut() {
            let mut rewritten = false;
            for vid in line.vertices.iter_mut() {
                if *vid == removed {
                    *vid = kept;
                    rewritten = true;
                }
            }
            if rewritten {
                line.vertices.dedup();
                if line.vertices.len() < 2 {
                    dropped.push(*lid);
                }
            }
        }
        for lid in &dropped {
            self.lines.remove(lid);
        }
        self.snap_target = None;
        self.forget_dead_selection();
        debug!(kept, removed, lines_dropped = dropped.len(), "vertices merged");
        self.bump();
        self.refresh_objects();
        Ok(())
    }

    // Lines
    pub fn add_line(
        &mut self,
        vertex_ids: &[u32],
        stroke: Color,
        stroke_width: f32,
    ) -> Result<u32, GraphError> {
        if vertex_ids.is_empty() {
            return Err(GraphError::EmptyLine);
        }
        for vid in vertex_ids {
            if !self.vertices.contains_key(vid) {
                return Err(GraphError::VertexNotFound(*vid));
            }
        }
        let id = self.next_line_id;
        self.next_line_id += 1;
        self.lines.insert(
            id,
            Line {
                vertices: vertex_ids.to_vec(),
                stroke,
                stroke_width,
                dash: None,
                arrow: ArrowMode::None,
            },
        );
        self.bump();
        self.refresh_objects();
        Ok(id)
    }

    /// Grow a line's sequence. A negative or out-of-range `index` appends;
    /// otherwise the vertex is inserted before `index`. No de-duplication
    /// happens here; not inserting the same id twice in a row is the
    /// caller's contract.
    pub fn insert_line_vertex(
        &mut self,
        line_id: u32,
        vertex_id: u32,
        index: i32,
    ) -> Result<(), GraphError> {
        if !self.vertices.contains_key(&vertex_id) {
            return Err(GraphError::VertexNotFound(vertex_id));
        }
        let line = self
            .lines
            .get_mut(&line_id)
            .ok_or(GraphError::LineNotFound(line_id))?;
        if index < 0 || index as usize >= line.vertices.len() {
            line.vertices.push(vertex_id);
        } else {
            line.vertices.insert(index as usize, vertex_id);
        }
        self.bump();
        self.refresh_objects();
        Ok(())
    }

    pub fn set_arrow_mode(&mut self, line_id: u32, arrow: ArrowMode) -> Result<(), GraphError> {
        let line = self
            .lines
            .get_mut(&line_id)
            .ok_or(GraphError::LineNotFound(line_id))?;
        line.arrow = arrow;
        self.bump();
        Ok(())
    }

    pub fn set_dash(&mut self, line_id: u32, dash: Option<Vec<f32>>) -> Result<(), GraphError> {
        let line = self
            .lines
            .get_mut(&line_id)
            .ok_or(GraphError::LineNotFound(line_id))?;
        line.dash = dash;
        self.bump();
        Ok(())
    }

    pub fn remove_line(&mut self, line_id: u32) -> Result<(), GraphError> {
        if self.lines.remove(&line_id).is_none() {
            return Err(GraphError::LineNotFound(line_id));
        }
        if self.active_line == Some(line_id) {
            self.active_line = None;
        }
        debug!(line = line_id, "line removed");
        self.bump();
        self.refresh_objects();
        Ok(())
    }

    // Selection bookkeeping relayed from the collaborator. Setters accept
    // only live ids; cascading deletions clear whatever they invalidate.
    pub fn set_active_line(&mut self, line: Option<u32>) -> Result<(), GraphError> {
        if let Some(id) = line {
            if !self.lines.contains_key(&id) {
                return Err(GraphError::LineNotFound(id));
            }
        }
        self.active_line = line;
        Ok(())
    }

    pub fn set_dragging(&mut self, vertex: Option<u32>) -> Result<(), GraphError> {
        if let Some(id) = vertex {
            if !self.vertices.contains_key(&id) {
                return Err(GraphError::VertexNotFound(id));
            }
        }
        self.dragging_vertex = vertex;
        Ok(())
    }

    pub fn set_snap_target(&mut self, vertex: Option<u32>) -> Result<(), GraphError> {
        if let Some(id) = vertex {
            if !self.vertices.contains_key(&id) {
                return Err(GraphError::VertexNotFound(id));
            }
        }
        self.snap_target = vertex;
        Ok(())
    }

    pub fn active_line(&self) -> Option<u32> {
        self.active_line
    }

    pub fn dragging_vertex(&self) -> Option<u32> {
        self.dragging_vertex
    }

    pub fn snap_target(&self) -> Option<u32> {
        self.snap_target
    }

    fn forget_dead_selection(&mut self) {
        if let Some(id) = self.active_line {
            if !self.lines.contains_key(&id) {
                self.active_line = None;
            }
        }
        if let Some(id) = self.dragging_vertex {
            if !self.vertices.contains_key(&id) {
                self.dragging_vertex = None;
            }
        }
        if let Some(id) = self.snap_target {
            if !self.vertices.contains_key(&id) {
                self.snap_target = None;
            }
        }
    }

    // Read-only snapshots
    pub fn vertex(&self, id: u32) -> Option<&Vertex> {
        self.vertices.get(&id)
    }

    pub fn line(&self, id: u32) -> Option<&Line> {
        self.lines.get(&id)
    }

    pub fn vertices(&self) -> &BTreeMap<u32, Vertex> {
        &self.vertices
    }

    pub fn lines(&self) -> &BTreeMap<u32, Line> {
        &self.lines
    }

    pub fn objects(&self) -> &BTreeMap<u32, RegionObject> {
        &self.objects
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// The derived object map as plain JSON data for the presentation
    /// layer.
    pub fn objects_value(&self) -> serde_json::Value {
        #[derive(Serialize)]
        struct ObjectSer<'a> {
            key: u32,
            cycle: &'a [u32],
            fill: Color,
            label: &'a str,
        }
        let out: Vec<ObjectSer> = self
            .objects
            .iter()
            .map(|(key, o)| ObjectSer {
                key: *key,
                cycle: &o.cycle,
                fill: o.fill,
                label: &o.label,
            })
            .collect();
        serde_json::to_value(out).unwrap_or(serde_json::Value::Null)
    }

    // Derivation helpers over the current snapshot
    pub fn line_path(&self, line_id: u32) -> Option<String> {
        self.lines
            .get(&line_id)
            .map(|line| path::line_path(line, &self.vertices))
    }

    pub fn arrow_offsets(&self, line_id: u32) -> ArrowOffsets {
        arrow_offsets(line_id, &self.lines)
    }

    pub fn arrow_tangents(&self, line_id: u32) -> Option<(Vec2, Vec2)> {
        self.lines
            .get(&line_id)
            .and_then(|line| path::arrow_tangents(line, &self.vertices))
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
        self.lines.clear();
        self.objects.clear();
        self.active_line = None;
        self.dragging_vertex = None;
        self.snap_target = None;
        self.bump();
    }
}
