//! `NavGraph`: a set of independently addressable levels.

use fm_core::{Point, VertexId};

use crate::level::{Lane, Level, Vertex, VertexAttrs};
use crate::router::Route;
use crate::{GraphError, GraphResult};

// ── NavGraph ──────────────────────────────────────────────────────────────────

/// A building's navigation graph: one [`Level`] per floor.
///
/// Levels are kept in load order.  Lookups by name are linear, which is fine
/// for the handful of floors a building has.
#[derive(Clone, Debug)]
pub struct NavGraph {
    building_name: String,
    levels:        Vec<Level>,
}

impl NavGraph {
    pub fn building_name(&self) -> &str {
        &self.building_name
    }

    /// Level names in load order.
    pub fn level_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.levels.iter().map(Level::name)
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    pub fn level(&self, name: &str) -> GraphResult<&Level> {
        self.levels
            .iter()
            .find(|l| l.name() == name)
            .ok_or_else(|| GraphError::LevelNotFound(name.to_owned()))
    }

    pub fn vertices(&self, level: &str) -> GraphResult<&[Vertex]> {
        Ok(self.level(level)?.vertices())
    }

    pub fn lanes(&self, level: &str) -> GraphResult<&[Lane]> {
        Ok(self.level(level)?.lanes())
    }

    pub fn vertex_at(&self, level: &str, index: usize) -> GraphResult<&Vertex> {
        let lvl = self.level(level)?;
        let id = VertexId::try_from(index).map_err(|_| GraphError::VertexOutOfRange {
            level: level.to_owned(),
            index,
            len: lvl.vertex_count(),
        })?;
        lvl.vertex_at(id)
    }

    /// Fewest-hop route between two vertices of `level`.  Empty if
    /// disconnected.
    pub fn shortest_path(&self, level: &str, start: VertexId, end: VertexId) -> GraphResult<Route> {
        self.level(level)?.shortest_path(start, end)
    }
}

// ── Builders ──────────────────────────────────────────────────────────────────

/// Construct one [`Level`] incrementally.
///
/// # Example
///
/// ```
/// use fm_core::Point;
/// use fm_graph::LevelBuilder;
///
/// let mut b = LevelBuilder::new("L1");
/// let a = b.add_vertex(Point::new(0.0, 0.0));
/// let c = b.add_vertex(Point::new(1.0, 0.0));
/// b.add_lane(a, c);
/// let level = b.build().unwrap();
/// assert_eq!(level.neighbors(c), &[a]);
/// ```
pub struct LevelBuilder {
    name:     String,
    vertices: Vec<Vertex>,
    lanes:    Vec<Lane>,
}

impl LevelBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), vertices: Vec::new(), lanes: Vec::new() }
    }

    /// Add an unnamed, non-charger vertex and return its index.
    pub fn add_vertex(&mut self, pos: Point) -> VertexId {
        self.add_vertex_with(pos, VertexAttrs::default())
    }

    /// Add a vertex with attributes and return its index (sequential from 0).
    pub fn add_vertex_with(&mut self, pos: Point, attrs: VertexAttrs) -> VertexId {
        let id = VertexId(self.vertices.len() as u32);
        self.vertices.push(Vertex { id, pos, attrs });
        id
    }

    /// Add a directed lane.  Routing treats it as two-way regardless.
    pub fn add_lane(&mut self, from: VertexId, to: VertexId) {
        self.lanes.push(Lane::new(from, to));
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Validate lane endpoints and pack the adjacency.
    pub fn build(self) -> GraphResult<Level> {
        let n = self.vertices.len();
        for lane in &self.lanes {
            for end in [lane.from, lane.to] {
                if end.index() >= n {
                    return Err(GraphError::Parse(format!(
                        "level {:?}: lane {lane} references vertex {} but only {n} vertices exist",
                        self.name, end.0
                    )));
                }
            }
        }
        Ok(Level::new(self.name, self.vertices, self.lanes))
    }
}

/// Assemble a [`NavGraph`] from built levels.
pub struct NavGraphBuilder {
    building_name: String,
    levels:        Vec<Level>,
}

impl NavGraphBuilder {
    pub fn new(building_name: impl Into<String>) -> Self {
        Self { building_name: building_name.into(), levels: Vec::new() }
    }

    /// Append a level.  A level whose name is already present is rejected.
    pub fn add_level(&mut self, level: Level) -> GraphResult<()> {
        if self.levels.iter().any(|l| l.name() == level.name()) {
            return Err(GraphError::Parse(format!("duplicate level {:?}", level.name())));
        }
        self.levels.push(level);
        Ok(())
    }

    pub fn build(self) -> NavGraph {
        NavGraph { building_name: self.building_name, levels: self.levels }
    }
}
