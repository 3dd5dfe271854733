//! One building level: vertices, lanes, and the undirected adjacency used for
//! routing.
//!
//! # Data layout
//!
//! Lanes are stored exactly as given (directed pairs, input order).  For
//! routing every lane is traversable both ways, so the builder expands each
//! lane into two half-edges and packs them in **Compressed Sparse Row (CSR)**
//! form.  The neighbours of vertex `v` occupy:
//!
//! ```text
//! adj_to[ adj_start[v] .. adj_start[v+1] ]
//! ```
//!
//! Half-edges are sorted stably by source, so neighbour order follows lane
//! input order.

use fm_core::{Point, VertexId};

use crate::router::{self, Route};
use crate::{GraphError, GraphResult};

// ── Vertex ────────────────────────────────────────────────────────────────────

/// Optional per-vertex attributes carried by the nav graph.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VertexAttrs {
    pub name:       Option<String>,
    pub is_charger: bool,
}

/// A routing vertex.  Immutable once the level is built.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vertex {
    pub id:    VertexId,
    pub pos:   Point,
    pub attrs: VertexAttrs,
}

impl Vertex {
    #[inline]
    pub fn name(&self) -> Option<&str> {
        self.attrs.name.as_deref()
    }

    #[inline]
    pub fn is_charger(&self) -> bool {
        self.attrs.is_charger
    }
}

// ── Lane ──────────────────────────────────────────────────────────────────────

/// A directed traversable segment between two vertices of the same level.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lane {
    pub from: VertexId,
    pub to:   VertexId,
}

impl Lane {
    #[inline]
    pub const fn new(from: VertexId, to: VertexId) -> Self {
        Self { from, to }
    }

    /// The same physical segment travelled the other way.
    #[inline]
    pub const fn reversed(self) -> Self {
        Self { from: self.to, to: self.from }
    }
}

impl std::fmt::Display for Lane {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}->{}", self.from.0, self.to.0)
    }
}

// ── Level ─────────────────────────────────────────────────────────────────────

/// Vertices and lanes of one named level plus its routing adjacency.
///
/// Construct through [`LevelBuilder`](crate::LevelBuilder) or the JSON loader.
#[derive(Clone, Debug)]
pub struct Level {
    pub(crate) name:      String,
    pub(crate) vertices:  Vec<Vertex>,
    pub(crate) lanes:     Vec<Lane>,
    /// CSR row pointer, length `vertex_count + 1`.
    pub(crate) adj_start: Vec<u32>,
    /// Neighbour of each half-edge.
    pub(crate) adj_to:    Vec<VertexId>,
}

impl Level {
    /// Pack `lanes` into undirected CSR adjacency.  Lane endpoints must be
    /// in range; callers validate before reaching here.
    pub(crate) fn new(name: String, vertices: Vec<Vertex>, lanes: Vec<Lane>) -> Self {
        let n = vertices.len();

        let mut half_edges: Vec<(VertexId, VertexId)> = Vec::with_capacity(lanes.len() * 2);
        for lane in &lanes {
            half_edges.push((lane.from, lane.to));
            half_edges.push((lane.to, lane.from));
        }
        half_edges.sort_by_key(|&(from, _)| from.0);

        let mut adj_start = vec![0u32; n + 1];
        for &(from, _) in &half_edges {
            adj_start[from.index() + 1] += 1;
        }
        for i in 1..=n {
            adj_start[i] += adj_start[i - 1];
        }
        let adj_to = half_edges.into_iter().map(|(_, to)| to).collect();

        Self { name, vertices, lanes, adj_start, adj_to }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn lane_count(&self) -> usize {
        self.lanes.len()
    }

    /// Vertices in input order; `vertices()[i].id == VertexId(i)`.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Lanes in input order, as directed pairs.
    pub fn lanes(&self) -> &[Lane] {
        &self.lanes
    }

    /// Look up a vertex by index.
    pub fn vertex_at(&self, id: VertexId) -> GraphResult<&Vertex> {
        self.vertices
            .get(id.index())
            .ok_or_else(|| GraphError::VertexOutOfRange {
                level: self.name.clone(),
                index: id.index(),
                len:   self.vertices.len(),
            })
    }

    /// Position of an in-range vertex.
    ///
    /// # Panics
    /// Panics if `id` is out of range; use [`vertex_at`](Self::vertex_at) for
    /// untrusted indices.
    #[inline]
    pub fn position(&self, id: VertexId) -> Point {
        self.vertices[id.index()].pos
    }

    /// Vertices reachable over one lane in either direction.
    #[inline]
    pub fn neighbors(&self, v: VertexId) -> &[VertexId] {
        let start = self.adj_start[v.index()] as usize;
        let end   = self.adj_start[v.index() + 1] as usize;
        &self.adj_to[start..end]
    }

    /// `true` if a lane joins `a` and `b` in either direction.
    pub fn has_lane_between(&self, a: VertexId, b: VertexId) -> bool {
        a.index() < self.vertex_count() && self.neighbors(a).contains(&b)
    }

    /// Indices of every vertex flagged as a charger, ascending.
    pub fn chargers(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices.iter().filter(|v| v.is_charger()).map(|v| v.id)
    }

    /// First vertex carrying `name`.
    pub fn vertex_by_name(&self, name: &str) -> Option<&Vertex> {
        self.vertices.iter().find(|v| v.name() == Some(name))
    }

    /// Nearest vertex to `pos`; see [`router::nearest_vertex`].
    pub fn nearest_vertex(&self, pos: Point) -> Option<VertexId> {
        router::nearest_vertex(pos, &self.vertices)
    }

    /// Fewest-hop route from `start` to `end`.
    ///
    /// An empty [`Route`] means the two vertices are not connected.
    pub fn shortest_path(&self, start: VertexId, end: VertexId) -> GraphResult<Route> {
        self.vertex_at(start)?;
        self.vertex_at(end)?;
        Ok(router::shortest_path(self, start, end))
    }
}
