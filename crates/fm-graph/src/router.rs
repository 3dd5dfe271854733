//! Hop-count routing and nearest-vertex snapping.
//!
//! # Cost model
//!
//! Every lane costs 1 regardless of its Euclidean length, and lanes are
//! traversable in both directions.  The search is still a priority-queue
//! Dijkstra over accumulated cost, so swapping in weighted lanes later only
//! touches [`LANE_COST`].  With uniform weights the result is a fewest-hop
//! path; among several equally short paths the one returned is whatever the
//! heap yields first, and callers must not depend on which.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use fm_core::{Point, VertexId};

use crate::level::{Level, Vertex};

/// Cost of traversing one lane.
const LANE_COST: u32 = 1;

// ── Route ─────────────────────────────────────────────────────────────────────

/// The result of a routing query: the vertex sequence from start to end and
/// the matching coordinates (for rendering and motion).
///
/// Both vectors are empty when no path exists.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Route {
    pub vertices: Vec<VertexId>,
    pub coords:   Vec<Point>,
}

impl Route {
    /// `true` when the query found no path.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Number of lanes traversed.
    pub fn hop_count(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }
}

// ── Nearest vertex ────────────────────────────────────────────────────────────

/// Index of the vertex closest to `pos` by Euclidean distance.
///
/// Linear scan; on equal distances the lowest index wins.  Returns `None` only
/// for an empty vertex list.
pub fn nearest_vertex(pos: Point, vertices: &[Vertex]) -> Option<VertexId> {
    let mut best: Option<(f64, VertexId)> = None;
    for v in vertices {
        let d = pos.distance_sq(v.pos);
        match best {
            Some((best_d, _)) if d >= best_d => {}
            _ => best = Some((d, v.id)),
        }
    }
    best.map(|(_, id)| id)
}

// ── Dijkstra internals ────────────────────────────────────────────────────────

/// Fewest-hop path over `level`.  Both endpoints must be in range.
pub(crate) fn shortest_path(level: &Level, start: VertexId, end: VertexId) -> Route {
    if start == end {
        return Route {
            vertices: vec![start],
            coords:   vec![level.position(start)],
        };
    }

    let n = level.vertex_count();
    // dist[v] = best known hop cost to reach v.
    let mut dist = vec![u32::MAX; n];
    // prev[v] = vertex that reached v; INVALID for unreached vertices.
    let mut prev = vec![VertexId::INVALID; n];

    dist[start.index()] = 0;

    // Min-heap: (cost, vertex).  Reverse makes BinaryHeap (max) behave as min-heap.
    let mut heap: BinaryHeap<Reverse<(u32, VertexId)>> = BinaryHeap::new();
    heap.push(Reverse((0, start)));

    while let Some(Reverse((cost, v))) = heap.pop() {
        if v == end {
            return reconstruct(level, &prev, end);
        }

        // Skip stale heap entries.
        if cost > dist[v.index()] {
            continue;
        }

        for &next in level.neighbors(v) {
            let new_cost = cost.saturating_add(LANE_COST);
            if new_cost < dist[next.index()] {
                dist[next.index()] = new_cost;
                prev[next.index()] = v;
                heap.push(Reverse((new_cost, next)));
            }
        }
    }

    Route::default()
}

fn reconstruct(level: &Level, prev: &[VertexId], end: VertexId) -> Route {
    let mut vertices = vec![end];
    let mut cur = end;
    while prev[cur.index()] != VertexId::INVALID {
        cur = prev[cur.index()];
        vertices.push(cur);
    }
    vertices.reverse();
    let coords = vertices.iter().map(|&v| level.position(v)).collect();
    Route { vertices, coords }
}
