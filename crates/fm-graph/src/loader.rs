//! Nav-graph JSON loader (feature `json`).
//!
//! # Format
//!
//! ```json
//! {
//!   "building_name": "depot",
//!   "levels": {
//!     "L1": {
//!       "vertices": [[0.0, 0.0, {"name": "dock", "is_charger": true}], [4.5, 0.0]],
//!       "lanes":    [[0, 1, {"speed_limit": 0.0}]]
//!     }
//!   }
//! }
//! ```
//!
//! Vertex attribute objects are optional; only `name` and `is_charger` are
//! read and an empty `name` counts as unnamed.  Lane attribute objects are
//! accepted and ignored.  Levels keep their order from the file.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};

use fm_core::{Point, VertexId};

use crate::graph::{LevelBuilder, NavGraph, NavGraphBuilder};
use crate::level::VertexAttrs;
use crate::{GraphError, GraphResult};

// ── Raw records ───────────────────────────────────────────────────────────────

fn unknown_building() -> String {
    "Unknown".to_owned()
}

#[derive(Deserialize)]
struct RawGraph {
    #[serde(default = "unknown_building")]
    building_name: String,
    #[serde(default)]
    levels:        Map<String, Value>,
}

#[derive(Deserialize)]
struct RawLevel {
    #[serde(default)]
    vertices: Vec<RawVertex>,
    #[serde(default)]
    lanes:    Vec<RawLane>,
}

#[derive(Deserialize, Default)]
struct RawAttrs {
    #[serde(default)]
    name:       Option<String>,
    #[serde(default)]
    is_charger: bool,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawVertex {
    WithAttrs(f64, f64, RawAttrs),
    Plain(f64, f64),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawLane {
    WithAttrs(u32, u32, Value),
    Plain(u32, u32),
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a nav graph from a JSON file.
pub fn load_nav_graph(path: &Path) -> GraphResult<NavGraph> {
    let file = std::fs::File::open(path)?;
    load_nav_graph_reader(std::io::BufReader::new(file))
}

/// Like [`load_nav_graph`] but accepts any `Read` source.
pub fn load_nav_graph_reader<R: Read>(reader: R) -> GraphResult<NavGraph> {
    let raw: RawGraph = serde_json::from_reader(reader)?;
    build(raw)
}

/// Like [`load_nav_graph`] but parses an in-memory string.
pub fn load_nav_graph_str(json: &str) -> GraphResult<NavGraph> {
    let raw: RawGraph = serde_json::from_str(json)?;
    build(raw)
}

// ── Internals ─────────────────────────────────────────────────────────────────

fn build(raw: RawGraph) -> GraphResult<NavGraph> {
    let mut graph = NavGraphBuilder::new(raw.building_name);

    for (name, value) in raw.levels {
        let level: RawLevel = serde_json::from_value(value)
            .map_err(|e| GraphError::Parse(format!("level {name:?}: {e}")))?;

        let mut b = LevelBuilder::new(name);
        for v in level.vertices {
            let (x, y, attrs) = match v {
                RawVertex::WithAttrs(x, y, a) => (x, y, a),
                RawVertex::Plain(x, y) => (x, y, RawAttrs::default()),
            };
            let attrs = VertexAttrs {
                name:       attrs.name.filter(|n| !n.is_empty()),
                is_charger: attrs.is_charger,
            };
            b.add_vertex_with(Point::new(x, y), attrs);
        }
        for lane in level.lanes {
            let (RawLane::WithAttrs(from, to, _) | RawLane::Plain(from, to)) = lane;
            b.add_lane(VertexId(from), VertexId(to));
        }
        graph.add_level(b.build()?)?;
    }

    Ok(graph.build())
}
