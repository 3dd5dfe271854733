//! `fm-graph`: navigation graph, nearest-vertex snapping, and routing.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                     |
//! |------------|--------------------------------------------------------------|
//! | [`level`]  | `Vertex`, `VertexAttrs`, `Lane`, `Level` (undirected CSR)    |
//! | [`graph`]  | `NavGraph` (named levels), `NavGraphBuilder`, `LevelBuilder` |
//! | [`router`] | `Route`, hop-count Dijkstra, `nearest_vertex`                |
//! | [`loader`] | `load_nav_graph*` (feature = `"json"` only)                  |
//! | [`error`]  | `GraphError`, `GraphResult<T>`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `json`  | Enables nav-graph JSON loading via `serde_json` (default).   |
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod error;
pub mod graph;
pub mod level;
pub mod router;

#[cfg(feature = "json")]
pub mod loader;

#[cfg(test)]
mod tests;

pub use error::{GraphError, GraphResult};
pub use graph::{LevelBuilder, NavGraph, NavGraphBuilder};
pub use level::{Lane, Level, Vertex, VertexAttrs};
pub use router::{nearest_vertex, Route};

#[cfg(feature = "json")]
pub use loader::{load_nav_graph, load_nav_graph_reader, load_nav_graph_str};
