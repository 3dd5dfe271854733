//! `fm-core`: foundational types shared by every `fm-*` crate.
//!
//! This crate has no `fm-*` dependencies and keeps its external ones to
//! `rand` and `thiserror` (plus optional `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                               |
//! |-----------|--------------------------------------------------------|
//! | [`ids`]   | `RobotId`, `VertexId`                                  |
//! | [`geo`]   | `Point`, planar Euclidean distance                     |
//! | [`time`]  | `Tick`, `FleetClock`, `FleetConfig`                    |
//! | [`rng`]   | `RobotRng` (per-robot, deterministic)                  |
//! | [`error`] | `FmError`, `FmResult`                                  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                 |
//! |---------|--------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.    |

pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{FmError, FmResult};
pub use geo::Point;
pub use ids::{RobotId, VertexId};
pub use rng::RobotRng;
pub use time::{FleetClock, FleetConfig, Tick};
