//! `fm-robot`: per-robot position, route, and motion state machine.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                   |
//! |------------|------------------------------------------------------------|
//! | [`status`] | `RobotStatus`, `RobotColor`                                |
//! | [`robot`]  | `Robot` (state + `advance`), `RobotSnapshot`               |
//! | [`error`]  | `RobotError`, `RobotResult<T>`                             |
//!
//! # Motion model
//!
//! ```text
//!   idle ──assign_route──▶ moving ──cursor at last vertex──▶ idle
//!                            │  ▲
//!                 lane denied│  │segment free (coordinator re-check)
//!                            ▼  │
//!                          waiting
//! ```
//!
//! Each call to [`Robot::advance`] while moving:
//!
//! 1. requests the lane `(path[cursor], path[cursor + 1])`; on denial the
//!    robot turns `waiting` and joins the wait queue;
//! 2. otherwise moves `speed` units straight towards `path[cursor + 1]`, or
//!    snaps onto it when it is within `speed`, advancing the cursor and
//!    releasing the lane just finished.
//!
//! Arrival is reported by the call *after* the final snap.  `charging` and
//! `error` are never entered automatically.

pub mod error;
pub mod robot;
pub mod status;

#[cfg(test)]
mod tests;

pub use error::{RobotError, RobotResult};
pub use robot::{Robot, RobotSnapshot};
pub use status::{RobotColor, RobotStatus};
