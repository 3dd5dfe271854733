//! Values returned to callers of the coordinator.

use fm_core::{RobotId, Tick, VertexId};

/// What happened to a destination request.
///
/// Only `Assigned` changes robot state; the other variants are routine
/// outcomes, not errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssignOutcome {
    /// Route installed; the robot is now moving.
    Assigned { path: Vec<VertexId> },
    /// Start and destination snap to the same vertex.
    AlreadyAtDestination { vertex: VertexId },
    /// The destination vertex is unreachable (or the level has no vertices).
    NoPath { from: Option<VertexId>, to: Option<VertexId> },
}

impl AssignOutcome {
    pub fn is_assigned(&self) -> bool {
        matches!(self, AssignOutcome::Assigned { .. })
    }
}

/// Summary of one [`tick`](crate::FleetCoordinator::tick).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickReport {
    /// The tick that was processed.
    pub tick:          Tick,
    /// Robots that reached their destination this tick.
    pub arrived:       Vec<RobotId>,
    /// Robots denied a lane in the advance pass.
    pub newly_waiting: Vec<RobotId>,
    /// Waiting robots flipped back to moving in the re-check pass.
    pub resumed:       Vec<RobotId>,
    /// Robots moving after the tick.
    pub moving:        usize,
    /// Robots waiting after the tick.
    pub waiting:       usize,
    /// Live reservations after the tick.
    pub reservations:  usize,
}
