//! Plain data rows written by output backends.

use fm_robot::Robot;
use fm_traffic::Reservation;

/// One robot's position and status at a snapshot tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RobotSnapshotRow {
    pub robot_id: u32,
    pub tick:     u64,
    pub x:        f64,
    pub y:        f64,
    /// Lower-case status name (`idle`, `moving`, ...).
    pub status:   &'static str,
    /// `None` when the robot has no destination.
    pub dest_x:   Option<f64>,
    pub dest_y:   Option<f64>,
}

impl RobotSnapshotRow {
    pub fn from_robot(tick: u64, robot: &Robot) -> Self {
        let pos = robot.position();
        let dest = robot.destination();
        Self {
            robot_id: robot.id().0,
            tick,
            x:        pos.x,
            y:        pos.y,
            status:   robot.status().as_str(),
            dest_x:   dest.map(|d| d.x),
            dest_y:   dest.map(|d| d.y),
        }
    }
}

/// Per-tick counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub tick:         u64,
    pub elapsed_ms:   u64,
    pub moving:       u64,
    pub waiting:      u64,
    /// Robots that arrived during this tick.
    pub arrived:      u64,
    pub reservations: u64,
}

/// One live lane reservation at a snapshot tick, in the direction it was
/// requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReservationRow {
    pub tick:     u64,
    pub from:     u32,
    pub to:       u32,
    pub robot_id: u32,
}

impl ReservationRow {
    pub fn from_reservation(tick: u64, res: &Reservation) -> Self {
        Self {
            tick,
            from:     res.lane.from.0,
            to:       res.lane.to.0,
            robot_id: res.holder.0,
        }
    }
}
