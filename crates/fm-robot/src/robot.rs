//! The `Robot` state machine.

use tracing::{debug, info};

use fm_core::{Point, RobotId, VertexId};
use fm_graph::{Lane, Route};
use fm_traffic::LaneReservations;

use crate::{RobotColor, RobotError, RobotResult, RobotStatus};

/// Remaining distances below this count as "already there": the robot snaps
/// without computing a direction, which would divide by zero.
const COINCIDENT_EPSILON: f64 = 1e-9;

/// One robot: continuous position, route, cursor, and status.
#[derive(Debug, Clone)]
pub struct Robot {
    id:          RobotId,
    position:    Point,
    destination: Option<Point>,
    /// Route as vertex indices.
    path:        Vec<VertexId>,
    /// Coordinates parallel to `path`.
    path_coords: Vec<Point>,
    /// Index into `path` of the last vertex reached; the robot is heading for
    /// `path[cursor + 1]`.
    cursor:      usize,
    status:      RobotStatus,
    /// Distance covered per tick.
    speed:       f64,
    color:       RobotColor,
}

/// Read-only view of a robot for renderers and output writers.
#[derive(Debug, Clone, PartialEq)]
pub struct RobotSnapshot {
    pub id:          RobotId,
    pub position:    Point,
    pub destination: Option<Point>,
    pub status:      RobotStatus,
    pub color:       RobotColor,
    pub path_coords: Vec<Point>,
}

impl Robot {
    /// A new idle robot with no route.
    pub fn new(id: RobotId, position: Point, speed: f64, color: RobotColor) -> Self {
        Self {
            id,
            position,
            destination: None,
            path: Vec::new(),
            path_coords: Vec::new(),
            cursor: 0,
            status: RobotStatus::Idle,
            speed,
            color,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn id(&self) -> RobotId { self.id }
    pub fn position(&self) -> Point { self.position }
    pub fn destination(&self) -> Option<Point> { self.destination }
    pub fn status(&self) -> RobotStatus { self.status }
    pub fn speed(&self) -> f64 { self.speed }
    pub fn color(&self) -> RobotColor { self.color }
    pub fn path(&self) -> &[VertexId] { &self.path }
    pub fn path_coords(&self) -> &[Point] { &self.path_coords }
    pub fn cursor(&self) -> usize { self.cursor }

    /// The lane the robot is on or about to enter, `None` once the cursor is
    /// on the final vertex.
    pub fn current_lane(&self) -> Option<Lane> {
        let from = *self.path.get(self.cursor)?;
        let to = *self.path.get(self.cursor + 1)?;
        Some(Lane::new(from, to))
    }

    pub fn snapshot(&self) -> RobotSnapshot {
        RobotSnapshot {
            id:          self.id,
            position:    self.position,
            destination: self.destination,
            status:      self.status,
            color:       self.color,
            path_coords: self.path_coords.clone(),
        }
    }

    // ── Transitions ───────────────────────────────────────────────────────

    /// Replace destination and route, reset the cursor, and start moving.
    ///
    /// The caller is responsible for releasing any lane the previous route
    /// still held.
    pub fn assign_route(&mut self, destination: Point, route: Route) -> RobotResult<()> {
        if route.is_empty() {
            return Err(RobotError::EmptyRoute(self.id));
        }
        debug!(robot = self.id.0, hops = route.hop_count(), "route assigned");
        self.destination = Some(destination);
        self.path = route.vertices;
        self.path_coords = route.coords;
        self.cursor = 0;
        self.status = RobotStatus::Moving;
        Ok(())
    }

    /// Advance one tick along the route.  Returns `true` on the call that
    /// observes arrival.
    ///
    /// No-op unless the robot is moving with a non-empty route.
    pub fn advance(&mut self, traffic: &mut LaneReservations) -> bool {
        if self.status != RobotStatus::Moving || self.path.is_empty() {
            return false;
        }

        let Some(lane) = self.current_lane() else {
            self.status = RobotStatus::Idle;
            info!(robot = self.id.0, position = %self.position, "robot arrived");
            return true;
        };

        if !traffic.request(self.id, lane) {
            self.status = RobotStatus::Waiting;
            traffic.add_waiting(self.id, lane);
            return false;
        }

        let target = self.path_coords[self.cursor + 1];
        let remaining = self.position.distance(target);
        if remaining < COINCIDENT_EPSILON || remaining <= self.speed {
            self.position = target;
            self.cursor += 1;
            traffic.release(lane);
        } else {
            self.position = self.position.step_towards(target, self.speed);
        }
        false
    }

    /// Waiting → moving.  Returns `false` (and changes nothing) from any
    /// other status.
    pub fn resume(&mut self) -> bool {
        if self.status != RobotStatus::Waiting {
            return false;
        }
        self.status = RobotStatus::Moving;
        true
    }

    /// Drop the route and put the robot in `status` where it stands.
    ///
    /// Lane bookkeeping is the caller's job.
    pub fn halt(&mut self, status: RobotStatus) {
        self.path.clear();
        self.path_coords.clear();
        self.cursor = 0;
        self.destination = None;
        self.status = status;
    }
}
