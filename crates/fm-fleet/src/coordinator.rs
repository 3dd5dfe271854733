//! The `FleetCoordinator` and its tick loop.

use tracing::{debug, info, warn};

use fm_core::{FleetClock, FleetConfig, Point, RobotId, RobotRng, Tick, VertexId};
use fm_graph::{Lane, Level, NavGraph, Route};
use fm_robot::{Robot, RobotColor, RobotSnapshot, RobotStatus};
use fm_traffic::{LaneReservations, Reservation, SegmentKey};

use crate::{AssignOutcome, FleetError, FleetObserver, FleetResult, TickReport};

/// Owns the robots, the reservation authority, and the nav graph.
///
/// Robots are stored densely: `RobotId(n)` lives at `robots[n - 1]`, so
/// iteration order is ascending id and stays fixed for the whole run.
///
/// Create via [`FleetBuilder`][crate::FleetBuilder].
pub struct FleetCoordinator {
    pub(crate) config:       FleetConfig,
    pub(crate) clock:        FleetClock,
    pub(crate) graph:        NavGraph,
    pub(crate) active_level: String,
    pub(crate) robots:       Vec<Robot>,
    pub(crate) traffic:      LaneReservations,
    pub(crate) next_id:      RobotId,
}

impl FleetCoordinator {
    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn config(&self) -> &FleetConfig {
        &self.config
    }

    pub fn clock(&self) -> &FleetClock {
        &self.clock
    }

    /// The next tick `tick()` will process.
    pub fn current_tick(&self) -> Tick {
        self.clock.current_tick
    }

    pub fn graph(&self) -> &NavGraph {
        &self.graph
    }

    pub fn active_level_name(&self) -> &str {
        &self.active_level
    }

    pub fn active_level(&self) -> FleetResult<&Level> {
        Ok(self.graph.level(&self.active_level)?)
    }

    /// All robots, ascending id.
    pub fn robots(&self) -> &[Robot] {
        &self.robots
    }

    pub fn robot(&self, id: RobotId) -> FleetResult<&Robot> {
        let slot = self.slot(id)?;
        Ok(&self.robots[slot])
    }

    pub fn snapshots(&self) -> Vec<RobotSnapshot> {
        self.robots.iter().map(Robot::snapshot).collect()
    }

    pub fn traffic(&self) -> &LaneReservations {
        &self.traffic
    }

    /// Live reservations (segment, holder, requested direction), sorted by
    /// segment.
    pub fn reservations(&self) -> Vec<(SegmentKey, Reservation)> {
        self.traffic.reservations()
    }

    /// The wait queue, sorted by robot.
    pub fn waiting(&self) -> Vec<(RobotId, Lane)> {
        self.traffic.waiting()
    }

    // ── Fleet management ──────────────────────────────────────────────────

    /// Create an idle robot at `position` with the next sequential id.
    pub fn spawn(&mut self, position: Point) -> &Robot {
        let id = self.next_id;
        self.next_id = id.next();

        let color = RobotColor::pick(&mut RobotRng::new(self.config.seed, id));
        self.robots.push(Robot::new(id, position, self.config.robot_speed, color));
        info!(robot = id.0, %position, %color, "robot spawned");

        let slot = self.robots.len() - 1;
        &self.robots[slot]
    }

    /// Route `id` to the vertex nearest `destination` on the active level.
    ///
    /// The route starts at the vertex nearest the robot, or, when the robot
    /// is part-way along a lane it holds, runs over that lane first and
    /// continues from the vertex it is heading for.  The held lane stays
    /// reserved until the robot reaches that vertex.
    ///
    /// Unknown robots are an error.  An unreachable destination or one that
    /// snaps to the robot's own vertex leaves the robot untouched and is
    /// reported through [`AssignOutcome`].  A robot re-routed from a vertex
    /// gives up any wait-queue entry first.
    pub fn assign_destination(
        &mut self,
        id:          RobotId,
        destination: Point,
    ) -> FleetResult<AssignOutcome> {
        let slot = self.slot(id)?;
        let level = self.graph.level(&self.active_level)?;
        let robot = &self.robots[slot];

        let held = robot
            .current_lane()
            .filter(|&lane| self.traffic.holder(lane) == Some(id));

        let from = match held {
            Some(lane) => Some(lane.to),
            None => level.nearest_vertex(robot.position()),
        };
        let to = level.nearest_vertex(destination);
        let (Some(start), Some(end)) = (from, to) else {
            warn!(robot = id.0, level = %self.active_level, "no vertices to route over");
            return Ok(AssignOutcome::NoPath { from, to });
        };

        if start == end && held.is_none() {
            info!(robot = id.0, vertex = start.0, "already at destination");
            return Ok(AssignOutcome::AlreadyAtDestination { vertex: start });
        }

        let mut route = level.shortest_path(start, end)?;
        if route.is_empty() {
            info!(robot = id.0, from = start.0, to = end.0, "no path to destination");
            return Ok(AssignOutcome::NoPath { from, to });
        }

        match held {
            // A robot only ever holds the lane it is on.
            Some(lane) => {
                route.vertices.insert(0, lane.from);
                route.coords.insert(0, level.position(lane.from));
                debug!(robot = id.0, %lane, "keeping lane across re-route");
            }
            None => {
                self.traffic.release_held_by(id);
            }
        }
        self.traffic.remove_waiting(id);

        let path = route.vertices.clone();
        self.robots[slot].assign_route(destination, route)?;
        info!(robot = id.0, %destination, hops = path.len() - 1, "destination assigned");
        Ok(AssignOutcome::Assigned { path })
    }

    /// Fewest-hop route between two vertices of the active level.  Empty if
    /// they are not connected.
    pub fn route_between(&self, start: VertexId, end: VertexId) -> FleetResult<Route> {
        Ok(self.active_level()?.shortest_path(start, end)?)
    }

    /// Manually park a robot as idle, charging, or error.
    ///
    /// Drops the robot's route, its reservations, and its wait-queue entry.
    /// `moving` and `waiting` are only ever entered through routing.
    pub fn set_status(&mut self, id: RobotId, status: RobotStatus) -> FleetResult<()> {
        if status.is_active() {
            return Err(FleetError::InvalidManualStatus(status));
        }
        let slot = self.slot(id)?;
        self.traffic.release_held_by(id);
        self.traffic.remove_waiting(id);
        self.robots[slot].halt(status);
        info!(robot = id.0, %status, "status set manually");
        Ok(())
    }

    /// Switch routing to another level.  Refused while any robot is moving or
    /// waiting.
    pub fn set_active_level(&mut self, name: &str) -> FleetResult<()> {
        let active = self.robots.iter().filter(|r| r.status().is_active()).count();
        if active > 0 {
            return Err(FleetError::RobotsActive(active));
        }
        self.graph.level(name)?;
        self.active_level = name.to_owned();
        info!(level = name, "active level switched");
        Ok(())
    }

    // ── Tick loop ─────────────────────────────────────────────────────────

    /// Run one tick: advance every moving robot, then re-check every waiter.
    pub fn tick(&mut self) -> TickReport {
        let now = self.clock.current_tick;
        let mut report = TickReport { tick: now, ..TickReport::default() };

        // ── Pass 1: advance movers ────────────────────────────────────────
        for robot in self.robots.iter_mut() {
            if robot.status() != RobotStatus::Moving {
                continue;
            }
            if robot.advance(&mut self.traffic) {
                report.arrived.push(robot.id());
            } else if robot.status() == RobotStatus::Waiting {
                report.newly_waiting.push(robot.id());
            }
        }

        // ── Pass 2: re-check waiters ──────────────────────────────────────
        //
        // Only flips status; the lane is requested by next tick's pass 1, in
        // id order, so several waiters on one segment race fairly by id.
        for robot in self.robots.iter_mut() {
            if robot.status() != RobotStatus::Waiting {
                continue;
            }
            let id = robot.id();
            let free = robot
                .current_lane()
                .is_some_and(|lane| self.traffic.is_free_for(id, lane));
            if free {
                self.traffic.remove_waiting(id);
                robot.resume();
                report.resumed.push(id);
                debug!(robot = id.0, "robot resumed");
            }
        }

        for robot in &self.robots {
            match robot.status() {
                RobotStatus::Moving => report.moving += 1,
                RobotStatus::Waiting => report.waiting += 1,
                _ => {}
            }
        }
        report.reservations = self.traffic.reserved_count();

        self.clock.advance();
        report
    }

    /// Run `n` ticks from the current position, reporting to `observer`.
    pub fn run_ticks<O: FleetObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.observed_tick(observer);
        }
        observer.on_run_end(self.clock.current_tick);
    }

    /// Run until `config.total_ticks` has been reached.
    pub fn run<O: FleetObserver>(&mut self, observer: &mut O) {
        while self.clock.current_tick < self.config.end_tick() {
            self.observed_tick(observer);
        }
        observer.on_run_end(self.clock.current_tick);
    }

    fn observed_tick<O: FleetObserver>(&mut self, observer: &mut O) {
        let now = self.clock.current_tick;
        observer.on_tick_start(now);
        let report = self.tick();
        observer.on_tick_end(&report);
        if self.config.output_interval_ticks > 0
            && now.0.is_multiple_of(self.config.output_interval_ticks)
        {
            observer.on_snapshot(now, &self.robots, &self.traffic);
        }
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn slot(&self, id: RobotId) -> FleetResult<usize> {
        let slot = (id.0 as usize).wrapping_sub(1);
        if id.0 == 0 || slot >= self.robots.len() {
            return Err(FleetError::RobotNotFound(id));
        }
        Ok(slot)
    }
}
