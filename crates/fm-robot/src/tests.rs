//! Unit tests for fm-robot.

use fm_core::{Point, RobotId, VertexId};
use fm_graph::{Lane, Route};
use fm_traffic::LaneReservations;

use crate::{Robot, RobotColor, RobotStatus};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Route 0 → 1 → 2 along the x axis, one unit per hop.
fn line_route() -> Route {
    Route {
        vertices: vec![VertexId(0), VertexId(1), VertexId(2)],
        coords:   vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(2.0, 0.0)],
    }
}

fn lane(a: u32, b: u32) -> Lane {
    Lane::new(VertexId(a), VertexId(b))
}

/// Speed 0.25 keeps every intermediate position exactly representable.
fn robot_at_origin() -> Robot {
    Robot::new(RobotId(1), Point::ORIGIN, 0.25, RobotColor::Blue)
}

// ── Construction & assignment ─────────────────────────────────────────────────

#[cfg(test)]
mod assign {
    use super::*;

    #[test]
    fn new_robot_is_idle_without_route() {
        let r = robot_at_origin();
        assert_eq!(r.status(), RobotStatus::Idle);
        assert!(r.path().is_empty());
        assert_eq!(r.destination(), None);
        assert_eq!(r.current_lane(), None);
    }

    #[test]
    fn assign_route_starts_moving() {
        let mut r = robot_at_origin();
        r.assign_route(Point::new(2.0, 0.0), line_route()).unwrap();
        assert_eq!(r.status(), RobotStatus::Moving);
        assert_eq!(r.cursor(), 0);
        assert_eq!(r.destination(), Some(Point::new(2.0, 0.0)));
        assert_eq!(r.current_lane(), Some(lane(0, 1)));
        assert_eq!(r.path_coords().len(), 3);
    }

    #[test]
    fn empty_route_rejected() {
        let mut r = robot_at_origin();
        assert!(matches!(
            r.assign_route(Point::new(2.0, 0.0), Route::default()),
            Err(crate::RobotError::EmptyRoute(RobotId(1)))
        ));
        assert_eq!(r.status(), RobotStatus::Idle);
    }

    #[test]
    fn snapshot_mirrors_state() {
        let mut r = robot_at_origin();
        r.assign_route(Point::new(2.0, 0.0), line_route()).unwrap();
        let snap = r.snapshot();
        assert_eq!(snap.id, RobotId(1));
        assert_eq!(snap.status, RobotStatus::Moving);
        assert_eq!(snap.color, RobotColor::Blue);
        assert_eq!(snap.path_coords, line_route().coords);
    }
}

// ── advance ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod advance {
    use super::*;

    #[test]
    fn idle_robot_does_not_move() {
        let mut traffic = LaneReservations::new();
        let mut r = robot_at_origin();
        assert!(!r.advance(&mut traffic));
        assert_eq!(r.position(), Point::ORIGIN);
        assert_eq!(traffic.reserved_count(), 0);
    }

    #[test]
    fn moves_by_speed_and_holds_lane() {
        let mut traffic = LaneReservations::new();
        let mut r = robot_at_origin();
        r.assign_route(Point::new(2.0, 0.0), line_route()).unwrap();

        assert!(!r.advance(&mut traffic));
        assert_eq!(r.position(), Point::new(0.25, 0.0));
        assert_eq!(traffic.holder(lane(0, 1)), Some(RobotId(1)));
        assert_eq!(r.cursor(), 0);
    }

    #[test]
    fn snaps_on_vertex_and_releases_lane() {
        let mut traffic = LaneReservations::new();
        let mut r = robot_at_origin();
        r.assign_route(Point::new(2.0, 0.0), line_route()).unwrap();

        for _ in 0..4 {
            assert!(!r.advance(&mut traffic));
        }
        assert_eq!(r.position(), Point::new(1.0, 0.0));
        assert_eq!(r.cursor(), 1);
        assert_eq!(traffic.holder(lane(0, 1)), None);
        assert_eq!(traffic.reserved_count(), 0);
    }

    #[test]
    fn full_route_then_arrival_on_following_call() {
        let mut traffic = LaneReservations::new();
        let mut r = robot_at_origin();
        r.assign_route(Point::new(2.0, 0.0), line_route()).unwrap();

        for _ in 0..8 {
            assert!(!r.advance(&mut traffic));
        }
        assert_eq!(r.position(), Point::new(2.0, 0.0));
        assert_eq!(r.status(), RobotStatus::Moving);

        assert!(r.advance(&mut traffic));
        assert_eq!(r.status(), RobotStatus::Idle);
        assert_eq!(traffic.grant_count(), 2);
        assert_eq!(traffic.release_count(), 2);

        // Arrival is idempotent.
        assert!(!r.advance(&mut traffic));
        assert_eq!(r.position(), Point::new(2.0, 0.0));
        assert_eq!(r.status(), RobotStatus::Idle);
    }

    #[test]
    fn denied_lane_turns_waiting() {
        let mut traffic = LaneReservations::new();
        assert!(traffic.request(RobotId(9), lane(1, 0)));

        let mut r = robot_at_origin();
        r.assign_route(Point::new(2.0, 0.0), line_route()).unwrap();
        assert!(!r.advance(&mut traffic));
        assert_eq!(r.status(), RobotStatus::Waiting);
        assert_eq!(r.position(), Point::ORIGIN);
        assert_eq!(traffic.waiting_on(RobotId(1)), Some(lane(0, 1)));

        // Waiting robots are not advanced.
        assert!(!r.advance(&mut traffic));
        assert_eq!(r.position(), Point::ORIGIN);
    }

    #[test]
    fn resume_after_release() {
        let mut traffic = LaneReservations::new();
        traffic.request(RobotId(9), lane(0, 1));

        let mut r = robot_at_origin();
        r.assign_route(Point::new(2.0, 0.0), line_route()).unwrap();
        r.advance(&mut traffic);
        assert_eq!(r.status(), RobotStatus::Waiting);

        traffic.release(lane(0, 1));
        assert!(r.resume());
        assert!(!r.resume());
        r.advance(&mut traffic);
        assert_eq!(r.status(), RobotStatus::Moving);
        assert_eq!(traffic.holder(lane(0, 1)), Some(RobotId(1)));
        assert!(!traffic.is_waiting(RobotId(1)));
    }

    #[test]
    fn coincident_vertices_advance_cursor_without_moving() {
        let mut traffic = LaneReservations::new();
        let mut r = robot_at_origin();
        let route = Route {
            vertices: vec![VertexId(0), VertexId(1)],
            coords:   vec![Point::ORIGIN, Point::ORIGIN],
        };
        r.assign_route(Point::ORIGIN, route).unwrap();
        assert!(!r.advance(&mut traffic));
        assert_eq!(r.cursor(), 1);
        assert_eq!(r.position(), Point::ORIGIN);
        assert_eq!(traffic.reserved_count(), 0);
        assert!(r.advance(&mut traffic));
    }

    #[test]
    fn diagonal_step_length_is_speed() {
        let mut traffic = LaneReservations::new();
        let mut r = Robot::new(RobotId(1), Point::ORIGIN, 0.5, RobotColor::Red);
        let route = Route {
            vertices: vec![VertexId(0), VertexId(1)],
            coords:   vec![Point::ORIGIN, Point::new(3.0, 4.0)],
        };
        r.assign_route(Point::new(3.0, 4.0), route).unwrap();
        r.advance(&mut traffic);
        assert!((r.position().distance(Point::ORIGIN) - 0.5).abs() < 1e-12);
        assert!((r.position().x - 0.3).abs() < 1e-12);
        assert!((r.position().y - 0.4).abs() < 1e-12);
    }

    #[test]
    fn halt_clears_route() {
        let mut traffic = LaneReservations::new();
        let mut r = robot_at_origin();
        r.assign_route(Point::new(2.0, 0.0), line_route()).unwrap();
        r.advance(&mut traffic);
        r.halt(RobotStatus::Charging);
        assert_eq!(r.status(), RobotStatus::Charging);
        assert!(r.path().is_empty());
        assert_eq!(r.destination(), None);
        assert!(!r.advance(&mut traffic));
    }
}

// ── Status & colour ───────────────────────────────────────────────────────────

#[cfg(test)]
mod status {
    use fm_core::RobotRng;

    use super::*;

    #[test]
    fn labels() {
        assert_eq!(RobotStatus::Waiting.to_string(), "waiting");
        assert_eq!(RobotColor::Magenta.to_string(), "magenta");
        assert!(RobotStatus::Moving.is_active());
        assert!(RobotStatus::Waiting.is_active());
        assert!(!RobotStatus::Charging.is_active());
    }

    #[test]
    fn colour_pick_is_deterministic() {
        let a = RobotColor::pick(&mut RobotRng::new(7, RobotId(3)));
        let b = RobotColor::pick(&mut RobotRng::new(7, RobotId(3)));
        assert_eq!(a, b);
        assert!(RobotColor::ALL.contains(&a));
    }
}
