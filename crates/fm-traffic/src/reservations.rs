//! The `LaneReservations` table and wait queue.

use std::collections::BTreeSet;

use tracing::debug;

use fm_core::RobotId;
use fm_graph::Lane;

use crate::SegmentKey;

#[cfg(not(feature = "fx-hash"))]
type Map<K, V> = std::collections::HashMap<K, V>;
#[cfg(feature = "fx-hash")]
type Map<K, V> = rustc_hash::FxHashMap<K, V>;

/// One live reservation: who holds the segment and in which direction they
/// asked for it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Reservation {
    pub holder: RobotId,
    pub lane:   Lane,
}

/// Reservation table plus wait queue.
///
/// Invariants:
/// - at most one reservation per [`SegmentKey`];
/// - a robot is in the wait queue only while the coordinator has it in the
///   waiting state, and is removed the moment one of its requests is granted.
#[derive(Debug, Default)]
pub struct LaneReservations {
    reserved: Map<SegmentKey, Reservation>,
    waiting:  Map<RobotId, Lane>,
    grants:   u64,
    releases: u64,
}

impl LaneReservations {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Reservation table ─────────────────────────────────────────────────

    /// Try to reserve `lane` for `robot`.
    ///
    /// Granted when nobody else holds the segment in either direction.
    /// Requesting a segment the robot already holds is granted again without
    /// counting as a new grant.  On any grant the robot leaves the wait queue.
    /// A denial has no side effects.
    pub fn request(&mut self, robot: RobotId, lane: Lane) -> bool {
        let key = SegmentKey::from(lane);
        match self.reserved.get_mut(&key) {
            Some(res) if res.holder != robot => {
                debug!(robot = robot.0, %lane, holder = res.holder.0, "lane denied");
                return false;
            }
            Some(res) => res.lane = lane,
            None => {
                self.reserved.insert(key, Reservation { holder: robot, lane });
                self.grants += 1;
                debug!(robot = robot.0, %lane, "lane reserved");
            }
        }
        self.waiting.remove(&robot);
        true
    }

    /// Drop the reservation on `lane`'s segment, returning the former holder.
    ///
    /// Releasing a segment nobody holds is a no-op.  Waiters are not
    /// notified.
    pub fn release(&mut self, lane: Lane) -> Option<RobotId> {
        let res = self.reserved.remove(&SegmentKey::from(lane))?;
        self.releases += 1;
        debug!(robot = res.holder.0, %lane, "lane released");
        Some(res.holder)
    }

    /// Release every segment held by `robot`; returns the released lanes in
    /// ascending segment order.
    pub fn release_held_by(&mut self, robot: RobotId) -> Vec<Lane> {
        let mut keys: Vec<SegmentKey> = self
            .reserved
            .iter()
            .filter(|(_, res)| res.holder == robot)
            .map(|(&key, _)| key)
            .collect();
        keys.sort_unstable();
        keys.into_iter()
            .filter_map(|key| self.reserved.remove(&key))
            .map(|res| {
                self.releases += 1;
                debug!(robot = robot.0, lane = %res.lane, "lane released");
                res.lane
            })
            .collect()
    }

    /// Current holder of `lane`'s segment, in either direction.
    pub fn holder(&self, lane: Lane) -> Option<RobotId> {
        self.reserved.get(&SegmentKey::from(lane)).map(|res| res.holder)
    }

    /// `true` if `robot` could be granted `lane` right now.
    pub fn is_free_for(&self, robot: RobotId, lane: Lane) -> bool {
        self.holder(lane).is_none_or(|holder| holder == robot)
    }

    /// Lanes currently held by `robot`.
    pub fn held_by(&self, robot: RobotId) -> Vec<Lane> {
        let mut lanes: Vec<Lane> = self
            .reserved
            .values()
            .filter(|res| res.holder == robot)
            .map(|res| res.lane)
            .collect();
        lanes.sort_unstable();
        lanes
    }

    /// All live reservations, sorted by segment.
    pub fn reservations(&self) -> Vec<(SegmentKey, Reservation)> {
        let mut all: Vec<_> = self.reserved.iter().map(|(&k, &r)| (k, r)).collect();
        all.sort_unstable_by_key(|&(k, _)| k);
        all
    }

    pub fn reserved_count(&self) -> usize {
        self.reserved.len()
    }

    /// Grants issued so far (re-entrant re-grants excluded).
    pub fn grant_count(&self) -> u64 {
        self.grants
    }

    /// Successful releases so far.
    pub fn release_count(&self) -> u64 {
        self.releases
    }

    // ── Wait queue ────────────────────────────────────────────────────────

    /// Record that `robot` is blocked on `lane`.  Replaces any earlier entry.
    pub fn add_waiting(&mut self, robot: RobotId, lane: Lane) {
        debug!(robot = robot.0, %lane, "robot waiting");
        self.waiting.insert(robot, lane);
    }

    /// Remove `robot` from the wait queue, returning the lane it waited on.
    pub fn remove_waiting(&mut self, robot: RobotId) -> Option<Lane> {
        self.waiting.remove(&robot)
    }

    /// Lane `robot` is blocked on, if any.
    pub fn waiting_on(&self, robot: RobotId) -> Option<Lane> {
        self.waiting.get(&robot).copied()
    }

    pub fn is_waiting(&self, robot: RobotId) -> bool {
        self.waiting.contains_key(&robot)
    }

    /// Robots blocked on `lane`'s segment in either direction.
    ///
    /// An unordered set: membership says who *may* proceed once the segment
    /// frees, not in which order.
    pub fn waiting_for(&self, lane: Lane) -> BTreeSet<RobotId> {
        let key = SegmentKey::from(lane);
        self.waiting
            .iter()
            .filter(|(_, l)| SegmentKey::from(**l) == key)
            .map(|(&robot, _)| robot)
            .collect()
    }

    /// The whole wait queue, sorted by robot.
    pub fn waiting(&self) -> Vec<(RobotId, Lane)> {
        let mut all: Vec<_> = self.waiting.iter().map(|(&r, &l)| (r, l)).collect();
        all.sort_unstable_by_key(|&(r, _)| r);
        all
    }
}
