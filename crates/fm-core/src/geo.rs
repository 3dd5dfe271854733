//! Planar coordinates.
//!
//! Nav-graph coordinates are building-local metres (or whatever unit the
//! graph author used), so everything here is plain 2-D Euclidean geometry in
//! `f64`.

use std::fmt;

/// A point (or displacement) in the plane of a building level.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Straight-line distance to `other`.
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        self.distance_sq(other).sqrt()
    }

    /// Squared distance.  Cheaper than [`distance`](Self::distance) when only
    /// the ordering matters (nearest-vertex scans).
    #[inline]
    pub fn distance_sq(self, other: Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }

    /// Move `step` units from `self` towards `target`.
    ///
    /// The caller guarantees the two points are not coincident; the result is
    /// meaningless (NaN) otherwise.
    #[inline]
    pub fn step_towards(self, target: Point, step: f64) -> Point {
        let dist = self.distance(target);
        Point {
            x: self.x + (target.x - self.x) / dist * step,
            y: self.y + (target.y - self.y) / dist * step,
        }
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}
