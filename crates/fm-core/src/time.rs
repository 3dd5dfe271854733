//! Simulation time model and run configuration.
//!
//! Time is a monotonically increasing `Tick` counter.  One tick is one
//! discrete coordination step: every moving robot advances by its speed and
//! every waiting robot is re-checked exactly once.  `FleetClock` maps ticks to
//! elapsed simulated milliseconds for output and logging.

use std::fmt;

use crate::{FmError, FmResult};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── FleetClock ────────────────────────────────────────────────────────────────

/// Tracks the current tick and converts it to simulated wall time.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FleetClock {
    /// How many simulated milliseconds one tick represents.
    pub tick_duration_ms: u32,
    /// The current tick, advanced once per coordinator tick.
    pub current_tick: Tick,
}

impl FleetClock {
    pub fn new(tick_duration_ms: u32) -> Self {
        Self { tick_duration_ms, current_tick: Tick::ZERO }
    }

    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = self.current_tick + 1;
    }

    /// Elapsed simulated milliseconds at `tick`.
    #[inline]
    pub fn elapsed_ms_at(&self, tick: Tick) -> u64 {
        tick.0 * self.tick_duration_ms as u64
    }

    /// Elapsed simulated milliseconds at the current tick.
    #[inline]
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms_at(self.current_tick)
    }
}

impl fmt::Display for FleetClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ms = self.elapsed_ms();
        write!(f, "{} ({}.{:03}s)", self.current_tick, ms / 1000, ms % 1000)
    }
}

// ── FleetConfig ───────────────────────────────────────────────────────────────

/// Top-level run configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FleetConfig {
    /// Simulated milliseconds per tick.  Only affects reported time; motion is
    /// expressed per tick.  Default: 50 (a 20 Hz driver).
    pub tick_duration_ms: u32,

    /// Ticks executed by `run`.
    pub total_ticks: u64,

    /// Master RNG seed (robot colours).
    pub seed: u64,

    /// Distance every moving robot covers per tick.  Default: 0.05.
    pub robot_speed: f64,

    /// Emit an observer snapshot every N ticks.  0 disables snapshots.
    pub output_interval_ticks: u64,
}

impl Default for FleetConfig {
    fn default() -> Self {
        Self {
            tick_duration_ms:      50,
            total_ticks:           1_000,
            seed:                  0,
            robot_speed:           0.05,
            output_interval_ticks: 1,
        }
    }
}

impl FleetConfig {
    /// The tick at which `run` stops (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    pub fn make_clock(&self) -> FleetClock {
        FleetClock::new(self.tick_duration_ms)
    }

    /// Reject values the motion model cannot work with.
    pub fn validate(&self) -> FmResult<()> {
        if !self.robot_speed.is_finite() || self.robot_speed <= 0.0 {
            return Err(FmError::Config(format!(
                "robot_speed must be positive and finite, got {}",
                self.robot_speed
            )));
        }
        if self.tick_duration_ms == 0 {
            return Err(FmError::Config("tick_duration_ms must be non-zero".into()));
        }
        Ok(())
    }
}
