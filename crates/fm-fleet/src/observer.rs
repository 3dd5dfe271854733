//! Fleet observer trait for progress reporting and data collection.

use fm_core::Tick;
use fm_robot::Robot;
use fm_traffic::LaneReservations;

use crate::TickReport;

/// Callbacks invoked by [`FleetCoordinator::run`][crate::FleetCoordinator::run]
/// and [`run_ticks`][crate::FleetCoordinator::run_ticks].
///
/// All methods default to no-ops so implementors only override what they
/// care about.
pub trait FleetObserver {
    /// Called before each tick is processed.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after each tick with its report.
    fn on_tick_end(&mut self, _report: &TickReport) {}

    /// Called every `config.output_interval_ticks` ticks, after the tick.
    ///
    /// Robots are in ascending id order.
    fn on_snapshot(&mut self, _tick: Tick, _robots: &[Robot], _traffic: &LaneReservations) {}

    /// Called once when `run`/`run_ticks` returns.
    fn on_run_end(&mut self, _final_tick: Tick) {}
}

/// A [`FleetObserver`] that does nothing.
pub struct NoopObserver;

impl FleetObserver for NoopObserver {}
