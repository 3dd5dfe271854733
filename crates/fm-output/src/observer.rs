//! `FleetOutputObserver<W>` bridges `FleetObserver` to an `OutputWriter`.

use fm_core::{FleetClock, FleetConfig, Tick};
use fm_fleet::{FleetObserver, TickReport};
use fm_robot::Robot;
use fm_traffic::LaneReservations;

use crate::row::{ReservationRow, RobotSnapshotRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`FleetObserver`] that writes tick summaries, robot snapshots and the
/// reservation table to any [`OutputWriter`] backend.
///
/// Observer callbacks cannot fail, so writer errors are stored.  After
/// `fleet.run()` returns, check with [`take_error`][Self::take_error].
pub struct FleetOutputObserver<W: OutputWriter> {
    writer:     W,
    clock:      FleetClock,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> FleetOutputObserver<W> {
    /// Create an observer backed by `writer`, using `config` for the
    /// tick-to-milliseconds conversion.
    pub fn new(writer: W, config: &FleetConfig) -> Self {
        Self {
            writer,
            clock:      config.make_clock(),
            last_error: None,
        }
    }

    /// Take the first stored write error, if any.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> FleetObserver for FleetOutputObserver<W> {
    fn on_tick_end(&mut self, report: &TickReport) {
        let row = TickSummaryRow {
            tick:         report.tick.0,
            elapsed_ms:   self.clock.elapsed_ms_at(report.tick),
            moving:       report.moving as u64,
            waiting:      report.waiting as u64,
            arrived:      report.arrived.len() as u64,
            reservations: report.reservations as u64,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, robots: &[Robot], traffic: &LaneReservations) {
        let rows: Vec<RobotSnapshotRow> = robots
            .iter()
            .map(|robot| RobotSnapshotRow::from_robot(tick.0, robot))
            .collect();
        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }

        let held: Vec<ReservationRow> = traffic
            .reservations()
            .iter()
            .map(|(_, res)| ReservationRow::from_reservation(tick.0, res))
            .collect();
        if !held.is_empty() {
            let result = self.writer.write_reservations(&held);
            self.store_err(result);
        }
    }

    fn on_run_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
