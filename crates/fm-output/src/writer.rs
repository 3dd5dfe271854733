//! The `OutputWriter` trait implemented by all backend writers.

use crate::{OutputResult, ReservationRow, RobotSnapshotRow, TickSummaryRow};

/// Trait implemented by the CSV and SQLite writers.
///
/// The observer never propagates these errors; they are stored and retrieved
/// with [`FleetOutputObserver::take_error`][crate::FleetOutputObserver::take_error].
pub trait OutputWriter {
    /// Write a batch of robot snapshots.
    fn write_snapshots(&mut self, rows: &[RobotSnapshotRow]) -> OutputResult<()>;

    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Write the reservation table as of one snapshot tick.
    fn write_reservations(&mut self, rows: &[ReservationRow]) -> OutputResult<()>;

    /// Flush and close all underlying handles.  Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
