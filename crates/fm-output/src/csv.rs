//! CSV output backend.
//!
//! Creates three files in the output directory:
//! - `robot_snapshots.csv`
//! - `tick_summaries.csv`
//! - `reservations.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, ReservationRow, RobotSnapshotRow, TickSummaryRow};

/// Writes fleet output to three CSV files.
pub struct CsvWriter {
    snapshots:    Writer<File>,
    summaries:    Writer<File>,
    reservations: Writer<File>,
    finished:     bool,
}

impl CsvWriter {
    /// Create the three CSV files in `dir` (which must exist) and write the
    /// header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut snapshots = Writer::from_path(dir.join("robot_snapshots.csv"))?;
        snapshots.write_record(["robot_id", "tick", "x", "y", "status", "dest_x", "dest_y"])?;

        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record([
            "tick",
            "elapsed_ms",
            "moving",
            "waiting",
            "arrived",
            "reservations",
        ])?;

        let mut reservations = Writer::from_path(dir.join("reservations.csv"))?;
        reservations.write_record(["tick", "from", "to", "robot_id"])?;

        Ok(Self {
            snapshots,
            summaries,
            reservations,
            finished: false,
        })
    }
}

/// Empty cell for a missing value.
fn opt_cell(v: Option<f64>) -> String {
    v.map(|v| v.to_string()).unwrap_or_default()
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[RobotSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.robot_id.to_string(),
                row.tick.to_string(),
                row.x.to_string(),
                row.y.to_string(),
                row.status.to_owned(),
                opt_cell(row.dest_x),
                opt_cell(row.dest_y),
            ])?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.elapsed_ms.to_string(),
            row.moving.to_string(),
            row.waiting.to_string(),
            row.arrived.to_string(),
            row.reservations.to_string(),
        ])?;
        Ok(())
    }

    fn write_reservations(&mut self, rows: &[ReservationRow]) -> OutputResult<()> {
        for row in rows {
            self.reservations.write_record(&[
                row.tick.to_string(),
                row.from.to_string(),
                row.to.to_string(),
                row.robot_id.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.summaries.flush()?;
        self.reservations.flush()?;
        Ok(())
    }
}
