//! SQLite output backend (feature `sqlite`).
//!
//! Creates `output.db` in the output directory with three tables:
//! `robot_snapshots`, `tick_summaries` and `reservations`.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{OutputResult, ReservationRow, RobotSnapshotRow, TickSummaryRow};

/// Writes fleet output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS robot_snapshots (
                 robot_id INTEGER NOT NULL,
                 tick     INTEGER NOT NULL,
                 x        REAL    NOT NULL,
                 y        REAL    NOT NULL,
                 status   TEXT    NOT NULL,
                 dest_x   REAL,
                 dest_y   REAL
             );
             CREATE TABLE IF NOT EXISTS tick_summaries (
                 tick         INTEGER PRIMARY KEY,
                 elapsed_ms   INTEGER NOT NULL,
                 moving       INTEGER NOT NULL,
                 waiting      INTEGER NOT NULL,
                 arrived      INTEGER NOT NULL,
                 reservations INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS reservations (
                 tick     INTEGER NOT NULL,
                 from_v   INTEGER NOT NULL,
                 to_v     INTEGER NOT NULL,
                 robot_id INTEGER NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_snapshots(&mut self, rows: &[RobotSnapshotRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO robot_snapshots \
                 (robot_id, tick, x, y, status, dest_x, dest_y) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.robot_id,
                    row.tick,
                    row.x,
                    row.y,
                    row.status,
                    row.dest_x,
                    row.dest_y,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO tick_summaries \
             (tick, elapsed_ms, moving, waiting, arrived, reservations) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            rusqlite::params![
                row.tick,
                row.elapsed_ms,
                row.moving,
                row.waiting,
                row.arrived,
                row.reservations,
            ],
        )?;
        Ok(())
    }

    fn write_reservations(&mut self, rows: &[ReservationRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO reservations (tick, from_v, to_v, robot_id) \
                 VALUES (?1, ?2, ?3, ?4)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![row.tick, row.from, row.to, row.robot_id])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
