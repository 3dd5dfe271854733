//! `fm-output`: writers for fleet run output.
//!
//! | Feature   | Backend | Files created                                                   |
//! |-----------|---------|-----------------------------------------------------------------|
//! | *(none)*  | CSV     | `robot_snapshots.csv`, `tick_summaries.csv`, `reservations.csv` |
//! | `sqlite`  | SQLite  | `output.db`                                                     |
//!
//! Both backends implement [`OutputWriter`] and are driven by
//! [`FleetOutputObserver`], which implements `fm_fleet::FleetObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use fm_output::{CsvWriter, FleetOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = FleetOutputObserver::new(writer, fleet.config());
//! fleet.run(&mut obs);
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::FleetOutputObserver;
pub use row::{ReservationRow, RobotSnapshotRow, TickSummaryRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
