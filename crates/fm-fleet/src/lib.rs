//! `fm-fleet`: the fleet coordinator.
//!
//! Owns every robot and the lane reservation authority, assigns routes, and
//! drives the simulation one discrete tick at a time.
//!
//! # Two-pass tick
//!
//! ```text
//! tick():
//!   ① Advance: every moving robot, ascending RobotId, calls Robot::advance:
//!               request lane → move / snap + release → or turn waiting.
//!   ② Re-check: every waiting robot whose blocked segment is now free
//!               (no reservation by anyone else, either direction) flips
//!               back to moving.  The actual request happens in ① of the
//!               next tick.
//! ```
//!
//! A waiter therefore never jumps ahead within the tick in which the segment
//! was freed, and no robot collection is mutated mid-pass.
//!
//! # Concurrency
//!
//! Single writer.  All methods take `&mut self`; a host that shares a
//! coordinator between threads must serialise access itself (e.g. one mutex
//! around the whole coordinator).
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use fm_core::{FleetConfig, Point};
//! use fm_fleet::{FleetBuilder, NoopObserver};
//!
//! let mut fleet = FleetBuilder::new(FleetConfig::default(), graph)
//!     .level("L1")
//!     .build()?;
//! let id = fleet.spawn(Point::new(0.0, 0.0)).id();
//! fleet.assign_destination(id, Point::new(2.0, 0.0))?;
//! fleet.run(&mut NoopObserver);
//! ```

pub mod builder;
pub mod coordinator;
pub mod error;
pub mod observer;
pub mod report;


pub use builder::FleetBuilder;
pub use coordinator::FleetCoordinator;
pub use error::{FleetError, FleetResult};
pub use observer::{FleetObserver, NoopObserver};
pub use report::{AssignOutcome, TickReport};
