//! `fm-traffic`: the lane reservation authority.
//!
//! A robot must hold a reservation on a physical segment before it may drive
//! along it.  Lane `(a, b)` and lane `(b, a)` are the same physical segment,
//! so a reservation in either direction excludes the other.
//!
//! # Crate layout
//!
//! | Module           | Contents                                             |
//! |------------------|------------------------------------------------------|
//! | [`segment`]      | `SegmentKey`, direction-free segment identity        |
//! | [`reservations`] | `LaneReservations`, reservation table and wait queue |
//!
//! # Protocol
//!
//! - [`LaneReservations::request`] grants or denies immediately and never
//!   queues on denial; the caller registers the wait with
//!   [`LaneReservations::add_waiting`].
//! - [`LaneReservations::release`] never wakes anyone.  The coordinator polls
//!   waiters once per tick, so a waiter resumes at most one tick after the
//!   segment frees.
//! - Waiters are an unordered set per segment; no FIFO order is enforced.
//!
//! # Cargo features
//!
//! | Feature   | Effect                                                  |
//! |-----------|---------------------------------------------------------|
//! | `fx-hash` | FxHash instead of SipHash for the internal maps.        |

pub mod reservations;
pub mod segment;


pub use reservations::{LaneReservations, Reservation};
pub use segment::SegmentKey;
