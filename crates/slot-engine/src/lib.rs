//! # slot-engine
//!
//! Finds the earliest free one-hour slot across numbered days of booked
//! appointments, inside a fixed business window (08:00 to 17:59 by default).
//!
//! ```rust
//! use slot_engine::{find_earliest_slot, parse_schedule, BusinessWindow};
//!
//! let schedule = parse_schedule("1 8:00-8:30\n1 8:31-9:30\n").unwrap();
//! let slot = find_earliest_slot(&schedule, &BusinessWindow::default());
//! assert_eq!(slot.to_string(), "1 9:31-10:30");
//! ```
//!
//! ## Modules
//!
//! - [`gate`] — Accept or reject a candidate against one booked interval
//! - [`day`] — First open slot within a single day
//! - [`search`] — First open slot across days 1, 2, 3, ...
//! - [`schedule`] — Day → intervals mapping
//! - [`loader`] — Appointment text → [`Schedule`]
//! - [`format`] — Canonical and legacy output strings
//! - [`time`] — Times of day, intervals, slots and the business window
//! - [`error`] — Error types

pub mod day;
pub mod error;
pub mod format;
pub mod gate;
pub mod loader;
pub mod schedule;
pub mod search;
pub mod time;

pub use day::find_slot;
pub use error::SlotError;
pub use format::{format_slot, SlotFormat};
pub use gate::is_open;
pub use loader::parse_schedule;
pub use schedule::{DayId, Schedule};
pub use search::{find_earliest_slot, find_earliest_slot_string, ScheduledSlot};
pub use time::{AppointmentInterval, BusinessWindow, CandidateSlot, TimePoint, SLOT_SPAN_MINUTES};
