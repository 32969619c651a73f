//! # huddle-engine
//!
//! Finds the common free time of a group of people for a meeting of a given
//! length.
//!
//! Every attendee has a work day and a list of booked meetings. The engine
//! intersects the work days into one bounds window, then scans that window for
//! slots that collide with nobody's meetings, suggesting one slot every
//! suggestion interval (15 minutes by default).
//!
//! ## Modules
//!
//! - [`time`] — `TimePoint`: minutes since midnight, parsed from `"H:MM"` or numbers
//! - [`block`] — `TimeBlock`: a `[start, end)` interval of two time points
//! - [`attendee`] — a work day plus busy blocks
//! - [`bounds`] — intersect all work days into one window
//! - [`availability`] — the interval-scan slot search
//! - [`loader`] — line-oriented schedule file parsing
//! - [`schedule`] — `ScheduleData`, the loaded file
//! - [`error`] — Error types

pub mod attendee;
pub mod availability;
pub mod block;
pub mod bounds;
pub mod error;
pub mod loader;
pub mod schedule;
pub mod time;

pub use attendee::Attendee;
pub use availability::{
    find_available_slots, first_available_slot, AvailabilityOptions, DEFAULT_SUGGESTION_INTERVAL,
};
pub use block::{RawBlock, TimeBlock};
pub use bounds::resolve_bounds;
pub use error::HuddleError;
pub use schedule::ScheduleData;
pub use time::{RawTime, TimePoint};
