//! Interval-scan search for meeting slots every attendee can make.
//!
//! A candidate start time walks forward through the bounds window. Each pass
//! checks the candidate against every attendee's remaining meetings in order;
//! the first meeting that collides moves the candidate to that meeting's end
//! and the next pass starts again from the first attendee. A candidate that
//! survives a full pass is recorded, and the cursor steps forward by the
//! suggestion interval.
//!
//! Each call works on private, sorted copies of the attendees' calendars; the
//! caller's data is never touched.

use std::collections::VecDeque;

use serde::Serialize;
use tracing::debug;

use crate::attendee::Attendee;
use crate::block::TimeBlock;
use crate::bounds::resolve_bounds;
use crate::error::{HuddleError, Result};
use crate::time::TimePoint;

/// Minutes between consecutive suggested slots unless configured otherwise.
pub const DEFAULT_SUGGESTION_INTERVAL: u32 = 15;

/// Parameters of one availability search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AvailabilityOptions {
    meeting_length: u32,
    suggestion_interval: u32,
}

impl AvailabilityOptions {
    /// Options for meetings of `meeting_length` minutes, spaced by
    /// [`DEFAULT_SUGGESTION_INTERVAL`].
    pub fn new(meeting_length: u32) -> Result<Self> {
        if meeting_length == 0 {
            return Err(HuddleError::InvalidParameter(
                "meeting length must be at least one minute".to_string(),
            ));
        }
        Ok(AvailabilityOptions {
            meeting_length,
            suggestion_interval: DEFAULT_SUGGESTION_INTERVAL,
        })
    }

    pub fn with_suggestion_interval(self, suggestion_interval: u32) -> Result<Self> {
        if suggestion_interval == 0 {
            return Err(HuddleError::InvalidParameter(
                "suggestion interval must be at least one minute".to_string(),
            ));
        }
        Ok(AvailabilityOptions {
            suggestion_interval,
            ..self
        })
    }

    pub fn meeting_length(&self) -> u32 {
        self.meeting_length
    }

    pub fn suggestion_interval(&self) -> u32 {
        self.suggestion_interval
    }
}

/// Find every slot of exactly `meeting_length` minutes inside the attendees'
/// shared work-day window that collides with nobody's meetings.
///
/// Slots are returned in ascending order and start at least
/// `suggestion_interval` minutes apart. An empty or inverted window yields an
/// empty list.
pub fn find_available_slots(attendees: &[Attendee], options: AvailabilityOptions) -> Vec<TimeBlock> {
    let window = resolve_bounds(attendees);
    let length = options.meeting_length;
    let window_end = window.end.minutes();

    // Sorted by start so that only the front of each queue can collide.
    let mut calendars: Vec<VecDeque<TimeBlock>> = attendees
        .iter()
        .map(|attendee| {
            let mut meetings = attendee.meetings.clone();
            meetings.sort();
            VecDeque::from(meetings)
        })
        .collect();

    let mut slots = Vec::new();
    let mut candidate = window.start.minutes();

    while candidate.saturating_add(length) <= window_end {
        match first_collision(&mut calendars, candidate, length) {
            Some(busy_until) => candidate = busy_until,
            None => {
                // candidate + length <= window_end <= TimePoint::MAX
                slots.push(TimeBlock::new(
                    TimePoint::from_validated(candidate),
                    TimePoint::from_validated(candidate + length),
                ));
                candidate = candidate.saturating_add(options.suggestion_interval);
            }
        }
    }

    debug!(
        window = %window,
        attendees = attendees.len(),
        slots = slots.len(),
        "availability scan complete"
    );
    slots
}

/// The earliest slot [`find_available_slots`] would suggest, if any.
pub fn first_available_slot(attendees: &[Attendee], options: AvailabilityOptions) -> Option<TimeBlock> {
    find_available_slots(attendees, options).into_iter().next()
}

/// Check `[candidate, candidate + length)` against every calendar in order.
///
/// Meetings that ended at or before `candidate` are dropped for good, since
/// the candidate never moves backwards. Returns the end of the first colliding
/// meeting, which is always later than `candidate`.
fn first_collision(
    calendars: &mut [VecDeque<TimeBlock>],
    candidate: u32,
    length: u32,
) -> Option<u32> {
    for calendar in calendars.iter_mut() {
        while calendar
            .front()
            .is_some_and(|meeting| meeting.end.minutes() <= candidate)
        {
            calendar.pop_front();
        }
        if let Some(meeting) = calendar.front() {
            if candidate.saturating_add(length) > meeting.start.minutes() {
                return Some(meeting.end.minutes());
            }
        }
    }
    None
}
