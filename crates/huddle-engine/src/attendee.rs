//! A person's work day and booked meetings.

use serde::Serialize;

use crate::block::{RawBlock, TimeBlock};
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attendee {
    /// The only span in which this attendee can be scheduled.
    pub work_day: TimeBlock,
    /// Busy blocks in input order. Not required to be sorted or disjoint.
    pub meetings: Vec<TimeBlock>,
}

impl Attendee {
    pub fn new(work_day: TimeBlock, meetings: Vec<TimeBlock>) -> Self {
        Attendee { work_day, meetings }
    }

    /// Normalize raw `[start, end]` pairs into an attendee.
    pub fn from_raw(work_day: &RawBlock, meetings: &[RawBlock]) -> Result<Self> {
        let meetings = meetings
            .iter()
            .map(TimeBlock::try_from)
            .collect::<Result<Vec<_>>>()?;
        Ok(Attendee {
            work_day: TimeBlock::try_from(work_day)?,
            meetings,
        })
    }
}
