//! The loaded schedule: meeting length plus attendees.

use std::path::Path;
use std::str::FromStr;

use serde::Serialize;

use crate::attendee::Attendee;
use crate::availability::{find_available_slots, AvailabilityOptions};
use crate::block::TimeBlock;
use crate::error::{HuddleError, Result};
use crate::loader;

/// Everything a schedule file describes. Built once, then only read.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleData {
    /// Required meeting length in minutes.
    pub meeting_length: u32,
    pub attendees: Vec<Attendee>,
}

impl ScheduleData {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        loader::load_schedule(path.as_ref())
    }

    /// Search options for this schedule's meeting length.
    pub fn options(&self, suggestion_interval: u32) -> Result<AvailabilityOptions> {
        AvailabilityOptions::new(self.meeting_length)?.with_suggestion_interval(suggestion_interval)
    }

    /// Every slot all attendees can make, spaced by `suggestion_interval`.
    pub fn available_slots(&self, suggestion_interval: u32) -> Result<Vec<TimeBlock>> {
        let options = self.options(suggestion_interval)?;
        Ok(find_available_slots(&self.attendees, options))
    }
}

impl FromStr for ScheduleData {
    type Err = HuddleError;

    fn from_str(s: &str) -> Result<Self> {
        loader::parse_schedule(s)
    }
}
