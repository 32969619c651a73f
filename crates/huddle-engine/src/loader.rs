//! Line-oriented schedule file loader.
//!
//! # File format
//!
//! ```text
//! 30
//! [["9:00", "10:30"], ["12:00", "13:00"], ["16:00", "18:00"]]
//! ["9:00", "20:00"]
//! [["10:00", "11:30"], ["12:30", "14:30"]]
//! ["10:00", "18:30"]
//! ```
//!
//! Line 1 is the meeting length in minutes. Every following pair of lines
//! describes one attendee: a JSON array of busy `[start, end]` pairs, then a
//! single `[start, end]` work-day pair. Times are `"H:MM"`/`"HH:MM"` strings
//! or minute counts.
//!
//! A pair with a blank line is skipped silently. A pair that is not valid JSON
//! (or not the expected shape) is skipped with a warning. Invalid times inside
//! well-formed JSON abort the whole load.

use std::io::ErrorKind;
use std::path::Path;

use tracing::{debug, warn};

use crate::attendee::Attendee;
use crate::block::RawBlock;
use crate::error::{HuddleError, Result};
use crate::schedule::ScheduleData;

/// Read and parse a schedule file.
pub fn load_schedule(path: &Path) -> Result<ScheduleData> {
    let input = std::fs::read_to_string(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => HuddleError::FileNotFound(path.to_path_buf()),
        _ => HuddleError::Io(err),
    })?;
    parse_schedule(&input)
}

/// Parse schedule text that has already been read into memory.
pub fn parse_schedule(input: &str) -> Result<ScheduleData> {
    let mut lines = input.lines();
    let meeting_length = parse_meeting_length(lines.next().unwrap_or_default())?;

    let rest: Vec<&str> = lines.collect();
    let mut attendees = Vec::new();

    for (index, pair) in rest.chunks(2).enumerate() {
        // Line numbers are 1-based and the meeting length occupies line 1.
        let line = 2 + index * 2;
        let meetings = pair[0].trim();
        let work_day = pair.get(1).map_or("", |l| l.trim());
        if meetings.is_empty() || work_day.is_empty() {
            debug!(line, "skipping incomplete attendee record");
            continue;
        }

        match decode_record(line, meetings, work_day) {
            Ok((work_day, meetings)) => {
                attendees.push(Attendee::from_raw(&work_day, &meetings)?);
            }
            Err(err) => warn!("{err}"),
        }
    }

    debug!(meeting_length, attendees = attendees.len(), "schedule loaded");
    Ok(ScheduleData {
        meeting_length,
        attendees,
    })
}

fn parse_meeting_length(line: &str) -> Result<u32> {
    let trimmed = line.trim();
    match trimmed.parse::<u32>() {
        Ok(minutes) if minutes > 0 => Ok(minutes),
        _ => Err(HuddleError::InvalidParameter(format!(
            "meeting length must be a positive number of minutes, got {trimmed:?}"
        ))),
    }
}

fn decode_record(line: usize, meetings: &str, work_day: &str) -> Result<(RawBlock, Vec<RawBlock>)> {
    let malformed = || HuddleError::MalformedAttendeeRecord {
        line,
        meetings: meetings.to_string(),
        work_day: work_day.to_string(),
    };
    let raw_meetings: Vec<RawBlock> = serde_json::from_str(meetings).map_err(|_| malformed())?;
    let raw_work_day: RawBlock = serde_json::from_str(work_day).map_err(|_| malformed())?;
    Ok((raw_work_day, raw_meetings))
}
