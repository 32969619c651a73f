//! Reduce attendees' work days to the single window they all share.

use crate::attendee::Attendee;
use crate::block::TimeBlock;

/// Intersect every attendee's work day, starting from [`TimeBlock::FULL_DAY`].
///
/// The window's start only moves later and its end only moves earlier, so the
/// result is the latest start paired with the earliest end. With no attendees
/// the full-day span is returned unchanged. Attendees whose work days do not
/// overlap yield an inverted block (`start > end`).
pub fn resolve_bounds(attendees: &[Attendee]) -> TimeBlock {
    attendees
        .iter()
        .fold(TimeBlock::FULL_DAY, |mut window, attendee| {
            let work_day = attendee.work_day;
            if work_day.start > window.start {
                window.start = work_day.start;
            }
            if work_day.end < window.end {
                window.end = work_day.end;
            }
            window
        })
}
