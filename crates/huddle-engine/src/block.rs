//! Time intervals built from two [`TimePoint`]s.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{HuddleError, Result};
use crate::time::{RawTime, TimePoint};

/// A block specification as it appears in a schedule file, before validation.
///
/// Well-formed input is always a two-element `[start, end]` array; the bare
/// variant exists so that a lone time value is reported as an
/// [`HuddleError::InvalidConstruction`] instead of a JSON shape error.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawBlock {
    Pair(Vec<RawTime>),
    Bare(RawTime),
}

/// A `[start, end)` interval of the day.
///
/// Ordering is by `start`, then `end`. `start <= end` is not enforced; the
/// bounds window of attendees with disjoint work days is an inverted block.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize)]
pub struct TimeBlock {
    pub start: TimePoint,
    pub end: TimePoint,
}

impl TimeBlock {
    /// The widest span a block may cover.
    pub const FULL_DAY: TimeBlock = TimeBlock {
        start: TimePoint::MIN,
        end: TimePoint::MAX,
    };

    pub fn new(start: TimePoint, end: TimePoint) -> Self {
        TimeBlock { start, end }
    }

    /// Build a block from two unvalidated time specifications.
    pub fn parse(start: &RawTime, end: &RawTime) -> Result<Self> {
        Ok(TimeBlock {
            start: TimePoint::try_from(start)?,
            end: TimePoint::try_from(end)?,
        })
    }

    /// Length in minutes; zero for inverted blocks.
    pub fn duration_minutes(&self) -> u32 {
        self.end.minutes().saturating_sub(self.start.minutes())
    }

    /// Half-open overlap test: blocks that only touch do not overlap.
    pub fn overlaps(&self, other: &TimeBlock) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// True when `start > end`.
    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }
}

impl TryFrom<&RawBlock> for TimeBlock {
    type Error = HuddleError;

    fn try_from(raw: &RawBlock) -> Result<Self> {
        match raw {
            RawBlock::Pair(points) => match points.as_slice() {
                [start, end] => TimeBlock::parse(start, end),
                other => Err(HuddleError::InvalidConstruction(format!(
                    "expected [start, end], got {} value(s)",
                    other.len()
                ))),
            },
            RawBlock::Bare(point) => Err(HuddleError::InvalidConstruction(format!(
                "{point:?} has no end time"
            ))),
        }
    }
}

impl fmt::Display for TimeBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.start, self.end)
    }
}
