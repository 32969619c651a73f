//! Error types for huddle-engine operations.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HuddleError {
    #[error("Invalid time: {0}. Valid format is an integer 0 to 2400 or a string \"H:MM\"/\"HH:MM\"")]
    InvalidTimeFormat(String),

    #[error("Invalid time block: {0}")]
    InvalidConstruction(String),

    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// An attendee's line pair could not be decoded. `line` is the 1-based
    /// line number of the meetings line.
    #[error("Could not process attendee at line {line}:\n\tmeetings: {meetings}\n\twork day: {work_day}")]
    MalformedAttendeeRecord {
        line: usize,
        meetings: String,
        work_day: String,
    },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, HuddleError>;
