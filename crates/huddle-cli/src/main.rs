//! `huddle` CLI — find meeting slots every attendee can make.
//!
//! ## Usage
//!
//! ```sh
//! # Print attendees and 15-minute-spaced slots
//! huddle schedule.txt
//!
//! # Suggest a slot every 30 minutes instead
//! huddle schedule.txt --interval 30
//!
//! # Machine-readable report
//! huddle schedule.txt --format json
//!
//! # Show loader and scan diagnostics
//! huddle schedule.txt -v
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, ValueEnum};
use huddle_engine::{Attendee, HuddleError, ScheduleData, TimeBlock, DEFAULT_SUGGESTION_INTERVAL};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

const RULE: &str = "---------------------------------------------------------------";

#[derive(Parser)]
#[command(
    name = "huddle",
    version,
    about = "Find common meeting slots across attendee calendars"
)]
struct Cli {
    /// Schedule file: meeting length, then a meetings line and a work-day line per attendee
    input: Option<PathBuf>,

    /// Minutes between consecutive suggested slots
    #[arg(
        short,
        long,
        env = "HUDDLE_SUGGESTION_INTERVAL",
        default_value_t = DEFAULT_SUGGESTION_INTERVAL,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    interval: u32,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Log loader and scan diagnostics to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    meeting_length: u32,
    suggestion_interval: u32,
    attendees: &'a [Attendee],
    slots: &'a [TimeBlock],
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // A missing input prints usage but is not treated as a failure.
    let Some(input) = cli.input else {
        eprintln!("Invalid arguments.");
        Cli::command().print_help()?;
        return Ok(());
    };

    let schedule = match ScheduleData::from_path(&input) {
        Ok(schedule) => schedule,
        Err(err @ HuddleError::FileNotFound(_)) => {
            eprintln!("{err}");
            return Ok(());
        }
        Err(err) => {
            return Err(err)
                .with_context(|| format!("Failed to load schedule: {}", input.display()))
        }
    };

    let slots = schedule
        .available_slots(cli.interval)
        .context("Failed to compute availability")?;

    let report = match cli.format {
        Format::Text => render_text(&schedule, &slots),
        Format::Json => render_json(&schedule, cli.interval, &slots)?,
    };
    print!("{}", report);

    Ok(())
}

/// Log to stderr so stdout carries only the report. `--verbose` wins over
/// `RUST_LOG`; without either, only warnings are shown.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn render_text(schedule: &ScheduleData, slots: &[TimeBlock]) -> String {
    let mut out = String::new();
    for (i, attendee) in schedule.attendees.iter().enumerate() {
        out.push_str(&format!("Person #{}:\n", i));
        out.push_str(&format!("\tWork Day:\t{}\n", attendee.work_day));
        out.push_str(&format!("\tCalendar:\t{}\n", join_blocks(&attendee.meetings)));
    }
    out.push_str(RULE);
    out.push('\n');
    out.push_str("Meeting Schedule Results:\n");
    out.push_str(&format!("\tMeeting Length:\t{}\n", schedule.meeting_length));
    out.push_str(&format!("\tTime Slots:\t{}\n", join_blocks(slots)));
    out
}

fn render_json(schedule: &ScheduleData, suggestion_interval: u32, slots: &[TimeBlock]) -> Result<String> {
    let report = JsonReport {
        meeting_length: schedule.meeting_length,
        suggestion_interval,
        attendees: &schedule.attendees,
        slots,
    };
    let mut json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
    json.push('\n');
    Ok(json)
}

fn join_blocks(blocks: &[TimeBlock]) -> String {
    blocks
        .iter()
        .map(|block| block.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
