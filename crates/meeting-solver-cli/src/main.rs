//! `find-meeting` CLI — find meeting times from a JSON document on the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Read events + request from stdin, print JSON ranges to stdout
//! echo '{"events":[],"request":{"attendees":["A"],"duration":30}}' | find-meeting
//!
//! # Read from a file, write human-readable output
//! find-meeting -i day.json --format text
//!
//! # Write to a file, with debug logging on stderr
//! RUST_LOG=meeting_solver=debug find-meeting -i day.json -o slots.json
//! ```
//!
//! The input document has the shape:
//!
//! ```json
//! {
//!   "events": [
//!     { "title": "standup", "when": { "start": 540, "end": 555 }, "attendees": ["A", "B"] }
//!   ],
//!   "request": { "attendees": ["A"], "optional_attendees": ["B"], "duration": 30 }
//! }
//! ```

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use meeting_solver::time_range::MINUTES_PER_DAY;
use meeting_solver::{AttendeePolicy, Availability, AvailabilitySolver, Event, MeetingRequest, TimeRange};
use serde::{Deserialize, Serialize};
use std::io::{self, Read};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "find-meeting",
    version,
    about = "Find every time of day a meeting fits"
)]
struct Cli {
    /// Input JSON file (reads from stdin if omitted)
    #[arg(short, long)]
    input: Option<String>,

    /// Output file (writes to stdout if omitted)
    #[arg(short, long)]
    output: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Json)]
    format: Format,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// JSON array of {start, end, duration}
    Json,
    /// One `HH:MM-HH:MM (N min)` line per range
    Text,
}

/// Input document read from the file or stdin.
#[derive(Deserialize)]
struct QueryInput {
    #[serde(default)]
    events: Vec<Event>,
    request: MeetingRequest,
}

#[derive(Serialize)]
struct RangeDto {
    start: u32,
    end: u32,
    duration: u32,
}

impl From<&TimeRange> for RangeDto {
    fn from(r: &TimeRange) -> Self {
        Self {
            start: r.start(),
            end: r.end(),
            duration: r.duration(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let raw = read_input(cli.input.as_deref())?;
    let input: QueryInput =
        serde_json::from_str(&raw).context("Failed to parse events and request JSON")?;
    tracing::info!(
        events = input.events.len(),
        duration = input.request.duration(),
        "running meeting query"
    );

    let availability = AvailabilitySolver::new().query_detailed(&input.events, &input.request);

    let rendered = match cli.format {
        Format::Json => render_json(&availability)?,
        Format::Text => render_text(&availability),
    };
    write_output(cli.output.as_deref(), &rendered)?;

    Ok(())
}

fn render_json(availability: &Availability) -> Result<String> {
    let dtos: Vec<RangeDto> = availability.ranges.iter().map(RangeDto::from).collect();
    let mut json = serde_json::to_string_pretty(&dtos).context("Failed to serialize ranges")?;
    json.push('\n');
    Ok(json)
}

fn render_text(availability: &Availability) -> String {
    let mut out = String::new();
    if availability.ranges.is_empty() {
        out.push_str("no available times\n");
    }
    for r in &availability.ranges {
        out.push_str(&format!(
            "{}-{} ({} min)\n",
            r.start_time().format("%H:%M"),
            format_end(r),
            r.duration()
        ));
    }
    if availability.policy == AttendeePolicy::MandatoryOnly {
        out.push_str("optional attendees could not be accommodated\n");
    }
    out
}

/// `24:00` for ranges that run to the end of the day, otherwise `HH:MM`.
fn format_end(r: &TimeRange) -> String {
    if r.end() == MINUTES_PER_DAY {
        "24:00".to_string()
    } else {
        r.end_time().format("%H:%M").to_string()
    }
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
