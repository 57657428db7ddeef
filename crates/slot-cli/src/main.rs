//! `next-slot` CLI — find the earliest free one-hour slot in an appointment file.
//!
//! ## Usage
//!
//! ```sh
//! # Read input.txt, write timeslot.txt
//! next-slot
//!
//! # Explicit paths, print to stdout
//! next-slot -i appointments.txt -o -
//!
//! # Custom business window, historical output format
//! next-slot --open 9:00 --close 18:29 --legacy-format
//!
//! # JSON output
//! next-slot -o - --json
//! ```
//!
//! Logging goes to stderr and is controlled by `RUST_LOG`.

use anyhow::{Context, Result};
use clap::Parser;
use slot_engine::{format_slot, BusinessWindow, SlotFormat, TimePoint};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "next-slot",
    version,
    about = "Find the earliest free one-hour slot across numbered days"
)]
struct Cli {
    /// Appointment file, one `<day> <H:MM>-<H:MM>` per line
    #[arg(short, long, default_value = "input.txt")]
    input: String,

    /// Output file (`-` writes to stdout)
    #[arg(short, long, default_value = "timeslot.txt")]
    output: String,

    /// Start of the business window
    #[arg(long, default_value = "8:00")]
    open: TimePoint,

    /// Last minute a slot may end on
    #[arg(long, default_value = "17:59")]
    close: TimePoint,

    /// Emit the historical `<day> HH:MM:HH:MM` format
    #[arg(long, conflicts_with = "json")]
    legacy_format: bool,

    /// Emit the slot as a JSON object
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let window = BusinessWindow::new(cli.open, cli.close).context("Invalid business window")?;

    let text = std::fs::read_to_string(&cli.input)
        .with_context(|| format!("Failed to read file: {}", cli.input))?;
    let schedule = slot_engine::parse_schedule(&text)
        .with_context(|| format!("Failed to parse appointments in {}", cli.input))?;
    info!(days = schedule.len(), input = %cli.input, "schedule loaded");

    let slot = slot_engine::find_earliest_slot(&schedule, &window);

    let rendered = if cli.json {
        serde_json::to_string(&slot).context("Failed to serialize slot")?
    } else {
        let format = if cli.legacy_format {
            SlotFormat::Legacy
        } else {
            SlotFormat::Canonical
        };
        format_slot(&slot, &window, format)
    };

    write_output(&cli.output, &rendered)?;
    info!(%slot, output = %cli.output, "slot written");
    Ok(())
}

fn write_output(path: &str, content: &str) -> Result<()> {
    if path == "-" {
        println!("{}", content);
    } else {
        std::fs::write(path, content).with_context(|| format!("Failed to write file: {}", path))?;
    }
    Ok(())
}
