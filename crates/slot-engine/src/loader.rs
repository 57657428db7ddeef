//! Parse appointment text into a [`Schedule`].
//!
//! One appointment per line, `<day> <H:MM>-<H:MM>`, for example `1 9:00-9:30`.
//! Lines for the same day are expected in chronological order and are kept in
//! file order. Blank lines are skipped; both `\n` and `\r\n` endings work.

use crate::error::{Result, SlotError};
use crate::schedule::{DayId, Schedule};
use crate::time::AppointmentInterval;

/// Parse a whole appointment file.
///
/// # Errors
/// Returns `SlotError::Parse` with the 1-based line number of the first line
/// that is not `<day> <H:MM>-<H:MM>` or whose day is not a positive integer.
pub fn parse_schedule(text: &str) -> Result<Schedule> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| parse_line(line).map_err(|message| SlotError::Parse {
            line: index + 1,
            message,
        }))
        .collect()
}

fn parse_line(line: &str) -> std::result::Result<(DayId, AppointmentInterval), String> {
    let (day, interval) = line
        .trim()
        .split_once(char::is_whitespace)
        .ok_or_else(|| format!("expected '<day> <H:MM>-<H:MM>', got '{}'", line.trim()))?;

    let day = day
        .parse::<u64>()
        .ok()
        .and_then(DayId::new)
        .ok_or_else(|| format!("day must be a positive integer, got '{}'", day))?;

    let interval = interval
        .trim()
        .parse::<AppointmentInterval>()
        .map_err(|e| e.to_string())?;

    Ok((day, interval))
}
