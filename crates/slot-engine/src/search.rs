//! Earliest free slot across consecutive days.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::day::find_slot;
use crate::format::{format_slot, SlotFormat};
use crate::schedule::{DayId, Schedule};
use crate::time::{BusinessWindow, CandidateSlot};

/// A slot found on a specific day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScheduledSlot {
    pub day: DayId,
    #[serde(flatten)]
    pub slot: CandidateSlot,
}

impl fmt::Display for ScheduledSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.day, self.slot)
    }
}

/// Search days 1, 2, 3, ... and return the first slot found.
///
/// A day missing from `schedule` is fully free, so the search always ends: at
/// the latest on the first unscheduled day.
pub fn find_earliest_slot(schedule: &Schedule, window: &BusinessWindow) -> ScheduledSlot {
    let mut day = DayId::FIRST;
    loop {
        if let Some(slot) = find_slot(schedule.day(day), window) {
            debug!(%day, %slot, "slot found");
            return ScheduledSlot { day, slot };
        }
        debug!(%day, "day fully booked");
        day = day.next();
    }
}

/// [`find_earliest_slot`] rendered with `format`.
pub fn find_earliest_slot_string(
    schedule: &Schedule,
    window: &BusinessWindow,
    format: SlotFormat,
) -> String {
    format_slot(&find_earliest_slot(schedule, window), window, format)
}
