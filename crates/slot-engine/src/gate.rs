//! Acceptance test for a candidate slot against one booked neighbor.

use crate::time::{AppointmentInterval, BusinessWindow, CandidateSlot};

/// Whether `candidate` is free with respect to a single booked interval.
///
/// A candidate is open when it ends strictly before `booked` starts, or when it
/// starts strictly after `booked` ends and still ends by the window close.
///
/// Only one neighbor is checked. Choosing which neighbor matters is the job of
/// [`find_slot`](crate::day::find_slot).
pub fn is_open(
    candidate: &CandidateSlot,
    booked: &AppointmentInterval,
    window: &BusinessWindow,
) -> bool {
    let before = candidate.end() < booked.start;
    let after = candidate.start() > booked.end && candidate.end() <= window.close();
    before || after
}
