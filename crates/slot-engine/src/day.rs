//! Earliest free slot within a single day.
//!
//! The scan walks the booked intervals in order. The candidate under test always
//! starts one minute after the interval most recently examined, and is checked
//! against the interval that follows it, or against the examined interval itself
//! when it is the last one of the day (the closing-time case).

use tracing::trace;

use crate::gate::is_open;
use crate::time::{AppointmentInterval, BusinessWindow, CandidateSlot};

/// Find the first open slot in a day's booked intervals.
///
/// `intervals` must be ordered by start time; they are not re-sorted. An empty
/// day yields the window's opening slot. Returns `None` when no full slot fits
/// before the window closes. Candidates are never clipped, and a candidate
/// ending after the close is skipped even when the next booking starts later.
pub fn find_slot(
    intervals: &[AppointmentInterval],
    window: &BusinessWindow,
) -> Option<CandidateSlot> {
    let opening = window.opening_slot();
    let Some(first) = intervals.first() else {
        return Some(opening);
    };
    if is_open(&opening, first, window) {
        return Some(opening);
    }

    for (index, current) in intervals.iter().enumerate() {
        // A slot after this interval would cross midnight.
        let Some(candidate) = CandidateSlot::after(current) else {
            trace!(booked = %current, "no candidate after interval");
            continue;
        };
        if candidate.end() > window.close() {
            trace!(%candidate, "candidate runs past close");
            continue;
        }
        let neighbor = intervals.get(index + 1).unwrap_or(current);
        if is_open(&candidate, neighbor, window) {
            return Some(candidate);
        }
        trace!(%candidate, %neighbor, "candidate rejected");
    }

    None
}
