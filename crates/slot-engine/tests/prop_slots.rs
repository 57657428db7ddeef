//! Property-based tests for the slot search using proptest.
//!
//! Days are generated as ordered, non-overlapping intervals inside the default
//! business window, which is the input shape the search is defined for.

use proptest::prelude::*;
use slot_engine::{
    find_earliest_slot, find_slot, AppointmentInterval, BusinessWindow, CandidateSlot, DayId,
    Schedule, TimePoint,
};

const OPEN: u32 = 8 * 60;
const CLOSE: u32 = 17 * 60 + 59;

fn at(minute: u32) -> TimePoint {
    TimePoint::from_hm(minute / 60, minute % 60).unwrap()
}

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// Ordered, non-overlapping intervals within 08:00..=17:59, as (start, end)
/// minutes of day.
fn arb_day() -> impl Strategy<Value = Vec<(u32, u32)>> {
    prop::collection::vec((0u32..=90, 0u32..=180), 0..12).prop_map(|steps| {
        let mut cursor = OPEN;
        let mut out = Vec::new();
        for (gap, length) in steps {
            let start = cursor + gap;
            let end = start + length;
            if end > CLOSE {
                break;
            }
            out.push((start, end));
            cursor = end + 1;
        }
        out
    })
}

fn to_intervals(day: &[(u32, u32)]) -> Vec<AppointmentInterval> {
    day.iter()
        .map(|&(s, e)| AppointmentInterval::new(at(s), at(e)))
        .collect()
}

fn overlaps(slot: &CandidateSlot, start: u32, end: u32) -> bool {
    let (s, e) = (slot.start().minute_of_day(), slot.end().minute_of_day());
    s <= end && start <= e
}

/// The earliest slot anchored at the window open or one minute after an
/// appointment that fits the window and touches no appointment.
fn reference(day: &[(u32, u32)]) -> Option<(u32, u32)> {
    std::iter::once(OPEN)
        .chain(day.iter().map(|&(_, e)| e + 1))
        .map(|start| (start, start + 59))
        .find(|&(s, e)| e <= CLOSE && day.iter().all(|&(bs, be)| e < bs || s > be))
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn slot_is_59_minutes_and_inside_window(day in arb_day()) {
        if let Some(slot) = find_slot(&to_intervals(&day), &BusinessWindow::default()) {
            let (s, e) = (slot.start().minute_of_day(), slot.end().minute_of_day());
            prop_assert_eq!(e - s, 59);
            prop_assert!(s >= OPEN);
            prop_assert!(e <= CLOSE);
        }
    }

    #[test]
    fn slot_never_overlaps_a_booking(day in arb_day()) {
        if let Some(slot) = find_slot(&to_intervals(&day), &BusinessWindow::default()) {
            for &(start, end) in &day {
                prop_assert!(!overlaps(&slot, start, end), "slot {} overlaps {}-{}", slot, start, end);
            }
        }
    }

    #[test]
    fn slot_is_anchored_at_open_or_after_a_booking(day in arb_day()) {
        if let Some(slot) = find_slot(&to_intervals(&day), &BusinessWindow::default()) {
            let s = slot.start().minute_of_day();
            prop_assert!(s == OPEN || day.iter().any(|&(_, e)| e + 1 == s));
        }
    }

    #[test]
    fn matches_brute_force_reference(day in arb_day()) {
        let got = find_slot(&to_intervals(&day), &BusinessWindow::default())
            .map(|slot| (slot.start().minute_of_day(), slot.end().minute_of_day()));
        prop_assert_eq!(got, reference(&day));
    }

    #[test]
    fn search_returns_first_day_with_a_slot(days in prop::collection::vec(arb_day(), 0..6)) {
        let schedule: Schedule = days
            .iter()
            .enumerate()
            .flat_map(|(i, day)| {
                let id = DayId::new(i as u64 + 1).unwrap();
                to_intervals(day).into_iter().map(move |interval| (id, interval))
            })
            .collect();
        let window = BusinessWindow::default();

        let found = find_earliest_slot(&schedule, &window);
        prop_assert!(found.day.get() >= 1);

        for earlier in 1..found.day.get() {
            let id = DayId::new(earlier).unwrap();
            prop_assert!(find_slot(schedule.day(id), &window).is_none());
        }
        prop_assert_eq!(Some(found.slot), find_slot(schedule.day(found.day), &window));
    }
}

#[test]
fn full_coverage_has_no_slot() {
    let day = vec![(OPEN, 12 * 60), (12 * 60 + 1, CLOSE)];
    assert!(find_slot(&to_intervals(&day), &BusinessWindow::default()).is_none());
    assert_eq!(reference(&day), None);
}
