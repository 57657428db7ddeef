//! Immutable day → booked-intervals mapping consumed by the search.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::time::AppointmentInterval;

/// A 1-based day number. Not a calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct DayId(u64);

impl DayId {
    pub const FIRST: DayId = DayId(1);

    /// Returns `None` for day zero.
    pub fn new(day: u64) -> Option<Self> {
        (day >= 1).then_some(Self(day))
    }

    pub fn get(&self) -> u64 {
        self.0
    }

    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for DayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Booked intervals per day, each day's list kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schedule {
    days: BTreeMap<DayId, Vec<AppointmentInterval>>,
}

impl Schedule {
    /// Intervals booked on `day`. A day with no entry is fully free.
    pub fn day(&self, day: DayId) -> &[AppointmentInterval] {
        self.days.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of days with at least one entry.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Days with entries, in increasing order.
    pub fn iter(&self) -> impl Iterator<Item = (DayId, &[AppointmentInterval])> {
        self.days.iter().map(|(day, intervals)| (*day, intervals.as_slice()))
    }
}

impl FromIterator<(DayId, AppointmentInterval)> for Schedule {
    /// Intervals are appended to their day in iteration order.
    fn from_iter<I: IntoIterator<Item = (DayId, AppointmentInterval)>>(iter: I) -> Self {
        let mut days: BTreeMap<DayId, Vec<AppointmentInterval>> = BTreeMap::new();
        for (day, interval) in iter {
            days.entry(day).or_default().push(interval);
        }
        Self { days }
    }
}
