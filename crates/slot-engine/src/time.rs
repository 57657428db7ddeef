//! Wall-clock values used by the slot search.
//!
//! Everything here lives inside a single day at minute resolution. Arithmetic
//! that would cross midnight is reported as `None` instead of wrapping.

use std::fmt;
use std::str::FromStr;

use chrono::{Duration, NaiveTime, Timelike};
use serde::{Serialize, Serializer};

use crate::error::{Result, SlotError};

/// Minutes between the first and last minute of a slot.
///
/// A one-hour booking covers `start..=start + 59`, so a slot starting at 08:00
/// ends at 08:59.
pub const SLOT_SPAN_MINUTES: i64 = 59;

/// A time of day with minute resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimePoint(NaiveTime);

impl TimePoint {
    /// Build a time from hour and minute. Returns `None` when out of range.
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self)
    }

    /// Minutes since midnight.
    pub fn minute_of_day(&self) -> u32 {
        self.0.hour() * 60 + self.0.minute()
    }

    /// Add `minutes`, or `None` if the result would leave the day.
    pub fn checked_add_minutes(&self, minutes: i64) -> Option<Self> {
        let (time, overflow) = self.0.overflowing_add_signed(Duration::minutes(minutes));
        (overflow == 0).then_some(Self(time))
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }
}

impl FromStr for TimePoint {
    type Err = SlotError;

    /// Parse `H:MM` or `HH:MM`.
    fn from_str(s: &str) -> Result<Self> {
        NaiveTime::parse_from_str(s.trim(), "%H:%M")
            .map(Self)
            .map_err(|e| SlotError::InvalidTime(format!("'{}': {}", s.trim(), e)))
    }
}

impl fmt::Display for TimePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%-H:%M"))
    }
}

impl Serialize for TimePoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A booked period. Both ends are inclusive minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AppointmentInterval {
    pub start: TimePoint,
    pub end: TimePoint,
}

impl AppointmentInterval {
    pub fn new(start: TimePoint, end: TimePoint) -> Self {
        Self { start, end }
    }
}

impl FromStr for AppointmentInterval {
    type Err = SlotError;

    /// Parse `H:MM-H:MM`. Range ordering is not checked.
    fn from_str(s: &str) -> Result<Self> {
        let (start, end) = s
            .split_once('-')
            .ok_or_else(|| SlotError::InvalidTime(format!("'{}': expected H:MM-H:MM", s.trim())))?;
        Ok(Self {
            start: start.parse()?,
            end: end.parse()?,
        })
    }
}

impl fmt::Display for AppointmentInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// A prospective one-hour booking, always exactly [`SLOT_SPAN_MINUTES`] wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CandidateSlot {
    start: TimePoint,
    end: TimePoint,
}

impl CandidateSlot {
    /// The slot beginning at `start`, or `None` if it would run past midnight.
    pub fn starting_at(start: TimePoint) -> Option<Self> {
        let end = start.checked_add_minutes(SLOT_SPAN_MINUTES)?;
        Some(Self { start, end })
    }

    /// The slot beginning one minute after `booked` ends.
    pub fn after(booked: &AppointmentInterval) -> Option<Self> {
        Self::starting_at(booked.end.checked_add_minutes(1)?)
    }

    pub fn start(&self) -> TimePoint {
        self.start
    }

    pub fn end(&self) -> TimePoint {
        self.end
    }
}

impl fmt::Display for CandidateSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// The part of the day in which slots may be offered.
///
/// `close` is the last minute a slot may end on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusinessWindow {
    open: TimePoint,
    close: TimePoint,
    opening_slot: CandidateSlot,
}

impl BusinessWindow {
    /// Build a window, rejecting one too short to hold a single slot.
    pub fn new(open: TimePoint, close: TimePoint) -> Result<Self> {
        let invalid = || SlotError::InvalidWindow {
            open: open.to_string(),
            close: close.to_string(),
        };
        let opening_slot = CandidateSlot::starting_at(open).ok_or_else(invalid)?;
        if opening_slot.end > close {
            return Err(invalid());
        }
        Ok(Self {
            open,
            close,
            opening_slot,
        })
    }

    pub fn open(&self) -> TimePoint {
        self.open
    }

    pub fn close(&self) -> TimePoint {
        self.close
    }

    /// The first slot of the day, starting exactly at `open`.
    pub fn opening_slot(&self) -> CandidateSlot {
        self.opening_slot
    }
}

impl Default for BusinessWindow {
    /// 08:00 to 17:59.
    fn default() -> Self {
        let open = TimePoint(NaiveTime::MIN + Duration::hours(8));
        let close = TimePoint(NaiveTime::MIN + Duration::hours(17) + Duration::minutes(59));
        Self {
            open,
            close,
            opening_slot: CandidateSlot {
                start: open,
                end: TimePoint(NaiveTime::MIN + Duration::hours(8) + Duration::minutes(59)),
            },
        }
    }
}
