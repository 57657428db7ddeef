//! Output rendering for a found slot.

use serde::Serialize;

use crate::search::ScheduledSlot;
use crate::time::{BusinessWindow, TimePoint};

/// How a [`ScheduledSlot`] is rendered as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum SlotFormat {
    /// `<day> H:MM-H:MM`, hours not zero-padded.
    #[default]
    Canonical,
    /// The historical output: the opening slot as `<day> H:MM-H:MM`, any other
    /// slot as `<day> HH:MM:HH:MM` with a colon between start and end.
    Legacy,
}

/// Render `slot` in `format`. `window` identifies the opening slot for
/// [`SlotFormat::Legacy`].
pub fn format_slot(slot: &ScheduledSlot, window: &BusinessWindow, format: SlotFormat) -> String {
    match format {
        SlotFormat::Canonical => slot.to_string(),
        SlotFormat::Legacy if slot.slot == window.opening_slot() => slot.to_string(),
        SlotFormat::Legacy => format!(
            "{} {}:{}",
            slot.day,
            padded(slot.slot.start()),
            padded(slot.slot.end())
        ),
    }
}

fn padded(time: TimePoint) -> String {
    format!("{:02}:{:02}", time.hour(), time.minute())
}
