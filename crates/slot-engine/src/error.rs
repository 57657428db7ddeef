//! Error types for slot-engine operations.
//!
//! "No slot on this day" is not an error: it is `None` from
//! [`find_slot`](crate::day::find_slot). These variants cover the collaborators
//! around the search (input parsing and window configuration).

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SlotError {
    /// A schedule line could not be parsed. `line` is 1-based.
    #[error("Schedule parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Invalid time: {0}")]
    InvalidTime(String),

    /// The business window cannot hold a single full slot.
    #[error("Invalid business window {open}-{close}: no room for a full slot")]
    InvalidWindow { open: String, close: String },
}

pub type Result<T> = std::result::Result<T, SlotError>;
