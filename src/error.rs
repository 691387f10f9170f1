//! Errors surfaced by the event store and the calendar controller.
//!
//! These signal a desync between the surrounding UI and the calendar state.
//! Malformed persisted records never show up here: they are dropped during load.

use thiserror::Error;
use uuid::Uuid;

use crate::utils::date::DateKey;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    /// The index does not name an event in the day's list.
    #[error("no event at index {index} on {date_key} (day has {len} events)")]
    OutOfRange {
        date_key: DateKey,
        index: usize,
        len: usize,
    },

    /// A day-scoped action ran with no day selected.
    #[error("no date is selected")]
    NoSelection,

    /// No event with this id exists on the selected day.
    #[error("event {0} not found")]
    EventNotFound(Uuid),

    /// Strict validation rejected the draft.
    #[error("invalid event: {0}")]
    InvalidEvent(String),
}

pub type Result<T> = std::result::Result<T, CalendarError>;
