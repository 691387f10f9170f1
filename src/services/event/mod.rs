//! Date-keyed event store.
//! Events are grouped per calendar day in insertion order; the operations
//! are organized across focused submodules and [`PersistentEventStore`]
//! adds the save-after-every-mutation policy on top.

use std::collections::BTreeMap;

use crate::models::event::Event;
use crate::utils::date::DateKey;

pub mod crud;
mod persistent;
pub mod queries;
mod serialization;

pub use persistent::PersistentEventStore;

/// In-memory mapping from day to that day's events.
///
/// A key present in the map always has at least one event: removing the
/// last event of a day removes the day.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventStore {
    pub(crate) days: BTreeMap<DateKey, Vec<Event>>,
}

impl EventStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}
