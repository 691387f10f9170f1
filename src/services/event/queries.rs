use uuid::Uuid;

use super::EventStore;
use crate::models::event::Event;
use crate::utils::date::DateKey;

impl EventStore {
    /// Events of one day in display order; empty if the day has none.
    pub fn events_for(&self, date_key: &DateKey) -> &[Event] {
        self.days.get(date_key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn event_count(&self, date_key: &DateKey) -> usize {
        self.events_for(date_key).len()
    }

    pub fn has_events(&self, date_key: &DateKey) -> bool {
        self.days.contains_key(date_key)
    }

    /// Days holding at least one event, in chronological order.
    pub fn dates(&self) -> impl Iterator<Item = &DateKey> {
        self.days.keys()
    }

    /// Every day with its events, in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = (&DateKey, &[Event])> {
        self.days.iter().map(|(key, events)| (key, events.as_slice()))
    }

    pub fn total_events(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Locate an event by id, returning its day and current index.
    pub fn find_event(&self, id: Uuid) -> Option<(&DateKey, usize, &Event)> {
        self.days.iter().find_map(|(key, events)| {
            events
                .iter()
                .enumerate()
                .find(|(_, event)| event.id == id)
                .map(|(index, event)| (key, index, event))
        })
    }
}
