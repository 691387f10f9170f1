use uuid::Uuid;

use super::EventStore;
use crate::error::{CalendarError, Result};
use crate::models::event::Event;
use crate::utils::date::DateKey;

impl EventStore {
    /// Append an event to the end of a day's list.
    ///
    /// Fields are taken as given; nothing checks the name or time range.
    pub fn add_event(&mut self, date_key: DateKey, event: Event) {
        log::debug!("Adding event '{}' on {}", event.name, date_key);
        self.days.entry(date_key).or_default().push(event);
    }

    /// Remove the event at `index` and return it.
    ///
    /// Later events on the same day shift down by one; other days are
    /// untouched. An absent day counts as an empty list.
    pub fn remove_event(&mut self, date_key: &DateKey, index: usize) -> Result<Event> {
        let events = self.day_mut(date_key, index)?;
        let removed = events.remove(index);
        if events.is_empty() {
            self.days.remove(date_key);
        }

        log::debug!("Removed event '{}' from {} (index {})", removed.name, date_key, index);
        Ok(removed)
    }

    /// Replace the event at `index` in place and return the previous one.
    pub fn replace_event(&mut self, date_key: &DateKey, index: usize, event: Event) -> Result<Event> {
        let events = self.day_mut(date_key, index)?;
        let previous = std::mem::replace(&mut events[index], event);

        log::debug!("Replaced event '{}' on {} (index {})", previous.name, date_key, index);
        Ok(previous)
    }

    /// Remove an event by its stable id.
    pub fn remove_event_by_id(&mut self, date_key: &DateKey, id: Uuid) -> Result<Event> {
        let index = self
            .events_for(date_key)
            .iter()
            .position(|event| event.id == id)
            .ok_or(CalendarError::EventNotFound(id))?;
        self.remove_event(date_key, index)
    }

    fn day_mut(&mut self, date_key: &DateKey, index: usize) -> Result<&mut Vec<Event>> {
        let len = self.event_count(date_key);
        if index >= len {
            return Err(CalendarError::OutOfRange {
                date_key: date_key.clone(),
                index,
                len,
            });
        }

        self.days.get_mut(date_key).ok_or(CalendarError::OutOfRange {
            date_key: date_key.clone(),
            index,
            len,
        })
    }
}
