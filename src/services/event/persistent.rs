use uuid::Uuid;

use super::EventStore;
use crate::error::Result;
use crate::models::event::Event;
use crate::services::persistence::EventPersistence;
use crate::utils::date::DateKey;

/// Event store bound to a persistence slot.
///
/// Memory is updated first, then the whole store is written out. A failed
/// save is logged and otherwise ignored: the in-memory state stays
/// authoritative for the session and nothing is retried.
pub struct PersistentEventStore<P: EventPersistence> {
    store: EventStore,
    persistence: P,
    saves_enabled: bool,
}

impl<P: EventPersistence> PersistentEventStore<P> {
    /// Load the store once from `persistence`.
    ///
    /// An unreadable slot is moved aside with [`EventPersistence::quarantine`]
    /// and the session starts empty. If it cannot be moved, saving stays off
    /// for the session so the old contents are never overwritten. Records
    /// loaded without an id are written back at once, keeping their new ids
    /// stable across sessions.
    pub fn hydrate(persistence: P) -> Self {
        let (raw, saves_enabled) = match persistence.load() {
            Ok(raw) => (raw, true),
            Err(err) => {
                log::warn!("Failed to load events, starting empty: {:#}", err);
                match persistence.quarantine() {
                    Ok(()) => (None, true),
                    Err(err) => {
                        log::error!(
                            "Unreadable events could not be moved aside, changes will not be saved: {:#}",
                            err
                        );
                        (None, false)
                    }
                }
            }
        };

        let (store, assigned) = EventStore::load_assigning_ids(raw.as_ref());
        log::info!(
            "Loaded {} events across {} days",
            store.total_events(),
            store.days.len()
        );

        let hydrated = Self {
            store,
            persistence,
            saves_enabled,
        };
        if assigned > 0 {
            log::info!("Assigned ids to {} stored events", assigned);
            hydrated.persist();
        }
        hydrated
    }

    /// False after a load failure whose data could not be moved aside.
    pub fn saves_enabled(&self) -> bool {
        self.saves_enabled
    }

    pub fn store(&self) -> &EventStore {
        &self.store
    }

    pub fn persistence(&self) -> &P {
        &self.persistence
    }

    pub fn events_for(&self, date_key: &DateKey) -> &[Event] {
        self.store.events_for(date_key)
    }

    pub fn add_event(&mut self, date_key: DateKey, event: Event) {
        self.store.add_event(date_key, event);
        self.persist();
    }

    pub fn remove_event(&mut self, date_key: &DateKey, index: usize) -> Result<Event> {
        let removed = self.store.remove_event(date_key, index)?;
        self.persist();
        Ok(removed)
    }

    pub fn replace_event(&mut self, date_key: &DateKey, index: usize, event: Event) -> Result<Event> {
        let previous = self.store.replace_event(date_key, index, event)?;
        self.persist();
        Ok(previous)
    }

    pub fn remove_event_by_id(&mut self, date_key: &DateKey, id: Uuid) -> Result<Event> {
        let removed = self.store.remove_event_by_id(date_key, id)?;
        self.persist();
        Ok(removed)
    }

    fn persist(&self) {
        if !self.saves_enabled {
            log::warn!("Not saving events: the slot holds data that failed to load");
            return;
        }

        let raw = self.store.serialize();
        if let Err(err) = self.persistence.save(&raw) {
            log::warn!("Failed to save events: {:#}", err);
        }
    }
}
