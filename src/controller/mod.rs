//! Calendar controller.
//!
//! Owns the session state and the persistent event store, and turns the
//! renderer's intents (navigate, select, create, edit, delete) into state
//! transitions and store mutations.

use chrono::{Local, NaiveDate};
use uuid::Uuid;

use crate::error::{CalendarError, Result};
use crate::models::event::{Event, EventField};
use crate::models::settings::Settings;
use crate::models::ui::{NavigationDirection, ViewMode};
use crate::services::event::{EventStore, PersistentEventStore};
use crate::services::persistence::EventPersistence;
use crate::services::range::{compute_range, CalendarDay};
use crate::utils::date::DateKey;

mod state;

pub use state::{CalendarState, EditTarget};

pub struct CalendarController<P: EventPersistence> {
    state: CalendarState,
    store: PersistentEventStore<P>,
    first_day_of_week: u8,
    strict_validation: bool,
}

impl<P: EventPersistence> CalendarController<P> {
    /// Start a session on today's date, hydrating events from `persistence`.
    pub fn new(settings: &Settings, persistence: P) -> Self {
        Self::starting_at(settings, persistence, Local::now().date_naive())
    }

    /// Start a session anchored on `reference_date`.
    pub fn starting_at(settings: &Settings, persistence: P, reference_date: NaiveDate) -> Self {
        Self {
            state: CalendarState::new(reference_date, settings.default_view),
            store: PersistentEventStore::hydrate(persistence),
            first_day_of_week: settings.first_day_of_week,
            strict_validation: settings.strict_validation,
        }
    }

    pub fn state(&self) -> &CalendarState {
        &self.state
    }

    pub fn store(&self) -> &EventStore {
        self.store.store()
    }

    pub fn persistence(&self) -> &P {
        self.store.persistence()
    }

    /// Days to draw for the current reference date and view.
    pub fn visible_days(&self) -> Vec<CalendarDay> {
        compute_range(
            self.state.reference_date,
            self.state.view_mode,
            self.first_day_of_week,
        )
    }

    /// Events of the selected day, empty when nothing is selected.
    pub fn selected_events(&self) -> &[Event] {
        match &self.state.selected_date {
            Some(date_key) => self.store.events_for(date_key),
            None => &[],
        }
    }

    pub fn navigate(&mut self, direction: NavigationDirection) {
        self.transition(|state| state.navigate(direction));
        log::debug!("Navigated {:?} to {}", direction, self.state.reference_date);
    }

    pub fn go_to_today(&mut self) {
        let today = Local::now().date_naive();
        self.transition(|state| state.go_to(today));
    }

    pub fn set_view(&mut self, view_mode: ViewMode) {
        self.transition(|state| state.set_view(view_mode));
    }

    pub fn select_date(&mut self, date_key: DateKey) {
        self.transition(|state| state.select_date(date_key));
    }

    pub fn open_create_form(&mut self, date_key: DateKey) {
        self.transition(|state| state.open_create_form(date_key));
    }

    /// Open the form on the selected day's event at `index`.
    pub fn open_edit_form(&mut self, index: usize) -> Result<()> {
        let date_key = self.selected()?;
        let events = self.store.events_for(&date_key);
        let event = events.get(index).cloned().ok_or(CalendarError::OutOfRange {
            date_key: date_key.clone(),
            index,
            len: events.len(),
        })?;

        self.transition(|state| state.open_edit_form(date_key, &event));
        Ok(())
    }

    pub fn update_pending_field(&mut self, field: EventField) {
        self.transition(|state| state.update_pending_field(field));
    }

    /// Commit the draft: append a new event to the selected day, or replace
    /// the event being edited. The form closes only on success.
    pub fn confirm_save(&mut self) -> Result<()> {
        let date_key = self.selected()?;

        if self.strict_validation {
            self.state
                .pending_event
                .validate()
                .map_err(CalendarError::InvalidEvent)?;
        }

        let draft = self.state.pending_event.clone();
        match self.state.editing.clone() {
            Some(target) => {
                let index = self
                    .store
                    .events_for(&target.date_key)
                    .iter()
                    .position(|event| event.id == target.id)
                    .ok_or(CalendarError::EventNotFound(target.id))?;
                self.store
                    .replace_event(&target.date_key, index, draft.into_event_with_id(target.id))?;
            }
            None => self.store.add_event(date_key, draft.into_event()),
        }

        self.transition(CalendarState::close_form);
        Ok(())
    }

    pub fn cancel_form(&mut self) {
        self.transition(CalendarState::close_form);
    }

    /// Delete the selected day's event at `index`.
    pub fn delete_event(&mut self, index: usize) -> Result<Event> {
        let date_key = self.selected()?;
        self.store.remove_event(&date_key, index)
    }

    /// Delete an event of the selected day by id.
    pub fn delete_event_by_id(&mut self, id: Uuid) -> Result<Event> {
        let date_key = self.selected()?;
        self.store.remove_event_by_id(&date_key, id)
    }

    fn selected(&self) -> Result<DateKey> {
        self.state
            .selected_date
            .clone()
            .ok_or(CalendarError::NoSelection)
    }

    fn transition(&mut self, apply: impl FnOnce(CalendarState) -> CalendarState) {
        self.state = apply(self.state.clone());
    }
}
