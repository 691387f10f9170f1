// Calendar session state
// Immutable value plus pure transitions; the controller swaps in the result

use chrono::NaiveDate;
use uuid::Uuid;

use crate::models::event::{Event, EventDraft, EventField};
use crate::models::ui::{NavigationDirection, ViewMode};
use crate::utils::date::{shift_months, DateKey};

/// Event the open form is editing, pinned by day and id so intervening
/// deletes or selection changes cannot redirect the save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditTarget {
    pub date_key: DateKey,
    pub id: Uuid,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarState {
    /// Anchors which month/week/day is shown
    pub reference_date: NaiveDate,
    pub view_mode: ViewMode,
    /// Day whose events are listed and edited
    pub selected_date: Option<DateKey>,
    pub pending_event: EventDraft,
    pub modal_open: bool,
    /// Set while the form edits an existing event instead of creating one
    pub editing: Option<EditTarget>,
}

impl CalendarState {
    pub fn new(reference_date: NaiveDate, view_mode: ViewMode) -> Self {
        Self {
            reference_date,
            view_mode,
            selected_date: None,
            pending_event: EventDraft::default(),
            modal_open: false,
            editing: None,
        }
    }

    /// Move one calendar month back or forward.
    ///
    /// The step is a month in every view, week and day included.
    pub fn navigate(self, direction: NavigationDirection) -> Self {
        Self {
            reference_date: shift_months(self.reference_date, direction.month_delta()),
            ..self
        }
    }

    /// Jump straight to a date (used by "today").
    pub fn go_to(self, date: NaiveDate) -> Self {
        Self {
            reference_date: date,
            ..self
        }
    }

    pub fn set_view(self, view_mode: ViewMode) -> Self {
        Self { view_mode, ..self }
    }

    pub fn select_date(self, date_key: DateKey) -> Self {
        Self {
            selected_date: Some(date_key),
            ..self
        }
    }

    /// Select `date_key` and open an empty form for a new event.
    pub fn open_create_form(self, date_key: DateKey) -> Self {
        Self {
            selected_date: Some(date_key),
            pending_event: EventDraft::default(),
            modal_open: true,
            editing: None,
            ..self
        }
    }

    /// Open the form pre-filled with `event`, which lives on `date_key`.
    pub fn open_edit_form(self, date_key: DateKey, event: &Event) -> Self {
        Self {
            selected_date: Some(date_key.clone()),
            pending_event: EventDraft::from_event(event),
            modal_open: true,
            editing: Some(EditTarget {
                date_key,
                id: event.id,
            }),
            ..self
        }
    }

    pub fn update_pending_field(self, field: EventField) -> Self {
        Self {
            pending_event: self.pending_event.with_field(field),
            ..self
        }
    }

    /// Close the form and reset the draft. The selection is kept.
    pub fn close_form(self) -> Self {
        Self {
            pending_event: EventDraft::default(),
            modal_open: false,
            editing: None,
            ..self
        }
    }
}
