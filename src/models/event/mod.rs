// Event module
// Day-scoped calendar event model and the draft edited by the event form

use std::fmt;
use std::str::FromStr;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of event; drives colouring in the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    #[default]
    Work,
    Personal,
    #[serde(alias = "other")]
    Others,
}

impl EventType {
    pub const ALL: [EventType; 3] = [EventType::Work, EventType::Personal, EventType::Others];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Work => "work",
            EventType::Personal => "personal",
            EventType::Others => "others",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "work" => Ok(EventType::Work),
            "personal" => Ok(EventType::Personal),
            "others" | "other" => Ok(EventType::Others),
            other => Err(format!("Unknown event type '{}'", other)),
        }
    }
}

/// Calendar event attached to a single day.
///
/// `start` and `end` hold the time-of-day exactly as entered (normally
/// `HH:MM`); nothing checks that they parse or that `start < end`.
/// The `id` is generated when the event is created and survives
/// persistence, so deletes and edits can address it independently of its
/// position in the day's list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub name: String,
    pub start: String,
    pub end: String,
    pub description: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
}

impl Event {
    /// Create a builder for constructing events
    ///
    /// # Examples
    /// ```
    /// use calendar_widget::models::event::{Event, EventType};
    ///
    /// let event = Event::builder()
    ///     .name("Standup")
    ///     .start("09:00")
    ///     .end("09:30")
    ///     .event_type(EventType::Work)
    ///     .build();
    /// assert_eq!(event.name, "Standup");
    /// ```
    pub fn builder() -> EventBuilder {
        EventBuilder::new()
    }

    /// Start time parsed as `HH:MM`, if it is one.
    pub fn start_time(&self) -> Option<NaiveTime> {
        parse_time_of_day(&self.start)
    }

    /// End time parsed as `HH:MM`, if it is one.
    pub fn end_time(&self) -> Option<NaiveTime> {
        parse_time_of_day(&self.end)
    }

    /// `start - end` label used by list renderers.
    pub fn time_range_label(&self) -> String {
        format!("{} - {}", self.start, self.end)
    }
}

fn parse_time_of_day(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M").ok()
}

/// Builder for creating events field by field
///
/// Unset fields are empty strings and the type defaults to work, the same
/// values a freshly opened event form starts with.
#[derive(Debug, Default)]
pub struct EventBuilder {
    id: Option<Uuid>,
    name: String,
    start: String,
    end: String,
    description: String,
    event_type: EventType,
}

impl EventBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reuse an existing identifier instead of generating one
    pub fn id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn start(mut self, start: impl Into<String>) -> Self {
        self.start = start.into();
        self
    }

    pub fn end(mut self, end: impl Into<String>) -> Self {
        self.end = end.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn event_type(mut self, event_type: EventType) -> Self {
        self.event_type = event_type;
        self
    }

    pub fn build(self) -> Event {
        Event {
            id: self.id.unwrap_or_else(Uuid::new_v4),
            name: self.name,
            start: self.start,
            end: self.end,
            description: self.description,
            event_type: self.event_type,
        }
    }
}

/// One field of the event form, carrying its new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventField {
    Name(String),
    Start(String),
    End(String),
    Description(String),
    Type(EventType),
}

/// In-progress event fields while the create/edit form is open.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EventDraft {
    pub name: String,
    pub start: String,
    pub end: String,
    pub description: String,
    pub event_type: EventType,
}

impl EventDraft {
    /// Copy an existing event into the form for editing.
    pub fn from_event(event: &Event) -> Self {
        Self {
            name: event.name.clone(),
            start: event.start.clone(),
            end: event.end.clone(),
            description: event.description.clone(),
            event_type: event.event_type,
        }
    }

    /// Return the draft with one field replaced. No validation happens here.
    pub fn with_field(mut self, field: EventField) -> Self {
        match field {
            EventField::Name(value) => self.name = value,
            EventField::Start(value) => self.start = value,
            EventField::End(value) => self.end = value,
            EventField::Description(value) => self.description = value,
            EventField::Type(value) => self.event_type = value,
        }
        self
    }

    /// Turn the draft into a new event with a freshly generated id.
    pub fn into_event(self) -> Event {
        self.into_event_with_id(Uuid::new_v4())
    }

    pub fn into_event_with_id(self, id: Uuid) -> Event {
        Event {
            id,
            name: self.name,
            start: self.start,
            end: self.end,
            description: self.description,
            event_type: self.event_type,
        }
    }

    /// Strict checks applied only when strict validation is switched on.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Event name cannot be empty".to_string());
        }

        let event = self.clone().into_event();
        let start = event
            .start_time()
            .ok_or_else(|| format!("Start time '{}' is not HH:MM", self.start))?;
        let end = event
            .end_time()
            .ok_or_else(|| format!("End time '{}' is not HH:MM", self.end))?;

        if end <= start {
            return Err("Event end time must be after start time".to_string());
        }

        Ok(())
    }
}
