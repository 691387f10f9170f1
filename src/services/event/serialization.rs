use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

use super::EventStore;
use crate::models::event::Event;
use crate::utils::date::DateKey;

/// Why a piece of persisted data was skipped during load. Only ever logged.
#[derive(Debug, Error)]
enum MalformedRecord {
    #[error("event map is not a JSON object (found {0})")]
    NotAnObject(&'static str),
    #[error("'{0}' is not a YYYY-MM-DD date key")]
    BadKey(String),
    #[error("events for {0} are not a list")]
    NotAList(DateKey),
    #[error("event {index} on {date_key}: {source}")]
    BadEvent {
        date_key: DateKey,
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

impl EventStore {
    /// Build a store from a persisted event map.
    ///
    /// Never fails: absent or `null` input gives an empty store, and any
    /// record that is not a well-formed event (missing field, unknown type,
    /// bad day key) is logged and dropped while the rest still loads.
    /// Records without an `id` get a freshly generated one.
    pub fn load(raw: Option<&Value>) -> Self {
        Self::load_assigning_ids(raw).0
    }

    /// [`EventStore::load`], also returning how many records had no `id`
    /// and were given a fresh one.
    pub(crate) fn load_assigning_ids(raw: Option<&Value>) -> (Self, usize) {
        let mut store = Self::new();
        let mut assigned = 0usize;

        let map = match raw {
            None | Some(Value::Null) => return (store, assigned),
            Some(Value::Object(map)) => map,
            Some(other) => {
                report(MalformedRecord::NotAnObject(json_kind(other)));
                return (store, assigned);
            }
        };

        let mut dropped = 0usize;
        for (key, records) in map {
            let Some(date_key) = DateKey::parse(key) else {
                report(MalformedRecord::BadKey(key.clone()));
                dropped += 1;
                continue;
            };

            let Value::Array(records) = records else {
                report(MalformedRecord::NotAList(date_key));
                dropped += 1;
                continue;
            };

            for (index, record) in records.iter().enumerate() {
                match Event::deserialize(record) {
                    Ok(event) => {
                        if record.get("id").is_none() {
                            assigned += 1;
                        }
                        store.days.entry(date_key.clone()).or_default().push(event);
                    }
                    Err(source) => {
                        report(MalformedRecord::BadEvent {
                            date_key: date_key.clone(),
                            index,
                            source,
                        });
                        dropped += 1;
                    }
                }
            }
        }

        if dropped > 0 {
            log::warn!("Dropped {} malformed entries while loading events", dropped);
        }
        (store, assigned)
    }

    /// Serialize to the shape [`EventStore::load`] accepts.
    pub fn serialize(&self) -> Value {
        serde_json::to_value(&self.days).unwrap_or_else(|err| {
            log::error!("Failed to serialize events: {}", err);
            Value::Object(Map::new())
        })
    }
}

fn report(issue: MalformedRecord) {
    log::warn!("Skipping malformed event data: {}", issue);
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
