//! Persistence collaborator for the event map.
//!
//! The event store only ever hands over the whole serialized map and reads
//! the whole map back, so a backend is a single load/save pair bound to one
//! fixed storage slot.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use anyhow::Result;
use serde_json::Value;

mod json_file;

pub use json_file::{default_data_dir, JsonFileStorage};

/// Key-value slot holding the serialized event map.
#[cfg_attr(test, mockall::automock)]
pub trait EventPersistence {
    /// Read the slot. `Ok(None)` means nothing has been stored yet.
    fn load(&self) -> Result<Option<Value>>;

    /// Overwrite the slot with `raw`.
    fn save(&self, raw: &Value) -> Result<()>;

    /// Move unreadable slot contents out of the way so the next save cannot
    /// overwrite them. Called after `load` fails; an error here means the old
    /// contents are still in place.
    fn quarantine(&self) -> Result<()>;
}

/// In-process slot. Clones share the same slot, so a caller can keep a
/// handle and inspect what the store wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slot: Rc<RefCell<Option<Value>>>,
    saves: Rc<Cell<usize>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `raw` already in the slot, as if saved by an earlier session.
    pub fn with_value(raw: Value) -> Self {
        let storage = Self::default();
        storage.slot.replace(Some(raw));
        storage
    }

    pub fn snapshot(&self) -> Option<Value> {
        self.slot.borrow().clone()
    }

    /// Number of saves since creation.
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl EventPersistence for MemoryStorage {
    fn load(&self) -> Result<Option<Value>> {
        Ok(self.snapshot())
    }

    fn save(&self, raw: &Value) -> Result<()> {
        self.slot.replace(Some(raw.clone()));
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
    // Loading from memory never fails, so there is nothing to move aside.
    fn quarantine(&self) -> Result<()> {
        Ok(())
    }
}
