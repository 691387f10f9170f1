// Settings module
// User configuration loaded from config.toml

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::models::ui::ViewMode;

/// Storage slot used when the config does not name one.
pub const DEFAULT_STORAGE_SLOT: &str = "events";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// 0 = Sunday, 1 = Monday, ... 6 = Saturday
    pub first_day_of_week: u8,
    /// View shown when the calendar starts
    pub default_view: ViewMode,
    /// Name of the persistence slot holding the event map
    pub storage_slot: String,
    /// Overrides the platform data directory for the event file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
    /// Reject drafts with an empty name or an inverted/garbled time range
    pub strict_validation: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            first_day_of_week: 0, // Sunday
            default_view: ViewMode::Month,
            storage_slot: DEFAULT_STORAGE_SLOT.to_string(),
            data_dir: None,
            strict_validation: false,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), String> {
        if self.first_day_of_week > 6 {
            return Err(format!(
                "first_day_of_week must be between 0 (Sunday) and 6 (Saturday), got {}",
                self.first_day_of_week
            ));
        }

        let slot = self.storage_slot.trim();
        if slot.is_empty() {
            return Err("storage_slot cannot be empty".to_string());
        }
        if slot.contains(['/', '\\']) || slot == "." || slot == ".." {
            return Err(format!("storage_slot '{}' must be a plain name", slot));
        }

        Ok(())
    }
}
