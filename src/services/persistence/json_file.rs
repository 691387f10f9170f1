use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde_json::Value;

use super::EventPersistence;
use crate::models::settings::Settings;

/// Storage slot backed by `<dir>/<slot>.json`.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(dir: impl AsRef<Path>, slot: &str) -> Self {
        Self {
            path: dir.as_ref().join(format!("{}.json", slot)),
        }
    }

    /// Resolve the slot file from settings, falling back to the platform
    /// data directory when no `data_dir` is configured.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let dir = match &settings.data_dir {
            Some(dir) => dir.clone(),
            None => default_data_dir()?,
        };
        Ok(Self::new(dir, settings.storage_slot.trim()))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Platform data directory for the calendar (e.g. `~/.local/share/calendar-widget`).
pub fn default_data_dir() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("", "", "calendar-widget")
        .context("Failed to determine a data directory for this platform")?;
    Ok(dirs.data_dir().to_path_buf())
}

impl EventPersistence for JsonFileStorage {
    fn load(&self) -> Result<Option<Value>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let data = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read events from {}", self.path.display()))?;
        if data.trim().is_empty() {
            return Ok(None);
        }

        let raw = serde_json::from_str(&data).with_context(|| {
            format!("failed to deserialize events from {}", self.path.display())
        })?;
        Ok(Some(raw))
    }

    fn save(&self, raw: &Value) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create dir {}", parent.display()))?;
        }

        // Write next to the target and rename over it so a crash mid-write
        // never leaves a torn events file.
        let data = serde_json::to_string_pretty(raw)?;
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, data)
            .with_context(|| format!("failed to write events to {}", tmp_path.display()))?;
        fs::rename(&tmp_path, &self.path)
            .with_context(|| format!("failed to replace {}", self.path.display()))?;
        Ok(())
    }

    fn quarantine(&self) -> Result<()> {
        if !self.path.exists() {
            return Ok(());
        }

        let backup_path = self.backup_path();
        fs::rename(&self.path, &backup_path).with_context(|| {
            format!(
                "failed to move unreadable {} to {}",
                self.path.display(),
                backup_path.display()
            )
        })?;
        log::warn!(
            "Moved unreadable events file to {}; starting with an empty calendar",
            backup_path.display()
        );
        Ok(())
    }
}

impl JsonFileStorage {
    /// First unused `<slot>.json.corrupt[.N]` next to the slot file.
    fn backup_path(&self) -> PathBuf {
        let first = self.path.with_extension("json.corrupt");
        if !first.exists() {
            return first;
        }
        (1u32..)
            .map(|n| self.path.with_extension(format!("json.corrupt.{}", n)))
            .find(|candidate| !candidate.exists())
            .unwrap_or(first)
    }
}
