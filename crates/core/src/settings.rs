//! Persisted audit settings.
//!
//! Settings live in a small JSON document. Loading merges the stored keys over
//! the defaults, and saving writes the merged object back, so keys this
//! version does not know about survive a round trip.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {0}: {1}")]
    Read(String, #[source] std::io::Error),

    #[error("failed to parse settings file {0}: {1}")]
    Parse(String, #[source] serde_json::Error),

    #[error("settings file {0} does not contain a JSON object")]
    NotAnObject(String),

    #[error("failed to write settings file {0}: {1}")]
    Write(String, #[source] std::io::Error),

    #[error("failed to serialize settings: {0}")]
    Serialize(#[source] serde_json::Error),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// List referenced files alongside orphans (default: false).
    pub show_referenced: bool,
}

/// Settings bound to the file they are persisted in.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
    settings: Settings,
    stored: Map<String, Value>,
}

impl SettingsStore {
    /// Load settings from `path`, falling back to defaults if it does not exist.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let shown = path.display().to_string();

        let stored = if path.exists() {
            let raw = fs::read_to_string(path)
                .map_err(|e| SettingsError::Read(shown.clone(), e))?;
            parse_object(&raw, &shown)?
        } else {
            debug!(path = %shown, "no settings file, using defaults");
            Map::new()
        };

        let settings = serde_json::from_value(Value::Object(stored.clone()))
            .map_err(|e| SettingsError::Parse(shown, e))?;

        Ok(Self { path: path.to_path_buf(), settings, stored })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn settings(&self) -> Settings {
        self.settings
    }

    /// Replace the in-memory settings. Nothing is written until [`save`].
    ///
    /// [`save`]: SettingsStore::save
    pub fn set(&mut self, settings: Settings) {
        self.settings = settings;
    }

    /// Write the full settings object, creating the parent directory if needed.
    pub fn save(&mut self) -> Result<(), SettingsError> {
        let shown = self.path.display().to_string();

        let Value::Object(current) =
            serde_json::to_value(self.settings).map_err(SettingsError::Serialize)?
        else {
            return Err(SettingsError::NotAnObject(shown));
        };
        self.stored.extend(current);

        let body = serde_json::to_string_pretty(&self.stored)
            .map_err(SettingsError::Serialize)?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| SettingsError::Write(shown.clone(), e))?;
        }
        fs::write(&self.path, body).map_err(|e| SettingsError::Write(shown.clone(), e))?;

        debug!(path = %shown, "saved settings");
        Ok(())
    }
}

fn parse_object(raw: &str, shown: &str) -> Result<Map<String, Value>, SettingsError> {
    if raw.trim().is_empty() {
        return Ok(Map::new());
    }
    match serde_json::from_str(raw).map_err(|e| SettingsError::Parse(shown.to_string(), e))? {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Map::new()),
        _ => Err(SettingsError::NotAnObject(shown.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let store = SettingsStore::load(&dir.path().join("data.json")).unwrap();
        assert_eq!(store.settings(), Settings { show_referenced: false });
    }

    #[test]
    fn test_stored_values_merge_over_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.json");
        fs::write(&path, r#"{"showReferenced": true}"#).unwrap();

        let store = SettingsStore::load(&path).unwrap();
        assert!(store.settings().show_referenced);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.json");
        fs::write(&path, r#"{"lastFolder": "Docs"}"#).unwrap();

        let store = SettingsStore::load(&path).unwrap();
        assert_eq!(store.settings(), Settings::default());
    }

    #[test]
    fn test_save_round_trips_and_keeps_unknown_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/data.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, r#"{"lastFolder": "Docs", "showReferenced": false}"#).unwrap();

        let mut store = SettingsStore::load(&path).unwrap();
        store.set(Settings { show_referenced: true });
        store.save().unwrap();

        let raw: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["showReferenced"], Value::Bool(true));
        assert_eq!(raw["lastFolder"], Value::String("Docs".into()));

        let reloaded = SettingsStore::load(&path).unwrap();
        assert!(reloaded.settings().show_referenced);
    }

    #[test]
    fn test_save_creates_parent_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".linkaudit/data.json");

        let mut store = SettingsStore::load(&path).unwrap();
        store.save().unwrap();

        assert!(path.exists());
    }

    #[test]
    fn test_non_object_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.json");
        fs::write(&path, "[1, 2]").unwrap();

        let err = SettingsStore::load(&path).unwrap_err();
        assert!(matches!(err, SettingsError::NotAnObject(_)));
    }

    #[test]
    fn test_invalid_json_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.json");
        fs::write(&path, "{not json").unwrap();

        let err = SettingsStore::load(&path).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(..)));
    }
}
