// SPDX-License-Identifier: LGPL-3.0-only
use anyhow::Result;
use folio_theme::error::{ThemeError, ThemeResult};
use folio_theme::storage::PreferenceStore;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use xdg::BaseDirectories;

/// XDG prefix of every folio data and config file.
pub const XDG_PREFIX: &str = "folio";

/// File name of the preference store under the XDG data home.
pub const PREFERENCES_FILE: &str = "preferences.json";

/// A [PreferenceStore] backed by a JSON object file.
///
/// The file is read once when the store is opened and rewritten on every
/// `set`. Non-string values read as absent but are written back untouched;
/// an unreadable file is treated as empty.
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    values: Map<String, Value>,
    path: PathBuf,
}

impl FilePreferenceStore {
    /// Open the store at `$XDG_DATA_HOME/folio/preferences.json`.
    pub fn new() -> Result<Self> {
        Ok(Self::open(Self::default_path()?))
    }

    /// Open the store at an explicit path.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = read_values(&path);
        log::debug!("Opened preference store {:?} with {} values", path, values.len());
        Self { values, path }
    }

    /// Default location of the preference file.
    pub fn default_path() -> Result<PathBuf> {
        let xdg_dirs = BaseDirectories::with_prefix(XDG_PREFIX)?;
        Ok(xdg_dirs.get_data_home().join(PREFERENCES_FILE))
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Re-read the backing file, dropping unsaved state.
    pub fn reload(&mut self) {
        self.values = read_values(&self.path);
    }

    fn save(&self, values: &Map<String, Value>) -> ThemeResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(ThemeError::storage)?;
        }

        let content = serde_json::to_string_pretty(values)?;
        fs::write(&self.path, content).map_err(ThemeError::storage)
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).and_then(Value::as_str).map(str::to_string)
    }

    fn set(&mut self, key: &str, value: &str) -> ThemeResult<()> {
        let mut values = self.values.clone();
        values.insert(key.to_string(), Value::String(value.to_string()));
        self.save(&values)?;
        self.values = values;
        Ok(())
    }
}

fn read_values(path: &Path) -> Map<String, Value> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            if e.kind() != std::io::ErrorKind::NotFound {
                log::warn!("Failed to read preferences {:?}: {}", path, e);
            }
            return Map::new();
        },
    };

    match serde_json::from_str::<Map<String, Value>>(&content) {
        Ok(map) => map,
        Err(e) => {
            log::warn!("Ignoring unparseable preferences {:?}: {}", path, e);
            Map::new()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_path_under_prefix() {
        if let Ok(path) = FilePreferenceStore::default_path() {
            assert!(path.ends_with("folio/preferences.json"));
        }
    }

    #[test]
    fn test_failed_write_keeps_previous_value() {
        let dir = std::env::temp_dir().join("folio_preferences_failed_write_test");
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        // A plain file where the parent directory should be.
        let blocker = dir.join("blocker");
        fs::write(&blocker, "").unwrap();

        let mut store = FilePreferenceStore::open(blocker.join("preferences.json"));
        assert!(store.set("preferred-theme", "ocean").is_err());
        assert_eq!(store.get("preferred-theme"), None);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_missing_file_is_empty() {
        let store = FilePreferenceStore::open("/nonexistent/folio/preferences.json");
        assert_eq!(store.get("preferred-theme"), None);
    }
}
