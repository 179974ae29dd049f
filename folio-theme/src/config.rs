//! # Theme Configuration
//!
//! Startup configuration of the theming layer: which theme to show when the
//! visitor has no stored preference, where to load a custom registry from and
//! which storage key holds the preference.
//!
//! ## Environment Variables
//!
//! - `FOLIO_THEME`: default theme identifier
//! - `FOLIO_THEME_REGISTRY`: path to a `.toml`/`.json` registry file
//! - `FOLIO_THEME_CONFIG`: path to a configuration file, loaded before the
//!   other variables are applied
//!
//! ## Configuration File Format
//!
//! ```toml
//! [theme]
//! default = "ocean"
//! registry = "./themes.toml"
//! storage_key = "preferred-theme"
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use folio_theme::config::ThemeConfig;
//!
//! let config = ThemeConfig::from_toml("[theme]\ndefault = \"forest\"\n").unwrap();
//! assert_eq!(config.default_theme.as_ref().unwrap(), "forest");
//!
//! let registry = config.load_registry().unwrap();
//! assert!(registry.contains("forest"));
//! ```

use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{ThemeError, ThemeResult};
use crate::id::ThemeId;
use crate::manager::StyleProvider;
use crate::registry::ThemeRegistry;
use crate::storage::{PreferenceStore, PREFERENCE_KEY};

/// Environment variable naming the default theme.
pub const THEME_ENV: &str = "FOLIO_THEME";
/// Environment variable naming a registry file.
pub const REGISTRY_ENV: &str = "FOLIO_THEME_REGISTRY";
/// Environment variable naming a configuration file.
pub const CONFIG_ENV: &str = "FOLIO_THEME_CONFIG";

/// Theming configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeConfig {
    /// Theme used when no valid preference is stored.
    pub default_theme: Option<ThemeId>,
    /// Custom registry file; built-in themes when unset.
    pub registry_path: Option<PathBuf>,
    /// Storage key of the persisted preference.
    pub storage_key: String,
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    theme: ThemeSection,
}

#[derive(Debug, Default, Deserialize)]
struct ThemeSection {
    default: Option<ThemeId>,
    registry: Option<PathBuf>,
    storage_key: Option<String>,
}

impl ThemeConfig {
    /// Configuration with built-in themes and no explicit default.
    pub fn new() -> Self {
        Self {
            default_theme: None,
            registry_path: None,
            storage_key: PREFERENCE_KEY.to_string(),
        }
    }

    /// Configuration from environment variables, or defaults.
    ///
    /// A broken `FOLIO_THEME_CONFIG` file is logged and skipped.
    pub fn from_env_or_default() -> Self {
        let mut config = Self::new();

        if let Ok(path) = env::var(CONFIG_ENV) {
            match Self::from_file(&path) {
                Ok(file_config) => config = file_config,
                Err(err) => log::warn!("Ignoring theme config {}: {}", path, err),
            }
        }

        if let Ok(theme) = env::var(THEME_ENV) {
            if !theme.trim().is_empty() {
                config.default_theme = Some(ThemeId::new(theme.trim()));
            }
        }

        if let Ok(path) = env::var(REGISTRY_ENV) {
            if !path.is_empty() {
                config.registry_path = Some(PathBuf::from(path));
            }
        }

        config
    }

    /// Load configuration from a TOML file.
    ///
    /// A relative `registry` path is resolved against the file's directory.
    pub fn from_file(path: impl AsRef<Path>) -> ThemeResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ThemeError::file_not_found(path));
        }

        if path.extension().and_then(|s| s.to_str()) != Some("toml") {
            return Err(ThemeError::parse_error(
                path,
                "Unsupported configuration file format. Use .toml",
            ));
        }

        let content = fs::read_to_string(path)?;
        let mut config = Self::from_toml(&content)
            .map_err(|err| ThemeError::parse_error(path, err.to_string()))?;

        if let (Some(registry), Some(dir)) = (config.registry_path.as_mut(), path.parent()) {
            if registry.is_relative() {
                *registry = dir.join(&*registry);
            }
        }

        log::info!("Loaded theme configuration from {:?}", path);
        Ok(config)
    }

    /// Parse configuration from TOML content.
    pub fn from_toml(content: &str) -> ThemeResult<Self> {
        let file: ConfigFile = toml::from_str(content)?;
        let section = file.theme;
        Ok(Self {
            default_theme: section.default,
            registry_path: section.registry,
            storage_key: section
                .storage_key
                .unwrap_or_else(|| PREFERENCE_KEY.to_string()),
        })
    }

    /// Set the default theme.
    pub fn with_default_theme(mut self, theme: impl Into<ThemeId>) -> Self {
        self.default_theme = Some(theme.into());
        self
    }

    /// Set the registry file.
    pub fn with_registry_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.registry_path = Some(path.into());
        self
    }

    /// Set the storage key.
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Overlay `other` on top of `self`. Values set in `other` win.
    ///
    /// A storage key equal to the default does not override a custom one.
    pub fn merge(&mut self, other: ThemeConfig) {
        if other.default_theme.is_some() {
            self.default_theme = other.default_theme;
        }
        if other.registry_path.is_some() {
            self.registry_path = other.registry_path;
        }
        if other.storage_key != PREFERENCE_KEY {
            self.storage_key = other.storage_key;
        }
    }

    /// Load the configured registry, or the built-in one.
    pub fn load_registry(&self) -> ThemeResult<ThemeRegistry> {
        match &self.registry_path {
            Some(path) => {
                let registry = ThemeRegistry::from_file(path)?;
                log::info!("Loaded {} themes from {:?}", registry.len(), path);
                Ok(registry)
            },
            None => Ok(ThemeRegistry::builtin()),
        }
    }

    /// Build a provider from this configuration.
    pub fn build_provider(&self, store: impl PreferenceStore + 'static) -> ThemeResult<StyleProvider> {
        let registry = Arc::new(self.load_registry()?);
        if let Some(default) = &self.default_theme {
            if !registry.contains(default.as_str()) {
                log::warn!("Configured default theme '{}' is not registered", default);
            }
        }

        Ok(StyleProvider::with_storage_key(
            registry,
            store,
            self.default_theme.as_ref().map(ThemeId::as_str),
            self.storage_key.clone(),
        ))
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self::new()
    }
}
