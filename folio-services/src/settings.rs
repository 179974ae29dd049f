// SPDX-License-Identifier: LGPL-3.0-only
use anyhow::Result;
use folio_theme::config::ThemeConfig;
use folio_theme::manager::StyleProvider;
use std::path::{Path, PathBuf};
use xdg::BaseDirectories;
use smol::fs;

use crate::preferences::{FilePreferenceStore, XDG_PREFIX};

/// File name of the theme configuration.
pub const THEME_FILE: &str = "theme.toml";

/// Registry for managing site settings.
pub struct SettingsRegistry {
    pub theme_config: ThemeConfig,
}

impl SettingsRegistry {
    /// Create a new SettingsRegistry and load configuration from standard locations.
    pub async fn new() -> Result<Self> {
        let mut registry = Self::empty();
        registry.load().await?;
        Ok(registry)
    }

    fn empty() -> Self {
        Self {
            theme_config: ThemeConfig::new(),
        }
    }

    /// Load configuration from standard locations in precedence order.
    ///
    /// Order (later overrides earlier):
    /// 1. System Data: /usr/share/folio/theme.toml (and XDG_DATA_DIRS)
    /// 2. System Config: /etc/xdg/folio/theme.toml (and XDG_CONFIG_DIRS)
    /// 3. User Config: ~/.config/folio/theme.toml (XDG_CONFIG_HOME)
    ///
    /// Environment variables are applied last.
    pub async fn load(&mut self) -> Result<()> {
        let xdg_dirs = BaseDirectories::with_prefix(XDG_PREFIX)?;

        // 1. Load from system data directories
        for path in xdg_dirs.find_data_files(THEME_FILE).rev() {
            self.load_theme_file(&path).await;
        }

        // 2. Load from system config directories
        for path in xdg_dirs.find_config_files(THEME_FILE).rev() {
            self.load_theme_file(&path).await;
        }

        // 3. Load from user config directory
        let user_config_path = xdg_dirs.get_config_home().join(THEME_FILE);
        if user_config_path.exists() {
            self.load_theme_file(&user_config_path).await;
        }

        self.apply_env();
        Ok(())
    }

    fn apply_env(&mut self) {
        let env_config = ThemeConfig::from_env_or_default();
        self.theme_config.merge(env_config);
    }

    async fn load_theme_file(&mut self, path: &Path) {
        log::info!("Loading theme config from: {:?}", path);
        match fs::read_to_string(path).await {
            Ok(content) => match ThemeConfig::from_toml(&content) {
                Ok(mut loaded_config) => {
                    if let (Some(registry), Some(dir)) =
                        (loaded_config.registry_path.as_mut(), path.parent())
                    {
                        if registry.is_relative() {
                            *registry = dir.join(&*registry);
                        }
                    }
                    self.theme_config.merge(loaded_config);
                },
                Err(e) => {
                    log::warn!("Failed to parse theme config {:?}: {}", path, e);
                },
            },
            Err(e) => {
                log::warn!("Failed to read theme config {:?}: {}", path, e);
            },
        }
    }

    /// Get the current theme configuration.
    pub fn theme_config(&self) -> &ThemeConfig {
        &self.theme_config
    }

    /// Load theme configuration from multiple custom paths asynchronously.
    pub async fn load_from_paths_async(&mut self, paths: Vec<PathBuf>) -> Vec<Result<()>> {
        let mut results = Vec::new();

        for path in paths {
            let result: Result<()> = async {
                let content = fs::read_to_string(&path)
                    .await
                    .map_err(|e| anyhow::anyhow!("Failed to read theme config {:?}: {}", path, e))?;

                let loaded_config = ThemeConfig::from_toml(&content)
                    .map_err(|e| anyhow::anyhow!("Failed to parse theme config {:?}: {}", path, e))?;

                self.theme_config.merge(loaded_config);
                Ok(())
            }
            .await;

            results.push(result);
        }

        results
    }

    /// Reload configuration asynchronously (re-runs the full load process).
    pub async fn reload_async(&mut self) -> Result<()> {
        *self = Self::empty();
        self.load().await
    }

    /// Build a provider persisting to the default preference file.
    pub fn open_provider(&self) -> Result<StyleProvider> {
        let store = FilePreferenceStore::new()?;
        Ok(self.theme_config.build_provider(store)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_later_paths_override_earlier() {
        let dir = std::env::temp_dir().join("folio_settings_override_test");
        std::fs::create_dir_all(&dir).unwrap();
        let system = dir.join("system.toml");
        let user = dir.join("user.toml");
        std::fs::write(&system, "[theme]\ndefault = \"ocean\"\nstorage_key = \"site-theme\"\n").unwrap();
        std::fs::write(&user, "[theme]\ndefault = \"forest\"\n").unwrap();

        let mut registry = SettingsRegistry::empty();
        let results = smol::block_on(registry.load_from_paths_async(vec![system, user]));
        assert!(results.iter().all(|r| r.is_ok()));

        let config = registry.theme_config();
        assert_eq!(config.default_theme.as_ref().unwrap(), "forest");
        assert_eq!(config.storage_key, "site-theme");

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_bad_path_reports_error() {
        let mut registry = SettingsRegistry::empty();
        let results = smol::block_on(
            registry.load_from_paths_async(vec![PathBuf::from("/nonexistent/folio/theme.toml")]),
        );
        assert_eq!(results.len(), 1);
        assert!(results[0].is_err());
        assert_eq!(registry.theme_config, ThemeConfig::new());
    }
}
