// SPDX-License-Identifier: LGPL-3.0-only
pub mod preferences;
pub mod settings;

// Re-export commonly used types
pub use preferences::FilePreferenceStore;
pub use settings::SettingsRegistry;
