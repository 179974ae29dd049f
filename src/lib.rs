#![warn(missing_docs)]

//! Themeable portfolio site building blocks.
//!
//! A [StyleProvider](theme::manager::StyleProvider) holds the active theme out
//! of a registry of named color/style records, persists the visitor's choice
//! and publishes the twelve design tokens as CSS custom properties. The
//! widgets render markup that references those tokens.
//!
//! ```rust
//! use folio::prelude::*;
//!
//! let app = FolioApp::new(&ThemeConfig::new().with_default_theme("midnight"), MemoryStore::new()).unwrap();
//! assert_eq!(use_style_context().active_identifier(), "midnight");
//!
//! let meter = SkillMeter::new("Rust", 90);
//! assert!(meter.render_in_context().contains("var(--color-primary)"));
//! assert!(app.stylesheet().starts_with(":root {"));
//! ```

pub use folio_theme as theme;
pub use folio_widgets as widgets;
#[cfg(feature = "services")]
pub use folio_services as services;

/// Contains the [app::FolioApp] bootstrap.
pub mod app;

/// A "prelude" for users of folio.
///
/// Importing this module brings into scope the most common types
/// needed to theme and render a site.
///
/// ```rust
/// use folio::prelude::*;
/// ```
pub mod prelude {
    pub use crate::app::FolioApp;

    // Theme
    pub use crate::theme::config::ThemeConfig;
    pub use crate::theme::context::{try_use_style_context, use_style_context, StyleContext};
    pub use crate::theme::engine::ComponentTheme;
    pub use crate::theme::id::ThemeId;
    pub use crate::theme::manager::StyleProvider;
    pub use crate::theme::registry::ThemeRegistry;
    pub use crate::theme::storage::{MemoryStore, PreferenceStore};
    pub use crate::theme::theme::{ColorKey, StyleKey, ThemeRecord};

    // Widgets
    pub use crate::widgets::background::BackgroundLoader;
    pub use crate::widgets::badge::{ColorScheme, TechBadge};
    pub use crate::widgets::card::ProjectCard;
    pub use crate::widgets::entrance::EntranceTrigger;
    pub use crate::widgets::gallery::ProjectGallery;
    pub use crate::widgets::media::{responsive_value, Breakpoint, ResponsiveValue};
    pub use crate::widgets::modal::Modal;
    pub use crate::widgets::navigation::NavigationBar;
    pub use crate::widgets::project::Project;
    pub use crate::widgets::skill_meter::SkillMeter;
    pub use crate::widgets::typography::GradientText;
    pub use crate::widgets::Widget;

    // Services
    #[cfg(feature = "services")]
    pub use crate::services::{FilePreferenceStore, SettingsRegistry};
}
