#![warn(missing_docs)]

//! # Folio Theming System
//!
//! The theme layer of the folio portfolio site: a fixed registry of named
//! color/style themes, a provider that owns the active selection and persists
//! it, and the published `color-*` / `style-*` tokens every component styles
//! itself from.
//!
//! ## Overview
//!
//! - **[ThemeRegistry](registry::ThemeRegistry)**: Ordered, validated identifier → theme map
//! - **[StyleProvider](manager::StyleProvider)**: The active theme, switching and cycling
//! - **[use_style_context](context::use_style_context)**: Provider access for descendants
//! - **[ThemeVariables](properties::ThemeVariables)**: Flattened CSS-like tokens
//! - **[ComponentTheme](engine::ComponentTheme)**: Palette roles and component overrides
//! - **[ThemeConfig](config::ThemeConfig)**: Default theme and registry from env or TOML
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use folio_theme::context::use_style_context;
//! use folio_theme::manager::StyleProvider;
//! use folio_theme::registry::ThemeRegistry;
//! use folio_theme::storage::MemoryStore;
//!
//! let registry = Arc::new(ThemeRegistry::builtin());
//! let _scope = StyleProvider::new(registry, MemoryStore::new(), Some("purple")).provide();
//!
//! let ctx = use_style_context();
//! ctx.cycle_theme();
//! assert_eq!(ctx.active_identifier(), "deepPurple");
//! assert_eq!(folio_theme::globals::lookup("color-primary").as_deref(), Some("#7C3AED"));
//! ```
//!
//! ## Failure Model
//!
//! - Unknown identifiers passed to `switch_theme` are ignored.
//! - A stale persisted preference is discarded in favor of the default.
//! - Reading the context outside a provider is a programmer error and panics.

/// Contains hex color parsing and alpha helpers.
pub mod color;
/// Contains the [config::ThemeConfig] struct for theme configuration.
pub mod config;
/// Contains the [context::StyleContext] handle and provider scopes.
pub mod context;
/// Contains the [engine::ComponentTheme] derived from a theme record.
pub mod engine;
/// Contains the [error::ThemeError] type.
pub mod error;
/// Contains the per-thread published token board.
pub mod globals;
/// Contains the [id::ThemeId] struct.
pub mod id;
/// Contains the [manager::StyleProvider].
pub mod manager;
/// Contains [properties::ThemeVariables] and token naming.
pub mod properties;
/// Contains the [registry::ThemeRegistry].
pub mod registry;
/// Contains the [storage::PreferenceStore] trait and in-memory stores.
pub mod storage;
/// Contains the [theme::ThemeRecord] struct and built-in themes.
pub mod theme;
