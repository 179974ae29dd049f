//! # Theme Registry
//!
//! Static, read-only mapping from [ThemeId] to [ThemeRecord]. The registry is
//! built once, validated once and then shared immutably (usually behind an
//! [Arc](std::sync::Arc)). Insertion order is significant: it defines the
//! successor relation used when cycling themes.
//!
//! ## Usage Examples
//!
//! ```rust
//! use folio_theme::registry::ThemeRegistry;
//!
//! let registry = ThemeRegistry::builtin();
//! assert!(registry.resolve("ocean").is_some());
//! assert!(registry.resolve("unknown").is_none());
//! assert_eq!(registry.successor("matrix").map(|id| id.as_str()), Some("purple"));
//! ```
//!
//! ### Custom Registries
//!
//! ```rust
//! use folio_theme::registry::ThemeRegistry;
//! use folio_theme::theme::builtin;
//!
//! let registry = ThemeRegistry::builder()
//!     .with_theme("mono", builtin::dark())
//!     .with_builtin()
//!     .build()
//!     .unwrap();
//! assert_eq!(registry.identifiers()[0], "mono");
//! ```
//!
//! Registries can also be loaded from TOML or JSON:
//!
//! ```toml
//! [themes.ocean]
//! name = "Ocean"
//! colors = { primary = "#0EA5E9", ... }
//! styles = { fontWeight = "normal", ... }
//! ```

use indexmap::IndexMap;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::{ThemeError, ThemeResult};
use crate::id::ThemeId;
use crate::theme::{builtin, ThemeRecord};

/// Ordered, validated set of themes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeRegistry {
    themes: IndexMap<ThemeId, ThemeRecord>,
}

#[derive(Deserialize)]
struct RegistryFile {
    themes: IndexMap<ThemeId, ThemeRecord>,
}

impl ThemeRegistry {
    /// Build a registry from `(identifier, record)` pairs, keeping their order.
    ///
    /// Fails with [ThemeError::IncompleteTheme] if any record has a blank
    /// token and with [ThemeError::EmptyRegistry] if there are no themes.
    /// A repeated identifier keeps its first position and its last record.
    pub fn new<I, K>(themes: I) -> ThemeResult<Self>
    where
        I: IntoIterator<Item = (K, ThemeRecord)>,
        K: Into<ThemeId>,
    {
        let mut map = IndexMap::new();
        for (id, record) in themes {
            let id = id.into();
            let missing = record.missing_tokens();
            if !missing.is_empty() {
                return Err(ThemeError::incomplete(id.as_str(), missing));
            }
            map.insert(id, record);
        }

        if map.is_empty() {
            return Err(ThemeError::EmptyRegistry);
        }

        Ok(Self { themes: map })
    }

    /// The registry of built-in themes.
    pub fn builtin() -> Self {
        let themes = builtin::all()
            .into_iter()
            .map(|(id, record)| (ThemeId::new(id), record))
            .collect();
        Self { themes }
    }

    /// Start building a custom registry.
    pub fn builder() -> ThemeRegistryBuilder {
        ThemeRegistryBuilder::default()
    }

    /// Load a registry from TOML content with a `[themes.<id>]` table per theme.
    pub fn from_toml(content: &str) -> ThemeResult<Self> {
        let file: RegistryFile = toml::from_str(content)?;
        Self::new(file.themes)
    }

    /// Load a registry from JSON content shaped `{ "themes": { "<id>": {...} } }`.
    pub fn from_json(content: &str) -> ThemeResult<Self> {
        let file: RegistryFile = serde_json::from_str(content)?;
        Self::new(file.themes)
    }

    /// Load a registry from a `.toml` or `.json` file.
    pub fn from_file(path: impl AsRef<Path>) -> ThemeResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ThemeError::file_not_found(path));
        }

        let content = fs::read_to_string(path)?;
        let parsed = match path.extension().and_then(|s| s.to_str()) {
            Some("toml") => Self::from_toml(&content),
            Some("json") => Self::from_json(&content),
            _ => {
                return Err(ThemeError::parse_error(
                    path,
                    "Unsupported registry file format. Use .toml or .json",
                ))
            },
        };

        parsed.map_err(|err| match err {
            ThemeError::Serialization(details) => ThemeError::parse_error(path, details),
            other => other,
        })
    }

    /// Look up a theme. `None` means the identifier is not registered.
    pub fn resolve(&self, id: &str) -> Option<&ThemeRecord> {
        self.themes.get(id)
    }

    /// Look up a theme, falling back to the first registered one.
    pub fn resolve_or_first(&self, id: &str) -> &ThemeRecord {
        self.themes.get(id).unwrap_or_else(|| &self.themes[0])
    }

    /// Whether a theme with this identifier exists.
    pub fn contains(&self, id: &str) -> bool {
        self.themes.contains_key(id)
    }

    /// The ordered list of identifiers.
    pub fn identifiers(&self) -> Vec<ThemeId> {
        self.themes.keys().cloned().collect()
    }

    /// Iterate over `(identifier, record)` pairs in registry order.
    pub fn iter(&self) -> impl Iterator<Item = (&ThemeId, &ThemeRecord)> {
        self.themes.iter()
    }

    /// The first identifier in registry order.
    pub fn first(&self) -> &ThemeId {
        // Never empty: `new` rejects empty input and `builtin` is static.
        let (id, _) = self.themes.get_index(0).unwrap_or_else(|| unreachable!());
        id
    }

    /// Position of an identifier in registry order.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.themes.get_index_of(id)
    }

    /// The identifier following `id`, wrapping to the first after the last.
    pub fn successor(&self, id: &str) -> Option<&ThemeId> {
        let index = self.position(id)?;
        let next = (index + 1) % self.themes.len();
        self.themes.get_index(next).map(|(id, _)| id)
    }

    /// Number of themes.
    pub fn len(&self) -> usize {
        self.themes.len()
    }

    /// Whether the registry has no themes. Never true once constructed.
    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Builder for custom registries.
#[derive(Debug, Default)]
pub struct ThemeRegistryBuilder {
    themes: Vec<(ThemeId, ThemeRecord)>,
}

impl ThemeRegistryBuilder {
    /// Append a theme.
    pub fn with_theme(mut self, id: impl Into<ThemeId>, record: ThemeRecord) -> Self {
        self.themes.push((id.into(), record));
        self
    }

    /// Append all built-in themes.
    pub fn with_builtin(mut self) -> Self {
        self.themes.extend(
            builtin::all()
                .into_iter()
                .map(|(id, record)| (ThemeId::new(id), record)),
        );
        self
    }

    /// Append every theme of an existing registry.
    pub fn with_registry(mut self, registry: &ThemeRegistry) -> Self {
        self.themes.extend(
            registry
                .iter()
                .map(|(id, record)| (id.clone(), record.clone())),
        );
        self
    }

    /// Validate and build.
    pub fn build(self) -> ThemeResult<ThemeRegistry> {
        ThemeRegistry::new(self.themes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::builtin::BUILTIN_IDS;

    #[test]
    fn test_builtin_order() {
        let registry = ThemeRegistry::builtin();
        let ids: Vec<String> = registry.identifiers().iter().map(|id| id.to_string()).collect();
        assert_eq!(ids, BUILTIN_IDS);
        assert_eq!(registry.first(), "purple");
    }

    #[test]
    fn test_successor_wraps() {
        let registry = ThemeRegistry::builtin();
        assert_eq!(registry.successor("purple").unwrap(), "deepPurple");
        assert_eq!(registry.successor("matrix").unwrap(), "purple");
        assert!(registry.successor("nope").is_none());
    }

    #[test]
    fn test_rejects_incomplete_record() {
        let mut broken = builtin::ocean();
        broken.colors.surface.clear();
        let err = ThemeRegistry::new([("ocean", broken)]).unwrap_err();
        match err {
            ThemeError::IncompleteTheme { name, missing } => {
                assert_eq!(name, "ocean");
                assert_eq!(missing, vec!["color-surface"]);
            },
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_rejects_empty() {
        let themes: Vec<(&str, ThemeRecord)> = Vec::new();
        assert!(matches!(ThemeRegistry::new(themes), Err(ThemeError::EmptyRegistry)));
    }

    #[test]
    fn test_from_toml_keeps_document_order() {
        let content = r##"
            [themes.zeta]
            name = "Zeta"
            colors = { primary = "#111111", secondary = "#222222", accent = "#333333", background = "#000000", surface = "#0A0A0A", text = "#FFFFFF", textSecondary = "#AAAAAA" }
            styles = { fontWeight = "normal", headingWeight = "700", shadow = "none", glow = "none", cardBorder = "none" }

            [themes.alpha]
            name = "Alpha"
            colors = { primary = "#FFFFFF", secondary = "#EEEEEE", accent = "#DDDDDD", background = "#FFFFFF", surface = "#F5F5F5", text = "#000000", textSecondary = "#555555" }
            styles = { fontWeight = "400", headingWeight = "600", shadow = "none", glow = "none", cardBorder = "none" }
        "##;
        let registry = ThemeRegistry::from_toml(content).unwrap();
        assert_eq!(registry.identifiers(), vec![ThemeId::new("zeta"), ThemeId::new("alpha")]);
        assert_eq!(registry.resolve("alpha").unwrap().styles.heading_weight, "600");
    }

    #[test]
    fn test_from_file_missing() {
        let path = std::env::temp_dir().join("folio_theme_registry_missing.toml");
        let _ = fs::remove_file(&path);
        assert!(matches!(
            ThemeRegistry::from_file(&path),
            Err(ThemeError::ThemeFileNotFound { .. })
        ));
    }

    #[test]
    fn test_builder_duplicate_keeps_first_position() {
        let registry = ThemeRegistry::builder()
            .with_theme("dark", builtin::neon())
            .with_builtin()
            .build()
            .unwrap();
        assert_eq!(registry.first(), "dark");
        assert_eq!(registry.resolve("dark").unwrap().name, "Dark");
        assert_eq!(registry.len(), BUILTIN_IDS.len());
    }
}
