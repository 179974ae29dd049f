//! # Theme Variables
//!
//! Flattened, CSS-like named tokens derived from a [ThemeRecord]. Colors are
//! published as `color-<key>` and style tokens as `style-<key>`, keys in their
//! camelCase form:
//!
//! ```rust
//! use folio_theme::properties::ThemeVariables;
//! use folio_theme::theme::builtin;
//!
//! let vars = ThemeVariables::from_record(&builtin::dark());
//! assert_eq!(vars.get("color-primary"), Some("#3B82F6"));
//! assert_eq!(vars.get("style-headingWeight"), Some("700"));
//! assert_eq!(ThemeVariables::var_ref("color-textSecondary"), "var(--color-textSecondary)");
//! ```

use indexmap::IndexMap;
use std::fmt::Write;

use crate::theme::{ColorKey, StyleKey, ThemeRecord};

/// Prefix of color token names.
pub const COLOR_PREFIX: &str = "color-";
/// Prefix of style token names.
pub const STYLE_PREFIX: &str = "style-";

/// Token name of a color key, e.g. `color-textSecondary`.
pub fn color_token_name(key: ColorKey) -> String {
    format!("{}{}", COLOR_PREFIX, key.as_str())
}

/// Token name of a style key, e.g. `style-cardBorder`.
pub fn style_token_name(key: StyleKey) -> String {
    format!("{}{}", STYLE_PREFIX, key.as_str())
}

/// Ordered set of named token values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeVariables {
    variables: IndexMap<String, String>,
}

impl ThemeVariables {
    /// Create a new empty variables container.
    pub fn new() -> Self {
        Self {
            variables: IndexMap::new(),
        }
    }

    /// All twelve tokens of a record: colors first, then style tokens.
    pub fn from_record(record: &ThemeRecord) -> Self {
        let mut vars = Self::colors(record);
        vars.extend(Self::styles(record));
        vars
    }

    /// The seven `color-*` tokens of a record.
    pub fn colors(record: &ThemeRecord) -> Self {
        let mut vars = Self::new();
        for (key, value) in record.colors.iter() {
            vars.set(color_token_name(key), value);
        }
        vars
    }

    /// The five `style-*` tokens of a record.
    pub fn styles(record: &ThemeRecord) -> Self {
        let mut vars = Self::new();
        for (key, value) in record.styles.iter() {
            vars.set(style_token_name(key), value);
        }
        vars
    }

    /// Set a variable value, replacing any previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.variables.insert(name.into(), value.into());
    }

    /// Get a variable value.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.variables.get(name).map(String::as_str)
    }

    /// Get a color token by key.
    pub fn color(&self, key: ColorKey) -> Option<&str> {
        self.get(&color_token_name(key))
    }

    /// Get a style token by key.
    pub fn style(&self, key: StyleKey) -> Option<&str> {
        self.get(&style_token_name(key))
    }

    /// Append all variables of `other`, overwriting duplicates.
    pub fn extend(&mut self, other: ThemeVariables) {
        self.variables.extend(other.variables);
    }

    /// Iterate over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.variables.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of variables.
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Whether there are no variables.
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Reference a variable from a style rule: `var(--<name>)`.
    pub fn var_ref(name: &str) -> String {
        format!("var(--{})", name)
    }

    /// Render the variables as CSS custom properties on `:root`.
    pub fn to_css_root(&self) -> String {
        let mut css = String::from(":root {\n");
        for (name, value) in self.iter() {
            let _ = writeln!(css, "  --{}: {};", name, value);
        }
        css.push('}');
        css
    }
}

impl<'a> IntoIterator for &'a ThemeVariables {
    type Item = (&'a String, &'a String);
    type IntoIter = indexmap::map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.variables.iter()
    }
}
