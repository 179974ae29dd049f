//! # Theme Identifiers
//!
//! Short symbolic names such as `"purple"` or `"ocean"` that key the
//! [ThemeRegistry](crate::registry::ThemeRegistry).
//!
//! ```rust
//! use folio_theme::id::ThemeId;
//!
//! let id = ThemeId::new("ocean");
//! assert_eq!(id.as_str(), "ocean");
//! assert_eq!(id, "ocean");
//! ```

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt::{Debug, Display, Formatter};

/// An identifier for a theme in the registry.
///
/// Identifiers compare by their exact string; there is no case folding, so
/// `"Ocean"` and `"ocean"` are different themes.
#[derive(Debug, Clone, PartialEq, PartialOrd, Eq, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThemeId(String);

impl ThemeId {
    /// Create a new theme id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ThemeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ThemeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ThemeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ThemeId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ThemeId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl PartialEq<str> for ThemeId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ThemeId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_lookup_by_str() {
        let mut map = HashMap::new();
        map.insert(ThemeId::new("ocean"), 1);
        assert_eq!(map.get("ocean"), Some(&1));
        assert_eq!(map.get("Ocean"), None);
    }

    #[test]
    fn test_serde_transparent() {
        let id: ThemeId = serde_json::from_str("\"neon\"").unwrap();
        assert_eq!(id, "neon");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"neon\"");
    }
}
