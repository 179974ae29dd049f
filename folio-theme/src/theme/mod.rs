//! # Theme Records
//!
//! A [ThemeRecord] is the immutable description of one theme: a display name,
//! a [ColorPalette] of seven named colors and a set of five [StyleTokens].
//!
//! The key sets are closed. [ColorKey] and [StyleKey] enumerate them, and the
//! record fields are plain structs, so a record can never be missing a key.
//! The only thing left to check is that no value is empty, which
//! [ThemeRecord::missing_tokens] does.
//!
//! Records serialize with the camelCase key names used on the styling side:
//!
//! ```toml
//! name = "Ocean"
//!
//! [colors]
//! primary = "#0EA5E9"
//! secondary = "#06B6D4"
//! accent = "#22D3EE"
//! background = "#082F49"
//! surface = "#0C4A6E"
//! text = "#F0F9FF"
//! textSecondary = "#7DD3FC"
//!
//! [styles]
//! fontWeight = "normal"
//! headingWeight = "700"
//! shadow = "0 4px 6px -1px rgba(14, 165, 233, 0.3)"
//! glow = "0 0 20px rgba(14, 165, 233, 0.4)"
//! cardBorder = "1px solid rgba(14, 165, 233, 0.2)"
//! ```

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// The built-in themes.
pub mod builtin;

/// Identifier of the theme used when neither the persisted preference nor the
/// caller-supplied default names a registered theme.
pub const FALLBACK_THEME: &str = "purple";

/// The seven color keys every theme defines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorKey {
    /// Main brand color.
    Primary,
    /// Secondary brand color, used in gradients with the primary.
    Secondary,
    /// Accent color for highlights.
    Accent,
    /// Page background.
    Background,
    /// Raised surfaces such as cards and dialogs.
    Surface,
    /// Main text color.
    Text,
    /// Muted text color.
    TextSecondary,
}

impl ColorKey {
    /// All color keys in publication order.
    pub const ALL: [ColorKey; 7] = [
        ColorKey::Primary,
        ColorKey::Secondary,
        ColorKey::Accent,
        ColorKey::Background,
        ColorKey::Surface,
        ColorKey::Text,
        ColorKey::TextSecondary,
    ];

    /// The key as it appears in token names and serialized records.
    pub fn as_str(self) -> &'static str {
        match self {
            ColorKey::Primary => "primary",
            ColorKey::Secondary => "secondary",
            ColorKey::Accent => "accent",
            ColorKey::Background => "background",
            ColorKey::Surface => "surface",
            ColorKey::Text => "text",
            ColorKey::TextSecondary => "textSecondary",
        }
    }

    /// Parse a key from its serialized name.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.as_str() == name)
    }
}

impl Display for ColorKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The five style token keys every theme defines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleKey {
    /// Base font weight.
    FontWeight,
    /// Heading font weight.
    HeadingWeight,
    /// Box-shadow value.
    Shadow,
    /// Emphasis shadow value.
    Glow,
    /// Card border value.
    CardBorder,
}

impl StyleKey {
    /// All style keys in publication order.
    pub const ALL: [StyleKey; 5] = [
        StyleKey::FontWeight,
        StyleKey::HeadingWeight,
        StyleKey::Shadow,
        StyleKey::Glow,
        StyleKey::CardBorder,
    ];

    /// The key as it appears in token names and serialized records.
    pub fn as_str(self) -> &'static str {
        match self {
            StyleKey::FontWeight => "fontWeight",
            StyleKey::HeadingWeight => "headingWeight",
            StyleKey::Shadow => "shadow",
            StyleKey::Glow => "glow",
            StyleKey::CardBorder => "cardBorder",
        }
    }

    /// Parse a key from its serialized name.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.as_str() == name)
    }
}

impl Display for StyleKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Color values of a theme. Values are CSS color strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorPalette {
    /// Main brand color.
    pub primary: String,
    /// Secondary brand color.
    pub secondary: String,
    /// Accent color.
    pub accent: String,
    /// Page background.
    pub background: String,
    /// Raised surface color.
    pub surface: String,
    /// Main text color.
    pub text: String,
    /// Muted text color.
    pub text_secondary: String,
}

impl ColorPalette {
    /// Get the value of a color key.
    pub fn get(&self, key: ColorKey) -> &str {
        match key {
            ColorKey::Primary => &self.primary,
            ColorKey::Secondary => &self.secondary,
            ColorKey::Accent => &self.accent,
            ColorKey::Background => &self.background,
            ColorKey::Surface => &self.surface,
            ColorKey::Text => &self.text,
            ColorKey::TextSecondary => &self.text_secondary,
        }
    }

    /// Iterate over `(key, value)` pairs in publication order.
    pub fn iter(&self) -> impl Iterator<Item = (ColorKey, &str)> {
        ColorKey::ALL.into_iter().map(move |key| (key, self.get(key)))
    }
}

/// Style token values of a theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleTokens {
    /// Base font weight, e.g. `"normal"` or `"500"`.
    pub font_weight: String,
    /// Heading font weight, e.g. `"700"`.
    pub heading_weight: String,
    /// Box-shadow value.
    pub shadow: String,
    /// Emphasis shadow value.
    pub glow: String,
    /// Card border value.
    pub card_border: String,
}

impl StyleTokens {
    /// Get the value of a style key.
    pub fn get(&self, key: StyleKey) -> &str {
        match key {
            StyleKey::FontWeight => &self.font_weight,
            StyleKey::HeadingWeight => &self.heading_weight,
            StyleKey::Shadow => &self.shadow,
            StyleKey::Glow => &self.glow,
            StyleKey::CardBorder => &self.card_border,
        }
    }

    /// Iterate over `(key, value)` pairs in publication order.
    pub fn iter(&self) -> impl Iterator<Item = (StyleKey, &str)> {
        StyleKey::ALL.into_iter().map(move |key| (key, self.get(key)))
    }
}

/// An immutable theme: display name, colors and style tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeRecord {
    /// Display label.
    pub name: String,
    /// Color palette.
    pub colors: ColorPalette,
    /// Style tokens.
    pub styles: StyleTokens,
}

impl ThemeRecord {
    /// Build a record from positional values.
    ///
    /// `colors` follows [ColorKey::ALL] order and `styles` follows [StyleKey::ALL] order.
    pub fn from_values(name: impl Into<String>, colors: [&str; 7], styles: [&str; 5]) -> Self {
        let [primary, secondary, accent, background, surface, text, text_secondary] = colors;
        let [font_weight, heading_weight, shadow, glow, card_border] = styles;
        Self {
            name: name.into(),
            colors: ColorPalette {
                primary: primary.to_string(),
                secondary: secondary.to_string(),
                accent: accent.to_string(),
                background: background.to_string(),
                surface: surface.to_string(),
                text: text.to_string(),
                text_secondary: text_secondary.to_string(),
            },
            styles: StyleTokens {
                font_weight: font_weight.to_string(),
                heading_weight: heading_weight.to_string(),
                shadow: shadow.to_string(),
                glow: glow.to_string(),
                card_border: card_border.to_string(),
            },
        }
    }

    /// Token names (`color-<key>` / `style-<key>`) whose value is blank.
    pub fn missing_tokens(&self) -> Vec<String> {
        let colors = self
            .colors
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(key, _)| crate::properties::color_token_name(key));
        let styles = self
            .styles
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(key, _)| crate::properties::style_token_name(key));
        colors.chain(styles).collect()
    }

    /// Whether every color and style token carries a value.
    pub fn is_complete(&self) -> bool {
        self.missing_tokens().is_empty()
    }
}
