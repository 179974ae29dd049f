//! Hex color parsing and alpha blending for theme color strings.
//!
//! Theme colors stay plain CSS strings. When a widget needs a translucent
//! variant, [alpha] turns a hex color into `rgba(...)`; anything else (a
//! `var(--color-*)` reference, a named color) is wrapped in `color-mix`, which
//! browsers resolve at paint time.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// An 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha, 255 is opaque.
    pub a: u8,
}

impl Rgba {
    /// An opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse `#rgb`, `#rrggbb` or `#rrggbbaa`.
    pub fn parse_hex(hex: &str) -> Result<Self, String> {
        let hex = hex.trim().trim_start_matches('#');
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(format!("Invalid hex color '#{}'", hex));
        }
        // Only ASCII remains, so byte ranges below are char boundaries.
        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| format!("Invalid hex color '#{}'", hex));

        match hex.len() {
            3 => {
                let digit = |i: usize| channel(&hex[i..i + 1]).map(|v| v * 17);
                Ok(Self::rgb(digit(0)?, digit(1)?, digit(2)?))
            },
            6 => Ok(Self::rgb(channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?)),
            8 => Ok(Self {
                r: channel(&hex[0..2])?,
                g: channel(&hex[2..4])?,
                b: channel(&hex[4..6])?,
                a: channel(&hex[6..8])?,
            }),
            _ => Err("Hex color must be 3, 6 or 8 characters".to_string()),
        }
    }

    /// Same color with alpha `factor` (clamped to `0.0..=1.0`).
    pub fn with_alpha(self, factor: f32) -> Self {
        Self {
            a: (factor.clamp(0.0, 1.0) * 255.0).round() as u8,
            ..self
        }
    }

    /// CSS `rgba(r, g, b, a)` notation.
    pub fn to_css(self) -> String {
        let alpha = f32::from(self.a) / 255.0;
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, trim_float(alpha))
    }

    /// Hex notation; the alpha pair is omitted when opaque.
    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

impl FromStr for Rgba {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hex(s)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Rgba {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgba {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;
        let hex = String::deserialize(deserializer)?;
        Self::parse_hex(&hex).map_err(Error::custom)
    }
}

/// Translucent variant of a CSS color.
///
/// ```rust
/// use folio_theme::color::alpha;
///
/// assert_eq!(alpha("#FF00FF", 0.5), "rgba(255, 0, 255, 0.5)");
/// assert_eq!(
///     alpha("var(--color-primary)", 0.12),
///     "color-mix(in srgb, var(--color-primary) 12%, transparent)"
/// );
/// ```
pub fn alpha(color: &str, factor: f32) -> String {
    let factor = factor.clamp(0.0, 1.0);
    match Rgba::parse_hex(color) {
        Ok(rgba) if color.trim_start().starts_with('#') => {
            let a = f32::from(rgba.a) / 255.0 * factor;
            format!("rgba({}, {}, {}, {})", rgba.r, rgba.g, rgba.b, trim_float(a))
        },
        _ => format!(
            "color-mix(in srgb, {} {}%, transparent)",
            color,
            trim_float(factor * 100.0)
        ),
    }
}

/// Up to three decimals, without trailing zeros.
fn trim_float(value: f32) -> String {
    let text = format!("{:.3}", value);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text.is_empty() { "0".to_string() } else { text.to_string() }
}
