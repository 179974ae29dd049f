//! # Component Theme
//!
//! Derives a component-level theme from a [ThemeRecord]: palette roles,
//! typography weights and per-component overrides. Widgets read these instead
//! of picking raw palette entries themselves, so every card, paper surface and
//! button agrees on which token plays which role.
//!
//! ```rust
//! use folio_theme::engine::{ComponentTheme, PaletteMode};
//! use folio_theme::theme::builtin;
//!
//! let theme = ComponentTheme::from_record(&builtin::light());
//! assert_eq!(theme.palette.mode, PaletteMode::Light);
//! assert_eq!(theme.typography.heading_weight, 600);
//! assert_eq!(theme.components.button.text_transform, "none");
//! ```

use std::fmt::Write;

use crate::theme::ThemeRecord;

/// Font stack used for all text.
pub const FONT_FAMILY: &str =
    "-apple-system, BlinkMacSystemFont, \"Segoe UI\", Roboto, \"Helvetica Neue\", Arial, sans-serif";

/// Heading weight used when `headingWeight` carries no number.
pub const DEFAULT_HEADING_WEIGHT: u16 = 700;

/// Whether a palette is meant for dark or light backgrounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteMode {
    /// Light text on a dark background.
    Dark,
    /// Dark text on a light background.
    Light,
}

impl PaletteMode {
    /// Classify a background color.
    ///
    /// Only hex notation is inspected: `#000000` or anything starting with
    /// `#0`/`#1` is dark.
    pub fn from_background(background: &str) -> Self {
        if background == "#000000" || background.starts_with("#0") || background.starts_with("#1") {
            PaletteMode::Dark
        } else {
            PaletteMode::Light
        }
    }

    /// Lowercase name, as used in CSS `color-scheme`.
    pub fn as_str(self) -> &'static str {
        match self {
            PaletteMode::Dark => "dark",
            PaletteMode::Light => "light",
        }
    }
}

/// Main, light and dark shades of one palette role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorRole {
    /// Base shade.
    pub main: String,
    /// Highlight shade.
    pub light: String,
    /// Emphasis shade.
    pub dark: String,
}

/// Palette roles derived from the seven theme colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    /// Dark or light.
    pub mode: PaletteMode,
    /// Primary role.
    pub primary: ColorRole,
    /// Secondary role.
    pub secondary: ColorRole,
    /// Accent color.
    pub accent: String,
    /// Page background.
    pub background_default: String,
    /// Raised surfaces: cards, dialogs, drawers.
    pub background_paper: String,
    /// Body text.
    pub text_primary: String,
    /// Muted text.
    pub text_secondary: String,
}

/// Font weights and heading decoration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typography {
    /// Font stack.
    pub font_family: &'static str,
    /// Numeric weight for `h1`..`h6` and buttons.
    pub heading_weight: u16,
    /// Body weight, kept verbatim (`normal`, `300`, ...).
    pub body_weight: String,
    /// Text shadow of `h1` and `h2`.
    pub heading_glow: String,
}

impl Typography {
    /// Text shadow of a heading level; only `h1` and `h2` glow.
    pub fn heading_shadow(&self, level: u8) -> Option<&str> {
        matches!(level, 1 | 2).then_some(self.heading_glow.as_str())
    }
}

/// Card override.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardStyle {
    /// Card shadow.
    pub box_shadow: String,
    /// Card border.
    pub border: String,
}

/// Paper override.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaperStyle {
    /// Surface shadow.
    pub box_shadow: String,
}

/// Button override.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonStyle {
    /// Always `none`; labels keep their case.
    pub text_transform: &'static str,
    /// Same as the heading weight.
    pub font_weight: u16,
}

/// Per-component style overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentOverrides {
    /// Cards.
    pub card: CardStyle,
    /// Raised surfaces.
    pub paper: PaperStyle,
    /// Buttons.
    pub button: ButtonStyle,
}

/// Theme-specific effects exposed as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomStyles {
    /// Glow effect.
    pub glow: String,
    /// Elevation shadow.
    pub shadow: String,
    /// Card border.
    pub card_border: String,
}

/// Everything a widget needs to style itself for one theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentTheme {
    /// Color roles.
    pub palette: Palette,
    /// Weights and heading glow.
    pub typography: Typography,
    /// Component overrides.
    pub components: ComponentOverrides,
    /// Raw effect tokens.
    pub custom: CustomStyles,
}

impl ComponentTheme {
    /// Derive the component theme of a record.
    pub fn from_record(record: &ThemeRecord) -> Self {
        let colors = &record.colors;
        let styles = &record.styles;
        let heading_weight = parse_weight(&styles.heading_weight);

        let palette = Palette {
            mode: PaletteMode::from_background(&colors.background),
            primary: ColorRole {
                main: colors.primary.clone(),
                light: colors.secondary.clone(),
                dark: colors.accent.clone(),
            },
            secondary: ColorRole {
                main: colors.secondary.clone(),
                light: colors.accent.clone(),
                dark: colors.primary.clone(),
            },
            accent: colors.accent.clone(),
            background_default: colors.background.clone(),
            background_paper: colors.surface.clone(),
            text_primary: colors.text.clone(),
            text_secondary: colors.text_secondary.clone(),
        };

        let typography = Typography {
            font_family: FONT_FAMILY,
            heading_weight,
            body_weight: styles.font_weight.clone(),
            heading_glow: styles.glow.clone(),
        };

        let components = ComponentOverrides {
            card: CardStyle {
                box_shadow: styles.shadow.clone(),
                border: styles.card_border.clone(),
            },
            paper: PaperStyle {
                box_shadow: styles.shadow.clone(),
            },
            button: ButtonStyle {
                text_transform: "none",
                font_weight: heading_weight,
            },
        };

        let custom = CustomStyles {
            glow: styles.glow.clone(),
            shadow: styles.shadow.clone(),
            card_border: styles.card_border.clone(),
        };

        Self {
            palette,
            typography,
            components,
            custom,
        }
    }

    /// Render the typography and component overrides as a stylesheet.
    pub fn to_css(&self) -> String {
        let mut css = String::new();
        let _ = writeln!(
            css,
            "body {{ font-family: {}; font-weight: {}; color-scheme: {}; }}",
            self.typography.font_family,
            self.typography.body_weight,
            self.palette.mode.as_str()
        );
        for level in 1..=6u8 {
            let _ = write!(css, "h{} {{ font-weight: {};", level, self.typography.heading_weight);
            if let Some(shadow) = self.typography.heading_shadow(level) {
                let _ = write!(css, " text-shadow: {};", shadow);
            }
            css.push_str(" }\n");
        }
        let _ = writeln!(
            css,
            ".card {{ box-shadow: {}; border: {}; }}",
            self.components.card.box_shadow, self.components.card.border
        );
        let _ = writeln!(css, ".paper {{ box-shadow: {}; }}", self.components.paper.box_shadow);
        let _ = writeln!(
            css,
            "button {{ text-transform: {}; font-weight: {}; }}",
            self.components.button.text_transform, self.components.button.font_weight
        );
        css
    }
}

/// Leading digits of a weight string, like `parseInt`.
fn parse_weight(value: &str) -> u16 {
    let trimmed = value.trim_start();
    let end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    trimmed[..end].parse().unwrap_or(DEFAULT_HEADING_WEIGHT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::builtin;

    #[test]
    fn test_palette_mode() {
        assert_eq!(PaletteMode::from_background("#000000"), PaletteMode::Dark);
        assert_eq!(PaletteMode::from_background("#0F172A"), PaletteMode::Dark);
        assert_eq!(PaletteMode::from_background("#18181B"), PaletteMode::Dark);
        assert_eq!(PaletteMode::from_background("#F8FAFC"), PaletteMode::Light);
        // Dark-ish colors outside #0/#1 still count as light.
        assert_eq!(PaletteMode::from_background("#2A0F18"), PaletteMode::Light);
    }

    #[test]
    fn test_parse_weight() {
        assert_eq!(parse_weight("800"), 800);
        assert_eq!(parse_weight("600px"), 600);
        assert_eq!(parse_weight("bold"), DEFAULT_HEADING_WEIGHT);
        assert_eq!(parse_weight(""), DEFAULT_HEADING_WEIGHT);
    }

    #[test]
    fn test_roles() {
        let record = builtin::dark();
        let theme = ComponentTheme::from_record(&record);
        assert_eq!(theme.palette.mode, PaletteMode::Dark);
        assert_eq!(theme.palette.primary.main, record.colors.primary);
        assert_eq!(theme.palette.primary.light, record.colors.secondary);
        assert_eq!(theme.palette.primary.dark, record.colors.accent);
        assert_eq!(theme.palette.secondary.dark, record.colors.primary);
        assert_eq!(theme.palette.background_paper, record.colors.surface);
        assert_eq!(theme.components.card.border, record.styles.card_border);
        assert_eq!(theme.components.paper.box_shadow, record.styles.shadow);
        assert_eq!(theme.custom.glow, record.styles.glow);
    }

    #[test]
    fn test_only_top_headings_glow() {
        let theme = ComponentTheme::from_record(&builtin::neon());
        assert!(theme.typography.heading_shadow(1).is_some());
        assert!(theme.typography.heading_shadow(2).is_some());
        assert!(theme.typography.heading_shadow(3).is_none());

        let css = theme.to_css();
        assert!(css.contains("h1 { font-weight: 800; text-shadow: "));
        assert!(css.contains("h3 { font-weight: 800; }"));
        assert!(css.contains("button { text-transform: none; font-weight: 800; }"));
    }
}
