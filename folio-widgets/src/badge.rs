use folio_theme::color::alpha;
use folio_theme::engine::ComponentTheme;
use folio_theme::theme::ColorKey;

use crate::markup::{color_var, Element, Style};
use crate::Widget;

/// Which palette role a badge is tinted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorScheme {
    /// Primary color.
    #[default]
    Primary,
    /// Secondary color.
    Secondary,
    /// Accent color.
    Accent,
}

impl ColorScheme {
    /// The color token backing this scheme.
    pub fn color_key(self) -> ColorKey {
        match self {
            ColorScheme::Primary => ColorKey::Primary,
            ColorScheme::Secondary => ColorKey::Secondary,
            ColorScheme::Accent => ColorKey::Accent,
        }
    }
}

/// Badge size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeSize {
    /// Compact, used inside cards.
    Small,
    /// Regular.
    #[default]
    Medium,
}

/// A tinted chip naming one technology.
///
/// ### Theming
/// - background: scheme color at 12% opacity
/// - border: scheme color at 30% opacity
/// - glow (optional): `0 0 12px` scheme color at 40% opacity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TechBadge {
    technology: String,
    scheme: ColorScheme,
    size: BadgeSize,
    glowing: bool,
}

impl TechBadge {
    /// Create a primary, non-glowing badge.
    pub fn new(technology: impl Into<String>) -> Self {
        Self {
            technology: technology.into(),
            scheme: ColorScheme::default(),
            size: BadgeSize::default(),
            glowing: false,
        }
    }

    /// Sets the color scheme and returns itself.
    pub fn with_scheme(mut self, scheme: ColorScheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// Sets the size and returns itself.
    pub fn with_size(mut self, size: BadgeSize) -> Self {
        self.size = size;
        self
    }

    /// Sets whether the badge glows and returns itself.
    pub fn with_glow(mut self, glowing: bool) -> Self {
        self.glowing = glowing;
        self
    }

    /// The technology label.
    pub fn technology(&self) -> &str {
        &self.technology
    }

    pub(crate) fn element(&self) -> Element {
        let color = color_var(self.scheme.color_key());
        let (font_size, padding) = match self.size {
            BadgeSize::Small => ("0.75rem", "2px 8px"),
            BadgeSize::Medium => ("0.875rem", "4px 12px"),
        };

        let style = Style::new()
            .with("background-color", alpha(&color, 0.12))
            .with("color", color.clone())
            .with("border", format!("1px solid {}", alpha(&color, 0.3)))
            .with("font-weight", "600")
            .with("font-size", font_size)
            .with("padding", padding)
            .with("border-radius", "9999px")
            .with_if(self.glowing, "box-shadow", format!("0 0 12px {}", alpha(&color, 0.4)))
            .with("transition", "all 0.3s cubic-bezier(0.4, 0, 0.2, 1)");

        Element::new("span")
            .with_class("tech-badge")
            .with_style(style)
            .with_text(&self.technology)
    }
}

impl Widget for TechBadge {
    fn render(&self, _theme: &ComponentTheme) -> String {
        self.element().render()
    }
}
