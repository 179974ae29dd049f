use folio_theme::engine::ComponentTheme;

use crate::markup::{brand_gradient, Element, Style};
use crate::Widget;

/// Text that can be filled with the brand gradient and given the theme glow.
///
/// ```rust
/// use folio_theme::engine::ComponentTheme;
/// use folio_theme::theme::builtin;
/// use folio_widgets::typography::GradientText;
/// use folio_widgets::Widget;
///
/// let html = GradientText::new("h2", "Projects")
///     .with_gradient(true)
///     .render(&ComponentTheme::from_record(&builtin::ocean()));
/// assert!(html.contains("background-clip: text"));
/// assert!(html.ends_with(">Projects</h2>"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradientText {
    tag: &'static str,
    text: String,
    gradient: bool,
    glow: bool,
    weight: Option<String>,
}

impl GradientText {
    /// Plain text in a `tag` element.
    pub fn new(tag: &'static str, text: impl Into<String>) -> Self {
        Self {
            tag,
            text: text.into(),
            gradient: false,
            glow: false,
            weight: None,
        }
    }

    /// Sets whether the text is filled with the brand gradient and returns itself.
    pub fn with_gradient(mut self, gradient: bool) -> Self {
        self.gradient = gradient;
        self
    }

    /// Sets whether the theme glow is applied and returns itself.
    pub fn with_glow(mut self, glow: bool) -> Self {
        self.glow = glow;
        self
    }

    /// Sets the font weight and returns itself.
    pub fn with_weight(mut self, weight: impl Into<String>) -> Self {
        self.weight = Some(weight.into());
        self
    }

    /// The element, for embedding in a larger widget.
    pub fn element(&self, theme: &ComponentTheme) -> Element {
        let mut style = Style::new();
        if self.gradient {
            style = style
                .with("background-image", brand_gradient("135deg"))
                .with("background-clip", "text")
                .with("-webkit-background-clip", "text")
                .with("-webkit-text-fill-color", "transparent")
                .with("display", "inline-block");
        }
        let style = style
            .with_if(self.glow, "text-shadow", theme.custom.glow.clone())
            .with_if(
                self.weight.is_some(),
                "font-weight",
                self.weight.clone().unwrap_or_default(),
            );

        Element::new(self.tag).with_style(style).with_text(&self.text)
    }
}

impl Widget for GradientText {
    fn render(&self, theme: &ComponentTheme) -> String {
        self.element(theme).render()
    }
}
