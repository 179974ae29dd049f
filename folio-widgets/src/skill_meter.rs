use folio_theme::color::alpha;
use folio_theme::engine::ComponentTheme;
use folio_theme::theme::ColorKey;

use crate::markup::{brand_gradient, color_var, Element, Style};
use crate::Widget;

/// A labelled horizontal bar showing a skill level from `0` to `100`.
///
/// Levels outside the range are clamped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillMeter {
    name: String,
    level: u8,
    show_percentage: bool,
}

impl SkillMeter {
    /// Create a meter showing its percentage.
    pub fn new(name: impl Into<String>, level: i32) -> Self {
        Self {
            name: name.into(),
            level: level.clamp(0, 100) as u8,
            show_percentage: true,
        }
    }

    /// Sets whether the percentage label is shown and returns itself.
    pub fn with_percentage(mut self, show: bool) -> Self {
        self.show_percentage = show;
        self
    }

    /// The clamped level.
    pub fn level(&self) -> u8 {
        self.level
    }

    /// The skill name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Widget for SkillMeter {
    fn render(&self, theme: &ComponentTheme) -> String {
        let label = Element::new("span")
            .with_style(
                Style::new()
                    .with("font-weight", "600")
                    .with("color", color_var(ColorKey::Text)),
            )
            .with_text(&self.name);

        let percentage = self.show_percentage.then(|| {
            Element::new("span")
                .with_style(
                    Style::new()
                        .with("font-size", "0.75rem")
                        .with("font-weight", "600")
                        .with("color", color_var(ColorKey::TextSecondary)),
                )
                .with_text(format!("{}%", self.level))
        });

        let header = Element::new("div")
            .with_style(
                Style::new()
                    .with("display", "flex")
                    .with("justify-content", "space-between")
                    .with("align-items", "center")
                    .with("margin-bottom", "8px")
                    .with("font-weight", theme.typography.body_weight.clone()),
            )
            .with_child(label)
            .with_child_opt(percentage);

        let bar = Element::new("div").with_class("skill-meter-bar").with_style(
            Style::new()
                .with("width", format!("{}%", self.level))
                .with("height", "100%")
                .with("border-radius", "4px")
                .with("background-image", brand_gradient("90deg")),
        );

        let track = Element::new("div")
            .with_attr("role", "progressbar")
            .with_attr("aria-valuenow", self.level.to_string())
            .with_attr("aria-valuemin", "0")
            .with_attr("aria-valuemax", "100")
            .with_style(
                Style::new()
                    .with("height", "8px")
                    .with("border-radius", "4px")
                    .with("background-color", alpha(&color_var(ColorKey::Primary), 0.1)),
            )
            .with_child(bar);

        Element::new("div")
            .with_class("skill-meter")
            .with_child(header)
            .with_child(track)
            .render()
    }
}
