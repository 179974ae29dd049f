use folio_theme::engine::ComponentTheme;
use folio_theme::theme::ColorKey;

use crate::badge::{BadgeSize, TechBadge};
use crate::markup::{color_var, Element, Style};
use crate::project::Project;
use crate::typography::GradientText;
use crate::Widget;

/// An expandable card presenting one project.
///
/// Collapsed, it shows the title, role, description and metrics. Expanded, it
/// adds technologies, achievements and business impact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCard {
    project: Project,
    expanded: bool,
}

impl ProjectCard {
    /// Create a collapsed card.
    pub fn new(project: Project) -> Self {
        Self {
            project,
            expanded: false,
        }
    }

    /// Sets the initial expansion state and returns itself.
    pub fn with_default_expanded(mut self, expanded: bool) -> Self {
        self.expanded = expanded;
        self
    }

    /// Flip between collapsed and expanded.
    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    /// Whether details are shown.
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// The project shown.
    pub fn project(&self) -> &Project {
        &self.project
    }

    fn heading(&self, theme: &ComponentTheme) -> Element {
        let title = GradientText::new("h5", &self.project.title)
            .with_gradient(true)
            .with_glow(true)
            .with_weight(theme.typography.heading_weight.to_string())
            .element(theme);

        let subtitle = self.project.period.as_ref().map(|period| {
            let role = self.project.role.as_deref().unwrap_or_default();
            Element::new("p")
                .with_style(Style::new().with("color", color_var(ColorKey::TextSecondary)))
                .with_text(format!("{} \u{2022} {}", role, period))
        });

        let toggle = Element::new("button")
            .with_class("expand-button")
            .with_attr("aria-expanded", self.expanded.to_string())
            .with_attr("aria-label", "show more")
            .with_style(
                Style::new()
                    .with(
                        "transform",
                        if self.expanded { "rotate(180deg)" } else { "rotate(0deg)" },
                    )
                    .with("transition", "transform 0.3s ease"),
            )
            .with_text("\u{25BE}");

        Element::new("div")
            .with_style(
                Style::new()
                    .with("display", "flex")
                    .with("justify-content", "space-between")
                    .with("align-items", "flex-start"),
            )
            .with_child(Element::new("div").with_child(title).with_child_opt(subtitle))
            .with_child(toggle)
    }

    fn details(&self, theme: &ComponentTheme) -> Element {
        let section_title = |text: &str| {
            Element::new("h6")
                .with_style(
                    Style::new()
                        .with("color", color_var(ColorKey::Primary))
                        .with("font-weight", theme.typography.heading_weight.to_string()),
                )
                .with_text(text)
        };

        let badges = Element::new("div")
            .with_style(
                Style::new()
                    .with("display", "flex")
                    .with("flex-wrap", "wrap")
                    .with("gap", "8px"),
            )
            .with_children(
                self.project
                    .technologies
                    .iter()
                    .map(|tech| TechBadge::new(tech).with_size(BadgeSize::Small).element()),
            );

        let achievements = Element::new("ul").with_children(
            self.project
                .achievements
                .iter()
                .map(|achievement| Element::new("li").with_text(achievement)),
        );

        let impact = self.project.impact.as_ref().map(|impact| {
            Element::new("div")
                .with_class("impact")
                .with_style(
                    Style::new()
                        .with("background-color", color_var(ColorKey::Background))
                        .with("border-left", format!("4px solid {}", color_var(ColorKey::Accent)))
                        .with("padding", "16px"),
                )
                .with_child(
                    Element::new("h6")
                        .with_style(Style::new().with("color", color_var(ColorKey::Accent)))
                        .with_text("Business Impact"),
                )
                .with_child(Element::new("p").with_text(impact))
        });

        Element::new("div")
            .with_class("project-details")
            .with_child(section_title("Technologies Used"))
            .with_child(badges)
            .with_child(section_title("Key Achievements"))
            .with_child(achievements)
            .with_child_opt(impact)
    }
}

impl Widget for ProjectCard {
    fn render(&self, theme: &ComponentTheme) -> String {
        let card = &theme.components.card;

        let metrics = self.project.metrics.as_ref().map(|metrics| {
            Element::new("div")
                .with_class("metrics")
                .with_style(
                    Style::new()
                        .with("background-color", color_var(ColorKey::Background))
                        .with("border-left", format!("4px solid {}", color_var(ColorKey::Primary))),
                )
                .with_text(format!("Key Metrics: {}", metrics))
        });

        Element::new("article")
            .with_class("project-card")
            .with_attr("data-project", self.project.id.clone())
            .with_style(
                Style::new()
                    .with("background-color", color_var(ColorKey::Surface))
                    .with("color", color_var(ColorKey::Text))
                    .with("box-shadow", card.box_shadow.clone())
                    .with("border", card.border.clone())
                    .with("border-radius", "16px")
                    .with("padding", "24px")
                    .with("cursor", "pointer"),
            )
            .with_child(self.heading(theme))
            .with_child(Element::new("p").with_text(&self.project.description))
            .with_child_opt(metrics)
            .with_child_opt(self.expanded.then(|| self.details(theme)))
            .render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_theme::theme::builtin;

    fn project() -> Project {
        Project::new("1", "E-Commerce Platform", "A full-stack e-commerce solution")
            .with_role("Senior Full-Stack Developer", "2023 - Present")
            .with_technologies(["React", "Node.js", "PostgreSQL"])
            .with_achievements(["Increased conversion rate by 35%", "Reduced page load time by 50%"])
            .with_impact("Generated $2M in additional revenue")
            .with_metrics("1M+ monthly active users")
    }

    fn theme() -> ComponentTheme {
        ComponentTheme::from_record(&builtin::purple())
    }

    #[test]
    fn test_collapsed_hides_details() {
        let card = ProjectCard::new(project());
        let html = card.render(&theme());
        assert!(!card.is_expanded());
        assert!(html.contains("E-Commerce Platform"));
        assert!(html.contains("Senior Full-Stack Developer \u{2022} 2023 - Present"));
        assert!(html.contains("Key Metrics: 1M+ monthly active users"));
        assert!(html.contains(r#"aria-expanded="false""#));
        assert!(!html.contains("Technologies Used"));
        assert!(!html.contains("PostgreSQL"));
    }

    #[test]
    fn test_toggle_shows_details() {
        let mut card = ProjectCard::new(project());
        card.toggle();
        let html = card.render(&theme());
        assert!(html.contains(r#"aria-expanded="true""#));
        assert!(html.contains("Technologies Used"));
        assert!(html.contains(">PostgreSQL</span>"));
        assert!(html.contains("<li>Reduced page load time by 50%</li>"));
        assert!(html.contains("Generated $2M in additional revenue"));

        card.toggle();
        assert!(!card.is_expanded());
    }

    #[test]
    fn test_default_expanded_and_optional_fields() {
        let bare = Project::new("2", "Tool", "A tool");
        let html = ProjectCard::new(bare).with_default_expanded(true).render(&theme());
        assert!(html.contains("Key Achievements"));
        assert!(!html.contains("Key Metrics"));
        assert!(!html.contains("Business Impact"));
        assert!(!html.contains("\u{2022}"));
    }

    #[test]
    fn test_card_uses_component_overrides() {
        let theme = theme();
        let html = ProjectCard::new(project()).render(&theme);
        assert!(html.contains(&format!("box-shadow: {}", theme.components.card.box_shadow)));
    }

    #[test]
    fn test_title_is_gradient_text() {
        let theme = theme();
        let html = ProjectCard::new(project()).render(&theme);
        let title = GradientText::new("h5", "E-Commerce Platform")
            .with_gradient(true)
            .with_glow(true)
            .with_weight("700")
            .render(&theme);
        assert!(html.contains(&title));
    }
}
