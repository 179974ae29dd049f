//! Filterable project grid with a detail overlay.
//!
//! ```rust
//! use folio_widgets::gallery::ProjectGallery;
//! use folio_widgets::project::Project;
//!
//! let mut gallery = ProjectGallery::new(vec![
//!     Project::new("a", "Alpha", "").with_stars(3).with_language("rust"),
//!     Project::new("b", "Beta", "").with_stars(9).with_language("Go"),
//!     Project::new("c", "Gamma", "").with_stars(5).with_language("Rust"),
//! ]);
//!
//! assert_eq!(gallery.filters(), vec!["all", "Go", "Rust"]);
//! gallery.select_filter("Rust");
//! let titles: Vec<&str> = gallery.visible().iter().map(|p| p.title.as_str()).collect();
//! assert_eq!(titles, vec!["Gamma", "Alpha"]);
//! ```

use folio_theme::engine::ComponentTheme;
use folio_theme::theme::{ColorKey, StyleKey};

use crate::markup::{brand_gradient, color_var, style_var, Element, Style};
use crate::modal::Modal;
use crate::project::Project;
use crate::typography::GradientText;
use crate::Widget;

/// The filter tag matching every project.
pub const ALL_FILTER: &str = "all";

/// Project grid state: sorted projects, the active language filter and the
/// project shown in the detail overlay.
#[derive(Debug, Clone)]
pub struct ProjectGallery {
    projects: Vec<Project>,
    filter: String,
    detail: Modal<usize>,
}

impl ProjectGallery {
    /// Create a gallery, sorting projects by stars, most first.
    ///
    /// Projects with equal stars keep their given order.
    pub fn new(mut projects: Vec<Project>) -> Self {
        projects.sort_by(|a, b| b.stars.cmp(&a.stars));
        Self {
            projects,
            filter: ALL_FILTER.to_string(),
            detail: Modal::new(),
        }
    }

    /// All projects in display order.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Filter tags: `all`, then each distinct language in display order.
    ///
    /// Languages differing only in case collapse into the first spelling seen.
    pub fn filters(&self) -> Vec<&str> {
        let mut languages: Vec<&str> = Vec::new();
        for language in self.projects.iter().filter_map(|p| p.language.as_deref()) {
            if language.is_empty() {
                continue;
            }
            if !languages.iter().any(|seen| seen.eq_ignore_ascii_case(language)) {
                languages.push(language);
            }
        }

        let mut tags = vec![ALL_FILTER];
        tags.extend(languages);
        tags
    }

    /// The active filter tag.
    pub fn active_filter(&self) -> &str {
        &self.filter
    }

    /// Activate a filter tag. Unknown tags are ignored.
    ///
    /// An exact match wins over a match differing only in case.
    pub fn select_filter(&mut self, tag: &str) -> bool {
        let filters = self.filters();
        let known = filters
            .iter()
            .find(|known| **known == tag)
            .or_else(|| filters.iter().find(|known| known.eq_ignore_ascii_case(tag)))
            .map(|known| known.to_string());

        match known {
            Some(tag) => {
                log::trace!("Gallery filter set to '{}'", tag);
                self.filter = tag;
                true
            },
            None => false,
        }
    }

    /// Projects matching the active filter, in display order.
    pub fn visible(&self) -> Vec<&Project> {
        if self.filter == ALL_FILTER {
            return self.projects.iter().collect();
        }
        self.projects
            .iter()
            .filter(|p| p.has_language(&self.filter))
            .collect()
    }

    /// Show a project in the detail overlay. Unknown ids are ignored.
    pub fn open_detail(&mut self, id: &str) -> bool {
        match self.projects.iter().position(|p| p.id == id) {
            Some(index) => {
                self.detail.open(index);
                true
            },
            None => false,
        }
    }

    /// Dismiss the detail overlay.
    pub fn close_detail(&mut self) {
        self.detail.close();
    }

    /// The project in the detail overlay.
    pub fn selected(&self) -> Option<&Project> {
        self.detail.content().map(|&index| &self.projects[index])
    }

    fn filter_button(&self, tag: &str) -> Element {
        let active = self.filter == tag;
        let label = if tag == ALL_FILTER {
            "All".to_string()
        } else {
            tag.to_string()
        };

        let style = if active {
            Style::new()
                .with("background", brand_gradient("to right"))
                .with("color", "white")
                .with("box-shadow", style_var(StyleKey::Glow))
                .with("border", "none")
                .with("font-weight", style_var(StyleKey::HeadingWeight))
        } else {
            Style::new()
                .with("background", color_var(ColorKey::Surface))
                .with("color", color_var(ColorKey::Text))
                .with("box-shadow", style_var(StyleKey::Shadow))
                .with("border", style_var(StyleKey::CardBorder))
                .with("font-weight", style_var(StyleKey::FontWeight))
        };

        Element::new("button")
            .with_class("filter-tag")
            .with_attr("data-filter", tag)
            .with_attr("aria-pressed", active.to_string())
            .with_style(style.with("border-radius", "9999px"))
            .with_text(label)
    }

    fn tile(project: &Project) -> Element {
        let cover = match &project.image {
            Some(image) => Element::new("img")
                .with_attr("src", image.clone())
                .with_attr("alt", project.title.clone())
                .with_style(Style::new().with("object-fit", "cover").with("width", "100%")),
            None => Element::new("div")
                .with_class("cover")
                .with_style(Style::new().with("background", brand_gradient("135deg"))),
        };

        let stars = Element::new("span")
            .with_class("stars")
            .with_style(Style::new().with("font-weight", style_var(StyleKey::HeadingWeight)))
            .with_text(format!("\u{2605} {}", project.stars));

        let language = project
            .language
            .as_ref()
            .map(|language| Element::new("span").with_class("language").with_text(language));

        Element::new("div")
            .with_class("project-tile")
            .with_attr("data-project", project.id.clone())
            .with_style(
                Style::new()
                    .with("background-color", color_var(ColorKey::Background))
                    .with("box-shadow", style_var(StyleKey::Shadow))
                    .with("border", style_var(StyleKey::CardBorder))
                    .with("border-radius", "1rem"),
            )
            .with_child(cover)
            .with_child(stars)
            .with_child_opt(language)
            .with_child(Element::new("h3").with_text(&project.title))
    }

    fn detail_body(project: &Project) -> Element {
        let link = |label: &str, href: &Option<String>| {
            href.as_ref().map(|href| {
                Element::new("a")
                    .with_attr("href", href.clone())
                    .with_attr("target", "_blank")
                    .with_attr("rel", "noopener noreferrer")
                    .with_text(label)
            })
        };

        Element::new("div")
            .with_class("project-detail")
            .with_child(Element::new("h3").with_text(&project.title))
            .with_child(
                Element::new("p")
                    .with_style(Style::new().with("color", color_var(ColorKey::TextSecondary)))
                    .with_text(&project.description),
            )
            .with_child(
                Element::new("p").with_text(format!(
                    "\u{2605} {} \u{00B7} forks {}",
                    project.stars, project.forks
                )),
            )
            .with_child_opt(link("Live demo", &project.live_url))
            .with_child_opt(link("Source", &project.github_url))
    }
}

impl Widget for ProjectGallery {
    fn render(&self, theme: &ComponentTheme) -> String {
        let heading = Element::new("h2")
            .with_style(Style::new().with("font-weight", theme.typography.heading_weight.to_string()))
            .with_child(
                GradientText::new("span", "My Projects")
                    .with_gradient(true)
                    .element(theme),
            );

        let filters = Element::new("div")
            .with_class("filters")
            .with_children(self.filters().into_iter().map(|tag| self.filter_button(tag)));

        let grid = Element::new("div")
            .with_class("project-grid")
            .with_style(
                Style::new()
                    .with("display", "grid")
                    .with("grid-template-columns", "repeat(auto-fit, minmax(min(100%, 300px), 1fr))")
                    .with("gap", "2rem"),
            )
            .with_children(self.visible().into_iter().map(Self::tile));

        let mut section = Element::new("section")
            .with_attr("id", "projects")
            .with_style(Style::new().with("background-color", color_var(ColorKey::Surface)))
            .with_child(heading)
            .with_child(
                Element::new("p")
                    .with_style(Style::new().with("color", color_var(ColorKey::TextSecondary)))
                    .with_text(format!("{} featured projects sorted by stars", self.projects.len())),
            )
            .with_child(filters)
            .with_child(grid);

        if let Some(overlay) = self
            .detail
            .render_with(|&index| Self::detail_body(&self.projects[index]))
        {
            section = section.with_raw(overlay);
        }

        section.render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_theme::theme::builtin;

    fn gallery() -> ProjectGallery {
        ProjectGallery::new(vec![
            Project::new("web", "Web", "Site").with_stars(10).with_language("TypeScript"),
            Project::new("cli", "Cli", "Tool").with_stars(42).with_language("Rust"),
            Project::new("notes", "Notes", "Docs").with_stars(10),
            Project::new("api", "Api", "Server").with_stars(7).with_language("rust"),
        ])
    }

    #[test]
    fn test_sorted_by_stars_stable() {
        let gallery = gallery();
        let ids: Vec<&str> = gallery.projects().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["cli", "web", "notes", "api"]);
    }

    #[test]
    fn test_filters_first_seen() {
        assert_eq!(gallery().filters(), vec!["all", "Rust", "TypeScript"]);
    }

    #[test]
    fn test_select_filter() {
        let mut gallery = gallery();
        assert!(gallery.select_filter("RUST"));
        assert_eq!(gallery.active_filter(), "Rust");
        let ids: Vec<&str> = gallery.visible().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["cli", "api"]);

        assert!(!gallery.select_filter("Haskell"));
        assert_eq!(gallery.active_filter(), "Rust");

        assert!(gallery.select_filter(ALL_FILTER));
        assert_eq!(gallery.visible().len(), 4);
    }

    #[test]
    fn test_language_named_all_keeps_its_tag() {
        let mut gallery = ProjectGallery::new(vec![
            Project::new("x", "X", "").with_stars(2).with_language("All"),
            Project::new("y", "Y", "").with_stars(1).with_language("Rust"),
        ]);
        assert_eq!(gallery.filters(), vec!["all", "All", "Rust"]);

        assert!(gallery.select_filter("All"));
        assert_eq!(gallery.active_filter(), "All");
        let ids: Vec<&str> = gallery.visible().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["x"]);

        assert!(gallery.select_filter("all"));
        assert_eq!(gallery.visible().len(), 2);
    }

    #[test]
    fn test_detail_overlay() {
        let mut gallery = gallery();
        assert!(!gallery.open_detail("missing"));
        assert!(gallery.selected().is_none());

        assert!(gallery.open_detail("notes"));
        assert_eq!(gallery.selected().unwrap().title, "Notes");
        let html = gallery.render(&ComponentTheme::from_record(&builtin::midnight()));
        assert!(html.contains(r#"role="dialog""#));

        gallery.close_detail();
        assert!(gallery.selected().is_none());
        let html = gallery.render(&ComponentTheme::from_record(&builtin::midnight()));
        assert!(!html.contains(r#"role="dialog""#));
    }

    #[test]
    fn test_render_marks_active_filter() {
        let mut gallery = gallery();
        gallery.select_filter("TypeScript");
        let html = gallery.render(&ComponentTheme::from_record(&builtin::light()));
        assert!(html.contains(r#"data-filter="TypeScript" aria-pressed="true""#));
        assert!(html.contains(r#"data-filter="all" aria-pressed="false""#));
        assert!(html.contains(r#"data-project="web""#));
        assert!(!html.contains(r#"data-project="cli""#));
        assert!(html.contains("4 featured projects"));
    }
}
