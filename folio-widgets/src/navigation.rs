use folio_theme::color::alpha;
use folio_theme::engine::ComponentTheme;
use folio_theme::theme::ColorKey;

use crate::markup::{brand_gradient, color_var, Element, Style};
use crate::Widget;

/// One navigation entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    /// Visible label.
    pub label: String,
    /// Target path.
    pub href: String,
}

impl NavItem {
    /// Create an entry.
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

/// The site's default entries.
pub fn default_items() -> Vec<NavItem> {
    vec![
        NavItem::new("Home", "/"),
        NavItem::new("Verily", "/verily"),
        NavItem::new("Target", "/target"),
        NavItem::new("Projects", "/projects"),
        NavItem::new("Contact", "/contact"),
    ]
}

/// Top bar with inline links on wide screens and a drawer on narrow ones.
///
/// The item whose `href` equals the current path is highlighted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationBar {
    brand: String,
    items: Vec<NavItem>,
    current_path: String,
    drawer_open: bool,
}

impl NavigationBar {
    /// Create a bar with the default entries, at `/`.
    pub fn new(brand: impl Into<String>) -> Self {
        Self {
            brand: brand.into(),
            items: default_items(),
            current_path: "/".to_string(),
            drawer_open: false,
        }
    }

    /// Sets the entries and returns itself.
    pub fn with_items(mut self, items: Vec<NavItem>) -> Self {
        self.items = items;
        self
    }

    /// Sets the current path and returns itself.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.current_path = path.into();
        self
    }

    /// The entries.
    pub fn items(&self) -> &[NavItem] {
        &self.items
    }

    /// Whether `href` is the current path.
    pub fn is_active(&self, href: &str) -> bool {
        self.current_path == href
    }

    /// The entry for the current path.
    pub fn active_item(&self) -> Option<&NavItem> {
        self.items.iter().find(|item| self.is_active(&item.href))
    }

    /// Open or close the drawer.
    pub fn toggle_drawer(&mut self) {
        self.drawer_open = !self.drawer_open;
    }

    /// Whether the drawer is open.
    pub fn is_drawer_open(&self) -> bool {
        self.drawer_open
    }

    /// Follow a link: update the current path and close the drawer.
    pub fn navigate(&mut self, href: impl Into<String>) {
        self.current_path = href.into();
        self.drawer_open = false;
    }

    fn link(&self, item: &NavItem, theme: &ComponentTheme) -> Element {
        let active = self.is_active(&item.href);
        let weight = if active {
            theme.typography.heading_weight.to_string()
        } else {
            "500".to_string()
        };

        let indicator = active.then(|| {
            Element::new("span").with_class("active-indicator").with_style(
                Style::new()
                    .with("position", "absolute")
                    .with("left", "0")
                    .with("right", "0")
                    .with("bottom", "0")
                    .with("height", "2px")
                    .with("background", brand_gradient("90deg")),
            )
        });

        let mut link = Element::new("a")
            .with_attr("href", item.href.clone())
            .with_style(
                Style::new()
                    .with(
                        "color",
                        color_var(if active { ColorKey::Primary } else { ColorKey::Text }),
                    )
                    .with("font-weight", weight)
                    .with("position", "relative")
                    .with("padding", "8px 16px")
                    .with("text-decoration", "none"),
            )
            .with_text(&item.label)
            .with_child_opt(indicator);
        if active {
            link = link.with_attr("aria-current", "page");
        }
        link
    }

    fn drawer(&self, theme: &ComponentTheme) -> Element {
        let entries = self.items.iter().map(|item| {
            let active = self.is_active(&item.href);
            let primary = color_var(ColorKey::Primary);
            Element::new("li")
                .with_style(
                    Style::new()
                        .with(
                            "background-color",
                            if active { alpha(&primary, 0.1) } else { "transparent".to_string() },
                        )
                        .with(
                            "border-left",
                            if active { format!("4px solid {}", primary) } else { "none".to_string() },
                        ),
                )
                .with_child(self.link(item, theme))
        });

        Element::new("nav")
            .with_class("drawer")
            .with_attr("aria-label", "mobile navigation")
            .with_style(
                Style::new()
                    .with("width", "250px")
                    .with("background-color", color_var(ColorKey::Surface)),
            )
            .with_child(Element::new("ul").with_children(entries))
    }
}

impl Widget for NavigationBar {
    fn render(&self, theme: &ComponentTheme) -> String {
        let initial = self.brand.chars().next().map(|c| c.to_uppercase().to_string());

        let logo = Element::new("a")
            .with_attr("href", "/")
            .with_class("brand")
            .with_child(
                Element::new("span")
                    .with_class("brand-mark")
                    .with_style(
                        Style::new()
                            .with("background", brand_gradient("135deg"))
                            .with("border-radius", "50%")
                            .with("color", "white")
                            .with("font-weight", theme.typography.heading_weight.to_string()),
                    )
                    .with_text(initial.unwrap_or_default()),
            )
            .with_child(Element::new("span").with_text(&self.brand));

        let links = Element::new("div")
            .with_class("nav-links")
            .with_children(self.items.iter().map(|item| self.link(item, theme)));

        let toggle = Element::new("button")
            .with_class("drawer-toggle")
            .with_attr("aria-label", "open drawer")
            .with_attr("aria-expanded", self.drawer_open.to_string())
            .with_text(if self.drawer_open { "\u{2715}" } else { "\u{2630}" });

        Element::new("header")
            .with_class("navigation-bar")
            .with_style(
                Style::new()
                    .with("position", "fixed")
                    .with("background-color", alpha(&theme.palette.background_paper, 0.8))
                    .with("backdrop-filter", "blur(12px)")
                    .with("box-shadow", theme.components.paper.box_shadow.clone()),
            )
            .with_child(logo)
            .with_child(links)
            .with_child(toggle)
            .with_child_opt(self.drawer_open.then(|| self.drawer(theme)))
            .render()
    }
}
