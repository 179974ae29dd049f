//! Minimal HTML builder used by the widgets.
//!
//! ```rust
//! use folio_widgets::markup::{Element, Style};
//!
//! let html = Element::new("span")
//!     .with_class("badge")
//!     .with_style(Style::new().with("color", "var(--color-primary)"))
//!     .with_text("Rust & Go")
//!     .render();
//! assert_eq!(
//!     html,
//!     r#"<span class="badge" style="color: var(--color-primary)">Rust &amp; Go</span>"#
//! );
//! ```

use folio_theme::properties::{color_token_name, style_token_name, ThemeVariables};
use folio_theme::theme::{ColorKey, StyleKey};
use std::fmt::Write;

/// Escape text for use in HTML content and attribute values.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// `var(--color-<key>)`.
pub fn color_var(key: ColorKey) -> String {
    ThemeVariables::var_ref(&color_token_name(key))
}

/// `var(--style-<key>)`.
pub fn style_var(key: StyleKey) -> String {
    ThemeVariables::var_ref(&style_token_name(key))
}

/// Gradient from primary to secondary, used for highlights.
pub fn brand_gradient(angle: &str) -> String {
    format!(
        "linear-gradient({}, {}, {})",
        angle,
        color_var(ColorKey::Primary),
        color_var(ColorKey::Secondary)
    )
}

/// Ordered inline style declarations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    declarations: Vec<(String, String)>,
}

impl Style {
    /// Empty declaration list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a declaration and return itself.
    pub fn with(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(property, value);
        self
    }

    /// Append a declaration when `condition` holds.
    pub fn with_if(self, condition: bool, property: impl Into<String>, value: impl Into<String>) -> Self {
        if condition {
            self.with(property, value)
        } else {
            self
        }
    }

    /// Set a declaration, replacing an earlier value of the same property.
    pub fn set(&mut self, property: impl Into<String>, value: impl Into<String>) {
        let property = property.into();
        let value = value.into();
        match self.declarations.iter_mut().find(|(p, _)| *p == property) {
            Some((_, existing)) => *existing = value,
            None => self.declarations.push((property, value)),
        }
    }

    /// Value of a property.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }

    /// Whether there are no declarations.
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// `prop: value; prop: value`.
    pub fn to_inline(&self) -> String {
        self.declarations
            .iter()
            .map(|(p, v)| format!("{}: {}", p, v))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Node {
    Text(String),
    Raw(String),
    Element(Element),
}

/// An HTML element with attributes, inline style and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: &'static str,
    classes: Vec<String>,
    attributes: Vec<(String, String)>,
    style: Style,
    children: Vec<Node>,
}

impl Element {
    /// Create an element.
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            classes: Vec::new(),
            attributes: Vec::new(),
            style: Style::new(),
            children: Vec::new(),
        }
    }

    /// Add a class and return itself.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Add an attribute and return itself.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Set the inline style and return itself.
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Append escaped text and return itself.
    pub fn with_text(mut self, text: impl AsRef<str>) -> Self {
        self.children.push(Node::Text(text.as_ref().to_string()));
        self
    }

    /// Append pre-rendered markup and return itself.
    pub fn with_raw(mut self, markup: impl Into<String>) -> Self {
        self.children.push(Node::Raw(markup.into()));
        self
    }

    /// Append a child element and return itself.
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    /// Append a child element when present.
    pub fn with_child_opt(self, child: Option<Element>) -> Self {
        match child {
            Some(child) => self.with_child(child),
            None => self,
        }
    }

    /// Append every child element.
    pub fn with_children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children
            .extend(children.into_iter().map(Node::Element));
        self
    }

    /// The inline style.
    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Render to an HTML string.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }

    fn render_into(&self, out: &mut String) {
        let _ = write!(out, "<{}", self.tag);
        if !self.classes.is_empty() {
            let _ = write!(out, " class=\"{}\"", escape(&self.classes.join(" ")));
        }
        for (name, value) in &self.attributes {
            let _ = write!(out, " {}=\"{}\"", name, escape(value));
        }
        if !self.style.is_empty() {
            let _ = write!(out, " style=\"{}\"", escape(&self.style.to_inline()));
        }
        out.push('>');

        for child in &self.children {
            match child {
                Node::Text(text) => out.push_str(&escape(text)),
                Node::Raw(markup) => out.push_str(markup),
                Node::Element(element) => element.render_into(out),
            }
        }

        let _ = write!(out, "</{}>", self.tag);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape(r#"<a href="x">'&'</a>"#), "&lt;a href=&quot;x&quot;&gt;&#39;&amp;&#39;&lt;/a&gt;");
    }

    #[test]
    fn test_style_replaces_property() {
        let mut style = Style::new().with("color", "red").with("border", "none");
        style.set("color", "blue");
        assert_eq!(style.to_inline(), "color: blue; border: none");
        assert_eq!(style.get("border"), Some("none"));
    }

    #[test]
    fn test_nested_render() {
        let html = Element::new("ul")
            .with_children(["a", "b"].iter().map(|t| Element::new("li").with_text(t)))
            .with_attr("aria-label", "list")
            .render();
        assert_eq!(html, r#"<ul aria-label="list"><li>a</li><li>b</li></ul>"#);
    }

    #[test]
    fn test_token_refs() {
        assert_eq!(color_var(ColorKey::TextSecondary), "var(--color-textSecondary)");
        assert_eq!(style_var(StyleKey::CardBorder), "var(--style-cardBorder)");
    }
}
