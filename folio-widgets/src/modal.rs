use folio_theme::color::alpha;
use folio_theme::theme::ColorKey;

use crate::markup::{color_var, Element, Style};

/// Overlay state: closed, or open showing one value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Modal<T> {
    content: Option<T>,
}

impl<T> Modal<T> {
    /// A closed modal.
    pub fn new() -> Self {
        Self { content: None }
    }

    /// Open on `content`, replacing whatever was shown.
    pub fn open(&mut self, content: T) {
        self.content = Some(content);
    }

    /// Close, returning what was shown.
    pub fn close(&mut self) -> Option<T> {
        self.content.take()
    }

    /// Whether the modal is open.
    pub fn is_open(&self) -> bool {
        self.content.is_some()
    }

    /// What is shown, if open.
    pub fn content(&self) -> Option<&T> {
        self.content.as_ref()
    }

    /// Render the overlay around `body`, or nothing when closed.
    pub fn render_with(&self, body: impl FnOnce(&T) -> Element) -> Option<String> {
        let content = self.content.as_ref()?;

        let close = Element::new("button")
            .with_class("modal-close")
            .with_attr("aria-label", "close")
            .with_text("\u{00D7}");

        let dialog = Element::new("div")
            .with_attr("role", "dialog")
            .with_attr("aria-modal", "true")
            .with_style(
                Style::new()
                    .with("background-color", color_var(ColorKey::Surface))
                    .with("color", color_var(ColorKey::Text))
                    .with("border-radius", "16px")
                    .with("max-width", "48rem")
                    .with("width", "100%"),
            )
            .with_child(close)
            .with_child(body(content));

        Some(
            Element::new("div")
                .with_class("modal-backdrop")
                .with_style(
                    Style::new()
                        .with("position", "fixed")
                        .with("inset", "0")
                        .with("display", "flex")
                        .with("align-items", "center")
                        .with("justify-content", "center")
                        .with("background-color", alpha("#000000", 0.8))
                        .with("backdrop-filter", "blur(8px)")
                        .with("z-index", "50"),
                )
                .with_child(dialog)
                .render(),
        )
    }
}

impl<T> Default for Modal<T> {
    fn default() -> Self {
        Self::new()
    }
}
