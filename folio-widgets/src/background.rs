use std::fmt::Display;

use folio_theme::engine::ComponentTheme;

use crate::markup::{Element, Style};
use crate::Widget;

/// Gradient shown until the decorative scene is ready, and instead of it when
/// it could not be set up.
pub const PLACEHOLDER_GRADIENT: &str =
    "linear-gradient(to bottom right, rgba(59, 130, 246, 0.2), rgba(168, 85, 247, 0.2))";

/// Lifecycle of the decorative background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackgroundState {
    /// Not loaded yet; the placeholder is shown.
    #[default]
    Placeholder,
    /// The scene initialized.
    Ready,
    /// Initialization failed; the placeholder stays.
    Disabled,
}

/// Loads the decorative background scene at most once.
///
/// A failed initialization is logged and the page keeps the placeholder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BackgroundLoader {
    state: BackgroundState,
}

impl BackgroundLoader {
    /// A loader showing the placeholder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn state(&self) -> BackgroundState {
        self.state
    }

    /// Whether the scene is shown.
    pub fn is_ready(&self) -> bool {
        self.state == BackgroundState::Ready
    }

    /// Run `init` if nothing was attempted yet and return the new state.
    pub fn load<E: Display>(&mut self, init: impl FnOnce() -> Result<(), E>) -> BackgroundState {
        if self.state != BackgroundState::Placeholder {
            return self.state;
        }

        self.state = match init() {
            Ok(()) => {
                log::debug!("Decorative background ready");
                BackgroundState::Ready
            },
            Err(e) => {
                log::warn!("Decorative background disabled: {}", e);
                BackgroundState::Disabled
            },
        };
        self.state
    }
}

impl Widget for BackgroundLoader {
    fn render(&self, _theme: &ComponentTheme) -> String {
        let ready = self.is_ready();
        let style = Style::new()
            .with("position", "absolute")
            .with("inset", "0")
            .with("pointer-events", "none")
            .with_if(!ready, "background", PLACEHOLDER_GRADIENT);

        Element::new("div")
            .with_class(if ready { "background-scene" } else { "background-placeholder" })
            .with_attr("aria-hidden", "true")
            .with_style(style)
            .render()
    }
}
