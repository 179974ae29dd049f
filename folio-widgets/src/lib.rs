#![warn(missing_docs)]

//! Component library for folio => See `folio` crate.
//!
//! Every component renders to markup whose colors are `var(--color-*)` /
//! `var(--style-*)` references, so a theme switch restyles the page without
//! re-rendering. Component-level overrides (card shadow, heading weight) are
//! taken from the [ComponentTheme](folio_theme::engine::ComponentTheme).

use folio_theme::context::use_style_context;
use folio_theme::engine::ComponentTheme;

/// Contains the [markup::Element] builder and escaping helpers.
pub mod markup;

/// Contains the [typography::GradientText] element.
pub mod typography;

/// Contains the [project::Project] data model.
pub mod project;

/// Contains the [badge::TechBadge] widget.
pub mod badge;

/// Contains the [skill_meter::SkillMeter] widget.
pub mod skill_meter;

/// Contains the [card::ProjectCard] widget.
pub mod card;

/// Contains the [modal::Modal] overlay state.
pub mod modal;

/// Contains the [gallery::ProjectGallery] widget.
pub mod gallery;

/// Contains the [navigation::NavigationBar] widget.
pub mod navigation;

/// Contains the [entrance::EntranceTrigger] for reveal-on-scroll.
pub mod entrance;

/// Contains [media::Breakpoint] and responsive values.
pub mod media;

/// Contains the [background::BackgroundLoader] for the decorative scene.
pub mod background;

/// A component that renders itself to markup.
pub trait Widget {
    /// Render with an explicit component theme.
    fn render(&self, theme: &ComponentTheme) -> String;

    /// Render with the theme of the installed style provider.
    ///
    /// # Panics
    ///
    /// Panics when no provider is installed on this thread.
    fn render_in_context(&self) -> String {
        self.render(&use_style_context().component_theme())
    }
}
