use folio_theme::config::ThemeConfig;
use folio_theme::context::ProviderScope;
use folio_theme::manager::StyleProvider;
use folio_theme::storage::PreferenceStore;
use folio_widgets::markup::escape;
use folio_widgets::Widget;
use std::fmt::Write;

/// A running site: an installed style provider plus page rendering.
///
/// The provider stays installed on the current thread for as long as the app
/// lives, so widgets can use [Widget::render_in_context].
pub struct FolioApp {
    provider: StyleProvider,
    _scope: ProviderScope,
}

impl FolioApp {
    /// Build the provider described by `config` and install it.
    pub fn new(config: &ThemeConfig, store: impl PreferenceStore + 'static) -> anyhow::Result<Self> {
        let provider = config.build_provider(store)?;
        Ok(Self::with_provider(provider))
    }

    /// Install an existing provider.
    pub fn with_provider(provider: StyleProvider) -> Self {
        log::debug!("Starting with theme '{}'", provider.active_identifier());
        let scope = provider.clone().provide();
        Self {
            provider,
            _scope: scope,
        }
    }

    /// Load settings from the standard locations and persist the selection
    /// to the user's preference file.
    #[cfg(feature = "services")]
    pub fn launch() -> anyhow::Result<Self> {
        let settings = smol::block_on(folio_services::SettingsRegistry::new())?;
        Ok(Self::with_provider(settings.open_provider()?))
    }

    /// The installed provider.
    pub fn provider(&self) -> &StyleProvider {
        &self.provider
    }

    /// Token custom properties followed by the component rules of the
    /// active theme.
    pub fn stylesheet(&self) -> String {
        let mut css = self.provider.variables().to_css_root();
        css.push('\n');
        css.push_str(&self.provider.component_theme().to_css());
        css
    }

    /// Render a full document with the stylesheet inlined.
    pub fn render_page(&self, title: &str, body: &[&dyn Widget]) -> String {
        let theme = self.provider.component_theme();
        let mut html = String::from("<!DOCTYPE html>\n");
        let _ = write!(
            html,
            "<html data-theme=\"{}\"><head><meta charset=\"utf-8\"><title>{}</title><style>\n{}\n</style></head><body>",
            escape(self.provider.active_identifier().as_str()),
            escape(title),
            self.stylesheet()
        );
        for widget in body {
            html.push_str(&widget.render(&theme));
        }
        html.push_str("</body></html>");
        html
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_theme::context::{has_style_context, use_style_context};
    use folio_theme::storage::MemoryStore;
    use folio_widgets::skill_meter::SkillMeter;

    #[test]
    fn test_app_installs_provider() {
        assert!(!has_style_context());
        {
            let config = ThemeConfig::new().with_default_theme("neon");
            let app = FolioApp::new(&config, MemoryStore::new()).unwrap();
            assert_eq!(use_style_context().active_identifier(), "neon");
            assert!(app.provider().switch_theme("cherry"));
            assert_eq!(use_style_context().active_identifier(), "cherry");
        }
        assert!(!has_style_context());
    }

    #[test]
    fn test_stylesheet_follows_switch() {
        let app = FolioApp::new(&ThemeConfig::new(), MemoryStore::new()).unwrap();
        assert!(app.stylesheet().contains("--color-primary: #9333EA;"));

        app.provider().switch_theme("ocean");
        let css = app.stylesheet();
        assert!(css.contains("--color-primary: #0EA5E9;"));
        assert!(css.contains(".card {"));
    }

    #[test]
    fn test_render_page() {
        let app = FolioApp::new(&ThemeConfig::new().with_default_theme("forest"), MemoryStore::new()).unwrap();
        let meter = SkillMeter::new("Rust", 90);
        let html = app.render_page("Me & my work", &[&meter]);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<html data-theme="forest">"#));
        assert!(html.contains("<title>Me &amp; my work</title>"));
        assert!(html.contains(r#"aria-valuenow="90""#));
    }
}
