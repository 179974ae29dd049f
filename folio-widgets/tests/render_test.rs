use folio_theme::manager::StyleProvider;
use folio_theme::registry::ThemeRegistry;
use folio_theme::storage::MemoryStore;
use folio_theme::theme::builtin;
use folio_widgets::card::ProjectCard;
use folio_widgets::gallery::ProjectGallery;
use folio_widgets::project::Project;
use folio_widgets::skill_meter::SkillMeter;
use folio_widgets::Widget;
use std::sync::Arc;

const PROJECTS: &str = r#"[
    {
        "id": "shop",
        "title": "E-Commerce Platform",
        "description": "A full-stack e-commerce solution",
        "stars": 120,
        "language": "TypeScript",
        "liveUrl": "https://shop.example.com",
        "technologies": ["React", "Node.js"],
        "achievements": ["Increased conversion rate by 35%"]
    },
    {
        "id": "engine",
        "title": "Render Engine",
        "description": "GPU renderer",
        "stars": 310,
        "forks": 12,
        "language": "Rust",
        "githubUrl": "https://github.com/example/engine"
    },
    {
        "id": "notes",
        "title": "Notes",
        "description": "Personal notes"
    }
]"#;

fn projects() -> Vec<Project> {
    serde_json::from_str(PROJECTS).unwrap()
}

#[test]
fn test_projects_load_from_json() {
    let projects = projects();
    assert_eq!(projects.len(), 3);
    assert_eq!(projects[0].live_url.as_deref(), Some("https://shop.example.com"));
    assert_eq!(projects[1].github_url.as_deref(), Some("https://github.com/example/engine"));
    assert_eq!(projects[2].stars, 0);
    assert!(projects[2].language.is_none());
}

#[test]
fn test_gallery_from_json() {
    let mut gallery = ProjectGallery::new(projects());
    assert_eq!(gallery.projects()[0].id, "engine");
    assert_eq!(gallery.filters(), vec!["all", "Rust", "TypeScript"]);

    gallery.open_detail("engine");
    let html = gallery.render(&folio_theme::engine::ComponentTheme::from_record(&builtin::purple()));
    assert!(html.contains(r#"href="https://github.com/example/engine""#));
    assert!(html.contains("3 featured projects"));
}

#[test]
fn test_render_in_context_follows_switch() {
    let provider = StyleProvider::new(
        Arc::new(ThemeRegistry::builtin()),
        MemoryStore::new(),
        Some("purple"),
    );
    let _scope = provider.clone().provide();

    let card = ProjectCard::new(projects().remove(0));
    let before = card.render_in_context();
    assert!(before.contains(&builtin::purple().styles.shadow));

    assert!(provider.switch_theme("ocean"));
    let after = card.render_in_context();
    assert!(after.contains(&builtin::ocean().styles.shadow));
    assert!(!after.contains(&builtin::purple().styles.shadow));
}

#[test]
fn test_markup_uses_token_references() {
    let html = SkillMeter::new("Rust", 95).render(&folio_theme::engine::ComponentTheme::from_record(
        &builtin::matrix(),
    ));
    assert!(html.contains("var(--color-primary)"));
    assert!(html.contains("var(--color-textSecondary)"));
    assert!(!html.contains("#00FF41"));
}

#[test]
#[should_panic(expected = "use_style_context must be used within StyleProvider")]
fn test_render_in_context_outside_provider() {
    SkillMeter::new("Rust", 50).render_in_context();
}
