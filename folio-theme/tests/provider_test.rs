use folio_theme::context::{try_use_style_context, use_style_context};
use folio_theme::error::ThemeError;
use folio_theme::globals;
use folio_theme::manager::StyleProvider;
use folio_theme::registry::ThemeRegistry;
use folio_theme::storage::{MemoryStore, PreferenceStore, PREFERENCE_KEY};
use folio_theme::theme::{builtin, ColorKey, StyleKey};
use std::sync::Arc;

fn abc_registry() -> Arc<ThemeRegistry> {
    Arc::new(
        ThemeRegistry::builder()
            .with_theme("A", builtin::dark())
            .with_theme("B", builtin::light())
            .with_theme("C", builtin::neon())
            .build()
            .unwrap(),
    )
}

#[test]
fn test_every_theme_resolves_fully() {
    let registry = ThemeRegistry::builtin();
    for id in registry.identifiers() {
        let record = registry.resolve(id.as_str()).unwrap();
        for key in ColorKey::ALL {
            assert!(!record.colors.get(key).is_empty(), "{id}: {key} empty");
        }
        for key in StyleKey::ALL {
            assert!(!record.styles.get(key).is_empty(), "{id}: {key} empty");
        }
    }
}

#[test]
fn test_abc_scenario() {
    let store = MemoryStore::new();
    let provider = StyleProvider::new(abc_registry(), store.clone(), Some("B"));
    let _scope = provider.provide();
    let ctx = use_style_context();

    assert_eq!(ctx.active_identifier(), "B");
    ctx.cycle_theme();
    assert_eq!(ctx.active_identifier(), "C");
    ctx.cycle_theme();
    assert_eq!(ctx.active_identifier(), "A");
    assert!(!ctx.switch_theme("Z"));
    assert_eq!(ctx.active_identifier(), "A");
    assert_eq!(store.get(PREFERENCE_KEY).as_deref(), Some("A"));
}

#[test]
fn test_switch_valid_and_invalid() {
    let store = MemoryStore::new();
    let provider = StyleProvider::new(Arc::new(ThemeRegistry::builtin()), store.clone(), None);

    assert!(provider.switch_theme("forest"));
    assert_eq!(provider.active_identifier(), "forest");
    assert_eq!(store.get(PREFERENCE_KEY).as_deref(), Some("forest"));

    assert!(!provider.switch_theme("Forest"));
    assert_eq!(provider.active_identifier(), "forest");
    assert_eq!(store.get(PREFERENCE_KEY).as_deref(), Some("forest"));
}

#[test]
fn test_cycle_returns_to_start() {
    let registry = Arc::new(ThemeRegistry::builtin());
    let provider = StyleProvider::new(registry.clone(), MemoryStore::new(), Some("royal"));
    for _ in 0..registry.len() {
        provider.cycle_theme();
    }
    assert_eq!(provider.active_identifier(), "royal");
}

#[test]
fn test_initialization_rules() {
    let registry = Arc::new(ThemeRegistry::builtin());

    let stale = MemoryStore::with_value(PREFERENCE_KEY, "vaporwave");
    let provider = StyleProvider::new(registry.clone(), stale, Some("ocean"));
    assert_eq!(provider.active_identifier(), "ocean");

    let stale = MemoryStore::with_value(PREFERENCE_KEY, "vaporwave");
    let provider = StyleProvider::new(registry.clone(), stale, None);
    assert_eq!(provider.active_identifier(), "purple");

    let persisted = MemoryStore::with_value(PREFERENCE_KEY, "cherry");
    let provider = StyleProvider::new(registry, persisted, Some("ocean"));
    assert_eq!(provider.active_identifier(), "cherry");
}

#[test]
fn test_reads_outside_provider_fail() {
    assert!(matches!(try_use_style_context(), Err(ThemeError::OutsideProvider)));
    let outcome = std::panic::catch_unwind(|| {
        use_style_context();
    });
    assert!(outcome.is_err());
}

#[test]
fn test_tokens_follow_switches() {
    let provider = StyleProvider::new(Arc::new(ThemeRegistry::builtin()), MemoryStore::new(), Some("dark"));
    assert_eq!(globals::lookup("color-background"), None);

    let _scope = provider.clone().provide();
    assert_eq!(globals::lookup("color-background").as_deref(), Some("#0F172A"));

    provider.switch_theme("light");
    assert_eq!(globals::active_theme().unwrap(), "light");
    assert_eq!(globals::lookup("color-background").as_deref(), Some("#F8FAFC"));
    assert_eq!(globals::lookup("style-headingWeight").as_deref(), Some("600"));
    assert_eq!(globals::snapshot(), provider.variables());
}

#[test]
fn test_reload_restores_selection() {
    let registry = Arc::new(ThemeRegistry::builtin());
    let store = MemoryStore::new();

    let first = StyleProvider::new(registry.clone(), store.clone(), None);
    first.switch_theme("matrix");
    drop(first);

    let second = StyleProvider::new(registry, store, Some("ocean"));
    assert_eq!(second.active_identifier(), "matrix");
}
