//! # Style Context Provider
//!
//! [StyleProvider] owns the single piece of session state, the active theme
//! identifier. It rehydrates the selection from a [PreferenceStore], persists
//! every change and notifies listeners. The innermost installed provider (or
//! a provider used with no scope installed) also publishes its tokens to the
//! [globals](crate::globals) board.
//!
//! ## Initial Selection
//!
//! Resolved once, at construction, with a single storage read:
//!
//! 1. the persisted preference, if it names a registered theme;
//! 2. the caller-supplied default, if it names a registered theme;
//! 3. [FALLBACK_THEME], if registered;
//! 4. the registry's first theme.
//!
//! ## Transitions
//!
//! ```rust
//! use std::sync::Arc;
//! use folio_theme::manager::StyleProvider;
//! use folio_theme::registry::ThemeRegistry;
//! use folio_theme::storage::{MemoryStore, PreferenceStore, PREFERENCE_KEY};
//!
//! let store = MemoryStore::new();
//! let provider = StyleProvider::new(Arc::new(ThemeRegistry::builtin()), store.clone(), Some("ocean"));
//! assert_eq!(provider.active_identifier(), "ocean");
//!
//! assert!(provider.switch_theme("neon"));
//! assert_eq!(store.get(PREFERENCE_KEY).as_deref(), Some("neon"));
//!
//! // Unknown identifiers are ignored.
//! assert!(!provider.switch_theme("plaid"));
//! assert_eq!(provider.active_identifier(), "neon");
//!
//! provider.cycle_theme();
//! assert_eq!(provider.active_identifier(), "sunset");
//! ```
//!
//! Handles are cheap clones sharing one state, in the manner of a signal.
//! The provider is bound to the UI thread that created it.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::Arc;

use crate::context;
use crate::engine::ComponentTheme;
use crate::globals;
use crate::id::ThemeId;
use crate::properties::ThemeVariables;
use crate::registry::ThemeRegistry;
use crate::storage::{PreferenceStore, PREFERENCE_KEY};
use crate::theme::{ThemeRecord, FALLBACK_THEME};

/// Callback run after every successful theme change.
pub type Listener = dyn Fn(&ThemeId, &ThemeRecord);

/// Handle returned by [StyleProvider::listen], used to unregister.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(usize);

struct ProviderState {
    registry: Arc<ThemeRegistry>,
    storage_key: String,
    store: RefCell<Box<dyn PreferenceStore>>,
    active: RefCell<ThemeId>,
    variables: RefCell<ThemeVariables>,
    listeners: RefCell<Vec<(ListenerId, Rc<Listener>)>>,
    next_listener: Cell<usize>,
}

/// Single source of truth for the active theme.
#[derive(Clone)]
pub struct StyleProvider {
    state: Rc<ProviderState>,
}

impl StyleProvider {
    /// Create a provider persisting under [PREFERENCE_KEY].
    ///
    /// `default` is the caller-supplied default used when nothing valid is
    /// persisted.
    pub fn new(
        registry: Arc<ThemeRegistry>,
        store: impl PreferenceStore + 'static,
        default: Option<&str>,
    ) -> Self {
        Self::with_storage_key(registry, store, default, PREFERENCE_KEY)
    }

    /// Create a provider persisting under a custom key.
    pub fn with_storage_key(
        registry: Arc<ThemeRegistry>,
        store: impl PreferenceStore + 'static,
        default: Option<&str>,
        storage_key: impl Into<String>,
    ) -> Self {
        let storage_key = storage_key.into();
        let active = initial_selection(&registry, &store, &storage_key, default);
        let variables = ThemeVariables::from_record(resolve_active(&registry, &active));

        Self {
            state: Rc::new(ProviderState {
                registry,
                storage_key,
                store: RefCell::new(Box::new(store)),
                active: RefCell::new(active),
                variables: RefCell::new(variables),
                listeners: RefCell::new(Vec::new()),
                next_listener: Cell::new(0),
            }),
        }
    }

    /// The active theme identifier. Always a registered identifier.
    pub fn active_identifier(&self) -> ThemeId {
        self.state.active.borrow().clone()
    }

    /// The resolved record of the active theme.
    pub fn theme(&self) -> &ThemeRecord {
        let active = self.state.active.borrow();
        resolve_active(&self.state.registry, &active)
    }

    /// Ordered list of every registered identifier.
    pub fn identifiers(&self) -> Vec<ThemeId> {
        self.state.registry.identifiers()
    }

    /// The shared registry.
    pub fn registry(&self) -> &Arc<ThemeRegistry> {
        &self.state.registry
    }

    /// All twelve tokens of the active theme.
    pub fn variables(&self) -> ThemeVariables {
        self.state.variables.borrow().clone()
    }

    /// Flattened `color-*` tokens of the active theme.
    pub fn color_tokens(&self) -> ThemeVariables {
        ThemeVariables::colors(self.theme())
    }

    /// Flattened `style-*` tokens of the active theme.
    pub fn style_tokens(&self) -> ThemeVariables {
        ThemeVariables::styles(self.theme())
    }

    /// Component-level theme derived from the active record.
    pub fn component_theme(&self) -> ComponentTheme {
        ComponentTheme::from_record(self.theme())
    }

    /// Make `id` the active theme and persist it.
    ///
    /// Returns `false` and changes nothing when `id` is not registered.
    /// A persistence failure is logged; the in-memory switch still happens.
    pub fn switch_theme(&self, id: &str) -> bool {
        let Some(record) = self.state.registry.resolve(id) else {
            log::debug!("Ignoring switch to unknown theme '{}'", id);
            return false;
        };
        let new_id = ThemeId::new(id);

        let variables = ThemeVariables::from_record(record);
        *self.state.active.borrow_mut() = new_id.clone();
        *self.state.variables.borrow_mut() = variables.clone();

        if let Err(err) = self
            .state
            .store
            .borrow_mut()
            .set(&self.state.storage_key, new_id.as_str())
        {
            log::warn!("Failed to persist theme '{}': {}", new_id, err);
        }

        if context::owns_board(self) {
            globals::publish(&new_id, &variables);
        }
        log::debug!("Switched theme to '{}'", new_id);

        // Snapshot so listeners may register or switch themes themselves.
        let listeners: Vec<Rc<Listener>> = self
            .state
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        for listener in listeners {
            listener(&new_id, record);
        }

        true
    }

    /// Advance to the next theme in registry order, wrapping after the last.
    pub fn cycle_theme(&self) {
        let active = self.active_identifier();
        match self.state.registry.successor(active.as_str()) {
            Some(next) => {
                let next = next.clone();
                self.switch_theme(next.as_str());
            },
            None => log::debug!("Active theme '{}' not in registry, not cycling", active),
        }
    }

    /// Register a callback run after every successful switch.
    pub fn listen(&self, listener: impl Fn(&ThemeId, &ThemeRecord) + 'static) -> ListenerId {
        let id = ListenerId(self.state.next_listener.get());
        self.state.next_listener.set(id.0 + 1);
        self.state
            .listeners
            .borrow_mut()
            .push((id, Rc::new(listener)));
        id
    }

    /// Remove a callback. Returns whether it was registered.
    pub fn unlisten(&self, id: ListenerId) -> bool {
        let mut listeners = self.state.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(listener_id, _)| *listener_id != id);
        listeners.len() != before
    }

    /// Overwrite the token board with this provider's tokens.
    pub(crate) fn publish(&self) {
        globals::publish(&self.state.active.borrow(), &self.state.variables.borrow());
    }

    /// Whether both handles share one provider state.
    pub(crate) fn same_provider(&self, other: &StyleProvider) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

fn initial_selection(
    registry: &ThemeRegistry,
    store: &dyn PreferenceStore,
    key: &str,
    default: Option<&str>,
) -> ThemeId {
    if let Some(stored) = store.get(key) {
        if registry.contains(&stored) {
            log::debug!("Using persisted theme '{}'", stored);
            return ThemeId::new(stored);
        }
        log::debug!("Discarding stale persisted theme '{}'", stored);
    }

    if let Some(default) = default {
        if registry.contains(default) {
            log::debug!("Using default theme '{}'", default);
            return ThemeId::new(default);
        }
        log::debug!("Default theme '{}' is not registered", default);
    }

    if registry.contains(FALLBACK_THEME) {
        log::debug!("Using fallback theme '{}'", FALLBACK_THEME);
        return ThemeId::new(FALLBACK_THEME);
    }

    let first = registry.first().clone();
    log::debug!("Using first registered theme '{}'", first);
    first
}

fn resolve_active<'a>(registry: &'a ThemeRegistry, active: &ThemeId) -> &'a ThemeRecord {
    // The active identifier only ever holds registered ids.
    registry.resolve_or_first(active.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ThemeError, ThemeResult};
    use crate::storage::MemoryStore;
    use crate::theme::builtin;

    fn abc() -> Arc<ThemeRegistry> {
        Arc::new(
            ThemeRegistry::new([
                ("A", builtin::dark()),
                ("B", builtin::light()),
                ("C", builtin::neon()),
            ])
            .unwrap(),
        )
    }

    struct FailingStore;

    impl PreferenceStore for FailingStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&mut self, _key: &str, _value: &str) -> ThemeResult<()> {
            Err(ThemeError::Io(std::io::Error::other("read-only")))
        }
    }

    #[test]
    fn test_scenario_default_cycle_wrap_unknown() {
        let provider = StyleProvider::new(abc(), MemoryStore::new(), Some("B"));
        assert_eq!(provider.active_identifier(), "B");
        provider.cycle_theme();
        assert_eq!(provider.active_identifier(), "C");
        provider.cycle_theme();
        assert_eq!(provider.active_identifier(), "A");
        assert!(!provider.switch_theme("Z"));
        assert_eq!(provider.active_identifier(), "A");
    }

    #[test]
    fn test_persisted_overrides_default() {
        let store = MemoryStore::with_value(PREFERENCE_KEY, "C");
        let provider = StyleProvider::new(abc(), store, Some("B"));
        assert_eq!(provider.active_identifier(), "C");
    }

    #[test]
    fn test_stale_persisted_uses_default() {
        let store = MemoryStore::with_value(PREFERENCE_KEY, "invalid-theme");
        let provider = StyleProvider::new(abc(), store, Some("B"));
        assert_eq!(provider.active_identifier(), "B");
    }

    #[test]
    fn test_fallback_chain_without_default() {
        let store = MemoryStore::with_value(PREFERENCE_KEY, "invalid-theme");
        let builtin = StyleProvider::new(Arc::new(ThemeRegistry::builtin()), store, None);
        assert_eq!(builtin.active_identifier(), FALLBACK_THEME);

        // A custom registry without the fallback id starts on its first theme.
        let custom = StyleProvider::new(abc(), MemoryStore::new(), Some("purple"));
        assert_eq!(custom.active_identifier(), "A");
    }

    #[test]
    fn test_switch_persists_and_unknown_does_not() {
        let store = MemoryStore::new();
        let provider = StyleProvider::new(abc(), store.clone(), None);
        assert_eq!(store.get(PREFERENCE_KEY), None);

        assert!(provider.switch_theme("B"));
        assert_eq!(store.get(PREFERENCE_KEY).as_deref(), Some("B"));

        assert!(!provider.switch_theme("b"));
        assert_eq!(provider.active_identifier(), "B");
        assert_eq!(store.get(PREFERENCE_KEY).as_deref(), Some("B"));
    }

    #[test]
    fn test_full_cycle_returns_to_start() {
        let provider = StyleProvider::new(Arc::new(ThemeRegistry::builtin()), MemoryStore::new(), Some("ocean"));
        let start = provider.active_identifier();
        let mut seen = std::collections::HashSet::new();
        for _ in 0..provider.identifiers().len() {
            provider.cycle_theme();
            seen.insert(provider.active_identifier());
        }
        assert_eq!(provider.active_identifier(), start);
        assert_eq!(seen.len(), provider.identifiers().len());
    }

    #[test]
    fn test_derived_views_follow_switch() {
        let provider = StyleProvider::new(abc(), MemoryStore::new(), Some("A"));
        assert_eq!(provider.theme().name, "Dark");
        assert_eq!(provider.color_tokens().get("color-primary"), Some("#3B82F6"));

        provider.switch_theme("C");
        assert_eq!(provider.theme().name, "Neon");
        assert_eq!(provider.variables().get("color-primary"), Some("#FF00FF"));
        assert_eq!(provider.style_tokens().get("style-headingWeight"), Some("800"));
        assert_eq!(globals::lookup("color-primary").as_deref(), Some("#FF00FF"));
        assert_eq!(globals::active_theme().unwrap(), "C");
    }

    #[test]
    fn test_listeners_run_after_switch() {
        let provider = StyleProvider::new(abc(), MemoryStore::new(), Some("A"));
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let id = provider.listen(move |theme, record| {
            sink.borrow_mut().push((theme.to_string(), record.name.clone()));
        });

        provider.switch_theme("B");
        provider.switch_theme("nope");
        assert!(provider.unlisten(id));
        provider.switch_theme("C");

        assert_eq!(*seen.borrow(), vec![("B".to_string(), "Light".to_string())]);
        assert!(!provider.unlisten(id));
    }

    #[test]
    fn test_persist_failure_still_switches() {
        let provider = StyleProvider::new(abc(), FailingStore, Some("A"));
        assert!(provider.switch_theme("C"));
        assert_eq!(provider.active_identifier(), "C");
    }

    #[test]
    fn test_custom_storage_key() {
        let store = MemoryStore::with_value("site-theme", "B");
        let provider = StyleProvider::with_storage_key(abc(), store.clone(), None, "site-theme");
        assert_eq!(provider.active_identifier(), "B");
        provider.cycle_theme();
        assert_eq!(store.get("site-theme").as_deref(), Some("C"));
        assert_eq!(store.get(PREFERENCE_KEY), None);
    }
}
