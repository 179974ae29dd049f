//! # Style Context
//!
//! Descendants never hold the provider directly. The application installs it
//! once with [StyleProvider::provide] and any code running on the same thread
//! while the returned [ProviderScope] is alive reaches it through
//! [use_style_context].
//!
//! ```rust
//! use std::sync::Arc;
//! use folio_theme::context::{try_use_style_context, use_style_context};
//! use folio_theme::manager::StyleProvider;
//! use folio_theme::registry::ThemeRegistry;
//! use folio_theme::storage::MemoryStore;
//!
//! assert!(try_use_style_context().is_err());
//!
//! let provider = StyleProvider::new(Arc::new(ThemeRegistry::builtin()), MemoryStore::new(), None);
//! let _scope = provider.provide();
//!
//! let ctx = use_style_context();
//! ctx.switch_theme("cherry");
//! assert_eq!(ctx.active_identifier(), "cherry");
//! ```
//!
//! Scopes nest; the innermost live scope wins, and the
//! [globals](crate::globals) token board always shows its tokens. Reading the
//! context with no scope installed is a programmer error: [use_style_context]
//! panics and [try_use_style_context] returns [ThemeError::OutsideProvider].

use std::cell::{Cell, RefCell};
use std::marker::PhantomData;
use std::ops::Deref;

use crate::error::{ThemeError, ThemeResult};
use crate::globals;
use crate::manager::StyleProvider;

thread_local! {
    static SCOPES: RefCell<Vec<(usize, StyleProvider)>> = const { RefCell::new(Vec::new()) };
    static NEXT_SCOPE: Cell<usize> = const { Cell::new(0) };
}

/// Guard keeping a provider installed. Dropping it uninstalls the provider.
#[must_use = "the provider is uninstalled as soon as the scope is dropped"]
pub struct ProviderScope {
    id: usize,
    // Scopes are bound to the thread whose context they modify.
    _not_send: PhantomData<*const ()>,
}

impl Drop for ProviderScope {
    fn drop(&mut self) {
        let innermost = SCOPES.with(|scopes| {
            let mut scopes = scopes.borrow_mut();
            scopes.retain(|(id, _)| *id != self.id);
            scopes.last().map(|(_, provider)| provider.clone())
        });

        // The board always shows the innermost live provider.
        match innermost {
            Some(provider) => provider.publish(),
            None => globals::clear(),
        }
    }
}

impl StyleProvider {
    /// Install this provider as the style context of the current thread.
    pub fn provide(self) -> ProviderScope {
        let id = NEXT_SCOPE.with(|next| {
            let id = next.get();
            next.set(id + 1);
            id
        });
        self.publish();
        SCOPES.with(|scopes| scopes.borrow_mut().push((id, self)));
        log::trace!("Installed style provider scope {}", id);
        ProviderScope {
            id,
            _not_send: PhantomData,
        }
    }
}

/// Handle to the installed provider.
///
/// Derefs to [StyleProvider], so every provider operation is available.
#[derive(Clone)]
pub struct StyleContext {
    provider: StyleProvider,
}

impl StyleContext {
    /// The provider behind this handle.
    pub fn provider(&self) -> &StyleProvider {
        &self.provider
    }
}

impl Deref for StyleContext {
    type Target = StyleProvider;

    fn deref(&self) -> &Self::Target {
        &self.provider
    }
}

/// Whether `provider` may write the token board: it is the innermost
/// installed provider, or nothing is installed.
pub(crate) fn owns_board(provider: &StyleProvider) -> bool {
    SCOPES.with(|scopes| match scopes.borrow().last() {
        Some((_, innermost)) => innermost.same_provider(provider),
        None => true,
    })
}

/// Whether a provider is installed on this thread.
pub fn has_style_context() -> bool {
    SCOPES.with(|scopes| !scopes.borrow().is_empty())
}

/// Read the style context, failing with [ThemeError::OutsideProvider] when no
/// provider is installed.
pub fn try_use_style_context() -> ThemeResult<StyleContext> {
    SCOPES.with(|scopes| {
        scopes
            .borrow()
            .last()
            .map(|(_, provider)| StyleContext {
                provider: provider.clone(),
            })
            .ok_or(ThemeError::OutsideProvider)
    })
}

/// Read the style context.
///
/// # Panics
///
/// Panics when called outside a [ProviderScope].
pub fn use_style_context() -> StyleContext {
    match try_use_style_context() {
        Ok(ctx) => ctx,
        Err(err) => panic!("{}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::ThemeRegistry;
    use crate::storage::MemoryStore;
    use std::sync::Arc;

    fn provider(default: &str) -> StyleProvider {
        StyleProvider::new(Arc::new(ThemeRegistry::builtin()), MemoryStore::new(), Some(default))
    }

    #[test]
    fn test_outside_provider_is_error() {
        assert!(!has_style_context());
        assert!(matches!(try_use_style_context(), Err(ThemeError::OutsideProvider)));
    }

    #[test]
    #[should_panic(expected = "use_style_context must be used within StyleProvider")]
    fn test_outside_provider_panics() {
        let _ = use_style_context();
    }

    #[test]
    fn test_scope_drop_uninstalls() {
        {
            let _scope = provider("ocean").provide();
            assert_eq!(use_style_context().active_identifier(), "ocean");
        }
        assert!(try_use_style_context().is_err());
    }

    #[test]
    fn test_nested_scopes() {
        let _outer = provider("ocean").provide();
        {
            let _inner = provider("forest").provide();
            assert_eq!(use_style_context().active_identifier(), "forest");
        }
        assert_eq!(use_style_context().active_identifier(), "ocean");
    }

    #[test]
    fn test_board_follows_innermost_scope() {
        let _outer = provider("ocean").provide();
        assert_eq!(globals::active_theme().unwrap(), "ocean");
        {
            let inner = provider("forest");
            let _inner = inner.clone().provide();
            assert_eq!(globals::lookup("color-primary").as_deref(), Some("#10B981"));
            inner.switch_theme("cherry");
            assert_eq!(globals::active_theme().unwrap(), "cherry");
        }
        assert_eq!(use_style_context().active_identifier(), "ocean");
        assert_eq!(globals::active_theme().unwrap(), "ocean");
        assert_eq!(globals::lookup("color-primary").as_deref(), Some("#0EA5E9"));
    }

    #[test]
    fn test_outer_and_unprovided_providers_leave_board_alone() {
        let outer = provider("ocean");
        let _outer = outer.clone().provide();
        let _inner = provider("forest").provide();

        assert!(outer.switch_theme("dark"));
        assert_eq!(globals::active_theme().unwrap(), "forest");

        let detached = provider("neon");
        assert!(detached.switch_theme("matrix"));
        assert_eq!(globals::active_theme().unwrap(), "forest");
        assert_eq!(use_style_context().active_identifier(), "forest");
    }

    #[test]
    fn test_last_scope_drop_clears_board() {
        {
            let _scope = provider("ocean").provide();
            assert_eq!(globals::active_theme().unwrap(), "ocean");
        }
        assert!(globals::active_theme().is_none());
        assert!(globals::snapshot().is_empty());
    }

    #[test]
    fn test_context_shares_provider_state() {
        let provider = provider("ocean");
        let _scope = provider.clone().provide();
        use_style_context().cycle_theme();
        assert_eq!(provider.active_identifier(), "dark");
    }
}
