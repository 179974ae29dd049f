//! # Published Theme Tokens
//!
//! The token board makes the active theme's tokens readable from anywhere on
//! the UI thread without a provider handle, the way a stylesheet can say
//! `var(--color-primary)` without knowing who set it.
//!
//! The board belongs to the UI thread that owns the provider: one document per
//! thread. Each [publish] replaces the previous contents entirely, so there is
//! never a mix of two themes' tokens.
//!
//! ```rust
//! use folio_theme::globals;
//! use folio_theme::id::ThemeId;
//! use folio_theme::properties::ThemeVariables;
//! use folio_theme::theme::builtin;
//!
//! globals::publish(&ThemeId::new("forest"), &ThemeVariables::from_record(&builtin::forest()));
//! assert_eq!(globals::lookup("color-primary").as_deref(), Some("#10B981"));
//! assert_eq!(globals::active_theme().unwrap(), "forest");
//! ```

use std::cell::RefCell;

use crate::id::ThemeId;
use crate::properties::ThemeVariables;

#[derive(Default)]
struct TokenBoard {
    theme: Option<ThemeId>,
    variables: ThemeVariables,
}

thread_local! {
    static BOARD: RefCell<TokenBoard> = RefCell::new(TokenBoard::default());
}

/// Replace the published tokens with those of `theme`.
pub fn publish(theme: &ThemeId, variables: &ThemeVariables) {
    BOARD.with(|board| {
        let mut board = board.borrow_mut();
        board.theme = Some(theme.clone());
        board.variables = variables.clone();
    });
    log::trace!("Published {} tokens for theme {}", variables.len(), theme);
}

/// Read one published token, e.g. `color-primary`.
pub fn lookup(name: &str) -> Option<String> {
    BOARD.with(|board| board.borrow().variables.get(name).map(str::to_string))
}

/// Copy of every published token.
pub fn snapshot() -> ThemeVariables {
    BOARD.with(|board| board.borrow().variables.clone())
}

/// Identifier of the theme whose tokens are published.
pub fn active_theme() -> Option<ThemeId> {
    BOARD.with(|board| board.borrow().theme.clone())
}

/// Remove every published token.
pub fn clear() {
    BOARD.with(|board| *board.borrow_mut() = TokenBoard::default());
}
