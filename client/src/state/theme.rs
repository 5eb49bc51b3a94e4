//! Theme preference store.
//!
//! DESIGN
//! ======
//! The initial theme comes from the persisted `theme` value when one exists
//! and is non-empty, otherwise from the host's color-scheme preference.
//! Every value the store holds, including the initial one, is written back
//! to storage through the store's post-transition hook.
//!
//! Without a document (server render) the store starts from the
//! color-scheme answer, never reads storage and never persists.
//!
//! TRADE-OFFS
//! ==========
//! Persisted strings outside `light`/`dark` are kept verbatim as
//! [`Theme::Custom`] instead of being replaced, so a stylesheet can define
//! extra themes without this module knowing about them.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::rc::Rc;

use super::store::{HookPolicy, Store, Subscription};
use crate::util::env::Environment;

/// Storage key for the persisted theme.
pub const STORAGE_KEY: &str = "theme";

/// Color theme token.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
    /// Unrecognised persisted value, carried through unchanged.
    Custom(String),
}

impl Theme {
    /// Theme reported by the host's color-scheme preference.
    pub fn from_system(env: &dyn Environment) -> Self {
        if env.prefers_dark_scheme() { Self::Dark } else { Self::Light }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Custom(raw) => raw.as_str(),
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Dark becomes light; anything else becomes dark.
    #[must_use]
    pub fn toggled(&self) -> Self {
        if self.is_dark() { Self::Light } else { Self::Dark }
    }

    /// Background/foreground colors for this theme. Custom themes use the
    /// light palette.
    pub fn palette(&self) -> Palette {
        if self.is_dark() { Palette::DARK } else { Palette::LIGHT }
    }
}

impl From<&str> for Theme {
    fn from(raw: &str) -> Self {
        match raw {
            "light" => Self::Light,
            "dark" => Self::Dark,
            other => Self::Custom(other.to_owned()),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Base colors for a theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub foreground: &'static str,
}

impl Palette {
    pub const LIGHT: Self = Self { background: "#ebebeb", foreground: "#1a1c1e" };
    pub const DARK: Self = Self { background: "#1a1c1e", foreground: "#ebebeb" };
}

/// Resolve the starting theme: persisted choice first, system preference
/// otherwise.
pub fn initial_theme(env: &dyn Environment) -> Theme {
    if !env.has_document() {
        return Theme::from_system(env);
    }
    match env.read_persisted(STORAGE_KEY) {
        Ok(Some(saved)) if !saved.is_empty() => Theme::from(saved.as_str()),
        Ok(_) => Theme::from_system(env),
        Err(err) => {
            log::warn!("reading persisted theme failed: {err}");
            Theme::from_system(env)
        }
    }
}

/// Process-wide theme preference.
#[derive(Clone, Debug)]
pub struct PreferenceStore {
    store: Store<Theme>,
}

impl PreferenceStore {
    pub fn new(env: Rc<dyn Environment>) -> Self {
        let initial = initial_theme(env.as_ref());
        if !env.has_document() {
            return Self { store: Store::new(initial) };
        }

        let store = Store::with_hook(
            initial,
            move |theme: &Theme| env.write_persisted(STORAGE_KEY, theme.as_str()),
            HookPolicy::Warn,
        );
        Self { store }
    }

    pub fn get(&self) -> Theme {
        self.store.get()
    }

    pub fn set(&self, theme: Theme) {
        self.store.set(theme);
    }

    /// Flip between light and dark and return the new theme.
    pub fn toggle(&self) -> Theme {
        let next = self.get().toggled();
        self.set(next.clone());
        next
    }

    pub fn subscribe(&self, callback: impl Fn(&Theme) + 'static) -> Subscription {
        self.store.subscribe(callback)
    }

    /// Restore the theme resolved at construction.
    pub fn reset(&self) {
        self.store.reset();
    }

    pub fn palette(&self) -> Palette {
        self.get().palette()
    }

    /// Underlying store, for adapters that work on any `Store`.
    pub fn store(&self) -> &Store<Theme> {
        &self.store
    }
}
