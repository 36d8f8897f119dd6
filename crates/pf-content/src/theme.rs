//! Light/dark theme and its persisted preference.

use std::cell::RefCell;
use std::collections::HashMap;

/// Storage key holding the theme preference.
pub const THEME_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Parse a stored value. Anything other than `"dark"` is light.
    pub fn parse(raw: &str) -> Theme {
        match raw.trim() {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Icon shown on the toggle: the theme you would switch to.
    pub fn icon_class(self) -> &'static str {
        match self {
            Theme::Dark => "fas fa-sun",
            Theme::Light => "fas fa-moon",
        }
    }
}

/// Minimal string key-value store.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// In-memory store, used when no persistent storage is available and in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
    }
}

/// Reads and writes the single theme key of a [`PreferenceStore`].
pub struct ThemePreference<S> {
    store: S,
}

impl<S: PreferenceStore> ThemePreference<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Stored theme, light when nothing (or garbage) is stored.
    pub fn load(&self) -> Theme {
        self.store
            .get(THEME_KEY)
            .map(|raw| Theme::parse(&raw))
            .unwrap_or_default()
    }

    pub fn save(&self, theme: Theme) {
        self.store.set(THEME_KEY, theme.as_str());
    }

    /// Flip and persist the stored theme, returning the new value.
    pub fn toggle(&self) -> Theme {
        let next = self.load().toggled();
        self.save(next);
        next
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
