//! Preference store access.
//!
//! The persistent key-value backend is injected through [`PreferenceStore`]
//! so the switcher runs against `localStorage` in the browser and against
//! [`MemoryStore`] everywhere else.

use std::collections::HashMap;

use crate::config::ThemeConfig;
use crate::error::ThemeError;
use crate::theme::ThemeName;

/// Origin-scoped string storage that survives reloads.
pub trait PreferenceStore {
    /// Stored value for `key`, or `None` when unset or unreadable.
    fn read(&self, key: &str) -> Option<String>;

    /// Overwrite the value for `key`.
    fn write(&mut self, key: &str, value: &str) -> Result<(), ThemeError>;
}

/// In-process store keyed by string.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a single entry.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.to_owned(), value.to_owned());
        store
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PreferenceStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), ThemeError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Persisted theme, or `config.default_theme` when unset or unrecognized.
pub fn get_theme<S: PreferenceStore + ?Sized>(store: &S, config: &ThemeConfig) -> ThemeName {
    let Some(raw) = store.read(&config.storage_key) else {
        return config.default_theme;
    };
    match raw.parse() {
        Ok(theme) => theme,
        Err(err) => {
            log::debug!("ignoring stored theme: {err}");
            config.default_theme
        }
    }
}

/// Persist `name`, replacing any prior value. Write failures are logged.
pub fn set_theme<S: PreferenceStore + ?Sized>(store: &mut S, config: &ThemeConfig, name: ThemeName) {
    if let Err(err) = store.write(&config.storage_key, name.as_str()) {
        log::warn!("failed to persist theme {name}: {err}");
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
