//! `localStorage`-backed preference store.

use crate::error::ThemeError;
use crate::store::PreferenceStore;

/// `window.localStorage`, or nothing when the page may not use it.
///
/// A detached store reads nothing and rejects writes, so the switcher
/// still toggles the document for the current page view.
pub struct LocalStorage {
    storage: Option<web_sys::Storage>,
}

impl LocalStorage {
    pub fn open() -> Self {
        let Some(window) = web_sys::window() else {
            log::warn!("no window; theme preference will not persist");
            return Self { storage: None };
        };
        match window.local_storage() {
            Ok(Some(storage)) => Self { storage: Some(storage) },
            Ok(None) => {
                log::warn!("localStorage missing; theme preference will not persist");
                Self { storage: None }
            }
            Err(err) => {
                log::warn!("localStorage access denied: {err:?}");
                Self { storage: None }
            }
        }
    }
}

impl PreferenceStore for LocalStorage {
    fn read(&self, key: &str) -> Option<String> {
        let storage = self.storage.as_ref()?;
        match storage.get_item(key) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("localStorage read of {key} failed: {err:?}");
                None
            }
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), ThemeError> {
        let storage = self.storage.as_ref().ok_or(ThemeError::StorageUnavailable)?;
        storage
            .set_item(key, value)
            .map_err(|e| ThemeError::Storage(format!("{e:?}")))
    }
}
