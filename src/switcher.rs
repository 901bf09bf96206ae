//! Theme applier and toggle.
//!
//! DESIGN
//! ======
//! `ThemeSwitcher` is a two-state machine (light-active, dark-active) that
//! starts unset and is initialized by an explicit [`ThemeSwitcher::load`]
//! call from the host. Every [`ThemeSwitcher::apply`] updates the surface
//! first and then persists, so the stored preference and the enabled
//! stylesheet agree after each call.
//!
//! `load` applies the stored-or-default theme to the surface only; the
//! default is not written back until the user toggles. A rejected write
//! leaves the store behind the surface, so toggling follows the applied
//! theme rather than re-reading the store.

use crate::config::ThemeConfig;
use crate::store::{self, PreferenceStore};
use crate::surface::ThemeSurface;
use crate::theme::ThemeName;

pub struct ThemeSwitcher<S, T> {
    store: S,
    surface: T,
    config: ThemeConfig,
    active: Option<ThemeName>,
}

impl<S: PreferenceStore, T: ThemeSurface> ThemeSwitcher<S, T> {
    pub fn new(store: S, surface: T, config: ThemeConfig) -> Self {
        Self { store, surface, config, active: None }
    }

    /// Page-load initialization: enable the stored (or default) theme.
    pub fn load(&mut self) -> ThemeName {
        let theme = self.theme();
        self.surface.enable(theme);
        self.active = Some(theme);
        log::debug!("loaded theme {theme}");
        theme
    }

    /// Enable `name` on the surface and persist it.
    pub fn apply(&mut self, name: ThemeName) {
        self.surface.enable(name);
        store::set_theme(&mut self.store, &self.config, name);
        self.active = Some(name);
        log::debug!("applied theme {name}");
    }

    /// Apply the opposite of the current theme; returns the new theme.
    ///
    /// The last applied theme wins over the store, which may lag behind
    /// when writes are rejected.
    pub fn toggle(&mut self) -> ThemeName {
        let next = self.active.unwrap_or_else(|| self.theme()).toggled();
        self.apply(next);
        next
    }

    /// Stored preference, falling back to the configured default.
    pub fn theme(&self) -> ThemeName {
        store::get_theme(&self.store, &self.config)
    }

    /// Theme enabled by the last `load` or `apply`, if any.
    pub fn active(&self) -> Option<ThemeName> {
        self.active
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn surface(&self) -> &T {
        &self.surface
    }

    pub fn into_parts(self) -> (S, T) {
        (self.store, self.surface)
    }
}

#[cfg(test)]
#[path = "switcher_test.rs"]
mod tests;
