use super::*;
use crate::store::MemoryStore;
use crate::surface::MemorySurface;

fn switcher(store: MemoryStore) -> ThemeSwitcher<MemoryStore, MemorySurface> {
    ThemeSwitcher::new(store, MemorySurface::new(), ThemeConfig::default())
}

// =============================================================
// load
// =============================================================

#[test]
fn load_with_stored_dark_enables_dark() {
    let mut sw = switcher(MemoryStore::with_entry("theme", "dark"));
    assert_eq!(sw.load(), ThemeName::Dark);
    assert!(sw.surface().dark_enabled);
    assert!(!sw.surface().light_enabled);
    assert_eq!(sw.active(), Some(ThemeName::Dark));
}

#[test]
fn load_without_stored_value_enables_light() {
    let mut sw = switcher(MemoryStore::new());
    assert_eq!(sw.load(), ThemeName::Light);
    assert_eq!(sw.surface().active(), Some(ThemeName::Light));
}

#[test]
fn load_does_not_persist_default() {
    let mut sw = switcher(MemoryStore::new());
    sw.load();
    assert!(sw.store().is_empty());
}

#[test]
fn load_with_invalid_value_enables_light() {
    let mut sw = switcher(MemoryStore::with_entry("theme", "neon"));
    assert_eq!(sw.load(), ThemeName::Light);
    assert_eq!(sw.surface().active(), Some(ThemeName::Light));
}

#[test]
fn active_is_none_before_load() {
    let sw = switcher(MemoryStore::new());
    assert_eq!(sw.active(), None);
    assert_eq!(sw.surface().active(), None);
}

// =============================================================
// apply
// =============================================================

#[test]
fn apply_enables_and_persists() {
    let mut sw = switcher(MemoryStore::new());
    sw.apply(ThemeName::Dark);
    assert_eq!(sw.surface().active(), Some(ThemeName::Dark));
    assert_eq!(sw.store().read("theme").as_deref(), Some("dark"));
    assert_eq!(sw.theme(), ThemeName::Dark);
}

#[test]
fn apply_twice_matches_apply_once() {
    for theme in ThemeName::ALL {
        let mut once = switcher(MemoryStore::new());
        once.apply(theme);

        let mut twice = switcher(MemoryStore::new());
        twice.apply(theme);
        twice.apply(theme);

        assert_eq!(once.surface(), twice.surface());
        assert_eq!(once.store(), twice.store());
        assert_eq!(once.active(), twice.active());
    }
}

// =============================================================
// toggle
// =============================================================

#[test]
fn toggle_from_light_goes_dark() {
    let mut sw = switcher(MemoryStore::with_entry("theme", "light"));
    sw.load();
    assert_eq!(sw.toggle(), ThemeName::Dark);
    assert_eq!(sw.store().read("theme").as_deref(), Some("dark"));
    assert!(sw.surface().dark_enabled);
    assert!(!sw.surface().light_enabled);
}

#[test]
fn toggle_from_unset_goes_dark_and_persists() {
    let mut sw = switcher(MemoryStore::new());
    sw.load();
    assert_eq!(sw.toggle(), ThemeName::Dark);
    assert_eq!(sw.theme(), ThemeName::Dark);
}

#[test]
fn every_toggle_leaves_exactly_one_active() {
    let mut sw = switcher(MemoryStore::new());
    sw.load();
    let mut expected = ThemeName::Light;
    for _ in 0..7 {
        expected = expected.toggled();
        assert_eq!(sw.toggle(), expected);
        let surface = sw.surface();
        assert!(surface.light_enabled ^ surface.dark_enabled);
        assert_eq!(surface.active(), Some(expected));
        assert_eq!(sw.theme(), expected);
    }
}

#[test]
fn toggle_honors_configured_key() {
    let cfg = ThemeConfig { storage_key: "site_theme".to_owned(), ..ThemeConfig::default() };
    let mut sw = ThemeSwitcher::new(MemoryStore::with_entry("site_theme", "dark"), MemorySurface::new(), cfg);
    assert_eq!(sw.toggle(), ThemeName::Light);
    let (store, surface) = sw.into_parts();
    assert_eq!(store.read("site_theme").as_deref(), Some("light"));
    assert_eq!(store.read("theme"), None);
    assert_eq!(surface.active(), Some(ThemeName::Light));
}

// =============================================================
// Rejected writes
// =============================================================

/// Store that always reads back "light" and refuses every write, like a
/// full or privacy-mode `localStorage`.
struct RejectingStore;

impl PreferenceStore for RejectingStore {
    fn read(&self, _key: &str) -> Option<String> {
        Some("light".to_owned())
    }

    fn write(&mut self, _key: &str, _value: &str) -> Result<(), crate::error::ThemeError> {
        Err(crate::error::ThemeError::Storage("QuotaExceededError".to_owned()))
    }
}

#[test]
fn toggle_keeps_alternating_when_writes_fail() {
    let mut sw = ThemeSwitcher::new(RejectingStore, MemorySurface::new(), ThemeConfig::default());
    assert_eq!(sw.load(), ThemeName::Light);
    assert_eq!(sw.toggle(), ThemeName::Dark);
    assert_eq!(sw.toggle(), ThemeName::Light);
    assert_eq!(sw.toggle(), ThemeName::Dark);
    assert_eq!(sw.surface().active(), Some(ThemeName::Dark));
    assert_eq!(sw.active(), Some(ThemeName::Dark));
}

#[test]
fn toggle_follows_applied_theme_over_stale_store() {
    let mut sw = ThemeSwitcher::new(RejectingStore, MemorySurface::new(), ThemeConfig::default());
    sw.apply(ThemeName::Dark);
    assert_eq!(sw.theme(), ThemeName::Light);
    assert_eq!(sw.toggle(), ThemeName::Light);
    assert_eq!(sw.surface().active(), Some(ThemeName::Light));
}
