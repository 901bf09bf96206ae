//! # themeswitch
//!
//! Light/dark theme switching for server-rendered pages, compiled to WASM.
//!
//! A [`ThemeSwitcher`] owns an injected [`PreferenceStore`] and an injected
//! [`ThemeSurface`]. It enables exactly one theme's stylesheet and records
//! the choice under a single key. With the `hydrate` feature the crate binds
//! those seams to `localStorage` and `<link>` elements and exports
//! `start`, `init_theme`, `toggle_theme` and `current_theme` to JavaScript.

pub mod components;
pub mod config;
pub mod error;
pub mod store;
pub mod surface;
pub mod switcher;
pub mod theme;

#[cfg(feature = "hydrate")]
pub mod browser;

pub use config::{SurfaceKind, ThemeConfig};
pub use error::ThemeError;
pub use store::{MemoryStore, PreferenceStore, get_theme, set_theme};
pub use surface::{MemorySurface, ThemeSurface};
pub use switcher::ThemeSwitcher;
pub use theme::ThemeName;

#[cfg(feature = "hydrate")]
mod entry {
    use wasm_bindgen::prelude::*;

    use crate::browser;
    use crate::config::ThemeConfig;

    /// Module start: install logging and apply the stored theme using the
    /// default element ids. Pages with other ids call [`init_theme`].
    #[wasm_bindgen(start)]
    pub fn start() {
        browser::init_logging();
        if let Err(err) = browser::load(ThemeConfig::default()) {
            log::warn!("default theme binding skipped: {err}");
        }
    }

    /// Apply the stored theme with a JSON `ThemeConfig`; returns its name.
    #[wasm_bindgen]
    pub fn init_theme(config_json: &str) -> Result<String, JsValue> {
        let config = ThemeConfig::from_json(config_json)?;
        Ok(browser::load(config)?.to_string())
    }

    /// Flip the theme; returns the new name. Suitable for `onclick`.
    #[wasm_bindgen]
    pub fn toggle_theme() -> Result<String, JsValue> {
        Ok(browser::toggle()?.to_string())
    }

    #[wasm_bindgen]
    pub fn current_theme() -> String {
        browser::current_theme().to_string()
    }
}
