//! Browser bindings: `localStorage`, the stylesheet surfaces and the
//! per-page switcher used by the exported entry points.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only compiled with the `hydrate` feature. Everything here is a thin
//! adapter onto the host-independent [`ThemeSwitcher`].

mod local_storage;
mod stylesheets;

use std::cell::RefCell;

pub use local_storage::LocalStorage;
pub use stylesheets::{PairedStylesheets, SwappedStylesheet};

use crate::config::{SurfaceKind, ThemeConfig};
use crate::error::ThemeError;
use crate::store;
use crate::surface::ThemeSurface;
use crate::switcher::ThemeSwitcher;
use crate::theme::ThemeName;

thread_local! {
    static SWITCHER: RefCell<Option<BrowserSwitcher>> = RefCell::new(None);
}

/// Whichever stylesheet layout the page uses.
pub enum DocumentSurface {
    Paired(PairedStylesheets),
    Swapped(SwappedStylesheet),
}

impl DocumentSurface {
    pub fn locate(config: &ThemeConfig) -> Result<Self, ThemeError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(ThemeError::NoDocument)?;
        match config.surface {
            SurfaceKind::Paired => Ok(Self::Paired(PairedStylesheets::locate(&document, config)?)),
            SurfaceKind::Swapped => Ok(Self::Swapped(SwappedStylesheet::locate(&document, config)?)),
        }
    }
}

impl ThemeSurface for DocumentSurface {
    fn enable_light(&mut self) {
        match self {
            Self::Paired(s) => s.enable_light(),
            Self::Swapped(s) => s.enable_light(),
        }
    }

    fn enable_dark(&mut self) {
        match self {
            Self::Paired(s) => s.enable_dark(),
            Self::Swapped(s) => s.enable_dark(),
        }
    }
}

pub type BrowserSwitcher = ThemeSwitcher<LocalStorage, DocumentSurface>;

/// Bind a switcher to this page's storage and stylesheets.
pub fn switcher(config: ThemeConfig) -> Result<BrowserSwitcher, ThemeError> {
    let surface = DocumentSurface::locate(&config)?;
    Ok(ThemeSwitcher::new(LocalStorage::open(), surface, config))
}

/// Apply the stored theme and keep the switcher for later toggles.
pub fn load(config: ThemeConfig) -> Result<ThemeName, ThemeError> {
    let mut sw = switcher(config)?;
    let theme = sw.load();
    SWITCHER.with(|slot| *slot.borrow_mut() = Some(sw));
    Ok(theme)
}

/// Toggle the switcher installed by [`load`], binding the default layout
/// if the page never called it.
pub fn toggle() -> Result<ThemeName, ThemeError> {
    SWITCHER.with(|slot| {
        let mut slot = slot.borrow_mut();
        if slot.is_none() {
            *slot = Some(switcher(ThemeConfig::default())?);
        }
        let sw = slot.as_mut().ok_or(ThemeError::NoDocument)?;
        Ok(sw.toggle())
    })
}

/// Active theme, or the stored one before any switcher is installed.
pub fn current_theme() -> ThemeName {
    SWITCHER.with(|slot| match slot.borrow().as_ref() {
        Some(sw) => sw.active().unwrap_or_else(|| sw.theme()),
        None => store::get_theme(&LocalStorage::open(), &ThemeConfig::default()),
    })
}

/// Route `log` records to the browser console and report panics there.
pub fn init_logging() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        log::debug!("console logger already installed: {err}");
    }
}
