//! DOM surfaces backed by `<link rel="stylesheet">` elements.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlLinkElement};

use crate::config::ThemeConfig;
use crate::error::ThemeError;
use crate::surface::ThemeSurface;
use crate::theme::ThemeName;

/// One `<link>` per theme; the inactive one carries `disabled`.
pub struct PairedStylesheets {
    light: HtmlLinkElement,
    dark: HtmlLinkElement,
}

impl PairedStylesheets {
    pub fn locate(document: &Document, config: &ThemeConfig) -> Result<Self, ThemeError> {
        Ok(Self {
            light: find_link(document, &config.light_id)?,
            dark: find_link(document, &config.dark_id)?,
        })
    }
}

impl ThemeSurface for PairedStylesheets {
    fn enable_light(&mut self) {
        self.light.set_disabled(false);
        self.dark.set_disabled(true);
    }

    fn enable_dark(&mut self) {
        self.dark.set_disabled(false);
        self.light.set_disabled(true);
    }
}

/// A single `<link>` whose `href` names the active sheet.
pub struct SwappedStylesheet {
    link: HtmlLinkElement,
    config: ThemeConfig,
}

impl SwappedStylesheet {
    pub fn locate(document: &Document, config: &ThemeConfig) -> Result<Self, ThemeError> {
        Ok(Self {
            link: find_link(document, &config.swap_id)?,
            config: config.clone(),
        })
    }
}

impl ThemeSurface for SwappedStylesheet {
    fn enable_light(&mut self) {
        self.link.set_href(self.config.href_for(ThemeName::Light));
    }

    fn enable_dark(&mut self) {
        self.link.set_href(self.config.href_for(ThemeName::Dark));
    }
}

fn find_link(document: &Document, id: &str) -> Result<HtmlLinkElement, ThemeError> {
    let missing = || ThemeError::MissingElement { id: id.to_owned() };
    let element = document.get_element_by_id(id).ok_or_else(missing)?;
    element.dyn_into::<HtmlLinkElement>().map_err(|_| missing())
}
