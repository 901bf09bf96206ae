//! Host-tunable names: the storage key, the element ids and the sheet URLs.
//!
//! Every field has a default, so hosts only pass the fields they change.

use serde::{Deserialize, Serialize};

use crate::error::ThemeError;
use crate::theme::ThemeName;

pub const DEFAULT_STORAGE_KEY: &str = "theme";
pub const DEFAULT_LIGHT_ID: &str = "theme-light";
pub const DEFAULT_DARK_ID: &str = "theme-dark";
pub const DEFAULT_SWAP_ID: &str = "themeStylesheet";
pub const DEFAULT_LIGHT_HREF: &str = "/static/css/light.css";
pub const DEFAULT_DARK_HREF: &str = "/static/css/dark.css";

/// How the document exposes its theme stylesheets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SurfaceKind {
    /// Two `<link>` elements, one per theme, toggled via `disabled`.
    #[default]
    Paired,
    /// One `<link>` element whose `href` points at the active sheet.
    Swapped,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub storage_key: String,
    pub default_theme: ThemeName,
    pub surface: SurfaceKind,
    pub light_id: String,
    pub dark_id: String,
    pub swap_id: String,
    pub light_href: String,
    pub dark_href: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            default_theme: ThemeName::Light,
            surface: SurfaceKind::Paired,
            light_id: DEFAULT_LIGHT_ID.to_owned(),
            dark_id: DEFAULT_DARK_ID.to_owned(),
            swap_id: DEFAULT_SWAP_ID.to_owned(),
            light_href: DEFAULT_LIGHT_HREF.to_owned(),
            dark_href: DEFAULT_DARK_HREF.to_owned(),
        }
    }
}

impl ThemeConfig {
    /// Parse a (possibly partial) JSON object; absent fields keep defaults.
    pub fn from_json(raw: &str) -> Result<Self, ThemeError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Sheet URL used by the swapped surface for `theme`.
    #[must_use]
    pub fn href_for(&self, theme: ThemeName) -> &str {
        match theme {
            ThemeName::Light => &self.light_href,
            ThemeName::Dark => &self.dark_href,
        }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
