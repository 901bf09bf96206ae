//! Capability interface for switching the document's active stylesheet.

use crate::theme::ThemeName;

/// Host-side control over the two theme style resources.
///
/// Each call leaves exactly the named theme enabled.
pub trait ThemeSurface {
    fn enable_light(&mut self);
    fn enable_dark(&mut self);

    fn enable(&mut self, theme: ThemeName) {
        match theme {
            ThemeName::Light => self.enable_light(),
            ThemeName::Dark => self.enable_dark(),
        }
    }
}

/// Enablement flags for the two style resources, without a DOM.
///
/// Used for server rendering and as the test double for the switcher.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MemorySurface {
    pub light_enabled: bool,
    pub dark_enabled: bool,
}

impl MemorySurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The single enabled theme, or `None` if neither or both are enabled.
    #[must_use]
    pub fn active(&self) -> Option<ThemeName> {
        match (self.light_enabled, self.dark_enabled) {
            (true, false) => Some(ThemeName::Light),
            (false, true) => Some(ThemeName::Dark),
            _ => None,
        }
    }
}

impl ThemeSurface for MemorySurface {
    fn enable_light(&mut self) {
        self.light_enabled = true;
        self.dark_enabled = false;
    }

    fn enable_dark(&mut self) {
        self.light_enabled = false;
        self.dark_enabled = true;
    }
}

#[cfg(test)]
#[path = "surface_test.rs"]
mod tests;
