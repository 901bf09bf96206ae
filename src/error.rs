//! Error type shared by the store, surfaces and entry points.

/// Failures surfaced while reading configuration or binding to the browser.
///
/// The core toggle path never returns these: unknown stored values fall
/// back to the default theme and failed writes are logged.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    /// A string that is neither `light` nor `dark`.
    #[error("unknown theme: {0:?}")]
    UnknownTheme(String),
    /// No `window` or no `localStorage` in this context.
    #[error("local storage is unavailable")]
    StorageUnavailable,
    /// `localStorage.setItem` rejected the write.
    #[error("storage write failed: {0}")]
    Storage(String),
    /// No `window.document` in this context.
    #[error("document is unavailable")]
    NoDocument,
    /// A style resource id did not resolve to a `<link>` element.
    #[error("style resource not found: #{id}")]
    MissingElement { id: String },
    /// Host-supplied configuration JSON did not parse.
    #[error("invalid theme config: {0}")]
    Config(#[from] serde_json::Error),
}

#[cfg(feature = "hydrate")]
impl From<ThemeError> for wasm_bindgen::JsValue {
    fn from(err: ThemeError) -> Self {
        Self::from_str(&err.to_string())
    }
}
