//! Crate error type.
//!
//! DESIGN
//! ======
//! Page behaviors never surface errors to the visitor: a binding that fails
//! to mount is logged and skipped, and the rest of the page keeps working.
//! `FolioError` exists so that the binding layer can propagate with `?` and
//! report a single warning at the mount boundary.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Errors produced while loading config or mounting browser bindings.
#[derive(Debug, thiserror::Error)]
pub enum FolioError {
    /// No `window` global (not running in a browser main thread).
    #[error("browser window unavailable")]
    NoWindow,

    /// The window has no document attached.
    #[error("document unavailable")]
    NoDocument,

    /// A required element was not found.
    #[error("element not found: {selector}")]
    MissingElement { selector: String },

    /// A DOM call threw a JavaScript exception.
    #[error("javascript error: {0}")]
    Js(String),

    /// The page config could not be deserialized.
    #[error("config parse failed: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// The page config parsed but holds unusable values.
    #[error("config invalid: {0}")]
    ConfigInvalid(String),
}

impl FolioError {
    /// Stable short code used in log lines.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::NoWindow => "E_NO_WINDOW",
            Self::NoDocument => "E_NO_DOCUMENT",
            Self::MissingElement { .. } => "E_MISSING_ELEMENT",
            Self::Js(_) => "E_JS",
            Self::ConfigParse(_) => "E_CONFIG_PARSE",
            Self::ConfigInvalid(_) => "E_CONFIG_INVALID",
        }
    }

    pub fn missing(selector: impl Into<String>) -> Self {
        Self::MissingElement { selector: selector.into() }
    }
}

/// Unwrap an optional capability, logging and discarding the failure.
///
/// For browser features the page works without, like `localStorage` when
/// storage is blocked.
pub fn best_effort<T, E: Into<FolioError>>(context: &str, result: Result<T, E>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            let e = e.into();
            log::warn!("{context} unavailable [{}]: {e}", e.code());
            None
        }
    }
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for FolioError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        if let Some(message) = value.as_string() {
            return Self::Js(message);
        }
        match js_sys::JSON::stringify(&value) {
            Ok(json) => Self::Js(String::from(json)),
            Err(_) => Self::Js("unknown".to_owned()),
        }
    }
}
