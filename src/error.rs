//! Error types for browser access

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures talking to the host page.
///
/// None of these reach the user; the browser viewport logs them and falls back.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomError {
    #[error("no global window available")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("JavaScript call failed: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

/// Result type for browser calls
pub type DomResult<T> = Result<T, DomError>;
