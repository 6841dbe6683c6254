//! Error type for the browser glue.

use wasm_bindgen::JsValue;

#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("no global `window` available")]
    NoWindow,

    #[error("DOM call failed: {0}")]
    Dom(String),
}

impl From<JsValue> for SiteError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{value:?}"));
        SiteError::Dom(message)
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;
