use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("Storage unavailable")]
    StorageUnavailable,

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("DOM error: {0}")]
    Dom(String),

    #[error("Invalid theme: {0:?}")]
    InvalidTheme(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl ThemeError {
    /// Describe a thrown JS value. DOM exceptions carry no string form, so fall
    /// back to the debug representation.
    pub fn js_message(err: &JsValue) -> String {
        err.as_string().unwrap_or_else(|| format!("{:?}", err))
    }

    pub fn storage(err: JsValue) -> Self {
        ThemeError::Storage(Self::js_message(&err))
    }

    pub fn dom(err: JsValue) -> Self {
        ThemeError::Dom(Self::js_message(&err))
    }
}
