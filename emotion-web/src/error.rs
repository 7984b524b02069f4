//! Client errors and their conversion to JS values

use wasm_bindgen::prelude::*;

use crate::messages;

/// Errors that can occur while wiring the page or handling a submission
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ClientError {
    #[error("No window found")]
    NoWindow,
    #[error("No document found")]
    NoDocument,
    #[error("No element with id '{id}' found (expected {expected})")]
    MissingElement { id: String, expected: &'static str },
    #[error("{0}")]
    CameraUnavailable(String),
    #[error("{}", messages::CAMERA_REQUIRED)]
    CameraOff,
    #[error("Snapshot failed: {0}")]
    Capture(String),
    #[error("{0}")]
    Network(String),
    #[error("Invalid response body: {0}")]
    Decode(String),
    #[error("DOM operation failed: {0}")]
    Dom(String),
    #[error("Invalid config: {0}")]
    Config(String),
}

impl ClientError {
    pub(crate) fn network(value: JsValue) -> Self {
        ClientError::Network(describe_js(&value))
    }

    pub(crate) fn camera(value: JsValue) -> Self {
        ClientError::CameraUnavailable(describe_js(&value))
    }

    pub(crate) fn capture(value: JsValue) -> Self {
        ClientError::Capture(describe_js(&value))
    }

    pub(crate) fn dom(value: JsValue) -> Self {
        ClientError::Dom(describe_js(&value))
    }
}

impl From<ClientError> for JsValue {
    fn from(err: ClientError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Render a thrown JS value the way the browser console would print it
/// (`TypeError: Failed to fetch`, `NotAllowedError: Permission denied`).
pub(crate) fn describe_js(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.to_string());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
