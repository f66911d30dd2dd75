//! Error types for the offline cache worker.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkerError {
    /// A browser API threw or a promise rejected.
    #[error("JS error: {0}")]
    Js(String),

    /// Cache and network both failed.
    #[error("Offline and no cached copy of {0}")]
    Offline(String),

    /// Cache Storage refused an operation.
    #[error("Cache error: {0}")]
    Cache(String),

    /// A promise resolved to something other than the expected type.
    #[error("Unexpected value: expected {0}")]
    UnexpectedValue(&'static str),
}

impl From<JsValue> for WorkerError {
    fn from(value: JsValue) -> Self {
        let message = js_sys::Reflect::get(&value, &"message".into())
            .ok()
            .and_then(|v| v.as_string())
            .or_else(|| value.as_string())
            .unwrap_or_else(|| format!("{:?}", value));
        WorkerError::Js(message)
    }
}

impl From<WorkerError> for JsValue {
    fn from(error: WorkerError) -> Self {
        js_sys::Error::new(&error.to_string()).into()
    }
}

/// Result type for worker operations.
pub type WorkerResult<T> = Result<T, WorkerError>;
