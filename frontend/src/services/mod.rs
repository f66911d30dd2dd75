//! Browser and backend services.
//!
//! # Services
//!
//! - [`upload`] - PDF batch upload to `/process-pdf-batch`
//! - [`health`] - Backend health probe
//! - [`clipboard`] - Async clipboard writes
//! - [`worker`] - Offline cache worker registration

pub mod upload;
pub mod health;
pub mod clipboard;
pub mod worker;

pub use upload::*;
pub use health::*;
pub use clipboard::*;
pub use worker::*;

use wasm_bindgen::JsValue;

/// Best-effort text for a thrown JS value.
pub(crate) fn js_error_message(error: &JsValue) -> String {
    js_sys::Reflect::get(error, &"message".into())
        .ok()
        .and_then(|v| v.as_string())
        .or_else(|| error.as_string())
        .unwrap_or_else(|| format!("{:?}", error))
}
