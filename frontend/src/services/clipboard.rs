//! Async clipboard writes through `navigator.clipboard`.

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use super::js_error_message;
use crate::types::{AppError, AppResult};

/// Write `text` to the system clipboard.
///
/// Fails when the Clipboard API is missing (insecure context) or the
/// browser denies the write.
pub async fn copy_to_clipboard(text: &str) -> AppResult<()> {
    let navigator = gloo_utils::window().navigator();

    let clipboard = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))
        .map_err(|e| AppError::Clipboard(js_error_message(&e)))?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return Err(AppError::Clipboard("Clipboard API unavailable".to_string()));
    }

    let write_text = js_sys::Reflect::get(&clipboard, &JsValue::from_str("writeText"))
        .map_err(|e| AppError::Clipboard(js_error_message(&e)))?
        .dyn_into::<js_sys::Function>()
        .map_err(|_| AppError::Clipboard("writeText is not a function".to_string()))?;

    let promise = write_text
        .call1(&clipboard, &JsValue::from_str(text))
        .map_err(|e| AppError::Clipboard(js_error_message(&e)))?
        .dyn_into::<js_sys::Promise>()
        .map_err(|_| AppError::Clipboard("writeText did not return a promise".to_string()))?;

    JsFuture::from(promise)
        .await
        .map_err(|e| AppError::Clipboard(js_error_message(&e)))?;

    Ok(())
}
