//! Registration of the offline cache worker.

use async_trait::async_trait;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::Navigator;

use super::js_error_message;
use crate::config::SERVICE_WORKER_URL;
use crate::types::{AppError, AppResult};

/// Result of a registration attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Registration {
    Registered,
    /// `navigator.serviceWorker` is missing: old browser or insecure context.
    Unsupported,
    Failed(String),
}

/// The `navigator.serviceWorker` side of registration.
#[async_trait(?Send)]
pub trait WorkerContainer {
    fn is_available(&self) -> bool;

    async fn register(&self, script_url: &str) -> AppResult<()>;
}

#[async_trait(?Send)]
impl WorkerContainer for Navigator {
    fn is_available(&self) -> bool {
        js_sys::Reflect::get(self, &JsValue::from_str("serviceWorker"))
            .map(|container| !container.is_undefined() && !container.is_null())
            .unwrap_or(false)
    }

    async fn register(&self, script_url: &str) -> AppResult<()> {
        JsFuture::from(self.service_worker().register(script_url))
            .await
            .map(|_| ())
            .map_err(|e| AppError::ServiceWorker(js_error_message(&e)))
    }
}

/// Register [`SERVICE_WORKER_URL`] with `container`. Never fails; the page
/// works without the worker.
pub async fn register_with<C: WorkerContainer>(container: &C) -> Registration {
    if !container.is_available() {
        log::warn!("Service workers unavailable, skipping offline cache");
        return Registration::Unsupported;
    }

    match container.register(SERVICE_WORKER_URL).await {
        Ok(()) => {
            log::info!("✈️ Service worker registered at {}", SERVICE_WORKER_URL);
            Registration::Registered
        }
        Err(e) => {
            log::warn!("Service worker registration failed: {}", e);
            Registration::Failed(e.to_string())
        }
    }
}

/// Register the service worker from the page's navigator.
pub async fn register_service_worker() {
    let navigator = gloo_utils::window().navigator();
    register_with(&navigator).await;
}
