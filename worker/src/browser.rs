//! `web_sys` implementations of the worker traits and the exported
//! event handlers called by the `sw.js` loader.

use async_trait::async_trait;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{future_to_promise, JsFuture};
use web_sys::{
    Cache, FetchEvent, Request, RequestMode, Response, ResponseType, ServiceWorkerGlobalScope,
};

use crate::config::CACHE_NAME;
use crate::error::{WorkerError, WorkerResult};
use crate::lifecycle::{activate_and_claim, install_and_skip_waiting};
use crate::policy::{respond, route, Route};
use crate::traits::{
    AssetCache, AssetRequest, AssetResponse, CacheStorage, Network, ResponseKind, WorkerScope,
};

// =============================================================================
// Trait implementations
// =============================================================================

impl AssetRequest for Request {
    fn method(&self) -> String {
        Request::method(self)
    }

    fn url(&self) -> String {
        Request::url(self)
    }

    fn is_navigation(&self) -> bool {
        self.mode() == RequestMode::Navigate
    }
}

impl AssetResponse for Response {
    fn status(&self) -> u16 {
        Response::status(self)
    }

    fn kind(&self) -> ResponseKind {
        match self.type_() {
            ResponseType::Basic => ResponseKind::Basic,
            ResponseType::Cors => ResponseKind::Cors,
            ResponseType::Opaque | ResponseType::Opaqueredirect => ResponseKind::Opaque,
            ResponseType::Error => ResponseKind::Error,
            _ => ResponseKind::Other,
        }
    }

    fn duplicate(&self) -> WorkerResult<Self> {
        Ok(Response::clone(self)?)
    }
}

/// Resolve a promise expected to yield a `Response` or `undefined`.
async fn optional_response(promise: js_sys::Promise) -> WorkerResult<Option<Response>> {
    let value = JsFuture::from(promise).await?;
    if value.is_undefined() {
        return Ok(None);
    }
    value
        .dyn_into::<Response>()
        .map(Some)
        .map_err(|_| WorkerError::UnexpectedValue("Response"))
}

pub struct BrowserCache(Cache);

#[async_trait(?Send)]
impl AssetCache for BrowserCache {
    type Request = Request;
    type Response = Response;

    async fn match_request(&self, request: &Request) -> WorkerResult<Option<Response>> {
        optional_response(self.0.match_with_request(request)).await
    }

    async fn match_url(&self, url: &str) -> WorkerResult<Option<Response>> {
        optional_response(self.0.match_with_str(url)).await
    }

    async fn put(&self, request: &Request, response: Response) -> WorkerResult<()> {
        JsFuture::from(self.0.put_with_request(request, &response)).await?;
        Ok(())
    }

    async fn add_all(&self, urls: &[&str]) -> WorkerResult<()> {
        let list: js_sys::Array = urls.iter().map(|url| JsValue::from_str(url)).collect();
        JsFuture::from(self.0.add_all_with_str_sequence(&list))
            .await
            .map_err(|e| WorkerError::Cache(WorkerError::from(e).to_string()))?;
        Ok(())
    }
}

pub struct BrowserStorage(web_sys::CacheStorage);

impl BrowserStorage {
    pub fn from_scope(scope: &ServiceWorkerGlobalScope) -> WorkerResult<Self> {
        Ok(Self(scope.caches()?))
    }
}

#[async_trait(?Send)]
impl CacheStorage for BrowserStorage {
    type Cache = BrowserCache;

    async fn open(&self, name: &str) -> WorkerResult<BrowserCache> {
        let cache = JsFuture::from(self.0.open(name)).await?;
        cache
            .dyn_into::<Cache>()
            .map(BrowserCache)
            .map_err(|_| WorkerError::UnexpectedValue("Cache"))
    }

    async fn keys(&self) -> WorkerResult<Vec<String>> {
        let keys = JsFuture::from(self.0.keys()).await?;
        Ok(js_sys::Array::from(&keys)
            .iter()
            .filter_map(|key| key.as_string())
            .collect())
    }

    async fn delete(&self, name: &str) -> WorkerResult<bool> {
        let existed = JsFuture::from(self.0.delete(name)).await?;
        Ok(existed.as_bool().unwrap_or(false))
    }
}

pub struct BrowserNetwork(ServiceWorkerGlobalScope);

#[async_trait(?Send)]
impl Network for BrowserNetwork {
    type Request = Request;
    type Response = Response;

    async fn fetch(&self, request: &Request) -> WorkerResult<Response> {
        let response = JsFuture::from(self.0.fetch_with_request(request)).await?;
        response
            .dyn_into::<Response>()
            .map_err(|_| WorkerError::UnexpectedValue("Response"))
    }
}

pub struct BrowserScope(ServiceWorkerGlobalScope);

#[async_trait(?Send)]
impl WorkerScope for BrowserScope {
    type Storage = BrowserStorage;

    fn storage(&self) -> WorkerResult<BrowserStorage> {
        BrowserStorage::from_scope(&self.0)
    }

    async fn skip_waiting(&self) -> WorkerResult<()> {
        JsFuture::from(self.0.skip_waiting()?).await?;
        Ok(())
    }

    async fn claim_clients(&self) -> WorkerResult<()> {
        JsFuture::from(self.0.clients().claim()).await?;
        Ok(())
    }
}

// =============================================================================
// Event handlers
// =============================================================================

fn global_scope() -> ServiceWorkerGlobalScope {
    js_sys::global().unchecked_into()
}

/// `install`: pre-cache the static assets, then replace any waiting worker.
#[wasm_bindgen]
pub fn on_install() -> js_sys::Promise {
    let scope = BrowserScope(global_scope());

    future_to_promise(async move {
        install_and_skip_waiting(&scope).await?;
        Ok(JsValue::UNDEFINED)
    })
}

/// `activate`: drop stale cache versions and take control of open pages.
#[wasm_bindgen]
pub fn on_activate() -> js_sys::Promise {
    let scope = BrowserScope(global_scope());

    future_to_promise(async move {
        activate_and_claim(&scope).await?;
        Ok(JsValue::UNDEFINED)
    })
}

/// `fetch`: answer intercepted GET requests cache-first.
///
/// Must run synchronously inside the event dispatch; bypassed requests
/// return without calling `respondWith`.
#[wasm_bindgen]
pub fn on_fetch(event: FetchEvent) {
    let request = event.request();
    if route(&request.method(), &request.url()) == Route::Passthrough {
        log::debug!("Service Worker: passthrough {} {}", request.method(), request.url());
        return;
    }

    let scope = global_scope();
    let promise = future_to_promise(async move {
        let storage = BrowserStorage::from_scope(&scope)?;
        let cache = storage.open(CACHE_NAME).await?;
        let served = respond(&request, &cache, &BrowserNetwork(scope)).await?;

        log::debug!("Service Worker: {} from {}", request.url(), served.source());
        Ok(served.into_response().into())
    });

    if let Err(e) = event.respond_with(&promise) {
        log::warn!("Service Worker: respondWith failed: {}", WorkerError::from(e));
    }
}
