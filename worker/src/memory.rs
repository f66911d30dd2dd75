//! In-memory cache storage and network used by the unit tests.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;

use async_trait::async_trait;

use crate::error::{WorkerError, WorkerResult};
use crate::traits::{
    AssetCache, AssetRequest, AssetResponse, CacheStorage, Network, ResponseKind, WorkerScope,
};

#[derive(Clone, Debug, PartialEq)]
pub struct FakeRequest {
    pub method: &'static str,
    pub url: String,
    pub navigate: bool,
}

impl FakeRequest {
    pub fn get(url: &str) -> Self {
        Self { method: "GET", url: url.to_string(), navigate: false }
    }

    pub fn navigate(url: &str) -> Self {
        Self { method: "GET", url: url.to_string(), navigate: true }
    }
}

impl AssetRequest for FakeRequest {
    fn method(&self) -> String {
        self.method.to_string()
    }

    fn url(&self) -> String {
        self.url.clone()
    }

    fn is_navigation(&self) -> bool {
        self.navigate
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FakeResponse {
    pub body: String,
    pub status: u16,
    pub kind: ResponseKind,
}

impl FakeResponse {
    pub fn ok(body: &str) -> Self {
        Self { body: body.to_string(), status: 200, kind: ResponseKind::Basic }
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    pub fn with_kind(mut self, kind: ResponseKind) -> Self {
        self.kind = kind;
        self
    }
}

impl AssetResponse for FakeResponse {
    fn status(&self) -> u16 {
        self.status
    }

    fn kind(&self) -> ResponseKind {
        self.kind
    }

    fn duplicate(&self) -> WorkerResult<Self> {
        Ok(self.clone())
    }
}

/// Origin server keyed by URL; unknown URLs fail like an offline fetch.
#[derive(Clone, Default)]
pub struct FakeNetwork {
    responses: Rc<RefCell<HashMap<String, FakeResponse>>>,
    calls: Rc<Cell<usize>>,
}

impl FakeNetwork {
    pub fn serve(&self, url: &str, response: FakeResponse) {
        self.responses.borrow_mut().insert(url.to_string(), response);
    }

    pub fn go_offline(&self) {
        self.responses.borrow_mut().clear();
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

#[async_trait(?Send)]
impl Network for FakeNetwork {
    type Request = FakeRequest;
    type Response = FakeResponse;

    async fn fetch(&self, request: &FakeRequest) -> WorkerResult<FakeResponse> {
        self.calls.set(self.calls.get() + 1);
        self.responses
            .borrow()
            .get(&request.url)
            .cloned()
            .ok_or_else(|| WorkerError::Js("Failed to fetch".to_string()))
    }
}

#[derive(Clone)]
pub struct MemoryCache {
    entries: Rc<RefCell<HashMap<String, FakeResponse>>>,
    origin: FakeNetwork,
}

impl MemoryCache {
    pub fn contains(&self, url: &str) -> bool {
        self.entries.borrow().contains_key(url)
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }
}

#[async_trait(?Send)]
impl AssetCache for MemoryCache {
    type Request = FakeRequest;
    type Response = FakeResponse;

    async fn match_request(&self, request: &FakeRequest) -> WorkerResult<Option<FakeResponse>> {
        self.match_url(&request.url).await
    }

    async fn match_url(&self, url: &str) -> WorkerResult<Option<FakeResponse>> {
        Ok(self.entries.borrow().get(url).cloned())
    }

    async fn put(&self, request: &FakeRequest, response: FakeResponse) -> WorkerResult<()> {
        self.entries.borrow_mut().insert(request.url.clone(), response);
        Ok(())
    }

    async fn add_all(&self, urls: &[&str]) -> WorkerResult<()> {
        let mut fetched = Vec::with_capacity(urls.len());
        for url in urls {
            let response = self.origin.fetch(&FakeRequest::get(url)).await?;
            if response.status != 200 {
                return Err(WorkerError::Cache(format!("{} answered {}", url, response.status)));
            }
            fetched.push((url.to_string(), response));
        }
        self.entries.borrow_mut().extend(fetched);
        Ok(())
    }
}

/// Named caches sharing one fake origin.
#[derive(Clone)]
pub struct MemoryStorage {
    caches: Rc<RefCell<BTreeMap<String, MemoryCache>>>,
    origin: FakeNetwork,
    listing_broken: Rc<Cell<bool>>,
}

impl MemoryStorage {
    pub fn new(origin: FakeNetwork) -> Self {
        Self { caches: Rc::default(), origin, listing_broken: Rc::default() }
    }

    /// Make `keys()` reject from now on.
    pub fn break_listing(&self) {
        self.listing_broken.set(true);
    }

    pub fn names(&self) -> Vec<String> {
        self.caches.borrow().keys().cloned().collect()
    }
}

#[async_trait(?Send)]
impl CacheStorage for MemoryStorage {
    type Cache = MemoryCache;

    async fn open(&self, name: &str) -> WorkerResult<MemoryCache> {
        let mut caches = self.caches.borrow_mut();
        let cache = caches.entry(name.to_string()).or_insert_with(|| MemoryCache {
            entries: Rc::default(),
            origin: self.origin.clone(),
        });
        Ok(cache.clone())
    }

    async fn keys(&self) -> WorkerResult<Vec<String>> {
        if self.listing_broken.get() {
            return Err(WorkerError::Js("caches.keys() rejected".to_string()));
        }
        Ok(self.names())
    }

    async fn delete(&self, name: &str) -> WorkerResult<bool> {
        Ok(self.caches.borrow_mut().remove(name).is_some())
    }
}

/// Global scope recording the lifecycle calls made on it.
#[derive(Clone, Default)]
pub struct FakeScope {
    storage: Option<MemoryStorage>,
    skipped: Rc<Cell<bool>>,
    claimed: Rc<Cell<bool>>,
}

impl FakeScope {
    pub fn new(storage: MemoryStorage) -> Self {
        Self { storage: Some(storage), ..Self::default() }
    }

    /// Scope whose `caches` is unavailable.
    pub fn without_storage() -> Self {
        Self::default()
    }

    pub fn skipped_waiting(&self) -> bool {
        self.skipped.get()
    }

    pub fn claimed_clients(&self) -> bool {
        self.claimed.get()
    }
}

#[async_trait(?Send)]
impl WorkerScope for FakeScope {
    type Storage = MemoryStorage;

    fn storage(&self) -> WorkerResult<MemoryStorage> {
        self.storage
            .clone()
            .ok_or_else(|| WorkerError::Js("caches is not defined".to_string()))
    }

    async fn skip_waiting(&self) -> WorkerResult<()> {
        self.skipped.set(true);
        Ok(())
    }

    async fn claim_clients(&self) -> WorkerResult<()> {
        self.claimed.set(true);
        Ok(())
    }
}
