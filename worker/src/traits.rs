//! Seams between the caching policy and the browser.
//!
//! The policy in [`crate::policy`] and the lifecycle steps in
//! [`crate::lifecycle`] only see these traits. [`crate::browser`]
//! implements them over `web_sys`; tests use in-memory fakes.

use async_trait::async_trait;

use crate::error::WorkerResult;

/// `Response.type` as far as caching is concerned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResponseKind {
    /// Same-origin response.
    Basic,
    Cors,
    Opaque,
    Error,
    Other,
}

pub trait AssetRequest {
    fn method(&self) -> String;
    fn url(&self) -> String;
    /// True for top-level page navigations.
    fn is_navigation(&self) -> bool;
}

pub trait AssetResponse: Sized {
    fn status(&self) -> u16;
    fn kind(&self) -> ResponseKind;
    /// Independent copy. A response body can only be consumed once, so
    /// the copy goes to the cache and the original to the page.
    fn duplicate(&self) -> WorkerResult<Self>;
}

/// One named cache.
#[async_trait(?Send)]
pub trait AssetCache {
    type Request: AssetRequest;
    type Response: AssetResponse;

    async fn match_request(&self, request: &Self::Request) -> WorkerResult<Option<Self::Response>>;

    async fn match_url(&self, url: &str) -> WorkerResult<Option<Self::Response>>;

    async fn put(&self, request: &Self::Request, response: Self::Response) -> WorkerResult<()>;

    /// Fetch and store every URL. Stores nothing if any fetch fails.
    async fn add_all(&self, urls: &[&str]) -> WorkerResult<()>;
}

#[async_trait(?Send)]
pub trait Network {
    type Request;
    type Response;

    async fn fetch(&self, request: &Self::Request) -> WorkerResult<Self::Response>;
}

/// The set of named caches of the origin.
#[async_trait(?Send)]
pub trait CacheStorage {
    type Cache: AssetCache;

    /// Open a cache, creating it when missing.
    async fn open(&self, name: &str) -> WorkerResult<Self::Cache>;

    async fn keys(&self) -> WorkerResult<Vec<String>>;

    /// Returns whether a cache with that name existed.
    async fn delete(&self, name: &str) -> WorkerResult<bool>;
}

/// The worker's global scope, as far as the lifecycle events need it.
#[async_trait(?Send)]
pub trait WorkerScope {
    type Storage: CacheStorage;

    fn storage(&self) -> WorkerResult<Self::Storage>;

    /// `skipWaiting()`: replace the previous worker without waiting for
    /// its pages to close.
    async fn skip_waiting(&self) -> WorkerResult<()>;

    /// `clients.claim()`: control the pages that are already open.
    async fn claim_clients(&self) -> WorkerResult<()>;
}
