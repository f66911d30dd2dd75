//! Cache-first fetch policy.
//!
//! [`route`] decides whether a request is intercepted at all;
//! [`respond`] answers intercepted requests from the cache, then the
//! network, then the offline page.

use crate::config::{BYPASS_PATTERNS, OFFLINE_FALLBACK};
use crate::error::{WorkerError, WorkerResult};
use crate::traits::{AssetCache, AssetRequest, AssetResponse, Network, ResponseKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    /// Leave the request to the browser.
    Passthrough,
    /// Answer through [`respond`].
    CacheFirst,
}

/// Only GET requests outside the bypass list are intercepted.
///
/// Matching is by substring on the full URL.
pub fn route(method: &str, url: &str) -> Route {
    if !method.eq_ignore_ascii_case("GET") {
        return Route::Passthrough;
    }
    if BYPASS_PATTERNS.iter().any(|pattern| url.contains(pattern)) {
        return Route::Passthrough;
    }
    Route::CacheFirst
}

/// Only complete same-origin responses are stored.
pub fn is_cacheable<R: AssetResponse>(response: &R) -> bool {
    response.status() == 200 && response.kind() == ResponseKind::Basic
}

/// Where an intercepted response came from.
#[derive(Clone, Debug, PartialEq)]
pub enum Served<R> {
    Cache(R),
    Network(R),
    /// Offline page served in place of a failed navigation.
    Offline(R),
}

impl<R> Served<R> {
    pub fn into_response(self) -> R {
        match self {
            Served::Cache(r) | Served::Network(r) | Served::Offline(r) => r,
        }
    }

    pub fn source(&self) -> &'static str {
        match self {
            Served::Cache(_) => "cache",
            Served::Network(_) => "network",
            Served::Offline(_) => "offline fallback",
        }
    }
}

/// Answer `request` from `cache`, falling back to `network`.
///
/// Successful same-origin network responses are copied into `cache`
/// before being returned. When both fail, navigations get the cached
/// offline page and every other request gets the error.
pub async fn respond<C, N>(
    request: &C::Request,
    cache: &C,
    network: &N,
) -> WorkerResult<Served<C::Response>>
where
    C: AssetCache,
    N: Network<Request = C::Request, Response = C::Response>,
{
    match cache.match_request(request).await {
        Ok(Some(hit)) => return Ok(Served::Cache(hit)),
        Ok(None) => {}
        Err(e) => return offline_fallback(request, cache, e).await,
    }

    let response = match network.fetch(request).await {
        Ok(response) => response,
        Err(e) => return offline_fallback(request, cache, e).await,
    };

    if is_cacheable(&response) {
        let stored = match response.duplicate() {
            Ok(copy) => cache.put(request, copy).await,
            Err(e) => Err(e),
        };
        if let Err(e) = stored {
            log::warn!("Service Worker: could not cache {}: {}", request.url(), e);
        }
    }

    Ok(Served::Network(response))
}

async fn offline_fallback<C: AssetCache>(
    request: &C::Request,
    cache: &C,
    error: WorkerError,
) -> WorkerResult<Served<C::Response>> {
    if !request.is_navigation() {
        return Err(error);
    }

    log::warn!("Service Worker: {} failed ({}), serving offline page", request.url(), error);
    match cache.match_url(OFFLINE_FALLBACK).await {
        Ok(Some(page)) => Ok(Served::Offline(page)),
        _ => Err(WorkerError::Offline(request.url())),
    }
}
