//! Install and activate steps of the worker lifecycle.

use crate::config::{CACHE_NAME, STATIC_ASSETS};
use crate::error::WorkerResult;
use crate::traits::{AssetCache, CacheStorage, WorkerScope};

async fn populate<S: CacheStorage>(storage: &S) -> WorkerResult<()> {
    let cache = storage.open(CACHE_NAME).await?;
    cache.add_all(&STATIC_ASSETS).await
}

/// Pre-cache [`STATIC_ASSETS`] under [`CACHE_NAME`].
///
/// A failure is logged and swallowed so installation always completes.
/// Returns whether the assets were stored.
pub async fn install<S: CacheStorage>(storage: &S) -> bool {
    log::info!("✈️ Service Worker: Caching static assets");

    match populate(storage).await {
        Ok(()) => true,
        Err(e) => {
            log::warn!("Service Worker: Cache failed: {}", e);
            false
        }
    }
}

/// Delete every cache not named [`CACHE_NAME`] and return their names.
pub async fn activate<S: CacheStorage>(storage: &S) -> WorkerResult<Vec<String>> {
    let mut deleted = Vec::new();

    for name in storage.keys().await? {
        if name == CACHE_NAME {
            continue;
        }
        log::info!("Service Worker: Deleting old cache {}", name);
        if storage.delete(&name).await? {
            deleted.push(name);
        }
    }

    Ok(deleted)
}

/// `install` event: cache what can be cached, then supersede the waiting
/// worker whatever happened to the cache.
pub async fn install_and_skip_waiting<W: WorkerScope>(scope: &W) -> WorkerResult<()> {
    match scope.storage() {
        Ok(storage) => {
            install(&storage).await;
        }
        Err(e) => log::warn!("Service Worker: Cache storage unavailable: {}", e),
    }

    scope.skip_waiting().await
}

/// `activate` event: clean up old caches, then claim the open pages.
/// A failed cleanup is logged and does not prevent the claim.
pub async fn activate_and_claim<W: WorkerScope>(scope: &W) -> WorkerResult<()> {
    let cleanup = match scope.storage() {
        Ok(storage) => activate(&storage).await,
        Err(e) => Err(e),
    };

    match cleanup {
        Ok(deleted) => {
            log::info!("✈️ Service Worker: active, {} stale cache(s) removed", deleted.len())
        }
        Err(e) => log::warn!("Service Worker: Cache cleanup failed: {}", e),
    }

    scope.claim_clients().await
}
