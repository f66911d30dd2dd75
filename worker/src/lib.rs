//! Offline cache worker for the aviation traceability site.
//!
//! Compiled to WebAssembly and driven by the `js/sw.js` loader, which
//! forwards the service worker events to the exported handlers.
//!
//! # Lifecycle
//!
//! ```text
//! install  ──▶ cache STATIC_ASSETS under CACHE_NAME, then always skipWaiting()
//! activate ──▶ delete every other cache, then always clients.claim()
//! fetch    ──▶ GET outside BYPASS_PATTERNS: cache ▸ network ▸ offline page
//! ```
//!
//! # Modules
//!
//! - [`config`] - Cache name, asset list, bypass patterns
//! - [`traits`] - Cache, storage and network abstractions
//! - [`policy`] - Routing and cache-first response logic
//! - [`lifecycle`] - Install and activate steps
//! - [`browser`] - `web_sys` bindings and event handlers

use wasm_bindgen::prelude::*;

pub mod config;
pub mod error;
pub mod traits;
pub mod policy;
pub mod lifecycle;
pub mod browser;

#[cfg(test)]
mod memory;

pub use config::*;
pub use error::{WorkerError, WorkerResult};
pub use lifecycle::{activate, activate_and_claim, install, install_and_skip_waiting};
pub use policy::{is_cacheable, respond, route, Route, Served};
pub use traits::{
    AssetCache, AssetRequest, AssetResponse, CacheStorage, Network, ResponseKind, WorkerScope,
};

/// Runs once when the loader instantiates the module.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("✈️ Service Worker: wasm module ready ({})", CACHE_NAME);
}
