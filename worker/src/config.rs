//! Worker configuration.
//!
//! Bump [`CACHE_NAME`] on every deployment that changes a static asset:
//! activation deletes every cache with another name.

/// Version identifier of the asset cache.
pub const CACHE_NAME: &str = "aviation-traceability-v1";

/// Assets stored at install time.
///
/// `trunk build` in `frontend/` produces both pages and the `js/` bundle
/// (no file hashes); the stylesheets are deployed next to them.
pub const STATIC_ASSETS: [&str; 6] = [
    "/public/css/styles.css",
    "/public/css/main.css",
    "/public/js/traceability-frontend.js",
    "/public/js/traceability-frontend_bg.wasm",
    "/public/main.html",
    "/public/index.html",
];

/// URL substrings that are never intercepted.
///
/// Processing, API, docs and health traffic always goes to the network.
pub const BYPASS_PATTERNS: [&str; 4] = ["/process-pdf", "/api/", "/docs", "/health"];

/// Page served to navigations when both cache and network fail.
pub const OFFLINE_FALLBACK: &str = "/public/index.html";
