//! Application configuration.
//!
//! Centralized configuration for the traceability frontend.
//! Endpoints are relative: the page is always served by the same
//! FastAPI process that exposes them.

/// Batch processing endpoint.
///
/// Receives a multipart body with one part per PDF.
pub const PROCESS_BATCH_ENDPOINT: &str = "/process-pdf-batch";

/// Multipart field name shared by every uploaded file.
pub const UPLOAD_FIELD_NAME: &str = "files";

/// Health check endpoint, polled once at load.
pub const HEALTH_ENDPOINT: &str = "/health";

/// Service worker script.
///
/// Lives under `/public/` so its scope covers the cached assets.
pub const SERVICE_WORKER_URL: &str = "/public/sw.js";

/// How long a toast notification stays on screen (in milliseconds).
pub const TOAST_DURATION_MS: u32 = 3_000;

/// How long a feature card stays pressed (in milliseconds).
pub const PRESS_FEEDBACK_MS: u32 = 150;

/// Delay between two consecutive section reveal animations (in seconds).
pub const SECTION_STAGGER_SECS: f64 = 0.1;

/// Application name, used in the document title.
pub const APP_NAME: &str = "Aviation Traceability";
