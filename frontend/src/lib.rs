//! Aviation Traceability - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend presenting the traceability system and
//! uploading batches of certificate PDFs to the processing backend.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (anchors, health badge)                              │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (title, description)                              │
//! │  ├── Sections (features, upload, API samples, structure)    │
//! │  └── ToastHost (notifications, shortcuts)                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer (load time)                                          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (BatchResponse, SubmitOutcome, errors, etc.)
//! - [`state`] - Upload state machine, independent of the DOM
//! - [`enhance`] - Helpers behind the landing page behaviors
//! - [`components`] - UI components (Header, Upload, Toasts, etc.)
//! - [`services`] - Backend and browser API calls

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod state;
pub mod enhance;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Notices
    NoticeKind,
    // API
    BatchResponse, HealthResponse, HealthStatus,
    // Outcomes
    BatchSummary, SubmitOutcome,
    // Errors
    AppError, AppResult, UploadError,
};

// Upload workflow
pub use state::{submit_batch, BatchUploader, PendingFile, UploadState};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Start the application: logging, offline worker, then the Leptos tree.
///
/// Called from the trunk binary in `main.rs`.
pub fn run_app() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🛩️ Aviation Traceability - Starting Leptos App");

    spawn_local(register_service_worker());

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

const ENDPOINT_SAMPLES: [&str; 4] = [
    "POST /process-pdf-batch",
    "POST /process-pdf",
    "GET /health",
    "GET /api/docs",
];

#[component]
fn MainContent() -> impl IntoView {
    provide_toasts();

    view! {
        <Header/>

        <div class="container content">
            <Hero/>

            <Section index=0 id="features" title="Features">
                <div class="feature-grid">
                    <FeatureCard
                        icon="📑"
                        title="Certificate extraction"
                        description="Reads FAA 8130-3 and EASA Form 1 fields from scanned or digital PDFs."
                    />
                    <FeatureCard
                        icon="🔗"
                        title="Traceability chain"
                        description="Classifies each document by source: OEM, Part 121, 129, 135 or 145."
                    />
                    <FeatureCard
                        icon="⚡"
                        title="Batch processing"
                        description="Processes many documents in parallel and publishes a batch dashboard."
                    />
                </div>
            </Section>

            <Section index=1 id="upload" title="Process Documents">
                <UploadSection/>
            </Section>

            <Section index=2 id="api" title="API">
                {ENDPOINT_SAMPLES
                    .iter()
                    .map(|sample| view! { <CodeSample code=*sample/> })
                    .collect_view()}
            </Section>

            <Section index=3 id="structure" title="Project Structure">
                <div class="file-tree">
                    <FolderNode name="public">
                        <FolderNode name="css">
                            <FileNode name="styles.css"/>
                            <FileNode name="main.css"/>
                        </FolderNode>
                        <FolderNode name="js" open=false>
                            <FileNode name="traceability-frontend.js"/>
                            <FileNode name="traceability_sw.js"/>
                        </FolderNode>
                        <FileNode name="index.html"/>
                        <FileNode name="main.html"/>
                        <FileNode name="sw.js"/>
                    </FolderNode>
                    <FolderNode name="reports" open=false>
                        <FileNode name="batch_dashboard_*.html"/>
                    </FolderNode>
                </div>
            </Section>
        </div>

        <ToastHost/>
        <Footer/>
    }
}
