//! UI Components for the traceability landing page.
//!
//! # Layout Components
//! - [`Header`] - Navigation bar with the backend status badge
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer with load time
//!
//! # Page Behaviors
//! - [`Section`], [`FeatureCard`], [`AnchorLink`], [`CodeSample`],
//!   [`FolderNode`] - Landing page building blocks
//! - [`HealthBadge`] - One-shot `/health` probe
//! - [`ToastHost`] - Transient notifications and keyboard shortcuts
//!
//! # Feature Components
//! - [`UploadSection`] - PDF batch upload with drag & drop
//! - [`ProgressPanel`] - In-flight processing indicator

mod header;
mod hero;
mod footer;
mod landing;
mod health;
mod toast;
mod upload;
mod progress;

pub use header::*;
pub use hero::*;
pub use footer::*;
pub use landing::*;
pub use health::*;
pub use toast::*;
pub use upload::*;
pub use progress::*;
