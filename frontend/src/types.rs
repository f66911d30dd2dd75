//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **Notice Types** - Badge and toast styling
//! - **API Types** - Backend response structures
//! - **Outcome Types** - What a batch submission ended with
//! - **Error Types** - Frontend error handling

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

// =============================================================================
// Notice Types
// =============================================================================

/// Visual tone of a status badge or toast notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Warning,
    Error,
    Info,
}

impl NoticeKind {
    /// CSS modifier class (`status-indicator success`, `notification error`, ...).
    pub fn css_class(&self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Warning => "warning",
            NoticeKind::Error => "error",
            NoticeKind::Info => "info",
        }
    }

    /// Icon shown in front of the message.
    pub fn icon(&self) -> &'static str {
        match self {
            NoticeKind::Success => "✅",
            NoticeKind::Warning => "⚠️",
            NoticeKind::Error => "❌",
            NoticeKind::Info => "ℹ️",
        }
    }
}

// =============================================================================
// API Response Types
// =============================================================================

/// Body of `GET /health`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// Health of the backend as shown by the header badge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HealthStatus {
    /// Backend reported `"healthy"`.
    Healthy,
    /// Backend answered with any other status.
    Degraded(String),
    /// Request or JSON parsing failed.
    Unreachable,
}

impl HealthStatus {
    pub fn from_response(response: &HealthResponse) -> Self {
        if response.status == "healthy" {
            HealthStatus::Healthy
        } else {
            HealthStatus::Degraded(response.status.clone())
        }
    }

    pub fn kind(&self) -> NoticeKind {
        match self {
            HealthStatus::Healthy => NoticeKind::Success,
            HealthStatus::Degraded(_) => NoticeKind::Warning,
            HealthStatus::Unreachable => NoticeKind::Error,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HealthStatus::Healthy => "System Online",
            HealthStatus::Degraded(_) => "System Issues",
            HealthStatus::Unreachable => "System Offline",
        }
    }
}

/// Body of `POST /process-pdf-batch`.
///
/// Every field except `success` is optional on the wire: failures only
/// carry a `message`, and framework-level errors only carry `detail`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct BatchResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub batch_id: Option<String>,
    #[serde(default)]
    pub total_files: usize,
    #[serde(default)]
    pub successful_files: usize,
    #[serde(default)]
    pub failed_files: usize,
    #[serde(default)]
    pub total_processing_time: f64,
    #[serde(default)]
    pub dashboard_url: Option<String>,
    #[serde(default)]
    pub detail: Option<Value>,
}

impl BatchResponse {
    /// Classify the response into what the widget renders.
    pub fn into_outcome(self) -> SubmitOutcome {
        if self.success {
            return SubmitOutcome::Completed(BatchSummary {
                total_files: self.total_files,
                successful_files: self.successful_files,
                failed_files: self.failed_files,
                total_processing_time: self.total_processing_time,
                dashboard_url: self.dashboard_url,
            });
        }

        let message = self
            .message
            .or_else(|| {
                self.detail.map(|detail| match detail {
                    Value::String(text) => text,
                    other => other.to_string(),
                })
            })
            .unwrap_or_else(|| "Processing failed".to_string());
        SubmitOutcome::Rejected(message)
    }
}

// =============================================================================
// Outcome Types
// =============================================================================

/// Statistics rendered on the success card.
#[derive(Clone, Debug, PartialEq)]
pub struct BatchSummary {
    pub total_files: usize,
    pub successful_files: usize,
    pub failed_files: usize,
    /// Seconds, as reported by the backend.
    pub total_processing_time: f64,
    pub dashboard_url: Option<String>,
}

impl BatchSummary {
    /// Percentage of successful files, rounded to the nearest integer.
    pub fn success_rate(&self) -> u32 {
        if self.total_files == 0 {
            return 0;
        }
        (self.successful_files as f64 / self.total_files as f64 * 100.0).round() as u32
    }

    pub fn success_rate_label(&self) -> String {
        format!("{}%", self.success_rate())
    }

    pub fn duration_label(&self) -> String {
        format!(
            "Processing completed in {} seconds",
            self.total_processing_time
        )
    }
}

/// How a batch submission ended.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    /// Backend answered `success: true`.
    Completed(BatchSummary),
    /// Backend answered `success: false` with a message.
    Rejected(String),
    /// The request never produced a usable JSON body.
    ConnectionError(String),
}

impl SubmitOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmitOutcome::Completed(_))
    }

    /// Text shown on the failure card, `None` on success.
    pub fn failure_message(&self) -> Option<String> {
        match self {
            SubmitOutcome::Completed(_) => None,
            SubmitOutcome::Rejected(message) => Some(message.clone()),
            SubmitOutcome::ConnectionError(error) => Some(format!("Connection Error: {}", error)),
        }
    }
}

impl From<AppResult<BatchResponse>> for SubmitOutcome {
    fn from(result: AppResult<BatchResponse>) -> Self {
        match result {
            Ok(response) => response.into_outcome(),
            Err(e) => SubmitOutcome::ConnectionError(e.to_string()),
        }
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
#[derive(Clone, Debug, Error)]
pub enum AppError {
    /// Network failure or unreadable response body.
    #[error("{0}")]
    Connection(String),

    /// Clipboard API missing or permission denied.
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// A DOM call threw.
    #[error("DOM error: {0}")]
    Dom(String),

    /// `navigator.serviceWorker.register` rejected.
    #[error("Service worker error: {0}")]
    ServiceWorker(String),
}

/// Submission rejected before any request was built.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("Please select PDF file(s)")]
    EmptySelection,

    #[error("A batch is already being processed")]
    AlreadySubmitting,
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_response_renders_rate() {
        let json = r#"{
            "success": true,
            "message": "Batch processing completed. 8 successful, 2 failed.",
            "batch_id": "batch_20250101_120000",
            "total_files": 10,
            "successful_files": 8,
            "failed_files": 2,
            "processing_results": [],
            "total_processing_time": 42.17,
            "dashboard_url": "/reports/batch_dashboard_20250101.html"
        }"#;

        let response: BatchResponse = serde_json::from_str(json).unwrap();
        let outcome = response.into_outcome();

        match outcome {
            SubmitOutcome::Completed(summary) => {
                assert_eq!(summary.success_rate_label(), "80%");
                assert_eq!(summary.failed_files, 2);
                assert_eq!(
                    summary.duration_label(),
                    "Processing completed in 42.17 seconds"
                );
                assert_eq!(
                    summary.dashboard_url.as_deref(),
                    Some("/reports/batch_dashboard_20250101.html")
                );
            }
            other => panic!("expected completed outcome, got {:?}", other),
        }
    }

    #[test]
    fn test_failure_response_keeps_server_message() {
        let response: BatchResponse =
            serde_json::from_str(r#"{"success": false, "message": "Invalid PDF"}"#).unwrap();
        let outcome = response.into_outcome();

        assert!(!outcome.is_success());
        assert!(outcome.failure_message().unwrap().contains("Invalid PDF"));
    }

    #[test]
    fn test_framework_error_uses_detail() {
        let response: BatchResponse =
            serde_json::from_str(r#"{"detail": "Only PDF files are supported"}"#).unwrap();
        assert_eq!(
            response.into_outcome(),
            SubmitOutcome::Rejected("Only PDF files are supported".into())
        );

        let empty = BatchResponse::default().into_outcome();
        assert_eq!(empty, SubmitOutcome::Rejected("Processing failed".into()));
    }

    #[test]
    fn test_connection_error_prefix() {
        let result: AppResult<BatchResponse> =
            Err(AppError::Connection("Failed to fetch".into()));
        let outcome = SubmitOutcome::from(result);

        assert_eq!(
            outcome.failure_message().as_deref(),
            Some("Connection Error: Failed to fetch")
        );
    }

    #[test]
    fn test_success_rate_rounding() {
        let summary = BatchSummary {
            total_files: 3,
            successful_files: 2,
            failed_files: 1,
            total_processing_time: 1.0,
            dashboard_url: None,
        };
        assert_eq!(summary.success_rate(), 67);

        let empty = BatchSummary {
            total_files: 0,
            successful_files: 0,
            failed_files: 0,
            total_processing_time: 0.0,
            dashboard_url: None,
        };
        assert_eq!(empty.success_rate_label(), "0%");
    }

    #[test]
    fn test_health_status_mapping() {
        let healthy = HealthResponse { status: "healthy".into(), timestamp: None };
        let degraded = HealthResponse { status: "degraded".into(), timestamp: None };

        assert_eq!(HealthStatus::from_response(&healthy).kind(), NoticeKind::Success);
        assert_eq!(HealthStatus::from_response(&degraded).kind(), NoticeKind::Warning);
        assert_eq!(HealthStatus::Unreachable.kind(), NoticeKind::Error);
        assert_eq!(HealthStatus::Unreachable.label(), "System Offline");
    }
}
