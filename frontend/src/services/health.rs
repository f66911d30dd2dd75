//! Backend health probe.

use gloo_net::http::Request;

use crate::config::HEALTH_ENDPOINT;
use crate::types::{HealthResponse, HealthStatus};

/// Issue one `GET /health`. Never fails: errors map to `Unreachable`.
pub async fn check_health() -> HealthStatus {
    let response = match Request::get(HEALTH_ENDPOINT).send().await {
        Ok(response) => response,
        Err(e) => {
            log::warn!("Health check failed: {}", e);
            return HealthStatus::Unreachable;
        }
    };

    match response.json::<HealthResponse>().await {
        Ok(body) => HealthStatus::from_response(&body),
        Err(e) => {
            log::warn!("Health check returned an unreadable body: {}", e);
            HealthStatus::Unreachable
        }
    }
}
