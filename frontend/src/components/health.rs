//! Backend status badge.

use leptos::*;

use crate::enhance::{inject_styles, STATUS_STYLES};
use crate::services::check_health;

/// Probes `/health` once and shows the result as a colored badge.
#[component]
pub fn HealthBadge() -> impl IntoView {
    let status = create_local_resource(|| (), |_| check_health());

    move || {
        status.get().map(|status| {
            inject_styles("status-styles", STATUS_STYLES);
            let kind = status.kind();
            log::info!("🩺 Backend status: {}", status.label());

            view! {
                <div class=format!("status-indicator {}", kind.css_class())>
                    <span class="status-icon">{kind.icon()}</span>
                    <span class="status-text">{status.label()}</span>
                </div>
            }
        })
    }
}
