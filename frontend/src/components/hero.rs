//! Hero section component

use leptos::*;

use crate::components::AnchorLink;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"✈️ Aviation Traceability"</h1>
            <p class="subtitle">
                "Upload airworthiness certificates (FAA 8130-3, EASA Form 1) and release documents. "
                "Each PDF is analyzed for part, serial and traceability data, and the batch is "
                "summarized in a compliance dashboard."
            </p>
            <AnchorLink href="#upload">
                <span class="cta-button">"Start processing"</span>
            </AnchorLink>
        </div>
    }
}
