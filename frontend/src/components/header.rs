use leptos::*;

use crate::components::{AnchorLink, HealthBadge};

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <div class="header-left">
                <a href="/" class="logo">"🛩️ AVIATION TRACEABILITY"</a>
                <nav class="header-nav">
                    <AnchorLink href="#features">"Features"</AnchorLink>
                    <AnchorLink href="#upload">"Upload"</AnchorLink>
                    <AnchorLink href="#api">"API"</AnchorLink>
                    <AnchorLink href="#structure">"Structure"</AnchorLink>
                </nav>
            </div>
            <div class="header-right">
                <HealthBadge/>
            </div>
        </header>
    }
}
