//! Footer component

use leptos::*;

/// Milliseconds since navigation start, rounded.
fn elapsed_ms() -> Option<u64> {
    let performance = gloo_utils::window().performance()?;
    Some(performance.now().round() as u64)
}

#[component]
pub fn Footer() -> impl IntoView {
    let (load_time, set_load_time) = create_signal(None::<u64>);

    let record = move || {
        if let Some(ms) = elapsed_ms() {
            log::info!("🚀 Page loaded in {}ms", ms);
            set_load_time.set(Some(ms));
        }
    };

    // The wasm module may mount after `load` has already fired.
    if gloo_utils::document().ready_state() == "complete" {
        record();
    } else {
        let _ = window_event_listener(ev::load, move |_| record());
    }

    view! {
        <footer class="footer">
            <div>"Aviation Traceability System • Powered by " <span class="rust-badge">"🦀 Rust + Leptos"</span></div>
            <div class="footer-links">
                <a href="/docs" class="footer-link" target="_blank">"API Docs"</a>
                <a href="/health" class="footer-link" target="_blank">"Health"</a>
            </div>
            {move || load_time.get().map(|ms| view! {
                <div class="load-time">{format!("Page loaded in {}ms", ms)}</div>
            })}
        </footer>
    }
}
