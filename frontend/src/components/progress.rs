use leptos::*;

/// In-flight panel shown while a batch is being processed.
#[component]
pub fn ProgressPanel(title: String, body: String) -> impl IntoView {
    view! {
        <div id="status" class="processing">
            <h3>{title}</h3>
            <p>{body}</p>
            <div class="progress-bar">
                <div class="progress-bar-fill"></div>
            </div>
        </div>
    }
}
