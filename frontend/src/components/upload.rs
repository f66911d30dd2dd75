//! Multi-file PDF upload with drag & drop support.
//!
//! Holds the selection in an [`UploadState`] signal, submits it through
//! [`submit_batch`] and renders the processing, success and failure panels.

use leptos::*;
use web_sys::{File, FileList, HtmlInputElement};

use crate::components::ProgressPanel;
use crate::enhance::format_file_size;
use crate::services::HttpUploader;
use crate::state::{submit_batch, PendingFile, UploadState};
use crate::types::{BatchSummary, SubmitOutcome, UploadError};

fn collect_files(list: Option<FileList>) -> Vec<File> {
    list.map(|list| (0..list.length()).filter_map(|i| list.get(i)).collect())
        .unwrap_or_default()
}

#[component]
pub fn UploadSection() -> impl IntoView {
    let state = create_rw_signal(UploadState::<File>::Idle);
    let outcome = create_rw_signal(None::<SubmitOutcome>);
    let (drag_over, set_drag_over) = create_signal(false);
    let file_input = create_node_ref::<html::Input>();

    let select = move |files: Vec<File>| {
        state.update(|s| *s = s.select(files));
        log::debug!("{} PDF file(s) selected", state.with_untracked(|s| s.len()));
    };

    let on_file_change = move |ev: ev::Event| {
        let input: HtmlInputElement = event_target(&ev);
        select(collect_files(input.files()));
    };

    let on_drop = move |ev: ev::DragEvent| {
        ev.prevent_default();
        set_drag_over.set(false);
        select(collect_files(ev.data_transfer().and_then(|dt| dt.files())));
    };

    let on_drag_over = move |ev: ev::DragEvent| {
        ev.prevent_default();
        set_drag_over.set(true);
    };

    let open_picker = move |_| {
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let current = state.get_untracked();

        spawn_local(async move {
            let result = submit_batch(&current, &HttpUploader, |submitting| {
                outcome.set(None);
                state.set(submitting.clone());
            })
            .await;

            match result {
                Ok((next, finished)) => {
                    if finished.is_success() {
                        if let Some(input) = file_input.get_untracked() {
                            input.set_value("");
                        }
                    }
                    state.set(next);
                    outcome.set(Some(finished));
                }
                Err(UploadError::EmptySelection) => {
                    let message = UploadError::EmptySelection.to_string();
                    let _ = gloo_utils::window().alert_with_message(&message);
                }
                Err(e) => log::debug!("Submit ignored: {}", e),
            }
        });
    };

    let selected_files = move || {
        state.with(|s| {
            s.files()
                .iter()
                .enumerate()
                .map(|(index, file)| {
                    view! {
                        <div class="selected-file">
                            <div class="selected-file-name">{file.name()}</div>
                            <div class="selected-file-size">{format_file_size(file.size())}</div>
                            <button
                                type="button"
                                class="remove-file"
                                disabled=move || state.with(|s| s.is_submitting())
                                on:click=move |_| state.update(|s| *s = s.remove(index))
                            >
                                "×"
                            </button>
                        </div>
                    }
                })
                .collect_view()
        })
    };

    let status_panel = move || {
        if state.with(|s| s.is_submitting()) {
            let (title, body) = state.with(|s| s.progress_copy());
            return view! { <ProgressPanel title=title body=body/> }.into_view();
        }
        match outcome.get() {
            Some(SubmitOutcome::Completed(summary)) => {
                view! { <BatchSummaryCard summary=summary/> }.into_view()
            }
            Some(failed) => {
                let message = failed.failure_message().unwrap_or_default();
                view! { <FailureCard message=message/> }.into_view()
            }
            None => ().into_view(),
        }
    };

    view! {
        <form id="uploadForm" class="upload-form" on:submit=on_submit>
            <div
                id="dropZone"
                class="drop-zone"
                class:drag-over=move || drag_over.get()
                on:click=open_picker
                on:dragover=on_drag_over
                on:dragleave=move |_| set_drag_over.set(false)
                on:drop=on_drop
            >
                <div class="drop-zone-icon">"📄"</div>
                <div class="drop-zone-text">{move || state.with(|s| s.drop_zone_text())}</div>
                <div class="drop-zone-hint">{move || state.with(|s| s.drop_zone_hint())}</div>
            </div>

            <input
                type="file"
                id="fileInput"
                accept=".pdf"
                multiple=true
                style="display:none"
                node_ref=file_input
                on:change=on_file_change
            />

            <Show when=move || state.with(|s| !s.is_empty()) fallback=|| ()>
                <div id="selectedFiles" class="selected-files">
                    {selected_files}
                </div>
            </Show>

            <button
                type="submit"
                id="processButton"
                class="process-button"
                disabled=move || !state.with(|s| s.can_submit())
            >
                {move || if state.with(|s| s.is_submitting()) {
                    "⏳ Processing..."
                } else {
                    "🚀 Process Documents"
                }}
            </button>
        </form>

        {status_panel}
    }
}

#[component]
fn Stat(value: String, label: &'static str, color: &'static str) -> impl IntoView {
    view! {
        <div class="stat">
            <div class="stat-value" style=format!("color: {};", color)>{value}</div>
            <div class="stat-label">{label}</div>
        </div>
    }
}

/// Success card with the batch statistics and the dashboard link.
#[component]
fn BatchSummaryCard(summary: BatchSummary) -> impl IntoView {
    view! {
        <div id="status" class="success">
            <h3>"✅ Batch Processing Complete!"</h3>
            <div class="stats-grid">
                <Stat value=summary.total_files.to_string() label="Total Files" color="#007bff"/>
                <Stat value=summary.successful_files.to_string() label="Successful" color="#28a745"/>
                <Stat value=summary.failed_files.to_string() label="Failed" color="#dc3545"/>
                <Stat value=summary.success_rate_label() label="Success Rate" color="#17a2b8"/>
            </div>
            <p class="processing-time">{summary.duration_label()}</p>
            {summary.dashboard_url.clone().map(|url| view! {
                <a href=url target="_blank" class="dashboard-link">"📊 View Batch Dashboard"</a>
            })}
        </div>
    }
}

/// Failure card; the only recovery offered is a full reload.
#[component]
fn FailureCard(message: String) -> impl IntoView {
    let reload = move |_| {
        if let Err(e) = gloo_utils::window().location().reload() {
            log::error!("Reload failed: {:?}", e);
        }
    };

    view! {
        <div id="status" class="error">
            <h3>"❌ Processing Failed"</h3>
            <p>{message}</p>
            <button type="button" class="retry-button" on:click=reload>"Try Again"</button>
        </div>
    }
}
