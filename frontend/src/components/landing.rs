//! Building blocks of the landing page and their small interactions:
//! staggered sections, pressable feature cards, smooth in-page anchors,
//! copyable code samples and a collapsible folder tree.

use gloo_timers::callback::Timeout;
use leptos::*;

use crate::components::use_toasts;
use crate::config::PRESS_FEEDBACK_MS;
use crate::enhance::{anchor_selector, animation_delay, smooth_scroll_to, PRESSED_TRANSFORM};
use crate::services::copy_to_clipboard;
use crate::types::{AppResult, NoticeKind};

/// Content section whose reveal animation is delayed by its position.
#[component]
pub fn Section(
    /// Position among the page sections, drives the animation delay
    index: usize,
    #[prop(into)] id: String,
    #[prop(into)] title: String,
    children: Children,
) -> impl IntoView {
    view! {
        <section id=id class="fade-in" style=animation_delay(index)>
            <h2>{title}</h2>
            {children()}
        </section>
    }
}

/// Feature card that shrinks briefly when clicked.
#[component]
pub fn FeatureCard(
    #[prop(into)] icon: String,
    #[prop(into)] title: String,
    #[prop(into)] description: String,
) -> impl IntoView {
    let (pressed, set_pressed) = create_signal(false);

    let on_click = move |_| {
        set_pressed.set(true);
        Timeout::new(PRESS_FEEDBACK_MS, move || set_pressed.set(false)).forget();
    };

    view! {
        <div
            class="feature-card"
            style:transform=move || pressed.get().then_some(PRESSED_TRANSFORM)
            on:click=on_click
        >
            <div class="feature-icon">{icon}</div>
            <h3>{title}</h3>
            <p>{description}</p>
        </div>
    }
}

/// In-page link scrolling smoothly to its target instead of jumping.
#[component]
pub fn AnchorLink(#[prop(into)] href: String, children: Children) -> impl IntoView {
    let target = href.clone();

    let on_click = move |ev: ev::MouseEvent| {
        ev.prevent_default();
        if let Some(selector) = anchor_selector(&target) {
            if !smooth_scroll_to(selector) {
                log::debug!("No element matches {}", selector);
            }
        }
    };

    view! {
        <a href=href on:click=on_click>{children()}</a>
    }
}

/// Toast shown after a copy attempt.
fn copy_notice(result: &AppResult<()>) -> (&'static str, NoticeKind) {
    match result {
        Ok(()) => ("URL copied to clipboard!", NoticeKind::Success),
        Err(_) => ("Failed to copy URL", NoticeKind::Error),
    }
}

/// Code sample copied to the clipboard on click.
#[component]
pub fn CodeSample(#[prop(into)] code: String) -> impl IntoView {
    let toasts = use_toasts();
    let text = store_value(code.clone());

    let on_click = move |_| {
        let text = text.get_value();
        spawn_local(async move {
            let result = copy_to_clipboard(&text).await;
            if let Err(e) = &result {
                log::warn!("{}", e);
            }
            let (message, kind) = copy_notice(&result);
            toasts.show(message, kind);
        });
    };

    view! {
        <div class="example">
            <code title="Click to copy URL" style="cursor: pointer;" on:click=on_click>
                {code}
            </code>
        </div>
    }
}

/// Folder of the project tree; clicking its label shows or hides its contents.
#[component]
pub fn FolderNode(
    #[prop(into)] name: String,
    #[prop(default = true)] open: bool,
    children: Children,
) -> impl IntoView {
    let (expanded, set_expanded) = create_signal(open);

    // Nested folders must not toggle their parents.
    let toggle = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        set_expanded.update(|expanded| *expanded = !*expanded);
    };

    view! {
        <div class="folder">
            <span class="folder-label" on:click=toggle>
                <span class="folder-icon">"📁"</span>
                " " {name}
            </span>
            <div
                class="folder-contents"
                style:display=move || if expanded.get() { "block" } else { "none" }
            >
                {children()}
            </div>
        </div>
    }
}

/// Leaf of the project tree.
#[component]
pub fn FileNode(#[prop(into)] name: String) -> impl IntoView {
    view! {
        <div class="file">"📄 " {name}</div>
    }
}
