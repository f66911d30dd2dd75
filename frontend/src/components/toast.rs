//! Transient toast notifications and the keyboard shortcuts acting on them.
//!
//! A [`Toasts`] handle is provided as context by the app root; any
//! component can call [`use_toasts`] and `show` a message. Toasts remove
//! themselves after [`TOAST_DURATION_MS`].

use gloo_timers::callback::Timeout;
use leptos::*;

use crate::config::TOAST_DURATION_MS;
use crate::enhance::{inject_styles, NOTIFICATION_STYLES};
use crate::types::NoticeKind;

/// A notification currently on screen.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: NoticeKind,
    pub message: String,
}

/// Shared handle to the toast stack.
#[derive(Clone, Copy)]
pub struct Toasts {
    items: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u32>,
}

impl Toasts {
    fn new() -> Self {
        Self {
            items: create_rw_signal(Vec::new()),
            next_id: store_value(0),
        }
    }

    /// Push a toast and schedule its removal.
    pub fn show(&self, message: impl Into<String>, kind: NoticeKind) {
        inject_styles("notification-styles", NOTIFICATION_STYLES);

        let id = self.next_id.get_value();
        self.next_id.set_value(id.wrapping_add(1));

        self.items.update(|items| {
            items.push(Toast {
                id,
                kind,
                message: message.into(),
            })
        });

        let items = self.items;
        Timeout::new(TOAST_DURATION_MS, move || {
            items.update(|items| items.retain(|toast| toast.id != id));
        })
        .forget();
    }

    /// Remove every toast immediately.
    pub fn dismiss_all(&self) {
        self.items.set(Vec::new());
    }
}

/// Create the toast stack and expose it to descendants.
pub fn provide_toasts() -> Toasts {
    let toasts = Toasts::new();
    provide_context(toasts);
    toasts
}

/// Toast stack provided by an ancestor.
pub fn use_toasts() -> Toasts {
    expect_context::<Toasts>()
}

/// Renders the toast stack and installs the global shortcuts:
/// `Escape` clears all toasts, `Ctrl/Cmd+K` announces the upcoming search.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_toasts();

    let _ = window_event_listener(ev::keydown, move |ev| {
        if (ev.ctrl_key() || ev.meta_key()) && ev.key() == "k" {
            ev.prevent_default();
            toasts.show("Search functionality coming soon!", NoticeKind::Info);
        }
        if ev.key() == "Escape" {
            toasts.dismiss_all();
        }
    });

    view! {
        <For
            each=move || toasts.items.get()
            key=|toast| toast.id
            children=move |toast| {
                view! {
                    <div class=format!("notification {}", toast.kind.css_class())>
                        <span class="notification-icon">{toast.kind.icon()}</span>
                        <span class="notification-text">{toast.message}</span>
                    </div>
                }
            }
        />
    }
}
