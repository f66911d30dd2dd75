//! Helpers behind the landing page behaviors.
//!
//! Style and copy computations are pure. [`inject_styles`] and
//! [`smooth_scroll_to`] are the only functions touching the document;
//! listeners and timers stay in [`crate::components`].

use crate::config::SECTION_STAGGER_SECS;

/// Transform applied to a feature card while pressed.
pub const PRESSED_TRANSFORM: &str = "scale(0.95)";

/// Inline style staggering the reveal animation of the `index`-th section.
pub fn animation_delay(index: usize) -> String {
    let delay = (index as f64 * SECTION_STAGGER_SECS * 10.0).round() / 10.0;
    format!("animation-delay: {}s", delay)
}

/// CSS selector for an in-page anchor, `None` when there is no target.
pub fn anchor_selector(href: &str) -> Option<&str> {
    match href.strip_prefix('#') {
        Some(id) if !id.is_empty() => Some(href),
        _ => None,
    }
}

/// Human readable size, base 1024, at most two decimals.
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    let bytes = bytes as f64;
    let exponent = (bytes.ln() / 1024f64.ln()).floor() as usize;
    let exponent = exponent.min(UNITS.len() - 1);
    let value = (bytes / 1024f64.powi(exponent as i32) * 100.0).round() / 100.0;
    format!("{} {}", value, UNITS[exponent])
}

/// Insert a `<style>` element into `<head>` unless one with `id` exists.
///
/// Returns `false` when the styles were already present.
pub fn inject_styles(id: &str, css: &str) -> bool {
    let document = gloo_utils::document();
    if document.get_element_by_id(id).is_some() {
        return false;
    }
    let Ok(style) = document.create_element("style") else {
        log::warn!("Could not create <style> element for {}", id);
        return false;
    };
    style.set_id(id);
    style.set_text_content(Some(css));
    match document.head() {
        Some(head) => head.append_child(&style).is_ok(),
        None => false,
    }
}

/// Scroll the element matching `selector` into view, smoothly.
///
/// Returns `false` when nothing matches.
pub fn smooth_scroll_to(selector: &str) -> bool {
    let target = gloo_utils::document().query_selector(selector).ok().flatten();
    match target {
        Some(element) => {
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            options.set_block(web_sys::ScrollLogicalPosition::Start);
            element.scroll_into_view_with_scroll_into_view_options(&options);
            true
        }
        None => false,
    }
}

pub const STATUS_STYLES: &str = r#"
.status-indicator {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    padding: 0.5rem 1rem;
    border-radius: 20px;
    font-size: 0.9rem;
    margin-top: 1rem;
    animation: slideIn 0.3s ease;
}
.status-indicator.success {
    background: rgba(40, 167, 69, 0.2);
    color: #155724;
    border: 1px solid rgba(40, 167, 69, 0.3);
}
.status-indicator.warning {
    background: rgba(255, 193, 7, 0.2);
    color: #856404;
    border: 1px solid rgba(255, 193, 7, 0.3);
}
.status-indicator.error {
    background: rgba(220, 53, 69, 0.2);
    color: #721c24;
    border: 1px solid rgba(220, 53, 69, 0.3);
}
@keyframes slideIn {
    from { opacity: 0; transform: translateY(-10px); }
    to { opacity: 1; transform: translateY(0); }
}
"#;

pub const NOTIFICATION_STYLES: &str = r#"
.notification {
    position: fixed;
    top: 20px;
    right: 20px;
    padding: 1rem 1.5rem;
    border-radius: 8px;
    box-shadow: 0 4px 15px rgba(0,0,0,0.2);
    z-index: 1000;
    animation: slideInRight 0.3s ease;
    display: flex;
    align-items: center;
    gap: 0.5rem;
}
.notification.success { background: #d4edda; color: #155724; border: 1px solid #c3e6cb; }
.notification.error { background: #f8d7da; color: #721c24; border: 1px solid #f5c6cb; }
.notification.info { background: #d1ecf1; color: #0c5460; border: 1px solid #bee5eb; }
@keyframes slideInRight {
    from { opacity: 0; transform: translateX(100px); }
    to { opacity: 1; transform: translateX(0); }
}
"#;
