//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use wasm_bindgen::JsCast;
use web_sys::{
    Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions,
    Storage, Window,
};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get sessionStorage.
#[inline]
pub fn session_storage() -> Option<Storage> {
    window()?.session_storage().ok()?
}

/// Milliseconds on the animation-frame clock (`performance.now()`).
pub fn now_ms() -> f64 {
    window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

// =============================================================================
// Scrolling
// =============================================================================

/// Scroll the page back to the top.
pub fn scroll_to_top(smooth: bool) {
    if let Some(window) = window() {
        let opts = ScrollToOptions::new();
        opts.set_top(0.0);
        opts.set_behavior(if smooth {
            ScrollBehavior::Smooth
        } else {
            ScrollBehavior::Instant
        });
        window.scroll_to_with_scroll_to_options(&opts);
    }
}

/// Smoothly scroll the element with `id` to the top of the viewport.
///
/// Returns `true` if the element exists.
pub fn scroll_into_view(id: &str) -> bool {
    let Some(element) = element_by_id(id) else {
        return false;
    };
    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    opts.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&opts);
    true
}

/// Lock or unlock page scrolling (mobile menu, splash).
pub fn set_scroll_locked(locked: bool) {
    if let Some(body) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    {
        let _ = body
            .style()
            .set_property("overflow", if locked { "hidden" } else { "" });
    }
}

// =============================================================================
// Element Lookup
// =============================================================================

pub fn element_by_id(id: &str) -> Option<Element> {
    window()?.document()?.get_element_by_id(id)
}

/// Whether `target` (an event target) sits inside an element matching
/// `selector`, itself included.
pub fn closest_matches(target: Option<web_sys::EventTarget>, selector: &str) -> bool {
    target
        .and_then(|t| t.dyn_into::<Element>().ok())
        .and_then(|el| el.closest(selector).ok().flatten())
        .is_some()
}

// =============================================================================
// Browser Navigation
// =============================================================================

/// Get the current URL hash (without the '#' prefix).
pub fn get_hash() -> String {
    window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
        .trim_start_matches('#')
        .to_string()
}

/// Set the URL hash (adds to browser history).
///
/// The hash should include the '#' prefix.
pub fn set_hash(hash: &str) {
    if let Some(window) = window() {
        let _ = window.location().set_hash(hash);
    }
}

/// Replace the URL hash without adding to browser history.
///
/// `history.replaceState` does not fire `hashchange`, so callers that need
/// the app to react must update the route signal themselves.
pub fn replace_hash(hash: &str) {
    if let Some(window) = window()
        && let Ok(history) = window.history()
    {
        let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(hash));
    }
}

/// Navigate the current tab (used for `mailto:` links).
pub fn navigate_to(url: &str) {
    if let Some(window) = window() {
        let _ = window.location().set_href(url);
    }
}
