//! Scroll-driven motion hooks.
//!
//! Thin reactive wrappers around [`crate::core::motion::scroll`]: they read
//! an element's viewport position through `leptos-use` and hand the pure
//! math a number.

use leptos::html::Div;
use leptos::prelude::*;
use leptos_use::{
    UseElementBoundingReturn, UseRafFnCallbackArgs, use_element_bounding, use_raf_fn,
    use_window_size,
};

use crate::app::AppContext;
use crate::config::motion::{PARALLAX_Y_PERCENT, REVEAL_STAGGER, REVEAL_START, SCRUB_SECONDS};
use crate::core::motion::scroll;

/// Whether the element has scrolled past the reveal line.
///
/// Reverses when the visitor scrolls back above it. Always `true` with
/// reduced motion.
pub fn use_reveal(target: NodeRef<Div>) -> Signal<bool> {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let UseElementBoundingReturn { top, .. } = use_element_bounding(target);
    let viewport = use_window_size().height;

    Signal::derive(move || {
        ctx.motion.reduced.get() || scroll::revealed(top.get(), viewport.get(), REVEAL_START)
    })
}

/// Scrubbed progress through a pinned section.
///
/// `target` is the tall wrapper; the stage inside it is `position: sticky`.
/// The returned value trails the raw scroll position by `SCRUB_SECONDS`.
pub fn use_pinned_progress(target: NodeRef<Div>, distance: Signal<f64>) -> Signal<f64> {
    let UseElementBoundingReturn { top, .. } = use_element_bounding(target);
    let raw = Signal::derive(move || scroll::pin_progress(top.get(), distance.get()));
    let smoothed = RwSignal::new(0.0);

    use_raf_fn(move |UseRafFnCallbackArgs { delta, .. }| {
        let target = raw.get_untracked();
        let current = smoothed.get_untracked();
        if current != target {
            smoothed.set(scroll::scrub_step(current, target, delta / 1000.0, SCRUB_SECONDS));
        }
    });

    smoothed.into()
}

/// Vertical parallax offset in percent for an element crossing the viewport.
pub fn use_parallax(target: NodeRef<Div>) -> Signal<f64> {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let UseElementBoundingReturn { top, height, .. } = use_element_bounding(target);
    let viewport = use_window_size().height;

    Signal::derive(move || {
        if ctx.motion.reduced.get() {
            return 0.0;
        }
        scroll::parallax_percent(top.get(), height.get(), viewport.get(), PARALLAX_Y_PERCENT)
    })
}

/// Inline transition delay for the `index`-th item of a reveal group.
pub fn reveal_delay(index: usize) -> String {
    format!("transition-delay: {:.2}s;", index as f64 * REVEAL_STAGGER)
}

#[cfg(test)]
mod tests {
    use super::*;

    const GLOBAL_CSS: &str = include_str!("../../assets/styles/global.css");

    #[test]
    fn test_reveal_delay_staggers_by_index() {
        assert_eq!(reveal_delay(0), "transition-delay: 0.00s;");
        assert_eq!(reveal_delay(3), format!("transition-delay: {:.2}s;", 3.0 * REVEAL_STAGGER));
    }

    #[test]
    fn test_reveal_items_transition_over_point_eight_seconds() {
        let rule = GLOBAL_CSS
            .split(".reveal-item {")
            .nth(1)
            .and_then(|rest| rest.split('}').next())
            .unwrap();
        assert!(rule.contains("opacity 0.8s"));
        assert!(rule.contains("transform 0.8s"));
    }
}
