//! Custom cursor dot.
//!
//! A 14px dot trails the pointer with a `back.out` ease and grows while
//! hovering anything interactive. Only mounted for fine pointers without
//! reduced motion.

use leptos::ev;
use leptos::prelude::*;
use leptos_use::{use_event_listener, use_raf_fn, use_window};

use crate::config::motion::{
    CURSOR_FOLLOW_SECONDS, CURSOR_HOVER_SCALE, CURSOR_HOVER_SELECTOR, CURSOR_SCALE_SECONDS,
};
use crate::core::motion::{Ease, Point, Tween};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/chrome/cursor.module.css");

#[component]
pub fn Cursor() -> impl IntoView {
    let position = StoredValue::new(Tween::at_rest(Point::new(-100.0, -100.0)));
    let scale = StoredValue::new(Tween::at_rest(1.0));
    let hovering = StoredValue::new(false);
    let dirty = StoredValue::new(true);
    let visible = RwSignal::new(false);
    let style = RwSignal::new(String::new());

    let _ = use_event_listener(use_window(), ev::mousemove, move |e| {
        let now = dom::now_ms();
        let target = Point::new(f64::from(e.client_x()), f64::from(e.client_y()));
        position.update_value(|t| {
            *t = if visible.get_untracked() {
                t.retarget(target, now, CURSOR_FOLLOW_SECONDS, Ease::BackOut)
            } else {
                // First move: appear under the pointer instead of flying in
                Tween::at_rest(target)
            };
        });
        dirty.set_value(true);
        visible.set(true);
    });

    let _ = use_event_listener(use_window(), ev::mouseover, move |e| {
        let over = dom::closest_matches(e.target(), CURSOR_HOVER_SELECTOR);
        if over != hovering.get_value() {
            hovering.set_value(over);
            let to = if over { CURSOR_HOVER_SCALE } else { 1.0 };
            let now = dom::now_ms();
            scale.update_value(|t| *t = t.retarget(to, now, CURSOR_SCALE_SECONDS, Ease::Power3Out));
            dirty.set_value(true);
        }
    });

    let _ = use_event_listener(use_window(), ev::mouseout, move |e| {
        // Leaving the window entirely
        if e.related_target().is_none() {
            visible.set(false);
        }
    });

    let _ = use_raf_fn(move |_| {
        let now = dom::now_ms();
        // Both tweens at rest and already drawn
        let settled = position.with_value(|t| t.is_finished(now))
            && scale.with_value(|t| t.is_finished(now));
        if settled && !dirty.get_value() {
            return;
        }
        dirty.set_value(!settled);
        let p = position.with_value(|t| t.value_at(now));
        let s = scale.with_value(|t| t.value_at(now));
        let next = format!(
            "transform: translate3d({:.2}px, {:.2}px, 0) translate(-50%, -50%) scale({:.3});",
            p.x, p.y, s
        );
        if style.with_untracked(|current| *current != next) {
            style.set(next);
        }
    });

    view! {
        <div
            class=move || {
                if visible.get() { format!("{} {}", css::cursor, css::visible) } else { css::cursor.to_string() }
            }
            style=move || style.get()
            aria-hidden="true"
        ></div>
    }
}
