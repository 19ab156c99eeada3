//! The pluckable string under the hero headline.

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos_use::use_raf_fn;
use wasm_bindgen::JsCast;

use crate::config::curve::{FOLLOW_SECONDS, HEIGHT, RELEASE_SECONDS, WIDTH};
use crate::core::curve::{self, CENTER};
use crate::core::motion::{ELASTIC_SPRING, Ease, Point, Tween};
use crate::core::{CurveAction, StringCurve as CurveState};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/home/string_curve.module.css");

#[component]
pub fn StringCurve() -> impl IntoView {
    let state = StoredValue::new(CurveState::default());
    let control = StoredValue::new(Tween::at_rest(CENTER));
    let path = RwSignal::new(curve::path(CENTER));
    let grabbed = RwSignal::new(false);

    let apply = move |action: CurveAction| {
        let now = dom::now_ms();
        match action {
            CurveAction::Idle => {}
            CurveAction::Follow(to) => control.update_value(|t| {
                *t = t.retarget(to, now, FOLLOW_SECONDS, Ease::Power3Out);
            }),
            CurveAction::Release => control.update_value(|t| {
                *t = t.retarget(CENTER, now, RELEASE_SECONDS, ELASTIC_SPRING);
            }),
        }
    };

    let on_move = move |e: MouseEvent| {
        let Some(svg) = e
            .current_target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        else {
            return;
        };
        let rect = svg.get_bounding_client_rect();
        let pointer = curve::to_view_box(
            Point::new(f64::from(e.client_x()), f64::from(e.client_y())),
            Point::new(rect.left(), rect.top()),
            rect.width(),
            rect.height(),
        );
        let mut action = CurveAction::Idle;
        state.update_value(|s| action = s.pointer_move(pointer));
        grabbed.set(state.with_value(CurveState::is_grabbed));
        apply(action);
    };

    let on_leave = move |_: MouseEvent| {
        let mut action = CurveAction::Idle;
        state.update_value(|s| action = s.pointer_leave());
        grabbed.set(false);
        apply(action);
    };

    let _ = use_raf_fn(move |_| {
        let now = dom::now_ms();
        let next = curve::path(control.with_value(|t| t.value_at(now)));
        if path.with_untracked(|p| *p != next) {
            path.set(next);
        }
    });

    view! {
        <svg
            class=move || if grabbed.get() { format!("{} {}", css::curve, css::grabbed) } else { css::curve.to_string() }
            viewBox=format!("0 0 {} {}", WIDTH, HEIGHT)
            preserveAspectRatio="none"
            on:mousemove=on_move
            on:mouseleave=on_leave
            aria-hidden="true"
        >
            <path class=css::string d=move || path.get() />
        </svg>
    }
}

#[cfg(test)]
mod tests {
    const STYLESHEET: &str = include_str!("string_curve.module.css");

    #[test]
    fn test_stylesheet_defines_curve_classes() {
        for class in ["curve", "string", "grabbed"] {
            assert!(
                STYLESHEET.contains(&format!(".{} {{", class)),
                "string_curve.module.css is missing .{}",
                class
            );
        }
    }
}
