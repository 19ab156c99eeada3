//! Startup splash.
//!
//! Runs once per page load: shows the brand mark, loads the catalogs while
//! printing progress lines, then fades out and hands over to the site.
//! Clicking anywhere skips the rest of the sequence; loading carries on in
//! the background and catalog pages show a spinner until it finishes.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::app::{AppContext, load_products, load_services};
use crate::config::{APP_NAME, APP_SHORT_NAME, APP_TAGLINE, splash_delays};
use crate::utils::format::count_label;

stylance::import_crate_style!(css, "src/components/splash/splash.module.css");

/// One progress line on the splash.
#[derive(Clone, Debug, PartialEq)]
struct SplashLine {
    text: String,
    done: bool,
}

#[component]
pub fn Splash(on_complete: Callback<()>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let lines = RwSignal::new(Vec::<SplashLine>::new());
    let brand_visible = RwSignal::new(false);
    let leaving = RwSignal::new(false);
    let finished = StoredValue::new(false);

    let finish = move || {
        if !finished.get_value() {
            finished.set_value(true);
            on_complete.run(());
        }
    };

    // Lines are updated with try_update: a skipped splash is unmounted
    // while the loader is still running.
    let push = move |text: String| {
        lines.try_update(|l| {
            l.push(SplashLine { text, done: false });
        });
    };
    let complete_last = move |text: String| {
        lines.try_update(|l| {
            if let Some(last) = l.last_mut() {
                last.text = text;
                last.done = true;
            }
        });
    };

    spawn_local(async move {
        let _ = brand_visible.try_set(true);
        TimeoutFuture::new(splash_delays::BRAND).await;

        push("Loading products".to_string());
        let products = load_products(ctx).await;
        complete_last(format!("Loaded {}", count_label(products, "product", "products")));
        TimeoutFuture::new(splash_delays::STEP).await;

        push("Loading services".to_string());
        let services = load_services(ctx).await;
        complete_last(format!("Loaded {}", count_label(services, "service", "services")));
        TimeoutFuture::new(splash_delays::STEP).await;

        let team = ctx.home.with_value(|h| h.team.len());
        lines.try_update(|l| {
            l.push(SplashLine {
                text: format!("Assembled {}", count_label(team, "team member", "team members")),
                done: true,
            });
        });
        TimeoutFuture::new(splash_delays::HOLD).await;

        web_sys::console::log_1(
            &format!("{}: {} products, {} services", APP_NAME, products, services).into(),
        );

        if finished.try_get_value() != Some(false) {
            return;
        }
        let _ = leaving.try_set(true);
        TimeoutFuture::new(splash_delays::FADE_OUT).await;
        if finished.try_get_value() == Some(false) {
            finish();
        }
    });

    view! {
        <div
            class=move || {
                if leaving.get() { format!("{} {}", css::splash, css::leaving) } else { css::splash.to_string() }
            }
            on:click=move |_| finish()
            role="status"
            aria-live="polite"
        >
            <div class=move || {
                if brand_visible.get() { format!("{} {}", css::brand, css::visible) } else { css::brand.to_string() }
            }>
                <span class=css::mark>{APP_SHORT_NAME}</span>
                <span class=css::tagline>{APP_TAGLINE}</span>
            </div>
            <ul class=css::lines>
                <For
                    each=move || lines.get().into_iter().enumerate()
                    key=|(i, line)| (*i, line.done)
                    children=move |(_, line)| {
                        view! {
                            <li class=if line.done { css::lineDone } else { css::line }>
                                <span class=css::bullet>{if line.done { "[ok]" } else { "[..]" }}</span>
                                {line.text}
                            </li>
                        }
                    }
                />
            </ul>
            <p class=css::skip>"Click to skip"</p>
        </div>
    }
}
