//! Fixed top navigation.
//!
//! Section links scroll the home page; catalog links open the explore
//! pages. On narrow screens the links collapse into a full-screen menu
//! that locks page scrolling while open.

use leptos::ev;
use leptos::prelude::*;
use leptos_icons::Icon;
use leptos_use::{use_event_listener, use_window};

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::{APP_SHORT_NAME, NAV_SECTIONS};
use crate::models::{AppRoute, CatalogKind};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/chrome/navbar.module.css");

/// Scroll offset after which the navbar gets its solid background.
const SCROLLED_AFTER_PX: f64 = 40.0;

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let menu_open = RwSignal::new(false);
    let scrolled = RwSignal::new(false);

    let _ = use_event_listener(use_window(), ev::scroll, move |_| {
        let y = dom::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0);
        scrolled.set(y > SCROLLED_AFTER_PX);
    });

    Effect::new(move |_| dom::set_scroll_locked(menu_open.get()));

    let go = move |route: AppRoute| {
        menu_open.set(false);
        ctx.navigate(route);
    };

    let links = NAV_SECTIONS
        .iter()
        .map(|(id, label)| {
            let id = *id;
            view! {
                <li>
                    <button class=css::link on:click=move |_| go(AppRoute::section(id))>
                        {*label}
                    </button>
                </li>
            }
        })
        .collect_view();

    view! {
        <header class=move || {
            let mut class = css::navbar.to_string();
            if scrolled.get() {
                class.push(' ');
                class.push_str(css::scrolled);
            }
            if menu_open.get() {
                class.push(' ');
                class.push_str(css::open);
            }
            class
        }>
            <button class=css::brand on:click=move |_| go(AppRoute::home())>
                <span class=css::brandIcon><Icon icon=ic::TERMINAL /></span>
                {APP_SHORT_NAME}
            </button>

            <nav class=css::nav aria-label="Main">
                <ul class=css::links>
                    {links}
                    <li>
                        <button
                            class=css::link
                            on:click=move |_| go(AppRoute::explore(CatalogKind::Products))
                        >
                            "Products"
                        </button>
                    </li>
                    <li>
                        <button
                            class=css::link
                            on:click=move |_| go(AppRoute::explore(CatalogKind::Services))
                        >
                            "Services"
                        </button>
                    </li>
                </ul>
                <button class=css::cta on:click=move |_| go(AppRoute::Contact)>
                    "Let's talk"
                    <Icon icon=ic::ARROW_UP_RIGHT />
                </button>
            </nav>

            <button
                class=css::toggle
                aria-label=move || if menu_open.get() { "Close menu" } else { "Open menu" }
                aria-expanded=move || menu_open.get().to_string()
                on:click=move |_| menu_open.update(|open| *open = !*open)
            >
                {move || {
                    if menu_open.get() {
                        view! { <Icon icon=ic::CLOSE /> }.into_any()
                    } else {
                        view! { <Icon icon=ic::MENU /> }.into_any()
                    }
                }}
            </button>
        </header>
    }
}
