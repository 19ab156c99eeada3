//! Application router component.
//!
//! Handles URL-based routing with hash history so the site works on any
//! static host. Uses native `hashchange` events instead of leptos_router.
//!
//! # Architecture
//!
//! - **URL hash is the source of truth**: the route signal in
//!   [`AppContext`] is derived from `#/path?query`
//! - **Pages re-render on page changes only**: moving between home sections
//!   keeps the home page mounted and just scrolls
//! - **Redirects replace history**: an invalid explore URL never lands in
//!   the back-button stack

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::app::AppContext;
use crate::components::catalog::{ExplorePage, ProductDetail, ServiceDetail};
use crate::components::chrome::{Footer, Navbar};
use crate::components::home::HomePage;
use crate::components::pages::{AboutPage, ContactPage, NotFoundPage};
use crate::models::{AppRoute, CatalogKind};
use crate::utils::dom;

/// Main application router.
///
/// Route table:
/// - `#/`, `#/?section=<id>` → Home
/// - `#/projects/explore?type=product|service`, `#/projects/products|services` → catalogs
/// - `#/product/<id>`, `#/service/<id>` (also under `#/projects/`) → details
/// - `#/about`, `#/contact` → secondary pages
/// - anything else → not found
#[component]
pub fn AppRouter() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let route = ctx.route;

    // Set up hashchange event listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            route.set(AppRoute::current());
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    // Replace-redirects (no history entry, no hashchange)
    Effect::new(move |_| {
        if let Some(target) = route.with(AppRoute::redirect) {
            target.replace();
            route.set(target);
        }
    });

    // Scroll to top on navigation, or to the requested home section once
    // the home page has rendered.
    Effect::new(move |_| {
        let target = route.with(|r| r.scroll_target().map(str::to_string));
        request_animation_frame(move || match target {
            Some(id) => {
                if !dom::scroll_into_view(&id) {
                    dom::scroll_to_top(false);
                }
            }
            None => dom::scroll_to_top(false),
        });
    });

    let page = Memo::new(move |_| route.with(AppRoute::page_key));

    view! {
        <Navbar />
        <main>
            {move || match page.get() {
                AppRoute::Home { .. } => view! { <HomePage /> }.into_any(),
                AppRoute::About => view! { <AboutPage /> }.into_any(),
                AppRoute::Contact => view! { <ContactPage /> }.into_any(),
                AppRoute::Explore { kind } => {
                    // Invalid kinds are redirected above; render products meanwhile
                    let kind = kind.unwrap_or(CatalogKind::Products);
                    view! { <ExplorePage kind=kind /> }.into_any()
                }
                AppRoute::Catalog(kind) => view! { <ExplorePage kind=kind /> }.into_any(),
                AppRoute::Detail { kind: CatalogKind::Products, id } => {
                    view! { <ProductDetail id=id /> }.into_any()
                }
                AppRoute::Detail { kind: CatalogKind::Services, id } => {
                    view! { <ServiceDetail id=id /> }.into_any()
                }
                AppRoute::NotFound { path } => view! { <NotFoundPage path=path /> }.into_any(),
            }}
        </main>
        <Footer />
    }
}
