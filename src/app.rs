//! Root application module.
//!
//! Contains the main App component, the [`AppContext`] shared by every page
//! and the catalog loading that runs during the splash.

use leptos::prelude::*;
use leptos_use::use_media_query;

use crate::components::{AppRouter, Cursor, Splash};
use crate::config::{catalog as catalog_config, motion};
use crate::core::content::{self, HomeContent};
use crate::core::error::ContentError;
use crate::core::{Catalog, decode_remote, remote_url};
use crate::models::{AppRoute, CatalogItem, Product, Service};
use crate::utils::{cache, fetch_text_cached};

// ============================================================================
// MotionPrefs
// ============================================================================

/// Media-query driven switches for the heavier effects.
#[derive(Clone, Copy)]
pub struct MotionPrefs {
    /// `prefers-reduced-motion: reduce`.
    pub reduced: Signal<bool>,
    /// No fine pointer (touch screens).
    pub coarse_pointer: Signal<bool>,
    /// Phone-sized viewport.
    pub narrow: Signal<bool>,
}

impl MotionPrefs {
    pub fn new() -> Self {
        Self {
            reduced: use_media_query(motion::REDUCED_MOTION_QUERY),
            coarse_pointer: use_media_query(motion::COARSE_POINTER_QUERY),
            narrow: use_media_query(motion::NARROW_QUERY),
        }
    }

    /// Whether sections may pin and scrub with the scrollbar.
    pub fn pinning(&self) -> bool {
        !self.reduced.get() && !self.narrow.get()
    }

    /// Whether the custom cursor is shown.
    pub fn cursor(&self) -> bool {
        !self.reduced.get() && !self.coarse_pointer.get()
    }
}

impl Default for MotionPrefs {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and read with
/// `use_context::<AppContext>()`.
///
/// Catalogs start as `None` and are filled in while the splash runs; pages
/// show a loading spinner until then.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current route, driven by `hashchange`.
    pub route: RwSignal<AppRoute>,
    /// Set once the splash sequence finishes or is skipped.
    pub splash_done: RwSignal<bool>,
    pub products: RwSignal<Option<Catalog<Product>>>,
    pub services: RwSignal<Option<Catalog<Service>>>,
    /// Capabilities, team and testimonials. Fixed after startup.
    pub home: StoredValue<HomeContent>,
    pub motion: MotionPrefs,
}

impl AppContext {
    pub fn new() -> Self {
        let home = content::bundled_home().unwrap_or_else(|e| {
            log_error(&format!("Home content failed to load: {}", e));
            HomeContent::default()
        });

        Self {
            route: RwSignal::new(AppRoute::current()),
            splash_done: RwSignal::new(false),
            products: RwSignal::new(None),
            services: RwSignal::new(None),
            home: StoredValue::new(home),
            motion: MotionPrefs::new(),
        }
    }

    /// Navigate to `route`, adding a history entry.
    ///
    /// Re-selecting the current home section scrolls to it again, since the
    /// hash does not change and no `hashchange` fires.
    pub fn navigate(&self, route: AppRoute) {
        if self.route.get_untracked() == route {
            match route.scroll_target() {
                Some(id) => {
                    crate::utils::dom::scroll_into_view(id);
                }
                None => crate::utils::dom::scroll_to_top(true),
            }
            return;
        }
        route.push();
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Catalog Loading
// ============================================================================

/// Load the product catalog into the context and return its size.
///
/// With a remote source configured the remote copy wins; any failure falls
/// back to the bundled fixture.
pub async fn load_products(ctx: AppContext) -> usize {
    let catalog = load_catalog(
        "products.json",
        catalog_config::PRODUCTS_CACHE_KEY,
        content::bundled_products,
    )
    .await;
    let len = catalog.len();
    ctx.products.set(Some(catalog));
    len
}

/// Load the service catalog into the context and return its size.
pub async fn load_services(ctx: AppContext) -> usize {
    let catalog = load_catalog(
        "services.json",
        catalog_config::SERVICES_CACHE_KEY,
        content::bundled_services,
    )
    .await;
    ctx.home.with_value(|home| {
        for cap in content::dangling_capabilities(home, &catalog) {
            log_warn(&format!(
                "Capability \"{}\" links to unknown service \"{}\"",
                cap.title, cap.service_id
            ));
        }
    });
    let len = catalog.len();
    ctx.services.set(Some(catalog));
    len
}

async fn load_catalog<T, F>(file: &'static str, cache_key: &str, bundled: F) -> Catalog<T>
where
    T: CatalogItem + serde::de::DeserializeOwned,
    F: Fn() -> Result<Catalog<T>, ContentError>,
{
    if let Some(base) = catalog_config::REMOTE_BASE_URL {
        let url = remote_url(base, file);
        let remote = match fetch_text_cached(&url, cache_key).await {
            Ok(body) => decode_remote::<T>(file, &body),
            Err(e) => Err(e),
        };
        match remote {
            Ok(catalog) => return catalog,
            Err(e) => {
                cache::remove(cache_key);
                log_warn(&format!("{} unavailable ({}), using bundled copy", url, e));
            }
        }
    }

    let catalog = bundled().unwrap_or_else(|e| {
        log_error(&format!("Bundled {} is invalid: {}", file, e));
        Catalog::default()
    });
    if catalog.is_empty() {
        log_warn(&format!("{} has no entries", file));
    }
    catalog
}

fn log_warn(message: &str) {
    web_sys::console::warn_1(&message.into());
}

fn log_error(message: &str) {
    web_sys::console::error_1(&message.into());
}

// ============================================================================
// App
// ============================================================================

/// Root application component with error boundary.
///
/// Creates the [`AppContext`], runs the splash, then mounts the router and
/// cursor.
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    let on_splash_complete = Callback::new(move |_: ()| ctx.splash_done.set(true));

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    min-height: 100vh;
                    padding: 2rem;
                    background: #050505;
                    color: #f2f2f2;
                    font-family: 'Space Grotesk', system-ui, sans-serif;
                ">
                    <div style="max-width: 560px; text-align: center;">
                        <h1 style="color: #ff5a36; margin-bottom: 1rem;">
                            "Something went wrong"
                        </h1>
                        <p style="color: #9a9a9a; margin-bottom: 2rem;">
                            "An unexpected error occurred. Please try reloading the page."
                        </p>
                        <details style="
                            text-align: left;
                            background: #141414;
                            padding: 1rem;
                            border-radius: 8px;
                            margin-bottom: 1rem;
                        ">
                            <summary style="cursor: pointer; color: #9a9a9a;">
                                "Error details"
                            </summary>
                            <ul style="margin: 1rem 0 0 0; padding-left: 1.5rem; color: #ff5a36;">
                                {move || errors.get()
                                    .into_iter()
                                    .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                    .collect::<Vec<_>>()
                                }
                            </ul>
                        </details>
                        <button
                            on:click=move |_| {
                                if let Some(window) = web_sys::window() {
                                    let _ = window.location().reload();
                                }
                            }
                            style="
                                background: #f2f2f2;
                                color: #050505;
                                border: none;
                                padding: 0.75rem 2rem;
                                border-radius: 999px;
                                cursor: pointer;
                                font-size: 1rem;
                            "
                        >
                            "Reload Page"
                        </button>
                    </div>
                </div>
            }
        >
            <Show
                when=move || ctx.splash_done.get()
                fallback=move || view! { <Splash on_complete=on_splash_complete /> }
            >
                <AppRouter />
                <Show when=move || ctx.motion.cursor()>
                    <Cursor />
                </Show>
            </Show>
        </ErrorBoundary>
    }
}
