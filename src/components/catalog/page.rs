//! Products and services catalog pages.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::card::CatalogCard;
use super::filter_bar::FilterBar;
use crate::app::AppContext;
use crate::components::chrome::{RevealGroup, Spinner};
use crate::components::icons as ic;
use crate::core::{Catalog, CategoryFilter};
use crate::models::{AppRoute, CatalogItem, CatalogKind};

stylance::import_crate_style!(css, "src/components/catalog/catalog.module.css");

/// Catalog page for `#/projects/explore?type=...` and its aliases.
#[component]
pub fn ExplorePage(kind: CatalogKind) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    match kind {
        CatalogKind::Products => view! {
            <CatalogPage
                catalog=ctx.products
                tagline="Apps and platforms we've designed, built and shipped for our clients."
            />
        }
        .into_any(),
        CatalogKind::Services => view! {
            <CatalogPage
                catalog=ctx.services
                tagline="End-to-end capabilities to take your idea from sketch to scale."
            />
        }
        .into_any(),
    }
}

#[component]
fn CatalogPage<T>(catalog: RwSignal<Option<Catalog<T>>>, tagline: &'static str) -> impl IntoView
where
    T: CatalogItem + Clone + PartialEq + Send + Sync + 'static,
{
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let kind = T::kind();
    let selected = RwSignal::new(CategoryFilter::All);

    let categories = Signal::derive(move || {
        catalog.with(|c| c.as_ref().map(Catalog::categories).unwrap_or_default())
    });
    let visible = Memo::new(move |_| {
        selected.with(|filter| {
            catalog.with(|c| {
                c.as_ref()
                    .map(|c| c.filter(filter).into_iter().cloned().collect::<Vec<T>>())
                    .unwrap_or_default()
            })
        })
    });

    view! {
        <div class=css::page>
            <header class=css::pageHeader>
                <button class=css::back on:click=move |_| ctx.navigate(AppRoute::home())>
                    <Icon icon=ic::CHEVRON_LEFT />
                    "Back to Home"
                </button>
                <h1 class=css::pageTitle>{kind.title()}</h1>
                <p class=css::tagline>{tagline}</p>
            </header>

            <Show
                when=move || catalog.with(Option::is_some)
                fallback=move || view! { <Spinner label=format!("Loading {}...", kind.noun()) /> }
            >
                <FilterBar categories=categories selected=selected />

                <Show
                    when=move || visible.with(|v| !v.is_empty())
                    fallback=move || view! {
                        <p class=css::empty>{format!("No {} found in this category.", kind.noun())}</p>
                    }
                >
                    <RevealGroup class=css::grid>
                        <For
                            each=move || visible.get().into_iter().enumerate()
                            key=|(index, item)| card_key(*index, item)
                            children=move |(index, item)| view! { <CatalogCard item=item index=index /> }
                        />
                    </RevealGroup>
                </Show>

                {match kind {
                    CatalogKind::Products => view! { <ProductStats catalog=catalog /> }.into_any(),
                    CatalogKind::Services => view! { <ServicesCta /> }.into_any(),
                }}
            </Show>
        </div>
    }
}

/// A card moved to a new slot after re-filtering is rebuilt so its reveal
/// delay follows its current position.
fn card_key<T: CatalogItem>(index: usize, item: &T) -> (usize, String) {
    (index, item.id().to_string())
}

/// Numbers under the products grid.
#[component]
fn ProductStats<T>(catalog: RwSignal<Option<Catalog<T>>>) -> impl IntoView
where
    T: CatalogItem + Send + Sync + 'static,
{
    let stats = move || catalog.with(|c| c.as_ref().map(Catalog::stats).unwrap_or_default());

    view! {
        <section class=css::stats>
            <div class=css::stat>
                <span class=css::statValue>{move || format!("{}+", stats().total)}</span>
                <span class=css::statLabel>"Products delivered"</span>
            </div>
            <div class=css::stat>
                <span class=css::statValue>{move || stats().categories.to_string()}</span>
                <span class=css::statLabel>"Categories"</span>
            </div>
            <div class=css::stat>
                <span class=css::statValue>"100%"</span>
                <span class=css::statLabel>"Client satisfaction"</span>
            </div>
        </section>
    }
}

/// Call to action under the services grid.
#[component]
fn ServicesCta() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <section class=css::cta>
            <h2>"Don't see exactly what you need?"</h2>
            <p>"Every engagement is tailored. Tell us about your project and we'll shape a plan around it."</p>
            <button class=css::ctaButton on:click=move |_| ctx.navigate(AppRoute::Contact)>
                "Get in touch"
                <Icon icon=ic::ARROW_UP_RIGHT />
            </button>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Service;

    const SERVICES: &str = r#"[
        {"id":"ui","title":"UI","category":"design","summary":"x",
         "description":"y","image":"/ui.jpg","delivery_time":"3 weeks"},
        {"id":"api","title":"API","category":"development","summary":"x",
         "description":"y","image":"/api.jpg","delivery_time":"4 weeks"}
    ]"#;

    #[test]
    fn test_card_key_changes_when_position_changes() {
        let catalog = Catalog::<Service>::from_json("services.json", SERVICES).unwrap();
        let all = catalog.filter(&CategoryFilter::All);
        let dev = catalog.filter(&CategoryFilter::Category("development".to_string()));

        assert_eq!(card_key(1, all[1]), (1, "api".to_string()));
        assert_eq!(card_key(0, dev[0]), (0, "api".to_string()));
        assert_ne!(card_key(1, all[1]), card_key(0, dev[0]));
    }
}
