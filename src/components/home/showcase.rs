//! Horizontal project showcases: products and services slide sideways
//! while their section is pinned.

use leptos::html::Div;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::hooks::use_pinned_progress;
use crate::components::icons as ic;
use crate::config::motion::SHOWCASE_DISTANCE_PER_PANEL;
use crate::core::Catalog;
use crate::core::motion::scroll::track_offset_percent;
use crate::models::{AppRoute, CatalogItem, CatalogKind};
use crate::utils::format::padded_index;

stylance::import_crate_style!(css, "src/components/home/showcase.module.css");

/// Both showcases under the "projects" anchor.
#[component]
pub fn Projects() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <section id="projects" class=css::projects>
            <Showcase
                catalog=ctx.products
                kicker="SELECTED_WORK"
                title="Products we've shipped"
            />
            <Showcase
                catalog=ctx.services
                kicker="SERVICE_LINES"
                title="Services we offer"
            />
        </section>
    }
}

/// One pinned horizontal track.
#[component]
fn Showcase<T>(
    catalog: RwSignal<Option<Catalog<T>>>,
    kicker: &'static str,
    title: &'static str,
) -> impl IntoView
where
    T: CatalogItem + Clone + PartialEq + Send + Sync + 'static,
{
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let kind = T::kind();
    let items = Memo::new(move |_| {
        catalog.with(|c| c.as_ref().map(|c| c.items().to_vec()).unwrap_or_default())
    });

    let wrapper = NodeRef::<Div>::new();
    let pinning = Signal::derive(move || ctx.motion.pinning());
    let panels = Signal::derive(move || items.with(Vec::len));
    let distance = Signal::derive(move || {
        if pinning.get() {
            SHOWCASE_DISTANCE_PER_PANEL * panels.get() as f64
        } else {
            0.0
        }
    });
    let progress = use_pinned_progress(wrapper, distance);

    let track_style = move || {
        if pinning.get() {
            format!(
                "transform: translate3d({:.3}%, 0, 0);",
                track_offset_percent(progress.get(), panels.get())
            )
        } else {
            String::new()
        }
    };

    view! {
        <div
            node_ref=wrapper
            class=move || if pinning.get() { css::pinWrapper } else { css::staticWrapper }
            style=move || {
                if pinning.get() {
                    format!("height: calc(100vh + {}px);", distance.get())
                } else {
                    String::new()
                }
            }
        >
            <div class=css::stage>
                <header class=css::header>
                    <p class=css::kicker>{kicker}</p>
                    <h2 class=css::title>{title}</h2>
                    <button class=css::all on:click=move |_| ctx.navigate(AppRoute::explore(kind))>
                        {format!("Explore all {}", kind.noun())}
                        <Icon icon=ic::ARROW_RIGHT />
                    </button>
                </header>
                <div class=css::track style=track_style>
                    <For
                        each=move || items.get().into_iter().enumerate()
                        key=|(_, item)| item.id().to_string()
                        children=move |(index, item)| view! { <Panel item=item index=index kind=kind /> }
                    />
                </div>
            </div>
        </div>
    }
}

#[component]
fn Panel<T>(item: T, index: usize, kind: CatalogKind) -> impl IntoView
where
    T: CatalogItem + Send + Sync + 'static,
{
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let id = item.id().to_string();
    let tags = item
        .technologies()
        .iter()
        .take(4)
        .map(|t| view! { <span class=css::tagChip>{t.clone()}</span> })
        .collect_view();

    view! {
        <article class=css::panel data-cursor="grow">
            <span class=css::bigIndex aria-hidden="true">{padded_index(index)}</span>
            <div class=css::panelBody>
                <p class=css::category>{item.category().to_uppercase()}</p>
                <h3 class=css::panelTitle>{item.title().to_string()}</h3>
                <p class=css::summary>{item.summary().to_string()}</p>
                <div class=css::tags>{tags}</div>
                <button class=css::open on:click=move |_| ctx.navigate(AppRoute::detail(kind, &id))>
                    "View project"
                    <Icon icon=ic::ARROW_UP_RIGHT />
                </button>
            </div>
            <div class=css::panelImage>
                <img src=item.image().to_string() alt=item.title().to_string() loading="lazy" />
            </div>
        </article>
    }
}
