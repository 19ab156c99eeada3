//! Product and service detail pages.
//!
//! Both share the same skeleton: an intro timeline over the text blocks,
//! the sidebar cards and the hero image, a Markdown description and a bento
//! gallery.

use leptos::html::Div;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::chrome::Spinner;
use crate::components::hooks::use_parallax;
use crate::components::icons as ic;
use crate::core::motion::{Timeline, detail_intro};
use crate::core::{BentoTile, bento_tile, tile_label};
use crate::models::{AppRoute, CatalogItem, CatalogKind, Product, Service};
use crate::utils::{markdown_to_html, validate_external_url};

stylance::import_crate_style!(css, "src/components/catalog/detail.module.css");

/// Text blocks in the intro: back link, category, title, summary, meta row.
const TEXT_BLOCKS: usize = 5;
/// Sidebar cards in the intro.
const SIDEBAR_CARDS: usize = 3;

// =============================================================================
// Pages
// =============================================================================

#[component]
pub fn ProductDetail(id: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    move || match ctx.products.with(|c| c.as_ref().map(|c| c.find(&id).cloned())) {
        None => view! { <Spinner label="Loading product..." /> }.into_any(),
        Some(None) => view! { <Missing kind=CatalogKind::Products /> }.into_any(),
        Some(Some(product)) => view! { <ProductView product=product /> }.into_any(),
    }
}

#[component]
pub fn ServiceDetail(id: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    move || match ctx.services.with(|c| c.as_ref().map(|c| c.find(&id).cloned())) {
        None => view! { <Spinner label="Loading service..." /> }.into_any(),
        Some(None) => view! { <Missing kind=CatalogKind::Services /> }.into_any(),
        Some(Some(service)) => view! { <ServiceView service=service /> }.into_any(),
    }
}

#[component]
fn Missing(kind: CatalogKind) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let (title, singular) = match kind {
        CatalogKind::Products => ("Product not found", "product"),
        CatalogKind::Services => ("Service not found", "service"),
    };

    view! {
        <div class=css::missing>
            <h1>{title}</h1>
            <p>{format!("The {} you're looking for doesn't exist or has moved.", singular)}</p>
            <button class=css::back on:click=move |_| ctx.navigate(AppRoute::explore(kind))>
                <Icon icon=ic::CHEVRON_LEFT />
                {format!("Back to {}", kind.noun())}
            </button>
        </div>
    }
}

// =============================================================================
// Product
// =============================================================================

#[component]
fn ProductView(product: Product) -> impl IntoView {
    let timeline = detail_intro(TEXT_BLOCKS, SIDEBAR_CARDS);
    let live = product.live_url.as_deref().and_then(allowed_link);
    let source = product.source_url.as_deref().and_then(allowed_link);

    let chips = product
        .technologies
        .iter()
        .map(|t| view! { <span class=css::chip>{t.clone()}</span> })
        .collect_view();

    let meta = view! {
        <dl class=css::metaRow>
            <div><dt>"Client"</dt><dd>{product.client.clone()}</dd></div>
            <div><dt>"Delivered"</dt><dd>{product.date.clone()}</dd></div>
            <div><dt>"Year"</dt><dd>{product.year.to_string()}</dd></div>
        </dl>
    };

    let sidebar = view! {
        <aside class=css::sidebar>
            <div class=format!("{} anim-fade-up-sm", css::sideCard) style=timeline.css_timing("card", 0)>
                <h2 class=css::sideTitle>"Technologies"</h2>
                <div class=css::chips>{chips}</div>
            </div>
            <div class=format!("{} anim-fade-up-sm", css::sideCard) style=timeline.css_timing("card", 1)>
                <h2 class=css::sideTitle>"Links"</h2>
                {live.map(|href| view! {
                    <a class=css::primaryLink href=href target="_blank" rel="noopener noreferrer">
                        <Icon icon=ic::GLOBE />
                        "Visit Live Site"
                        <Icon icon=ic::ARROW_UP_RIGHT />
                    </a>
                })}
                {source.map(|href| view! {
                    <a class=css::secondaryLink href=href target="_blank" rel="noopener noreferrer">
                        <Icon icon=ic::GITHUB />
                        "View Source"
                    </a>
                })}
            </div>
            <div class=format!("{} anim-fade-up-sm", css::sideCard) style=timeline.css_timing("card", 2)>
                <h2 class=css::sideTitle>"Category"</h2>
                <p class=css::sideText>{product.category.to_uppercase()}</p>
            </div>
        </aside>
    };

    view! {
        <DetailLayout
            item=product.clone()
            timeline=timeline.clone()
            description=product.description.clone()
            gallery=product.gallery.clone()
            meta=meta.into_any()
            sidebar=sidebar.into_any()
            parallax=true
        />
    }
}

// =============================================================================
// Service
// =============================================================================

#[component]
fn ServiceView(service: Service) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let timeline = detail_intro(TEXT_BLOCKS, SIDEBAR_CARDS);

    let deliverables = service
        .deliverables
        .iter()
        .map(|d| {
            view! {
                <li>
                    <span class=css::check><Icon icon=ic::CHECK /></span>
                    {d.clone()}
                </li>
            }
        })
        .collect_view();

    let chips = service
        .technologies
        .iter()
        .map(|t| view! { <span class=css::chip>{t.clone()}</span> })
        .collect_view();

    let meta = view! {
        <dl class=css::metaRow>
            <div><dt>"Category"</dt><dd>{service.category.to_uppercase()}</dd></div>
            <div><dt>"Timeline"</dt><dd>{service.delivery_time.clone()}</dd></div>
        </dl>
    };

    let sidebar = view! {
        <aside class=css::sidebar>
            <div class=format!("{} anim-fade-up-sm", css::sideCard) style=timeline.css_timing("card", 0)>
                <h2 class=css::sideTitle>"Deliverables"</h2>
                <ul class=css::deliverables>{deliverables}</ul>
            </div>
            <div class=format!("{} anim-fade-up-sm", css::sideCard) style=timeline.css_timing("card", 1)>
                <h2 class=css::sideTitle>"Tools we use"</h2>
                <div class=css::chips>{chips}</div>
            </div>
            <div class=format!("{} anim-fade-up-sm", css::sideCard) style=timeline.css_timing("card", 2)>
                <h2 class=css::sideTitle>"Ready to start?"</h2>
                <button class=css::primaryLink on:click=move |_| ctx.navigate(AppRoute::Contact)>
                    "Start Project"
                    <Icon icon=ic::ARROW_RIGHT />
                </button>
            </div>
        </aside>
    };

    view! {
        <DetailLayout
            item=service.clone()
            timeline=timeline.clone()
            description=service.description.clone()
            gallery=service.gallery.clone()
            meta=meta.into_any()
            sidebar=sidebar.into_any()
            parallax=false
        />
    }
}

// =============================================================================
// Shared layout
// =============================================================================

#[component]
fn DetailLayout<T>(
    item: T,
    timeline: Timeline,
    description: String,
    gallery: Vec<String>,
    meta: AnyView,
    sidebar: AnyView,
    parallax: bool,
) -> impl IntoView
where
    T: CatalogItem + Send + Sync + 'static,
{
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let kind = T::kind();
    let hero = NodeRef::<Div>::new();
    let offset = use_parallax(hero);
    let image_style = move || {
        if parallax {
            format!("transform: translateY({:.3}%) scale(1.15);", offset.get())
        } else {
            String::new()
        }
    };
    let text = |i: usize| timeline.css_timing("text", i);

    view! {
        <article class=css::detail>
            <header class=css::intro>
                <button
                    class=format!("{} anim-fade-up", css::back)
                    style=text(0)
                    on:click=move |_| ctx.navigate(AppRoute::explore(kind))
                >
                    <Icon icon=ic::CHEVRON_LEFT />
                    {format!("All {}", kind.noun())}
                </button>
                <p class=format!("{} anim-fade-up", css::category) style=text(1)>
                    {item.category().to_uppercase()}
                    {item.featured().then_some(" · FEATURED")}
                </p>
                <h1 class=format!("{} anim-fade-up", css::title) style=text(2)>
                    {item.title().to_string()}
                </h1>
                <p class=format!("{} anim-fade-up", css::summary) style=text(3)>
                    {item.summary().to_string()}
                </p>
                <div class="anim-fade-up" style=text(4)>{meta}</div>
            </header>

            <div
                node_ref=hero
                class=format!("{} anim-scale-in", css::hero)
                style=timeline.css_timing("image", 0)
            >
                <img src=item.image().to_string() alt=item.title().to_string() style=image_style />
            </div>

            <div class=css::body>
                <div class=css::description inner_html=markdown_to_html(&description)></div>
                {sidebar}
            </div>

            <Gallery images=gallery prefix=kind.gallery_prefix() title=item.title().to_string() />
        </article>
    }
}

#[component]
fn Gallery(images: Vec<String>, prefix: &'static str, title: String) -> impl IntoView {
    if images.is_empty() {
        return ().into_any();
    }

    let tiles = images
        .into_iter()
        .enumerate()
        .map(|(i, src)| {
            let class = match bento_tile(i) {
                BentoTile::Large => css::tileLarge,
                BentoTile::Small => css::tileSmall,
                BentoTile::Wide => css::tileWide,
                BentoTile::Tall => css::tileTall,
            };
            let label = tile_label(prefix, i);
            view! {
                <figure class=format!("{} {}", css::tile, class) data-cursor="grow">
                    <img src=src alt=format!("{} {}", title, label) loading="lazy" />
                    <figcaption class=css::tileLabel>{label}</figcaption>
                </figure>
            }
        })
        .collect_view();

    view! {
        <section class=css::gallery>
            <h2 class=css::galleryTitle>"Gallery"</h2>
            <div class=css::bento>{tiles}</div>
        </section>
    }
    .into_any()
}

/// Allow-listed external link, logging the ones that are dropped.
fn allowed_link(url: &str) -> Option<String> {
    match validate_external_url(url) {
        Ok(url) => Some(url),
        Err(e) => {
            web_sys::console::warn_1(&format!("Blocked external link {}: {}", url, e).into());
            None
        }
    }
}
