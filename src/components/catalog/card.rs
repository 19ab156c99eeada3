use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::hooks::reveal_delay;
use crate::components::icons as ic;
use crate::models::{AppRoute, CatalogItem, CatalogKind};

stylance::import_crate_style!(css, "src/components/catalog/catalog.module.css");

/// Maximum technology chips shown on a card.
const MAX_CHIPS: usize = 3;

/// Grid card linking to the item's detail page.
#[component]
pub fn CatalogCard<T>(item: T, index: usize) -> impl IntoView
where
    T: CatalogItem + Send + Sync + 'static,
{
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let kind = T::kind();
    let route = AppRoute::detail(kind, item.id());
    let cta = match kind {
        CatalogKind::Products => "View Details",
        CatalogKind::Services => "Learn More",
    };

    let chips = item
        .technologies()
        .iter()
        .take(MAX_CHIPS)
        .map(|t| view! { <span class=css::chip>{t.clone()}</span> })
        .collect_view();

    view! {
        <article
            class=format!("{} reveal-item", css::card)
            style=reveal_delay(index)
            data-cursor="grow"
            on:click=move |_| ctx.navigate(route.clone())
        >
            <div class=css::cardImage>
                <img src=item.image().to_string() alt=item.title().to_string() loading="lazy" />
                {item.featured().then(|| view! { <span class=css::featured>"Featured"</span> })}
            </div>
            <div class=css::cardBody>
                <div class=css::cardMeta>
                    <span class=css::category>{item.category().to_uppercase()}</span>
                    <span class=css::badge>{item.meta_label()}</span>
                </div>
                <h3 class=css::cardTitle>{item.title().to_string()}</h3>
                <p class=css::cardSummary>{item.summary().to_string()}</p>
                <div class=css::chips>{chips}</div>
                <span class=css::cardCta>
                    {cta}
                    <Icon icon=ic::ARROW_RIGHT />
                </span>
            </div>
        </article>
    }
}
