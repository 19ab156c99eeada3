//! "CORE_CAPABILITIES": a pinned stack of cards that peel away one by one
//! as the visitor scrolls.

use leptos::html::Div;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::hooks::use_pinned_progress;
use crate::components::icons as ic;
use crate::config::motion::{STACK_DISTANCE_PER_CARD, STACK_OFFSET_PX, STACK_SCALE_STEP};
use crate::core::motion::scroll::stack_card;
use crate::models::{AppRoute, Capability, CatalogKind};

stylance::import_crate_style!(css, "src/components/home/capabilities.module.css");

#[component]
pub fn Capabilities() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let cards = ctx.home.with_value(|h| h.capabilities.clone());
    let count = cards.len();

    let wrapper = NodeRef::<Div>::new();
    let pinning = Signal::derive(move || ctx.motion.pinning());
    let distance = Signal::derive(move || {
        if pinning.get() { STACK_DISTANCE_PER_CARD * count as f64 } else { 0.0 }
    });
    let progress = use_pinned_progress(wrapper, distance);

    let items = cards
        .into_iter()
        .enumerate()
        .map(|(index, cap)| {
            let style = move || {
                if pinning.get() {
                    stack_card(index, count, progress.get(), STACK_OFFSET_PX, STACK_SCALE_STEP).style()
                } else {
                    String::new()
                }
            };
            view! { <CapabilityCard capability=cap style=Signal::derive(style) /> }
        })
        .collect_view();

    view! {
        <section class=css::section id="services">
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
                        <p class=css::kicker>"CORE_CAPABILITIES"</p>
                        <h2 class=css::title>"What we do best"</h2>
                        <button
                            class=css::all
                            on:click=move |_| ctx.navigate(AppRoute::explore(CatalogKind::Services))
                        >
                            "All services"
                            <Icon icon=ic::ARROW_RIGHT />
                        </button>
                    </header>
                    <div class=css::stack>{items}</div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn CapabilityCard(capability: Capability, style: Signal<String>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let service_id = capability.service_id.clone();

    view! {
        <article class=css::card style=move || style.get() data-cursor="grow">
            <div class=css::cardTop>
                <span class=css::index>{capability.index.clone()}</span>
                <span class=css::tag>{capability.tag.clone()}</span>
            </div>
            <div class=css::icon>
                <Icon icon=ic::capability(capability.icon) />
            </div>
            <h3 class=css::cardTitle>{capability.title.clone()}</h3>
            <p class=css::subtitle>{capability.subtitle.clone()}</p>
            <p class=css::description>{capability.description.clone()}</p>
            <button
                class=css::execute
                on:click=move |_| ctx.navigate(AppRoute::detail(CatalogKind::Services, &service_id))
            >
                "EXECUTE"
                <Icon icon=ic::ARROW_UP_RIGHT />
            </button>
        </article>
    }
}
