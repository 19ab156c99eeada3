use leptos::prelude::*;
use leptos_icons::Icon;

use super::css;
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::AppRoute;

/// Fallback for hashes that match no route.
#[component]
pub fn NotFoundPage(path: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <section class=css::notFound>
            <p class=css::code>"404"</p>
            <h1 class=css::title>"Page not found"</h1>
            <p class=css::lede>
                "Nothing lives at "
                <code class=css::path>{format!("#/{}", path)}</code>
                "."
            </p>
            <button class=css::home on:click=move |_| ctx.navigate(AppRoute::home())>
                "Back to home"
                <Icon icon=ic::ARROW_RIGHT />
            </button>
        </section>
    }
}
