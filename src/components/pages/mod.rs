//! Secondary pages outside the home scroll.

mod about;
mod contact;
mod not_found;

pub use about::AboutPage;
pub use contact::ContactPage;
pub use not_found::NotFoundPage;

stylance::import_crate_style!(css, "src/components/pages/pages.module.css");

use leptos::prelude::*;

/// Title block shared by the secondary pages.
#[component]
fn PageHeader(kicker: &'static str, title: &'static str, lede: &'static str) -> impl IntoView {
    view! {
        <header class=css::header>
            <p class=format!("{} anim-fade-up", css::kicker)>{kicker}</p>
            <h1 class=format!("{} anim-fade-up", css::title) style="animation-delay: 0.1s;">
                {title}
            </h1>
            <p class=format!("{} anim-fade-up", css::lede) style="animation-delay: 0.2s;">
                {lede}
            </p>
        </header>
    }
}
