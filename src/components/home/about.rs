use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::chrome::RevealGroup;
use crate::components::hooks::reveal_delay;
use crate::config::APP_NAME;
use crate::utils::format::kicker;

stylance::import_crate_style!(css, "src/components/home/about.module.css");

/// Company blurb with headline numbers pulled from the catalogs.
#[component]
pub fn AboutSection() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let stats = move || {
        let products = ctx.products.with(|c| c.as_ref().map_or(0, |c| c.len()));
        let services = ctx.services.with(|c| c.as_ref().map_or(0, |c| c.len()));
        let team = ctx.home.with_value(|h| h.team.len());
        [
            (format!("{}+", products), "Products shipped"),
            (services.to_string(), "Core services"),
            (team.to_string(), "Specialists"),
            ("100%".to_string(), "Client satisfaction"),
        ]
    };

    view! {
        <section class=css::about id="about">
            <RevealGroup class=css::grid>
                <p class=format!("{} reveal-item", css::kicker)>{kicker("About us")}</p>
                <h2 class=format!("{} reveal-item", css::title) style=reveal_delay(1)>
                    {format!("{} is a small studio with a big appetite for craft.", APP_NAME)}
                </h2>
                <div class=format!("{} reveal-item", css::body) style=reveal_delay(2)>
                    <p>
                        "We partner with founders and teams to design, build and grow digital products. "
                        "Strategy, design and engineering sit in one room, so ideas reach production without losing their edge."
                    </p>
                    <p>
                        "From regional delivery platforms to clinic software, we ship work that holds up in the real world."
                    </p>
                </div>
            </RevealGroup>
            <RevealGroup class=css::stats>
                {move || {
                    stats()
                        .into_iter()
                        .enumerate()
                        .map(|(i, (value, label))| {
                            view! {
                                <div class=format!("{} reveal-item", css::stat) style=reveal_delay(i)>
                                    <span class=css::value>{value}</span>
                                    <span class=css::label>{label}</span>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </RevealGroup>
        </section>
    }
}
