use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::{APP_NAME, APP_TAGLINE, COPYRIGHT_YEAR, NAV_SECTIONS, contact, socials};
use crate::models::{AppRoute, CatalogKind};
use crate::utils::safe_external_url;

stylance::import_crate_style!(css, "src/components/chrome/footer.module.css");

#[component]
pub fn Footer() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let sections = NAV_SECTIONS
        .iter()
        .map(|(id, label)| {
            let id = *id;
            view! {
                <li>
                    <button on:click=move |_| ctx.navigate(AppRoute::section(id))>{*label}</button>
                </li>
            }
        })
        .collect_view();

    let social = [
        (socials::GITHUB, ic::GITHUB, "GitHub"),
        (socials::LINKEDIN, ic::LINKEDIN, "LinkedIn"),
    ]
    .into_iter()
    .filter_map(|(url, icon, label)| {
        safe_external_url(Some(url)).map(|href| {
            view! {
                <a href=href target="_blank" rel="noopener noreferrer" aria-label=label>
                    <Icon icon=icon />
                </a>
            }
        })
    })
    .collect_view();

    view! {
        <footer class=css::footer>
            <div class=css::grid>
                <div class=css::about>
                    <h2 class=css::name>{APP_NAME}</h2>
                    <p class=css::tagline>{APP_TAGLINE}</p>
                    <div class=css::social>{social}</div>
                </div>

                <div>
                    <h3 class=css::heading>"Explore"</h3>
                    <ul class=css::list>{sections}</ul>
                </div>

                <div>
                    <h3 class=css::heading>"Work"</h3>
                    <ul class=css::list>
                        <li>
                            <button on:click=move |_| ctx.navigate(AppRoute::explore(CatalogKind::Products))>
                                "Products"
                            </button>
                        </li>
                        <li>
                            <button on:click=move |_| ctx.navigate(AppRoute::explore(CatalogKind::Services))>
                                "Services"
                            </button>
                        </li>
                        <li>
                            <button on:click=move |_| ctx.navigate(AppRoute::About)>"About us"</button>
                        </li>
                    </ul>
                </div>

                <div>
                    <h3 class=css::heading>"Contact"</h3>
                    <ul class=css::list>
                        <li>
                            <a href=format!("mailto:{}", contact::EMAIL)>
                                <Icon icon=ic::MAIL />
                                {contact::EMAIL}
                            </a>
                        </li>
                        <li>
                            <span><Icon icon=ic::PHONE />{contact::PHONE}</span>
                        </li>
                        <li>
                            <span><Icon icon=ic::LOCATION />{contact::ADDRESS}</span>
                        </li>
                    </ul>
                </div>
            </div>

            <p class=css::copyright>
                {format!("© {} {}. All rights reserved.", COPYRIGHT_YEAR, APP_NAME)}
            </p>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    const STYLESHEET: &str = include_str!("footer.module.css");

    #[test]
    fn test_stylesheet_defines_footer_classes() {
        for class in [
            "footer", "grid", "about", "name", "tagline", "social", "heading", "list", "copyright",
        ] {
            assert!(
                STYLESHEET.contains(&format!(".{} {{", class)),
                "footer.module.css is missing .{}",
                class
            );
        }
    }
}
