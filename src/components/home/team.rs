use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::chrome::RevealGroup;
use crate::components::hooks::reveal_delay;
use crate::components::icons as ic;
use crate::models::TeamMember;
use crate::utils::safe_external_url;

stylance::import_crate_style!(css, "src/components/home/team.module.css");

#[component]
pub fn Team() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let members = ctx.home.with_value(|h| h.team.clone());

    let cards = members
        .into_iter()
        .enumerate()
        .map(|(i, member)| view! { <MemberCard member=member index=i /> })
        .collect_view();

    view! {
        <section class=css::team id="team">
            <header class=css::header>
                <p class=css::kicker>"THE_TEAM"</p>
                <h2 class=css::title>"People behind the pixels"</h2>
            </header>
            <RevealGroup class=css::grid>{cards}</RevealGroup>
        </section>
    }
}

#[component]
fn MemberCard(member: TeamMember, index: usize) -> impl IntoView {
    let linkedin = safe_external_url(member.linkedin.as_deref());
    let github = safe_external_url(member.github.as_deref());

    view! {
        <article class=format!("{} reveal-item", css::card) style=reveal_delay(index) data-cursor="grow">
            <div class=css::photo>
                <img src=member.image.clone() alt=member.name.clone() loading="lazy" />
            </div>
            <h3 class=css::name>{member.name.clone()}</h3>
            <p class=css::role>{member.role.clone()}</p>
            <p class=css::bio>{member.bio.clone()}</p>
            <div class=css::links>
                {linkedin.map(|href| view! {
                    <a href=href target="_blank" rel="noopener noreferrer" aria-label="LinkedIn">
                        <Icon icon=ic::LINKEDIN />
                    </a>
                })}
                {github.map(|href| view! {
                    <a href=href target="_blank" rel="noopener noreferrer" aria-label="GitHub">
                        <Icon icon=ic::GITHUB />
                    </a>
                })}
            </div>
        </article>
    }
}
