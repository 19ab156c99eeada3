//! Hero: staggered headline reveal above the string curve.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::string_curve::StringCurve;
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::APP_TAGLINE;
use crate::core::motion::{Ease, Position, Timeline};
use crate::models::{AppRoute, CatalogKind};

stylance::import_crate_style!(css, "src/components/home/hero.module.css");

const HEADLINE: &str = "We engineer digital products that move people.";

fn intro(words: usize) -> Timeline {
    Timeline::new()
        .add("word", words, 1.0, 0.08, Ease::Power3Out, Position::At(0.2))
        .add("copy", 2, 0.8, 0.15, Ease::Power2Out, Position::Overlap(0.6))
        .add("curve", 1, 1.2, 0.0, Ease::ExpoOut, Position::Overlap(0.4))
}

#[component]
pub fn Hero() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let words: Vec<&str> = HEADLINE.split_whitespace().collect();
    let timeline = intro(words.len());

    let headline = words
        .iter()
        .enumerate()
        .map(|(i, word)| {
            view! {
                <span class=css::wordMask>
                    <span class="anim-rise" style=timeline.css_timing("word", i)>{*word}</span>
                </span>
            }
        })
        .collect_view();

    view! {
        <section class=css::hero id="top">
            <p class=css::kicker>"Digital product studio"</p>
            <h1 class=css::headline>{headline}</h1>
            <p class=format!("{} anim-fade-up", css::lede) style=timeline.css_timing("copy", 0)>
                {APP_TAGLINE}
            </p>
            <div class=format!("{} anim-fade-up", css::actions) style=timeline.css_timing("copy", 1)>
                <button
                    class=css::primary
                    on:click=move |_| ctx.navigate(AppRoute::explore(CatalogKind::Products))
                >
                    "See our work"
                    <Icon icon=ic::ARROW_RIGHT />
                </button>
                <button class=css::secondary on:click=move |_| ctx.navigate(AppRoute::section("contact"))>
                    "Start a project"
                </button>
            </div>
            <div class=format!("{} anim-fade-in", css::curveWrap) style=timeline.css_timing("curve", 0)>
                <StringCurve />
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intro_sequence() {
        let words = HEADLINE.split_whitespace().count();
        let tl = intro(words);
        let word = tl.track("word").unwrap();
        let copy = tl.track("copy").unwrap();
        assert_eq!(word.count, 7);
        // copy overlaps the end of the headline
        assert!(copy.start < word.end());
        assert!(tl.track("curve").unwrap().start > copy.start);
    }
}
