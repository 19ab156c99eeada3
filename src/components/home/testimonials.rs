//! Testimonial carousel: looping, centred, autoplaying.

use leptos::html::Div;
use leptos::prelude::*;
use leptos_icons::Icon;
use leptos_use::{UseElementBoundingReturn, use_element_bounding, use_interval_fn};

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::carousel::{
    AUTOPLAY_MS, AUTOPLAY_POLL_MS, INACTIVE_OPACITY, SLIDES_PER_VIEW, SPACE_BETWEEN, SPEED_MS,
};
use crate::core::{Autoplay, Carousel, CarouselLayout};
use crate::models::Testimonial;
use crate::utils::dom;
use crate::utils::format::{padded_index, stars};

stylance::import_crate_style!(css, "src/components/home/testimonials.module.css");

const LAYOUT: CarouselLayout = CarouselLayout {
    slides_per_view: SLIDES_PER_VIEW,
    space_between: SPACE_BETWEEN,
};

/// Inline style for a slide `offset` positions from the active one.
///
/// Slides further than one position away are hidden and jump without a
/// transition, so wrapping around the loop never sweeps across the view.
fn slide_style(offset: i32, viewport: f64) -> String {
    let width = LAYOUT.slide_width(viewport);
    let x = LAYOUT.slide_x(offset, viewport);
    let (opacity, transition) = match offset.abs() {
        0 => (1.0, true),
        1 => (INACTIVE_OPACITY, true),
        _ => (0.0, false),
    };
    let transition = if transition {
        format!("transform {ms}ms ease, opacity {ms}ms ease", ms = SPEED_MS)
    } else {
        "none".to_string()
    };
    format!(
        "width: {:.2}px; transform: translate3d({:.2}px, 0, 0); opacity: {}; transition: {};",
        width, x, opacity, transition
    )
}

#[component]
pub fn Testimonials() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let testimonials = ctx.home.with_value(|h| h.testimonials.clone());
    let carousel = RwSignal::new(Carousel::new(testimonials.len()));
    if carousel.with_untracked(Carousel::is_empty) {
        return ().into_any();
    }

    let viewport = NodeRef::<Div>::new();
    let UseElementBoundingReturn { width, .. } = use_element_bounding(viewport);

    // Manual navigation restarts the autoplay delay but never stops it.
    let autoplay = StoredValue::new(Autoplay::new(AUTOPLAY_MS, dom::now_ms()));
    let _ = use_interval_fn(
        move || {
            let now = dom::now_ms();
            let mut due = false;
            autoplay.update_value(|a| due = a.tick(now));
            if due {
                carousel.update(Carousel::next);
            }
        },
        AUTOPLAY_POLL_MS,
    );
    let navigate = move |step: &dyn Fn(&mut Carousel)| {
        carousel.update(|c| step(c));
        autoplay.update_value(|a| a.restart(dom::now_ms()));
    };

    let slides = testimonials
        .into_iter()
        .enumerate()
        .map(|(index, testimonial)| {
            let style = move || slide_style(carousel.with(|c| c.relative_offset(index)), width.get());
            let active = move || carousel.with(|c| c.is_active(index));
            view! {
                <div
                    class=move || if active() { format!("{} {}", css::slide, css::active) } else { css::slide.to_string() }
                    style=style
                    aria-hidden=move || (!active()).to_string()
                    on:click=move |_| navigate(&|c: &mut Carousel| c.go_to(index))
                >
                    <Quote testimonial=testimonial />
                </div>
            }
        })
        .collect_view();

    let count = carousel.with_untracked(Carousel::len);
    let dots = (0..count)
        .map(|index| {
            view! {
                <button
                    class=move || {
                        if carousel.with(|c| c.is_active(index)) {
                            format!("{} {}", css::dot, css::dotActive)
                        } else {
                            css::dot.to_string()
                        }
                    }
                    aria-label=format!("Show testimonial {}", index + 1)
                    on:click=move |_| navigate(&|c: &mut Carousel| c.go_to(index))
                ></button>
            }
        })
        .collect_view();

    view! {
        <section class=css::testimonials id="testimonials">
            <header class=css::header>
                <p class=css::kicker>"CLIENT_SIGNALS"</p>
                <h2 class=css::title>"What our clients say"</h2>
            </header>
            <div class=css::viewport node_ref=viewport>
                {slides}
            </div>
            <div class=css::controls>
                <button
                    class=css::arrow
                    aria-label="Previous testimonial"
                    on:click=move |_| navigate(&Carousel::prev)
                >
                    <Icon icon=ic::CHEVRON_LEFT />
                </button>
                <div class=css::dots>{dots}</div>
                <span class=css::counter aria-live="polite">
                    {move || format!(
                        "{} / {}",
                        padded_index(carousel.with(Carousel::active)),
                        padded_index(count - 1),
                    )}
                </span>
                <button
                    class=css::arrow
                    aria-label="Next testimonial"
                    on:click=move |_| navigate(&Carousel::next)
                >
                    <Icon icon=ic::CHEVRON_RIGHT />
                </button>
            </div>
        </section>
    }
    .into_any()
}

#[component]
fn Quote(testimonial: Testimonial) -> impl IntoView {
    view! {
        <figure class=css::quote>
            {testimonial.rating.map(|r| view! {
                <p class=css::rating aria-label=format!("{} out of 5", r)>{stars(r)}</p>
            })}
            <blockquote>{format!("\u{201c}{}\u{201d}", testimonial.quote)}</blockquote>
            <figcaption class=css::author>
                <img src=testimonial.image.clone() alt="" loading="lazy" />
                <div>
                    <strong>{testimonial.name.clone()}</strong>
                    <span>{testimonial.byline().to_string()}</span>
                    {testimonial.date.clone().map(|d| view! { <span class=css::date>{d}</span> })}
                </div>
            </figcaption>
        </figure>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slide_style_hides_far_slides() {
        let far = slide_style(2, 1230.0);
        assert!(far.contains("opacity: 0;"));
        assert!(far.contains("transition: none;"));

        let neighbour = slide_style(-1, 1230.0);
        assert!(neighbour.contains(&format!("opacity: {};", INACTIVE_OPACITY)));
        assert!(neighbour.contains("translate3d(-630.00px"));

        let active = slide_style(0, 1230.0);
        assert!(active.contains("width: 810.00px;"));
        assert!(active.contains("opacity: 1;"));
    }
}
