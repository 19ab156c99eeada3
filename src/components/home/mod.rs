//! Home page sections.
//!
//! Rendered top to bottom: hero, about, capability stack, project
//! showcases, team, call to action, contact and testimonials. Section ids
//! match the navbar anchors in `config::NAV_SECTIONS`.

mod about;
mod capabilities;
mod contact;
mod hero;
mod showcase;
mod string_curve;
mod team;
mod testimonials;

use leptos::prelude::*;

pub use about::AboutSection;
pub use contact::{ContactSection, GetInTouch};
pub use team::Team;
pub use testimonials::Testimonials;

use capabilities::Capabilities;
use hero::Hero;
use showcase::Projects;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Hero />
        <AboutSection />
        <Capabilities />
        <Projects />
        <Team />
        <GetInTouch />
        <ContactSection />
        <Testimonials />
    }
}
