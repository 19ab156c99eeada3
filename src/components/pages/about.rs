use leptos::prelude::*;

use super::PageHeader;
use crate::components::home::{AboutSection, Team, Testimonials};

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <PageHeader
            kicker="ABOUT US"
            title="A small studio with a big appetite."
            lede="We design and build digital products for people who care about the details."
        />
        <AboutSection />
        <Team />
        <Testimonials />
    }
}
