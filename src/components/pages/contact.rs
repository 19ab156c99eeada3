use leptos::prelude::*;

use super::PageHeader;
use crate::components::home::ContactSection;

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <PageHeader
            kicker="CONTACT"
            title="Let's build something together."
            lede="Tell us about your project and we'll get back to you within two working days."
        />
        <ContactSection />
    }
}
