//! Get-in-touch call to action and the contact form.
//!
//! The form has no backend: a valid submission opens the visitor's mail
//! client with a prefilled `mailto:` link.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::chrome::RevealGroup;
use crate::components::hooks::reveal_delay;
use crate::components::icons as ic;
use crate::config::contact::{ADDRESS, EMAIL, PHONE};
use crate::core::ContactForm;
use crate::core::error::ContactError;
use crate::models::AppRoute;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/home/contact.module.css");

/// Big "let's talk" banner leading into the contact section.
#[component]
pub fn GetInTouch() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <section class=css::cta>
            <RevealGroup class=css::ctaInner>
                <p class=format!("{} reveal-item", css::kicker)>"GET_IN_TOUCH"</p>
                <h2 class=format!("{} reveal-item", css::ctaTitle) style=reveal_delay(1)>
                    "Have an idea? Let's build it together."
                </h2>
                <button
                    class=format!("{} reveal-item", css::ctaButton)
                    style=reveal_delay(2)
                    on:click=move |_| ctx.navigate(AppRoute::section("contact"))
                >
                    "Start a conversation"
                    <Icon icon=ic::ARROW_UP_RIGHT />
                </button>
            </RevealGroup>
        </section>
    }
}

/// Contact details beside a validated enquiry form.
#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <section class=css::contact id="contact">
            <div class=css::details>
                <p class=css::kicker>"CONTACT"</p>
                <h2 class=css::title>"Tell us about your project"</h2>
                <p class=css::lede>
                    "Share a few details and we'll get back to you within two working days."
                </p>
                <ul class=css::channels>
                    <li>
                        <Icon icon=ic::MAIL />
                        <a href=format!("mailto:{}", EMAIL)>{EMAIL}</a>
                    </li>
                    <li>
                        <Icon icon=ic::PHONE />
                        <span>{PHONE}</span>
                    </li>
                    <li>
                        <Icon icon=ic::LOCATION />
                        <span>{ADDRESS}</span>
                    </li>
                </ul>
            </div>
            <EnquiryForm />
        </section>
    }
}

#[component]
fn EnquiryForm() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let company = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let errors = RwSignal::new(Vec::<ContactError>::new());
    let sent = RwSignal::new(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let form = ContactForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            company: company.get_untracked(),
            message: message.get_untracked(),
        };
        match form.mailto() {
            Ok(url) => {
                errors.set(Vec::new());
                sent.set(true);
                dom::navigate_to(&url);
            }
            Err(problems) => {
                sent.set(false);
                errors.set(problems);
            }
        }
    };

    let has_error = move |pick: fn(&ContactError) -> bool| errors.with(|e| e.iter().any(pick));

    view! {
        <form class=css::form on:submit=on_submit novalidate=true>
            <label class=css::field>
                <span>"Name"</span>
                <input
                    type="text"
                    name="name"
                    autocomplete="name"
                    bind:value=name
                    aria-invalid=move || has_error(|e| matches!(e, ContactError::MissingName)).to_string()
                />
            </label>
            <label class=css::field>
                <span>"Email"</span>
                <input
                    type="email"
                    name="email"
                    autocomplete="email"
                    bind:value=email
                    aria-invalid=move || has_error(|e| matches!(e, ContactError::InvalidEmail)).to_string()
                />
            </label>
            <label class=css::field>
                <span>"Company " <em>"(optional)"</em></span>
                <input type="text" name="company" autocomplete="organization" bind:value=company />
            </label>
            <label class=css::field>
                <span>"Message"</span>
                <textarea
                    name="message"
                    rows="5"
                    bind:value=message
                    aria-invalid=move || {
                        has_error(|e| {
                            matches!(e, ContactError::MessageTooShort(_) | ContactError::MessageTooLong(_))
                        })
                        .to_string()
                    }
                ></textarea>
            </label>

            <Show when=move || errors.with(|e| !e.is_empty())>
                <ul class=css::errors role="alert">
                    {move || errors.get().into_iter().map(|e| view! { <li>{e.to_string()}</li> }).collect_view()}
                </ul>
            </Show>
            <Show when=move || sent.get()>
                <p class=css::sent role="status">"Opening your mail app. Thanks for reaching out!"</p>
            </Show>

            <button type="submit" class=css::submit>
                "Send message"
                <Icon icon=ic::ARROW_RIGHT />
            </button>
        </form>
    }
}
