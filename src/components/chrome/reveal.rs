use leptos::html::Div;
use leptos::prelude::*;

use crate::components::hooks::use_reveal;

/// Container whose `.reveal-item` children fade up once it crosses the
/// reveal line, and hide again when scrolled back above it.
///
/// Children stagger themselves with [`crate::components::hooks::reveal_delay`].
#[component]
pub fn RevealGroup(
    #[prop(into, optional)] class: String,
    #[prop(optional)] id: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let node = NodeRef::<Div>::new();
    let revealed = use_reveal(node);

    view! {
        <div
            node_ref=node
            id=id
            class=move || {
                if revealed.get() { format!("{} is-revealed", class) } else { class.clone() }
            }
        >
            {children()}
        </div>
    }
}
