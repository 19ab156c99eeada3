use leptos::prelude::*;

stylance::import_crate_style!(css, "src/components/chrome/spinner.module.css");

/// Centered loading indicator with a caption ("Loading products...").
#[component]
pub fn Spinner(#[prop(into)] label: String) -> impl IntoView {
    view! {
        <div class=css::wrapper role="status" aria-live="polite">
            <span class=css::ring aria-hidden="true"></span>
            <p class=css::label>{label}</p>
        </div>
    }
}
