use leptos::prelude::*;

use crate::core::CategoryFilter;

stylance::import_crate_style!(css, "src/components/catalog/catalog.module.css");

/// Category pills. The selected pill is highlighted; clicking the selected
/// pill again changes nothing.
#[component]
pub fn FilterBar(
    #[prop(into)] categories: Signal<Vec<CategoryFilter>>,
    selected: RwSignal<CategoryFilter>,
) -> impl IntoView {
    view! {
        <div class=css::filters role="tablist" aria-label="Filter by category">
            <For
                each=move || categories.get()
                key=|filter| filter.clone()
                children=move |filter| {
                    let label = filter.label();
                    let value = filter.clone();
                    let is_selected = Signal::derive(move || selected.with(|s| *s == filter));
                    view! {
                        <button
                            role="tab"
                            aria-selected=move || is_selected.get().to_string()
                            class=move || {
                                if is_selected.get() {
                                    format!("{} {}", css::pill, css::pillActive)
                                } else {
                                    css::pill.to_string()
                                }
                            }
                            on:click=move |_| {
                                if selected.with_untracked(|s| *s != value) {
                                    selected.set(value.clone());
                                }
                            }
                        >
                            {label}
                        </button>
                    }
                }
            />
        </div>
    }
}
