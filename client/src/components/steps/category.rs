//! Analysis category picker.

use leptos::prelude::*;
use stats::query::{Category, QueryAction, QueryPatch, QueryState};

use crate::components::query_builder::select_and_advance;

#[component]
pub fn CategoryStep(state: RwSignal<QueryState>) -> impl IntoView {
    let selected = move || state.with(|s| s.category);

    view! {
        <div class="option-grid">
            {Category::ALL
                .into_iter()
                .map(|category| {
                    view! {
                        <button
                            class="option-card"
                            class:option-card--selected=move || selected() == Some(category)
                            on:click=move |_| {
                                select_and_advance(state, QueryAction::Update(QueryPatch::category(category)));
                            }
                        >
                            <span class="option-card__title">{category.label()}</span>
                            <span class="option-card__description">{category.description()}</span>
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
