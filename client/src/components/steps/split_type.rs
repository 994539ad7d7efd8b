use leptos::prelude::*;
use stats::query::{QueryAction, QueryPatch, QueryState, SplitType};

use crate::components::query_builder::select_and_advance;

#[component]
pub fn SplitTypeStep(state: RwSignal<QueryState>) -> impl IntoView {
    view! {
        <div class="option-row">
            {SplitType::ALL
                .into_iter()
                .map(|split| {
                    view! {
                        <button
                            class="option-chip"
                            class:option-chip--selected=move || state.with(|s| s.split_type == Some(split))
                            on:click=move |_| {
                                select_and_advance(state, QueryAction::Update(QueryPatch::split_type(split)));
                            }
                        >
                            {split.label()}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
