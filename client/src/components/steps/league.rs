use leptos::prelude::*;
use stats::query::{League, QueryAction, QueryPatch, QueryState};

use crate::components::query_builder::select_and_advance;

#[component]
pub fn LeagueStep(state: RwSignal<QueryState>) -> impl IntoView {
    view! {
        <div class="option-row">
            {League::ALL
                .into_iter()
                .map(|league| {
                    view! {
                        <button
                            class="option-chip"
                            class:option-chip--selected=move || state.with(|s| s.league == league)
                            on:click=move |_| select_and_advance(state, QueryAction::Update(QueryPatch::league(league)))
                        >
                            {league.label()}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
