//! Season picker: all seasons or one specific year.

use leptos::prelude::*;
use stats::query::{DEFAULT_SEASON, FIRST_SEASON, QueryAction, QueryPatch, QueryState, SeasonMode};

use crate::components::query_builder::dispatch;

#[component]
pub fn SeasonStep(state: RwSignal<QueryState>) -> impl IntoView {
    let mode = move || state.with(|s| s.season_mode);
    let year = move || state.with(|s| s.specific_year);
    let set = move |mode: SeasonMode, year: u16| dispatch(state, QueryAction::Update(QueryPatch::season(mode, year)));

    view! {
        <div class="season-step">
            <label class="season-step__option">
                <input
                    type="radio"
                    name="season-mode"
                    prop:checked=move || mode() == SeasonMode::Specific
                    on:change=move |_| set(SeasonMode::Specific, year())
                />
                "シーズンを指定"
            </label>
            <select
                class="season-step__year"
                disabled=move || mode() == SeasonMode::All
                prop:value=move || year().to_string()
                on:change=move |ev| {
                    if let Ok(y) = event_target_value(&ev).parse::<u16>() {
                        set(SeasonMode::Specific, y);
                    }
                }
            >
                {(FIRST_SEASON..=DEFAULT_SEASON)
                    .rev()
                    .map(|y| view! { <option value=y.to_string()>{format!("{y}年")}</option> })
                    .collect::<Vec<_>>()}
            </select>
            <label class="season-step__option">
                <input
                    type="radio"
                    name="season-mode"
                    prop:checked=move || mode() == SeasonMode::All
                    on:change=move |_| set(SeasonMode::All, year())
                />
                "全シーズン"
            </label>
        </div>
    }
}
