//! Player search with a results list.
//!
//! Each keystroke bumps a sequence number; a response is applied only when
//! its sequence is still the latest, so slow responses never overwrite a
//! newer search.

use leptos::prelude::*;
use stats::player::{Player, search_term};
use stats::query::{QueryAction, QueryPatch, QueryState};

use crate::components::query_builder::{dispatch, select_and_advance};
use crate::net::api::search_players;

#[component]
pub fn PlayerSearchStep(state: RwSignal<QueryState>) -> impl IntoView {
    let term = RwSignal::new(String::new());
    let results = RwSignal::new(Vec::<Player>::new());
    let searching = RwSignal::new(false);
    let seq = StoredValue::new(0_u64);

    let on_input = move |ev: leptos::ev::Event| {
        let raw = event_target_value(&ev);
        term.set(raw.clone());
        seq.update_value(|n| *n += 1);
        let ticket = seq.get_value();
        if search_term(&raw).is_none() {
            results.set(Vec::new());
            searching.set(false);
            return;
        }
        searching.set(true);
        leptos::task::spawn_local(async move {
            let found = search_players(&raw).await;
            if seq.get_value() == ticket {
                results.set(found);
                searching.set(false);
            }
        });
    };

    let selected = move || state.with(|s| s.player.clone());

    view! {
        <div class="player-search">
            {move || {
                selected()
                    .map(|player| {
                        view! {
                            <div class="player-search__selected">
                                <span>"選択中: " {player.display()}</span>
                                <button
                                    class="btn btn--small"
                                    on:click=move |_| dispatch(state, QueryAction::Update(QueryPatch::player(None)))
                                >
                                    "解除"
                                </button>
                            </div>
                        }
                    })
            }}
            <input
                class="player-search__input"
                type="search"
                placeholder="選手名を入力（2文字以上）"
                prop:value=move || term.get()
                on:input=on_input
            />
            <Show when=move || searching.get()>
                <p class="player-search__status">"検索中..."</p>
            </Show>
            <Show when=move || {
                !searching.get() && results.with(Vec::is_empty) && search_term(&term.get()).is_some()
            }>
                <p class="player-search__status">"該当する選手が見つかりません"</p>
            </Show>
            <ul class="player-search__results">
                <For each=move || results.get() key=|p| p.id let:player>
                    {
                        let label = player.display();
                        let league = player.league.clone().unwrap_or_default();
                        view! {
                            <li
                                class="player-search__result"
                                on:click=move |_| {
                                    select_and_advance(
                                        state,
                                        QueryAction::Update(QueryPatch::player(Some(player.clone()))),
                                    );
                                }
                            >
                                <span class="player-search__name">{label}</span>
                                <span class="player-search__league">{league}</span>
                            </li>
                        }
                    }
                </For>
            </ul>
        </div>
    }
}
