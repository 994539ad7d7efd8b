//! Custom situational filter: innings, count, pitcher hand, runners, pitch
//! types. Every control edits a copy of the situation and dispatches it as
//! one patch.

use leptos::prelude::*;
use stats::query::{
    CustomSituation, PITCH_TYPES, PitcherType, QueryAction, QueryPatch, QueryState, RunnerState,
};

use crate::components::query_builder::dispatch;

fn edit_situation(state: RwSignal<QueryState>, edit: impl FnOnce(&mut CustomSituation)) {
    let mut situation = state.with_untracked(|s| s.custom_situation.clone());
    edit(&mut situation);
    dispatch(state, QueryAction::Update(QueryPatch::situation(situation)));
}

fn parse_count(raw: &str) -> Option<u8> {
    raw.parse().ok()
}

#[component]
pub fn CustomSituationStep(state: RwSignal<QueryState>) -> impl IntoView {
    let situation = move || state.with(|s| s.custom_situation.clone());

    view! {
        <div class="situation-step">
            <fieldset class="situation-step__group">
                <legend>"イニング"</legend>
                {(1_u8..=9)
                    .map(|inning| {
                        view! {
                            <button
                                class="option-chip option-chip--small"
                                class:option-chip--selected=move || situation().innings.contains(&inning)
                                on:click=move |_| edit_situation(state, |s| s.toggle_inning(inning))
                            >
                                {format!("{inning}回")}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </fieldset>

            <fieldset class="situation-step__group">
                <legend>"カウント"</legend>
                <label>
                    "ボール "
                    <select on:change=move |ev| {
                        let balls = parse_count(&event_target_value(&ev));
                        edit_situation(state, |s| s.set_balls(balls));
                    }>
                        <option value="" selected=move || situation().balls.is_none()>"指定なし"</option>
                        {(0_u8..=3)
                            .map(|b| {
                                view! {
                                    <option value=b.to_string() selected=move || situation().balls == Some(b)>
                                        {b}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <label>
                    "ストライク "
                    <select on:change=move |ev| {
                        let strikes = parse_count(&event_target_value(&ev));
                        edit_situation(state, |s| s.set_strikes(strikes));
                    }>
                        <option value="" selected=move || situation().strikes.is_none()>"指定なし"</option>
                        {(0_u8..=2)
                            .map(|k| {
                                view! {
                                    <option value=k.to_string() selected=move || situation().strikes == Some(k)>
                                        {k}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
            </fieldset>

            <fieldset class="situation-step__group">
                <legend>"投手"</legend>
                <button
                    class="option-chip option-chip--small"
                    class:option-chip--selected=move || situation().pitcher_type.is_none()
                    on:click=move |_| edit_situation(state, |s| s.pitcher_type = None)
                >
                    "指定なし"
                </button>
                {PitcherType::ALL
                    .into_iter()
                    .map(|pitcher| {
                        view! {
                            <button
                                class="option-chip option-chip--small"
                                class:option-chip--selected=move || situation().pitcher_type == Some(pitcher)
                                on:click=move |_| edit_situation(state, |s| s.pitcher_type = Some(pitcher))
                            >
                                {pitcher.label()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </fieldset>

            <fieldset class="situation-step__group">
                <legend>"走者"</legend>
                {RunnerState::ALL
                    .into_iter()
                    .map(|runner| {
                        view! {
                            <button
                                class="option-chip option-chip--small"
                                class:option-chip--selected=move || situation().runners_on_base.contains(&runner)
                                on:click=move |_| edit_situation(state, |s| s.toggle_runner(runner))
                            >
                                {runner.label()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </fieldset>

            <fieldset class="situation-step__group">
                <legend>"球種"</legend>
                {PITCH_TYPES
                    .into_iter()
                    .map(|(code, label)| {
                        view! {
                            <button
                                class="option-chip option-chip--small"
                                class:option-chip--selected=move || situation().pitch_types.contains(code)
                                on:click=move |_| edit_situation(state, |s| s.toggle_pitch_type(code))
                                title=code
                            >
                                {label}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </fieldset>

            <p class="situation-step__summary">
                {move || {
                    let parts = situation().describe();
                    if parts.is_empty() { "条件を1つ以上選択してください".to_owned() } else { parts.join(" / ") }
                }}
            </p>
        </div>
    }
}
