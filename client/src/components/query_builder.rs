//! Multi-step custom query builder.
//!
//! ARCHITECTURE
//! ============
//! The builder owns one `RwSignal<QueryState>` and never mutates it directly:
//! every step component dispatches a `QueryAction` through [`dispatch`],
//! which runs the pure reducer from `stats::query`. Step layout, completion,
//! and navigation rules therefore live in one tested place.

use leptos::prelude::*;
use stats::query::{QueryAction, QueryState, StepKind, reduce};

use crate::components::steps::{
    CategoryStep, CustomSituationStep, LeagueStep, MetricStep, PlayerSearchStep, PreviewStep, SeasonStep,
    SortMetricStep, SplitTypeStep,
};

/// Apply one action to the builder state.
pub fn dispatch(state: RwSignal<QueryState>, action: QueryAction) {
    state.update(|s| *s = reduce(std::mem::take(s), action));
}

/// Apply an update and move on when the step became complete.
pub fn select_and_advance(state: RwSignal<QueryState>, action: QueryAction) {
    dispatch(state, action);
    dispatch(state, QueryAction::Advance);
}

#[component]
pub fn QueryBuilder(
    on_execute: Callback<QueryState>,
    #[prop(optional)] on_reset: Option<Callback<()>>,
    #[prop(into)] loading: Signal<bool>,
) -> impl IntoView {
    let state = RwSignal::new(QueryState::default());
    let step = Memo::new(move |_| state.with(QueryState::current_step));

    let on_reset_click = move |_| {
        dispatch(state, QueryAction::Reset);
        if let Some(cb) = on_reset {
            cb.run(());
        }
    };

    view! {
        <div class="query-builder">
            <StepIndicator state=state/>
            <h3 class="query-builder__title">{move || step.get().title()}</h3>
            <div class="query-builder__body">
                {move || match step.get() {
                    StepKind::Category => view! { <CategoryStep state=state/> }.into_any(),
                    StepKind::Player => view! { <PlayerSearchStep state=state/> }.into_any(),
                    StepKind::League => view! { <LeagueStep state=state/> }.into_any(),
                    StepKind::SplitType => view! { <SplitTypeStep state=state/> }.into_any(),
                    StepKind::CustomSituation => view! { <CustomSituationStep state=state/> }.into_any(),
                    StepKind::Season => view! { <SeasonStep state=state/> }.into_any(),
                    StepKind::Metrics => view! { <MetricStep state=state/> }.into_any(),
                    StepKind::SortMetric => view! { <SortMetricStep state=state/> }.into_any(),
                    StepKind::Preview => {
                        view! { <PreviewStep state=state on_execute=on_execute loading=loading/> }.into_any()
                    }
                }}
            </div>
            <div class="query-builder__nav">
                <button
                    class="btn"
                    disabled=move || state.with(|s| s.step <= 1)
                    on:click=move |_| dispatch(state, QueryAction::Back)
                >
                    "戻る"
                </button>
                <button class="btn" on:click=on_reset_click>
                    "リセット"
                </button>
                <Show when=move || step.get() != StepKind::Preview>
                    <button
                        class="btn btn--primary"
                        disabled=move || !state.with(QueryState::can_advance)
                        on:click=move |_| dispatch(state, QueryAction::Advance)
                    >
                        "次へ"
                    </button>
                </Show>
            </div>
        </div>
    }
}

/// Numbered step trail. Completed steps can be revisited by clicking.
#[component]
fn StepIndicator(state: RwSignal<QueryState>) -> impl IntoView {
    view! {
        <ol class="step-indicator">
            {move || {
                let current = state.with(|s| s.step);
                state
                    .with(|s| {
                        s.layout()
                            .iter()
                            .enumerate()
                            .map(|(i, kind)| {
                                let n = u8::try_from(i + 1).unwrap_or(u8::MAX);
                                (n, kind.title(), s.is_step_complete(n))
                            })
                            .collect::<Vec<_>>()
                    })
                    .into_iter()
                    .map(|(n, title, complete)| {
                        view! {
                            <li
                                class="step-indicator__item"
                                class:step-indicator__item--active={n == current}
                                class:step-indicator__item--complete=complete
                                on:click=move |_| dispatch(state, QueryAction::JumpTo(n))
                            >
                                <span class="step-indicator__number">{n}</span>
                                <span class="step-indicator__title">{title}</span>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </ol>
    }
}
