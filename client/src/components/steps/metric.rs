//! Metric pickers: multi-select for player queries, single sort key for
//! leaderboards.

use leptos::prelude::*;
use stats::metrics::{MetricInfo, metrics_for};
use stats::query::{QueryAction, QueryPatch, QueryState};

use crate::components::query_builder::{dispatch, select_and_advance};

fn offered(state: RwSignal<QueryState>) -> Vec<&'static MetricInfo> {
    state.with_untracked(|s| s.category.map(metrics_for).unwrap_or_default())
}

#[component]
pub fn MetricStep(state: RwSignal<QueryState>) -> impl IntoView {
    let single = state.with_untracked(|s| s.category.is_some_and(stats::Category::single_metric));

    view! {
        <div class="metric-step">
            <Show when=move || single>
                <p class="metric-step__hint">"このカテゴリでは指標を1つ選択します"</p>
            </Show>
            <div class="option-grid option-grid--compact">
                {offered(state)
                    .into_iter()
                    .map(|info| {
                        let id = info.id;
                        view! {
                            <button
                                class="option-chip"
                                class:option-chip--selected=move || state.with(|s| s.metrics.iter().any(|m| m == id))
                                on:click=move |_| dispatch(state, QueryAction::ToggleMetric(id.to_owned()))
                                title=info.short
                            >
                                {info.label}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}

#[component]
pub fn SortMetricStep(state: RwSignal<QueryState>) -> impl IntoView {
    view! {
        <div class="option-grid option-grid--compact">
            {offered(state)
                .into_iter()
                .map(|info| {
                    let id = info.id;
                    view! {
                        <button
                            class="option-chip"
                            class:option-chip--selected=move || state.with(|s| s.metric_order.as_deref() == Some(id))
                            on:click=move |_| {
                                select_and_advance(
                                    state,
                                    QueryAction::Update(QueryPatch::metric_order(Some(id.to_owned()))),
                                );
                            }
                        >
                            {info.label}
                            {info.lower_is_better.then_some(" ↑")}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
