//! Final summary and execute button.

use leptos::prelude::*;
use stats::query::QueryState;

#[component]
pub fn PreviewStep(
    state: RwSignal<QueryState>,
    on_execute: Callback<QueryState>,
    #[prop(into)] loading: Signal<bool>,
) -> impl IntoView {
    let ready = move || state.with(QueryState::is_ready);

    view! {
        <div class="preview-step">
            <dl class="preview-step__summary">
                {move || {
                    state
                        .with(QueryState::preview_rows)
                        .into_iter()
                        .map(|(label, value)| view! { <dt>{label}</dt><dd>{value}</dd> })
                        .collect::<Vec<_>>()
                }}
            </dl>
            <button
                class="btn btn--primary preview-step__execute"
                disabled=move || loading.get() || !ready()
                on:click=move |_| on_execute.run(state.get_untracked())
            >
                {move || if loading.get() { "実行中..." } else { "クエリを実行" }}
            </button>
        </div>
    }
}
