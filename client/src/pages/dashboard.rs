//! Dashboard page: chat, quick questions, and the custom query builder.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the gated landing route. It redirects to `/login` once the gate
//! check reports a locked session, switches between the three modes, and
//! runs quick and custom requests into `DashboardState`'s result slots.
//! Planning failures never reach the network; they become a text envelope.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use stats::StatsResponse;
use stats::plan::{FixedQuery, failure_summary, plan_query};
use stats::query::QueryState;
use stats::quick::{QuickRequest, find_quick_question};

use crate::components::chat_panel::ChatPanel;
use crate::components::query_builder::QueryBuilder;
use crate::components::quick_questions::QuickQuestions;
use crate::components::result_view::ResultView;
use crate::net::api::{call_backend_api, call_fixed_query_api};
use crate::state::auth::AuthState;
use crate::state::dashboard::{DashboardMode, DashboardState, ResultSlot};

const UNKNOWN_PRESET: &str = "指定されたクイック質問が見つかりません。";

/// Plan the builder state, or the summary envelope shown instead of a call.
fn plan_custom_query(state: &QueryState) -> Result<FixedQuery, StatsResponse> {
    plan_query(state).map_err(|err| StatsResponse::text(failure_summary(state.category, &err)))
}

/// Resolve a preset id, or the envelope explaining why it cannot run.
fn resolve_quick_question(id: &str) -> Result<QuickRequest, StatsResponse> {
    let question = find_quick_question(id).ok_or_else(|| StatsResponse::text(UNKNOWN_PRESET))?;
    question.request().map_err(|err| StatsResponse::text(failure_summary(None, &err)))
}

async fn run_quick_request(request: QuickRequest) -> (Option<FixedQuery>, StatsResponse) {
    match request {
        QuickRequest::Ask { query, season } => (None, call_backend_api(&query, season).await),
        QuickRequest::Fixed(query) => {
            let response = call_fixed_query_api(&query).await;
            (Some(query), response)
        }
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let dashboard = expect_context::<RwSignal<DashboardState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        if auth.with(AuthState::should_redirect_to_login) {
            navigate("/login", NavigateOptions::default());
        }
    });

    let loading = Signal::derive(move || dashboard.with(|d| d.loading));

    let on_quick = Callback::new(move |id: &'static str| {
        if dashboard.with_untracked(|d| d.loading) {
            return;
        }
        match resolve_quick_question(id) {
            Err(response) => dashboard.update(|d| d.set_quick_result(None, response)),
            Ok(request) => {
                dashboard.update(|d| d.loading = true);
                leptos::task::spawn_local(async move {
                    let (query, response) = run_quick_request(request).await;
                    dashboard.update(|d| d.deliver(DashboardMode::Quick, query, response));
                });
            }
        }
    });

    let on_execute = Callback::new(move |state: QueryState| {
        if dashboard.with_untracked(|d| d.loading) {
            return;
        }
        match plan_custom_query(&state) {
            Err(response) => dashboard.update(|d| d.set_custom_result(None, response)),
            Ok(query) => {
                dashboard.update(|d| d.loading = true);
                leptos::task::spawn_local(async move {
                    let response = call_fixed_query_api(&query).await;
                    dashboard.update(|d| d.deliver(DashboardMode::Custom, Some(query), response));
                });
            }
        }
    });

    let clear_quick = Callback::new(move |()| dashboard.update(DashboardState::clear_quick_result));
    let clear_custom = Callback::new(move |()| dashboard.update(DashboardState::clear_custom_result));

    let on_lock = move |_| {
        leptos::task::spawn_local(async move {
            crate::net::api::lock().await;
            auth.update(AuthState::lock);
        });
    };

    let render_slot = move |slot: Option<ResultSlot>, on_clear: Callback<()>| {
        slot.map(|ResultSlot { query, response }| match query {
            Some(query) => view! { <ResultView response=response query=query on_clear=on_clear/> }.into_any(),
            None => view! { <ResultView response=response on_clear=on_clear/> }.into_any(),
        })
    };

    view! {
        <Show
            when=move || auth.with(|a| a.unlocked)
            fallback=move || view! { <div class="dashboard-page__pending">"認証を確認しています..."</div> }
        >
            <div class="dashboard-page">
                <header class="dashboard-page__header">
                    <h1>"Dugout"</h1>
                    <nav class="dashboard-page__modes">
                        {DashboardMode::ALL
                            .into_iter()
                            .map(|mode| {
                                view! {
                                    <button
                                        class="mode-tab"
                                        class:mode-tab--active=move || dashboard.with(|d| d.mode == mode)
                                        on:click=move |_| dashboard.update(|d| d.switch_mode(mode))
                                    >
                                        {mode.label()}
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </nav>
                    <button class="btn btn--small" on:click=on_lock>
                        "ロック"
                    </button>
                </header>
                <main class="dashboard-page__content">
                    {move || match dashboard.with(|d| d.mode) {
                        DashboardMode::Chat => view! { <ChatPanel/> }.into_any(),
                        DashboardMode::Quick => {
                            view! {
                                <QuickQuestions on_select=on_quick loading=loading/>
                                {move || {
                                    loading.get().then(|| view! { <div class="dashboard-page__loading">"取得中..."</div> })
                                }}
                                {move || render_slot(dashboard.with(|d| d.quick_result.clone()), clear_quick)}
                            }
                                .into_any()
                        }
                        DashboardMode::Custom => {
                            view! {
                                <QueryBuilder on_execute=on_execute on_reset=clear_custom loading=loading/>
                                {move || render_slot(dashboard.with(|d| d.custom_result.clone()), clear_custom)}
                            }
                                .into_any()
                        }
                    }}
                </main>
            </div>
        </Show>
    }
}
