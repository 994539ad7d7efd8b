//! Envelope renderer: answer text plus whichever data view the response
//! carries.

use leptos::prelude::*;
use stats::StatsResponse;
use stats::leaderboard::LeaderboardView;
use stats::plan::FixedQuery;

use crate::components::kpi_cards::KpiCards;
use crate::components::leaderboard::Leaderboard;
use crate::components::result_chart::ResultChart;
use crate::components::result_table::ResultTable;
use crate::util::markdown::render_markdown_html;

/// Leaderboard queries render as a ranked list instead of a plain table.
fn leaderboard_view(response: &StatsResponse, query: Option<&FixedQuery>) -> Option<LeaderboardView> {
    match query? {
        FixedQuery::Leaderboard { kind, metric_order, .. } if response.is_table => {
            let view = LeaderboardView::build(response, *kind, metric_order);
            (!view.is_empty()).then_some(view)
        }
        _ => None,
    }
}

#[component]
pub fn ResultView(
    response: StatsResponse,
    #[prop(optional)] query: Option<FixedQuery>,
    #[prop(optional)] on_clear: Option<Callback<()>>,
) -> impl IntoView {
    let answer_html = (!response.answer.trim().is_empty()).then(|| render_markdown_html(&response.answer));
    let leaderboard = leaderboard_view(&response, query.as_ref());

    let data = if let Some(view_model) = leaderboard {
        view! { <Leaderboard view_model=view_model/> }.into_any()
    } else if response.is_cards && !response.cards_data.is_empty() {
        view! { <KpiCards cards=response.cards_data.clone()/> }.into_any()
    } else if response.is_chart && !response.chart_data.is_empty() {
        let config = response.display_chart_config();
        view! { <ResultChart points=response.chart_data.clone() config=config/> }.into_any()
    } else if response.is_table {
        view! { <ResultTable response=response.clone()/> }.into_any()
    } else {
        ().into_any()
    };

    view! {
        <section class="result-view">
            {on_clear
                .map(|cb| {
                    view! {
                        <button class="btn btn--small result-view__clear" on:click=move |_| cb.run(())>
                            "結果をクリア"
                        </button>
                    }
                })}
            {response
                .is_sample_data
                .then(|| view! { <span class="result-view__badge">"サンプルデータ"</span> })}
            {answer_html.map(|html| view! { <div class="result-view__answer markdown-body" inner_html=html></div> })}
            {data}
        </section>
    }
}
