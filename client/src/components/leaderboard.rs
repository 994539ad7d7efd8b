//! Ranked leaderboard renderer.

use leptos::prelude::*;
use stats::leaderboard::LeaderboardView;

#[component]
pub fn Leaderboard(view_model: LeaderboardView) -> impl IntoView {
    let LeaderboardView { title, metric_label, entries, .. } = view_model;

    view! {
        <div class="leaderboard">
            <h4 class="leaderboard__title">{format!("{title}（{metric_label}）")}</h4>
            <ol class="leaderboard__list">
                {entries
                    .into_iter()
                    .map(|entry| {
                        view! {
                            <li class="leaderboard__entry" class:leaderboard__entry--top={entry.rank <= 3}>
                                <span class="leaderboard__rank">{entry.rank}</span>
                                <span class="leaderboard__name">{entry.player_name}</span>
                                <span class="leaderboard__team">{entry.team}</span>
                                <span class="leaderboard__value">{entry.formatted}</span>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ol>
        </div>
    }
}
