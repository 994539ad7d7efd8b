//! Display model for leaderboard results.

#[cfg(test)]
#[path = "leaderboard_test.rs"]
mod leaderboard_test;

use serde_json::Value;

use crate::format::{MISSING, as_f64, format_metric_option};
use crate::metrics;
use crate::plan::LeaderboardKind;
use crate::response::StatsResponse;
use crate::shape::rank_rows;

const NAME_KEYS: [&str; 4] = ["player_name", "batter_name", "pitcher_name", "name"];
const TEAM_KEYS: [&str; 2] = ["team", "team_name"];

#[derive(Clone, Debug, PartialEq)]
pub struct LeaderboardEntry {
    pub rank: usize,
    pub player_name: String,
    pub team: String,
    pub value: Option<f64>,
    /// Value formatted with the sort metric's precision.
    pub formatted: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LeaderboardView {
    pub title: String,
    pub metric: String,
    pub metric_label: String,
    pub entries: Vec<LeaderboardEntry>,
}

impl LeaderboardView {
    /// Build the ranked view. Rows that carry no `rank` are ranked by the
    /// sort metric first.
    #[must_use]
    pub fn build(resp: &StatsResponse, kind: LeaderboardKind, sort_key: &str) -> Self {
        let has_rank = resp.table_data.iter().all(|r| r.get("rank").and_then(as_f64).is_some());
        let rows = if has_rank { resp.table_data.clone() } else { rank_rows(resp.table_data.clone(), sort_key) };

        let entries = rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let text = |keys: &[&str]| {
                    keys.iter()
                        .find_map(|k| row.get(*k).and_then(Value::as_str))
                        .map_or_else(|| MISSING.to_owned(), str::to_owned)
                };
                let value = row.get(sort_key).and_then(as_f64);
                LeaderboardEntry {
                    rank: row.get("rank").and_then(Value::as_u64).map_or(i + 1, |r| usize::try_from(r).unwrap_or(i + 1)),
                    player_name: text(&NAME_KEYS[..]),
                    team: text(&TEAM_KEYS[..]),
                    value,
                    formatted: format_metric_option(sort_key, value),
                }
            })
            .collect();

        Self {
            title: kind.label().to_owned(),
            metric: sort_key.to_owned(),
            metric_label: metrics::label(sort_key).to_owned(),
            entries,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
