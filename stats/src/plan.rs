//! Translation of a completed builder state into one backend request.

#[cfg(test)]
#[path = "plan_test.rs"]
mod plan_test;

use crate::endpoint::ApiRequest;
use crate::error::QueryError;
use crate::metrics::{self, MonthlySource};
use crate::player::Player;
use crate::query::{Category, CustomSituation, League, QueryState, SplitType};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LeaderboardKind {
    Batting,
    Pitching,
}

impl LeaderboardKind {
    #[must_use]
    pub fn path_segment(self) -> &'static str {
        match self {
            Self::Batting => "batting",
            Self::Pitching => "pitching",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Batting => "打撃リーダーボード",
            Self::Pitching => "投手リーダーボード",
        }
    }
}

/// A parametrized backend query.
#[derive(Clone, Debug, PartialEq)]
pub enum FixedQuery {
    SeasonBatting { player: Player, season: Option<u16>, metrics: Vec<String> },
    SeasonPitching { player: Player, season: Option<u16>, metrics: Vec<String> },
    Monthly { player: Player, season: Option<u16>, metric: String, source: MonthlySource },
    Risp { player: Player, season: Option<u16>, metrics: Vec<String> },
    BasesLoaded { player: Player, season: Option<u16>, metrics: Vec<String> },
    Situational { player: Player, season: Option<u16>, metrics: Vec<String>, situation: CustomSituation },
    Career { player: Player, metrics: Vec<String> },
    Leaderboard { kind: LeaderboardKind, season: Option<u16>, league: League, metric_order: String },
}

impl FixedQuery {
    /// Monthly series for `metric`, routed to its endpoint family.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::UnsupportedMetric`] when the metric has no monthly series.
    pub fn monthly(player: Player, season: Option<u16>, metric: &str) -> Result<Self, QueryError> {
        let source = metrics::lookup(metric)
            .and_then(|m| m.monthly)
            .ok_or_else(|| unsupported(Category::MonthlyTrends, metric))?;
        Ok(Self::Monthly { player, season, metric: metric.to_owned(), source })
    }

    /// Player the query is about, if any.
    #[must_use]
    pub fn player(&self) -> Option<&Player> {
        match self {
            Self::SeasonBatting { player, .. }
            | Self::SeasonPitching { player, .. }
            | Self::Monthly { player, .. }
            | Self::Risp { player, .. }
            | Self::BasesLoaded { player, .. }
            | Self::Situational { player, .. }
            | Self::Career { player, .. } => Some(player),
            Self::Leaderboard { .. } => None,
        }
    }

    #[must_use]
    pub fn season(&self) -> Option<u16> {
        match self {
            Self::SeasonBatting { season, .. }
            | Self::SeasonPitching { season, .. }
            | Self::Monthly { season, .. }
            | Self::Risp { season, .. }
            | Self::BasesLoaded { season, .. }
            | Self::Situational { season, .. }
            | Self::Leaderboard { season, .. } => *season,
            Self::Career { .. } => None,
        }
    }

    /// Category the query belongs to, for labels and error summaries.
    #[must_use]
    pub fn category(&self) -> Category {
        match self {
            Self::SeasonBatting { .. } => Category::SeasonBatting,
            Self::SeasonPitching { .. } => Category::SeasonPitching,
            Self::Monthly { .. } => Category::MonthlyTrends,
            Self::Risp { .. } | Self::BasesLoaded { .. } | Self::Situational { .. } => Category::BattingSplits,
            Self::Career { .. } => Category::CareerStats,
            Self::Leaderboard { kind: LeaderboardKind::Batting, .. } => Category::BattingLeaderboard,
            Self::Leaderboard { kind: LeaderboardKind::Pitching, .. } => Category::PitchingLeaderboard,
        }
    }

    /// Backend request for this query.
    #[must_use]
    pub fn request(&self) -> ApiRequest {
        match self {
            Self::SeasonBatting { player, season, metrics } => {
                ApiRequest::get(format!("/api/v1/players/{}/season-batting-stats", player.id))
                    .param_opt("season", *season)
                    .param_list("metrics", metrics)
            }
            Self::SeasonPitching { player, season, metrics } => {
                ApiRequest::get(format!("/api/v1/players/{}/season-pitching-stats", player.id))
                    .param_opt("season", *season)
                    .param_list("metrics", metrics)
            }
            Self::Monthly { player, season, metric, source } => {
                ApiRequest::get(format!("/api/v1/players/{}/{}", player.id, source.path_segment()))
                    .param_opt("season", *season)
                    .param("metric", metric)
            }
            Self::Risp { player, season, metrics } => {
                ApiRequest::get(format!("/api/v1/players/{}/performance-at-risp", player.id))
                    .param_opt("season", *season)
                    .param_list("metrics", metrics)
            }
            Self::BasesLoaded { player, season, metrics } => {
                ApiRequest::get(format!("/api/v1/players/{}/batting-splits", player.id))
                    .param("split_type", SplitType::BasesLoaded.id())
                    .param_opt("season", *season)
                    .param_list("metrics", metrics)
            }
            Self::Situational { player, season, metrics, situation } => {
                ApiRequest::get(format!("/api/v1/players/{}/situational-batting", player.id))
                    .param_opt("season", *season)
                    .param_list("metrics", metrics)
                    .param_list("innings", situation.innings.iter().map(u8::to_string))
                    .param_opt("strikes", situation.strikes)
                    .param_opt("balls", situation.balls)
                    .param_opt("pitcher_throws", situation.pitcher_type.map(|p| p.throws()))
                    .param_list("runners", situation.runners_on_base.iter().map(|r| r.code()))
                    .param_list("pitch_types", &situation.pitch_types)
            }
            Self::Career { player, metrics } => {
                ApiRequest::get(format!("/api/v1/players/{}/career-batting-stats", player.id))
                    .param_list("metrics", metrics)
            }
            Self::Leaderboard { kind, season, league, metric_order } => {
                ApiRequest::get(format!("/api/v1/leaderboards/{}", kind.path_segment()))
                    .param_opt("season", *season)
                    .param("league", league.id())
                    .param("metric_order", metric_order)
            }
        }
    }
}

fn unsupported(category: Category, metric: &str) -> QueryError {
    QueryError::UnsupportedMetric { category: category.label(), metric: metric.to_owned() }
}

fn checked_metrics(category: Category, metrics: &[String]) -> Result<Vec<String>, QueryError> {
    if metrics.is_empty() {
        return Err(QueryError::NoMetrics);
    }
    for metric in metrics {
        let supported = metrics::lookup(metric).is_some_and(|info| metrics::supports(category, info));
        if !supported {
            return Err(unsupported(category, metric));
        }
    }
    Ok(metrics.to_vec())
}

/// Build the fixed query for a completed builder state.
///
/// # Errors
///
/// Returns a [`QueryError`] when a required selection is missing or a metric
/// is not available for the chosen category.
pub fn plan_query(state: &QueryState) -> Result<FixedQuery, QueryError> {
    let category = state.category.ok_or(QueryError::MissingCategory)?;
    let season = state.season();
    let player = || state.player.clone().ok_or(QueryError::MissingPlayer);

    match category {
        Category::BattingLeaderboard => leaderboard(state, LeaderboardKind::Batting),
        Category::PitchingLeaderboard => leaderboard(state, LeaderboardKind::Pitching),
        Category::SeasonBatting => {
            let player = player()?;
            Ok(FixedQuery::SeasonBatting { player, season, metrics: checked_metrics(category, &state.metrics)? })
        }
        Category::SeasonPitching => {
            let player = player()?;
            Ok(FixedQuery::SeasonPitching { player, season, metrics: checked_metrics(category, &state.metrics)? })
        }
        Category::CareerStats => {
            let player = player()?;
            Ok(FixedQuery::Career { player, metrics: checked_metrics(category, &state.metrics)? })
        }
        Category::MonthlyTrends => {
            let player = player()?;
            let metric = state.metrics.first().ok_or(QueryError::NoMetrics)?;
            FixedQuery::monthly(player, season, metric)
        }
        Category::BattingSplits => {
            let player = player()?;
            let split = state.split_type.ok_or(QueryError::MissingSplitType)?;
            if split == SplitType::Custom && state.custom_situation.is_empty() {
                return Err(QueryError::EmptySituation);
            }
            let metrics = checked_metrics(category, &state.metrics)?;
            Ok(match split {
                SplitType::Risp => FixedQuery::Risp { player, season, metrics },
                SplitType::BasesLoaded => FixedQuery::BasesLoaded { player, season, metrics },
                SplitType::Custom => {
                    let situation = state.custom_situation.clone();
                    FixedQuery::Situational { player, season, metrics, situation }
                }
            })
        }
    }
}

fn leaderboard(state: &QueryState, kind: LeaderboardKind) -> Result<FixedQuery, QueryError> {
    let category = state.category.ok_or(QueryError::MissingCategory)?;
    let metric_order = state.metric_order.clone().ok_or(QueryError::NoMetrics)?;
    checked_metrics(category, std::slice::from_ref(&metric_order))?;
    Ok(FixedQuery::Leaderboard { kind, season: state.season(), league: state.league, metric_order })
}

/// Category-specific summary shown when planning fails.
#[must_use]
pub fn failure_summary(category: Option<Category>, err: &QueryError) -> String {
    match category {
        Some(c) => format!("{}の取得中にエラーが発生しました: {err}", c.label()),
        None => format!("クエリの実行中にエラーが発生しました: {err}"),
    }
}
