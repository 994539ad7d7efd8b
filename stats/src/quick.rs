//! One-click preset questions.

#[cfg(test)]
#[path = "quick_test.rs"]
mod quick_test;

use crate::error::QueryError;
use crate::plan::{FixedQuery, LeaderboardKind};
use crate::player::Player;
use crate::query::League;

/// Player reference usable in a static table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PresetPlayer {
    pub id: u64,
    pub name: &'static str,
    pub team: &'static str,
    pub league: &'static str,
}

impl PresetPlayer {
    #[must_use]
    pub fn player(self) -> Player {
        Player::new(self.id, self.name, self.team, self.league)
    }
}

pub const OHTANI: PresetPlayer = PresetPlayer { id: 660_271, name: "Shohei Ohtani", team: "LAD", league: "NL" };
pub const JUDGE: PresetPlayer = PresetPlayer { id: 592_450, name: "Aaron Judge", team: "NYY", league: "AL" };
pub const YAMAMOTO: PresetPlayer = PresetPlayer { id: 808_967, name: "Yoshinobu Yamamoto", team: "LAD", league: "NL" };

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum QuickIntent {
    /// Free-text question for the QA endpoint.
    Ask { query: &'static str, season: u16 },
    SeasonBatting { player: PresetPlayer, season: u16, metrics: &'static [&'static str] },
    SeasonPitching { player: PresetPlayer, season: u16, metrics: &'static [&'static str] },
    Monthly { player: PresetPlayer, season: u16, metric: &'static str },
    Risp { player: PresetPlayer, season: u16, metrics: &'static [&'static str] },
    Career { player: PresetPlayer, metrics: &'static [&'static str] },
    Leaderboard { kind: LeaderboardKind, season: u16, league: League, metric: &'static str },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuickQuestion {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub intent: QuickIntent,
}

/// What a preset resolves to at click time.
#[derive(Clone, Debug, PartialEq)]
pub enum QuickRequest {
    Ask { query: String, season: u16 },
    Fixed(FixedQuery),
}

fn owned(metrics: &[&str]) -> Vec<String> {
    metrics.iter().map(|m| (*m).to_owned()).collect()
}

impl QuickQuestion {
    /// Resolve the preset into a backend request.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::UnsupportedMetric`] for a monthly preset whose
    /// metric has no monthly series.
    pub fn request(&self) -> Result<QuickRequest, QueryError> {
        let fixed = match self.intent {
            QuickIntent::Ask { query, season } => {
                return Ok(QuickRequest::Ask { query: query.to_owned(), season });
            }
            QuickIntent::SeasonBatting { player, season, metrics } => {
                FixedQuery::SeasonBatting { player: player.player(), season: Some(season), metrics: owned(metrics) }
            }
            QuickIntent::SeasonPitching { player, season, metrics } => {
                FixedQuery::SeasonPitching { player: player.player(), season: Some(season), metrics: owned(metrics) }
            }
            QuickIntent::Monthly { player, season, metric } => FixedQuery::monthly(player.player(), Some(season), metric)?,
            QuickIntent::Risp { player, season, metrics } => {
                FixedQuery::Risp { player: player.player(), season: Some(season), metrics: owned(metrics) }
            }
            QuickIntent::Career { player, metrics } => {
                FixedQuery::Career { player: player.player(), metrics: owned(metrics) }
            }
            QuickIntent::Leaderboard { kind, season, league, metric } => {
                FixedQuery::Leaderboard { kind, season: Some(season), league, metric_order: metric.to_owned() }
            }
        };
        Ok(QuickRequest::Fixed(fixed))
    }
}

pub static QUICK_QUESTIONS: &[QuickQuestion] = &[
    QuickQuestion {
        id: "ohtani-2024-batting",
        title: "大谷翔平 2024年打撃成績",
        description: "打率・本塁打・打点・OPS・WAR をカードで表示",
        intent: QuickIntent::SeasonBatting { player: OHTANI, season: 2024, metrics: &["avg", "hr", "rbi", "ops", "war"] },
    },
    QuickQuestion {
        id: "judge-2024-monthly-hr",
        title: "ジャッジ 2024年 月別本塁打",
        description: "月ごとの本塁打数の推移",
        intent: QuickIntent::Monthly { player: JUDGE, season: 2024, metric: "hr" },
    },
    QuickQuestion {
        id: "ohtani-2024-risp",
        title: "大谷翔平 得点圏成績",
        description: "2024年の得点圏での打撃成績",
        intent: QuickIntent::Risp { player: OHTANI, season: 2024, metrics: &["avg", "obp", "slg", "ops"] },
    },
    QuickQuestion {
        id: "yamamoto-2024-pitching",
        title: "山本由伸 2024年投手成績",
        description: "防御率・WHIP・奪三振率などをカードで表示",
        intent: QuickIntent::SeasonPitching {
            player: YAMAMOTO,
            season: 2024,
            metrics: &["era", "whip", "k_9", "strikeouts", "wins"],
        },
    },
    QuickQuestion {
        id: "mlb-2024-hr-leaders",
        title: "2024年 本塁打ランキング",
        description: "MLB全体の本塁打リーダー",
        intent: QuickIntent::Leaderboard { kind: LeaderboardKind::Batting, season: 2024, league: League::Mlb, metric: "hr" },
    },
    QuickQuestion {
        id: "mlb-2024-era-leaders",
        title: "2024年 防御率ランキング",
        description: "MLB全体の防御率リーダー",
        intent: QuickIntent::Leaderboard {
            kind: LeaderboardKind::Pitching,
            season: 2024,
            league: League::Mlb,
            metric: "era",
        },
    },
    QuickQuestion {
        id: "judge-career",
        title: "ジャッジ 通算成績",
        description: "キャリア通算の打撃成績",
        intent: QuickIntent::Career { player: JUDGE, metrics: &["hr", "avg", "ops", "war"] },
    },
    QuickQuestion {
        id: "ask-ohtani-50-50",
        title: "大谷翔平の50-50について",
        description: "自由質問で2024年の記録を解説",
        intent: QuickIntent::Ask { query: "大谷翔平の2024年の50本塁打50盗塁について教えてください", season: 2024 },
    },
];

/// Look up a preset by identifier.
#[must_use]
pub fn find_quick_question(id: &str) -> Option<&'static QuickQuestion> {
    QUICK_QUESTIONS.iter().find(|q| q.id == id)
}
