//! Canonical per-metric metadata.
//!
//! DESIGN
//! ======
//! One table keyed by metric identifier drives labels, number precision,
//! chart styling, monthly endpoint routing, and category applicability.
//! Every renderer reads from here so formatting cannot drift between views.

#[cfg(test)]
#[path = "metrics_test.rs"]
mod metrics_test;

use crate::query::Category;
use crate::response::{ChartConfig, ChartKind};

/// Color used for metrics without their own entry.
pub const DEFAULT_COLOR: &str = "#6b7280";

/// Display precision bucket.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Precision {
    /// Rate statistics (AVG, OBP, OPS, ...): three decimals.
    Rate,
    /// ERA-like statistics (ERA, WHIP, WAR, ...): two decimals.
    Average,
    /// Counting statistics: rounded integers.
    Count,
}

impl Precision {
    #[must_use]
    pub fn decimals(self) -> usize {
        match self {
            Self::Rate => 3,
            Self::Average => 2,
            Self::Count => 0,
        }
    }
}

/// Which side of the ball a metric describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MetricScope {
    Batting,
    Pitching,
    Both,
}

/// Backend endpoint family that serves a metric's month-by-month series.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MonthlySource {
    /// `monthly-batting-stats`: counting stats and batting average.
    Batting,
    /// `monthly-offensive-stats`: on-base and power rates.
    Offensive,
}

impl MonthlySource {
    #[must_use]
    pub fn path_segment(self) -> &'static str {
        match self {
            Self::Batting => "monthly-batting-stats",
            Self::Offensive => "monthly-offensive-stats",
        }
    }
}

/// Static description of one metric.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MetricInfo {
    /// Identifier used in query parameters and response fields.
    pub id: &'static str,
    /// Japanese display label.
    pub label: &'static str,
    /// Compact abbreviation for table headers.
    pub short: &'static str,
    pub scope: MetricScope,
    pub precision: Precision,
    /// Chart/KPI accent color.
    pub color: &'static str,
    /// True when smaller values rank higher (ERA, WHIP, ...).
    pub lower_is_better: bool,
    /// Endpoint family for monthly trends; `None` when not available monthly.
    pub monthly: Option<MonthlySource>,
    /// Available in situational splits (RISP, bases loaded, custom).
    pub situational: bool,
    pub chart_kind: ChartKind,
    pub y_domain: Option<[f64; 2]>,
}

const fn rate(
    id: &'static str,
    label: &'static str,
    short: &'static str,
    color: &'static str,
    monthly: Option<MonthlySource>,
    y_max: f64,
) -> MetricInfo {
    MetricInfo {
        id,
        label,
        short,
        scope: MetricScope::Batting,
        precision: Precision::Rate,
        color,
        lower_is_better: false,
        monthly,
        situational: true,
        chart_kind: ChartKind::Line,
        y_domain: Some([0.0, y_max]),
    }
}

const fn count(
    id: &'static str,
    label: &'static str,
    short: &'static str,
    scope: MetricScope,
    color: &'static str,
    monthly: Option<MonthlySource>,
) -> MetricInfo {
    MetricInfo {
        id,
        label,
        short,
        scope,
        precision: Precision::Count,
        color,
        lower_is_better: false,
        monthly,
        situational: matches!(scope, MetricScope::Batting),
        chart_kind: ChartKind::Bar,
        y_domain: None,
    }
}

const fn pitching_average(
    id: &'static str,
    label: &'static str,
    short: &'static str,
    color: &'static str,
    lower_is_better: bool,
) -> MetricInfo {
    MetricInfo {
        id,
        label,
        short,
        scope: MetricScope::Pitching,
        precision: Precision::Average,
        color,
        lower_is_better,
        monthly: None,
        situational: false,
        chart_kind: ChartKind::Line,
        y_domain: None,
    }
}

pub static METRICS: &[MetricInfo] = &[
    rate("avg", "打率", "AVG", "#2563eb", Some(MonthlySource::Batting), 0.5),
    rate("obp", "出塁率", "OBP", "#16a34a", Some(MonthlySource::Offensive), 0.6),
    rate("slg", "長打率", "SLG", "#dc2626", Some(MonthlySource::Offensive), 1.0),
    rate("ops", "OPS", "OPS", "#9333ea", Some(MonthlySource::Offensive), 1.5),
    rate("woba", "wOBA", "wOBA", "#0891b2", Some(MonthlySource::Offensive), 0.6),
    rate("iso", "ISO", "ISO", "#ea580c", Some(MonthlySource::Offensive), 0.5),
    rate("babip", "BABIP", "BABIP", "#65a30d", Some(MonthlySource::Offensive), 0.6),
    count("hr", "本塁打", "HR", MetricScope::Batting, "#ef4444", Some(MonthlySource::Batting)),
    count("hits", "安打", "H", MetricScope::Batting, "#3b82f6", Some(MonthlySource::Batting)),
    count("rbi", "打点", "RBI", MetricScope::Batting, "#f59e0b", Some(MonthlySource::Batting)),
    count("runs", "得点", "R", MetricScope::Batting, "#14b8a6", Some(MonthlySource::Batting)),
    count("bb", "四球", "BB", MetricScope::Batting, "#22c55e", Some(MonthlySource::Batting)),
    count("so", "三振", "SO", MetricScope::Batting, "#64748b", Some(MonthlySource::Batting)),
    count("sb", "盗塁", "SB", MetricScope::Batting, "#0ea5e9", None),
    count("pa", "打席", "PA", MetricScope::Batting, "#94a3b8", None),
    MetricInfo {
        id: "wrc_plus",
        label: "wRC+",
        short: "wRC+",
        scope: MetricScope::Batting,
        precision: Precision::Count,
        color: "#db2777",
        lower_is_better: false,
        monthly: None,
        situational: false,
        chart_kind: ChartKind::Bar,
        y_domain: None,
    },
    MetricInfo {
        id: "war",
        label: "WAR",
        short: "WAR",
        scope: MetricScope::Both,
        precision: Precision::Average,
        color: "#ca8a04",
        lower_is_better: false,
        monthly: None,
        situational: false,
        chart_kind: ChartKind::Bar,
        y_domain: None,
    },
    pitching_average("era", "防御率", "ERA", "#b91c1c", true),
    pitching_average("whip", "WHIP", "WHIP", "#7c3aed", true),
    pitching_average("fip", "FIP", "FIP", "#0f766e", true),
    pitching_average("k_9", "奪三振率", "K/9", "#1d4ed8", false),
    pitching_average("bb_9", "与四球率", "BB/9", "#a16207", true),
    count("wins", "勝利", "W", MetricScope::Pitching, "#15803d", None),
    MetricInfo {
        lower_is_better: true,
        ..count("losses", "敗戦", "L", MetricScope::Pitching, "#9f1239", None)
    },
    count("saves", "セーブ", "SV", MetricScope::Pitching, "#4338ca", None),
    count("strikeouts", "奪三振", "K", MetricScope::Pitching, "#0369a1", None),
];

/// Look up a metric by identifier.
#[must_use]
pub fn lookup(id: &str) -> Option<&'static MetricInfo> {
    METRICS.iter().find(|m| m.id == id)
}

/// Japanese label for a metric, falling back to the raw identifier.
#[must_use]
pub fn label(id: &str) -> &str {
    lookup(id).map_or(id, |m| m.label)
}

/// Header label for a table column key: metric labels win, then known
/// non-metric keys, then the key itself.
#[must_use]
pub fn column_label(key: &str) -> &str {
    if let Some(info) = lookup(key) {
        return info.label;
    }
    match key {
        "season" | "year" => "シーズン",
        "rank" => "順位",
        "player_name" | "batter_name" | "pitcher_name" | "name" => "選手",
        "team" | "team_name" => "チーム",
        "game_month" | "month" => "月",
        "games" => "試合",
        _ => key,
    }
}

/// Whether `metric` may be requested for `category`.
#[must_use]
pub fn supports(category: Category, info: &MetricInfo) -> bool {
    let batting = matches!(info.scope, MetricScope::Batting | MetricScope::Both);
    let pitching = matches!(info.scope, MetricScope::Pitching | MetricScope::Both);
    match category {
        Category::SeasonBatting | Category::CareerStats | Category::BattingLeaderboard => batting,
        Category::SeasonPitching | Category::PitchingLeaderboard => pitching,
        Category::BattingSplits => info.situational,
        Category::MonthlyTrends => info.monthly.is_some(),
    }
}

/// Metrics offered by the metric picker for `category`, in table order.
#[must_use]
pub fn metrics_for(category: Category) -> Vec<&'static MetricInfo> {
    METRICS.iter().filter(|m| supports(category, m)).collect()
}

/// Chart styling for a monthly series, with a neutral default entry for
/// metrics the table does not know.
#[must_use]
pub fn monthly_chart_config(metric: &str) -> ChartConfig {
    match lookup(metric) {
        Some(info) => ChartConfig {
            title: format!("月別{}推移", info.label),
            y_axis_label: info.label.to_owned(),
            y_domain: info.y_domain,
            color: info.color.to_owned(),
            kind: info.chart_kind,
        },
        None => ChartConfig {
            title: "月別推移".to_owned(),
            y_axis_label: metric.to_owned(),
            y_domain: None,
            color: DEFAULT_COLOR.to_owned(),
            kind: ChartKind::Line,
        },
    }
}
