//! Per-query post-processing of fixed-query responses.
//!
//! Fixed endpoints return raw rows rather than the display envelope. This
//! module turns those rows into KPI cards, chart series, or tables keyed to
//! the query that produced them. A body that is already an envelope passes
//! through the lenient decoder untouched.

#[cfg(test)]
#[path = "shape_test.rs"]
mod shape_test;

use std::cmp::Ordering;

use serde_json::{Map, Value};

use crate::format::{as_f64, format_metric_option};
use crate::metrics::{self, Precision};
use crate::plan::FixedQuery;
use crate::player::Player;
use crate::response::{ChartPoint, ColumnDef, KpiCard, NO_DATA_MESSAGE, Payload, StatsResponse};

type Row = Map<String, Value>;

/// Displayed in place of an empty monthly series.
pub const SAMPLE_MONTHLY_SERIES: [(&str, f64); 6] =
    [("4月", 0.285), ("5月", 0.312), ("6月", 0.298), ("7月", 0.325), ("8月", 0.301), ("9月", 0.289)];

const ENVELOPE_KEYS: [&str; 9] =
    ["answer", "isTable", "is_table", "isChart", "is_chart", "isCards", "is_cards", "tableData", "table_data"];
const ROW_CONTAINER_KEYS: [&str; 5] = ["data", "results", "rows", "stats", "leaders"];
const NAME_KEYS: [&str; 4] = ["player_name", "batter_name", "pitcher_name", "name"];
const MONTH_KEYS: [&str; 2] = ["game_month", "month"];
const SEASON_KEYS: [&str; 2] = ["season", "year"];

/// Shape a successful fixed-query body into a display envelope.
#[must_use]
pub fn shape_response(query: &FixedQuery, payload: Payload) -> StatsResponse {
    let value = match payload {
        Payload::Text(text) => return StatsResponse::text(text),
        Payload::Json(value) => value,
    };
    if is_envelope(&value) {
        return StatsResponse::from_value(&value);
    }
    let rows = rows_of(&value);

    match query {
        FixedQuery::Monthly { player, season, metric, .. } => monthly(player, *season, metric, &rows),
        _ if rows.is_empty() => StatsResponse::text(NO_DATA_MESSAGE),
        FixedQuery::SeasonBatting { player, season, metrics }
        | FixedQuery::SeasonPitching { player, season, metrics } => {
            if rows.len() == 1 {
                season_cards(player, *season, metrics, &rows[0])
            } else {
                let answer = format!("{}のシーズン別成績（{}シーズン）", player.name, rows.len());
                metric_table(answer, &rows, metrics)
            }
        }
        FixedQuery::Risp { player, metrics, .. }
        | FixedQuery::BasesLoaded { player, metrics, .. }
        | FixedQuery::Situational { player, metrics, .. } => {
            metric_table(format!("{}の{}", player.name, split_title(query)), &rows, metrics)
        }
        FixedQuery::Career { player, metrics } => {
            metric_table(format!("{}の通算成績", player.name), &rows, metrics)
        }
        FixedQuery::Leaderboard { kind, season, league, metric_order } => {
            let scope = season.map_or_else(|| "通算".to_owned(), |s| format!("{s}年"));
            let answer =
                format!("{scope} {} {}（{}順）", league.label(), kind.label(), metrics::label(metric_order));
            leaderboard_table(answer, rows, metric_order)
        }
    }
}

fn is_envelope(value: &Value) -> bool {
    value.as_object().is_some_and(|obj| ENVELOPE_KEYS.iter().any(|k| obj.contains_key(*k)))
}

/// Rows carried by a body: a bare array, an array under a container key, or
/// a single object.
fn rows_of(value: &Value) -> Vec<Row> {
    match value {
        Value::Array(items) => items.iter().filter_map(|v| v.as_object().cloned()).collect(),
        Value::Object(obj) => ROW_CONTAINER_KEYS
            .iter()
            .find_map(|k| obj.get(*k).and_then(Value::as_array))
            .map_or_else(|| vec![obj.clone()], |items| rows_of(&Value::Array(items.clone()))),
        _ => Vec::new(),
    }
}

fn first_str(row: &Row, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|k| row.get(*k).and_then(Value::as_str)).map(str::to_owned)
}

#[allow(clippy::cast_possible_truncation)]
fn row_season(row: &Row) -> Option<u16> {
    SEASON_KEYS
        .iter()
        .find_map(|k| row.get(*k).and_then(as_f64))
        .and_then(|v| u16::try_from(v.round() as i64).ok())
}

fn split_title(query: &FixedQuery) -> String {
    match query {
        FixedQuery::Risp { .. } => "得点圏成績".to_owned(),
        FixedQuery::BasesLoaded { .. } => "満塁時成績".to_owned(),
        FixedQuery::Situational { situation, .. } => format!("状況別成績（{}）", situation.describe().join(" / ")),
        _ => String::new(),
    }
}

// =============================================================================
// SEASON CARDS
// =============================================================================

fn season_cards(player: &Player, season: Option<u16>, metrics: &[String], row: &Row) -> StatsResponse {
    let player_name = first_str(row, &NAME_KEYS).unwrap_or_else(|| player.name.clone());
    let season = row_season(row).or(season);
    let cards_data = metrics
        .iter()
        .map(|metric| {
            let value = row.get(metric).and_then(as_f64);
            KpiCard {
                metric: metric.clone(),
                label: metrics::label(metric).to_owned(),
                value,
                formatted: format_metric_option(metric, value),
                player_name: player_name.clone(),
                season,
            }
        })
        .collect();
    let answer = match season {
        Some(s) => format!("{player_name}の{s}年シーズン成績"),
        None => format!("{player_name}のシーズン成績"),
    };
    StatsResponse { is_cards: true, cards_data, ..StatsResponse::text(answer) }
}

// =============================================================================
// MONTHLY SERIES
// =============================================================================

fn month_number(row: &Row) -> Option<u8> {
    MONTH_KEYS.iter().find_map(|k| match row.get(*k)? {
        Value::Number(n) => n.as_u64().and_then(|m| u8::try_from(m).ok()),
        Value::String(s) => s.trim().trim_end_matches('月').parse().ok(),
        _ => None,
    })
}

/// Reshape month rows into `{month: "N月", value}` points ordered by month.
#[must_use]
pub fn monthly_points(rows: &[Row], metric: &str) -> Vec<ChartPoint> {
    let mut points: Vec<(u8, f64)> = rows
        .iter()
        .filter_map(|row| {
            let month = month_number(row)?;
            let value = row.get(metric).or_else(|| row.get("value")).and_then(as_f64)?;
            Some((month, value))
        })
        .collect();
    points.sort_by_key(|(month, _)| *month);
    points.into_iter().map(|(month, value)| ChartPoint { month: format!("{month}月"), value }).collect()
}

fn monthly(player: &Player, season: Option<u16>, metric: &str, rows: &[Row]) -> StatsResponse {
    let config = metrics::monthly_chart_config(metric);
    let scope = season.map_or_else(String::new, |s| format!("{s}年 "));
    let mut points = monthly_points(rows, metric);
    let sample = points.is_empty();
    let answer = if sample {
        points = SAMPLE_MONTHLY_SERIES
            .iter()
            .map(|(month, value)| ChartPoint { month: (*month).to_owned(), value: *value })
            .collect();
        format!("{}の{scope}{}のデータが見つからなかったため、サンプルデータを表示しています。", player.name, config.title)
    } else {
        format!("{}の{scope}{}", player.name, config.title)
    };
    StatsResponse {
        is_chart: true,
        chart_type: Some(config.kind),
        chart_data: points,
        chart_config: Some(config),
        is_sample_data: sample,
        ..StatsResponse::text(answer)
    }
}

// =============================================================================
// TABLES
// =============================================================================

fn decimal_columns(metrics: &[String]) -> Vec<String> {
    metrics
        .iter()
        .filter(|m| metrics::lookup(m).is_some_and(|info| info.precision != Precision::Count))
        .cloned()
        .collect()
}

/// Identity columns present in `row` followed by the requested metrics.
fn metric_columns(row: &Row, metrics: &[String]) -> Vec<ColumnDef> {
    let identity = ["season", "year", "split", "situation", "team"]
        .into_iter()
        .filter(|k| row.contains_key(*k))
        .map(|k| ColumnDef::new(k, metrics::column_label(k)));
    let requested = metrics
        .iter()
        .filter(|m| row.contains_key(m.as_str()))
        .map(|m| ColumnDef::new(m, metrics::label(m)));
    identity.chain(requested).collect()
}

fn metric_table(answer: String, rows: &[Row], metrics: &[String]) -> StatsResponse {
    let columns = match rows.first() {
        Some(first) if metrics.iter().any(|m| first.contains_key(m.as_str())) => metric_columns(first, metrics),
        _ => Vec::new(),
    };
    StatsResponse {
        is_table: true,
        is_transposed: rows.len() == 1,
        table_data: rows.to_vec(),
        columns,
        decimal_columns: decimal_columns(metrics),
        ..StatsResponse::text(answer)
    }
}

fn compare_metric(a: &Row, b: &Row, metric: &str, ascending: bool) -> Ordering {
    match (a.get(metric).and_then(as_f64), b.get(metric).and_then(as_f64)) {
        (Some(x), Some(y)) if ascending => x.total_cmp(&y),
        (Some(x), Some(y)) => y.total_cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Sort rows by the sort metric and number them.
///
/// Lower-is-better metrics sort ascending. Rows missing the metric go last.
#[must_use]
pub fn rank_rows(mut rows: Vec<Row>, metric: &str) -> Vec<Row> {
    let ascending = metrics::lookup(metric).is_some_and(|m| m.lower_is_better);
    rows.sort_by(|a, b| compare_metric(a, b, metric, ascending));
    for (i, row) in rows.iter_mut().enumerate() {
        row.insert("rank".to_owned(), Value::from(i + 1));
    }
    rows
}

fn leaderboard_table(answer: String, rows: Vec<Row>, metric: &str) -> StatsResponse {
    let rows = rank_rows(rows, metric);
    let first = rows.first().cloned().unwrap_or_default();
    let mut columns = vec![ColumnDef::new("rank", metrics::column_label("rank"))];
    if let Some(key) = NAME_KEYS.iter().find(|k| first.contains_key(**k)) {
        columns.push(ColumnDef::new(key, metrics::column_label(key)));
    }
    if first.contains_key("team") {
        columns.push(ColumnDef::new("team", metrics::column_label("team")));
    }
    columns.push(ColumnDef::new(metric, metrics::label(metric)));
    StatsResponse {
        is_table: true,
        table_data: rows,
        columns,
        decimal_columns: decimal_columns(&[metric.to_owned()]),
        ..StatsResponse::text(answer)
    }
}
