use serde_json::json;
use stats::plan::LeaderboardKind;
use stats::player::Player;
use stats::query::League;
use stats::quick::QUICK_QUESTIONS;
use stats::response::{ChartPoint, ColumnDef, KpiCard};

use super::*;

fn row(value: serde_json::Value) -> serde_json::Map<String, serde_json::Value> {
    value.as_object().cloned().unwrap()
}

#[test]
fn text_only_response_prints_answer() {
    let resp = StatsResponse::text("  こんにちは  ");
    assert_eq!(render_response(&resp, None), "こんにちは\n");
}

#[test]
fn sample_data_is_marked() {
    let resp = StatsResponse {
        is_sample_data: true,
        is_chart: true,
        chart_data: vec![ChartPoint { month: "4月".to_owned(), value: 0.285 }],
        chart_config: Some(stats::metrics::monthly_chart_config("avg")),
        ..StatsResponse::default()
    };
    let out = render_response(&resp, None);
    assert!(out.starts_with(SAMPLE_NOTICE));
    assert!(out.contains("4月"));
    assert!(out.contains(".285"));
}

#[test]
fn cards_print_label_and_value() {
    let resp = StatsResponse {
        is_cards: true,
        cards_data: vec![KpiCard {
            metric: "hr".to_owned(),
            label: "本塁打".to_owned(),
            value: Some(54.0),
            formatted: "54".to_owned(),
            player_name: "Shohei Ohtani".to_owned(),
            season: Some(2024),
        }],
        ..StatsResponse::default()
    };
    let out = render_response(&resp, None);
    assert!(out.contains("Shohei Ohtani (2024)"));
    assert!(out.contains("本塁打  54"));
}

#[test]
fn table_columns_align() {
    let table = TableView {
        headers: vec!["a".to_owned(), "bbb".to_owned()],
        rows: vec![vec!["xx".to_owned(), "y".to_owned()]],
        transposed: false,
    };
    assert_eq!(render_table(&table), "a   bbb\n--  ---\nxx  y\n");
}

#[test]
fn empty_table_renders_nothing() {
    let table = TableView { headers: vec!["a".to_owned()], rows: Vec::new(), transposed: false };
    assert_eq!(render_table(&table), "");
}

#[test]
fn wide_characters_count_double() {
    assert_eq!(display_width("打率"), 4);
    assert_eq!(pad("打率", 6), "打率  ");
}

#[test]
fn leaderboard_query_prints_ranked_list() {
    let resp = StatsResponse {
        is_table: true,
        table_data: vec![
            row(json!({ "player_name": "B", "team": "NYY", "era": 3.10 })),
            row(json!({ "player_name": "A", "team": "LAD", "era": 2.50 })),
        ],
        columns: vec![ColumnDef::new("player_name", "選手")],
        ..StatsResponse::default()
    };
    let query = FixedQuery::Leaderboard {
        kind: LeaderboardKind::Pitching,
        season: Some(2024),
        league: League::Mlb,
        metric_order: "era".to_owned(),
    };
    let out = render_response(&resp, Some(&query));
    let a = out.find("  1. A").unwrap();
    let b = out.find("  2. B").unwrap();
    assert!(a < b);
    assert!(out.contains("2.50"));
}

#[test]
fn players_list_shows_id_and_team() {
    let out = render_players(&[Player::new(660_271, "Shohei Ohtani", "LAD", "NL")]);
    assert_eq!(out, "  660271  Shohei Ohtani (LAD)\n");
    assert!(render_players(&[]).contains("見つかりません"));
}

#[test]
fn quick_list_has_one_line_per_preset() {
    assert_eq!(render_quick_list(QUICK_QUESTIONS).lines().count(), QUICK_QUESTIONS.len());
}
