use std::collections::HashSet;

use super::*;
use crate::metrics;
use crate::plan::plan_query;
use crate::query::Category;

#[test]
fn ids_are_unique() {
    let ids: HashSet<&str> = QUICK_QUESTIONS.iter().map(|q| q.id).collect();
    assert_eq!(ids.len(), QUICK_QUESTIONS.len());
}

#[test]
fn every_preset_resolves() {
    for question in QUICK_QUESTIONS {
        assert!(question.request().is_ok(), "{}", question.id);
    }
}

#[test]
fn preset_metrics_are_valid_for_their_category() {
    for question in QUICK_QUESTIONS {
        let Ok(QuickRequest::Fixed(query)) = question.request() else { continue };
        let category = query.category();
        let ids: Vec<String> = match &query {
            FixedQuery::SeasonBatting { metrics, .. }
            | FixedQuery::SeasonPitching { metrics, .. }
            | FixedQuery::Risp { metrics, .. }
            | FixedQuery::BasesLoaded { metrics, .. }
            | FixedQuery::Situational { metrics, .. }
            | FixedQuery::Career { metrics, .. } => metrics.clone(),
            FixedQuery::Monthly { metric, .. } => vec![metric.clone()],
            FixedQuery::Leaderboard { metric_order, .. } => vec![metric_order.clone()],
        };
        for id in ids {
            let info = metrics::lookup(&id).unwrap_or_else(|| panic!("unknown metric {id}"));
            assert!(metrics::supports(category, info), "{} / {id}", question.id);
        }
    }
}

#[test]
fn monthly_preset_uses_batting_series() {
    let question = find_quick_question("judge-2024-monthly-hr").unwrap();
    let Ok(QuickRequest::Fixed(query)) = question.request() else { panic!("expected fixed query") };
    assert_eq!(query.request().path, "/api/v1/players/592450/monthly-batting-stats");
    assert_eq!(query.category(), Category::MonthlyTrends);
}

#[test]
fn ask_preset_carries_text_and_season() {
    let question = find_quick_question("ask-ohtani-50-50").unwrap();
    match question.request().unwrap() {
        QuickRequest::Ask { query, season } => {
            assert!(query.contains("大谷"));
            assert_eq!(season, 2024);
        }
        QuickRequest::Fixed(_) => panic!("expected free-text preset"),
    }
}

#[test]
fn unknown_id_is_none() {
    assert!(find_quick_question("nope").is_none());
}

#[test]
fn presets_plan_like_builder_queries() {
    // a leaderboard preset matches what the builder would produce
    let question = find_quick_question("mlb-2024-era-leaders").unwrap();
    let Ok(QuickRequest::Fixed(preset)) = question.request() else { panic!("expected fixed query") };
    let mut state = crate::query::QueryState::default();
    state.category = Some(Category::PitchingLeaderboard);
    state.specific_year = 2024;
    state.metric_order = Some("era".to_owned());
    assert_eq!(plan_query(&state).unwrap(), preset);
}
