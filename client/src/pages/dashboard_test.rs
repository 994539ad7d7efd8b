use super::*;
use stats::player::Player;
use stats::query::{Category, QueryAction, QueryPatch, reduce};

fn ohtani() -> Player {
    Player::new(660_271, "大谷翔平", "LAD", "NL")
}

#[test]
fn plan_custom_query_without_category_explains_failure() {
    let err = plan_custom_query(&QueryState::default()).unwrap_err();
    assert!(err.answer.starts_with("クエリの実行中にエラーが発生しました"));
    assert!(!err.is_table && !err.is_chart && !err.is_cards);
}

#[test]
fn plan_custom_query_names_the_category_on_failure() {
    let state = reduce(QueryState::default(), QueryAction::Update(QueryPatch::category(Category::SeasonBatting)));
    let err = plan_custom_query(&state).unwrap_err();
    assert!(err.answer.starts_with(Category::SeasonBatting.label()));
}

#[test]
fn plan_custom_query_builds_fixed_query() {
    let mut state = QueryState::default();
    state.category = Some(Category::SeasonBatting);
    state.player = Some(ohtani());
    state.metrics = vec!["avg".to_owned(), "hr".to_owned()];
    let query = plan_custom_query(&state).unwrap();
    assert_eq!(query.category(), Category::SeasonBatting);
    assert_eq!(query.player().map(|p| p.id), Some(660_271));
}

#[test]
fn resolve_quick_question_finds_presets() {
    assert!(matches!(resolve_quick_question("ohtani-2024-batting"), Ok(QuickRequest::Fixed(_))));
    assert!(matches!(resolve_quick_question("ask-ohtani-50-50"), Ok(QuickRequest::Ask { .. })));
}

#[test]
fn resolve_quick_question_unknown_id_is_text_envelope() {
    let err = resolve_quick_question("missing").unwrap_err();
    assert_eq!(err.answer, UNKNOWN_PRESET);
}
