use super::*;

// =============================================================
// Helpers
// =============================================================

fn ohtani() -> Player {
    Player::new(660_271, "Shohei Ohtani", "LAD", "NL")
}

fn with_category(category: Category) -> QueryState {
    reduce(QueryState::default(), QueryAction::Update(QueryPatch::category(category)))
}

fn custom_splits() -> QueryState {
    let state = with_category(Category::BattingSplits);
    let state = reduce(state, QueryAction::Update(QueryPatch::player(Some(ohtani()))));
    reduce(state, QueryAction::Update(QueryPatch::split_type(SplitType::Custom)))
}

// =============================================================
// Layouts
// =============================================================

#[test]
fn default_state_starts_at_step_one_with_fallback_layout() {
    let state = QueryState::default();
    assert_eq!(state.step, 1);
    assert_eq!(state.step_count(), 5);
    assert_eq!(state.current_step(), StepKind::Category);
    assert_eq!(state.season(), Some(DEFAULT_SEASON));
}

#[test]
fn step_counts_follow_category_and_split() {
    assert_eq!(with_category(Category::SeasonBatting).step_count(), 5);
    assert_eq!(with_category(Category::PitchingLeaderboard).step_count(), 5);
    assert_eq!(with_category(Category::BattingSplits).step_count(), 6);
    assert_eq!(custom_splits().step_count(), 7);
}

#[test]
fn leaderboard_layout_replaces_player_with_league() {
    let state = with_category(Category::BattingLeaderboard);
    assert_eq!(state.step_kind(2), Some(StepKind::League));
    assert_eq!(state.step_kind(4), Some(StepKind::SortMetric));
}

#[test]
fn step_kind_out_of_range_is_none() {
    let state = with_category(Category::SeasonBatting);
    assert_eq!(state.step_kind(0), None);
    assert_eq!(state.step_kind(6), None);
    assert!(!state.is_step_complete(0));
    assert!(!state.is_step_complete(9));
}

// =============================================================
// Completion predicates
// =============================================================

#[test]
fn player_step_requires_player_for_non_leaderboards() {
    for category in Category::ALL.into_iter().filter(|c| !c.is_leaderboard()) {
        let state = with_category(category);
        assert!(!state.is_step_complete(2), "{category:?} without player");
        let state = reduce(state, QueryAction::Update(QueryPatch::player(Some(ohtani()))));
        assert!(state.is_step_complete(2), "{category:?} with player");
    }
}

#[test]
fn player_step_is_unconditional_for_leaderboards() {
    for category in [Category::BattingLeaderboard, Category::PitchingLeaderboard] {
        let state = with_category(category);
        assert!(state.player.is_none());
        assert!(state.is_step_complete(2));
    }
}

#[test]
fn custom_situation_step_requires_any_condition() {
    let state = custom_splits();
    assert_eq!(state.step_kind(4), Some(StepKind::CustomSituation));
    assert!(!state.is_step_complete(4));

    let setters: [fn(&mut CustomSituation); 6] = [
        |s| s.toggle_inning(9),
        |s| s.set_strikes(Some(2)),
        |s| s.set_balls(Some(0)),
        |s| s.pitcher_type = Some(PitcherType::Lhp),
        |s| s.toggle_runner(RunnerState::Loaded),
        |s| s.toggle_pitch_type("SL"),
    ];
    for set in setters {
        let mut situation = CustomSituation::default();
        set(&mut situation);
        let next = reduce(state.clone(), QueryAction::Update(QueryPatch::situation(situation)));
        assert!(next.is_step_complete(4));
    }
}

#[test]
fn season_step_is_always_complete() {
    let state = with_category(Category::SeasonBatting);
    assert!(state.is_step_complete(3));
    let all = reduce(state, QueryAction::Update(QueryPatch::season(SeasonMode::All, 2020)));
    assert!(all.is_step_complete(3));
}

#[test]
fn metrics_step_uses_sort_metric_for_leaderboards() {
    let state = with_category(Category::BattingLeaderboard);
    assert!(!state.is_step_complete(4));
    let state = reduce(state, QueryAction::Update(QueryPatch::metric_order(Some("ops".to_owned()))));
    assert!(state.is_step_complete(4));
    assert!(state.is_ready());
}

#[test]
fn is_step_complete_is_idempotent() {
    let state = custom_splits();
    let first: Vec<bool> = (0..=8).map(|n| state.is_step_complete(n)).collect();
    let second: Vec<bool> = (0..=8).map(|n| state.is_step_complete(n)).collect();
    assert_eq!(first, second);
    assert_eq!(state, custom_splits());
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn advance_blocked_until_step_complete() {
    let state = reduce(QueryState::default(), QueryAction::Advance);
    assert_eq!(state.step, 1);

    let state = reduce(with_category(Category::SeasonBatting), QueryAction::Advance);
    assert_eq!(state.step, 2);
    let state = reduce(state, QueryAction::Advance);
    assert_eq!(state.step, 2, "player missing");
}

#[test]
fn full_walk_reaches_preview() {
    let mut state = with_category(Category::SeasonBatting);
    state = reduce(state, QueryAction::Advance);
    state = reduce(state, QueryAction::Update(QueryPatch::player(Some(ohtani()))));
    state = reduce(state, QueryAction::Advance);
    state = reduce(state, QueryAction::Advance);
    state = reduce(state, QueryAction::ToggleMetric("avg".to_owned()));
    state = reduce(state, QueryAction::Advance);
    assert_eq!(state.current_step(), StepKind::Preview);
    assert!(state.is_ready());

    let state = reduce(state, QueryAction::Advance);
    assert_eq!(state.step, 5, "cannot advance past preview");
}

#[test]
fn back_is_always_allowed_and_floors_at_one() {
    let state = QueryState { step: 3, ..with_category(Category::SeasonBatting) };
    let state = reduce(state, QueryAction::Back);
    assert_eq!(state.step, 2);
    let state = reduce(reduce(state, QueryAction::Back), QueryAction::Back);
    assert_eq!(state.step, 1);
}

#[test]
fn jump_forward_requires_completed_prefix() {
    let state = with_category(Category::SeasonBatting);
    let blocked = reduce(state.clone(), QueryAction::JumpTo(4));
    assert_eq!(blocked.step, 1);

    let ready = reduce(state, QueryAction::Update(QueryPatch::player(Some(ohtani()))));
    let jumped = reduce(ready, QueryAction::JumpTo(4));
    assert_eq!(jumped.step, 4);
    let back = reduce(jumped, QueryAction::JumpTo(2));
    assert_eq!(back.step, 2);
}

#[test]
fn changing_category_primes_dependents() {
    let mut state = custom_splits();
    let mut situation = CustomSituation::default();
    situation.toggle_inning(7);
    state = reduce(state, QueryAction::Update(QueryPatch::situation(situation)));
    state = reduce(state, QueryAction::ToggleMetric("avg".to_owned()));
    state.step = 6;

    let state = reduce(state, QueryAction::Update(QueryPatch::category(Category::BattingLeaderboard)));
    assert_eq!(state.category, Some(Category::BattingLeaderboard));
    assert!(state.player.is_none());
    assert!(state.metrics.is_empty());
    assert!(state.split_type.is_none());
    assert!(state.custom_situation.is_empty());
    assert_eq!(state.step, 5, "clamped to new layout");
}

#[test]
fn reselecting_same_category_keeps_selection() {
    let state = with_category(Category::SeasonBatting);
    let state = reduce(state, QueryAction::Update(QueryPatch::player(Some(ohtani()))));
    let state = reduce(state, QueryAction::ToggleMetric("ops".to_owned()));
    let state = reduce(state, QueryAction::Update(QueryPatch::category(Category::SeasonBatting)));
    assert!(state.player.is_some());
    assert_eq!(state.metrics, vec!["ops".to_owned()]);
}

#[test]
fn non_leaderboard_category_change_keeps_player() {
    let state = with_category(Category::SeasonBatting);
    let state = reduce(state, QueryAction::Update(QueryPatch::player(Some(ohtani()))));
    let state = reduce(state, QueryAction::Update(QueryPatch::category(Category::MonthlyTrends)));
    assert_eq!(state.player, Some(ohtani()));
}

#[test]
fn leaving_custom_split_clears_situation() {
    let mut situation = CustomSituation::default();
    situation.set_strikes(Some(2));
    let state = reduce(custom_splits(), QueryAction::Update(QueryPatch::situation(situation)));
    let state = reduce(state, QueryAction::Update(QueryPatch::split_type(SplitType::Risp)));
    assert!(state.custom_situation.is_empty());
    assert_eq!(state.step_count(), 6);
}

#[test]
fn toggle_metric_adds_and_removes() {
    let state = with_category(Category::SeasonBatting);
    let state = reduce(state, QueryAction::ToggleMetric("avg".to_owned()));
    let state = reduce(state, QueryAction::ToggleMetric("ops".to_owned()));
    assert_eq!(state.metrics, vec!["avg".to_owned(), "ops".to_owned()]);
    let state = reduce(state, QueryAction::ToggleMetric("avg".to_owned()));
    assert_eq!(state.metrics, vec!["ops".to_owned()]);
}

#[test]
fn toggle_metric_replaces_for_monthly_trends() {
    let state = with_category(Category::MonthlyTrends);
    let state = reduce(state, QueryAction::ToggleMetric("avg".to_owned()));
    let state = reduce(state, QueryAction::ToggleMetric("hr".to_owned()));
    assert_eq!(state.metrics, vec!["hr".to_owned()]);
}

#[test]
fn patch_metrics_are_deduplicated_in_order() {
    let patch = QueryPatch {
        metrics: Some(vec!["ops".to_owned(), "avg".to_owned(), "ops".to_owned()]),
        ..QueryPatch::default()
    };
    let state = reduce(with_category(Category::SeasonBatting), QueryAction::Update(patch));
    assert_eq!(state.metrics, vec!["ops".to_owned(), "avg".to_owned()]);
}

#[test]
fn reset_returns_initial_state() {
    let state = reduce(custom_splits(), QueryAction::Reset);
    assert_eq!(state, QueryState::default());
}

// =============================================================
// CustomSituation
// =============================================================

#[test]
fn situation_setters_reject_out_of_range_values() {
    let mut situation = CustomSituation::default();
    situation.toggle_inning(0);
    situation.toggle_inning(10);
    situation.set_strikes(Some(3));
    situation.set_balls(Some(4));
    assert!(situation.is_empty());
}

#[test]
fn situation_toggles_are_reversible() {
    let mut situation = CustomSituation::default();
    situation.toggle_inning(8);
    situation.toggle_runner(RunnerState::Second);
    situation.toggle_pitch_type("FF");
    assert!(!situation.is_empty());
    situation.toggle_inning(8);
    situation.toggle_runner(RunnerState::Second);
    situation.toggle_pitch_type("FF");
    assert!(situation.is_empty());
}

#[test]
fn situation_describe_lists_conditions() {
    let mut situation = CustomSituation::default();
    situation.toggle_inning(9);
    situation.toggle_inning(8);
    situation.set_balls(Some(3));
    situation.set_strikes(Some(2));
    situation.pitcher_type = Some(PitcherType::Lhp);
    assert_eq!(situation.describe(), vec!["8・9回", "カウント 3-2", "対左投手"]);
}

#[test]
fn preview_rows_cover_leaderboard_fields() {
    let state = with_category(Category::PitchingLeaderboard);
    let state = reduce(state, QueryAction::Update(QueryPatch::league(League::Al)));
    let state = reduce(state, QueryAction::Update(QueryPatch::metric_order(Some("era".to_owned()))));
    let rows = state.preview_rows();
    assert!(rows.contains(&("リーグ", "ア・リーグ".to_owned())));
    assert!(rows.contains(&("並び順", "防御率".to_owned())));
    assert!(!rows.iter().any(|(label, _)| *label == "選手"));
}

#[test]
fn category_serializes_to_wire_id() {
    for category in Category::ALL {
        let json = serde_json::to_string(&category).unwrap();
        assert_eq!(json, format!("\"{}\"", category.id()));
    }
}
