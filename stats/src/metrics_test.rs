use super::*;

#[test]
fn metric_ids_are_unique() {
    for (i, a) in METRICS.iter().enumerate() {
        for b in &METRICS[i + 1..] {
            assert_ne!(a.id, b.id, "duplicate metric id");
        }
    }
}

#[test]
fn precision_buckets_match_stat_kind() {
    assert_eq!(lookup("avg").map(|m| m.precision), Some(Precision::Rate));
    assert_eq!(lookup("ops").map(|m| m.precision), Some(Precision::Rate));
    assert_eq!(lookup("era").map(|m| m.precision), Some(Precision::Average));
    assert_eq!(lookup("hr").map(|m| m.precision), Some(Precision::Count));
    assert_eq!(Precision::Rate.decimals(), 3);
    assert_eq!(Precision::Average.decimals(), 2);
    assert_eq!(Precision::Count.decimals(), 0);
}

#[test]
fn avg_monthly_chart_is_line_with_half_domain() {
    let config = monthly_chart_config("avg");
    assert_eq!(config.kind, ChartKind::Line);
    assert_eq!(config.y_domain, Some([0.0, 0.5]));
    assert_eq!(config.title, "月別打率推移");
    assert_eq!(config.color, "#2563eb");
}

#[test]
fn home_runs_monthly_chart_is_bar() {
    let config = monthly_chart_config("hr");
    assert_eq!(config.kind, ChartKind::Bar);
    assert_eq!(config.y_domain, None);
}

#[test]
fn unknown_metric_uses_default_chart_entry() {
    let config = monthly_chart_config("xwoba_plus");
    assert_eq!(config.title, "月別推移");
    assert_eq!(config.y_axis_label, "xwoba_plus");
    assert_eq!(config.color, DEFAULT_COLOR);
    assert_eq!(config.kind, ChartKind::Line);
}

#[test]
fn monthly_trends_only_offer_monthly_metrics() {
    let offered = metrics_for(Category::MonthlyTrends);
    assert!(!offered.is_empty());
    assert!(offered.iter().all(|m| m.monthly.is_some()));
    assert!(!offered.iter().any(|m| m.id == "war"));
}

#[test]
fn pitching_categories_exclude_batting_rates() {
    let offered = metrics_for(Category::SeasonPitching);
    assert!(offered.iter().any(|m| m.id == "era"));
    assert!(offered.iter().any(|m| m.id == "war"));
    assert!(!offered.iter().any(|m| m.id == "avg"));
}

#[test]
fn era_and_whip_rank_ascending() {
    assert!(lookup("era").is_some_and(|m| m.lower_is_better));
    assert!(lookup("whip").is_some_and(|m| m.lower_is_better));
    assert!(lookup("strikeouts").is_some_and(|m| !m.lower_is_better));
}

#[test]
fn column_label_prefers_metric_table() {
    assert_eq!(column_label("avg"), "打率");
    assert_eq!(column_label("season"), "シーズン");
    assert_eq!(column_label("mystery"), "mystery");
}
