use super::*;
use serde_json::json;

#[test]
fn timeout_failure_yields_fixed_message_and_no_display() {
    let resp = StatsResponse::from_failure(&CallFailure::Timeout);
    assert_eq!(resp.answer, TIMEOUT_MESSAGE);
    assert!(!resp.is_chart);
    assert!(!resp.is_table);
    assert!(!resp.is_cards);
    assert!(resp.table_data.is_empty());
    assert!(resp.chart_config.is_none());
}

#[test]
fn other_failures_interpolate_error_text() {
    let resp = StatsResponse::from_failure(&CallFailure::Status(500));
    assert_eq!(resp.answer, "エラーが発生しました: HTTP error! status: 500");
    assert!(!resp.has_display());

    let resp = StatsResponse::from_failure(&CallFailure::Transport("Failed to fetch".to_owned()));
    assert_eq!(resp.answer, "エラーが発生しました: Failed to fetch");
}

#[test]
fn json_content_type_detection() {
    assert!(is_json_content_type(Some("application/json")));
    assert!(is_json_content_type(Some("application/json; charset=utf-8")));
    assert!(is_json_content_type(Some("application/problem+json")));
    assert!(!is_json_content_type(Some("text/plain")));
    assert!(!is_json_content_type(None));
}

#[test]
fn non_json_body_becomes_answer_text() {
    let resp = StatsResponse::from_outcome(decode_body(Some("text/plain"), "大谷選手の打率は.310です"));
    assert_eq!(resp.answer, "大谷選手の打率は.310です");
    assert!(!resp.has_display());
}

#[test]
fn invalid_json_body_is_decode_failure() {
    let outcome = decode_body(Some("application/json"), "{not json");
    assert!(matches!(outcome, Err(CallFailure::Decode(_))));
    let resp = StatsResponse::from_outcome(outcome);
    assert!(resp.answer.starts_with("エラーが発生しました: invalid response body"));
}

#[test]
fn camel_case_fields_pass_through() {
    let value = json!({
        "answer": "2024年の成績です",
        "isTable": true,
        "isTransposed": true,
        "tableData": [{"avg": 0.310, "hr": 54}],
        "columns": [{"key": "avg", "label": "打率"}, {"key": "hr", "label": "本塁打"}],
        "decimalColumns": ["avg"],
        "grouping": {"by": "season"},
    });
    let resp = StatsResponse::from_value(&value);
    assert_eq!(resp.answer, "2024年の成績です");
    assert!(resp.is_table);
    assert!(resp.is_transposed);
    assert_eq!(resp.table_data.len(), 1);
    assert_eq!(resp.columns, vec![ColumnDef::new("avg", "打率"), ColumnDef::new("hr", "本塁打")]);
    assert_eq!(resp.decimal_columns, vec!["avg".to_owned()]);
    assert_eq!(resp.grouping, Some(json!({"by": "season"})));
    assert!(!resp.is_chart);
}

#[test]
fn snake_case_fields_are_accepted() {
    let value = json!({
        "answer": "月別推移",
        "is_chart": true,
        "chart_type": "bar",
        "chart_data": [{"month": "4月", "value": 7}, {"label": "5月", "value": "9"}],
        "chart_config": {"title": "月別本塁打数", "y_axis_label": "本塁打", "color": "#ef4444", "kind": "bar"},
    });
    let resp = StatsResponse::from_value(&value);
    assert!(resp.is_chart);
    assert_eq!(resp.chart_type, Some(ChartKind::Bar));
    assert_eq!(resp.chart_data.len(), 2);
    assert_eq!(resp.chart_data[1], ChartPoint { month: "5月".to_owned(), value: 9.0 });
    let config = resp.chart_config.unwrap();
    assert_eq!(config.y_axis_label, "本塁打");
    assert_eq!(config.y_domain, None);
}

#[test]
fn malformed_fields_fall_back_to_defaults() {
    let value = json!({
        "answer": 42,
        "isTable": "yes",
        "tableData": "nope",
        "columns": [7, "team"],
        "chartData": [{"month": "4月"}],
    });
    let resp = StatsResponse::from_value(&value);
    assert_eq!(resp.answer, "");
    assert!(!resp.is_table);
    assert!(resp.table_data.is_empty());
    assert_eq!(resp.columns, vec![ColumnDef::new("team", "team")]);
    assert!(resp.chart_data.is_empty());
}

#[test]
fn bare_array_becomes_table() {
    let resp = StatsResponse::from_value(&json!([{"season": 2024, "hr": 54}]));
    assert!(resp.is_table);
    assert_eq!(resp.table_data.len(), 1);
}

#[test]
fn empty_array_and_null_mean_no_data() {
    assert_eq!(StatsResponse::from_value(&json!([])).answer, NO_DATA_MESSAGE);
    assert_eq!(StatsResponse::from_value(&Value::Null).answer, NO_DATA_MESSAGE);
}

#[test]
fn serializes_with_camel_case_keys() {
    let resp = StatsResponse { is_table: true, ..StatsResponse::text("ok") };
    let value = serde_json::to_value(&resp).unwrap();
    assert_eq!(value["isTable"], json!(true));
    assert_eq!(value["isChart"], json!(false));
    assert_eq!(value["answer"], json!("ok"));
}

#[test]
fn partial_chart_config_fills_missing_fields() {
    let resp = StatsResponse::from_value(&json!({
        "isChart": true,
        "chartType": "bar",
        "chartData": [{"month": "4月", "value": 3}],
        "chartConfig": {"title": "HR", "yAxisLabel": "本塁打"}
    }));
    assert_eq!(resp.chart_type, Some(ChartKind::Bar));
    let config = resp.chart_config.clone().unwrap();
    assert_eq!(config.title, "HR");
    assert_eq!(config.y_axis_label, "本塁打");
    assert_eq!(config.color, DEFAULT_COLOR);
    assert_eq!(config.y_domain, None);

    let drawn = resp.display_chart_config();
    assert_eq!(drawn.kind, ChartKind::Bar);
    assert_eq!(drawn.title, "HR");
}

#[test]
fn chart_type_overrides_default_config_kind() {
    let resp = StatsResponse::from_value(&json!({
        "isChart": true,
        "chartType": "bar",
        "chartData": [{"month": "5月", "value": 1}]
    }));
    assert!(resp.chart_config.is_none());
    let drawn = resp.display_chart_config();
    assert_eq!(drawn.kind, ChartKind::Bar);
    assert_eq!(drawn.title, "月別推移");

    let plain = StatsResponse::from_value(&json!({"isChart": true, "chartConfig": {}}));
    assert_eq!(plain.display_chart_config().kind, ChartKind::Line);
    assert_eq!(plain.display_chart_config().color, DEFAULT_COLOR);
}
