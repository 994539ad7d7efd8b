//! Normalized response model shared by every result renderer.
//!
//! DESIGN
//! ======
//! Every backend call (free-text, fixed query, failure) ends up as one
//! `StatsResponse`. Decoding is lenient field by field: a malformed or
//! missing field falls back to its default instead of failing the whole
//! response, so the UI never distinguishes "error" from "text only".

#[cfg(test)]
#[path = "response_test.rs"]
mod response_test;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::CallFailure;
use crate::format::as_f64;
use crate::metrics::{DEFAULT_COLOR, monthly_chart_config};

/// Client-side request timeout in seconds.
pub const REQUEST_TIMEOUT_SECS: u64 = 60;

/// Answer shown when the client-side timeout elapses.
pub const TIMEOUT_MESSAGE: &str =
    "リクエストがタイムアウトしました（60秒）。時間をおいて再度お試しください。";

/// Answer shown when a fixed query returns no rows.
pub const NO_DATA_MESSAGE: &str = "該当するデータが見つかりませんでした。";

/// Answer prefix for any other failure.
#[must_use]
pub fn error_message(detail: &str) -> String {
    format!("エラーが発生しました: {detail}")
}

// =============================================================================
// DISPLAY PAYLOADS
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    #[default]
    Line,
    Bar,
}

/// Table column definition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDef {
    pub key: String,
    pub label: String,
}

impl ColumnDef {
    #[must_use]
    pub fn new(key: &str, label: &str) -> Self {
        Self { key: key.to_owned(), label: label.to_owned() }
    }
}

/// One point of a month-by-month series.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// Category axis label (`"4月"`).
    pub month: String,
    pub value: f64,
}

/// Styling for a chart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfig {
    #[serde(default)]
    pub title: String,
    #[serde(default, alias = "y_axis_label")]
    pub y_axis_label: String,
    #[serde(default, alias = "y_domain")]
    pub y_domain: Option<[f64; 2]>,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default)]
    pub kind: ChartKind,
}

fn default_color() -> String {
    DEFAULT_COLOR.to_owned()
}

/// Single-metric summary tile.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiCard {
    pub metric: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub value: Option<f64>,
    /// Value already formatted with the metric's precision.
    #[serde(default)]
    pub formatted: String,
    #[serde(default, alias = "player_name")]
    pub player_name: String,
    #[serde(default)]
    pub season: Option<u16>,
}

// =============================================================================
// RESPONSE
// =============================================================================

/// Normalized backend result.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StatsResponse {
    pub answer: String,
    pub is_table: bool,
    pub is_transposed: bool,
    pub table_data: Vec<Map<String, Value>>,
    pub columns: Vec<ColumnDef>,
    pub decimal_columns: Vec<String>,
    pub grouping: Option<Value>,
    pub stats: Option<Value>,
    pub is_chart: bool,
    pub chart_type: Option<ChartKind>,
    pub chart_data: Vec<ChartPoint>,
    pub chart_config: Option<ChartConfig>,
    pub is_cards: bool,
    pub cards_data: Vec<KpiCard>,
    /// Set when the chart shows the built-in sample series instead of data.
    pub is_sample_data: bool,
}

/// Decoded HTTP body.
#[derive(Clone, Debug, PartialEq)]
pub enum Payload {
    Json(Value),
    Text(String),
}

/// True for `application/json` and `*+json` content types.
#[must_use]
pub fn is_json_content_type(content_type: Option<&str>) -> bool {
    content_type.is_some_and(|ct| {
        let mime = ct.split(';').next().unwrap_or_default().trim().to_ascii_lowercase();
        mime == "application/json" || mime.ends_with("+json")
    })
}

/// Decode a successful body according to its content type.
///
/// # Errors
///
/// Returns [`CallFailure::Decode`] when a JSON content type carries invalid JSON.
pub fn decode_body(content_type: Option<&str>, body: &str) -> Result<Payload, CallFailure> {
    if is_json_content_type(content_type) {
        serde_json::from_str(body)
            .map(Payload::Json)
            .map_err(|e| CallFailure::Decode(e.to_string()))
    } else {
        Ok(Payload::Text(body.to_owned()))
    }
}

impl StatsResponse {
    /// Plain text answer with every display flag off.
    #[must_use]
    pub fn text(answer: impl Into<String>) -> Self {
        Self { answer: answer.into(), ..Self::default() }
    }

    /// Envelope for a failed call.
    #[must_use]
    pub fn from_failure(failure: &CallFailure) -> Self {
        match failure {
            CallFailure::Timeout => Self::text(TIMEOUT_MESSAGE),
            other => Self::text(error_message(&other.to_string())),
        }
    }

    /// Fold the outcome of a free-text call into an envelope.
    #[must_use]
    pub fn from_outcome(outcome: Result<Payload, CallFailure>) -> Self {
        match outcome {
            Ok(Payload::Json(value)) => Self::from_value(&value),
            Ok(Payload::Text(text)) => Self::text(text),
            Err(failure) => Self::from_failure(&failure),
        }
    }

    /// Lenient decode of a JSON body.
    ///
    /// Objects map field by field (camelCase or snake_case keys). A bare
    /// array of objects becomes a table, a bare string becomes the answer.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Object(obj) => Self::from_object(obj),
            Value::Array(items) => {
                let rows: Vec<Map<String, Value>> = items.iter().filter_map(|v| v.as_object().cloned()).collect();
                if rows.is_empty() {
                    return Self::text(NO_DATA_MESSAGE);
                }
                Self { is_table: true, table_data: rows, ..Self::default() }
            }
            Value::String(s) => Self::text(s.clone()),
            Value::Null => Self::text(NO_DATA_MESSAGE),
            other => Self::text(other.to_string()),
        }
    }

    fn from_object(obj: &Map<String, Value>) -> Self {
        let answer = field::<String>(obj, &["answer", "response", "message"]).unwrap_or_default();
        let table_data = obj
            .get("tableData")
            .or_else(|| obj.get("table_data"))
            .and_then(Value::as_array)
            .map(|rows| rows.iter().filter_map(|r| r.as_object().cloned()).collect())
            .unwrap_or_default();
        let chart_data = obj
            .get("chartData")
            .or_else(|| obj.get("chart_data"))
            .and_then(Value::as_array)
            .map(|points| points.iter().filter_map(chart_point).collect())
            .unwrap_or_default();
        let cards_data = obj
            .get("cardsData")
            .or_else(|| obj.get("cards_data"))
            .and_then(Value::as_array)
            .map(|cards| cards.iter().filter_map(|c| serde_json::from_value(c.clone()).ok()).collect())
            .unwrap_or_default();
        let columns = obj
            .get("columns")
            .and_then(Value::as_array)
            .map(|cols| cols.iter().filter_map(column_def).collect())
            .unwrap_or_default();

        Self {
            answer,
            is_table: field(obj, &["isTable", "is_table"]).unwrap_or(false),
            is_transposed: field(obj, &["isTransposed", "is_transposed"]).unwrap_or(false),
            table_data,
            columns,
            decimal_columns: field(obj, &["decimalColumns", "decimal_columns"]).unwrap_or_default(),
            grouping: obj.get("grouping").filter(|v| !v.is_null()).cloned(),
            stats: obj.get("stats").filter(|v| !v.is_null()).cloned(),
            is_chart: field(obj, &["isChart", "is_chart"]).unwrap_or(false),
            chart_type: field(obj, &["chartType", "chart_type"]),
            chart_data,
            chart_config: field(obj, &["chartConfig", "chart_config"]),
            is_cards: field(obj, &["isCards", "is_cards"]).unwrap_or(false),
            cards_data,
            is_sample_data: field(obj, &["isSampleData", "is_sample_data"]).unwrap_or(false),
        }
    }

    /// Chart styling to draw with: the decoded config (or the generic
    /// monthly one), with `chartType` taking precedence over its kind.
    #[must_use]
    pub fn display_chart_config(&self) -> ChartConfig {
        let mut config = self.chart_config.clone().unwrap_or_else(|| monthly_chart_config(""));
        if let Some(kind) = self.chart_type {
            config.kind = kind;
        }
        config
    }

    /// Whether any structured display mode is on.
    #[must_use]
    pub fn has_display(&self) -> bool {
        self.is_table || self.is_chart || self.is_cards
    }
}

/// First key in `keys` whose value deserializes as `T`.
fn field<T: DeserializeOwned>(obj: &Map<String, Value>, keys: &[&str]) -> Option<T> {
    keys.iter()
        .filter_map(|key| obj.get(*key))
        .find_map(|value| serde_json::from_value(value.clone()).ok())
}

fn chart_point(value: &Value) -> Option<ChartPoint> {
    let obj = value.as_object()?;
    let month = ["month", "label", "x"].iter().find_map(|k| match obj.get(*k)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })?;
    let value = ["value", "y"].iter().find_map(|k| obj.get(*k).and_then(as_f64))?;
    Some(ChartPoint { month, value })
}

fn column_def(value: &Value) -> Option<ColumnDef> {
    match value {
        Value::String(key) => Some(ColumnDef::new(key, key)),
        Value::Object(obj) => {
            let key = obj.get("key").or_else(|| obj.get("field")).and_then(Value::as_str)?;
            let label = obj
                .get("label")
                .or_else(|| obj.get("title"))
                .and_then(Value::as_str)
                .unwrap_or(key);
            Some(ColumnDef::new(key, label))
        }
        _ => None,
    }
}
