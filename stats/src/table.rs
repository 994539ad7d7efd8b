//! Display model for tabular results.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use serde_json::Value;

use crate::format::{MISSING, format_cell};
use crate::metrics;
use crate::response::{ColumnDef, StatsResponse};

/// Headers used for the transposed (label/value) layout.
pub const TRANSPOSED_HEADERS: [&str; 2] = ["項目", "値"];

/// Formatted table ready for markup or terminal output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableView {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub transposed: bool,
}

impl TableView {
    /// Build the view for a response.
    ///
    /// Columns come from the response, or from the first row's keys when the
    /// response names none. A single-row result is always transposed into
    /// one row per column.
    #[must_use]
    pub fn from_response(resp: &StatsResponse) -> Self {
        let columns = effective_columns(resp);
        let cell = |row: &serde_json::Map<String, Value>, col: &ColumnDef| {
            row.get(&col.key)
                .map_or_else(|| MISSING.to_owned(), |v| format_cell(&col.key, v, &resp.decimal_columns))
        };

        if let [row] = resp.table_data.as_slice() {
            return Self {
                headers: TRANSPOSED_HEADERS.iter().map(|h| (*h).to_owned()).collect(),
                rows: columns.iter().map(|col| vec![col.label.clone(), cell(row, col)]).collect(),
                transposed: true,
            };
        }

        Self {
            headers: columns.iter().map(|c| c.label.clone()).collect(),
            rows: resp.table_data.iter().map(|row| columns.iter().map(|col| cell(row, col)).collect()).collect(),
            transposed: false,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Response columns, or columns derived from the first row.
#[must_use]
pub fn effective_columns(resp: &StatsResponse) -> Vec<ColumnDef> {
    if !resp.columns.is_empty() {
        return resp.columns.clone();
    }
    resp.table_data
        .first()
        .map(|row| row.keys().map(|k| ColumnDef::new(k, metrics::column_label(k))).collect())
        .unwrap_or_default()
}
