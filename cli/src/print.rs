//! Plain-text rendering of response envelopes.

#[cfg(test)]
#[path = "print_test.rs"]
mod print_test;

use std::fmt::Write;

use stats::StatsResponse;
use stats::format::format_metric_value;
use stats::leaderboard::LeaderboardView;
use stats::plan::FixedQuery;
use stats::player::Player;
use stats::quick::QuickQuestion;
use stats::table::TableView;

const SAMPLE_NOTICE: &str = "[サンプルデータ]";

/// Render an envelope: answer text, then whichever data view it carries.
#[must_use]
pub fn render_response(resp: &StatsResponse, query: Option<&FixedQuery>) -> String {
    let mut out = String::new();
    if resp.is_sample_data {
        out.push_str(SAMPLE_NOTICE);
        out.push('\n');
    }
    let answer = resp.answer.trim();
    if !answer.is_empty() {
        out.push_str(answer);
        out.push('\n');
    }

    if let Some(FixedQuery::Leaderboard { kind, metric_order, .. }) = query {
        if resp.is_table {
            let view = LeaderboardView::build(resp, *kind, metric_order);
            if !view.is_empty() {
                out.push_str(&render_leaderboard(&view));
                return out;
            }
        }
    }

    if resp.is_cards && !resp.cards_data.is_empty() {
        let width = resp.cards_data.iter().map(|c| display_width(&c.label)).max().unwrap_or(0);
        if let Some(first) = resp.cards_data.first() {
            let _ = match first.season {
                Some(season) => writeln!(out, "{} ({season})", first.player_name),
                None => writeln!(out, "{}", first.player_name),
            };
        }
        for card in &resp.cards_data {
            let _ = writeln!(out, "  {}  {}", pad(&card.label, width), card.formatted);
        }
    } else if resp.is_chart && !resp.chart_data.is_empty() {
        let metric = resp.chart_config.as_ref().map(|c| c.y_axis_label.as_str()).unwrap_or_default();
        if let Some(config) = &resp.chart_config {
            let _ = writeln!(out, "{}", config.title);
        }
        for point in &resp.chart_data {
            let _ = writeln!(out, "  {}  {}", pad(&point.month, 4), chart_value(metric, point.value));
        }
    } else if resp.is_table {
        out.push_str(&render_table(&TableView::from_response(resp)));
    }
    out
}

/// Chart values keep the metric's precision when the label maps back to a
/// known metric; otherwise three decimals.
fn chart_value(label: &str, value: f64) -> String {
    stats::metrics::METRICS
        .iter()
        .find(|m| m.label == label)
        .map_or_else(|| format!("{value:.3}"), |m| format_metric_value(m.id, value))
}

#[must_use]
pub fn render_table(table: &TableView) -> String {
    if table.is_empty() {
        return String::new();
    }
    let columns = table.headers.len();
    let widths: Vec<usize> = (0..columns)
        .map(|i| {
            table
                .rows
                .iter()
                .filter_map(|row| row.get(i))
                .chain(table.headers.get(i))
                .map(|cell| display_width(cell))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let line = |cells: &[String]| {
        cells.iter().zip(&widths).map(|(cell, w)| pad(cell, *w)).collect::<Vec<_>>().join("  ").trim_end().to_owned()
    };

    let mut out = String::new();
    let _ = writeln!(out, "{}", line(&table.headers));
    let _ = writeln!(out, "{}", widths.iter().map(|w| "-".repeat(*w)).collect::<Vec<_>>().join("  "));
    for row in &table.rows {
        let _ = writeln!(out, "{}", line(row));
    }
    out
}

#[must_use]
pub fn render_leaderboard(view: &LeaderboardView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}（{}）", view.title, view.metric_label);
    let name_width = view.entries.iter().map(|e| display_width(&e.player_name)).max().unwrap_or(0);
    for entry in &view.entries {
        let _ = writeln!(
            out,
            "{:>3}. {}  {:<4} {}",
            entry.rank,
            pad(&entry.player_name, name_width),
            entry.team,
            entry.formatted
        );
    }
    out
}

#[must_use]
pub fn render_players(players: &[Player]) -> String {
    if players.is_empty() {
        return "該当する選手が見つかりません\n".to_owned();
    }
    players.iter().fold(String::new(), |mut out, p| {
        let _ = writeln!(out, "{:>8}  {}", p.id, p.display());
        out
    })
}

#[must_use]
pub fn render_quick_list(questions: &[QuickQuestion]) -> String {
    questions.iter().fold(String::new(), |mut out, q| {
        let _ = writeln!(out, "{:<24} {}", q.id, q.title);
        out
    })
}

/// Terminal columns: wide (CJK) characters take two.
fn display_width(s: &str) -> usize {
    s.chars().map(|c| if is_wide(c) { 2 } else { 1 }).sum()
}

fn is_wide(c: char) -> bool {
    matches!(u32::from(c), 0x1100..=0x115F | 0x2E80..=0xA4CF | 0xAC00..=0xD7A3 | 0xF900..=0xFAFF | 0xFE30..=0xFE4F | 0xFF00..=0xFF60 | 0xFFE0..=0xFFE6)
}

fn pad(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(display_width(s));
    format!("{s}{}", " ".repeat(fill))
}
