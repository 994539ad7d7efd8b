//! SVG geometry for month-by-month charts.

#[cfg(test)]
#[path = "chart_geometry_test.rs"]
mod chart_geometry_test;

use stats::response::ChartPoint;

pub const CHART_WIDTH: f64 = 640.0;
pub const CHART_HEIGHT: f64 = 320.0;
pub const PAD_LEFT: f64 = 56.0;
pub const PAD_RIGHT: f64 = 16.0;
pub const PAD_TOP: f64 = 16.0;
pub const PAD_BOTTOM: f64 = 40.0;
pub const TICK_COUNT: usize = 5;

/// Vertical value range. A fixed domain wins; otherwise the range starts at
/// zero (or the minimum, when negative) with ten percent of the span as
/// headroom above the maximum.
pub fn y_bounds(points: &[ChartPoint], domain: Option<[f64; 2]>) -> (f64, f64) {
    if let Some([lo, hi]) = domain.filter(|[lo, hi]| hi > lo) {
        return (lo, hi);
    }
    let max = points.iter().map(|p| p.value).fold(f64::NEG_INFINITY, f64::max);
    let min = points.iter().map(|p| p.value).fold(f64::INFINITY, f64::min);
    if !max.is_finite() {
        return (0.0, 1.0);
    }
    let lo = min.min(0.0);
    let hi = if max > lo { max + (max - lo) * 0.1 } else { lo + 1.0 };
    (lo, hi)
}

fn plot_width() -> f64 {
    CHART_WIDTH - PAD_LEFT - PAD_RIGHT
}

fn plot_height() -> f64 {
    CHART_HEIGHT - PAD_TOP - PAD_BOTTOM
}

/// Map a value to an SVG y coordinate, clamped to the plot area.
pub fn scale_y(value: f64, (lo, hi): (f64, f64)) -> f64 {
    let t = ((value - lo) / (hi - lo)).clamp(0.0, 1.0);
    PAD_TOP + plot_height() * (1.0 - t)
}

/// Center x of the `index`-th of `count` evenly spaced slots.
#[allow(clippy::cast_precision_loss)]
pub fn slot_x(index: usize, count: usize) -> f64 {
    let slot = plot_width() / count.max(1) as f64;
    PAD_LEFT + slot * (index as f64 + 0.5)
}

/// Width of one bar, leaving a gap between slots.
#[allow(clippy::cast_precision_loss)]
pub fn bar_width(count: usize) -> f64 {
    plot_width() / count.max(1) as f64 * 0.6
}

/// `(x, y)` coordinates of every point.
pub fn coordinates(points: &[ChartPoint], bounds: (f64, f64)) -> Vec<(f64, f64)> {
    points.iter().enumerate().map(|(i, p)| (slot_x(i, points.len()), scale_y(p.value, bounds))).collect()
}

/// SVG path data connecting the coordinates.
pub fn line_path(coords: &[(f64, f64)]) -> String {
    coords
        .iter()
        .enumerate()
        .map(|(i, (x, y))| format!("{}{x:.1} {y:.1}", if i == 0 { "M" } else { " L" }))
        .collect()
}

/// Bar rectangles as `(x, y, width, height)`.
pub fn bar_rects(points: &[ChartPoint], bounds: (f64, f64)) -> Vec<(f64, f64, f64, f64)> {
    let width = bar_width(points.len());
    let base = scale_y(bounds.0.max(0.0), bounds);
    points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let x = slot_x(i, points.len()) - width / 2.0;
            let y = scale_y(p.value, bounds);
            (x, y.min(base), width, (base - y).abs())
        })
        .collect()
}

/// Evenly spaced tick values from `lo` to `hi` inclusive.
#[allow(clippy::cast_precision_loss)]
pub fn ticks((lo, hi): (f64, f64)) -> Vec<f64> {
    (0..=TICK_COUNT).map(|i| lo + (hi - lo) * i as f64 / TICK_COUNT as f64).collect()
}
