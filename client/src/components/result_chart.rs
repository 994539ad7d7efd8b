//! Month-by-month chart drawn as inline SVG.

use leptos::prelude::*;
use stats::format::format_fixed;
use stats::response::{ChartConfig, ChartKind, ChartPoint};

use crate::util::chart_geometry::{
    CHART_HEIGHT, CHART_WIDTH, PAD_BOTTOM, PAD_LEFT, bar_rects, coordinates, line_path, scale_y, slot_x, ticks,
    y_bounds,
};

fn tick_label(value: f64, hi: f64) -> String {
    let decimals = if hi <= 1.0 { 3 } else if hi <= 10.0 { 2 } else { 0 };
    format_fixed(value, decimals)
}

#[component]
pub fn ResultChart(points: Vec<ChartPoint>, config: ChartConfig) -> impl IntoView {
    let bounds = y_bounds(&points, config.y_domain);
    let count = points.len();
    let baseline = CHART_HEIGHT - PAD_BOTTOM;
    let color = config.color.clone();

    let grid = ticks(bounds)
        .into_iter()
        .map(|t| {
            let y = scale_y(t, bounds);
            view! {
                <g class="result-chart__tick">
                    <line x1=PAD_LEFT x2=CHART_WIDTH y1=y y2=y stroke="#e5e7eb"/>
                    <text x={PAD_LEFT - 6.0} y={y + 4.0} text-anchor="end">{tick_label(t, bounds.1)}</text>
                </g>
            }
        })
        .collect::<Vec<_>>();

    let labels = points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            view! {
                <text x={slot_x(i, count)} y={baseline + 20.0} text-anchor="middle">{p.month.clone()}</text>
            }
        })
        .collect::<Vec<_>>();

    let series = match config.kind {
        ChartKind::Bar => bar_rects(&points, bounds)
            .into_iter()
            .map(|(x, y, w, h)| view! { <rect x=x y=y width=w height=h fill={color.clone()}/> })
            .collect::<Vec<_>>()
            .into_any(),
        ChartKind::Line => {
            let coords = coordinates(&points, bounds);
            let path = line_path(&coords);
            view! {
                <path d=path fill="none" stroke={color.clone()} stroke-width="2"/>
                {coords
                    .into_iter()
                    .map(|(x, y)| view! { <circle cx=x cy=y r="4" fill={color.clone()}/> })
                    .collect::<Vec<_>>()}
            }
            .into_any()
        }
    };

    view! {
        <figure class="result-chart">
            <figcaption class="result-chart__title">{config.title}</figcaption>
            <svg
                class="result-chart__svg"
                viewBox={format!("0 0 {CHART_WIDTH} {CHART_HEIGHT}")}
                role="img"
                aria-label={config.y_axis_label.clone()}
            >
                {grid}
                <line x1=PAD_LEFT x2=CHART_WIDTH y1=baseline y2=baseline stroke="#9ca3af"/>
                {series}
                {labels}
            </svg>
            <p class="result-chart__axis">{config.y_axis_label}</p>
        </figure>
    }
}
